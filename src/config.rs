//! Configuration types for trim operations

use crate::error::{Result, TrimError};

/// Default alpha threshold: any pixel that is not fully transparent counts as content
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 0;

/// Configuration for trim operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimConfig {
    /// Pixels with alpha strictly greater than this value are content.
    ///
    /// Values at or below the threshold are treated as padding. The default of 0
    /// keeps partially transparent edge pixels inside the box.
    pub alpha_threshold: u8,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        }
    }
}

impl TrimConfig {
    /// Create a new configuration builder for fluent API construction
    ///
    /// # Examples
    ///
    /// ```rust
    /// use imgtrim::TrimConfig;
    ///
    /// let config = TrimConfig::builder()
    ///     .alpha_threshold(16)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.alpha_threshold, 16);
    /// ```
    #[must_use]
    pub fn builder() -> TrimConfigBuilder {
        TrimConfigBuilder::default()
    }

    /// Validate configuration parameters
    ///
    /// # Validation Rules
    ///
    /// - Alpha threshold: 0-254 (at 255 no pixel could ever count as content)
    ///
    /// # Errors
    /// - Invalid alpha threshold
    pub fn validate(&self) -> Result<()> {
        if self.alpha_threshold == u8::MAX {
            return Err(TrimError::config_value_error(
                "alpha threshold",
                self.alpha_threshold,
                "0-254",
                Some(DEFAULT_ALPHA_THRESHOLD),
            ));
        }

        Ok(())
    }
}

/// Builder for `TrimConfig`
#[derive(Debug, Default)]
pub struct TrimConfigBuilder {
    config: TrimConfig,
}

impl TrimConfigBuilder {
    /// Set the alpha threshold
    #[must_use]
    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.config.alpha_threshold = threshold;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// - Configuration validation failures
    pub fn build(self) -> Result<TrimConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
