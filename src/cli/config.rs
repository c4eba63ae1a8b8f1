//! CLI configuration conversion
//!
//! Converts CLI arguments into a `TrimConfig`.

use super::main_impl::Cli;
use crate::{config::TrimConfig, error::Result};

/// Builds a `TrimConfig` from parsed CLI arguments
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Convert CLI arguments to a validated `TrimConfig`
    pub(crate) fn from_cli(cli: &Cli) -> Result<TrimConfig> {
        TrimConfig::builder()
            .alpha_threshold(cli.alpha_threshold)
            .build()
    }
}
