//! imgtrim CLI Tool
//!
//! Command-line interface that trims transparent padding from an image.

#[cfg(feature = "cli")]
use imgtrim::cli;

#[cfg(feature = "cli")]
fn main() -> std::process::ExitCode {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
