//! Service layer for separating I/O concerns from trim logic

pub mod format;
pub mod io;

pub use format::OutputFormatHandler;
pub use io::ImageIOService;
