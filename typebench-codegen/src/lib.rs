// Typebench Codegen Library
// Renders the synthetic benchmark program and writes it to disk

pub mod emit;
pub mod error;

pub use emit::*;
pub use error::*;

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
