// Typebench Runner Library
// Invokes the external compiler on a generated file and times the call

pub mod check;
pub mod error;

pub use check::*;
pub use error::*;

// Version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
