pub mod config;
mod curve;
mod document;
mod error;

pub use curve::*;
pub use document::*;
pub use error::*;
