pub mod candidate;
pub mod error;
pub mod payload;

pub use candidate::*;
pub use error::{Error, Result};
pub use payload::*;
