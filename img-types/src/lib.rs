pub mod error;
pub mod header;
pub mod metadata;
pub mod sample;
pub mod type_code;

pub use error::*;
pub use header::*;
pub use metadata::*;
pub use sample::*;
pub use type_code::*;
