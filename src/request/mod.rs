//! The report request descriptor and its wire enums.

pub mod descriptor;
pub mod types;

pub use self::descriptor::*;
pub use self::types::*;
