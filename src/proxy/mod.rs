pub mod conversion;
pub mod definition;
pub mod tree;

pub use conversion::*;
pub use definition::*;
