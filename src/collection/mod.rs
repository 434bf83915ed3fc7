pub mod builder;
pub mod document;

pub use builder::*;
pub use document::*;
