pub mod convert;
pub mod shape;
pub mod types;

pub use shape::Shape;
pub use types::Value;
