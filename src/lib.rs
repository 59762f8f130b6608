//! # vinspect
//!
//! A structured value inspector: converts an in-memory [`Value`] into a
//! deterministic, human-readable string, optionally annotated with ANSI
//! color styling.
//!
//! Inspection never fails: unrecognized shapes degrade to an opaque string
//! form, depth limits substitute elision placeholders, and self-referential
//! graphs render a `[Circular]` marker instead of recursing forever.
//!
//! ```
//! use vinspect::{inspect, Value};
//!
//! let value = Value::record(vec![
//!     ("name", Value::from("ada")),
//!     ("tags", Value::seq(vec![Value::from("math"), Value::from("code")])),
//! ]);
//! assert_eq!(inspect(&value), "{ name: 'ada', tags: [ 'math', 'code' ] }");
//! ```

pub mod renderer;
pub mod value;

pub use renderer::{
    inspect, inspect_with, strip_styles, InspectOptions, Inspector, Render, RenderContext,
};
pub use value::{Shape, Value};
