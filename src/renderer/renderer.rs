use crate::renderer::traits::*;
use crate::value::Value;

/// Entry point wrapping the recursive [`Render`] machinery behind a single
/// call. Options are normalized once at construction.
pub struct Inspector {
    options: InspectOptions,
}

impl Inspector {
    pub fn new(options: InspectOptions) -> Self {
        Self {
            options: options.normalized(),
        }
    }

    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    /// Renders one value. A fresh [`RenderContext`] is created per call, so
    /// independent calls never share depth or cycle-detection state, and the
    /// input value is left untouched.
    pub fn inspect(&self, value: &Value) -> String {
        let mut context = RenderContext::new();
        value.render(&self.options, &mut context)
    }
}

/// Renders a value with the default options.
pub fn inspect(value: &Value) -> String {
    Inspector::new(InspectOptions::default()).inspect(value)
}

/// Renders a value with the given options (normalized first).
pub fn inspect_with(value: &Value, options: &InspectOptions) -> String {
    Inspector::new(options.clone()).inspect(value)
}
