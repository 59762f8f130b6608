use serde::{Deserialize, Serialize};

/// Smallest accepted `break_length`; smaller values are clamped, not rejected.
pub const MIN_BREAK_LENGTH: usize = 8;

/// Per-call rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectOptions {
    /// Emit ANSI color styling around token categories.
    pub colors: bool,
    /// Maximum recursion depth for composite values; `None` is unbounded.
    /// Primitives render fully at any depth.
    pub depth: Option<usize>,
    /// Preferred maximum line width before a composite switches to
    /// multi-line layout.
    pub break_length: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            colors: false,
            depth: Some(2),
            break_length: 80,
        }
    }
}

impl InspectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn unbounded_depth(mut self) -> Self {
        self.depth = None;
        self
    }

    pub fn with_break_length(mut self, break_length: usize) -> Self {
        self.break_length = break_length;
        self
    }

    /// Repairs out-of-range fields instead of rejecting them, so the
    /// inspector never fails on a malformed configuration.
    pub fn normalized(&self) -> Self {
        Self {
            break_length: self.break_length.max(MIN_BREAK_LENGTH),
            ..self.clone()
        }
    }
}

/// Mutable state threaded through one top-level inspection call: the current
/// depth counter and the identities of composite nodes on the recursion path.
///
/// A context is created at call entry and dropped at return; two calls never
/// share one.
#[derive(Debug)]
pub struct RenderContext {
    depth: usize,
    visited: Vec<usize>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            depth: 0,
            visited: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether a node identity is already on the current recursion path.
    pub fn seen(&self, id: usize) -> bool {
        self.visited.contains(&id)
    }

    pub fn enter(&mut self, id: Option<usize>) {
        if let Some(id) = id {
            self.visited.push(id);
        }
        self.depth += 1;
    }

    /// Pops the path entry pushed by the matching `enter`, so sibling
    /// branches may reuse the same node without tripping cycle detection.
    pub fn leave(&mut self, id: Option<usize>) {
        self.depth -= 1;
        if id.is_some() {
            self.visited.pop();
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait.
pub trait Render {
    fn render(&self, options: &InspectOptions, context: &mut RenderContext) -> String;
}
