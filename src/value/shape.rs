use crate::value::Value;

/// Classification tag that determines how a value is traversed and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Primitive,
    Sequence,
    Record,
    PairCollection,
    SetCollection,
    Opaque,
}

impl Shape {
    /// True for shapes that have children to recurse into.
    pub fn is_composite(&self) -> bool {
        !matches!(self, Shape::Primitive | Shape::Opaque)
    }
}

impl Value {
    /// Total classification: every value maps to exactly one shape tag,
    /// with `Opaque` as the catch-all.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Str(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Bool(_)
            | Value::Null
            | Value::Sym(_) => Shape::Primitive,
            Value::Seq(_) => Shape::Sequence,
            Value::Record(_) => Shape::Record,
            Value::Map(_) => Shape::PairCollection,
            Value::Set(_) => Shape::SetCollection,
            Value::Opaque(_) => Shape::Opaque,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.shape().is_composite()
    }
}
