use std::cell::RefCell;
use std::rc::Rc;

/// An inspectable value.
///
/// Composite variants hold their payload behind `Rc<RefCell<..>>` so a value
/// graph can share nodes or reference itself; the inspector uses the `Rc`
/// pointer as the node's identity when detecting cycles.
#[derive(Debug, Clone)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// The absent-value sentinel, rendered as `null`.
    Null,
    /// A symbol-like atom, rendered as `Symbol(name)`.
    Sym(String),
    /// Ordered, indexable collection of values.
    Seq(Rc<RefCell<Vec<Value>>>),
    /// Named string fields in insertion order.
    Record(Rc<RefCell<Vec<(String, Value)>>>),
    /// Key-value entries in insertion order; keys may be any value.
    Map(Rc<RefCell<Vec<(Value, Value)>>>),
    /// Unique elements in insertion order.
    Set(Rc<RefCell<Vec<Value>>>),
    /// Catch-all for foreign values, rendered via its stored string form.
    Opaque(String),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Value::Sym(name.into())
    }

    pub fn opaque(repr: impl Into<String>) -> Self {
        Value::Opaque(repr.into())
    }

    pub fn seq(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        let fields = fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Value::Record(Rc::new(RefCell::new(fields)))
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    /// Builds a set, keeping the first occurrence of each element under
    /// [`Value::same_value`].
    pub fn set(elems: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for elem in elems {
            if !unique.iter().any(|existing| existing.same_value(&elem)) {
                unique.push(elem);
            }
        }
        Value::Set(Rc::new(RefCell::new(unique)))
    }

    /// Appends to a `Seq`, or inserts into a `Set` if the element is not
    /// already present. Has no effect on other shapes.
    pub fn push(&self, item: Value) {
        match self {
            Value::Seq(items) => items.borrow_mut().push(item),
            Value::Set(elems) => {
                let mut elems = elems.borrow_mut();
                if !elems.iter().any(|existing| existing.same_value(&item)) {
                    elems.push(item);
                }
            }
            _ => {}
        }
    }

    /// Appends a field to a `Record`. Has no effect on other shapes.
    pub fn insert_field(&self, key: impl Into<String>, value: Value) {
        if let Value::Record(fields) = self {
            fields.borrow_mut().push((key.into(), value));
        }
    }

    /// Appends an entry to a `Map`. Has no effect on other shapes.
    pub fn insert_entry(&self, key: Value, value: Value) {
        if let Value::Map(entries) = self {
            entries.borrow_mut().push((key, value));
        }
    }

    /// The equality notion used for set uniqueness: primitives compare
    /// structurally (NaN equal to NaN), composites compare by node identity.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Sym(a), Value::Sym(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b),
            (Value::Record(a), Value::Record(b)) => Rc::ptr_eq(a, b),
            (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
            (Value::Set(a), Value::Set(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Identity of a composite node, used for cycle detection. Primitives
    /// are copied, never aliased, so they have no identity.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Seq(rc) | Value::Set(rc) => Some(Rc::as_ptr(rc) as *const u8 as usize),
            Value::Record(rc) => Some(Rc::as_ptr(rc) as *const u8 as usize),
            Value::Map(rc) => Some(Rc::as_ptr(rc) as *const u8 as usize),
            _ => None,
        }
    }
}
