//! Runtime values.
//!
//! Values are immutable once built and cheap to clone; `Object` payloads sit
//! behind `Arc` so compiled functions stay `Send + Sync`.

use std::fmt;
use std::sync::Arc;

use lens_types::{Name, TypeId};
use rustc_hash::FxHashMap;

/// A typed object: a catalog type plus its field/property values, keyed by
/// interned member name.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub ty: TypeId,
    pub fields: FxHashMap<Name, Value>,
}

impl ObjectValue {
    /// Look up a field or property value by interned name.
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.fields.get(&name)
    }
}

/// Runtime value union.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// No value (void results, empty loop results).
    Unit,
    /// Absent reference (the zero value of reference kinds).
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
    List(Vec<Value>),
    Object(Arc<ObjectValue>),
}

impl Value {
    /// Build a string value.
    pub fn string(s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    /// Build a list value.
    pub fn list(items: Vec<Value>) -> Value {
        Value::List(items)
    }

    /// Build a typed object value.
    pub fn object(ty: TypeId, fields: impl IntoIterator<Item = (Name, Value)>) -> Value {
        Value::Object(Arc::new(ObjectValue {
            ty,
            fields: fields.into_iter().collect(),
        }))
    }

    /// Kind name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    /// Truthiness: `Bool(true)` only. Conditions must be booleans.
    pub fn is_truthy(&self) -> bool {
        matches!(self, Value::Bool(true))
    }

    /// Value-side twin of the catalog's numeric classification.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write!(f, "<object #{}>", obj.ty.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_types::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn truthiness_is_strict_boolean() {
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(1).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn numeric_values() {
        assert!(Value::Int(3).is_numeric());
        assert!(Value::Float(0.5).is_numeric());
        assert!(!Value::Bool(true).is_numeric());
        assert!(!Value::string("3").is_numeric());
    }

    #[test]
    fn object_field_lookup() {
        let mut catalog = Catalog::new();
        let widget = catalog.class("Widget", None);
        let size = catalog.intern("Size");
        let obj = Value::object(widget, [(size, Value::Int(7))]);

        let Value::Object(obj) = obj else {
            panic!("expected object");
        };
        assert_eq!(obj.get(size), Some(&Value::Int(7)));
        assert_eq!(obj.get(catalog.intern("Missing")), None);
    }

    #[test]
    fn display_renders_lists() {
        let v = Value::list(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(v.to_string(), "[1, 2]");
    }
}
