//! Zero-value computation for catalog types.
//!
//! Two variants with one deliberate difference: on a nullable wrapper,
//! `default_value` unwraps one level and zeroes the wrapped value kind,
//! while `system_default_value` yields the absent value (the `default(T)`
//! reading). Both fail with `InvalidArgument` on unbound definitions.

use lens_types::{Catalog, MemberKind, Primitive, QueryError, TypeId, TypeShape};

use crate::value::Value;

#[derive(Copy, Clone, Eq, PartialEq)]
enum NullableMode {
    /// Unwrap one nullable level and zero the wrapped kind.
    UnwrapZero,
    /// A nullable wrapper defaults to the absent value.
    Absent,
}

/// Zero value of `t`, unwrapping one level of nullable.
pub fn default_value(catalog: &Catalog, t: TypeId) -> Result<Value, QueryError> {
    compute(catalog, t, NullableMode::UnwrapZero)
}

/// Zero value of `t`; nullable wrappers yield the absent value.
pub fn system_default_value(catalog: &Catalog, t: TypeId) -> Result<Value, QueryError> {
    compute(catalog, t, NullableMode::Absent)
}

fn compute(catalog: &Catalog, t: TypeId, mode: NullableMode) -> Result<Value, QueryError> {
    match &catalog.ty(t).shape {
        TypeShape::GenericDef { .. } | TypeShape::TupleDef { .. } => {
            Err(QueryError::InvalidArgument(format!(
                "`{}` is an unbound definition and has no default value",
                catalog.friendly_name(t)
            )))
        }

        TypeShape::Nullable { inner } => match mode {
            NullableMode::UnwrapZero => compute(catalog, *inner, mode),
            NullableMode::Absent => Ok(Value::Null),
        },

        TypeShape::Primitive(p) => Ok(primitive_zero(*p)),

        TypeShape::Tuple { elems } => {
            let mut items = Vec::with_capacity(elems.len());
            for &elem in elems {
                items.push(compute(catalog, elem, mode)?);
            }
            Ok(Value::List(items))
        }

        // Null pointer is the zero value of pointer kinds.
        TypeShape::Pointer { .. } => Ok(Value::Null),

        _ if catalog.ty(t).is_value_kind => {
            // Plain value kind: an object with every field zeroed.
            let mut fields = Vec::new();
            for &m in catalog.members_of(t) {
                let data = catalog.member(m);
                if let MemberKind::Field { ty, .. } = data.kind {
                    fields.push((data.name, compute(catalog, ty, mode)?));
                }
            }
            Ok(Value::object(t, fields))
        }

        // Reference kinds default to the absent value.
        _ => Ok(Value::Null),
    }
}

fn primitive_zero(p: Primitive) -> Value {
    match p {
        Primitive::Object | Primitive::Str => Value::Null,
        Primitive::Void => Value::Unit,
        Primitive::Bool => Value::Bool(false),
        Primitive::Char => Value::Char('\0'),
        Primitive::I8
        | Primitive::U8
        | Primitive::I16
        | Primitive::U16
        | Primitive::I32
        | Primitive::U32
        | Primitive::I64
        | Primitive::U64 => Value::Int(0),
        Primitive::F32 | Primitive::F64 | Primitive::Decimal => Value::Float(0.0),
    }
}
