//! Friendly-name rendering.
//!
//! Recursive renderer over type shapes, pushing into a `String` buffer.
//! The precedence of the shape checks is load-bearing: tuples and arrays of
//! generics must render before the generic branch fires.

use crate::catalog::{Catalog, TypeId, TypeShape};

impl Catalog {
    /// Render a human-readable display name for `t`, including nested
    /// generics, arrays, and nullability.
    pub fn friendly_name(&self, t: TypeId) -> String {
        let mut buf = String::new();
        self.friendly_name_into(t, &mut buf);
        buf
    }

    /// Render a friendly name into an existing buffer.
    pub fn friendly_name_into(&self, t: TypeId, buf: &mut String) {
        match &self.ty(t).shape {
            // (a) well-known primitive alias table
            TypeShape::Primitive(p) => buf.push_str(p.alias()),

            // (b) tuples, bound and unbound
            TypeShape::Tuple { elems } => {
                buf.push('(');
                for (i, &elem) in elems.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.friendly_name_into(elem, buf);
                }
                buf.push(')');
            }
            TypeShape::TupleDef { arity } => {
                buf.push('(');
                for _ in 1..*arity {
                    buf.push(',');
                }
                buf.push(')');
            }

            // (c) arrays: bottom element first, then one bracket group per
            // layer, outermost-to-innermost
            TypeShape::Array { .. } => {
                let mut current = t;
                let mut ranks = Vec::new();
                while let TypeShape::Array { elem, rank } = self.ty(current).shape {
                    ranks.push(rank);
                    current = elem;
                }
                self.friendly_name_into(current, buf);
                for rank in ranks {
                    buf.push('[');
                    for _ in 1..rank {
                        buf.push(',');
                    }
                    buf.push(']');
                }
            }

            // (d) by-reference, (e) pointer, (f) nullable
            TypeShape::ByRef { elem } => {
                self.friendly_name_into(*elem, buf);
                buf.push('&');
            }
            TypeShape::Pointer { elem } => {
                self.friendly_name_into(*elem, buf);
                buf.push('*');
            }
            TypeShape::Nullable { inner } => {
                self.friendly_name_into(*inner, buf);
                buf.push('?');
            }

            // (g) generics, bound and unbound
            TypeShape::Generic { args, .. } => {
                buf.push_str(self.type_name(t));
                buf.push('<');
                for (i, &arg) in args.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.friendly_name_into(arg, buf);
                }
                buf.push('>');
            }
            TypeShape::GenericDef { arity } => {
                buf.push_str(self.type_name(t));
                buf.push('<');
                for _ in 1..*arity {
                    buf.push(',');
                }
                buf.push('>');
            }

            // (h) fallback: simple name
            TypeShape::Plain => buf.push_str(self.type_name(t)),
        }
    }
}
