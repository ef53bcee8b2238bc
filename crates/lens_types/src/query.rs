//! Pure shape queries over the catalog.
//!
//! Hierarchy walking, array peeling, numeric classification, and the
//! lazy-type heuristic. No mutation, no I/O; safe for unsynchronized
//! concurrent use.

use smallvec::SmallVec;

use crate::catalog::{Catalog, TypeId, TypeShape};
use crate::QueryError;

/// Name suffixes that classify a type as a concrete collection.
///
/// Textual heuristic over host naming patterns, not a semantic guarantee.
const COLLECTION_SUFFIXES: [&str; 8] = [
    "Collection",
    "List",
    "Dictionary",
    "Set",
    "Array",
    "Queue",
    "Stack",
    "Bag",
];

/// Lazy iterator over a type and its ancestors, excluding the universal root.
///
/// Finite and restartable: create a fresh one to walk again.
pub struct Hierarchy<'c> {
    catalog: &'c Catalog,
    current: Option<TypeId>,
}

impl Iterator for Hierarchy<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let id = self.current?;
        self.current = self
            .catalog
            .ty(id)
            .base
            .filter(|&base| base != Catalog::OBJECT);
        Some(id)
    }
}

impl Catalog {
    /// Walk `t` and every ancestor up to (excluding) the universal root.
    pub fn hierarchy(&self, t: TypeId) -> Hierarchy<'_> {
        Hierarchy {
            catalog: self,
            current: (t != Catalog::OBJECT).then_some(t),
        }
    }

    /// Rank of each successive array layer, outermost first.
    ///
    /// Fails with `InvalidArgument` if `t` is not an array.
    pub fn array_ranks(&self, t: TypeId) -> Result<SmallVec<[u8; 4]>, QueryError> {
        let mut ranks = SmallVec::new();
        let mut current = t;
        while let TypeShape::Array { elem, rank } = self.ty(current).shape {
            ranks.push(rank);
            current = elem;
        }
        if ranks.is_empty() {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` is not an array type",
                self.friendly_name(t)
            )));
        }
        Ok(ranks)
    }

    /// The non-array element type under every array layer of `t`.
    ///
    /// Fails with `InvalidArgument` if `t` is not an array.
    pub fn array_bottom_element_type(&self, t: TypeId) -> Result<TypeId, QueryError> {
        let TypeShape::Array { mut elem, .. } = self.ty(t).shape else {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` is not an array type",
                self.friendly_name(t)
            )));
        };
        while let TypeShape::Array { elem: inner, .. } = self.ty(elem).shape {
            elem = inner;
        }
        Ok(elem)
    }

    /// Fixed enumeration of integer and floating primitive kinds,
    /// decimal included. No implicit widening.
    pub fn is_numeric(&self, t: TypeId) -> bool {
        match self.ty(t).shape {
            TypeShape::Primitive(p) => p.is_numeric(),
            _ => false,
        }
    }

    /// True iff `t` is the given capability, or declares it directly.
    pub(crate) fn has_capability(&self, t: TypeId, def: TypeId) -> bool {
        let is_bound_of = |id: TypeId| match self.ty(id).shape {
            TypeShape::Generic { def: d, .. } => d == def,
            _ => false,
        };
        is_bound_of(t) || self.ty(t).interfaces.iter().copied().any(is_bound_of)
    }

    /// True iff `t` structurally offers deferred evaluation (lazy wrapper,
    /// queryable, enumerable, or enumerator capability) and is not itself
    /// classified as a concrete collection.
    ///
    /// Collection classification uses the indexed/countable capability plus
    /// a name-suffix check; the suffix check is a documented best-effort
    /// heuristic.
    pub fn is_lazy_type(&self, t: TypeId) -> bool {
        let deferred = self.has_capability(t, Catalog::LAZY)
            || self.has_capability(t, Catalog::QUERYABLE)
            || self.has_capability(t, Catalog::ENUMERABLE)
            || self.has_capability(t, Catalog::ENUMERATOR);
        if !deferred {
            return false;
        }
        let collection = self.has_capability(t, Catalog::COLLECTION)
            || COLLECTION_SUFFIXES
                .iter()
                .any(|suffix| self.type_name(t).ends_with(suffix));
        !collection
    }
}
