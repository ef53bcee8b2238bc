//! Generic realization.
//!
//! Resolves the concrete instantiation of an open generic definition that a
//! given type satisfies: interface definitions scan the type's declared
//! interface list (non-recursive), class definitions walk the base chain.
//! "No match" is an expected outcome and returns `Ok(None)`, never an error.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::catalog::{Catalog, TypeId, TypeShape};
use crate::QueryError;

impl Catalog {
    fn is_unbound_definition(&self, t: TypeId) -> bool {
        matches!(
            self.ty(t).shape,
            TypeShape::GenericDef { .. } | TypeShape::TupleDef { .. }
        )
    }

    fn bound_of(&self, candidate: TypeId, def: TypeId) -> bool {
        match self.ty(candidate).shape {
            TypeShape::Generic { def: d, .. } => d == def,
            _ => false,
        }
    }

    /// Resolve the concrete instantiation of `def` that `t` satisfies.
    ///
    /// `def` must be an unbound generic shape, else `InvalidArgument`.
    /// Interface definitions check `t` itself, then scan `t`'s own declared
    /// interface list in catalog order — directly declared interfaces only,
    /// not interfaces-of-interfaces. Class definitions walk `t` and its base
    /// chain, root excluded. No match is `Ok(None)`.
    pub fn realize(&self, t: TypeId, def: TypeId) -> Result<Option<TypeId>, QueryError> {
        if !self.is_unbound_definition(def) {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` is not an unbound generic definition",
                self.friendly_name(def)
            )));
        }

        if let TypeShape::TupleDef { arity } = self.ty(def).shape {
            let found = self.hierarchy(t).find(|&a| match self.ty(a).shape {
                TypeShape::Tuple { ref elems } => elems.len() == usize::from(arity),
                _ => false,
            });
            return Ok(found);
        }

        if self.ty(def).is_interface {
            if self.bound_of(t, def) {
                return Ok(Some(t));
            }
            let found = self
                .ty(t)
                .interfaces
                .iter()
                .copied()
                .find(|&iface| self.bound_of(iface, def));
            return Ok(found);
        }

        let found = self.hierarchy(t).find(|&a| self.bound_of(a, def));
        Ok(found)
    }

    /// True iff `t` derives from or implements some instantiation of
    /// `generic`, dispatching on interface-vs-class shape.
    pub fn derives_or_implements(&self, t: TypeId, generic: TypeId) -> Result<bool, QueryError> {
        Ok(self.realize(t, generic)?.is_some())
    }

    /// Recursively expand every declared interface of `t` and the interfaces
    /// of those interfaces.
    ///
    /// Lazy and finite, but duplicates are NOT deduplicated: diamond
    /// inheritance in the interface graph yields repeats. Documented
    /// behavior, preserved as-is.
    pub fn all_interfaces(&self, t: TypeId) -> AllInterfaces<'_> {
        let mut pending: Vec<TypeId> = self.ty(t).interfaces.clone();
        pending.reverse();
        AllInterfaces {
            catalog: self,
            pending,
        }
    }
}

/// Iterator for [`Catalog::all_interfaces`]. Depth-first, no dedup.
pub struct AllInterfaces<'c> {
    catalog: &'c Catalog,
    pending: Vec<TypeId>,
}

impl Iterator for AllInterfaces<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let id = self.pending.pop()?;
        let nested = &self.catalog.ty(id).interfaces;
        self.pending.extend(nested.iter().rev().copied());
        Some(id)
    }
}

/// Optional process-wide memo for realization results.
///
/// Keyed by `(type, definition)`. Entries are computed under the write lock,
/// giving at-most-one computation per missing key; realization is pure, so
/// its absence changes only repeated work, never correctness.
#[derive(Default)]
pub struct RealizeCache {
    map: RwLock<FxHashMap<(TypeId, TypeId), Option<TypeId>>>,
}

impl RealizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached equivalent of [`Catalog::realize`].
    pub fn realize(
        &self,
        catalog: &Catalog,
        t: TypeId,
        def: TypeId,
    ) -> Result<Option<TypeId>, QueryError> {
        if let Some(&hit) = self.map.read().get(&(t, def)) {
            return Ok(hit);
        }
        let mut guard = self.map.write();
        if let Some(&hit) = guard.get(&(t, def)) {
            return Ok(hit);
        }
        tracing::trace!(?t, ?def, "realize cache miss");
        let computed = catalog.realize(t, def)?;
        guard.insert((t, def), computed);
        Ok(computed)
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// True if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn array_realizes_enumerable_of_its_element() {
        let mut catalog = Catalog::new();
        let ints = catalog.array(Catalog::I32, 1);
        let expected = catalog
            .instantiate(Catalog::ENUMERABLE, &[Catalog::I32])
            .unwrap();

        let found = catalog.realize(ints, Catalog::ENUMERABLE).unwrap();
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn interface_scan_covers_the_flattened_interface_list() {
        let mut catalog = Catalog::new();
        let dict_def = catalog.generic_def("Dictionary", 2, true);
        let ro_dict_def = catalog.generic_def("ReadOnlyDictionary", 2, true);

        let dict = catalog
            .instantiate(dict_def, &[Catalog::STR, Catalog::I32])
            .unwrap();
        let ro_dict = catalog
            .instantiate(ro_dict_def, &[Catalog::STR, Catalog::I32])
            .unwrap();
        catalog.add_interface(dict, ro_dict);

        // Host registers the flattened set on the concrete type.
        let my_map = catalog.class("MyMap", None);
        catalog.add_interface(my_map, dict);
        catalog.add_interface(my_map, ro_dict);

        assert_eq!(catalog.realize(my_map, dict_def).unwrap(), Some(dict));
        assert_eq!(catalog.realize(my_map, ro_dict_def).unwrap(), Some(ro_dict));
    }

    #[test]
    fn bound_interface_realizes_itself() {
        let mut catalog = Catalog::new();
        let bound = catalog
            .instantiate(Catalog::ENUMERABLE, &[Catalog::STR])
            .unwrap();
        assert_eq!(
            catalog.realize(bound, Catalog::ENUMERABLE).unwrap(),
            Some(bound)
        );
    }

    #[test]
    fn class_definitions_walk_the_base_chain() {
        let mut catalog = Catalog::new();
        let repo_def = catalog.generic_def("Repository", 1, false);
        let int_repo = catalog.instantiate(repo_def, &[Catalog::I32]).unwrap();
        let special = catalog.class("SpecialRepo", Some(int_repo));

        assert_eq!(catalog.realize(special, repo_def).unwrap(), Some(int_repo));
    }

    #[test]
    fn no_match_is_absent_not_an_error() {
        let mut catalog = Catalog::new();
        let widget = catalog.class("Widget", None);
        assert_eq!(catalog.realize(widget, Catalog::ENUMERABLE).unwrap(), None);
    }

    #[test]
    fn bound_definition_argument_is_invalid() {
        let mut catalog = Catalog::new();
        let bound = catalog
            .instantiate(Catalog::ENUMERABLE, &[Catalog::I32])
            .unwrap();
        let widget = catalog.class("Widget", None);
        assert!(matches!(
            catalog.realize(widget, bound),
            Err(QueryError::InvalidArgument(_))
        ));
        assert!(matches!(
            catalog.realize(widget, Catalog::I32),
            Err(QueryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn tuple_definitions_realize_by_arity() {
        let mut catalog = Catalog::new();
        let pair = catalog.tuple(&[Catalog::I32, Catalog::STR]);
        let pair_def = catalog.tuple_def(2);
        let triple_def = catalog.tuple_def(3);

        assert_eq!(catalog.realize(pair, pair_def).unwrap(), Some(pair));
        assert_eq!(catalog.realize(pair, triple_def).unwrap(), None);
    }

    #[test]
    fn all_interfaces_expands_recursively_without_dedup() {
        let mut catalog = Catalog::new();
        let base = catalog.interface("Base");
        let left = catalog.interface("Left");
        let right = catalog.interface("Right");
        catalog.add_interface(left, base);
        catalog.add_interface(right, base);

        let diamond = catalog.class("Diamond", None);
        catalog.add_interface(diamond, left);
        catalog.add_interface(diamond, right);

        let expanded: Vec<_> = catalog.all_interfaces(diamond).collect();
        assert_eq!(expanded, vec![left, base, right, base]);
    }

    #[test]
    fn derives_or_implements_dispatches_on_shape() {
        let mut catalog = Catalog::new();
        let repo_def = catalog.generic_def("Repository", 1, false);
        let int_repo = catalog.instantiate(repo_def, &[Catalog::I32]).unwrap();
        let special = catalog.class("SpecialRepo", Some(int_repo));
        let ints = catalog.array(Catalog::I32, 1);

        assert!(catalog.derives_or_implements(special, repo_def).unwrap());
        assert!(catalog
            .derives_or_implements(ints, Catalog::ENUMERABLE)
            .unwrap());
        assert!(!catalog.derives_or_implements(special, Catalog::LAZY).unwrap());
    }

    #[test]
    fn cache_returns_the_same_results_as_direct_realization() {
        let mut catalog = Catalog::new();
        let ints = catalog.array(Catalog::I32, 1);
        let cache = RealizeCache::new();

        let direct = catalog.realize(ints, Catalog::ENUMERABLE).unwrap();
        let cached = cache.realize(&catalog, ints, Catalog::ENUMERABLE).unwrap();
        let cached_again = cache.realize(&catalog, ints, Catalog::ENUMERABLE).unwrap();
        assert_eq!(direct, cached);
        assert_eq!(cached, cached_again);
        assert_eq!(cache.len(), 1);
    }
}
