//! Type and member catalog for lens.
//!
//! This crate models a host type catalog as an explicit, immutable-once-built
//! metadata table, and answers structural questions over it:
//!
//! - `Catalog` stores `TypeData`/`MemberData` behind compact `TypeId`/`MemberId`
//!   handles, with well-known primitives and capability shapes pre-seeded at
//!   fixed indices.
//! - Query modules add pure impls over the catalog: hierarchy walking and
//!   shape queries (`query`), friendly-name rendering (`display`),
//!   auto-property/backing-field correlation (`correlate`), and generic
//!   realization (`realize`).
//!
//! The catalog is built single-threaded by the host and only read afterwards;
//! every query takes `&Catalog` and is safe to call concurrently without
//! synchronization.

mod catalog;
mod correlate;
mod display;
mod error;
mod name;
mod query;
mod realize;

pub use catalog::{
    Catalog, MemberData, MemberId, MemberKind, MethodOpts, Primitive, TypeData, TypeId, TypeShape,
    Visibility,
};
pub use error::QueryError;
pub use name::{Name, NameTable};
pub use query::Hierarchy;
pub use realize::{AllInterfaces, RealizeCache};

/// Assert the size of a type at compile time.
///
/// Catches accidental size regressions in handle types that are stored
/// and copied pervasively.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{MemberId, Name, TypeId};
    static_assert_size!(TypeId, 4);
    static_assert_size!(MemberId, 4);
    static_assert_size!(Name, 4);
}
