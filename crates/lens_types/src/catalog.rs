//! The type/member catalog.
//!
//! `Catalog` is an append-only metadata table describing the host's types and
//! their members. Handles (`TypeId`, `MemberId`) are compact indices; shapes
//! that are structurally identified (arrays, pointers, nullables, tuples,
//! bound generics) are interned so that building the same shape twice yields
//! the same handle.
//!
//! Well-known primitives and capability shapes occupy fixed indices, the same
//! way a type pool fixes its primitive slots: callers can use the associated
//! constants (`Catalog::OBJECT`, `Catalog::ENUMERABLE`, ...) without lookups.

use rustc_hash::FxHashMap;

use crate::name::{Name, NameTable};
use crate::QueryError;

/// Handle to a type in the catalog.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a member in the catalog.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct MemberId(u32);

impl MemberId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Well-known primitive kinds.
///
/// The fixed set behind the friendly-name alias table and the numeric
/// classification. No implicit widening relationships are modeled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Object,
    Void,
    Bool,
    Char,
    Str,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Decimal,
}

impl Primitive {
    /// Display alias used by the friendly-name renderer.
    pub const fn alias(self) -> &'static str {
        match self {
            Primitive::Object => "object",
            Primitive::Void => "void",
            Primitive::Bool => "bool",
            Primitive::Char => "char",
            Primitive::Str => "string",
            Primitive::I8 => "sbyte",
            Primitive::U8 => "byte",
            Primitive::I16 => "short",
            Primitive::U16 => "ushort",
            Primitive::I32 => "int",
            Primitive::U32 => "uint",
            Primitive::I64 => "long",
            Primitive::U64 => "ulong",
            Primitive::F32 => "float",
            Primitive::F64 => "double",
            Primitive::Decimal => "decimal",
        }
    }

    /// Fixed enumeration of integer and floating kinds, decimal included.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Primitive::I8
                | Primitive::U8
                | Primitive::I16
                | Primitive::U16
                | Primitive::I32
                | Primitive::U32
                | Primitive::I64
                | Primitive::U64
                | Primitive::F32
                | Primitive::F64
                | Primitive::Decimal
        )
    }

    /// Value kinds among the primitives (everything but `object`, `string`,
    /// and `void`).
    pub const fn is_value_kind(self) -> bool {
        !matches!(self, Primitive::Object | Primitive::Str | Primitive::Void)
    }
}

/// Structural shape of a type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeShape {
    Primitive(Primitive),
    /// One array layer; nested arrays are nested `Array` shapes.
    /// Invariant: `rank >= 1`.
    Array { elem: TypeId, rank: u8 },
    Pointer { elem: TypeId },
    ByRef { elem: TypeId },
    /// Wraps exactly one non-nullable value kind.
    Nullable { inner: TypeId },
    Tuple { elems: Vec<TypeId> },
    /// Unbound tuple definition of the given arity.
    TupleDef { arity: u8 },
    /// Open generic definition of the given arity.
    GenericDef { arity: u8 },
    /// Bound instantiation of a `GenericDef`.
    Generic { def: TypeId, args: Vec<TypeId> },
    /// Plain named class, struct, or interface.
    Plain,
}

/// Accessibility tier of a member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Public,
    NonPublic,
}

/// Kind-specific member data.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum MemberKind {
    Field {
        ty: TypeId,
        readonly: bool,
    },
    Property {
        ty: TypeId,
        getter: Option<MemberId>,
        setter: Option<MemberId>,
    },
    Method {
        params: Vec<TypeId>,
        ret: TypeId,
        is_static: bool,
        generic_arity: u8,
    },
    Ctor {
        params: Vec<TypeId>,
    },
    Event,
}

/// A registered member.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MemberData {
    pub name: Name,
    pub declaring: TypeId,
    pub visibility: Visibility,
    /// Compiler-synthesized (auto-property accessors, backing fields).
    pub synthesized: bool,
    pub kind: MemberKind,
}

/// A registered type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeData {
    /// Simple name (no arity markers, no namespace).
    pub name: Name,
    pub shape: TypeShape,
    /// Single base type, absent for the universal root and interfaces.
    pub base: Option<TypeId>,
    /// Declared interfaces as the host registered them, order preserved.
    /// For .NET-like hosts this is the transitively-flattened set.
    pub interfaces: Vec<TypeId>,
    pub is_value_kind: bool,
    pub is_interface: bool,
    pub members: Vec<MemberId>,
}

/// Interning key for structurally-identified shapes.
#[derive(Clone, Eq, PartialEq, Hash)]
enum ShapeKey {
    Array(TypeId, u8),
    Pointer(TypeId),
    ByRef(TypeId),
    Nullable(TypeId),
    Tuple(Vec<TypeId>),
    TupleDef(u8),
    Bound(TypeId, Vec<TypeId>),
}

/// Options for registering a method member.
#[derive(Copy, Clone, Debug)]
pub struct MethodOpts {
    pub visibility: Visibility,
    pub is_static: bool,
    pub synthesized: bool,
    pub generic_arity: u8,
}

impl Default for MethodOpts {
    fn default() -> Self {
        MethodOpts {
            visibility: Visibility::Public,
            is_static: false,
            synthesized: false,
            generic_arity: 0,
        }
    }
}

/// The host type catalog.
pub struct Catalog {
    names: NameTable,
    types: Vec<TypeData>,
    members: Vec<MemberData>,
    interned: FxHashMap<ShapeKey, TypeId>,
    /// Pre-interned `self` placeholder for materialized instance calls.
    self_name: Name,
    /// Pre-interned `arg0`..`argN` placeholders for materialized parameters.
    arg_names: [Name; MAX_PLACEHOLDER_ARGS],
}

/// Placeholder-parameter limit for materialized delegates.
const MAX_PLACEHOLDER_ARGS: usize = 16;

impl Catalog {
    // Fixed indices for pre-seeded types. Order matches `Catalog::new`.
    pub const OBJECT: TypeId = TypeId(0);
    pub const VOID: TypeId = TypeId(1);
    pub const BOOL: TypeId = TypeId(2);
    pub const CHAR: TypeId = TypeId(3);
    pub const STR: TypeId = TypeId(4);
    pub const I8: TypeId = TypeId(5);
    pub const U8: TypeId = TypeId(6);
    pub const I16: TypeId = TypeId(7);
    pub const U16: TypeId = TypeId(8);
    pub const I32: TypeId = TypeId(9);
    pub const U32: TypeId = TypeId(10);
    pub const I64: TypeId = TypeId(11);
    pub const U64: TypeId = TypeId(12);
    pub const F32: TypeId = TypeId(13);
    pub const F64: TypeId = TypeId(14);
    pub const DECIMAL: TypeId = TypeId(15);

    // Capability shapes.
    pub const ENUMERABLE: TypeId = TypeId(16);
    pub const ENUMERATOR: TypeId = TypeId(17);
    pub const QUERYABLE: TypeId = TypeId(18);
    pub const COLLECTION: TypeId = TypeId(19);
    pub const LAZY: TypeId = TypeId(20);

    // Pre-seeded string methods, bound to natives by the evaluator.
    pub const STR_STARTS_WITH: MemberId = MemberId(0);
    pub const STR_ENDS_WITH: MemberId = MemberId(1);
    pub const STR_CONTAINS: MemberId = MemberId(2);
    pub const STR_EQUALS: MemberId = MemberId(3);

    const PRIMITIVES: [Primitive; 16] = [
        Primitive::Object,
        Primitive::Void,
        Primitive::Bool,
        Primitive::Char,
        Primitive::Str,
        Primitive::I8,
        Primitive::U8,
        Primitive::I16,
        Primitive::U16,
        Primitive::I32,
        Primitive::U32,
        Primitive::I64,
        Primitive::U64,
        Primitive::F32,
        Primitive::F64,
        Primitive::Decimal,
    ];

    /// Placeholder-parameter limit for materialized delegates.
    pub const MAX_PLACEHOLDER_ARGS: usize = MAX_PLACEHOLDER_ARGS;

    /// Create a catalog with the well-known types pre-seeded.
    pub fn new() -> Self {
        let mut names = NameTable::new();
        let self_name = names.intern("self");
        let arg_names: [Name; MAX_PLACEHOLDER_ARGS] =
            std::array::from_fn(|i| names.intern(&format!("arg{i}")));
        let mut catalog = Catalog {
            names,
            types: Vec::with_capacity(64),
            members: Vec::with_capacity(64),
            interned: FxHashMap::default(),
            self_name,
            arg_names,
        };

        for prim in Self::PRIMITIVES {
            let name = catalog.names.intern(prim.alias());
            let base = if matches!(prim, Primitive::Object) {
                None
            } else {
                Some(Self::OBJECT)
            };
            catalog.push_type(TypeData {
                name,
                shape: TypeShape::Primitive(prim),
                base,
                interfaces: Vec::new(),
                is_value_kind: prim.is_value_kind(),
                is_interface: false,
                members: Vec::new(),
            });
        }

        catalog.generic_def("Enumerable", 1, true);
        catalog.generic_def("Enumerator", 1, true);
        catalog.generic_def("Queryable", 1, true);
        catalog.generic_def("Collection", 1, true);
        catalog.generic_def("Lazy", 1, false);

        // String methods used by the pattern-predicate builder. Their
        // implementations are registered by the evaluator's native registry.
        catalog.method(Self::STR, "StartsWith", &[Self::STR], Self::BOOL);
        catalog.method(Self::STR, "EndsWith", &[Self::STR], Self::BOOL);
        catalog.method(Self::STR, "Contains", &[Self::STR], Self::BOOL);
        catalog.method(Self::STR, "Equals", &[Self::STR], Self::BOOL);

        catalog
    }

    fn push_type(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(u32::try_from(self.types.len()).unwrap_or(u32::MAX));
        self.types.push(data);
        id
    }

    fn push_member(&mut self, data: MemberData) -> MemberId {
        let id = MemberId(u32::try_from(self.members.len()).unwrap_or(u32::MAX));
        let owner = data.declaring;
        self.members.push(data);
        self.types[owner.index()].members.push(id);
        id
    }

    // Accessors

    /// Type data behind a handle.
    #[inline]
    pub fn ty(&self, t: TypeId) -> &TypeData {
        &self.types[t.index()]
    }

    /// Member data behind a handle.
    #[inline]
    pub fn member(&self, m: MemberId) -> &MemberData {
        &self.members[m.index()]
    }

    /// Simple name of a type.
    #[inline]
    pub fn type_name(&self, t: TypeId) -> &str {
        self.names.resolve(self.ty(t).name)
    }

    /// Name of a member.
    #[inline]
    pub fn member_name(&self, m: MemberId) -> &str {
        self.names.resolve(self.member(m).name)
    }

    /// Resolve an interned name handle.
    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        self.names.resolve(name)
    }

    /// Intern a string into the catalog's name table.
    pub fn intern(&mut self, s: &str) -> Name {
        self.names.intern(s)
    }

    /// Pre-interned `self` placeholder name.
    #[inline]
    pub fn self_name(&self) -> Name {
        self.self_name
    }

    /// Pre-interned positional placeholder name, if within the limit.
    #[inline]
    pub fn arg_name(&self, i: usize) -> Option<Name> {
        self.arg_names.get(i).copied()
    }

    /// Members declared on a type, in registration order.
    pub fn members_of(&self, t: TypeId) -> &[MemberId] {
        &self.ty(t).members
    }

    /// First member on `t` with the given name.
    pub fn find_member(&self, t: TypeId, name: &str) -> Option<MemberId> {
        self.ty(t)
            .members
            .iter()
            .copied()
            .find(|&m| self.member_name(m) == name)
    }

    /// First field on `t` with the given name.
    pub fn find_field(&self, t: TypeId, name: &str) -> Option<MemberId> {
        self.ty(t).members.iter().copied().find(|&m| {
            matches!(self.member(m).kind, MemberKind::Field { .. }) && self.member_name(m) == name
        })
    }

    /// First property on `t` with the given name.
    pub fn find_property(&self, t: TypeId, name: &str) -> Option<MemberId> {
        self.ty(t).members.iter().copied().find(|&m| {
            matches!(self.member(m).kind, MemberKind::Property { .. })
                && self.member_name(m) == name
        })
    }

    /// First event on `t` with the given name.
    pub fn find_event(&self, t: TypeId, name: &str) -> Option<MemberId> {
        self.ty(t).members.iter().copied().find(|&m| {
            matches!(self.member(m).kind, MemberKind::Event) && self.member_name(m) == name
        })
    }

    /// Locate a method by name across both visibility tiers, optionally
    /// requiring an exact parameter-type list.
    pub fn find_method(
        &self,
        t: TypeId,
        name: &str,
        param_types: Option<&[TypeId]>,
    ) -> Option<MemberId> {
        self.ty(t).members.iter().copied().find(|&m| {
            let data = self.member(m);
            let MemberKind::Method { ref params, .. } = data.kind else {
                return false;
            };
            if self.member_name(m) != name {
                return false;
            }
            match param_types {
                Some(expected) => params.as_slice() == expected,
                None => true,
            }
        })
    }

    // Type registration

    /// Register a plain reference type. `base` defaults to the root.
    pub fn class(&mut self, name: &str, base: Option<TypeId>) -> TypeId {
        let name = self.names.intern(name);
        self.push_type(TypeData {
            name,
            shape: TypeShape::Plain,
            base: Some(base.unwrap_or(Self::OBJECT)),
            interfaces: Vec::new(),
            is_value_kind: false,
            is_interface: false,
            members: Vec::new(),
        })
    }

    /// Register a plain value-kind type.
    pub fn value_type(&mut self, name: &str) -> TypeId {
        let name = self.names.intern(name);
        self.push_type(TypeData {
            name,
            shape: TypeShape::Plain,
            base: Some(Self::OBJECT),
            interfaces: Vec::new(),
            is_value_kind: true,
            is_interface: false,
            members: Vec::new(),
        })
    }

    /// Register a plain (non-generic) interface.
    pub fn interface(&mut self, name: &str) -> TypeId {
        let name = self.names.intern(name);
        self.push_type(TypeData {
            name,
            shape: TypeShape::Plain,
            base: None,
            interfaces: Vec::new(),
            is_value_kind: false,
            is_interface: true,
            members: Vec::new(),
        })
    }

    /// Register an open generic definition of the given arity.
    pub fn generic_def(&mut self, name: &str, arity: u8, is_interface: bool) -> TypeId {
        let name = self.names.intern(name);
        self.push_type(TypeData {
            name,
            shape: TypeShape::GenericDef { arity },
            base: if is_interface { None } else { Some(Self::OBJECT) },
            interfaces: Vec::new(),
            is_value_kind: false,
            is_interface,
            members: Vec::new(),
        })
    }

    /// Bind a generic definition to concrete arguments.
    ///
    /// Interned: binding the same definition to the same arguments twice
    /// yields the same handle.
    pub fn instantiate(&mut self, def: TypeId, args: &[TypeId]) -> Result<TypeId, QueryError> {
        let TypeShape::GenericDef { arity } = self.ty(def).shape else {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` is not an open generic definition",
                self.type_name(def)
            )));
        };
        if usize::from(arity) != args.len() {
            return Err(QueryError::InvalidArgument(format!(
                "`{}` expects {} type argument(s), got {}",
                self.type_name(def),
                arity,
                args.len()
            )));
        }
        Ok(self.bind(def, args))
    }

    fn bind(&mut self, def: TypeId, args: &[TypeId]) -> TypeId {
        let key = ShapeKey::Bound(def, args.to_vec());
        if let Some(&existing) = self.interned.get(&key) {
            return existing;
        }
        let data = TypeData {
            name: self.ty(def).name,
            shape: TypeShape::Generic {
                def,
                args: args.to_vec(),
            },
            base: self.ty(def).base,
            interfaces: Vec::new(),
            is_value_kind: false,
            is_interface: self.ty(def).is_interface,
            members: Vec::new(),
        };
        let id = self.push_type(data);
        self.interned.insert(key, id);
        id
    }

    /// Register one array layer over `elem` with the given rank.
    ///
    /// Arrays implicitly satisfy the enumeration capability, so the
    /// `Enumerable<elem>` and `Collection<elem>` realizations are added to
    /// the interface list automatically.
    pub fn array(&mut self, elem: TypeId, rank: u8) -> TypeId {
        debug_assert!(rank >= 1);
        let key = ShapeKey::Array(elem, rank);
        if let Some(&existing) = self.interned.get(&key) {
            return existing;
        }
        let enumerable = self.bind(Self::ENUMERABLE, &[elem]);
        let collection = self.bind(Self::COLLECTION, &[elem]);
        let data = TypeData {
            name: self.ty(elem).name,
            shape: TypeShape::Array { elem, rank },
            base: Some(Self::OBJECT),
            interfaces: vec![enumerable, collection],
            is_value_kind: false,
            is_interface: false,
            members: Vec::new(),
        };
        let id = self.push_type(data);
        self.interned.insert(key, id);
        id
    }

    /// Register a nullable wrapper over a non-nullable value kind.
    pub fn nullable(&mut self, inner: TypeId) -> Result<TypeId, QueryError> {
        let inner_data = self.ty(inner);
        if !inner_data.is_value_kind || matches!(inner_data.shape, TypeShape::Nullable { .. }) {
            return Err(QueryError::InvalidArgument(format!(
                "nullable wrapper requires a non-nullable value kind, got `{}`",
                self.type_name(inner)
            )));
        }
        let key = ShapeKey::Nullable(inner);
        if let Some(&existing) = self.interned.get(&key) {
            return Ok(existing);
        }
        let data = TypeData {
            name: self.ty(inner).name,
            shape: TypeShape::Nullable { inner },
            base: Some(Self::OBJECT),
            interfaces: Vec::new(),
            is_value_kind: true,
            is_interface: false,
            members: Vec::new(),
        };
        let id = self.push_type(data);
        self.interned.insert(key, id);
        Ok(id)
    }

    /// Register a pointer type.
    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        let key = ShapeKey::Pointer(elem);
        if let Some(&existing) = self.interned.get(&key) {
            return existing;
        }
        let data = TypeData {
            name: self.ty(elem).name,
            shape: TypeShape::Pointer { elem },
            base: Some(Self::OBJECT),
            interfaces: Vec::new(),
            is_value_kind: true,
            is_interface: false,
            members: Vec::new(),
        };
        let id = self.push_type(data);
        self.interned.insert(key, id);
        id
    }

    /// Register a by-reference type.
    pub fn by_ref(&mut self, elem: TypeId) -> TypeId {
        let key = ShapeKey::ByRef(elem);
        if let Some(&existing) = self.interned.get(&key) {
            return existing;
        }
        let data = TypeData {
            name: self.ty(elem).name,
            shape: TypeShape::ByRef { elem },
            base: None,
            interfaces: Vec::new(),
            is_value_kind: false,
            is_interface: false,
            members: Vec::new(),
        };
        let id = self.push_type(data);
        self.interned.insert(key, id);
        id
    }

    /// Register a bound tuple type.
    pub fn tuple(&mut self, elems: &[TypeId]) -> TypeId {
        let key = ShapeKey::Tuple(elems.to_vec());
        if let Some(&existing) = self.interned.get(&key) {
            return existing;
        }
        let name = self.names.intern("Tuple");
        let data = TypeData {
            name,
            shape: TypeShape::Tuple {
                elems: elems.to_vec(),
            },
            base: Some(Self::OBJECT),
            interfaces: Vec::new(),
            is_value_kind: true,
            is_interface: false,
            members: Vec::new(),
        };
        let id = self.push_type(data);
        self.interned.insert(key, id);
        id
    }

    /// Register an unbound tuple definition of the given arity.
    pub fn tuple_def(&mut self, arity: u8) -> TypeId {
        debug_assert!(arity >= 1);
        let key = ShapeKey::TupleDef(arity);
        if let Some(&existing) = self.interned.get(&key) {
            return existing;
        }
        let name = self.names.intern("Tuple");
        let data = TypeData {
            name,
            shape: TypeShape::TupleDef { arity },
            base: Some(Self::OBJECT),
            interfaces: Vec::new(),
            is_value_kind: true,
            is_interface: false,
            members: Vec::new(),
        };
        let id = self.push_type(data);
        self.interned.insert(key, id);
        id
    }

    /// Add a declared interface to a type's interface list.
    pub fn add_interface(&mut self, t: TypeId, iface: TypeId) {
        self.types[t.index()].interfaces.push(iface);
    }

    /// Override a type's base.
    pub fn set_base(&mut self, t: TypeId, base: Option<TypeId>) {
        self.types[t.index()].base = base;
    }

    // Member registration

    /// Register a field.
    pub fn field(
        &mut self,
        owner: TypeId,
        name: &str,
        ty: TypeId,
        visibility: Visibility,
        synthesized: bool,
        readonly: bool,
    ) -> MemberId {
        let name = self.names.intern(name);
        self.push_member(MemberData {
            name,
            declaring: owner,
            visibility,
            synthesized,
            kind: MemberKind::Field { ty, readonly },
        })
    }

    /// Register a public instance method with default options.
    pub fn method(&mut self, owner: TypeId, name: &str, params: &[TypeId], ret: TypeId) -> MemberId {
        self.method_with(owner, name, params, ret, MethodOpts::default())
    }

    /// Register a method with explicit options.
    pub fn method_with(
        &mut self,
        owner: TypeId,
        name: &str,
        params: &[TypeId],
        ret: TypeId,
        opts: MethodOpts,
    ) -> MemberId {
        let name = self.names.intern(name);
        self.push_member(MemberData {
            name,
            declaring: owner,
            visibility: opts.visibility,
            synthesized: opts.synthesized,
            kind: MemberKind::Method {
                params: params.to_vec(),
                ret,
                is_static: opts.is_static,
                generic_arity: opts.generic_arity,
            },
        })
    }

    /// Register a property with explicit accessors.
    pub fn property(
        &mut self,
        owner: TypeId,
        name: &str,
        ty: TypeId,
        getter: Option<MemberId>,
        setter: Option<MemberId>,
    ) -> MemberId {
        let name = self.names.intern(name);
        self.push_member(MemberData {
            name,
            declaring: owner,
            visibility: Visibility::Public,
            synthesized: false,
            kind: MemberKind::Property { ty, getter, setter },
        })
    }

    /// Register an auto-property: synthesized accessors plus the
    /// convention-named backing field.
    pub fn auto_property(&mut self, owner: TypeId, name: &str, ty: TypeId) -> MemberId {
        let getter = self.method_with(
            owner,
            &format!("get_{name}"),
            &[],
            ty,
            MethodOpts {
                synthesized: true,
                ..MethodOpts::default()
            },
        );
        let setter = self.method_with(
            owner,
            &format!("set_{name}"),
            &[ty],
            Self::VOID,
            MethodOpts {
                synthesized: true,
                ..MethodOpts::default()
            },
        );
        self.field(
            owner,
            &format!("<{name}>k__BackingField"),
            ty,
            Visibility::NonPublic,
            true,
            false,
        );
        self.property(owner, name, ty, Some(getter), Some(setter))
    }

    /// Register a constructor.
    pub fn ctor(&mut self, owner: TypeId, params: &[TypeId]) -> MemberId {
        let name = self.names.intern(".ctor");
        self.push_member(MemberData {
            name,
            declaring: owner,
            visibility: Visibility::Public,
            synthesized: false,
            kind: MemberKind::Ctor {
                params: params.to_vec(),
            },
        })
    }

    /// Register an event.
    pub fn event(&mut self, owner: TypeId, name: &str, visibility: Visibility) -> MemberId {
        let name = self.names.intern(name);
        self.push_member(MemberData {
            name,
            declaring: owner,
            visibility,
            synthesized: false,
            kind: MemberKind::Event,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
