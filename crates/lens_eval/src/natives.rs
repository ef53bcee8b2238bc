//! Native method implementations.
//!
//! The catalog is pure metadata; callable behavior for its methods lives
//! here, keyed by `MemberId`. Instance methods receive their receiver as
//! `args[0]`. Registered implementations are looked up eagerly at compile
//! time, so a missing native surfaces as `CompileError::NotFound`, never as
//! a runtime surprise.

use std::sync::Arc;

use lens_ir::Value;
use lens_types::{Catalog, MemberId};
use rustc_hash::FxHashMap;

/// A native method implementation.
///
/// Receiver (for instance methods) is `args[0]`, declared parameters follow.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync>;

/// Registry of native implementations keyed by catalog member.
#[derive(Default, Clone)]
pub struct NativeRegistry {
    fns: FxHashMap<MemberId, NativeFn>,
}

impl NativeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the pre-seeded string methods bound.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Catalog::STR_STARTS_WITH, |args| {
            str_pair(args, "StartsWith").map(|(s, n)| Value::Bool(s.starts_with(n)))
        });
        registry.register(Catalog::STR_ENDS_WITH, |args| {
            str_pair(args, "EndsWith").map(|(s, n)| Value::Bool(s.ends_with(n)))
        });
        registry.register(Catalog::STR_CONTAINS, |args| {
            str_pair(args, "Contains").map(|(s, n)| Value::Bool(s.contains(n)))
        });
        registry.register(Catalog::STR_EQUALS, |args| {
            str_pair(args, "Equals").map(|(s, n)| Value::Bool(s == n))
        });
        registry
    }

    /// Bind an implementation to a catalog method.
    pub fn register<F>(&mut self, member: MemberId, f: F)
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.fns.insert(member, Arc::new(f));
    }

    /// Look up the implementation for a member.
    pub fn get(&self, member: MemberId) -> Option<&NativeFn> {
        self.fns.get(&member)
    }
}

fn str_pair<'a>(args: &'a [Value], method: &str) -> Result<(&'a str, &'a str), String> {
    match args {
        [Value::Str(s), Value::Str(n)] => Ok((s, n)),
        [recv, arg] => Err(format!(
            "{method} expects string receiver and argument, got {} and {}",
            recv.type_name(),
            arg.type_name()
        )),
        _ => Err(format!("{method} expects exactly 2 arguments")),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_string_methods_behave() {
        let registry = NativeRegistry::with_builtins();
        let contains = registry.get(Catalog::STR_CONTAINS).unwrap();
        assert_eq!(
            contains(&[Value::string("seahorse"), Value::string("horse")]).unwrap(),
            Value::Bool(true)
        );

        let starts = registry.get(Catalog::STR_STARTS_WITH).unwrap();
        assert_eq!(
            starts(&[Value::string("seahorse"), Value::string("horse")]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn wrong_receiver_kind_is_reported() {
        let registry = NativeRegistry::with_builtins();
        let equals = registry.get(Catalog::STR_EQUALS).unwrap();
        assert!(equals(&[Value::Int(1), Value::string("x")]).is_err());
    }
}
