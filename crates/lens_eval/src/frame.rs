//! Invocation frame with a scope stack.
//!
//! One frame per invocation: parameters occupy the outermost scope, blocks
//! and enumeration loops push and pop nested scopes. Lookup and assignment
//! walk innermost-out.

use lens_ir::Value;
use lens_types::Name;
use rustc_hash::FxHashMap;

/// Variable bindings for one invocation of a compiled function.
#[derive(Debug, Default)]
pub struct Frame {
    scopes: Vec<FxHashMap<Name, Value>>,
}

impl Frame {
    /// Create a frame with a single (parameter) scope.
    pub fn new() -> Self {
        Frame {
            scopes: vec![FxHashMap::default()],
        }
    }

    /// Push a nested scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Pop the innermost scope.
    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Define a binding in the innermost scope.
    pub fn define(&mut self, name: Name, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, value);
        }
    }

    /// Reassign an existing binding, innermost scope first.
    ///
    /// Returns `false` if the name is not bound in any scope.
    pub fn assign(&mut self, name: Name, value: Value) -> bool {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(&name) {
                *slot = value;
                return true;
            }
        }
        false
    }

    /// Look up a binding, innermost scope first.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name))
    }
}
