//! Lens Eval - Closure-composition compiler for lens expression trees.
//!
//! This crate turns `lens_ir` expression trees into reusable, thread-safe
//! compiled closures, with validation performed once at compile time.
//!
//! # Architecture
//!
//! The compiler uses:
//! - `Compiler`: Walks a tree once, fusing each node into a closure
//! - `Frame`: Variable scoping with a scope stack, one frame per invocation
//! - `NativeRegistry`: Callable implementations for catalog methods
//! - Declarative builders in `build`: joins, counted and enumeration
//!   loops, wildcard predicates, and delegate materialization
//!
//! Labeled exits travel as a `Flow` signal, never as an error; label
//! validity and native availability are checked while compiling, so
//! `CompiledFunction::invoke` can only fail on value-level problems.

pub mod build;
mod compile;
mod error;
mod frame;
mod natives;

pub use build::{and_also_join, for_range, if_then_else_join, or_else_join};
pub use compile::{CompiledFunction, Compiler, Flow, Signature};
pub use error::{CompileError, EvalError, EvalResult};
pub use frame::Frame;
pub use natives::{NativeFn, NativeRegistry};
