//! Expression IR and runtime values for lens.
//!
//! - `Value`: the runtime value union produced and consumed by compiled
//!   functions.
//! - `Expr`: a small closed set of IR node variants (constants, parameters,
//!   calls, comparisons, conditionals, loops, blocks, labeled exits) used to
//!   describe executable logic before compilation. Trees are acyclic, built
//!   bottom-up, and immutable once constructed.
//! - `defaults`: zero-value computation for catalog types.

mod defaults;
mod expr;
mod value;

pub use defaults::{default_value, system_default_value};
pub use expr::{BinaryOp, Expr, Label, Local, LoopHead};
pub use value::{ObjectValue, Value};
