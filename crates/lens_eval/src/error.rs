//! Error taxonomy for compilation and invocation.
//!
//! Compilation failures are local and synchronous: a builder that fails
//! never leaves a half-built tree or a partially-compiled closure visible
//! to the caller.

use lens_ir::Label;
use lens_types::QueryError;
use thiserror::Error;

/// Failure while building or compiling an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Malformed or precondition-violating input (mismatched loop bound
    /// types, non-enumerable loop source, wrong type-argument count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Structural lookup failure (missing method, missing native
    /// implementation).
    #[error("not found: {0}")]
    NotFound(String),

    /// The requested shape is not something the builder can materialize
    /// (e.g. a non-method member as a delegate target).
    #[error("not supported: {0}")]
    NotSupported(String),

    /// An `Exit` references a label no enclosing `Loop` or `Block` binds.
    #[error("exit targets label {0:?}, which no enclosing loop or block binds")]
    UnboundLabel(Label),
}

impl From<QueryError> for CompileError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidArgument(msg) => CompileError::InvalidArgument(msg),
            QueryError::NotFound(msg) => CompileError::NotFound(msg),
        }
    }
}

/// Runtime failure while invoking a compiled function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expected {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("no field `{field}` on a value of type {type_name}")]
    MissingField {
        field: String,
        type_name: &'static str,
    },

    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("value of type {0} is not enumerable")]
    NotEnumerable(&'static str),

    /// A native method implementation reported a failure.
    #[error("{0}")]
    Native(String),

    /// An exit label escaped the compiled body. Compile-time label
    /// validation makes this unreachable for well-formed trees.
    #[error("an exit label escaped the compiled body")]
    EscapedExit,
}

/// Result of invoking a compiled function.
pub type EvalResult = Result<lens_ir::Value, EvalError>;
