//! The expression IR.
//!
//! A closed set of node variants describing executable logic before
//! compilation. Trees are acyclic, built bottom-up, and immutable once
//! constructed. Every `Exit` must reference a label bound by an enclosing
//! `Loop` or `Block`; the compiler validates this before producing a
//! callable.

use std::sync::atomic::{AtomicU32, Ordering};

use lens_types::{MemberId, Name, TypeId};

use crate::value::Value;

/// Exit label bound by a `Loop` or `Block`.
///
/// Process-unique: `fresh()` never returns the same label twice, so nested
/// builders cannot collide.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label(u32);

static NEXT_LABEL: AtomicU32 = AtomicU32::new(0);

impl Label {
    /// Allocate a process-unique label.
    pub fn fresh() -> Label {
        Label(NEXT_LABEL.fetch_add(1, Ordering::Relaxed))
    }
}

/// Binary operators.
///
/// The six comparisons, plus the single arithmetic op the counted-loop
/// lowering needs for its post-increment. Short-circuit and/or are lowered
/// to `Conditional` nodes, not operators.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
}

/// What drives a loop.
#[derive(Clone, Debug, PartialEq)]
pub enum LoopHead {
    /// Pre-tested condition, re-evaluated before each iteration.
    While(Box<Expr>),
    /// Enumerate `source`, binding each element to `var` for the body.
    Each { source: Box<Expr>, var: Name },
}

/// A block-scoped local declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Local {
    pub name: Name,
    pub ty: TypeId,
}

/// An IR node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal value of a known type.
    Constant(Value, TypeId),
    /// Reference to a declared parameter.
    Parameter(Name, TypeId),
    /// Invocation of a catalog method; `target` is absent for static calls.
    Call {
        target: Option<Box<Expr>>,
        member: MemberId,
        args: Vec<Expr>,
    },
    /// Field or property read on a target value.
    MemberAccess { target: Box<Expr>, member: MemberId },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        cond: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    /// Loops until the head is exhausted or an `Exit` targets `exit`.
    Loop {
        head: LoopHead,
        body: Box<Expr>,
        exit: Label,
    },
    /// Sequential statements with block-scoped locals; the block's value is
    /// the last statement's value, or the value carried by an `Exit`
    /// targeting its label.
    Block {
        label: Option<Label>,
        locals: Vec<Local>,
        stmts: Vec<Expr>,
    },
    /// Labeled exit carrying an optional value.
    Exit {
        label: Label,
        value: Option<Box<Expr>>,
    },
    /// Assignment to a parameter or block-scoped local.
    Assign { target: Name, value: Box<Expr> },
}

impl Expr {
    /// Boolean constant.
    pub fn truth(b: bool) -> Expr {
        Expr::Constant(Value::Bool(b), lens_types::Catalog::BOOL)
    }

    /// Integer constant.
    pub fn int(n: i64) -> Expr {
        Expr::Constant(Value::Int(n), lens_types::Catalog::I64)
    }

    /// String constant.
    pub fn str(s: impl Into<String>) -> Expr {
        Expr::Constant(Value::string(s), lens_types::Catalog::STR)
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn cond(cond: Expr, then: Expr, otherwise: Expr) -> Expr {
        Expr::Conditional {
            cond: Box::new(cond),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn exit(label: Label, value: Option<Expr>) -> Expr {
        Expr::Exit {
            label,
            value: value.map(Box::new),
        }
    }

    pub fn assign(target: Name, value: Expr) -> Expr {
        Expr::Assign {
            target,
            value: Box::new(value),
        }
    }

    pub fn member(target: Expr, member: MemberId) -> Expr {
        Expr::MemberAccess {
            target: Box::new(target),
            member,
        }
    }

    pub fn call(target: Option<Expr>, member: MemberId, args: Vec<Expr>) -> Expr {
        Expr::Call {
            target: target.map(Box::new),
            member,
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_process_unique() {
        let a = Label::fresh();
        let b = Label::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn constructors_build_expected_shapes() {
        let e = Expr::binary(BinaryOp::Lt, Expr::int(1), Expr::int(2));
        let Expr::Binary { op, .. } = e else {
            panic!("expected binary");
        };
        assert_eq!(op, BinaryOp::Lt);

        assert!(matches!(Expr::truth(true), Expr::Constant(Value::Bool(true), _)));
    }
}
