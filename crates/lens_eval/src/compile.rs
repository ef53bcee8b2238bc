//! Closure-composition compilation.
//!
//! Each IR node compiles once into a boxed closure composed from its
//! children; the result is a `CompiledFunction` whose invocation carries no
//! further compilation cost. Member names and native implementations are
//! resolved eagerly during compilation, so the produced closure borrows
//! nothing from the catalog and is safe to invoke concurrently.
//!
//! Labeled exits travel as a `Flow` signal, not an error: every node
//! propagates `Flow::Exit` upward until the `Loop` or `Block` binding the
//! label absorbs it. The compiler validates that every `Exit` targets a
//! label bound by an enclosing node, so no exit can escape the root.

use lens_ir::{BinaryOp, Expr, Label, LoopHead, Value};
use lens_types::{Catalog, Name, TypeId};

use crate::error::{CompileError, EvalError};
use crate::frame::Frame;
use crate::natives::NativeRegistry;

/// Result of evaluating one node: a plain value, or an in-flight labeled
/// exit unwinding toward its binder.
pub enum Flow {
    Value(Value),
    Exit(Label, Value),
}

type Thunk = Box<dyn Fn(&mut Frame) -> Result<Flow, EvalError> + Send + Sync>;

/// Extract a plain value from a child flow, re-propagating exits.
macro_rules! try_value {
    ($flow:expr) => {
        match $flow {
            Flow::Value(v) => v,
            exit @ Flow::Exit(..) => return Ok(exit),
        }
    };
}

/// Declared parameter/return signature of a compiled function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<(Name, TypeId)>,
    pub ret: TypeId,
}

impl Signature {
    pub fn new(params: Vec<(Name, TypeId)>, ret: TypeId) -> Self {
        Signature { params, ret }
    }
}

/// An invocable closure with a fixed arity and signature, produced once
/// from an expression tree.
pub struct CompiledFunction {
    signature: Signature,
    thunk: Thunk,
}

impl CompiledFunction {
    /// Declared signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Invoke the compiled closure. Pure call, no recompilation.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, EvalError> {
        if args.len() != self.signature.params.len() {
            return Err(EvalError::ArityMismatch {
                expected: self.signature.params.len(),
                got: args.len(),
            });
        }
        let mut frame = Frame::new();
        for ((name, _), value) in self.signature.params.iter().zip(args) {
            frame.define(*name, value.clone());
        }
        match (self.thunk)(&mut frame)? {
            Flow::Value(v) => Ok(v),
            Flow::Exit(..) => Err(EvalError::EscapedExit),
        }
    }
}

/// One-shot compiler from expression trees to callable closures.
pub struct Compiler<'c> {
    catalog: &'c Catalog,
    natives: &'c NativeRegistry,
}

impl<'c> Compiler<'c> {
    pub fn new(catalog: &'c Catalog, natives: &'c NativeRegistry) -> Self {
        Compiler { catalog, natives }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Compile a tree into a callable bound to the given signature.
    ///
    /// Validates that every `Exit` targets a label bound by an enclosing
    /// `Loop` or `Block`; a tree that fails validation produces no partial
    /// artifact.
    pub fn compile(&self, signature: Signature, body: &Expr) -> Result<CompiledFunction, CompileError> {
        let mut labels = Vec::new();
        let thunk = self.compile_expr(body, &mut labels)?;
        tracing::debug!(arity = signature.params.len(), "compiled expression tree");
        Ok(CompiledFunction { signature, thunk })
    }

    fn compile_expr(&self, expr: &Expr, labels: &mut Vec<Label>) -> Result<Thunk, CompileError> {
        match expr {
            Expr::Constant(value, _) => {
                let value = value.clone();
                Ok(Box::new(move |_| Ok(Flow::Value(value.clone()))))
            }

            Expr::Parameter(name, _) => {
                let name = *name;
                let display = self.catalog.resolve(name).to_owned();
                Ok(Box::new(move |frame| {
                    frame
                        .lookup(name)
                        .cloned()
                        .map(Flow::Value)
                        .ok_or_else(|| EvalError::UndefinedVariable(display.clone()))
                }))
            }

            Expr::MemberAccess { target, member } => {
                let target = self.compile_expr(target, labels)?;
                let field = self.catalog.member(*member).name;
                let display = self.catalog.member_name(*member).to_owned();
                Ok(Box::new(move |frame| {
                    let value = try_value!(target(frame)?);
                    let Value::Object(obj) = &value else {
                        return Err(EvalError::MissingField {
                            field: display.clone(),
                            type_name: value.type_name(),
                        });
                    };
                    obj.get(field).cloned().map(Flow::Value).ok_or_else(|| {
                        EvalError::MissingField {
                            field: display.clone(),
                            type_name: "object",
                        }
                    })
                }))
            }

            Expr::Call {
                target,
                member,
                args,
            } => {
                let native = self.natives.get(*member).cloned().ok_or_else(|| {
                    CompileError::NotFound(format!(
                        "no native implementation registered for `{}.{}`",
                        self.catalog.friendly_name(self.catalog.member(*member).declaring),
                        self.catalog.member_name(*member)
                    ))
                })?;
                let target = target
                    .as_deref()
                    .map(|t| self.compile_expr(t, labels))
                    .transpose()?;
                let args = args
                    .iter()
                    .map(|a| self.compile_expr(a, labels))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Box::new(move |frame| {
                    let mut argv = Vec::with_capacity(args.len() + 1);
                    if let Some(target) = &target {
                        argv.push(try_value!(target(frame)?));
                    }
                    for arg in &args {
                        argv.push(try_value!(arg(frame)?));
                    }
                    native(&argv).map(Flow::Value).map_err(EvalError::Native)
                }))
            }

            Expr::Binary { op, left, right } => {
                let op = *op;
                let left = self.compile_expr(left, labels)?;
                let right = self.compile_expr(right, labels)?;
                Ok(Box::new(move |frame| {
                    let l = try_value!(left(frame)?);
                    let r = try_value!(right(frame)?);
                    apply_binary(op, &l, &r).map(Flow::Value)
                }))
            }

            Expr::Conditional {
                cond,
                then,
                otherwise,
            } => {
                let cond = self.compile_expr(cond, labels)?;
                let then = self.compile_expr(then, labels)?;
                let otherwise = self.compile_expr(otherwise, labels)?;
                Ok(Box::new(move |frame| {
                    let c = try_value!(cond(frame)?);
                    let Value::Bool(c) = c else {
                        return Err(EvalError::TypeMismatch(format!(
                            "condition must be bool, got {}",
                            c.type_name()
                        )));
                    };
                    if c {
                        then(frame)
                    } else {
                        otherwise(frame)
                    }
                }))
            }

            Expr::Loop { head, body, exit } => {
                let exit = *exit;
                labels.push(exit);
                let compiled = match head {
                    LoopHead::While(cond) => {
                        let cond = self.compile_expr(cond, labels)?;
                        let body = self.compile_expr(body, labels)?;
                        let thunk: Thunk = Box::new(move |frame| {
                            loop {
                                let test = match cond(frame)? {
                                    Flow::Value(v) => v,
                                    Flow::Exit(l, v) if l == exit => return Ok(Flow::Value(v)),
                                    e => return Ok(e),
                                };
                                let Value::Bool(go) = test else {
                                    return Err(EvalError::TypeMismatch(format!(
                                        "loop condition must be bool, got {}",
                                        test.type_name()
                                    )));
                                };
                                if !go {
                                    return Ok(Flow::Value(Value::Unit));
                                }
                                match body(frame)? {
                                    Flow::Value(_) => {}
                                    Flow::Exit(l, v) if l == exit => {
                                        return Ok(Flow::Value(v));
                                    }
                                    e => return Ok(e),
                                }
                            }
                        });
                        Ok(thunk)
                    }
                    LoopHead::Each { source, var } => {
                        let var = *var;
                        let source = self.compile_expr(source, labels)?;
                        let body = self.compile_expr(body, labels)?;
                        let thunk: Thunk = Box::new(move |frame| {
                            let items = match source(frame)? {
                                Flow::Value(Value::List(items)) => items,
                                Flow::Value(other) => {
                                    return Err(EvalError::NotEnumerable(other.type_name()));
                                }
                                Flow::Exit(l, v) if l == exit => return Ok(Flow::Value(v)),
                                e => return Ok(e),
                            };
                            for item in items {
                                frame.push_scope();
                                frame.define(var, item);
                                let flow = body(frame);
                                frame.pop_scope();
                                match flow? {
                                    Flow::Value(_) => {}
                                    Flow::Exit(l, v) if l == exit => {
                                        return Ok(Flow::Value(v));
                                    }
                                    e => return Ok(e),
                                }
                            }
                            Ok(Flow::Value(Value::Unit))
                        });
                        Ok(thunk)
                    }
                };
                labels.pop();
                compiled
            }

            Expr::Block {
                label,
                locals,
                stmts,
            } => {
                let label = *label;
                if let Some(l) = label {
                    labels.push(l);
                }
                let compiled = stmts
                    .iter()
                    .map(|s| self.compile_expr(s, labels))
                    .collect::<Result<Vec<_>, _>>();
                if label.is_some() {
                    labels.pop();
                }
                let stmts = compiled?;
                let locals: Vec<Name> = locals.iter().map(|l| l.name).collect();
                Ok(Box::new(move |frame| {
                    frame.push_scope();
                    for &name in &locals {
                        frame.define(name, Value::Unit);
                    }
                    let mut result = Value::Unit;
                    for stmt in &stmts {
                        match stmt(frame) {
                            Ok(Flow::Value(v)) => result = v,
                            Ok(Flow::Exit(l, v)) if Some(l) == label => {
                                frame.pop_scope();
                                return Ok(Flow::Value(v));
                            }
                            Ok(e) => {
                                frame.pop_scope();
                                return Ok(e);
                            }
                            Err(err) => {
                                frame.pop_scope();
                                return Err(err);
                            }
                        }
                    }
                    frame.pop_scope();
                    Ok(Flow::Value(result))
                }))
            }

            Expr::Exit { label, value } => {
                let label = *label;
                if !labels.contains(&label) {
                    return Err(CompileError::UnboundLabel(label));
                }
                let value = value
                    .as_deref()
                    .map(|v| self.compile_expr(v, labels))
                    .transpose()?;
                Ok(Box::new(move |frame| {
                    let v = match &value {
                        Some(thunk) => try_value!(thunk(frame)?),
                        None => Value::Unit,
                    };
                    Ok(Flow::Exit(label, v))
                }))
            }

            Expr::Assign { target, value } => {
                let name = *target;
                let display = self.catalog.resolve(name).to_owned();
                let value = self.compile_expr(value, labels)?;
                Ok(Box::new(move |frame| {
                    let v = try_value!(value(frame)?);
                    if frame.assign(name, v.clone()) {
                        Ok(Flow::Value(v))
                    } else {
                        Err(EvalError::UndefinedVariable(display.clone()))
                    }
                }))
            }
        }
    }
}

fn apply_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::Ne => Ok(Value::Bool(left != right)),
        BinaryOp::Add => match (left, right) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            _ => Err(EvalError::TypeMismatch(format!(
                "cannot add {} and {}",
                left.type_name(),
                right.type_name()
            ))),
        },
        BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
            let ord = compare(left, right)?;
            let holds = match op {
                BinaryOp::Lt => ord.is_lt(),
                BinaryOp::Le => ord.is_le(),
                BinaryOp::Gt => ord.is_gt(),
                _ => ord.is_ge(),
            };
            Ok(Value::Bool(holds))
        }
    }
}

fn compare(left: &Value, right: &Value) -> Result<std::cmp::Ordering, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).ok_or_else(|| {
            EvalError::TypeMismatch("NaN admits no ordering".to_owned())
        }),
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
        _ => Err(EvalError::TypeMismatch(format!(
            "cannot order {} against {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}
