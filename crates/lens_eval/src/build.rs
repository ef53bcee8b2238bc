//! Declarative tree builders.
//!
//! Guarded-value and short-circuit joins, the two canonical loop shapes,
//! the wildcard pattern predicate, and delegate/friend-handle
//! materialization. Builders either return a complete tree (or compiled
//! closure) or fail without leaving partial state behind.

use lens_ir::{BinaryOp, Expr, Label, Local, LoopHead, Value};
use lens_types::{Catalog, MemberId, MemberKind, Name, TypeId, TypeShape};

use crate::compile::{CompiledFunction, Compiler, Signature};
use crate::error::CompileError;

/// Join an ordered sequence of (condition, value) pairs and a final
/// else-value into a cascading if/else-if chain.
///
/// Evaluation is top to bottom, short-circuiting at the first true
/// condition; each branch performs a labeled exit carrying its value.
/// Empty input reduces to the else-value alone.
pub fn if_then_else_join(pairs: &[(Expr, Expr)], else_value: Expr) -> Expr {
    if pairs.is_empty() {
        return else_value;
    }
    let label = Label::fresh();
    let mut stmts: Vec<Expr> = pairs
        .iter()
        .map(|(cond, value)| {
            Expr::cond(
                cond.clone(),
                Expr::exit(label, Some(value.clone())),
                Expr::Constant(Value::Unit, Catalog::VOID),
            )
        })
        .collect();
    stmts.push(Expr::exit(label, Some(else_value)));
    Expr::Block {
        label: Some(label),
        locals: vec![],
        stmts,
    }
}

/// Left-to-right short-circuit conjunction over boolean expressions.
///
/// Empty input yields the constant `false` (asymmetric with vacuous truth,
/// but the documented default, preserved exactly).
pub fn and_also_join(exprs: &[Expr]) -> Expr {
    exprs
        .iter()
        .cloned()
        .reduce(|acc, next| Expr::cond(acc, next, Expr::truth(false)))
        .unwrap_or_else(|| Expr::truth(false))
}

/// Left-to-right short-circuit disjunction over boolean expressions.
///
/// Empty input yields the constant `false`.
pub fn or_else_join(exprs: &[Expr]) -> Expr {
    exprs
        .iter()
        .cloned()
        .reduce(|acc, next| Expr::cond(acc, Expr::truth(true), next))
        .unwrap_or_else(|| Expr::truth(false))
}

/// Canonical counted loop.
///
/// `from` and `to` must be integer constants of the same type. The loop
/// variable is initialized to `from`, tested with strict less-than against
/// `to` before each iteration, and post-incremented after the body runs.
/// The body receives the loop variable and an exit label it may use to
/// break early.
pub fn for_range<F>(var: Name, from: &Expr, to: &Expr, body: F) -> Result<Expr, CompileError>
where
    F: FnOnce(&Expr, Label) -> Expr,
{
    let (from_ty, to_ty) = match (from, to) {
        (Expr::Constant(Value::Int(_), a), Expr::Constant(Value::Int(_), b)) => (*a, *b),
        _ => {
            return Err(CompileError::InvalidArgument(
                "counted loop bounds must be integer constants".to_owned(),
            ));
        }
    };
    if from_ty != to_ty {
        return Err(CompileError::InvalidArgument(
            "counted loop bounds must share one comparable type".to_owned(),
        ));
    }

    let exit = Label::fresh();
    let var_expr = Expr::Parameter(var, from_ty);
    let user_body = body(&var_expr, exit);
    let step = Expr::assign(
        var,
        Expr::binary(
            BinaryOp::Add,
            var_expr.clone(),
            Expr::Constant(Value::Int(1), from_ty),
        ),
    );
    let test = Expr::binary(BinaryOp::Lt, var_expr, to.clone());

    Ok(Expr::Block {
        label: None,
        locals: vec![Local {
            name: var,
            ty: from_ty,
        }],
        stmts: vec![
            Expr::assign(var, from.clone()),
            Expr::Loop {
                head: LoopHead::While(Box::new(test)),
                body: Box::new(Expr::Block {
                    label: None,
                    locals: vec![],
                    stmts: vec![user_body, step],
                }),
                exit,
            },
        ],
    })
}

impl Compiler<'_> {
    /// Canonical iteration loop.
    ///
    /// The source's static shape must realize the enumeration capability;
    /// the element shape is extracted from that realization. The body
    /// receives the element variable and the break label.
    pub fn for_each<F>(&self, source: &Expr, var: Name, body: F) -> Result<Expr, CompileError>
    where
        F: FnOnce(&Expr, Label) -> Expr,
    {
        let source_ty = match source {
            Expr::Parameter(_, ty) | Expr::Constant(_, ty) => *ty,
            _ => {
                return Err(CompileError::InvalidArgument(
                    "enumeration source must be a parameter or constant with a static type"
                        .to_owned(),
                ));
            }
        };
        let Some(bound) = self.catalog().realize(source_ty, Catalog::ENUMERABLE)? else {
            return Err(CompileError::InvalidArgument(format!(
                "`{}` lacks an enumeration capability",
                self.catalog().friendly_name(source_ty)
            )));
        };
        let elem = match self.catalog().ty(bound).shape {
            TypeShape::Generic { ref args, .. } => args.first().copied(),
            _ => None,
        }
        .ok_or_else(|| {
            CompileError::InvalidArgument(format!(
                "`{}` realizes a malformed enumeration capability",
                self.catalog().friendly_name(source_ty)
            ))
        })?;

        let exit = Label::fresh();
        let elem_expr = Expr::Parameter(var, elem);
        let user_body = body(&elem_expr, exit);
        Ok(Expr::Loop {
            head: LoopHead::Each {
                source: Box::new(source.clone()),
                var,
            },
            body: Box::new(user_body),
            exit,
        })
    }

    /// Wildcard pattern predicate over a typed parameter.
    ///
    /// `%` at both ends means contains, leading only means ends-with,
    /// trailing only means starts-with, neither means exact equality.
    /// Literal `%` cannot be escaped (documented limitation).
    pub fn like_expression(
        &self,
        param: (Name, TypeId),
        target: Expr,
        pattern: &str,
    ) -> Result<CompiledFunction, CompileError> {
        let both = pattern.len() >= 2 && pattern.starts_with('%') && pattern.ends_with('%');
        let (member, needle) = if both {
            (Catalog::STR_CONTAINS, &pattern[1..pattern.len() - 1])
        } else if let Some(rest) = pattern.strip_prefix('%') {
            (Catalog::STR_ENDS_WITH, rest)
        } else if let Some(stem) = pattern.strip_suffix('%') {
            (Catalog::STR_STARTS_WITH, stem)
        } else {
            (Catalog::STR_EQUALS, pattern)
        };
        let call = Expr::call(Some(target), member, vec![Expr::str(needle)]);
        self.compile(Signature::new(vec![param], Catalog::BOOL), &call)
    }

    /// Materialize a catalog method as a compiled closure.
    ///
    /// Builds parameter placeholders matching the method's parameter list,
    /// with a leading self-parameter when the method is an instance method.
    /// `type_args` must match the method's generic arity.
    pub fn make_delegate(
        &self,
        method: MemberId,
        type_args: &[TypeId],
    ) -> Result<CompiledFunction, CompileError> {
        let data = self.catalog().member(method);
        let MemberKind::Method {
            ref params,
            ret,
            is_static,
            generic_arity,
        } = data.kind
        else {
            return Err(CompileError::NotSupported(format!(
                "member `{}` is not a plain direct-call target",
                self.catalog().member_name(method)
            )));
        };
        if usize::from(generic_arity) != type_args.len() {
            return Err(CompileError::InvalidArgument(format!(
                "method `{}` expects {} type argument(s), got {}",
                self.catalog().member_name(method),
                generic_arity,
                type_args.len()
            )));
        }

        let mut sig_params = Vec::with_capacity(params.len() + 1);
        let mut arg_exprs = Vec::with_capacity(params.len());
        let target = if is_static {
            None
        } else {
            let name = self.catalog().self_name();
            sig_params.push((name, data.declaring));
            Some(Expr::Parameter(name, data.declaring))
        };
        for (i, &ty) in params.iter().enumerate() {
            let name = self.catalog().arg_name(i).ok_or_else(|| {
                CompileError::InvalidArgument(format!(
                    "method `{}` exceeds the {}-parameter placeholder limit",
                    self.catalog().member_name(method),
                    Catalog::MAX_PLACEHOLDER_ARGS
                ))
            })?;
            sig_params.push((name, ty));
            arg_exprs.push(Expr::Parameter(name, ty));
        }

        let body = Expr::call(target, method, arg_exprs);
        self.compile(Signature::new(sig_params, ret), &body)
    }

    /// Locate a method by name across all accessibility tiers and compile
    /// an invocable handle for it.
    ///
    /// Fails with `NotFound` if no such method exists.
    pub fn friend_handle(
        &self,
        ty: TypeId,
        name: &str,
        param_types: Option<&[TypeId]>,
    ) -> Result<CompiledFunction, CompileError> {
        let method = self
            .catalog()
            .find_method(ty, name, param_types)
            .ok_or_else(|| {
                CompileError::NotFound(format!(
                    "no method `{name}` on `{}`",
                    self.catalog().friendly_name(ty)
                ))
            })?;
        self.make_delegate(method, &[])
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use crate::natives::NativeRegistry;
    use lens_types::{MethodOpts, Visibility};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn setup() -> (Catalog, NativeRegistry) {
        (Catalog::new(), NativeRegistry::with_builtins())
    }

    /// An erroring operand proves a join short-circuited past it.
    fn poison() -> Expr {
        Expr::binary(BinaryOp::Lt, Expr::int(1), Expr::str("boom"))
    }

    #[test]
    fn empty_if_join_compiles_to_the_else_value() {
        let (mut catalog, natives) = setup();
        let x = catalog.intern("x");
        let compiler = Compiler::new(&catalog, &natives);

        let tree = if_then_else_join(&[], Expr::int(41));
        let f = compiler
            .compile(Signature::new(vec![(x, Catalog::I64)], Catalog::I64), &tree)
            .unwrap();
        for input in [Value::Int(0), Value::Int(100), Value::Null] {
            assert_eq!(f.invoke(&[input]).unwrap(), Value::Int(41));
        }
    }

    #[test]
    fn if_join_takes_the_first_true_branch() {
        let (mut catalog, natives) = setup();
        let x = catalog.intern("x");
        let compiler = Compiler::new(&catalog, &natives);
        let param = Expr::Parameter(x, Catalog::I64);

        let tree = if_then_else_join(
            &[
                (
                    Expr::binary(BinaryOp::Lt, param.clone(), Expr::int(0)),
                    Expr::str("negative"),
                ),
                (
                    Expr::binary(BinaryOp::Eq, param.clone(), Expr::int(0)),
                    Expr::str("zero"),
                ),
                (
                    Expr::binary(BinaryOp::Gt, param, Expr::int(0)),
                    Expr::str("positive"),
                ),
            ],
            Expr::str("unreachable"),
        );
        let f = compiler
            .compile(Signature::new(vec![(x, Catalog::I64)], Catalog::STR), &tree)
            .unwrap();
        assert_eq!(f.invoke(&[Value::Int(-5)]).unwrap(), Value::string("negative"));
        assert_eq!(f.invoke(&[Value::Int(0)]).unwrap(), Value::string("zero"));
        assert_eq!(f.invoke(&[Value::Int(3)]).unwrap(), Value::string("positive"));
    }

    #[test]
    fn empty_joins_default_to_false() {
        let (catalog, natives) = setup();
        let compiler = Compiler::new(&catalog, &natives);
        for tree in [and_also_join(&[]), or_else_join(&[])] {
            let f = compiler
                .compile(Signature::new(vec![], Catalog::BOOL), &tree)
                .unwrap();
            assert_eq!(f.invoke(&[]).unwrap(), Value::Bool(false));
        }
    }

    #[test]
    fn singleton_joins_evaluate_to_the_expression_itself() {
        let (catalog, natives) = setup();
        let compiler = Compiler::new(&catalog, &natives);
        for (tree, expected) in [
            (and_also_join(&[Expr::truth(true)]), true),
            (and_also_join(&[Expr::truth(false)]), false),
            (or_else_join(&[Expr::truth(true)]), true),
            (or_else_join(&[Expr::truth(false)]), false),
        ] {
            let f = compiler
                .compile(Signature::new(vec![], Catalog::BOOL), &tree)
                .unwrap();
            assert_eq!(f.invoke(&[]).unwrap(), Value::Bool(expected));
        }
    }

    #[test]
    fn joins_short_circuit_left_to_right() {
        let (catalog, natives) = setup();
        let compiler = Compiler::new(&catalog, &natives);

        // false && poison: never evaluates the poison operand.
        let and_tree = and_also_join(&[Expr::truth(false), poison()]);
        let f = compiler
            .compile(Signature::new(vec![], Catalog::BOOL), &and_tree)
            .unwrap();
        assert_eq!(f.invoke(&[]).unwrap(), Value::Bool(false));

        // true || poison: likewise.
        let or_tree = or_else_join(&[Expr::truth(true), poison()]);
        let f = compiler
            .compile(Signature::new(vec![], Catalog::BOOL), &or_tree)
            .unwrap();
        assert_eq!(f.invoke(&[]).unwrap(), Value::Bool(true));

        // A conjunction that must reach the poison fails at runtime.
        let reached = and_also_join(&[Expr::truth(true), poison()]);
        let f = compiler
            .compile(Signature::new(vec![], Catalog::BOOL), &reached)
            .unwrap();
        assert!(matches!(f.invoke(&[]), Err(EvalError::TypeMismatch(_))));
    }

    /// Register a recording native on a fresh type; returns the member to
    /// call and the shared log of observed integers.
    fn recorder(catalog: &mut Catalog, natives: &mut NativeRegistry) -> (MemberId, Arc<Mutex<Vec<i64>>>) {
        let probe = catalog.class("Probe", None);
        let m = catalog.method_with(
            probe,
            "Record",
            &[Catalog::I64],
            Catalog::VOID,
            MethodOpts {
                is_static: true,
                ..MethodOpts::default()
            },
        );
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        natives.register(m, move |args| match args {
            [Value::Int(n)] => {
                if let Ok(mut log) = sink.lock() {
                    log.push(*n);
                }
                Ok(Value::Unit)
            }
            _ => Err("Record expects one int".to_owned()),
        });
        (m, log)
    }

    #[test]
    fn for_range_runs_the_body_in_order() {
        let (mut catalog, mut natives) = setup();
        let (record, log) = recorder(&mut catalog, &mut natives);
        let i = catalog.intern("i");
        let compiler = Compiler::new(&catalog, &natives);

        let tree = for_range(i, &Expr::int(0), &Expr::int(5), |var, _exit| {
            Expr::call(None, record, vec![var.clone()])
        })
        .unwrap();
        let f = compiler
            .compile(Signature::new(vec![], Catalog::VOID), &tree)
            .unwrap();
        f.invoke(&[]).unwrap();
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn for_range_with_equal_bounds_never_runs() {
        let (mut catalog, mut natives) = setup();
        let (record, log) = recorder(&mut catalog, &mut natives);
        let i = catalog.intern("i");
        let compiler = Compiler::new(&catalog, &natives);

        let tree = for_range(i, &Expr::int(5), &Expr::int(5), |var, _exit| {
            Expr::call(None, record, vec![var.clone()])
        })
        .unwrap();
        let f = compiler
            .compile(Signature::new(vec![], Catalog::VOID), &tree)
            .unwrap();
        f.invoke(&[]).unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn for_range_body_can_break_early() {
        let (mut catalog, mut natives) = setup();
        let (record, log) = recorder(&mut catalog, &mut natives);
        let i = catalog.intern("i");
        let compiler = Compiler::new(&catalog, &natives);

        let tree = for_range(i, &Expr::int(0), &Expr::int(10), |var, exit| {
            Expr::Block {
                label: None,
                locals: vec![],
                stmts: vec![
                    Expr::cond(
                        Expr::binary(BinaryOp::Eq, var.clone(), Expr::int(3)),
                        Expr::exit(exit, None),
                        Expr::Constant(Value::Unit, Catalog::VOID),
                    ),
                    Expr::call(None, record, vec![var.clone()]),
                ],
            }
        })
        .unwrap();
        let f = compiler
            .compile(Signature::new(vec![], Catalog::VOID), &tree)
            .unwrap();
        f.invoke(&[]).unwrap();
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn for_range_rejects_mismatched_or_nonconstant_bounds() {
        let (mut catalog, _) = setup();
        let i = catalog.intern("i");

        let mismatch = for_range(
            i,
            &Expr::Constant(Value::Int(0), Catalog::I32),
            &Expr::Constant(Value::Int(5), Catalog::I64),
            |_, _| Expr::int(0),
        );
        assert!(matches!(mismatch, Err(CompileError::InvalidArgument(_))));

        let nonconst = for_range(i, &Expr::Parameter(i, Catalog::I64), &Expr::int(5), |_, _| {
            Expr::int(0)
        });
        assert!(matches!(nonconst, Err(CompileError::InvalidArgument(_))));

        let nonint = for_range(i, &Expr::str("a"), &Expr::str("b"), |_, _| Expr::int(0));
        assert!(matches!(nonint, Err(CompileError::InvalidArgument(_))));
    }

    #[test]
    fn for_each_drives_enumeration_of_an_array_parameter() {
        let (mut catalog, mut natives) = setup();
        let (record, log) = recorder(&mut catalog, &mut natives);
        let ints = catalog.array(Catalog::I64, 1);
        let xs = catalog.intern("xs");
        let item = catalog.intern("item");
        let compiler = Compiler::new(&catalog, &natives);

        let source = Expr::Parameter(xs, ints);
        let tree = compiler
            .for_each(&source, item, |elem, _exit| {
                Expr::call(None, record, vec![elem.clone()])
            })
            .unwrap();
        let f = compiler
            .compile(Signature::new(vec![(xs, ints)], Catalog::VOID), &tree)
            .unwrap();
        f.invoke(&[Value::list(vec![
            Value::Int(10),
            Value::Int(20),
            Value::Int(30),
        ])])
        .unwrap();
        assert_eq!(*log.lock().unwrap(), vec![10, 20, 30]);
    }

    #[test]
    fn for_each_breaks_via_the_exit_label() {
        let (mut catalog, mut natives) = setup();
        let (record, log) = recorder(&mut catalog, &mut natives);
        let ints = catalog.array(Catalog::I64, 1);
        let xs = catalog.intern("xs");
        let item = catalog.intern("item");
        let compiler = Compiler::new(&catalog, &natives);

        let source = Expr::Parameter(xs, ints);
        let tree = compiler
            .for_each(&source, item, |elem, exit| Expr::Block {
                label: None,
                locals: vec![],
                stmts: vec![
                    Expr::cond(
                        Expr::binary(BinaryOp::Gt, elem.clone(), Expr::int(15)),
                        Expr::exit(exit, None),
                        Expr::Constant(Value::Unit, Catalog::VOID),
                    ),
                    Expr::call(None, record, vec![elem.clone()]),
                ],
            })
            .unwrap();
        let f = compiler
            .compile(Signature::new(vec![(xs, ints)], Catalog::VOID), &tree)
            .unwrap();
        f.invoke(&[Value::list(vec![
            Value::Int(10),
            Value::Int(20),
            Value::Int(30),
        ])])
        .unwrap();
        assert_eq!(*log.lock().unwrap(), vec![10]);
    }

    #[test]
    fn for_each_requires_an_enumerable_source_shape() {
        let (mut catalog, natives) = setup();
        let x = catalog.intern("x");
        let item = catalog.intern("item");
        let compiler = Compiler::new(&catalog, &natives);

        let source = Expr::Parameter(x, Catalog::I64);
        let result = compiler.for_each(&source, item, |_, _| Expr::int(0));
        assert!(matches!(result, Err(CompileError::InvalidArgument(_))));
    }

    #[test]
    fn like_expression_covers_all_four_wildcard_shapes() {
        let (mut catalog, natives) = setup();
        let widget = catalog.class("Widget", None);
        let name_prop = catalog.auto_property(widget, "Name", Catalog::STR);
        let w = catalog.intern("w");
        let name_key = catalog.intern("Name");
        let compiler = Compiler::new(&catalog, &natives);

        let make = |pattern: &str| {
            compiler
                .like_expression(
                    (w, widget),
                    Expr::member(Expr::Parameter(w, widget), name_prop),
                    pattern,
                )
                .unwrap()
        };
        let named = |s: &str| Value::object(widget, [(name_key, Value::string(s))]);

        let contains = make("%abc%");
        assert_eq!(contains.invoke(&[named("xxabcxx")]).unwrap(), Value::Bool(true));
        assert_eq!(contains.invoke(&[named("abxcx")]).unwrap(), Value::Bool(false));

        let starts = make("abc%");
        assert_eq!(starts.invoke(&[named("abcdef")]).unwrap(), Value::Bool(true));
        assert_eq!(starts.invoke(&[named("xabc")]).unwrap(), Value::Bool(false));

        let ends = make("%abc");
        assert_eq!(ends.invoke(&[named("xyzabc")]).unwrap(), Value::Bool(true));
        assert_eq!(ends.invoke(&[named("abcx")]).unwrap(), Value::Bool(false));

        let exact = make("abc");
        assert_eq!(exact.invoke(&[named("abc")]).unwrap(), Value::Bool(true));
        assert_eq!(exact.invoke(&[named("abcd")]).unwrap(), Value::Bool(false));
    }

    #[test]
    fn make_delegate_materializes_static_methods() {
        let (mut catalog, mut natives) = setup();
        let calc = catalog.class("Calc", None);
        let add = catalog.method_with(
            calc,
            "Add",
            &[Catalog::I64, Catalog::I64],
            Catalog::I64,
            MethodOpts {
                is_static: true,
                ..MethodOpts::default()
            },
        );
        natives.register(add, |args| match args {
            [Value::Int(a), Value::Int(b)] => Ok(Value::Int(a + b)),
            _ => Err("Add expects two ints".to_owned()),
        });
        let compiler = Compiler::new(&catalog, &natives);

        let f = compiler.make_delegate(add, &[]).unwrap();
        assert_eq!(f.signature().params.len(), 2);
        assert_eq!(
            f.invoke(&[Value::Int(2), Value::Int(3)]).unwrap(),
            Value::Int(5)
        );
    }

    #[test]
    fn make_delegate_prefixes_a_self_parameter_for_instance_methods() {
        let (mut catalog, mut natives) = setup();
        let counter = catalog.class("Counter", None);
        catalog.field(counter, "Base", Catalog::I64, Visibility::Public, false, false);
        let base_key = catalog.intern("Base");
        let plus = catalog.method(counter, "Plus", &[Catalog::I64], Catalog::I64);
        natives.register(plus, move |args| match args {
            [Value::Object(recv), Value::Int(n)] => match recv.get(base_key) {
                Some(Value::Int(base)) => Ok(Value::Int(base + n)),
                _ => Err("Counter has no Base".to_owned()),
            },
            _ => Err("Plus expects a receiver and an int".to_owned()),
        });
        let compiler = Compiler::new(&catalog, &natives);

        let f = compiler.make_delegate(plus, &[]).unwrap();
        assert_eq!(f.signature().params.len(), 2);
        let obj = Value::object(counter, [(base_key, Value::Int(100))]);
        assert_eq!(f.invoke(&[obj, Value::Int(4)]).unwrap(), Value::Int(104));
    }

    #[test]
    fn make_delegate_rejects_non_method_members_and_bad_arity() {
        let (mut catalog, natives) = setup();
        let widget = catalog.class("Widget", None);
        let prop = catalog.auto_property(widget, "Size", Catalog::I32);
        let generic = catalog.method_with(
            widget,
            "Cast",
            &[],
            Catalog::OBJECT,
            MethodOpts {
                generic_arity: 1,
                ..MethodOpts::default()
            },
        );
        let compiler = Compiler::new(&catalog, &natives);

        assert!(matches!(
            compiler.make_delegate(prop, &[]),
            Err(CompileError::NotSupported(_))
        ));
        assert!(matches!(
            compiler.make_delegate(generic, &[]),
            Err(CompileError::InvalidArgument(_))
        ));
    }

    #[test]
    fn friend_handle_reaches_non_public_methods() {
        let (mut catalog, mut natives) = setup();
        let vault = catalog.class("Vault", None);
        let open = catalog.method_with(
            vault,
            "Open",
            &[Catalog::I64],
            Catalog::BOOL,
            MethodOpts {
                visibility: Visibility::NonPublic,
                is_static: true,
                ..MethodOpts::default()
            },
        );
        natives.register(open, |args| match args {
            [Value::Int(code)] => Ok(Value::Bool(*code == 42)),
            _ => Err("Open expects one int".to_owned()),
        });
        let compiler = Compiler::new(&catalog, &natives);

        let f = compiler
            .friend_handle(vault, "Open", Some(&[Catalog::I64]))
            .unwrap();
        assert_eq!(f.invoke(&[Value::Int(42)]).unwrap(), Value::Bool(true));
        assert_eq!(f.invoke(&[Value::Int(7)]).unwrap(), Value::Bool(false));

        assert!(matches!(
            compiler.friend_handle(vault, "Close", None),
            Err(CompileError::NotFound(_))
        ));
        assert!(matches!(
            compiler.friend_handle(vault, "Open", Some(&[Catalog::STR])),
            Err(CompileError::NotFound(_))
        ));
    }
}
