use std::{cell::RefCell, rc::Rc};

use log::debug;
use sl_syntax::ast::{BinOp, Block, Expr, Ident, Program, Stmt, UnaryOp};

use crate::{
    environment::Env,
    error::{runtime_error, ErrorMsg},
    types::{Callable, Func, Value},
};

/// Hands a return-signal or error straight back to the caller of the
/// enclosing function, otherwise evaluates to the value itself.
macro_rules! propagate {
    ($value:expr) => {
        match $value {
            value if value.is_signal() => return value,
            value => value,
        }
    };
}

/// Remaining stack below which evaluation switches to a freshly grown segment.
const RED_ZONE: usize = 100 * 1024;
/// Size of each stack segment allocated once the red zone is reached.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, growing the native stack first if it is close to running out,
/// so the depth of a program is bounded by `Limits` rather than by the
/// thread it happens to run on.
#[inline]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Nested function calls allowed before evaluation fails.
    pub max_call_depth: usize,
    /// Iterations allowed per `for` loop, unbounded when `None`.
    pub max_loop_iterations: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_call_depth: 10_000,
            max_loop_iterations: None,
        }
    }
}

#[derive(Default, Debug)]
pub struct Interpreter {
    limits: Limits,
    depth: usize,
}

impl Interpreter {
    pub fn new(limits: Limits) -> Self {
        Self { limits, depth: 0 }
    }

    pub fn interpret_program(&mut self, program: &Program, env: &Rc<RefCell<Env>>) -> Value {
        let mut result = Value::Null;
        for stmt in &program.statements {
            result = match self.interpret_stmt(stmt, env) {
                // A top-level return ends the run with its value
                Value::Return(value) => return *value,
                e @ Value::Error(_) => return e,
                value => value,
            };
        }
        result
    }

    fn interpret_block(&mut self, block: &Block, env: &Rc<RefCell<Env>>) -> Value {
        let mut result = Value::Null;
        for stmt in &block.statements {
            result = propagate!(self.interpret_stmt(stmt, env));
        }
        result
    }

    fn interpret_stmt(&mut self, stmt: &Stmt, env: &Rc<RefCell<Env>>) -> Value {
        match stmt {
            Stmt::Expr(expr) => self.interpret_expr(expr, env),
            Stmt::Var { ident, value } => self.interpret_var_stmt(ident, value, env),
            Stmt::Return(expr) => self.interpret_return_stmt(expr, env),
            Stmt::Function {
                ident,
                params,
                body,
            } => self.interpret_function(ident, params, body, env),
        }
    }

    fn interpret_var_stmt(&mut self, ident: &Ident, expr: &Expr, env: &Rc<RefCell<Env>>) -> Value {
        let value = propagate!(self.interpret_expr(expr, env));
        env.borrow_mut().set(&ident.name, value.clone());
        value
    }

    fn interpret_return_stmt(&mut self, expr: &Expr, env: &Rc<RefCell<Env>>) -> Value {
        Value::Return(Box::new(propagate!(self.interpret_expr(expr, env))))
    }

    fn interpret_function(
        &mut self,
        ident: &Ident,
        params: &[Ident],
        body: &Block,
        env: &Rc<RefCell<Env>>,
    ) -> Value {
        let func = Self::make_func(Some(ident), params, body, env);
        env.borrow_mut().set(&ident.name, func.clone());
        func
    }

    fn make_func(
        ident: Option<&Ident>,
        params: &[Ident],
        body: &Block,
        env: &Rc<RefCell<Env>>,
    ) -> Value {
        Value::Func(Func {
            name: ident.map(|i| i.name.clone()),
            params: params.iter().map(|p| p.name.clone()).collect(),
            body: Rc::new(body.clone()),
            env: Rc::clone(env),
        })
    }

    fn interpret_expr(&mut self, expr: &Expr, env: &Rc<RefCell<Env>>) -> Value {
        ensure_sufficient_stack(|| match expr {
            Expr::Ident(ident) => Self::interpret_ident(ident, env),
            Expr::Integer(n) => Value::Integer(*n),
            Expr::Str(s) => Value::Str(s.clone()),
            Expr::Boolean(b) => Value::from(*b),
            Expr::Prefix { op, rhs } => self.interpret_prefix(*op, rhs, env),
            Expr::Infix { lhs, op, rhs } => self.interpret_infix(lhs, *op, rhs, env),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => self.interpret_if(condition, consequence, alternative.as_ref(), env),
            Expr::Call { func, args } => self.interpret_func_call(func, args, env),
            Expr::Function { params, body } => Self::make_func(None, params, body, env),
            Expr::For { condition, body } => self.interpret_for(condition, body, env),
        })
    }

    fn interpret_ident(ident: &Ident, env: &Rc<RefCell<Env>>) -> Value {
        let value = env.borrow().get(&ident.name);
        value.unwrap_or_else(|| runtime_error(ErrorMsg::UnresolvedIdent, ident))
    }

    fn interpret_prefix(&mut self, op: UnaryOp, rhs: &Expr, env: &Rc<RefCell<Env>>) -> Value {
        let value = propagate!(self.interpret_expr(rhs, env));
        match (op, value) {
            (UnaryOp::Bang, Value::Boolean(b)) => Value::from(!b),
            (UnaryOp::Minus, Value::Integer(n)) => n.checked_neg().map_or_else(
                || runtime_error(ErrorMsg::IntegerOverflow, format!("-({n})")),
                Value::Integer,
            ),
            (UnaryOp::Bang, value) => runtime_error(ErrorMsg::ExpectedBoolean, value.type_name()),
            (UnaryOp::Minus, value) => runtime_error(ErrorMsg::ExpectedInteger, value.type_name()),
        }
    }

    /// The kind of the left operand picks the legal operators. The right
    /// operand is only evaluated once the left one is known to be usable.
    fn interpret_infix(
        &mut self,
        lhs: &Expr,
        op: BinOp,
        rhs: &Expr,
        env: &Rc<RefCell<Env>>,
    ) -> Value {
        match propagate!(self.interpret_expr(lhs, env)) {
            Value::Integer(left) => match propagate!(self.interpret_expr(rhs, env)) {
                Value::Integer(right) => Self::interpret_arithmetic(left, op, right),
                right => runtime_error(ErrorMsg::ExpectedInteger, right.type_name()),
            },
            Value::Boolean(left) => match propagate!(self.interpret_expr(rhs, env)) {
                Value::Boolean(right) => Self::interpret_equality(left, op, right),
                right => runtime_error(ErrorMsg::ExpectedBoolean, right.type_name()),
            },
            left => runtime_error(ErrorMsg::UnsupportedOperand, left.type_name()),
        }
    }

    fn interpret_arithmetic(left: i64, op: BinOp, right: i64) -> Value {
        let result = match op {
            BinOp::Plus => left.checked_add(right),
            BinOp::Minus => left.checked_sub(right),
            BinOp::Star => left.checked_mul(right),
            BinOp::Slash => {
                if right == 0 {
                    return runtime_error(ErrorMsg::DivisionByZero, format!("{left} / {right}"));
                }
                left.checked_div(right)
            }
            BinOp::Greater => return Value::from(left > right),
            BinOp::Less => return Value::from(left < right),
            BinOp::EqualEqual => return Value::from(left == right),
            BinOp::BangEqual => return Value::from(left != right),
        };
        result.map_or_else(
            || runtime_error(ErrorMsg::IntegerOverflow, format!("{left} {op} {right}")),
            Value::Integer,
        )
    }

    fn interpret_equality(left: bool, op: BinOp, right: bool) -> Value {
        match op {
            BinOp::EqualEqual => Value::from(left == right),
            BinOp::BangEqual => Value::from(left != right),
            _ => runtime_error(ErrorMsg::UnsupportedOperator, format!("{op} on booleans")),
        }
    }

    fn interpret_if(
        &mut self,
        condition: &Expr,
        consequence: &Block,
        alternative: Option<&Block>,
        env: &Rc<RefCell<Env>>,
    ) -> Value {
        let condition = propagate!(self.interpret_expr(condition, env));
        if condition.is_true() {
            self.interpret_block(consequence, env)
        } else if condition.is_false() {
            match alternative {
                Some(block) => self.interpret_block(block, env),
                None => Value::Null,
            }
        } else {
            runtime_error(ErrorMsg::ExpectedCondition, condition.type_name())
        }
    }

    /// Blocks do not open a scope, so the body rebinds names in the
    /// environment the condition reads from.
    fn interpret_for(&mut self, condition: &Expr, body: &Block, env: &Rc<RefCell<Env>>) -> Value {
        let mut result = Value::Null;
        let mut iterations: usize = 0;
        loop {
            let condition = propagate!(self.interpret_expr(condition, env));
            if condition.is_false() {
                return result;
            }
            if !condition.is_true() {
                return runtime_error(ErrorMsg::ExpectedCondition, condition.type_name());
            }
            if let Some(max) = self.limits.max_loop_iterations {
                if iterations >= max {
                    return runtime_error(ErrorMsg::LoopLimitExceeded, max);
                }
            }
            iterations += 1;
            result = propagate!(self.interpret_block(body, env));
        }
    }

    fn interpret_func_call(
        &mut self,
        fn_expr: &Expr,
        arg_exprs: &[Expr],
        env: &Rc<RefCell<Env>>,
    ) -> Value {
        let Value::Func(func) = propagate!(self.interpret_expr(fn_expr, env)) else {
            return runtime_error(ErrorMsg::FunctionNotFound, fn_expr);
        };
        // Ensure the number of arguments matches the function definition
        if func.arity() != arg_exprs.len() {
            return runtime_error(
                ErrorMsg::ArityMismatch,
                format!("expected {}, found {}", func.arity(), arg_exprs.len()),
            );
        }
        let mut args = Vec::with_capacity(arg_exprs.len());
        for arg in arg_exprs {
            args.push(propagate!(self.interpret_expr(arg, env)));
        }

        func.call(self, args)
    }

    pub(crate) fn call_func(&mut self, func: &Func, args: Vec<Value>) -> Value {
        if self.depth >= self.limits.max_call_depth {
            return runtime_error(ErrorMsg::CallDepthExceeded, self.limits.max_call_depth);
        }
        debug!("Call {func} with {args:?}");
        // The new scope hangs off the environment the function was
        // declared in, not the one it is called from
        let func_env = Env::with_parent(Rc::clone(&func.env));
        for (param, value) in func.params.iter().zip(args) {
            func_env.borrow_mut().set(param, value);
        }

        self.depth += 1;
        let result = self.interpret_block(&func.body, &func_env);
        self.depth -= 1;

        match result {
            Value::Return(value) => *value,
            value => value,
        }
    }
}
