use std::{
    cell::RefCell,
    fmt::{Debug, Display},
    rc::Rc,
};

use sl_syntax::ast::Block;

use crate::{environment::Env, interpret::Interpreter};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Str(String),
    Func(Func),
    /// Unwinds enclosing blocks up to the nearest call or the program root.
    Return(Box<Value>),
    Error(String),
    /// Result of a construct that computes nothing, such as an `if`
    /// without `else` whose condition is false.
    Null,
}

pub const TRUE: Value = Value::Boolean(true);
pub const FALSE: Value = Value::Boolean(false);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            TRUE
        } else {
            FALSE
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::Func(func) => write!(f, "{func}"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Error(e) => f.write_str(e),
            Self::Null => f.write_str("null"),
        }
    }
}

impl Value {
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::Boolean(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Return-signals and errors must be handed back unchanged by
    /// every evaluation step that sees them.
    pub fn is_signal(&self) -> bool {
        matches!(self, Self::Return(_) | Self::Error(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::Str(_) => "string",
            Self::Func(_) => "function",
            Self::Return(_) => "return",
            Self::Error(_) => "error",
            Self::Null => "null",
        }
    }
}

pub trait Callable {
    fn arity(&self) -> usize;
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Value;
}

#[derive(Clone)]
pub struct Func {
    pub name: Option<String>,
    pub params: Vec<String>,
    pub body: Rc<Block>,
    /// The environment the function was declared in, shared rather
    /// than copied so later bindings stay visible to the body.
    pub env: Rc<RefCell<Env>>,
}

// Functions compare by identity of their body and captured environment.
// Walking the environment would recurse forever for a function bound
// inside the scope it captured.
impl PartialEq for Func {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
            && Rc::ptr_eq(&self.body, &other.body)
            && Rc::ptr_eq(&self.env, &other.env)
    }
}

impl Debug for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Func")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "fn {}({})", name, self.params.join(", ")),
            None => write!(f, "fn({})", self.params.join(", ")),
        }
    }
}

impl Callable for Func {
    fn arity(&self) -> usize {
        self.params.len()
    }
    fn call(&self, interpreter: &mut Interpreter, args: Vec<Value>) -> Value {
        interpreter.call_func(self, args)
    }
}
