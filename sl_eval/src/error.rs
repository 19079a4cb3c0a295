use std::fmt::Display;

use sl_syntax::error::Error;

use crate::types::Value;

#[derive(Debug)]
pub enum ErrorMsg {
    // Name errors
    UnresolvedIdent,
    FunctionNotFound,
    ArityMismatch,
    // Type errors
    ExpectedBoolean,
    ExpectedInteger,
    ExpectedCondition,
    UnsupportedOperand,
    UnsupportedOperator,
    // Arithmetic errors
    DivisionByZero,
    IntegerOverflow,
    // Limits
    CallDepthExceeded,
    LoopLimitExceeded,
}

impl Display for ErrorMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::UnresolvedIdent => "cannot resolve identifier",
            Self::FunctionNotFound => "function not found:",
            Self::ArityMismatch => "wrong number of arguments:",
            Self::ExpectedBoolean => "expected boolean operand, found",
            Self::ExpectedInteger => "expected integer operand, found",
            Self::ExpectedCondition => "expected boolean condition, found",
            Self::UnsupportedOperand => "unsupported left operand, found",
            Self::UnsupportedOperator => "unsupported operator",
            Self::DivisionByZero => "division by zero in",
            Self::IntegerOverflow => "integer overflow in",
            Self::CallDepthExceeded => "maximum call depth exceeded:",
            Self::LoopLimitExceeded => "maximum loop iterations exceeded:",
        })
    }
}

pub fn runtime_error(msg: ErrorMsg, ctx: impl Display) -> Value {
    Value::Error(format!("Runtime error: {msg} {ctx}"))
}

/// Raised before evaluation starts, so never confused with an
/// error value produced by running a program.
#[derive(Debug, PartialEq, Eq)]
pub enum InitError {
    Syntax(Vec<Error>),
    MissingProgram,
}

impl Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(errors) => f.write_str(&errors.join("\n")),
            Self::MissingProgram => f.write_str("Init error: no program to evaluate"),
        }
    }
}

impl std::error::Error for InitError {}

impl InitError {
    pub fn into_messages(self) -> Vec<Error> {
        match self {
            Self::Syntax(errors) => errors,
            Self::MissingProgram => vec![Self::MissingProgram.to_string()],
        }
    }
}
