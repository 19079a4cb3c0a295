pub mod environment;
pub mod error;
pub mod interpret;
pub mod types;

use std::{cell::RefCell, rc::Rc};

use environment::Env;
use error::InitError;
use interpret::{Interpreter, Limits};
use log::trace;
use sl_syntax::{ast::Program, error::Error, lex::Lexer, parse::Parser};
use types::Value;

/// Lexes, parses and evaluates `source` against `env`. Syntax errors are
/// returned as a list and stop evaluation; runtime failures come back as
/// an `Ok(Value::Error(..))`.
pub fn run(source: &str, env: &Rc<RefCell<Env>>) -> Result<Value, Vec<Error>> {
    run_with_limits(source, env, Limits::default())
}

pub fn run_with_limits(
    source: &str,
    env: &Rc<RefCell<Env>>,
    limits: Limits,
) -> Result<Value, Vec<Error>> {
    let mut evaluator = Evaluator::from_source(source)
        .map_err(InitError::into_messages)?
        .with_limits(limits);
    Ok(evaluator.eval_program(env))
}

#[derive(Debug)]
pub struct Evaluator {
    program: Program,
    interpreter: Interpreter,
}

impl Evaluator {
    pub fn from_source(source: &str) -> Result<Self, InitError> {
        let lexer = Lexer::new(source);
        trace!("Lexing {source}");
        let tokens = lexer.lex_all_sanitised().map_err(InitError::Syntax)?;
        trace!("Parsing {tokens:#?}");
        let program = Parser::new(&tokens)
            .parse_all()
            .map_err(InitError::Syntax)?;
        Self::from_program(Some(program))
    }

    pub fn from_program(program: Option<Program>) -> Result<Self, InitError> {
        let program = program.ok_or(InitError::MissingProgram)?;
        Ok(Self {
            program,
            interpreter: Interpreter::default(),
        })
    }

    pub fn with_limits(self, limits: Limits) -> Self {
        Self {
            interpreter: Interpreter::new(limits),
            ..self
        }
    }

    pub fn eval_program(&mut self, env: &Rc<RefCell<Env>>) -> Value {
        trace!("Interpreting {:#?}", self.program);
        self.interpreter.interpret_program(&self.program, env)
    }
}
