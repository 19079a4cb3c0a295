use std::{
    env, fs,
    io::{self, Write},
    process,
};

use log::{debug, warn};
use sl_eval::{environment::Env, interpret::Limits, run_with_limits, types::Value};

fn main() {
    pretty_env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let limits = limits_from_env();
    match args.as_slice() {
        [] => run_repl(limits),
        [path] => run_file(path, limits),
        _ => {
            eprintln!("Usage: sl [script]");
            process::exit(64);
        }
    }
}

fn run_repl(limits: Limits) {
    let (stdin, mut stdout) = (io::stdin(), io::stdout());
    // Bindings made on one line stay visible on the next
    let env = Env::new();
    loop {
        let mut line = String::default();
        print!(">>> ");
        if let Err(e) = stdout.flush() {
            eprintln!("Failed to flush stdout: {e}");
            break;
        }
        match stdin.read_line(&mut line) {
            // If zero bytes are read, then exit (usually triggered by Ctrl-D)
            Ok(0) => break,
            Ok(_) => (),
            Err(e) => {
                eprintln!("Failed to read line: {e}");
                break;
            }
        }
        match run_with_limits(&line, &env, limits) {
            Ok(Value::Null) => (),
            Ok(Value::Error(e)) => eprintln!("{e}"),
            Ok(value) => println!("{value}"),
            Err(errors) => errors.iter().for_each(|e| eprintln!("{e}")),
        }
    }
}

fn run_file(file_path: &str, limits: Limits) {
    let source = match fs::read_to_string(file_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read {file_path}: {e}");
            process::exit(66);
        }
    };
    match run_with_limits(&source, &Env::new(), limits) {
        Ok(Value::Error(e)) => {
            eprintln!("{e}");
            process::exit(70);
        }
        Ok(Value::Null) => (),
        Ok(value) => println!("{value}"),
        Err(errors) => {
            errors.iter().for_each(|e| eprintln!("{e}"));
            process::exit(65);
        }
    }
}

fn limits_from_env() -> Limits {
    let mut limits = Limits::default();
    if let Some(depth) = read_limit("SL_MAX_CALL_DEPTH") {
        limits.max_call_depth = depth;
    }
    if let Some(iterations) = read_limit("SL_MAX_LOOP_ITERATIONS") {
        limits.max_loop_iterations = Some(iterations);
    }
    debug!("Using {limits:?}");
    limits
}

fn read_limit(var: &str) -> Option<usize> {
    let raw = env::var(var).ok()?;
    match raw.parse() {
        Ok(limit) => Some(limit),
        Err(e) => {
            warn!("Ignoring {var}={raw}: {e}");
            None
        }
    }
}
