use std::{
    env, fs,
    io::{self, Read},
    process::ExitCode,
    time::Instant,
};

use monkey::{lexer::lexer::tokenize, parser::parser::parse, render_error};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: monkey [--tokens] [FILE]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("monkey=warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let mut tokens_only = false;
    let mut file_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => tokens_only = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return ExitCode::SUCCESS;
            }
            _ if file_path.is_none() && !arg.starts_with('-') => file_path = Some(arg),
            _ => {
                eprintln!("{}", USAGE);
                return ExitCode::from(2);
            }
        }
    }

    let (source, file_name) = match read_source(file_path.as_deref()) {
        Ok(read) => read,
        Err(err) => {
            error!(%err, "failed to read input");
            eprintln!("Failed to read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    if tokens_only {
        for token in tokenize(source, Some(file_name)) {
            println!("{}", token);
        }
        debug!(elapsed = ?start.elapsed(), "tokenized");
        return ExitCode::SUCCESS;
    }

    let (program, errors) = parse(source.clone(), Some(file_name));
    debug!(elapsed = ?start.elapsed(), "parsed");

    for error in &errors {
        eprint!("{}", render_error(error, &source));
    }

    println!("{}", program);

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads the whole input up front; the lexer works on a complete buffer.
fn read_source(path: Option<&str>) -> io::Result<(String, String)> {
    match path {
        Some(path) => {
            let file_name = path.rsplit('/').next().unwrap_or(path).to_string();
            Ok((fs::read_to_string(path)?, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, String::from("stdin")))
        }
    }
}
