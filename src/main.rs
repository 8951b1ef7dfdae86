//! CLI tool to check bds scripts and dump their tokens or syntax tree.

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Exit status when the input has lexical or syntax errors.
const EXIT_DATA_ERROR: u8 = 65;
/// Exit status when the input file cannot be read.
const EXIT_NO_INPUT: u8 = 66;

#[derive(Debug, Parser)]
#[command(name = "bds", about = "Check a bds script for lexical and syntax errors")]
struct Cli {
    /// Script to check.
    file: PathBuf,

    /// Print the token stream.
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree as S-expressions.
    #[arg(long)]
    ast: bool,

    /// When to colour diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self) -> bool {
        match self {
            Self::Auto => std::io::stderr().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

const fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "bds=warn",
        1 => "bds=debug",
        _ => "bds=trace",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let path = cli.file.display().to_string();
    let color = cli.color.enabled();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };
    debug!(file = %path, bytes = source.len(), "read source");

    let tokens = match bds::tokenize(&path, &source) {
        Ok(tokens) => tokens,
        Err(diagnostic) => {
            eprintln!("{}", bds::render_all(&[diagnostic], color));
            return ExitCode::from(EXIT_DATA_ERROR);
        }
    };

    if cli.tokens {
        for token in &tokens {
            println!(
                "{}:{}\t{:?}\t{}",
                token.location.row, token.location.column, token.kind, token.lexeme
            );
        }
    }

    let program = match bds::parse(&tokens) {
        Ok(program) => program,
        Err(diagnostics) => {
            eprintln!("{}", bds::render_all(&diagnostics, color));
            eprintln!("{path}: {} error(s)", diagnostics.len());
            return ExitCode::from(EXIT_DATA_ERROR);
        }
    };
    info!(file = %path, statements = program.len(), "parsed");

    if cli.ast {
        print!("{}", bds::print(&program));
    }

    if !cli.tokens && !cli.ast {
        eprintln!("{path}: ok ({} statement(s))", program.len());
    }

    ExitCode::SUCCESS
}
