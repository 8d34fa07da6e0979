//! framehint CLI - column-name completion for data-frame expressions

use framehint_cli::cli;
use framehint_cli::input;
use framehint_cli::logging;
use framehint_cli::output;
use framehint_cli::session;

use anyhow::Result;
use clap::Parser;
use framehint_core::CompletionResult;
use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::process::ExitCode;

use cli::{Args, OutputFormat};
use output::{format_json, format_table};
use session::{load_session, Shell};

/// Configuration or input error (e.g. unreadable session file).
const EXIT_CONFIG_ERROR: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("framehint: error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let shell = Shell::new(load_session(&args.session)?);

    let requests = match (&args.cell, args.cursor) {
        (Some(path), Some(cursor)) => vec![input::read_cell(path, cursor)?],
        _ => input::read_texts(&args.texts)?,
    };

    let results: Vec<CompletionResult> = requests
        .iter()
        .map(|request| CompletionResult {
            text: request.line.clone(),
            context: if args.context {
                shell.context(request)
            } else {
                None
            },
            suggestions: shell.complete(request),
        })
        .collect();

    let rendered = match args.format {
        OutputFormat::Json => format_json(&results, args.compact),
        OutputFormat::Table => format_table(&results, io::stdout().is_terminal()),
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{rendered}")?;
    if args.format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    Ok(())
}
