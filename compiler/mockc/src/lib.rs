//! The `mockgen` command.
//!
//! Reads a declaration file, synthesizes a stub for every interface in it,
//! and writes the stubs as C# source or a binary artifact.

mod error;
mod options;
mod pipeline;

use std::io::IsTerminal;
use std::sync::Once;

pub use error::CliError;
pub use options::{help_text, parse_args, Command, Options, USAGE};
pub use pipeline::{run, RunSummary};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// Spans are rendered as a tree on stderr. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Run a parsed command line, printing results, and return the exit code.
pub fn execute(command: Command) -> i32 {
    match command {
        Command::Help => {
            println!("{}", help_text());
            0
        }
        Command::Version => {
            println!("mockgen {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Command::Usage => {
            println!("{USAGE}");
            0
        }
        Command::Invalid(message) => {
            eprintln!("error: {message}");
            eprintln!("{USAGE}");
            2
        }
        Command::Run(options) => match run(&options) {
            Ok(summary) => {
                report_summary(&summary);
                0
            }
            Err(error) => {
                report_error(&error);
                1
            }
        },
    }
}

fn report_summary(summary: &RunSummary) {
    for failure in &summary.failures {
        eprintln!("warning: {}", failure.error);
    }
    println!(
        "wrote {} stub(s) in {} namespace(s) to {} ({})",
        summary.stubs,
        summary.namespaces,
        summary.output.display(),
        summary.emit
    );
}

fn report_error(error: &CliError) {
    match error {
        CliError::Declarations { path, text, errors } => {
            let color = std::io::stderr().is_terminal();
            let name = path.display().to_string();
            eprint!("{}", mock_decl::render(&name, text, errors, color));
            eprintln!("error: {error}");
        }
        _ => eprintln!("error: {error}"),
    }
}
