//! Command-line options.
//!
//! `mockgen [--emit=source|binary] [--sequential] <input> <output>`

use std::path::PathBuf;

use mock_emit::EmitKind;
use mock_synth::Parallelism;

pub const USAGE: &str = "usage: mockgen [--emit=source|binary] [--sequential] <input> <output>";

/// Options for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Explicit backend; `None` picks one from the output extension.
    pub emit: Option<EmitKind>,
    pub parallelism: Parallelism,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Options {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Options {
            emit: None,
            parallelism: Parallelism::default(),
            input: input.into(),
            output: output.into(),
        }
    }

    /// The backend to use: `--emit=` if given, else by output extension.
    pub fn emit_kind(&self) -> EmitKind {
        self.emit.unwrap_or_else(|| EmitKind::for_path(&self.output))
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
    /// Wrong number of positional arguments.
    Usage,
    /// A malformed or unknown option.
    Invalid(String),
}

/// Parse arguments, excluding the program name.
///
/// `--help` and `--version` win over everything else on the line.
pub fn parse_args<I>(args: I) -> Command
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut emit = None;
    let mut parallelism = Parallelism::default();
    let mut positional: Vec<String> = Vec::new();
    let mut invalid = None;

    for arg in args {
        let arg: String = arg.into();
        match arg.as_str() {
            "-h" | "--help" => return Command::Help,
            "-V" | "--version" => return Command::Version,
            "--sequential" => parallelism = Parallelism::Sequential,
            _ => {
                if let Some(kind) = arg.strip_prefix("--emit=") {
                    match kind.parse::<EmitKind>() {
                        Ok(kind) => emit = Some(kind),
                        Err(e) => invalid = invalid.or(Some(e.to_string())),
                    }
                } else if arg.starts_with('-') && arg != "-" {
                    invalid = invalid.or(Some(format!("unknown option `{arg}`")));
                } else {
                    positional.push(arg);
                }
            }
        }
    }

    if let Some(message) = invalid {
        return Command::Invalid(message);
    }
    let [input, output]: [String; 2] = match positional.try_into() {
        Ok(pair) => pair,
        Err(_) => return Command::Usage,
    };
    Command::Run(Options {
        emit,
        parallelism,
        input: input.into(),
        output: output.into(),
    })
}

pub fn help_text() -> String {
    format!(
        "mockgen {version}
Generate inert stub classes for every interface in a declaration file.

{USAGE}

Options:
  --emit=source       Write C# source (default unless output ends in .mockbin)
  --emit=binary       Write a binary artifact
  --sequential        Synthesize on one thread
  -h, --help          Show this help message
  -V, --version       Show version information

Environment:
  RUST_LOG            Enable tracing, e.g. RUST_LOG=mock_synth=debug",
        version = env!("CARGO_PKG_VERSION")
    )
}
