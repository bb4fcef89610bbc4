//! One generation run: read, parse, synthesize, emit.

use std::path::{Path, PathBuf};

use mock_decl::parse_declarations;
use mock_emit::{emit_to, EmitError, EmitKind, Sink};
use mock_synth::{synthesize_interfaces, BatchFailure};
use tracing::{info, warn};

use crate::{CliError, Options};

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Interfaces found in the input.
    pub interfaces: usize,
    /// Stub types written.
    pub stubs: usize,
    pub namespaces: usize,
    /// Interfaces that could not be synthesized. Everything else was still
    /// written.
    pub failures: Vec<BatchFailure>,
    pub emit: EmitKind,
    pub output: PathBuf,
}

#[tracing::instrument(level = "info", skip_all, fields(input = %options.input.display()))]
pub fn run(options: &Options) -> Result<RunSummary, CliError> {
    let text = read(&options.input)?;
    let decls = parse_declarations(&text);
    if decls.has_errors() {
        return Err(CliError::Declarations {
            path: options.input.clone(),
            text,
            errors: decls.errors,
        });
    }

    let interfaces = decls.table.interfaces().len();
    let outcome = synthesize_interfaces(&decls.table, options.parallelism);
    for failure in &outcome.failures {
        warn!(error = %failure.error, "interface skipped");
    }
    let stubs = outcome.plans.len();
    let (groups, failures) = outcome.into_groups();

    let emit = options.emit_kind();
    let emit_error = |source: EmitError| CliError::Emit {
        path: options.output.clone(),
        source,
    };
    let sink = Sink::file(&options.output).map_err(|e| emit_error(e.into()))?;
    emit_to(emit, sink, &groups).map_err(emit_error)?;

    info!(
        interfaces,
        stubs,
        namespaces = groups.len(),
        %emit,
        output = %options.output.display(),
        "generated stubs"
    );
    Ok(RunSummary {
        interfaces,
        stubs,
        namespaces: groups.len(),
        failures,
        emit,
        output: options.output.clone(),
    })
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
