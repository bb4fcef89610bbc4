//! Diagnostic rendering with `ariadne`.

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::DeclError;

/// Render `errors` against `source` as one string, one report per error.
///
/// `path` names the file in report headers. Pass `color: false` when the
/// output is not a terminal.
pub fn render(path: &str, source: &str, errors: &[DeclError], color: bool) -> String {
    let mut out = Vec::new();
    for error in errors {
        let report = build_report(path, error, color);
        // Writes into a Vec cannot fail.
        let _ = report.write((path.to_string(), Source::from(source.to_string())), &mut out);
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build_report(
    path: &str,
    error: &DeclError,
    color: bool,
) -> Report<'static, (String, std::ops::Range<usize>)> {
    let span = error.span();
    let mut builder = Report::build(ReportKind::Error, path.to_string(), span.start as usize)
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(Label::new((path.to_string(), span.to_range())).with_message(error.label()));

    if let Some((secondary, message)) = error.secondary() {
        builder = builder
            .with_label(Label::new((path.to_string(), secondary.to_range())).with_message(message));
    }
    builder.finish()
}
