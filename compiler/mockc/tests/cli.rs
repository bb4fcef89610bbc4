//! End-to-end tests: the library pipeline and the `mockgen` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use mock_emit::{read_artifact, EmitKind};
use mock_synth::Parallelism;
use mockc::{run, CliError, Options, USAGE};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const DIAMOND: &str = r"
namespace Acme {
    interface IBase { void M(); int Id { get; set; } }
    interface IA : IBase { void M(); string Left(); }
    interface IB : IBase { void M(); double Right(int x); event EventHandler Changed; }
    interface IC : IA, IB { }
    class Helper { }
}
namespace Other { interface IClock { long Now(); } }
";

fn workspace(input: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("api.decl");
    fs::write(&path, input).unwrap();
    (dir, path)
}

fn mockgen<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mockgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn source_run_writes_every_interface() {
    let (dir, input) = workspace(DIAMOND);
    let output = dir.path().join("Mocks.cs");

    let summary = run(&Options::new(&input, &output)).unwrap();
    assert_eq!(summary.interfaces, 5);
    assert_eq!(summary.stubs, 5);
    assert_eq!(summary.namespaces, 2);
    assert!(summary.failures.is_empty());
    assert_eq!(summary.emit, EmitKind::Source);

    let text = fs::read_to_string(&output).unwrap();
    for class in ["Mock_Base", "Mock_A", "Mock_B", "Mock_C", "Mock_Clock"] {
        assert!(text.contains(&format!("public class {class} :")), "{class} missing");
    }
    assert!(!text.contains("Mock_Helper"));
    assert!(text.contains("namespace Acme.Mocks"));
    assert!(text.contains("namespace Other.Mocks"));
}

#[test]
fn diamond_member_emitted_once() {
    let (dir, input) = workspace(DIAMOND);
    let output = dir.path().join("Mocks.cs");
    run(&Options::new(&input, &output)).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let mock_c = text
        .split("public class Mock_C :")
        .nth(1)
        .and_then(|rest| rest.split("public class").next())
        .unwrap();
    assert_eq!(mock_c.matches("public void M()").count(), 1);
    assert_eq!(mock_c.matches("private int _Id;").count(), 1);
}

#[test]
fn binary_selected_by_extension() {
    let (dir, input) = workspace(DIAMOND);
    let output = dir.path().join("stubs.mockbin");

    let summary = run(&Options::new(&input, &output)).unwrap();
    assert_eq!(summary.emit, EmitKind::Binary);

    let groups = read_artifact(&output).unwrap();
    let names: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.plans.iter().map(|p| p.type_name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec!["Mock_Base", "Mock_A", "Mock_B", "Mock_C", "Mock_Clock"]
    );
}

#[test]
fn parallel_and_sequential_outputs_match() {
    let (dir, input) = workspace(DIAMOND);
    let parallel = dir.path().join("parallel.cs");
    let sequential = dir.path().join("sequential.cs");

    run(&Options::new(&input, &parallel)).unwrap();
    let mut options = Options::new(&input, &sequential);
    options.parallelism = Parallelism::Sequential;
    run(&options).unwrap();

    assert_eq!(
        fs::read_to_string(&parallel).unwrap(),
        fs::read_to_string(&sequential).unwrap()
    );
}

#[test]
fn declaration_errors_are_collected() {
    let (dir, input) = workspace("interface IA : IMissing { void Run( }\ninterface IA { }");
    let output = dir.path().join("Mocks.cs");

    let Err(CliError::Declarations { errors, .. }) = run(&Options::new(&input, &output)) else {
        panic!("expected declaration errors");
    };
    assert_eq!(errors.len(), 3);
    assert!(!output.exists());
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = run(&Options::new(
        dir.path().join("absent.decl"),
        dir.path().join("out.cs"),
    ));
    assert!(matches!(result, Err(CliError::Read { .. })));
}

#[test]
fn binary_usage_exits_zero() {
    let output = mockgen(&[Path::new("only-one")]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), USAGE);
}

#[test]
fn binary_reports_parse_errors() {
    let (dir, input) = workspace("interface IA { void Run(; }");
    let out = dir.path().join("Mocks.cs");
    let output = mockgen(&[&input, &out]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected a type"), "{stderr}");
    assert!(stderr.contains("1 error(s)"), "{stderr}");
}

#[test]
fn binary_generates_source() {
    let (dir, input) = workspace(DIAMOND);
    let out = dir.path().join("Mocks.cs");
    let output = mockgen(&[&input, &out]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wrote 5 stub(s) in 2 namespace(s)"), "{stdout}");
    assert!(out.exists());
}

#[test]
fn binary_rejects_unknown_option() {
    let output = Command::new(env!("CARGO_BIN_EXE_mockgen"))
        .args(["--emit=il", "a", "b"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}
