//! Process-level tests for the `mdoc` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mdoc(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mdoc").expect("mdoc binary");
    cmd.current_dir(root).env_remove("MDOC_ROOT").env_remove("RUST_LOG");
    cmd
}

fn source_tree(names: &[&str]) -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    let src = temp.path().join("arangod/RestServer");
    fs::create_dir_all(&src).expect("create source dir");
    fs::create_dir_all(temp.path().join("Documentation/Metrics")).expect("create docs dir");

    let mut source = String::from("static char const* metricsNameList[] = {\n");
    for name in names {
        source.push_str(&format!("  \"{}\",\n", name));
    }
    source.push_str("  nullptr\n};\n");
    fs::write(src.join("Metrics.cpp"), source).expect("write source");
    temp
}

fn write_doc(root: &Path, name: &str, content: &str) {
    fs::write(
        root.join("Documentation/Metrics").join(format!("{}.yaml", name)),
        content,
    )
    .expect("write doc");
}

fn complete(name: &str) -> String {
    format!("name: {}\nhelp: h\nexposedBy: [single]\ndescription: d\n", name)
}

fn output(root: &Path) -> std::path::PathBuf {
    root.join("Documentation/Metrics/allMetrics.yaml")
}

#[test]
fn clean_tree_exits_zero() {
    let temp = source_tree(&["first_total", "second_total"]);
    write_doc(temp.path(), "first_total", &complete("first_total"));
    write_doc(temp.path(), "second_total", &complete("second_total"));

    mdoc(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("2 metrics declared, 2 documented, 0 problems"));

    let written = fs::read_to_string(output(temp.path())).expect("read output");
    let first = written.find("first_total").expect("first entry");
    let second = written.find("second_total").expect("second entry");
    assert!(first < second);
}

#[test]
fn missing_documentation_exits_seventeen() {
    let temp = source_tree(&["lonely_total"]);

    mdoc(temp.path())
        .assert()
        .code(17)
        .stdout(predicate::str::contains(
            "Missing metric documentation for metric 'lonely_total'",
        ));

    assert!(output(temp.path()).exists());
}

#[test]
fn missing_help_exits_seventeen() {
    let temp = source_tree(&["helpless_total"]);
    write_doc(
        temp.path(),
        "helpless_total",
        "name: helpless_total\nexposedBy: [agent]\ndescription: d\n",
    );

    mdoc(temp.path())
        .assert()
        .code(17)
        .stdout(predicate::str::contains("helpless_total.yaml").and(predicate::str::contains("'help'")));

    let written = fs::read_to_string(output(temp.path())).expect("read output");
    assert!(written.contains("helpless_total"));
}

#[test]
fn missing_marker_exits_two() {
    let temp = TempDir::new().expect("tempdir");
    let src = temp.path().join("arangod/RestServer");
    fs::create_dir_all(&src).expect("create source dir");
    fs::write(src.join("Metrics.cpp"), "// nothing here\n").expect("write source");

    mdoc(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Did not find metricsNameList"));
}

#[test]
fn malformed_line_exits_three_without_writing() {
    let temp = TempDir::new().expect("tempdir");
    let src = temp.path().join("arangod/RestServer");
    fs::create_dir_all(&src).expect("create source dir");
    fs::write(
        src.join("Metrics.cpp"),
        "metricsNameList = {\n  \"dangling,\n  nullptr\n};\n",
    )
    .expect("write source");

    mdoc(temp.path())
        .assert()
        .code(3)
        .stdout(predicate::str::contains("\"dangling,"));

    assert!(!output(temp.path()).exists());
}

#[test]
fn missing_docs_directory_is_general_error() {
    let temp = TempDir::new().expect("tempdir");
    let src = temp.path().join("arangod/RestServer");
    fs::create_dir_all(&src).expect("create source dir");
    fs::write(src.join("Metrics.cpp"), "metricsNameList\n\"a\",\nnullptr\n").expect("write source");

    mdoc(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Documentation directory not found"));
}

#[test]
fn rerun_is_byte_identical() {
    let temp = source_tree(&["b_total", "a_total"]);
    write_doc(temp.path(), "a_total", &complete("a_total"));
    write_doc(temp.path(), "b_total", &complete("b_total"));

    mdoc(temp.path()).assert().success();
    let first = fs::read(output(temp.path())).expect("read output");
    mdoc(temp.path()).assert().success();
    let second = fs::read(output(temp.path())).expect("read output");

    assert_eq!(first, second);
}

#[test]
fn root_flag_and_check_mode() {
    let temp = source_tree(&["only_total"]);
    write_doc(temp.path(), "only_total", &complete("only_total"));
    write_doc(temp.path(), "stale_total", &complete("stale_total"));
    let elsewhere = TempDir::new().expect("tempdir");

    mdoc(elsewhere.path())
        .arg("--root")
        .arg(temp.path())
        .args(["--check", "--report-orphans", "--quiet"])
        .assert()
        .code(0)
        .stdout("Unreferenced metric documentation file 'stale_total.yaml'\n");

    assert!(!output(temp.path()).exists());
}
