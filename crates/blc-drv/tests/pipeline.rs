//! Pipeline integration tests at the library level (no subprocesses).

use blc_drv::lower_source;

#[test]
fn test_lower_minimal_program() {
    let lowered = lower_source("func main() {\n return 0 \n}").unwrap();
    assert!(lowered.diagnostics.is_empty());
    assert!(lowered.asm.contains("main:"));
    assert!(lowered.asm.contains("global _start"));
}

#[test]
fn test_lower_carries_runtime_prelude() {
    let lowered = lower_source("func main() {\n return 0 \n}").unwrap();
    for helper in [
        "print_no_nl:",
        "print_str_no_nl:",
        "input:",
        "str_to_int:",
        "strcpy_internal:",
    ] {
        assert!(lowered.asm.contains(helper), "missing {helper}");
    }
}

#[test]
fn test_parse_error_is_fatal_and_names_line() {
    let err = lower_source("func main() {\nint x = \n}").unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("parsing failed"), "got: {chain}");
    assert!(chain.contains("line 2"), "got: {chain}");
}

#[test]
fn test_missing_main_is_fatal() {
    let err = lower_source("func helper() {\n return 1 \n}").unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("no main function defined"), "got: {chain}");
}

#[test]
fn test_semantic_diagnostics_do_not_abort_lowering() {
    let lowered = lower_source("func main() {\n break\n return 0 \n}").unwrap();
    assert_eq!(lowered.diagnostics.len(), 1);
    assert!(lowered.diagnostics[0]
        .to_string()
        .contains("break outside of loop"));
    // Assembly was still produced.
    assert!(lowered.asm.contains("main:"));
}

#[test]
fn test_unreadable_import_is_fatal() {
    let err = lower_source("import \"/no/such/dir/lib.b\"\nfunc main() {}").unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("import resolution failed"), "got: {chain}");
    assert!(chain.contains("/no/such/dir/lib.b"), "got: {chain}");
}

#[test]
fn test_import_splices_functions() {
    use std::fs;
    let dir = tempfile::TempDir::new().unwrap();
    let lib = dir.path().join("lib.b");
    fs::write(&lib, "func twice(int x) {\n return x * 2 \n}").unwrap();

    let source = format!(
        "import \"{}\"\nfunc main() {{\n return twice(21) \n}}",
        lib.display()
    );
    let lowered = lower_source(&source).unwrap();
    assert!(lowered.diagnostics.is_empty());
    assert!(lowered.asm.contains("twice:"));
    assert!(lowered.asm.contains("call twice"));
}
