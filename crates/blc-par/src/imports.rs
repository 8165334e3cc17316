//! Post-parse import resolution.
//!
//! Each `import "path"` at the top level is read (path verbatim, no
//! search), lexed and parsed, and its top-level functions are appended to
//! the importing program. Resolution is single-level: imports inside an
//! imported file are not followed, and nothing is de-duplicated. The
//! import nodes themselves stay in the program; code generation ignores
//! them.

use std::fs;

use crate::ast::{Item, Program};
use crate::error::ImportError;

/// Splices the functions of every imported file into `program`.
pub fn resolve_imports(program: &mut Program) -> Result<(), ImportError> {
    let mut spliced = Vec::new();

    for item in &program.items {
        let Item::Import(import) = item else {
            continue;
        };
        // Raw bytes, like the main source file.
        let source = fs::read(&import.path).map_err(|e| ImportError::Read {
            path: import.path.clone(),
            source: e,
        })?;
        let module = crate::parse(&source)?;
        for sub in module.items {
            // Only function definitions travel; nested imports and
            // anything else are dropped.
            if let Item::Function(f) = sub {
                spliced.push(Item::Function(f));
            }
        }
    }

    program.items.extend(spliced);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::parse;

    fn write_module(dir: &TempDir, name: &str, source: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, source).unwrap();
        path.display().to_string()
    }

    fn function_names(program: &Program) -> Vec<&str> {
        program
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Function(f) => Some(f.name.as_str()),
                Item::Import(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_functions_are_spliced() {
        let dir = TempDir::new().unwrap();
        let lib = write_module(&dir, "lib.b", "func helper() {\n return 1 \n}");

        let mut program = parse(&format!("import \"{lib}\"\nfunc main() {{}}")).unwrap();
        resolve_imports(&mut program).unwrap();

        assert_eq!(function_names(&program), vec!["main", "helper"]);
        // The import node survives; codegen skips it.
        assert!(matches!(&program.items[0], Item::Import(_)));
    }

    #[test]
    fn test_transitive_imports_are_not_followed() {
        let dir = TempDir::new().unwrap();
        let inner = write_module(&dir, "inner.b", "func deep() {}");
        let outer = write_module(
            &dir,
            "outer.b",
            &format!("import \"{inner}\"\nfunc shallow() {{}}"),
        );

        let mut program = parse(&format!("import \"{outer}\"\nfunc main() {{}}")).unwrap();
        resolve_imports(&mut program).unwrap();

        let names = function_names(&program);
        assert!(names.contains(&"shallow"));
        assert!(!names.contains(&"deep"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut program = parse("import \"/no/such/file.b\"\nfunc main() {}").unwrap();
        let err = resolve_imports(&mut program).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.b"));
    }

    #[test]
    fn test_parse_error_in_import_propagates() {
        let dir = TempDir::new().unwrap();
        let bad = write_module(&dir, "bad.b", "func broken( {}");

        let mut program = parse(&format!("import \"{bad}\"")).unwrap();
        let err = resolve_imports(&mut program).unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn test_duplicate_functions_are_not_detected() {
        // Collisions are left for the assembler to reject as duplicate
        // labels.
        let dir = TempDir::new().unwrap();
        let lib = write_module(&dir, "dup.b", "func main() {}");

        let mut program = parse(&format!("import \"{lib}\"\nfunc main() {{}}")).unwrap();
        resolve_imports(&mut program).unwrap();
        assert_eq!(function_names(&program), vec!["main", "main"]);
    }
}
