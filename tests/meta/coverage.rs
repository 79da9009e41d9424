//! Enforces that every source file has a unit test mirror under `tests/unit`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Crate roots and module declarations carry no logic of their own
    fn is_module_file(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    /// Relative paths of every `.rs` file and directory below `base`
    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let Ok(relative) = path.strip_prefix(base) else {
                    return Err(io::Error::other("entry outside of scanned directory"));
                };
                let relative = relative.to_string_lossy().replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn rust_files(base: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() -> io::Result<()> {
        let sources = relative_paths(Path::new(SRC_DIR))?;
        let units = relative_paths(Path::new(UNIT_DIR))?;

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_module_file(path) && !units.contains(*path))
            .map(|path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
        Ok(())
    }

    #[test]
    fn test_every_unit_test_has_source_file() -> io::Result<()> {
        let sources = relative_paths(Path::new(SRC_DIR))?;
        let units = relative_paths(Path::new(UNIT_DIR))?;

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !is_module_file(path) && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no {SRC_DIR}/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
        Ok(())
    }

    #[test]
    fn test_every_test_file_contains_tests() -> io::Result<()> {
        let mut empty = Vec::new();

        for path in rust_files(Path::new(TESTS_DIR))? {
            // Test crate roots and module files only declare submodules
            let is_module = path
                .file_name()
                .is_some_and(|name| name == "mod.rs" || name == "main.rs");
            if is_module {
                continue;
            }
            if !fs::read_to_string(&path)?.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
        Ok(())
    }
}
