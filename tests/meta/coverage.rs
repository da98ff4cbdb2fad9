//! Checks that `tests/unit` mirrors `src` file for file and that every test file tests something

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Entry points and module declarations carry no logic of their own
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    // Relative paths of every directory and `.rs` file below `dir`
    fn collect_relative_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_stripped| io::Error::other("path outside base directory"))?
                .to_string_lossy()
                .into_owned();

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    fn source_and_unit_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = Path::new(SRC_DIR);
        let unit = Path::new(UNIT_DIR);
        let src_paths = collect_relative_paths(src, src)
            .unwrap_or_else(|error| panic!("cannot read {SRC_DIR}: {error}"));
        let unit_paths = collect_relative_paths(unit, unit)
            .unwrap_or_else(|error| panic!("cannot read {UNIT_DIR}: {error}"));
        (src_paths, unit_paths)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !unit_paths.contains(*path))
            .map(|path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let orphaned: Vec<String> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no {SRC_DIR}/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    // Collects test files below `dir` that never declare a #[test]
    fn files_without_tests(dir: &Path, untested: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                files_without_tests(&path, untested)?;
                continue;
            }
            if path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let is_root_entry = path.parent() == Some(Path::new(TESTS_DIR)) && file_name == "main.rs";
            if is_root_entry || file_name == "mod.rs" {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                untested.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let mut untested = Vec::new();

        files_without_tests(Path::new(TESTS_DIR), &mut untested)
            .unwrap_or_else(|error| panic!("cannot scan {TESTS_DIR}: {error}"));

        assert!(
            untested.is_empty(),
            "Test files without any #[test] function:\n{}",
            untested.join("\n")
        );
    }
}
