//! Purpose: Keep the `appcfg` library quiet and panic-free.
//!
//! Checks the non-test portion of every source file in `crates/config/src`.
//!
//! Invariants:
//! - The library never prints; diagnostics go through `tracing`.
//! - The library never installs a tracing subscriber; that is the binary's job.
//! - Library code propagates errors instead of calling `.unwrap()`.

mod common;

use std::fs;

use common::find_workspace_root;

/// Patterns forbidden outside `#[cfg(test)]` modules, with the reason reported.
const FORBIDDEN: &[(&str, &str)] = &[
    ("println!", "print to stdout - use tracing"),
    ("eprintln!", "print to stderr - use tracing"),
    ("dbg!", "leftover debug macro"),
    (".unwrap()", "unwrap in library code - propagate the error"),
    ("tracing_subscriber", "subscriber setup belongs to the binary"),
];

/// Source lines before the first `#[cfg(test)]`, without comment lines.
fn library_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
}

#[test]
fn test_library_has_no_forbidden_patterns() {
    let src = find_workspace_root().join("crates/config/src");
    assert!(src.exists(), "library sources not found at {:?}", src);

    let mut violations = Vec::new();
    for entry in walkdir::WalkDir::new(&src)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let path = entry.path();
        let content = fs::read_to_string(path).unwrap_or_default();

        for (index, line) in library_lines(&content) {
            for (pattern, reason) in FORBIDDEN {
                if line.contains(pattern) {
                    violations.push(format!("{}:{}: {}", path.display(), index + 1, reason));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found forbidden patterns in library code:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_library_lines_stop_at_test_module() {
    let content = "fn a() {}\n// x.unwrap()\n#[cfg(test)]\nmod tests { fn b() { x.unwrap(); } }\n";
    let lines: Vec<_> = library_lines(content).map(|(_, line)| line).collect();
    assert_eq!(lines, vec!["fn a() {}"]);
}
