//! Hygiene: source-level bans for the booking core.
//!
//! Production files under `src/` (sibling `_test.rs` files excluded) are
//! scanned line by line. Every budget is zero; a hit names the file and count.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    reason: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, reason: "panics" },
    Rule { pattern: ".expect(", budget: 0, reason: "panics" },
    Rule { pattern: "panic!(", budget: 0, reason: "panics" },
    Rule { pattern: "unreachable!(", budget: 0, reason: "panics" },
    Rule { pattern: "todo!(", budget: 0, reason: "unfinished stub" },
    Rule { pattern: "unimplemented!(", budget: 0, reason: "unfinished stub" },
    Rule { pattern: "let _ =", budget: 0, reason: "discards a result unread" },
    Rule { pattern: ".ok()", budget: 0, reason: "drops an error unread" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, reason: "hides unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "scan found no lib.rs");
}

#[test]
fn banned_patterns_stay_within_budget() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let total: usize = found.iter().map(|(_, n)| n).sum();
        if total > rule.budget {
            let detail: Vec<String> = found.iter().map(|(p, n)| format!("    {p}: {n}")).collect();
            failures.push(format!(
                "{} ({}): found {total}, max {}\n{}",
                rule.pattern,
                rule.reason,
                rule.budget,
                detail.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
