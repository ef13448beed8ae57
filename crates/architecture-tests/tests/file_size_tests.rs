//! Architecture tests for file size limits.
//!
//! - Files over 500 LOC are reported as warnings.
//! - Files over 800 LOC fail unless listed in `EXCLUDED_FILES`.

mod common;

use std::fs;
use std::path::Path;

use common::{display_path, rust_files, workspace_root};

const WARNING_THRESHOLD: usize = 500;
const FAILURE_THRESHOLD: usize = 800;

/// (path_suffix, justification) pairs. The suffix is matched against the end
/// of the workspace-relative path.
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let root = workspace_root();
    let crates_dir = root.join("crates");
    assert!(crates_dir.exists(), "crates/ directory not found at {crates_dir:?}");

    let files = rust_files(&crates_dir);
    let mut failures = Vec::new();

    for path in &files {
        let loc = count_loc(path);
        let relative = display_path(&root, path);
        let excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !excluded {
            failures.push(format!("  - {relative}: {loc} lines"));
        } else if loc > WARNING_THRESHOLD {
            eprintln!("[architecture] warning: {relative}: {loc} lines");
        }
    }

    assert!(
        failures.is_empty(),
        "Files exceeding {FAILURE_THRESHOLD} LOC must be split or added to EXCLUDED_FILES:\n{}",
        failures.join("\n")
    );
    eprintln!("[architecture] Checked {} Rust files for size limits.", files.len());
}

/// Count non-blank lines that are not line comments.
fn count_loc(path: &Path) -> usize {
    let content = fs::read_to_string(path).unwrap_or_default();
    let mut count = 0;
    let mut in_block_comment = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("/*") {
            in_block_comment = true;
        }
        if in_block_comment {
            if trimmed.ends_with("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        count += 1;
    }

    count
}

#[test]
fn test_count_loc_skips_comments_and_blanks() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("sample.rs");
    fs::write(
        &file,
        r#"//! Module documentation

/// Function documentation
fn main() {
    let x = 5; // inline comment

    /* block
       comment */
    println!("{x}");
}
"#,
    )
    .unwrap();

    assert_eq!(count_loc(&file), 4);
}
