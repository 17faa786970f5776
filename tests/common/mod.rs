#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn cjournal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cjournal").unwrap();
    cmd.env_remove("CJOURNAL_ROOT");
    cmd.env_remove("CJOURNAL_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a content file relative to the default content directory
pub fn write_content(root: &Path, rel: &str, content: &str) {
    let path = root.join("src/content").join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn concept(title: &str, tags: &[&str]) -> String {
    format!("---\ntitle: {}\ntags: [{}]\n---\n\nNotes.\n", title, tags.join(", "))
}

pub fn problem(title: &str, ds: &[&str], techniques: &[&str], level: i64) -> String {
    format!(
        "---\ntitle: {}\nlinks:\n  - https://leetcode.com/problems/example/\nds: [{}]\ntechniques: [{}]\nlevel: {}\n---\n\nSolution.\n",
        title,
        ds.join(", "),
        techniques.join(", "),
        level
    )
}
