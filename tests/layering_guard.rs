//! Layering guardrails to keep the syntax frontend free of driver concerns.
//!
//! `zeru_syntax` is a library: it must not pull in the CLI stack (`clap`, `tracing-subscriber`), and `zeru_core`
//! must stay dependency-free apart from its own registries. This test scans the member manifests and fails if a
//! forbidden crate appears in their `[dependencies]` tables.

/// Return the crate names listed in the `[dependencies]` table of a manifest.
fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn syntax_crate_does_not_depend_on_cli_stack() {
    let deps = dependency_names(include_str!("../crates/zeru_syntax/Cargo.toml"));
    for forbidden in ["clap", "tracing-subscriber", "zeru"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in zeru_syntax [dependencies]"
        );
    }
    assert!(deps.iter().any(|d| d == "zeru_core"), "zeru_syntax should take its vocabulary from zeru_core");
}

#[test]
fn core_crate_has_no_workspace_dependencies() {
    let deps = dependency_names(include_str!("../crates/zeru_core/Cargo.toml"));
    assert!(
        !deps.iter().any(|d| d.starts_with("zeru")),
        "zeru_core must not depend on other workspace crates: {deps:?}"
    );
}
