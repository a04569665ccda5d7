use codecat::{combine, CombineBuilder, DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_PATTERNS};
use std::fs;
use tempfile::tempdir;

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(dir.path().join("main.py"), "print('hello')\n").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/util.py"), "def util():\n    pass\n").unwrap();
    fs::write(dir.path().join("README.md"), "# readme\n").unwrap();
    fs::write(dir.path().join("logo.png"), [0x89, 0x50, 0x4e, 0x47]).unwrap();

    let build = || {
        CombineBuilder::new(dir.path())
            .exclude_patterns(DEFAULT_EXCLUDE_PATTERNS.iter().map(|s| s.to_string()).collect())
            .exclude_dirs(DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect())
            .include_patterns(vec!["*.py".into()])
            .build()
    };

    let first = out.path().join("first.txt");
    let report = combine(build(), &first).unwrap();
    assert_eq!(report.file_count, 2);
    assert_eq!(report.skipped_count, 2);

    let output = fs::read_to_string(&first).unwrap();
    let mut lines = output.lines();
    assert_eq!(
        lines.next().unwrap(),
        format!("# COMBINED CODE FILES FROM {}", dir.path().display())
    );
    assert!(lines.next().unwrap().starts_with("# Generated on "));

    // Every rule line is exactly 80 '=' characters.
    let rules: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with('='))
        .collect();
    assert!(!rules.is_empty());
    assert!(rules.iter().all(|l| l.len() == 80 && l.bytes().all(|b| b == b'=')));

    assert_eq!(output.matches("# FILE: ").count(), 2);
    assert!(output.contains("# FILE: main.py"));
    assert!(output.contains("# FILE: src/util.py"));
    assert!(output.contains("print('hello')"));
    assert!(output.contains("# SUMMARY: Combined 2 files (skipped 2)"));
    assert!(output.ends_with("=\n"));
}

#[test]
fn integration_repeat_runs_match_except_timestamp() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "beta").unwrap();

    let first = out.path().join("first.txt");
    let second = out.path().join("second.txt");
    combine(CombineBuilder::new(dir.path()).build(), &first).unwrap();
    combine(CombineBuilder::new(dir.path()).build(), &second).unwrap();

    let strip_timestamp = |text: &str| {
        text.lines()
            .filter(|l| !l.starts_with("# Generated on "))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(
        strip_timestamp(&fs::read_to_string(&first).unwrap()),
        strip_timestamp(&fs::read_to_string(&second).unwrap())
    );
}
