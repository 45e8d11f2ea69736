//! Edge Cases and Error Handling Tests
//!
//! Unusual inputs that must never abort a scan:
//! - Binary and non-UTF-8 files
//! - Unknown extensions and extension-less scripts
//! - Odd comment layouts and line endings

mod common;

use common::TestRepo;

#[test]
fn test_binary_file_is_skipped_and_scan_continues() {
    let repo = TestRepo::new().with_file("b.sh", "# Tutorial: survives\n# KWords: ok\n");
    repo.add_file("a.sh", b"# Tutorial: broken\xff\xfe\n");

    let report = repo.scan();
    assert_eq!(report.description(), Some("survives"));
    assert_eq!(report.keywords(), &["ok"]);
}

#[test]
fn test_unknown_extension_is_ignored() {
    let repo = TestRepo::new()
        .with_file("README.md", "# Tutorial: markdown heading\n")
        .with_file("notes.txt", "# Tutorial: text\n")
        .with_file("backup.sh~", "# Tutorial: editor backup\n");

    assert!(repo.scan().is_empty());
}

#[test]
fn test_extensionless_script_uses_shebang() {
    let repo = TestRepo::new()
        .with_file("bootstrap", "#!/usr/bin/env python3\n# Tutorial: sniffed\n# KWords: py\n")
        .with_file("LICENSE", "Tutorial: not a comment\n");

    let report = repo.scan();
    assert_eq!(report.description(), Some("sniffed"));
    assert_eq!(report.keywords(), &["py"]);
}

#[test]
fn test_double_hash_precedence() {
    let repo = TestRepo::new().with_file(
        "x.sh",
        "## KWords before heading\n##Tutorial: framed ##\n## KWords: c#, ##\n",
    );

    let report = repo.scan();
    assert_eq!(report.description(), Some("framed"));
    assert_eq!(report.keywords(), &["c#"]);
}

#[test]
fn test_crlf_line_endings() {
    let repo = TestRepo::new().with_file("win.ps.sh", "# Tutorial: windows\r\n# KWords: crlf\r\n");

    let report = repo.scan();
    assert_eq!(report.description(), Some("windows"));
    assert_eq!(report.keywords(), &["crlf"]);
}

#[test]
fn test_leading_blank_line_hides_metadata() {
    let repo = TestRepo::new().with_file("late.sh", "\n# Tutorial: too late\n");
    assert!(repo.scan().is_empty());
}

#[test]
fn test_keywords_without_heading_do_not_count() {
    let repo = TestRepo::new()
        .with_file("a.sh", "# KWords: orphan\n")
        .with_file("b.sh", "# Tutorial: real\n# KWords: kept\n");

    assert_eq!(repo.scan().keywords(), &["kept"]);
}

#[test]
fn test_multi_line_block_comments_are_not_scanned() {
    let repo = TestRepo::new().with_file(
        "Main.java",
        "/*\n * Tutorial: inside block\n * KWords: java\n */\nclass Main {}\n",
    );

    assert!(repo.scan().is_empty());
}

#[test]
fn test_mixed_case_markers() {
    let repo = TestRepo::new().with_file("m.py", "# TUTORIAL: shout\n# kWoRdS: quiet\n");

    let report = repo.scan();
    assert_eq!(report.description(), Some("shout"));
    assert_eq!(report.keywords(), &["quiet"]);
}
