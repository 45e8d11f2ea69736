//! Common test utilities and fixtures for tutorial-metadata integration tests
//!
//! This module provides:
//! - `TestRepo` builder for creating tutorial trees in a temporary directory
//! - Helpers for running the built binary against such a tree

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;
use tutorial_metadata::{scan_tree, TutorialReport, WalkOptions};

/// A throwaway tutorial tree
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Builder-style file creation
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.add_file(relative, content.as_bytes());
        self
    }

    pub fn add_file(&self, relative: &str, content: &[u8]) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write fixture file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn scan(&self) -> TutorialReport {
        scan_tree(self.path(), &WalkOptions::default()).expect("scan succeeds")
    }

    /// Run the binary with `args` followed by the tree's root
    pub fn run_cli(&self, args: &[&str]) -> Output {
        run_binary(args.iter().copied().chain([self.path().to_str().unwrap()]))
    }
}

pub fn run_binary<'a>(args: impl IntoIterator<Item = &'a str>) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tutorial-metadata"))
        .args(args)
        .output()
        .expect("run tutorial-metadata")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// The five-file tutorial: four files declare tutorial #1, `source2.ml`
/// declares tutorial #2 and must not contribute anything.
pub fn worked_example() -> TestRepo {
    TestRepo::new()
        .with_file(
            "install.sh",
            "#!/bin/sh\n\
             ## Tutorial #1: Tutorial example\n\
             ## KWords: example, installation\n\
             echo \"installing\"\n",
        )
        .with_file(
            "lib/helper.lua",
            "-- Tutorial #1: Tutorial example, Lua helpers\n\
             -- KWords: language X, example\n\
             return {}\n",
        )
        .with_file(
            "main.c",
            "/* Tutorial #1: Tutorial example */\n\
             // KWords: library,\n\
             //   installation\n\
             int main(void) { return 0; }\n",
        )
        .with_file(
            "setup.hs",
            "-- Tutorial #1\n\
             -- KWords: library\n\
             main = pure ()\n",
        )
        .with_file(
            "source2.ml",
            "(* Tutorial #2: Another tutorial *)\n\
             (* KWords: x, y *)\n\
             let () = ()\n",
        )
}
