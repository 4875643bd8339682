//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing kwtrie CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the kwtrie binary
pub fn kwtrie_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("kwtrie"));
    cmd.env_remove("KWTRIE_CONFIG")
        .env_remove("KWTRIE_LOG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// `kwtrie matches`
pub fn matches() -> SearchBuilder<Text> {
    SearchBuilder::new("matches")
}

/// `kwtrie gaps`
pub fn gaps() -> SearchBuilder<Text> {
    SearchBuilder::new("gaps")
}

/// `kwtrie count`
pub fn count() -> SearchBuilder<Text> {
    SearchBuilder::new("count")
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level search builder for fluent test assertions
pub struct SearchBuilder<Mode = Text> {
    command: &'static str,
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Vec<u8>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl SearchBuilder<Text> {
    fn new(command: &'static str) -> Self {
        Self {
            command,
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: Vec::new(),
            _mode: PhantomData,
        }
    }

    /// Switch to JSON output mode
    pub fn json(self) -> SearchBuilder<Json> {
        SearchBuilder {
            command: self.command,
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        run_exits(self, 0)
    }

    /// Run and expect a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self, code)
    }
}

#[allow(dead_code)]
impl SearchBuilder<Json> {
    /// Run, expect exit code 0, and parse stdout
    pub fn passes(self) -> serde_json::Value {
        parse_json(&run_exits(self, 0))
    }

    /// Run, expect a specific exit code, and parse stdout
    pub fn exits(self, code: i32) -> serde_json::Value {
        parse_json(&run_exits(self, code))
    }
}

#[allow(dead_code)]
impl<Mode: 'static> SearchBuilder<Mode> {
    /// Add `-k` for each keyword
    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        for keyword in keywords {
            self.args.push("-k".to_string());
            self.args.push(keyword.to_string());
        }
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Feed text on stdin
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = text.as_bytes().to_vec();
        self
    }

    /// Build the command
    fn command(self, scratch: &Path) -> (Command, Vec<u8>) {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();

        let mut cmd = kwtrie_cmd();
        cmd.arg(self.command);
        if is_json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);

        match &self.dir {
            Some(dir) => cmd.current_dir(dir),
            None => cmd.current_dir(scratch),
        };

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        (cmd, self.stdin)
    }
}

fn run_exits<Mode: 'static>(builder: SearchBuilder<Mode>, code: i32) -> RunAssert {
    let scratch = Project::empty();
    let (cmd, stdin) = builder.command(scratch.path());
    let output = assert_cmd::Command::from_std(cmd)
        .write_stdin(stdin)
        .output()
        .expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn parse_json(run: &RunAssert) -> serde_json::Value {
    serde_json::from_slice(&run.output.stdout).expect("valid JSON")
}

pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary directory that stops config discovery at its root.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project (a `.git` marker bounds config discovery)
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write kwtrie.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("kwtrie.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}
