#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the check-tree binary, isolated from CI detection.
#[macro_export]
macro_rules! check_tree {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("check-tree"));
        cmd.env_remove("CI").env_remove("RUST_LOG");
        cmd
    }};
}

/// Tool table with one tool that reports a finding and one that passes.
pub const ONE_FAILING_TOOL: &str = r#"
[[tools.check]]
name = "golint"
command = ["sh", "-c", "echo 'line 3: unused var'", "sh"]
signal = "output"

[[tools.check]]
name = "go vet"
command = ["sh", "-c", "exit 0", "sh"]
signal = "exit-status"
report = "stderr"
"#;

/// Tool that fails unless it is given exactly the `.` directory.
pub const ROOT_DIR_ONLY_TOOL: &str = r#"
[[tools.check]]
name = "root-only"
command = ["sh", "-c", "test \"$*\" = '.' || { echo \"got: $*\"; exit 1; }", "sh"]
"#;

/// Temporary working tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture that is also an empty git repository on `master`.
    pub fn git_repo() -> Self {
        let fixture = Self::new();
        fixture.git(&["init", "-q", "-b", "master"]);
        fixture.git(&["config", "user.email", "test@test.com"]);
        fixture.git(&["config", "user.name", "Test User"]);
        fixture.git(&["config", "commit.gpgsign", "false"]);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a Go source file declaring the given package.
    pub fn create_go_file(&self, relative_path: &str, package: &str) {
        self.create_file(relative_path, &format!("package {package}\n"));
    }

    /// Writes `.check-tree.toml` at the root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".check-tree.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Runs git in the fixture directory, panicking on failure.
    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
    }
}
