//! Test environment builder for isolated Randeploy testing.
//!
//! Provides `TestEnv` - a temp project with artifact files and a
//! `randeploy.toml` pointing the deploy tool at a shell script, plus helpers
//! to run the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::PROJECT_ROOT;

/// Result of running a Randeploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated test environment.
///
/// Provides:
/// - Isolated project directory (the working directory of every run)
/// - Isolated config home, so a developer's user config never leaks in
/// - Plain ASCII, colorless output
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory used as HOME and XDG_CONFIG_HOME
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run randeploy in the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run randeploy from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .output()
            .expect("Failed to execute randeploy");

        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    classes: Vec<String>,
    triggers: Vec<String>,
    tool_script: Option<String>,
    extra_config: String,
    write_config: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            triggers: Vec::new(),
            tool_script: None,
            extra_config: String::new(),
            write_config: true,
        }
    }

    /// Add `classes/<name>.cls` with its `-meta.xml` sidecar
    pub fn with_class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    /// Add `triggers/<name>.trigger` with its `-meta.xml` sidecar
    pub fn with_trigger(mut self, name: &str) -> Self {
        self.triggers.push(name.to_string());
        self
    }

    /// Use `sh -c <script>` as the deploy tool
    pub fn with_tool(mut self, script: &str) -> Self {
        self.tool_script = Some(script.to_string());
        self
    }

    /// Append raw TOML to the generated `randeploy.toml`
    pub fn with_config(mut self, toml: &str) -> Self {
        self.extra_config.push_str(toml);
        self.extra_config.push('\n');
        self
    }

    /// Do not write `randeploy.toml`
    pub fn without_config(mut self) -> Self {
        self.write_config = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let config_home = TempDir::new().expect("Failed to create config home");
        let base = project_root.path().join(PROJECT_ROOT);

        for name in &self.classes {
            write_file(&base.join(format!("classes/{}.cls", name)), "public class {}");
            write_file(&base.join(format!("classes/{}.cls-meta.xml", name)), "<xml/>");
        }
        for name in &self.triggers {
            write_file(&base.join(format!("triggers/{}.trigger", name)), "trigger {}");
            write_file(&base.join(format!("triggers/{}.trigger-meta.xml", name)), "<xml/>");
        }

        if self.write_config {
            let mut config = format!("[project]\nroot = \"{}\"\n", PROJECT_ROOT);
            if let Some(script) = &self.tool_script {
                config.push_str(&format!(
                    "\n[tool]\nprogram = \"sh\"\nsubcommand = [\"-c\", '''{}''', \"sh\"]\n",
                    script
                ));
            }
            config.push('\n');
            config.push_str(&self.extra_config);
            write_file(&project_root.path().join("randeploy.toml"), &config);
        }

        TestEnv {
            project_root,
            config_home,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_randeploy")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
