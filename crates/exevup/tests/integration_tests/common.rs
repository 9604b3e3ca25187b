use camino::Utf8PathBuf;
use camino_tempfile_ext::camino_tempfile::Utf8TempDir;
use std::{collections::HashMap, process::Command};

pub struct ExevupTest {
    pub temp_dir: Utf8TempDir,
    pub cwd: Utf8PathBuf,
    pub env: HashMap<String, String>,
}

impl ExevupTest {
    pub fn new() -> Self {
        let temp_dir = Utf8TempDir::new().expect("Failed to create temporary directory");
        let cwd = temp_dir.path().into();

        Self {
            temp_dir,
            cwd,
            env: HashMap::new(),
        }
    }

    pub fn exevup(&self, args: &[&str]) -> ExevupOutput {
        let mut cmd = self.exevup_command();
        cmd.args(args);

        let output = cmd.output().expect("Failed to execute exevup command");
        ExevupOutput::new(output)
    }

    pub fn exevup_command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_exevup"));
        cmd.current_dir(&self.cwd);
        cmd.env_clear().envs(&self.env);
        cmd
    }

    pub fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.cwd.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.cwd.join(name)).expect("Failed to read test file")
    }

    pub fn read_json(&self, name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(name)).expect("Test file is not valid JSON")
    }
}

pub struct ExevupOutput {
    pub output: std::process::Output,
}

impl ExevupOutput {
    pub fn new(output: std::process::Output) -> Self {
        Self { output }
    }

    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success(),
            "Expected command to succeed, got {:#?}",
            self.output
        );
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        assert!(
            !self.success(),
            "Expected command to fail, got {:#?}",
            self.output
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }
}
