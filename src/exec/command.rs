// src/exec/command.rs

//! Shell command work used by the `taskdag` binary.

use std::process::Command;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::exec::Work;

/// Result of one successfully completed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub name: String,
    pub cmd: String,
    pub exit_code: i32,
    pub elapsed: Duration,
}

/// Runs `cmd` through the platform shell and waits for it to exit.
///
/// Stdout and stderr are inherited so that task output appears directly in
/// the terminal. A non-zero exit status is a failure.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    pub name: String,
    pub cmd: String,
}

impl ShellCommand {
    pub fn new(name: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cmd: cmd.into(),
        }
    }

    fn build(&self) -> Command {
        if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.cmd);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.cmd);
            c
        }
    }
}

impl Work<(), TaskReport> for ShellCommand {
    fn run(&self, _input: &()) -> Result<TaskReport> {
        info!(task = %self.name, cmd = %self.cmd, "starting task process");
        let started = Instant::now();

        let status = self
            .build()
            .status()
            .with_context(|| format!("spawning process for task '{}'", self.name))?;

        let elapsed = started.elapsed();
        let code = status.code().unwrap_or(-1);

        info!(
            task = %self.name,
            exit_code = code,
            success = status.success(),
            elapsed_ms = elapsed.as_millis() as u64,
            "task process exited"
        );

        if !status.success() {
            bail!("command `{}` exited with code {}", self.cmd, code);
        }

        Ok(TaskReport {
            name: self.name.clone(),
            cmd: self.cmd.clone(),
            exit_code: code,
            elapsed,
        })
    }
}
