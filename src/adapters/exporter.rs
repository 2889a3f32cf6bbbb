use crate::domain::ports::FlowExporter;
use crate::utils::error::{FlowError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

pub const DEFAULT_EXPORTER: &str = "yafscii";

/// Runs `<program> -i <file>` and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandExporter {
    program: String,
}

impl CommandExporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandExporter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORTER)
    }
}

impl FlowExporter for CommandExporter {
    fn export(&self, input: &Path) -> Result<String> {
        tracing::debug!("Running {} -i {}", self.program, input.display());

        let output = Command::new(&self.program)
            .arg("-i")
            .arg(input)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FlowError::ExporterMissing {
                    program: self.program.clone(),
                },
                _ => FlowError::Io(e),
            })?;

        if !output.status.success() {
            return Err(FlowError::ExporterFailed {
                program: self.program.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!("{} produced {} bytes", self.program, stdout.len());
        Ok(stdout)
    }
}
