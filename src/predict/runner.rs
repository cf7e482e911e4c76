//! The execution seam between the HTTP layer and the external program.

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to start {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("lost contact with {program}: {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },
}

/// Everything a finished invocation left behind. `exit_code` is `None` when
/// the process was killed by a signal, which the gateway treats like any
/// other non-zero exit.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[async_trait]
pub trait ProgramRunner: Send + Sync {
    /// Runs the program to completion with the given arguments, capturing
    /// both output streams. Resolves only once the process has fully exited;
    /// no deadline is applied.
    async fn invoke(&self, args: &[String]) -> Result<ProcessOutcome, InvokeError>;
}

/// Spawns a fresh OS process per invocation. Nothing is shared between
/// concurrent invocations and nothing limits how many run at once.
pub struct CommandRunner {
    program: String,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Accumulates a pipe chunk by chunk as the child produces output. Invalid
/// UTF-8 is replaced rather than rejected.
async fn drain(pipe: Option<impl AsyncRead + Unpin>) -> String {
    let mut text = String::new();
    let Some(mut pipe) = pipe else {
        return text;
    };
    let mut buf = [0u8; 4096];
    loop {
        match pipe.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => text.push_str(&String::from_utf8_lossy(&buf[..n])),
        }
    }
    text
}

#[async_trait]
impl ProgramRunner for CommandRunner {
    async fn invoke(&self, args: &[String]) -> Result<ProcessOutcome, InvokeError> {
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| InvokeError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        // Both pipes are drained while waiting, so a chatty child can never
        // block on a full pipe buffer.
        let (stdout, stderr, status) =
            tokio::join!(drain(stdout_pipe), drain(stderr_pipe), child.wait());

        let status = status.map_err(|source| InvokeError::Wait {
            program: self.program.clone(),
            source,
        })?;

        Ok(ProcessOutcome {
            stdout,
            stderr,
            exit_code: status.code(),
        })
    }
}
