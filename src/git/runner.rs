//! Git command runner abstraction
//!
//! All git invocations go through [`CommandRunner`] so the pipeline can be
//! driven by a scripted runner in tests. [`GitRunner`] is the real thing: it
//! runs `git` with an argument vector (never a shell) inside an explicit
//! repository directory.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::error::ExecutionError;

/// Runs a git subcommand and returns its standard output.
pub trait CommandRunner {
    /// Run `git <args>`.
    ///
    /// With `stream` set, stdout and stderr are forwarded to this process's
    /// own streams while the command runs; stdout is still captured and
    /// returned.
    fn run(&self, args: &[&str], stream: bool) -> Result<String, ExecutionError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, args: &[&str], stream: bool) -> Result<String, ExecutionError> {
        (**self).run(args, stream)
    }
}

/// Runs the `git` executable as a subprocess.
#[derive(Debug, Clone)]
pub struct GitRunner {
    program: OsString,
    repo_root: PathBuf,
}

impl GitRunner {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            program: OsString::from("git"),
            repo_root: repo_root.into(),
        }
    }

    /// Use a different executable in place of `git`.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn command_line(&self, args: &[&str]) -> String {
        let program = self.program.to_string_lossy();
        if args.is_empty() {
            program.into_owned()
        } else {
            format!("{program} {}", args.join(" "))
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(&self.repo_root);
        cmd
    }

    fn run_captured(&self, args: &[&str], command: String) -> Result<String, ExecutionError> {
        let output = match self.command(args).stdin(Stdio::null()).output() {
            Ok(output) => output,
            Err(source) => return Err(ExecutionError::Launch { command, source }),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExecutionError::Failed {
                command,
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run_streaming(&self, args: &[&str], command: String) -> Result<String, ExecutionError> {
        let mut child = match self
            .command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(source) => return Err(ExecutionError::Launch { command, source }),
        };

        let child_stdout = child.stdout.take();
        let child_stderr = child.stderr.take();

        // stderr is pumped on its own thread so neither pipe can fill up and
        // stall the child while the other is being drained.
        let (stdout_result, stderr_result) = thread::scope(|scope| {
            let stderr_pump = scope.spawn(move || forward(child_stderr, io::stderr()));
            let stdout_result = forward(child_stdout, io::stdout());
            let stderr_result = stderr_pump
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stderr forwarder panicked")));
            (stdout_result, stderr_result)
        });

        let status = child.wait();
        let io_err = |source: io::Error| ExecutionError::Io {
            command: command.clone(),
            source,
        };
        let captured = stdout_result.map_err(io_err)?;
        stderr_result.map_err(io_err)?;
        let status = status.map_err(io_err)?;

        if !status.success() {
            return Err(ExecutionError::Failed {
                command,
                status,
                stderr: String::new(),
            });
        }

        Ok(String::from_utf8_lossy(&captured).into_owned())
    }
}

impl CommandRunner for GitRunner {
    fn run(&self, args: &[&str], stream: bool) -> Result<String, ExecutionError> {
        let command = self.command_line(args);
        debug!(%command, repo_root = %self.repo_root.display(), stream, "running git");

        if stream {
            self.run_streaming(args, command)
        } else {
            self.run_captured(args, command)
        }
    }
}

/// Copy everything from `source` to `sink` as it arrives, returning a copy of
/// the bytes.
fn forward<R: Read, W: Write>(source: Option<R>, mut sink: W) -> io::Result<Vec<u8>> {
    let mut captured = Vec::new();
    let Some(mut source) = source else {
        return Ok(captured);
    };

    let mut buf = [0u8; 4096];
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sink.write_all(&buf[..n])?;
        sink.flush()?;
        captured.extend_from_slice(&buf[..n]);
    }

    Ok(captured)
}
