//! Running external programs

use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::{Error, Result};

/// Flags whose following value never appears in logs
const SENSITIVE_FLAGS: &[&str] = &["--docker-password"];

/// Per-invocation execution flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Treat any stderr output as a failure
    pub fail_on_stderr: bool,
    /// A non-zero exit code is expected and only logged at debug level
    pub ignore_return_code: bool,
    /// Do not echo the command line or its output
    pub silent: bool,
}

/// Runs a program to completion and reports its exit code
pub trait ProcessRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        options: ExecOptions,
    ) -> impl Future<Output = Result<i32>> + Send;
}

/// [`ProcessRunner`] backed by real child processes
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &Path, args: &[String], options: ExecOptions) -> Result<i32> {
        let command_line = format!("{} {}", program.display(), mask_args(args).join(" "));
        if options.silent {
            debug!("[command]{}", command_line);
        } else {
            info!("[command]{}", command_line);
        }

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null());
        let process_error = |source| Error::Process {
            program: program.to_path_buf(),
            source,
        };

        let mut code;
        if !options.silent && !options.fail_on_stderr {
            // Output goes straight to the step log as it is produced
            let status = command
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .await
                .map_err(process_error)?;
            // Killed by a signal
            code = status.code().unwrap_or(-1);
        } else {
            let output = command.output().await.map_err(process_error)?;
            if !options.silent {
                echo(&output.stdout, &mut std::io::stdout());
                echo(&output.stderr, &mut std::io::stderr());
            }
            code = output.status.code().unwrap_or(-1);

            if options.fail_on_stderr && code == 0 && !output.stderr.is_empty() {
                warn!("{} wrote to stderr", program.display());
                code = 1;
            }
        }

        if code != 0 {
            if options.ignore_return_code {
                debug!("{} exited with code {}", program.display(), code);
            } else {
                warn!("{} exited with code {}", program.display(), code);
            }
        }

        Ok(code)
    }
}

/// Replay captured child output
fn echo(bytes: &[u8], sink: &mut impl Write) {
    if let Err(e) = sink.write_all(bytes).and_then(|()| sink.flush()) {
        warn!("Failed to echo command output: {}", e);
    }
}

/// Copy of `args` with the values of sensitive flags masked
pub fn mask_args(args: &[String]) -> Vec<String> {
    let mut masked = Vec::with_capacity(args.len());
    let mut hide_next = false;
    for arg in args {
        if hide_next {
            masked.push("***".to_string());
            hide_next = false;
            continue;
        }
        hide_next = SENSITIVE_FLAGS.contains(&arg.as_str());
        masked.push(arg.clone());
    }
    masked
}
