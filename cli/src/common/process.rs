//! # cbrs Process Execution (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Turns a built `Cmd` into a child process and reports how it ended. POSIX
//! only: the child is created with `fork` and replaced with `execvp`, so slot 0
//! of the command is resolved through `PATH` and no shell is involved.
//!
//! ## Operations
//!
//! - `launch`: logs the rendered command, forks, execs in the child and
//!   returns a `ProcessHandle` without waiting. On success the `Cmd` is reset
//!   (length 0, capacity kept) so it can be reused.
//! - `ProcessHandle::wait` / `wait`: blocks until the child exits or is
//!   killed, reaps it and returns `true` only for exit code 0.
//! - `run_sync`: `launch` followed by `wait`.
//! - `try_run_sync`: the same as a `Result`, for callers that propagate errors.
//!
//! ## Diagnostics
//!
//! Each launch emits one `info` event with the rendered command line. Each
//! failure emits exactly one `error` event: the fork error, the `waitpid`
//! error, the non-zero exit code or the terminating signal. When `execvp`
//! fails the child writes its own `[ERROR]` line directly to fd 2 and exits
//! with status 1; the parent only sees `Exited(1)`. `try_run_sync` emits the
//! launch line but leaves the error line to whoever handles the `Err`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cbrs::common::command::Cmd;
//! use cbrs::common::process;
//!
//! let mut cmd = Cmd::new();
//! cmd.push_args(["cc", "-o", "main", "main.c"]);
//! if !process::run_sync(&mut cmd) {
//!     std::process::exit(1);
//! }
//! ```
//!
use crate::common::command::Cmd;
use crate::core::error::CbError;
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, ForkResult, Pid};
use std::ffi::CString;
use tracing::{debug, error, info};

/// Exit status used by the child when `execvp` fails.
pub const EXEC_FAILURE_STATUS: i32 = 1;

/// How a child process concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(Signal),
}

impl Termination {
    /// Only `Exited(0)` counts as success.
    pub fn success(&self) -> bool {
        matches!(self, Termination::Exited(0))
    }

    /// Converts an unsuccessful termination into the matching `CbError`.
    pub fn into_result(self, pid: Pid) -> Result<(), CbError> {
        match self {
            Termination::Exited(0) => Ok(()),
            Termination::Exited(code) => Err(CbError::ExitCode {
                pid: pid.as_raw(),
                code,
            }),
            Termination::Signaled(signal) => Err(CbError::Signaled {
                pid: pid.as_raw(),
                signal: signal.as_str().to_string(),
            }),
        }
    }
}

/// A running (or finished but not yet reaped) child process.
///
/// Waiting consumes the handle, so each child is reaped at most once through
/// it. Dropping a handle without waiting leaves a zombie until the parent exits.
#[derive(Debug)]
pub struct ProcessHandle {
    pid: Pid,
}

impl ProcessHandle {
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Blocks until the child exits or is killed by a signal and reaps it.
    ///
    /// Stop/continue notifications are skipped and an interrupted `waitpid`
    /// is retried. Any other `waitpid` failure is returned as `CbError::Wait`.
    pub fn wait_status(self) -> Result<Termination, CbError> {
        loop {
            match waitpid(self.pid, None) {
                Ok(WaitStatus::Exited(_, code)) => return Ok(Termination::Exited(code)),
                Ok(WaitStatus::Signaled(_, signal, _)) => {
                    return Ok(Termination::Signaled(signal))
                }
                Ok(other) => debug!("Ignoring non-terminal status {:?}", other),
                Err(Errno::EINTR) => continue,
                Err(source) => {
                    return Err(CbError::Wait {
                        pid: self.pid.as_raw(),
                        source,
                    })
                }
            }
        }
    }

    /// Waits for the child and reports `true` iff it exited with code 0.
    /// Any other outcome is logged as one error line.
    pub fn wait(self) -> bool {
        let pid = self.pid;
        match self.wait_status().and_then(|t| t.into_result(pid)) {
            Ok(()) => true,
            Err(e) => {
                error!("{}", e);
                false
            }
        }
    }
}

/// Waits on `handle`; see `ProcessHandle::wait`.
pub fn wait(handle: ProcessHandle) -> bool {
    handle.wait()
}

/// Spawns `cmd` without waiting for it and logs the failure, if any.
///
/// The argv array (with its terminating null pointer) is built before the
/// fork, so the child performs no allocation before `execvp`. On success the
/// command is reset for reuse; on failure it is left untouched.
///
/// ## Errors
///
/// * `CbError::EmptyCommand` if no argument was pushed.
/// * `CbError::NulInArgument` if an argument cannot be passed as a C string.
/// * `CbError::Spawn` if `fork` itself failed. No process exists then.
pub fn launch(cmd: &mut Cmd<'_>) -> Result<ProcessHandle, CbError> {
    spawn(cmd).inspect_err(|e| error!("{}", e))
}

/// Launches `cmd` and waits for it. Returns `false` without waiting when the
/// launch itself failed.
pub fn run_sync(cmd: &mut Cmd<'_>) -> bool {
    match launch(cmd) {
        Ok(handle) => handle.wait(),
        Err(_) => false,
    }
}

/// Like `run_sync`, but returns the failure instead of logging it. The
/// caller owns reporting, so no error line is emitted here.
pub fn try_run_sync(cmd: &mut Cmd<'_>) -> Result<(), CbError> {
    let handle = spawn(cmd)?;
    let pid = handle.pid();
    handle.wait_status()?.into_result(pid)
}

/// Logs the launch line, forks and execs. Failures are returned, not logged.
fn spawn(cmd: &mut Cmd<'_>) -> Result<ProcessHandle, CbError> {
    let rendered = cmd.render();
    info!("{}", rendered);

    let argv = c_argv(cmd)?;
    let mut argv_ptrs: Vec<*const libc::c_char> = argv.iter().map(|arg| arg.as_ptr()).collect();
    argv_ptrs.push(std::ptr::null());
    let exec_failure_prefix =
        format!("[ERROR]: The execvp of '{}' has failed with: ", cmd.args()[0]);

    // SAFETY: the child only calls execvp, write and _exit, all of which are
    // async-signal-safe, on data prepared before the fork.
    match unsafe { fork() } {
        Ok(ForkResult::Child) => exec_child(&argv_ptrs, exec_failure_prefix.as_bytes()),
        Ok(ForkResult::Parent { child }) => {
            debug!("Spawned process {}", child);
            cmd.reset();
            Ok(ProcessHandle { pid: child })
        }
        Err(source) => Err(CbError::Spawn {
            cmd: rendered,
            source,
        }),
    }
}

fn c_argv(cmd: &Cmd<'_>) -> Result<Vec<CString>, CbError> {
    if cmd.is_empty() {
        return Err(CbError::EmptyCommand);
    }
    cmd.args()
        .iter()
        .enumerate()
        .map(|(index, arg)| {
            CString::new(arg.as_bytes()).map_err(|_| CbError::NulInArgument { index })
        })
        .collect()
}

/// Replaces the child image. Never returns into caller code.
fn exec_child(argv: &[*const libc::c_char], failure_prefix: &[u8]) -> ! {
    // SAFETY: argv is non-empty, null-terminated and points into CStrings
    // owned by the caller's frame, which stays alive until exec or _exit.
    unsafe { libc::execvp(argv[0], argv.as_ptr()) };

    let reason = Errno::last();
    let _ = nix::unistd::write(std::io::stderr(), failure_prefix);
    let _ = nix::unistd::write(std::io::stderr(), reason.desc().as_bytes());
    let _ = nix::unistd::write(std::io::stderr(), b"\n");
    // SAFETY: _exit skips atexit handlers and stdio flushing inherited from
    // the parent.
    unsafe { libc::_exit(EXEC_FAILURE_STATUS) }
}
