use anyhow::{Context, Result};
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::fs;
use std::path::Path;

/// Send SIGHUP to a running waypost process via pid file.
///
/// The server re-reads its config directory and picks up a new proxy
/// listener mode without restarting.
pub fn run<P: AsRef<Path>>(pid_file: P) -> Result<()> {
    let pid_file = pid_file.as_ref();

    let contents = fs::read_to_string(pid_file)
        .with_context(|| format!("failed to read pid file {}", pid_file.display()))?;

    let pid: i32 = contents
        .trim()
        .parse()
        .context("invalid pid file contents")?;

    let pid = Pid::from_raw(pid);

    kill(pid, Signal::SIGHUP).with_context(|| format!("failed to send SIGHUP to pid {}", pid))?;

    println!("Sent SIGHUP to waypost (pid {})", pid);

    Ok(())
}
