//! Opening outbound links
//!
//! Map and search links are handed to the platform opener so they open in
//! the user's browser. URLs are never validated or fetched here.

use std::io;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

/// Builds the platform command that opens `url`
fn opener_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Opens `url` in a new browser context
///
/// Returns once the opener has been spawned; its exit status is checked on a
/// background task and only logged. Must be called from within a tokio runtime.
pub fn open_url(url: &str) -> io::Result<()> {
    let mut child = opener_command(url).spawn()?;
    info!(url, "opening link");

    let url = url.to_string();
    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) if !status.success() => {
                warn!(url = %url, %status, "link opener exited with failure");
            }
            Ok(_) => {}
            Err(e) => warn!(url = %url, error = %e, "failed to wait for link opener"),
        }
    });

    Ok(())
}
