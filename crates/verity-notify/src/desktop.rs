use tokio::process::Command;

use crate::{Notification, Notifier, NotifyError};

/// Dispatches through the platform's own notification tool
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

#[async_trait::async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let mut command = platform_command(notification).ok_or(NotifyError::Unsupported)?;
        let status = command.status().await?;

        if !status.success() {
            return Err(NotifyError::Exit(status));
        }
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn platform_command(n: &Notification) -> Option<Command> {
    let mut command = Command::new("notify-send");
    if !n.icon.is_empty() {
        command.args(["--icon", n.icon.as_str()]);
    }
    command.args(["--app-name", "verity", n.title.as_str(), n.body.as_str()]);
    Some(command)
}

#[cfg(target_os = "macos")]
fn platform_command(n: &Notification) -> Option<Command> {
    let script = format!(
        "display notification {} with title {}",
        applescript_quote(&n.body),
        applescript_quote(&n.title)
    );
    let mut command = Command::new("osascript");
    command.args(["-e", script.as_str()]);
    Some(command)
}

#[cfg(target_os = "macos")]
fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(target_os = "windows")]
fn platform_command(n: &Notification) -> Option<Command> {
    let quote = |s: &str| format!("'{}'", s.replace('\'', "''"));
    let script = format!(
        "Add-Type -AssemblyName System.Windows.Forms; \
         $n = New-Object System.Windows.Forms.NotifyIcon; \
         $n.Icon = [System.Drawing.SystemIcons]::Information; \
         $n.Visible = $true; \
         $n.ShowBalloonTip(5000, {}, {}, 'Info'); \
         Start-Sleep -Seconds 6; $n.Dispose()",
        quote(&n.title),
        quote(&n.body)
    );
    let mut command = Command::new("powershell");
    command.args(["-NoProfile", "-Command", script.as_str()]);
    Some(command)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn platform_command(_n: &Notification) -> Option<Command> {
    None
}
