/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Build the AppleScript for a notification, escaping quotes in the body
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn notification_script(title: &str, body: &str) -> String {
    format!(
        r#"display notification "{}" with title "{}""#,
        body.replace('"', "\\\""),
        title.replace('"', "\\\"")
    )
}

/// Send a desktop notification when a focus or break phase ends
pub fn notify_session_complete(was_break: bool, quote: &str) {
    let title = if was_break {
        "Focus Flow - Break Over"
    } else {
        "Focus Flow - Session Complete"
    };

    #[cfg(target_os = "macos")]
    {
        let _ = Command::new("osascript")
            .arg("-e")
            .arg(notification_script(title, quote))
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = (title, quote);
    }
}
