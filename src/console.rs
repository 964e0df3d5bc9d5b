use crate::{backend::HealthReply, error::Error};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

/// How long a success notice stays on screen in interactive mode.
/// Failures never expire.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(5);

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub const MSG_INVALID_LINK: &str = "Not a valid Feishu/Lark document link.";
pub const MSG_SUCCESS: &str =
    "Workflow triggered! The Feishu group will get a notice once processing completes.";
pub const MSG_UNREACHABLE: &str = "Cannot reach the backend service. Is it running?";

/// Map a failed submission onto the line shown to the user.
#[must_use]
pub fn failure_message(err: &Error) -> String {
    if err.is_unreachable() {
        return MSG_UNREACHABLE.to_owned();
    }
    match err {
        Error::InvalidLink => MSG_INVALID_LINK.to_owned(),
        Error::Rejected(reason) => format!("Processing failed: {reason}"),
        other => format!("Request failed: {other}"),
    }
}

/// Spinner shown while the backend call is in flight. Hidden in quiet mode
/// so output stays pipe-friendly.
#[must_use]
pub fn loading_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("spinner template parses"),
    );
    pb.set_message("Submitting to workflow...");
    pb.enable_steady_tick(TICK_INTERVAL);
    pb
}

pub fn print_success(message: &str) {
    println!("{} {message}", "✓".green().bold());
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", "✗".red().bold());
}

/// Workflow output text, when the backend returned any.
pub fn print_result_text(text: &str) {
    println!("  {}", text.dimmed());
}

/// Health summary without decoration, for quiet output.
#[must_use]
pub fn health_line(base_url: &Url, reply: &HealthReply) -> String {
    let service = reply.service.as_deref().unwrap_or("unknown service");
    let version = reply.version.as_deref().unwrap_or("unknown version");
    format!("{} ({service} {version}) at {base_url}", reply.status)
}

pub fn print_health(base_url: &Url, reply: &HealthReply) {
    println!("{} {}", "✓".green().bold(), health_line(base_url, reply));
}

fn success_notice_text(message: &str, detail: Option<&str>) -> String {
    let mut text = format!("{} {message}", "✓".green().bold());
    if let Some(detail) = detail {
        text.push_str(&format!("\n  {}", detail.dimmed()));
    }
    text
}

/// Show a success notice that erases itself after [`SUCCESS_NOTICE_TTL`].
/// Workflow output text, when present, rides under the notice line and
/// expires with it.
pub async fn transient_success(message: &str, detail: Option<&str>) {
    let notice = ProgressBar::new_spinner();
    notice.set_style(
        ProgressStyle::default_spinner()
            .template("{msg}")
            .expect("notice template parses"),
    );
    notice.set_message(success_notice_text(message, detail));
    notice.tick();
    sleep(SUCCESS_NOTICE_TTL).await;
    notice.finish_and_clear();
}
