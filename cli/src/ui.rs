use colored::Colorize;
use std::io::{self, Write};

/// Print a status message with a spinner-like indicator
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print a numbered scan step
pub fn step_message(step_number: usize, total_steps: usize, message: &str) {
    println!(
        "{} {}",
        format!("Step {}/{}:", step_number, total_steps).cyan().bold(),
        message
    );
}

/// Print an aligned `label: value` line for verbose summaries
pub fn detail_line(label: &str, value: &str) {
    println!("   {:<16} {}", format!("{}:", label).dimmed(), value);
}
