use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Mensura".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Compute text metrics for batches of web articles\n".dimmed());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print the processed/skipped summary for a finished batch
pub fn print_summary(processed: usize, skipped: usize, output: &std::path::Path) {
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Batch Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!("  {} {}", "Processed:".dimmed(), processed.to_string().bright_white());
    eprintln!("  {} {}", "Skipped:".dimmed(), skipped.to_string().bright_white());
    eprintln!("  {} {}\n", "Output:".dimmed(), output.display().bright_white());
}
