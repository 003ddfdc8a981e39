use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use terminal_size::{terminal_size, Height, Width};

use crate::agent::{Message, Role};
use crate::i18n::Language;

fn rule() -> String {
    let (width, _) = terminal_size().unwrap_or((Width(80), Height(24)));
    "─".repeat(width.0 as usize)
}

pub fn print_header(model: &str, lang: Language) {
    let line = rule();
    println!("{}", line.black().bold());

    let title = lang.strings().title.yellow().bold();
    let version = format!("v{}", env!("CARGO_PKG_VERSION")).black().bold();
    println!("  {} {}", title, version);

    println!("  {}", model.cyan());
    print_language(lang);

    println!("{}", line.black().bold());
}

/// Current-language indicator plus the hint for switching
pub fn print_language(lang: Language) {
    let strings = lang.strings();
    println!(
        "  🌐 {}: {}  {}",
        strings.current.bold(),
        lang.display_name(),
        format!("(/lang: {})", strings.switch_label).black().bold()
    );
}

pub fn print_message(message: &Message) {
    match message.role {
        Role::User => println!("\n{}: {}", "You".blue().bold(), message.content),
        Role::Assistant => println!("\n{}: {}\n", "Bot".green().bold(), message.content),
        _ => {}
    }
}

pub fn print_transcript(messages: &[Message]) {
    for message in messages {
        print_message(message);
    }
}

/// Render tool log entries as info notices under a localized heading
pub fn print_tool_log(entries: &[String], lang: Language) {
    if entries.is_empty() {
        return;
    }
    println!("  {}", lang.strings().tool_calls.magenta().bold());
    for entry in entries {
        println!("  {} {}", "ℹ".cyan(), entry);
    }
    println!();
}

pub fn print_step(msg: &str) {
    println!("  {} {}", "•".green(), msg);
}

/// Failed-turn reply; the text carries its own marker
pub fn print_failure(msg: &str) {
    println!("\n{}\n", msg.yellow());
}

pub fn print_error(msg: &str) {
    eprintln!("  {} {}", "❌".red().bold(), msg.red());
}

/// Spinner shown while waiting on the model
pub fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
