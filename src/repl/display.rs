//! Color-coded terminal output for the chat loop.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::chatbot::Chatbot;
use crate::providers::ProviderKind;
use crate::retrieval::StrategyKind;

/// Show welcome banner.
pub fn show_banner(version: &str, chatbot: &Chatbot) {
    let width = 64;
    let top = format!("{}", "=".repeat(width).cyan());
    let title = format!("  CourseBuddy {} - Course Catalog Chatbot", version);
    let info = format!(
        "  Courses: {} | Strategy: {} | Provider: {}",
        chatbot.catalog().len(),
        chatbot.strategy_kind(),
        chatbot.provider_kind()
    );
    let bottom = format!("{}", "=".repeat(width).cyan());

    println!("\n{}", top);
    println!("{}", title.bold().cyan());
    println!("{}", info.dimmed());
    println!("{}\n", bottom);
    println!(
        "Ask about courses, or type {} for commands, {} to quit\n",
        "help".green(),
        "exit".green()
    );
}

/// Display available commands.
pub fn show_help() {
    println!("\n{}", "Available Commands:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    let strategies = StrategyKind::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join("|");
    let providers = ProviderKind::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join("|");

    let commands = vec![
        (
            format!("set strategy <{}>", strategies),
            "Switch retrieval strategy",
        ),
        (
            format!("set provider <{}>", providers),
            "Switch answer provider",
        ),
        ("status".to_string(), "Show active strategy and provider"),
        ("help".to_string(), "Show this help message"),
        ("exit".to_string(), "Exit the chatbot"),
    ];

    for (cmd, desc) in commands {
        println!("  {:<50} {}", cmd.green(), desc);
    }

    println!("\n{}", "Any other line is asked as a question.".dimmed());
    println!();
}

/// Show active selections and catalog size.
pub fn show_status(chatbot: &Chatbot) {
    println!("\n{}", "Session Status:".bold().cyan());
    println!("  Strategy: {}", chatbot.strategy_kind().to_string().green());
    println!("  Provider: {}", chatbot.provider_kind().to_string().green());
    println!("  Catalog:  {} courses\n", chatbot.catalog().len());
}

/// Spinner shown while a provider call is in flight.
pub fn thinking_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("Thinking...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn show_answer(answer: &str) {
    println!("{} {}\n", "Bot:".bold().green(), answer);
}

pub fn show_error(message: &str) {
    println!("{} {}\n", "Error:".bold().red(), message);
}

pub fn show_goodbye() {
    println!("{}", "Goodbye!".green());
}
