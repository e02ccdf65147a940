//! Interactive chat loop.
//!
//! Reads lines, dispatches runtime commands, and routes everything
//! else through the chatbot controller. One question is fully answered
//! before the next line is read.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;

use crate::chatbot::Chatbot;
use crate::repl::commands::Command;
use crate::repl::input::InputHandler;

pub struct ReplSession {
    input: InputHandler,
    chatbot: Chatbot,
}

impl ReplSession {
    pub fn new(chatbot: Chatbot) -> Result<Self> {
        let history = dirs::home_dir().map(|home| home.join(".coursebuddy_history"));

        let input = match history {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(ReplSession { input, chatbot })
    }

    /// Run until `exit`, EOF, or interrupt.
    pub async fn run(&mut self) -> Result<()> {
        display::show_banner(env!("CARGO_PKG_VERSION"), &self.chatbot);

        loop {
            let line = match self.input.read_line()? {
                Some(line) => line,
                None => break,
            };

            if line.is_empty() {
                continue;
            }

            if !self.handle_line(&line).await {
                break;
            }
        }

        display::show_goodbye();
        self.input.save_history()?;
        Ok(())
    }

    /// Handle one line. Returns false when the session should end.
    async fn handle_line(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Command::Exit => return false,
            Command::Help => display::show_help(),
            Command::Status => display::show_status(&self.chatbot),
            Command::SetStrategy(name) => match self.chatbot.set_strategy(&name) {
                Ok(kind) => println!("Strategy changed to: {}", kind),
                Err(e) => display::show_error(&e.to_string()),
            },
            Command::SetProvider(name) => match self.chatbot.set_provider(&name) {
                Ok(kind) => println!("Provider changed to: {}", kind),
                Err(e) => display::show_error(&e.to_string()),
            },
            Command::Question(question) => self.answer(&question).await,
        }
        true
    }

    /// Answer one question. Provider failures are reported and the
    /// session continues.
    async fn answer(&self, question: &str) {
        let spinner = display::thinking_spinner();
        let result = self.chatbot.ask(question).await;
        spinner.finish_and_clear();

        match result {
            Ok(answer) => display::show_answer(&answer),
            Err(e) => display::show_error(&e.to_string()),
        }
    }
}
