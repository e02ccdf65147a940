//! Input handler for the chat loop, built on rustyline.
//!
//! Line editing plus persistent history at `~/.coursebuddy_history`.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: "You: ".to_string(),
        })
    }

    /// Create input handler with persistent history.
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
            prompt: "You: ".to_string(),
        })
    }

    /// Read a line of input from the user.
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input (empty string for blank lines)
    /// - Ok(None) for EOF (Ctrl-D) or interrupt (Ctrl-C)
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    return Ok(Some(String::new()));
                }

                let _ = self.editor.add_history_entry(trimmed);

                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk. Called on graceful shutdown.
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}
