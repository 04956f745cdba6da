//! Interactive chat session: reads user input line by line, drives the
//! respond use case, and folds replies into the session's [`Conversation`].
//!
//! This is the terminal counterpart of the original chat widget: a welcome
//! banner, preset quick questions, a clear action, and a busy indicator while
//! the single in-flight completion call runs.

use std::io::Write as _;
use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::application::RespondUseCase;
use crate::domain::{ChatError, Conversation, Message};

/// Shortcut questions offered alongside free-text input.
pub const PRESET_QUESTIONS: [&str; 5] = [
    "What is karma yoga?",
    "How to find inner peace?",
    "What is my duty in life?",
    "How to control my mind?",
    "What is true wisdom?",
];

const WELCOME: &str = "\
🕉️  GitaChat — your AI guide to the wisdom of the Bhagavad Gita

🙏 Namaste! Ask me anything about the Bhagavad Gita - karma yoga, meditation,
dharma, or life's guidance. Questions in Marathi are answered in Marathi.

Type /help for commands, /presets for quick questions, /quit to leave.";

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Presets,
    Preset(usize),
    Clear,
    Quit,
    Submit(String),
    Nothing,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Nothing;
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Submit(trimmed.to_string());
    };

    let mut parts = rest.split_whitespace();
    match parts.next() {
        Some("help") => Command::Help,
        Some("presets") => Command::Presets,
        Some("preset") => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(n) => Command::Preset(n),
            None => Command::Unknown("preset (usage: /preset <number>)".to_string()),
        },
        Some("clear") => Command::Clear,
        Some("quit") | Some("exit") => Command::Quit,
        _ => Command::Unknown(rest.to_string()),
    }
}

/// A single user's chat session.
///
/// Owns its [`Conversation`] exclusively — session state is never
/// process-global, so independent sessions cannot observe each other. One
/// completion call is in flight at a time; the prompt does not return until
/// the call resolves or times out.
pub struct ChatSession {
    respond: RespondUseCase,
    conversation: Conversation,
}

impl ChatSession {
    pub fn new(respond: RespondUseCase) -> Self {
        Self {
            respond,
            conversation: Conversation::new(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Run the interactive loop until `/quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        println!("{WELCOME}\n");
        print_presets();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("you> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match parse_command(&line) {
                Command::Quit => break,
                Command::Nothing => continue,
                Command::Help => print_help(),
                Command::Presets => print_presets(),
                Command::Preset(n) => match PRESET_QUESTIONS.get(n.wrapping_sub(1)) {
                    Some(question) => {
                        println!("you> {question}");
                        self.submit(&question.to_string()).await;
                    }
                    None => println!(
                        "No preset {n}; pick 1-{} (see /presets).",
                        PRESET_QUESTIONS.len()
                    ),
                },
                Command::Clear => {
                    self.conversation.clear();
                    println!("Conversation cleared.\n");
                }
                Command::Unknown(cmd) => println!("Unknown command /{cmd} — try /help."),
                Command::Submit(text) => self.submit(&text).await,
            }
        }

        println!("🙏 Om Shanti.");
        Ok(())
    }

    /// Submit one user message: record it, call the endpoint, and append the
    /// assistant reply on success. On failure the conversation is left with
    /// the user's message only, so resubmitting retries the turn.
    pub async fn submit(&mut self, text: &str) {
        // History excludes the message being submitted; the use case appends
        // it last itself.
        let history = self.conversation.messages().to_vec();
        self.conversation.append(Message::user(text));

        let spinner = contemplation_spinner();
        let result = self.respond.execute(text, &history).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                println!("gita> {reply}\n");
                self.conversation.append(Message::assistant(reply));
            }
            Err(ChatError::MissingCredential) => {
                println!("⚠️  {}", ChatError::MissingCredential);
                println!("    Get a free key at https://console.groq.com/\n");
            }
            Err(e) => {
                warn!("Turn failed: {e}");
                println!("Error: {e}");
                println!("Your message is kept — resubmit to retry.\n");
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /presets      list the quick questions");
    println!("  /preset <n>   ask quick question n");
    println!("  /clear        start a fresh conversation");
    println!("  /quit         leave the chat");
    println!("Anything else is sent to the assistant as-is.\n");
}

fn print_presets() {
    println!("💡 Quick questions:");
    for (i, question) in PRESET_QUESTIONS.iter().enumerate() {
        println!("  {}. {question}", i + 1);
    }
    println!();
}

fn contemplation_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("🕉️  Contemplating the wisdom of the Gita...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
