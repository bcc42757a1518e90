//! # Command Layer
//!
//! Each submodule is a pure function over the pattern core. Commands take Rust
//! values, return a [`CmdResult`] and never touch stdout, stderr or the exit code.
//! Anything the user should read goes into [`CmdMessage`]s; anything the front
//! end should render goes into the structured fields.

use crate::config::PracticeConfig;
use std::path::PathBuf;

pub mod config;
pub mod flower;
pub mod newsletter;

/// Where the configuration file lives.
#[derive(Debug, Clone)]
pub struct PracticePaths {
    pub home: PathBuf,
}

impl PracticePaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One newsletter reader as the front end shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderView {
    pub title: String,
    pub name: String,
    pub subscribed: bool,
    /// Latest news, or the configured placeholder when there is none.
    pub news: String,
}

/// A decorated flower, already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowerView {
    pub name: String,
    pub region: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub readers: Vec<ReaderView>,
    pub flower: Option<FlowerView>,
    pub config: Option<PracticeConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_readers(mut self, readers: Vec<ReaderView>) -> Self {
        self.readers = readers;
        self
    }

    pub fn with_flower(mut self, flower: FlowerView) -> Self {
        self.flower = Some(flower);
        self
    }

    pub fn with_config(mut self, config: PracticeConfig) -> Self {
        self.config = Some(config);
        self
    }
}
