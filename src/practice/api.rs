//! # API Facade
//!
//! [`PracticeApi`] is the single entry point for front ends. It loads the
//! configuration, dispatches to the command layer and hands back a
//! [`CmdResult`]. It holds no business logic and does no presentation.
//!
//! The newsletter and flower commands are stateless across calls: each call
//! builds a fresh subject or decorator chain, runs it, and reports the result.

use crate::commands;
use crate::config::PracticeConfig;
use crate::error::Result;

pub struct PracticeApi {
    paths: commands::PracticePaths,
}

impl PracticeApi {
    pub fn new(paths: commands::PracticePaths) -> Self {
        Self { paths }
    }

    /// Runs a newsletter session over `steps`, parsing each one first.
    pub fn newsletter<I: AsRef<str>>(&self, steps: &[I]) -> Result<commands::CmdResult> {
        let parsed = steps
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<NewsletterStep>>>()?;
        let config = PracticeConfig::load(&self.paths.home)?;
        commands::newsletter::run(&config, &parsed)
    }

    pub fn flower(&self, form: &FlowerForm) -> Result<commands::CmdResult> {
        commands::flower::run(form)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::PracticePaths {
        &self.paths
    }
}

pub use commands::config::ConfigAction;
pub use commands::flower::FlowerForm;
pub use commands::newsletter::NewsletterStep;
pub use commands::{CmdMessage, CmdResult, FlowerView, MessageLevel, PracticePaths, ReaderView};
