//! # Pattern Practice
//!
//! Two classic object-oriented patterns, written as plain Rust types, with a
//! form-like command line client on top.
//!
//! - **Observer**: a [`newsletter::Newsletter`] pushes breaking news to every
//!   subscribed [`newsletter::Follower`].
//! - **Decorator**: a [`flower::FlowerBase`] wrapped in
//!   [`flower::TagDecorator`]s, each appending a care clause to the description.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints results, owns the exit code     │
//! │  - Plays the role of the form: suppresses blank news        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses steps, loads config, dispatches to commands       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Newsletter session, flower form, config                  │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (newsletter.rs, flower.rs)                            │
//! │  - The two patterns; no I/O, no errors                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous. Followers are shared with
//! `Rc` and keep their own state behind a `RefCell`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command logic and result types
//! - [`newsletter`]: Observer pattern
//! - [`flower`]: Decorator pattern and the threshold parsing policy
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod flower;
pub mod newsletter;
