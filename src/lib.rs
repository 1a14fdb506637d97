//! # chatloop - Terminal Chat Client
//!
//! `chatloop` talks to a conversational backend over two JSON endpoints,
//! `/chat/` and `/feedback/`, keeping one session identifier per user so the
//! backend can tie messages and ratings to the same conversation.
//!
//! ## Features
//!
//! - **Persistent session**: the identifier is created once and reused
//! - **Feedback on demand**: when the backend flags a reply as uncertain,
//!   the user can rate it with `/good` or `/bad`
//! - **Graceful failures**: a failed request shows one error line and the
//!   session stays usable
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat with the default backend (http://localhost:8005)
//! chatloop
//!
//! # Use another backend
//! chatloop --endpoint https://bot.example.com
//!
//! # Check the backend is up
//! chatloop ping
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/chatloop/config.toml`:
//!
//! ```toml
//! [chatloop]
//! endpoint = "http://localhost:8005"
//! ```

/// Wire contract with the chat backend.
pub mod api;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// The chat session controller.
pub mod controller;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities for configuration and state.
pub mod paths;

/// Session identifier lifecycle.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
