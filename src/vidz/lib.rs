//! # Vidz Architecture
//!
//! Vidz is a **UI-agnostic playback simulator library**: a fixed video
//! catalog, a single playback slot, named playlists, moderation flags, and
//! text/tag search, all held in memory and driven by synchronous operations.
//! The interactive shell is just one client of the library.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, repl.rs)                      │
//! │  - Parses process args, runs the command shell, prints      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Session              │
//! │  - One method per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over &mut Session                    │
//! │  - Emits ordered messages; the text is the contract         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model & State (model.rs, library.rs, session.rs)           │
//! │  - Video/Playlist values, the read-only Library,            │
//! │    and the mutable Session                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns `CmdResult`,
//! and never touches stdout/stderr or assumes a terminal. Operation misuse
//! (playing a missing video, pausing nothing) is never an `Err`: it is a
//! message in the result, and the session is left untouched. `VidzError` is
//! reserved for genuinely fatal conditions such as an unreadable catalog.
//!
//! Even the interactive follow-up after a search is split along this line:
//! the command layer returns the matches and the prompt text, the CLI reads
//! the answer, and [`commands::search::pick`] decides what the answer means.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: Business logic for each operation group
//! - [`library`]: The fixed, read-only video catalog
//! - [`session`]: Mutable state (playback slot, flags, playlists)
//! - [`model`]: Core data types (`Video`, `Playlist`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `main.rs`/`args.rs`/`repl.rs`: the shell binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod model;
pub mod session;
