//! Terminal 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,share,term,types}`
//! and holds the binary's [`config`].

pub mod config;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_share as share;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
