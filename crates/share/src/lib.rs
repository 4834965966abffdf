//! Share module - publishes the final score of a finished game
//!
//! The game only produces a message; where it goes is up to a [`ShareSink`].
//!
//! # Sinks
//!
//! - [`StdoutShare`]: prints the message text, one line per share
//! - [`JsonlShare`]: appends one JSON object per share to a file
//!
//! # Record Format
//!
//! ```text
//! {"text":"I just finished 2048 with a score of 2412!","score":2412,"won":false,"max_tile":256,"moves":187,"episode_id":0}
//! ```
//!
//! # Example
//!
//! ```
//! use tui_2048_share::{SharePost, ShareSink};
//!
//! struct Collect(Vec<String>);
//!
//! impl ShareSink for Collect {
//!     fn share(&mut self, post: &SharePost) -> anyhow::Result<()> {
//!         self.0.push(post.text.clone());
//!         Ok(())
//!     }
//! }
//!
//! let mut sink = Collect(Vec::new());
//! sink.share(&SharePost {
//!     text: tui_2048_core::share_message(8),
//!     score: 8,
//!     won: false,
//!     max_tile: 4,
//!     moves: 3,
//!     episode_id: 0,
//! }).unwrap();
//! let game = tui_2048_core::GameState::new(1);
//! // Nothing to share while the game is still running.
//! assert!(SharePost::from_game(&game).is_none());
//! assert_eq!(sink.0, vec!["I just finished 2048 with a score of 8!"]);
//! ```

pub mod post;
pub mod sink;

pub use tui_2048_core as core;

pub use post::SharePost;
pub use sink::{publish_pending, JsonlShare, ShareSink, StdoutShare};
