//! Share destinations.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{error, info};

use crate::post::SharePost;

/// Receives the share post of a finished game.
pub trait ShareSink {
    fn share(&mut self, post: &SharePost) -> Result<()>;
}

impl<S: ShareSink + ?Sized> ShareSink for Box<S> {
    fn share(&mut self, post: &SharePost) -> Result<()> {
        (**self).share(post)
    }
}

/// Prints the message text to stdout.
///
/// Only use it while the terminal is in normal (cooked, main screen) mode.
#[derive(Debug, Default)]
pub struct StdoutShare;

impl ShareSink for StdoutShare {
    fn share(&mut self, post: &SharePost) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", post.text).context("print share message")?;
        out.flush()?;
        Ok(())
    }
}

/// Appends each post as one JSON line to a file.
#[derive(Debug)]
pub struct JsonlShare {
    path: PathBuf,
    file: File,
}

impl JsonlShare {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open share file {}", path.display()))?;
        Ok(Self { path, file })
    }
}

impl ShareSink for JsonlShare {
    fn share(&mut self, post: &SharePost) -> Result<()> {
        let line = post.to_json_line().context("serialize share post")?;
        writeln!(self.file, "{}", line)
            .with_context(|| format!("append to {}", self.path.display()))?;
        self.file.flush()?;
        info!(
            "shared episode {} (score {}) to {}",
            post.episode_id,
            post.score,
            self.path.display()
        );
        Ok(())
    }
}

/// Deliver posts queued during a session, whether or not the session failed.
///
/// `open_sink` is only called when there is something to deliver. The session
/// error takes precedence over a delivery error.
pub fn publish_pending<F>(session: Result<()>, posts: &[SharePost], open_sink: F) -> Result<()>
where
    F: FnOnce() -> Result<Box<dyn ShareSink>>,
{
    if let Err(err) = &session {
        error!("session failed with {} queued share post(s): {:#}", posts.len(), err);
    }
    if posts.is_empty() {
        return session;
    }

    let delivered =
        open_sink().and_then(|mut sink| posts.iter().try_for_each(|post| sink.share(post)));
    if let Err(err) = &delivered {
        error!("share delivery failed: {:#}", err);
    }
    session.and(delivered)
}
