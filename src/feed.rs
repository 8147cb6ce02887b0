//! Newline-delimited JSON snapshot feed
//!
//! Each non-blank line is one complete metrics tree. The binary replays a
//! feed into a [`TreeCollector`](crate::collector::TreeCollector) to drive
//! the summary outside of a live collector.

use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::collector::TreeCollector;
use crate::constants::feed::STDIN;
use crate::metrics::{MetricsTree, TreeError};

/// Errors reading a snapshot feed
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error("failed to read snapshot feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid snapshot on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: TreeError,
    },
}

impl FeedError {
    /// True for errors that only spoil one line
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Boxed reader for feeds opened from a path or stdin
pub type DynFeedReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Reads one [`MetricsTree`] per line
pub struct SnapshotFeed<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: AsyncBufRead + Unpin> SnapshotFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// Next snapshot, `None` at end of input
    ///
    /// Blank lines are skipped. A line that does not hold a JSON object is
    /// returned as [`FeedError::Parse`]; the feed stays usable after it.
    pub async fn next_snapshot(&mut self) -> Option<Result<MetricsTree, FeedError>> {
        loop {
            let text = match self.lines.next_line().await {
                Ok(Some(text)) => text,
                Ok(None) => return None,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }

            return Some(MetricsTree::from_json(&text).map_err(|source| FeedError::Parse {
                line: self.line,
                source,
            }));
        }
    }

    /// Number of lines consumed so far
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line
    }
}

impl SnapshotFeed<DynFeedReader> {
    /// Open a feed from a file, or from stdin when `source` is `-`
    pub async fn open(source: &Path) -> Result<Self, FeedError> {
        let reader: DynFeedReader = if source == Path::new(STDIN) {
            Box::new(BufReader::new(tokio::io::stdin()))
        } else {
            Box::new(BufReader::new(tokio::fs::File::open(source).await?))
        };
        Ok(Self::new(reader))
    }
}

/// Publish one snapshot per `period` until the feed runs dry
///
/// `after_tick` runs after every published snapshot. Unparseable lines are
/// logged and skipped; read errors end the replay.
pub async fn replay<R, F>(
    mut feed: SnapshotFeed<R>,
    collector: TreeCollector,
    period: Duration,
    mut after_tick: F,
) -> Result<usize, FeedError>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(),
{
    let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut published = 0;

    loop {
        interval.tick().await;
        match feed.next_snapshot().await {
            None => {
                info!(
                    published,
                    lines = feed.lines_read(),
                    "Snapshot feed finished"
                );
                return Ok(published);
            }
            Some(Ok(tree)) => {
                collector.publish(tree);
                published += 1;
                after_tick();
            }
            Some(Err(e)) if e.is_recoverable() => warn!("Skipping snapshot: {e}"),
            Some(Err(e)) => return Err(e),
        }
    }
}
