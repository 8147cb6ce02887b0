//! Key paths into the metrics tree

use derive_more::{AsRef, Deref, From, Into};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Stack-allocated segment list; the deepest path the resolver builds
/// (`rt/<router>/dst/path/svc/retries/total/counter`) has eight segments
pub type Segments = SmallVec<[String; 8]>;

/// An ordered list of segments locating a node in the metrics tree
///
/// Displays as the segments joined with `/`.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, AsRef, Deref, From, Into,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MetricPath(Segments);

impl MetricPath {
    /// Build a path from anything yielding string-like segments
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Append one segment
    #[must_use]
    pub fn child(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Append every segment of `tail`
    #[must_use]
    pub fn join<I, S>(mut self, tail: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(tail.into_iter().map(Into::into));
        self
    }

    /// Segments as string slices, for tree lookups
    pub fn segments(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for MetricPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_slash() {
        let path = MetricPath::new(["rt", "incoming", "srv"]);
        assert_eq!(path.to_string(), "rt/incoming/srv");
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(MetricPath::default().to_string(), "");
    }

    #[test]
    fn test_child_and_join() {
        let path = MetricPath::new(["rt", "incoming"])
            .join(["dst", "id"])
            .child("$/inet/127.1/9990")
            .child("counter");
        assert_eq!(path.len(), 6);
        assert_eq!(path[4], "$/inet/127.1/9990");
        assert_eq!(path.to_string(), "rt/incoming/dst/id/$/inet/127.1/9990/counter");
    }

    #[test]
    fn test_segments_iter() {
        let path = MetricPath::new(["a", "b"]);
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_serde_as_list() {
        let path = MetricPath::new(["rt", "r", "srv"]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["rt","r","srv"]"#);
    }
}
