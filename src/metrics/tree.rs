//! Immutable metrics tree snapshot
//!
//! The collector delivers one of these per tick. It is a plain nested map:
//! `rt/<router>/<category...>/<entity>/<metric...>/{value,delta}`. Any
//! segment may be missing; lookups return `None` (or nothing to iterate)
//! rather than erroring.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors building a tree from serialized input
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TreeError {
    #[error("malformed metrics tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("metrics tree root must be an object")]
    NotAnObject,
}

/// A node of the metrics tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// A numeric reading
    Number(f64),
    /// Named children, iterated in key order
    Branch(BTreeMap<String, TreeNode>),
    /// Anything else the collector sent (strings, arrays, null); reads as absent
    Opaque(serde_json::Value),
}

impl TreeNode {
    /// Follow `path` from this node
    pub fn get<'a, I>(&self, path: I) -> Option<&TreeNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter().try_fold(self, |node, segment| match node {
            TreeNode::Branch(children) => children.get(segment),
            _ => None,
        })
    }

    /// Finite number at `path`, if any
    pub fn number_at<'a, I>(&self, path: I) -> Option<f64>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.get(path)? {
            TreeNode::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Children of this node when it is a branch
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> + '_ {
        let children = match self {
            TreeNode::Branch(children) => Some(children),
            _ => None,
        };
        children
            .into_iter()
            .flat_map(|map| map.iter().map(|(name, node)| (name.as_str(), node)))
    }
}

/// One snapshot of the collector's metrics tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTree {
    root: BTreeMap<String, TreeNode>,
}

impl MetricsTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tree from a JSON object
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        match serde_json::from_str::<TreeNode>(json)? {
            TreeNode::Branch(root) => Ok(Self { root }),
            _ => Err(TreeError::NotAnObject),
        }
    }

    /// Set a numeric leaf, creating intermediate branches as needed
    ///
    /// A non-branch node in the way is replaced by a branch. An empty
    /// path is ignored.
    pub fn insert<'a, I>(&mut self, path: I, value: f64)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let segments: Vec<&str> = path.into_iter().collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut children = &mut self.root;
        for segment in parents {
            let node = children
                .entry((*segment).to_string())
                .or_insert_with(|| TreeNode::Branch(BTreeMap::new()));
            if !matches!(node, TreeNode::Branch(_)) {
                *node = TreeNode::Branch(BTreeMap::new());
            }
            let TreeNode::Branch(map) = node else {
                return;
            };
            children = map;
        }
        children.insert((*last).to_string(), TreeNode::Number(value));
    }

    /// Builder form of [`insert`](Self::insert)
    #[must_use]
    pub fn with<'a, I>(mut self, path: I, value: f64) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.insert(path, value);
        self
    }

    /// Node at `path`
    pub fn node_at<'a, I>(&self, path: I) -> Option<&TreeNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut segments = path.into_iter();
        let first = self.root.get(segments.next()?)?;
        first.get(segments)
    }

    /// Finite number at `path`
    pub fn number_at<'a, I>(&self, path: I) -> Option<f64>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.node_at(path)? {
            TreeNode::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Named children of the branch at `path`
    ///
    /// Yields nothing when the path is missing or does not lead to a branch.
    pub fn entries<'a, I>(&self, path: I) -> impl Iterator<Item = (&str, &TreeNode)> + '_
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.node_at(path)
            .into_iter()
            .flat_map(|node| node.children())
    }

    /// True when the tree holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
