//! Reverse-label trie mapping hostname patterns to values.
//!
//! Patterns are split on `.`, lowercased and stored right-to-left, so
//! `mx1.example.com` becomes the path `com → example → mx1`. A label equal to
//! `*` matches exactly one label of the looked-up hostname, mirroring DNS
//! wildcards: `*.example.com` matches `mx1.example.com` but not
//! `a.b.example.com`.

use std::collections::HashMap;

use thiserror::Error;

const WILDCARD_LABEL: &str = "*";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WildcardError {
    #[error("pattern has no labels")]
    EmptyPattern,
    #[error("no pattern matches '{hostname}'")]
    NotFound { hostname: String },
}

#[derive(Debug, Clone)]
struct Node<V> {
    children: HashMap<String, Node<V>>,
    wildcard: Option<Box<Node<V>>>,
    value: Option<V>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            wildcard: None,
            value: None,
        }
    }
}

/// Hostname → value map with single-label `*` wildcards.
#[derive(Debug, Clone)]
pub struct WildcardDomainMap<V> {
    root: Node<V>,
    len: usize,
}

impl<V> Default for WildcardDomainMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WildcardDomainMap<V> {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
        }
    }

    /// Number of distinct patterns stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `value` under `pattern`, returning the value it replaces.
    ///
    /// A trailing dot and empty labels are ignored; a pattern without any
    /// label is rejected.
    pub fn insert(&mut self, pattern: &str, value: V) -> Result<Option<V>, WildcardError> {
        let labels = reversed_labels(pattern);
        if labels.is_empty() {
            return Err(WildcardError::EmptyPattern);
        }

        let mut node = &mut self.root;
        for label in labels {
            node = if label == WILDCARD_LABEL {
                &mut **node.wildcard.get_or_insert_with(Box::default)
            } else {
                node.children.entry(label).or_default()
            };
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Looks up a concrete hostname.
    ///
    /// At every label the literal child is taken when it either continues the
    /// path or, on the last label, carries a value; otherwise the wildcard
    /// child is used. There is no backtracking.
    pub fn get(&self, hostname: &str) -> Option<&V> {
        let labels = reversed_labels(hostname);
        let last = labels.len().checked_sub(1)?;

        let mut node = &self.root;
        for (idx, label) in labels.iter().enumerate() {
            let literal = node
                .children
                .get(label)
                .filter(|child| idx != last || child.value.is_some());
            node = match (literal, node.wildcard.as_deref()) {
                (Some(child), _) => child,
                (None, Some(wildcard)) => wildcard,
                (None, None) => return None,
            };
        }
        node.value.as_ref()
    }

    pub fn get_or<'a>(&'a self, hostname: &str, default: &'a V) -> &'a V {
        self.get(hostname).unwrap_or(default)
    }

    /// Strict variant of [`get`](Self::get) for callers that treat a miss as
    /// an error.
    pub fn try_get(&self, hostname: &str) -> Result<&V, WildcardError> {
        self.get(hostname).ok_or_else(|| WildcardError::NotFound {
            hostname: hostname.to_string(),
        })
    }

    pub fn contains(&self, hostname: &str) -> bool {
        self.get(hostname).is_some()
    }
}

fn reversed_labels(name: &str) -> Vec<String> {
    name.trim()
        .split('.')
        .filter(|label| !label.is_empty())
        .rev()
        .map(str::to_ascii_lowercase)
        .collect()
}
