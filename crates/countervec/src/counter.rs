use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// A per-node tally. Immutable once built: replacing the whole value is the
/// only way to change one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    node: String,
    count: u32,
}

impl Counter {
    pub fn new(node: &str, count: u32) -> Self {
        Self {
            node: node.to_string(),
            count,
        }
    }

    #[inline]
    pub fn node(&self) -> &str {
        &self.node
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.node, self.count)
    }
}
