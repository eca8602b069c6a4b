//! Isolation Tree Nodes
//!
//! Nodes form a tagged sum type dispatched once per visit during traversal.
//! Trees store nodes in a flat arena (`Vec<Node>`) and link children through
//! `u32` handles instead of owning pointers, which keeps the representation
//! compact and serializable.

/// A single element of an isolation tree
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Split node: samples with `attribute < split_value` go left, all
    /// others (including equality) go right
    Internal {
        /// Index of the attribute compared at this node
        attribute: usize,
        /// Split threshold, drawn uniformly from [min, max) of the partition
        split_value: f64,
        /// Arena handle of the left child
        left: u32,
        /// Arena handle of the right child
        right: u32,
    },
    /// Leaf node: partitioning stopped here
    External {
        /// Number of samples remaining when construction stopped. Greater
        /// than 1 only when the height limit truncated a larger partition;
        /// that size drives the c(size) path-length correction.
        size: usize,
    },
}

impl Node {
    /// Whether this node is a leaf
    pub fn is_external(&self) -> bool {
        matches!(self, Node::External { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_predicates() {
        let leaf = Node::External { size: 3 };
        assert!(leaf.is_external());

        let split = Node::Internal {
            attribute: 0,
            split_value: 0.5,
            left: 1,
            right: 2,
        };
        assert!(!split.is_external());
    }
}
