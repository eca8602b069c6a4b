//! Isolation Tree Construction and Path Length
//!
//! An isolation tree recursively partitions a subsample with randomly chosen
//! attribute/split-point pairs until a partition is down to one sample or the
//! height limit `ceil(log2(v))` is reached. Anomalous points separate from
//! the bulk after few random cuts, so their root-to-leaf paths are short.
//!
//! Trees are built once and never mutated; queries walk the node arena
//! without touching tree state, so a built tree is safe to share across
//! concurrent scoring calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::node::Node;
use crate::rng::RandomSource;
use crate::scoring::average_path_length;

/// Height limit for a subsample of `v` samples: `ceil(log2(v))`
pub fn height_limit(subsample_size: usize) -> usize {
    if subsample_size <= 1 {
        return 0;
    }
    libm::ceil(libm::log2(subsample_size as f64)) as usize
}

/// A single randomized partition tree
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ITree {
    /// Node arena; children are appended before their parent, so the root
    /// carries the highest handle
    nodes: Vec<Node>,
    /// Arena handle of the root node
    root: u32,
    /// Maximum construction depth for this tree
    height_limit: usize,
}

impl ITree {
    /// Build a tree over the samples of `data` selected by `indices`
    ///
    /// `indices` is the subsample drawn for this tree; the samples themselves
    /// are only read, never retained. Attribute lookups assume every row in
    /// `data` has the same width, which the forest validates before building.
    pub fn build<S, R>(data: &[S], indices: &[usize], rng: &mut R) -> Self
    where
        S: AsRef<[f64]>,
        R: RandomSource + ?Sized,
    {
        let limit = height_limit(indices.len());
        let mut nodes = Vec::new();
        let root = grow(data, indices, 0, limit, rng, &mut nodes);
        Self { nodes, root, height_limit: limit }
    }

    /// Estimated path length of `sample` under this tree
    ///
    /// Descends from the root mirroring the construction rule exactly:
    /// `attribute < split_value` goes left, everything else right. At a leaf
    /// of recorded size `s` the result is the edge count plus `c(s)`, the
    /// correction for the subtree that truncation left unexplored.
    ///
    /// The sample must have at least as many attributes as the tree was
    /// built on; a shorter sample is a caller error and panics on the
    /// out-of-range attribute index rather than silently truncating.
    pub fn path_length(&self, sample: &[f64]) -> f64 {
        let mut current = self.root as usize;
        let mut edges = 0usize;

        loop {
            match self.nodes[current] {
                Node::External { size } => {
                    return if size <= 1 {
                        edges as f64
                    } else {
                        edges as f64 + average_path_length(size)
                    };
                }
                Node::Internal { attribute, split_value, left, right } => {
                    current = if sample[attribute] < split_value {
                        left as usize
                    } else {
                        right as usize
                    };
                    edges += 1;
                }
            }
        }
    }

    /// Maximum construction depth configured for this tree
    pub fn height_limit(&self) -> usize {
        self.height_limit
    }

    /// Number of nodes in the arena
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Recursively grow the subtree for one partition, returning its root handle
fn grow<S, R>(
    data: &[S],
    indices: &[usize],
    depth: usize,
    limit: usize,
    rng: &mut R,
    nodes: &mut Vec<Node>,
) -> u32
where
    S: AsRef<[f64]>,
    R: RandomSource + ?Sized,
{
    if depth >= limit || indices.len() <= 1 {
        nodes.push(Node::External { size: indices.len() });
        return (nodes.len() - 1) as u32;
    }

    let (attribute, split_value) = match select_split(data, indices, rng) {
        Some(split) => split,
        // Partition is constant in every attribute; growing further would
        // only produce a single-child chain, so stop here
        None => {
            nodes.push(Node::External { size: indices.len() });
            return (nodes.len() - 1) as u32;
        }
    };

    let mut left_indices = Vec::new();
    let mut right_indices = Vec::new();
    for &i in indices {
        if data[i].as_ref()[attribute] < split_value {
            left_indices.push(i);
        } else {
            right_indices.push(i);
        }
    }

    let left = grow(data, &left_indices, depth + 1, limit, rng, nodes);
    let right = grow(data, &right_indices, depth + 1, limit, rng, nodes);
    nodes.push(Node::Internal { attribute, split_value, left, right });
    (nodes.len() - 1) as u32
}

/// Pick a random attribute and a uniform split point within its range
///
/// When the randomly chosen attribute is constant over the partition, the
/// remaining attributes are scanned for a splittable one. `None` means the
/// partition is constant everywhere.
fn select_split<S, R>(data: &[S], indices: &[usize], rng: &mut R) -> Option<(usize, f64)>
where
    S: AsRef<[f64]>,
    R: RandomSource + ?Sized,
{
    let width = data[indices[0]].as_ref().len();
    if width == 0 {
        return None;
    }

    let preferred = rng.next_index(width);
    for offset in 0..width {
        let attribute = (preferred + offset) % width;
        let (min, max) = attribute_range(data, indices, attribute);
        if min < max {
            return Some((attribute, rng.next_range(min, max)));
        }
    }

    None
}

/// Min and max of one attribute over a partition
fn attribute_range<S: AsRef<[f64]>>(data: &[S], indices: &[usize], attribute: usize) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &i in indices {
        let value = data[i].as_ref()[attribute];
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    (min, max)
}
