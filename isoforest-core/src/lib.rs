//! Isolation Forest Anomaly Detection
//!
//! ## Overview
//!
//! Isolation Forest is an unsupervised anomaly detector built on a simple
//! observation: anomalous points are easier to separate from the rest of a
//! dataset than normal ones. Each tree recursively partitions a random
//! subsample with randomly chosen attribute/split-point pairs; anomalies end
//! up isolated after few cuts, so their root-to-leaf paths are short.
//!
//! ```text
//! Normal points: need many partitions to isolate
//! Anomalies:     isolated after a few partitions
//!
//! score = 2^(-avg_path_length / c(subsample_size))
//! ```
//!
//! Scores live in (0, 1]: near 1.0 is a strong anomaly, near 0.5 is a normal
//! point. The crate implements the estimator of Liu, Ting & Zhou (ICDM 2008),
//! including the c(n) correction that keeps truncated trees unbiased.
//!
//! ## Properties
//!
//! 1. **No training data retained**: trees store only partition structure
//! 2. **Fast inference**: O(trees * log(subsample)) per query
//! 3. **Unsupervised**: no labels required
//! 4. **Deterministic**: a fixed seed reproduces the forest exactly
//! 5. **`no_std` capable**: core depends on `alloc` and `libm` only
//!
//! ## Usage
//!
//! ```rust
//! use isoforest_core::{ForestConfig, IsolationForest};
//!
//! // 1-D cluster with one far-away point
//! let mut data: Vec<Vec<f64>> = (0..128).map(|i| vec![(i % 16) as f64]).collect();
//! data.push(vec![500.0]);
//!
//! let config = ForestConfig { num_trees: 50, subsample_size: 32, seed: 42 };
//! let forest = IsolationForest::train(&data, &config).unwrap();
//!
//! let outlier = forest.score(&[500.0]).unwrap();
//! let inlier = forest.score(&[8.0]).unwrap();
//! assert!(outlier > inlier);
//! ```
//!
//! ## Concurrency
//!
//! Tree construction has no cross-tree dependencies and trees are immutable
//! once built. The `parallel` feature builds trees and scores batches across
//! rayon workers; per-tree generators are seeded up front from one master
//! generator, so parallel and serial training produce the same forest for
//! the same seed.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod errors;
pub mod forest;
pub mod node;
pub mod rng;
pub mod sampling;
pub mod scoring;
pub mod tree;

// Public API
pub use errors::{ForestError, ForestResult};
pub use forest::{ForestConfig, ForestStats, IsolationForest};
pub use node::Node;
pub use rng::{RandomSource, SplitMix64};
pub use scoring::{anomaly_score, average_path_length, EULER_MASCHERONI};
pub use tree::ITree;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
