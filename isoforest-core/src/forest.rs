//! Isolation Forest Training and Scoring
//!
//! A forest is an ensemble of independently built isolation trees. Training
//! draws a fresh subsample from the full dataset for every tree; scoring
//! averages a query's path length over all trees and normalizes it into an
//! anomaly score in (0, 1].
//!
//! Each tree gets its own generator seeded from a master [`SplitMix64`], so
//! results are reproducible for a fixed seed whether trees are built serially
//! or, with the `parallel` feature, across rayon workers. Once trained, a
//! forest holds no mutable state: scoring is read-only and safe to call
//! concurrently.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::errors::{ForestError, ForestResult};
use crate::rng::{RandomSource, SplitMix64};
use crate::sampling::draw_indices;
use crate::scoring::{anomaly_score, average_path_length};
use crate::tree::ITree;

/// Configuration for forest training
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForestConfig {
    /// Number of trees to build
    pub num_trees: usize,
    /// Samples drawn (without replacement) for each tree; must be at least 2
    /// and at most the dataset size
    pub subsample_size: usize,
    /// Seed for the master generator
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            num_trees: 100,
            subsample_size: 256,
            seed: 42,
        }
    }
}

/// A trained isolation forest
///
/// Built once via [`IsolationForest::train`]; the training data is not
/// retained, only the partition structure derived from it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsolationForest {
    trees: Vec<ITree>,
    subsample_size: usize,
    num_attributes: usize,
    /// Cached c(subsample_size), the score normalizer
    normalizer: f64,
}

impl IsolationForest {
    /// Train a forest on `data`
    ///
    /// Every tree sees the same universe: subsamples are drawn independently
    /// from the full dataset, not from a shrinking pool. The dataset itself
    /// is only read and can be dropped afterwards.
    ///
    /// Fails with [`ForestError::EmptyDataset`] for an empty dataset,
    /// [`ForestError::DimensionMismatch`] when rows disagree on width,
    /// [`ForestError::InvalidTreeCount`] for zero trees,
    /// [`ForestError::InvalidSubsampleSize`] for a subsample size below 2 and
    /// [`ForestError::SubsampleTooLarge`] when it exceeds the dataset size.
    /// Failures are atomic; no partial forest is returned.
    #[cfg(not(feature = "parallel"))]
    pub fn train<S: AsRef<[f64]>>(data: &[S], config: &ForestConfig) -> ForestResult<Self> {
        let num_attributes = Self::validate(data, config)?;

        let mut master = SplitMix64::new(config.seed);
        let trees: Vec<ITree> = (0..config.num_trees)
            .map(|_| build_tree(data, config.subsample_size, master.next_u64()))
            .collect();

        Ok(Self::assemble(trees, config, num_attributes))
    }

    /// Train a forest on `data`, building trees across rayon workers
    ///
    /// Semantics and error contract match the serial build; per-tree seeds
    /// come from the master generator before the parallel region, so a fixed
    /// seed reproduces the same forest regardless of worker scheduling.
    #[cfg(feature = "parallel")]
    pub fn train<S: AsRef<[f64]> + Sync>(data: &[S], config: &ForestConfig) -> ForestResult<Self> {
        let num_attributes = Self::validate(data, config)?;

        let mut master = SplitMix64::new(config.seed);
        let seeds: Vec<u64> = (0..config.num_trees).map(|_| master.next_u64()).collect();
        let trees: Vec<ITree> = seeds
            .into_par_iter()
            .map(|seed| build_tree(data, config.subsample_size, seed))
            .collect();

        Ok(Self::assemble(trees, config, num_attributes))
    }

    fn assemble(trees: Vec<ITree>, config: &ForestConfig, num_attributes: usize) -> Self {
        #[cfg(feature = "log")]
        log::debug!(
            "isolation forest trained: trees={} subsample={} attributes={} nodes={}",
            trees.len(),
            config.subsample_size,
            num_attributes,
            trees.iter().map(|t| t.node_count()).sum::<usize>(),
        );

        Self {
            trees,
            subsample_size: config.subsample_size,
            num_attributes,
            normalizer: average_path_length(config.subsample_size),
        }
    }

    /// Check dataset and configuration, returning the attribute width
    fn validate<S: AsRef<[f64]>>(data: &[S], config: &ForestConfig) -> ForestResult<usize> {
        if data.is_empty() {
            return Err(ForestError::EmptyDataset);
        }

        let width = data[0].as_ref().len();
        for row in data {
            let actual = row.as_ref().len();
            if actual != width {
                return Err(ForestError::DimensionMismatch { expected: width, actual });
            }
        }

        if config.num_trees == 0 {
            return Err(ForestError::InvalidTreeCount);
        }
        if config.subsample_size <= 1 {
            return Err(ForestError::InvalidSubsampleSize { requested: config.subsample_size });
        }
        if config.subsample_size > data.len() {
            return Err(ForestError::SubsampleTooLarge {
                requested: config.subsample_size,
                available: data.len(),
            });
        }

        Ok(width)
    }

    /// Anomaly score of `sample` in (0, 1]
    ///
    /// Near 1.0 means rapidly isolated (strong anomaly), near 0.5 means the
    /// path length matches the expectation for normal points, and values well
    /// below 0.5 carry no anomaly signal. Deterministic: repeated calls on
    /// the same forest return identical values.
    pub fn score(&self, sample: &[f64]) -> ForestResult<f64> {
        if sample.len() != self.num_attributes {
            return Err(ForestError::DimensionMismatch {
                expected: self.num_attributes,
                actual: sample.len(),
            });
        }

        let total: f64 = self.trees.iter().map(|tree| tree.path_length(sample)).sum();
        let avg_path = total / self.trees.len() as f64;
        Ok(anomaly_score(avg_path, self.normalizer))
    }

    /// Score a batch of samples
    #[cfg(not(feature = "parallel"))]
    pub fn scores<S: AsRef<[f64]>>(&self, samples: &[S]) -> ForestResult<Vec<f64>> {
        samples.iter().map(|s| self.score(s.as_ref())).collect()
    }

    /// Score a batch of samples across rayon workers
    ///
    /// Trees are immutable after training, so concurrent read-only traversal
    /// needs no synchronization.
    #[cfg(feature = "parallel")]
    pub fn scores<S: AsRef<[f64]> + Sync>(&self, samples: &[S]) -> ForestResult<Vec<f64>> {
        samples.par_iter().map(|s| self.score(s.as_ref())).collect()
    }

    /// The trained trees
    pub fn trees(&self) -> &[ITree] {
        &self.trees
    }

    /// Number of trees in the forest
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Subsample size used for every tree and for score normalization
    pub fn subsample_size(&self) -> usize {
        self.subsample_size
    }

    /// Attribute width the forest was trained on
    pub fn num_attributes(&self) -> usize {
        self.num_attributes
    }

    /// Summary counters for diagnostics
    pub fn stats(&self) -> ForestStats {
        ForestStats {
            num_trees: self.trees.len(),
            total_nodes: self.trees.iter().map(|t| t.node_count()).sum(),
            subsample_size: self.subsample_size,
            num_attributes: self.num_attributes,
        }
    }
}

/// Draw a subsample and build one tree from it
fn build_tree<S: AsRef<[f64]>>(data: &[S], subsample_size: usize, seed: u64) -> ITree {
    let mut rng = SplitMix64::new(seed);
    let indices = draw_indices(&mut rng, data.len(), subsample_size);
    ITree::build(data, &indices, &mut rng)
}

/// Forest summary counters
#[derive(Debug, Clone, Copy)]
pub struct ForestStats {
    /// Number of trees
    pub num_trees: usize,
    /// Total nodes across all trees
    pub total_nodes: usize,
    /// Subsample size used during training
    pub subsample_size: usize,
    /// Attribute width of the training data
    pub num_attributes: usize,
}
