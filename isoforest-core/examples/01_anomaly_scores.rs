//! Isolation Forest Anomaly Scoring Example
//!
//! Trains a forest on a heavy-tailed synthetic distribution and scores two
//! probes: a tiny value far below the bulk and an absurdly large one far
//! above it. Both should score well above the ~0.5 level of normal points.

use isoforest_core::{ForestConfig, IsolationForest, RandomSource, SplitMix64};

fn main() {
    let mut rng = SplitMix64::new(0xF0_4E57);

    // Fourth powers of values around 100-200: a skewed, heavy-tailed bulk
    let mut data = Vec::with_capacity(5000);
    let mut sum = 0.0;
    for _ in 0..5000 {
        let base = 100.0 + rng.next_index(100) as f64 + rng.next_f64();
        let value = base * base * base * base;
        sum += value;
        data.push(vec![value]);
    }

    println!("=== Isolation Forest Anomaly Scoring ===\n");
    println!("Training samples: {}", data.len());
    println!("Mean value: {:.3e}\n", sum / data.len() as f64);

    let config = ForestConfig {
        num_trees: 1000,
        subsample_size: 256,
        seed: 42,
    };
    let forest = IsolationForest::train(&data, &config).expect("training failed");

    let stats = forest.stats();
    println!(
        "Trained: {} trees, {} nodes, subsample {}\n",
        stats.num_trees, stats.total_nodes, stats.subsample_size
    );

    let low = 0.1;
    let high = 1e27;
    let typical = 150.0_f64.powi(4);

    for (label, probe) in [("typical", typical), ("tiny", low), ("huge", high)] {
        let score = forest.score(&[probe]).expect("scoring failed");
        println!("{label:>8} {probe:>12.3e} | score {score:.4}");
    }
}
