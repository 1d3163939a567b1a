//! Example: bounded subset sums with each solver.
//!
//! Run with:
//! `cargo run --example subset_sums`

use std::collections::BTreeSet;

use subset_sums::blocks::SubsetSums;
use subset_sums::engine::MergeEngine;
use subset_sums::{SolverKind, SubsetSummer};

fn main() {
    let s: BTreeSet<u64> = [3, 5, 9, 14, 22, 31].into_iter().collect();
    let u = 40;

    for kind in SolverKind::ALL {
        match kind.run(&s, u) {
            Ok(sums) => println!("{kind:>12}: {} sums {:?}", sums.len(), sums),
            Err(err) => println!("{kind:>12}: error: {err}"),
        }
    }

    // Values sitting in a narrow band far above zero take the compressed path.
    let engine = MergeEngine::new(10_000);
    let band = [2_000u64, 2_003, 2_007].map(SubsetSums::singleton).to_vec();
    println!(
        "merge path for a=2000, l=8, n=3: {:?}",
        engine.choose_path(2_000, 8, 3)
    );
    match engine.combine(band) {
        Ok(merged) => println!("band sums: {:?}", merged.sums()),
        Err(err) => println!("band merge failed: {err}"),
    }

    let fast = subset_sums::FastIntervalSummerBuilder::new()
        .with_max_convolution_len(1 << 16)
        .build();
    match fast.subset_sums(&s, u) {
        Ok(sums) => println!("builder-configured fast solver agrees: {}", sums.len()),
        Err(err) => println!("builder-configured fast solver failed: {err}"),
    }
}
