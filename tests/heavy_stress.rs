#![cfg(feature = "heavy")]
use std::collections::BTreeSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use subset_sums::{FastIntervalSummer, OptimizedDynamicProgrammingSummer, SubsetSummer};

fn random_set(rng: &mut StdRng, value_limit: u64, size: usize) -> BTreeSet<u64> {
    (0..size).map(|_| rng.gen_range(1..value_limit)).collect()
}

#[test]
fn heavy_stress_dense_inputs() {
    let mut rng = StdRng::seed_from_u64(123);
    let u = 60_000;
    let s = random_set(&mut rng, u, 5_000);
    let fast = FastIntervalSummer::default().subset_sums(&s, u).unwrap();
    let dp = OptimizedDynamicProgrammingSummer.subset_sums(&s, u).unwrap();
    assert_eq!(fast, dp);
}

#[test]
fn heavy_stress_sparse_high_values() {
    let mut rng = StdRng::seed_from_u64(456);
    let u = 200_000;
    let s: BTreeSet<u64> = random_set(&mut rng, 2_000, 300)
        .into_iter()
        .map(|x| x + 40_000)
        .collect();
    let fast = FastIntervalSummer::default().subset_sums(&s, u).unwrap();
    let dp = OptimizedDynamicProgrammingSummer.subset_sums(&s, u).unwrap();
    assert_eq!(fast, dp);
    assert!(fast.iter().all(|&v| v < u));
}
