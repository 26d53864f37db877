//! Basic changepoint detection example
//!
//! Run with `RUST_LOG=robust_changepoint=debug` to see the detector's
//! diagnostics, or `=trace` for every search step.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use robust_changepoint::{
    detect_nullable, ChangePointResult, EdPeltDetector, Penalty, SimpleDetector,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== ED-PELT Changepoint Detection ===\n");
    let detector = EdPeltDetector::new();

    // Example 1: clean level shift
    println!("1. Level shift");
    let data1: Vec<f64> = (0..100).map(|i| if i < 50 { 0.0 } else { 100.0 }).collect();
    report("shift from 0 to 100 at index 50", &detector.detect_simple(&data1)?);

    // Example 2: noisy regimes
    println!("\n2. Three noisy regimes");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut data2 = Vec::with_capacity(300);
    for mean in [0.0, 10.0, 20.0] {
        let normal = Normal::new(mean, 1.0)?;
        data2.extend((0..100).map(|_| normal.sample(&mut rng)));
    }
    report("means 0, 10, 20 with unit noise", &detector.detect_simple(&data2)?);

    // Example 3: change in spread only, which mean-based methods miss
    println!("\n3. Variance change");
    let mut data3 = Vec::with_capacity(400);
    for sd in [1.0, 8.0] {
        let normal = Normal::new(0.0, sd)?;
        data3.extend((0..200).map(|_| normal.sample(&mut rng)));
    }
    report("sd 1 then sd 8, constant mean", &detector.detect_simple(&data3)?);

    // Example 4: penalty and minimum segment length
    println!("\n4. Tuning");
    let strict = EdPeltDetector::new().with_penalty(Penalty::LogN { multiplier: 10.0 });
    report("strict penalty (10 ln n)", &strict.detect_simple(&data2)?);
    let coarse = EdPeltDetector::new().with_min_distance(40);
    report("segments of at least 40", &coarse.detect_simple(&data2)?);

    // Example 5: nullable boundary
    println!("\n5. Nullable input");
    let nullable = [Some(1.0), Some(1.0), None, Some(9.0)];
    match detect_nullable(Some(&nullable[..])) {
        Ok(changepoints) => println!("  changepoints: {changepoints:?}"),
        Err(err) => println!("  rejected: {err}"),
    }
    println!("  missing array: {:?}", detect_nullable(None)?);

    Ok(())
}

fn report(label: &str, result: &ChangePointResult) {
    println!("  {label}: {:?}", result.changepoints());
    print!("{result}");
}
