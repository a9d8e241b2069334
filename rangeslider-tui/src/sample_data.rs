//! Built-in sample dataset used when no config supplies values.

/// Deterministic product prices between roughly 5 and 480.
pub fn sample_prices() -> Vec<f64> {
    // linear congruential walk; stable across runs
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    (0..250)
        .map(|_| {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let unit = (seed >> 11) as f64 / (1u64 << 53) as f64;
            // skew toward cheaper items
            let price = 5.0 + unit * unit * 475.0;
            (price * 100.0).round() / 100.0
        })
        .collect()
}
