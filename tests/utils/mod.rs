use rand::Rng;
use type_tour::{Result, TourConfig, tour};

/// Run the tour and return the lines it printed
pub fn tour_lines(config: &TourConfig) -> Result<Vec<String>> {
    let mut out = Vec::new();
    tour::run(config, &mut out)?;
    Ok(String::from_utf8_lossy(&out)
        .lines()
        .map(str::to_string)
        .collect())
}

/// Random operand pairs for the arithmetic checks
#[must_use]
pub fn random_pairs(count: usize) -> Vec<(f64, f64)> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            (
                rng.random_range(-1.0e6..1.0e6),
                rng.random_range(-1.0e6..1.0e6),
            )
        })
        .collect()
}
