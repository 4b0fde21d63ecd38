// File: crates/chart-core/src/grid.rs
// Summary: Evenly spaced sample positions.

/// `steps` values evenly spaced over `[start, end]`, both ends included.
/// The last value is exactly `end`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
            out[steps - 1] = end;
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn includes_both_ends() {
        assert_eq!(linspace(0.0, 300.0, 4), vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }
}
