// File: crates/minichart-core/src/grid.rs
// Summary: Tick values, sparse-label stride and tick label formatting.

use num_format::{Locale, ToFormattedString};

use crate::scale::ValueRange;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `intervals + 1` evenly spaced values from `range.min` to `range.max`, no rounding.
pub fn ticks(range: ValueRange, intervals: usize) -> Vec<f64> {
    linspace(range.min, range.max, intervals.max(1) + 1)
}

/// Draw every k-th category label so at most `budget` are shown: `ceil(count / budget)`.
pub fn label_stride(count: usize, budget: usize) -> usize {
    count.div_ceil(budget.max(1)).max(1)
}

/// Integer with thousands grouping, e.g. `1234567.4` → `"1,234,567"`.
pub fn format_tick(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_evenly_spaced_and_inclusive() {
        let t = ticks(ValueRange { min: 0.0, max: 100.0 }, 4);
        assert_eq!(t, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        let t = ticks(ValueRange { min: -1.0, max: 1.0 }, 0);
        assert_eq!(t, vec![-1.0, 1.0]);
    }

    #[test]
    fn stride_thins_labels_past_budget() {
        assert_eq!(label_stride(0, 6), 1);
        assert_eq!(label_stride(6, 6), 1);
        assert_eq!(label_stride(7, 6), 2);
        assert_eq!(label_stride(24, 6), 4);
        assert_eq!(label_stride(25, 6), 5);
    }

    #[test]
    fn formats_grouped_integers() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(999.6), "1,000");
        assert_eq!(format_tick(1234567.4), "1,234,567");
        assert_eq!(format_tick(-2500.0), "-2,500");
        assert_eq!(format_tick(-0.2), "0");
        assert_eq!(format_tick(-1_234_567.0), "-1,234,567");
    }
}
