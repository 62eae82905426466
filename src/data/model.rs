// ---------------------------------------------------------------------------
// Measurements – the two series read from a benchmark file
// ---------------------------------------------------------------------------

/// Buffer sizes and cycle counts, paired by line index.
///
/// Both series only grow through [`Measurements::push`], so they always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    size: Vec<f64>,
    cycles: Vec<f64>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one data line's values.
    pub fn push(&mut self, size: f64, cycles: f64) {
        self.size.push(size);
        self.cycles.push(cycles);
    }

    /// Buffer sizes in file order.
    pub fn size(&self) -> &[f64] {
        &self.size
    }

    /// Cycle counts in file order.
    pub fn cycles(&self) -> &[f64] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// `(min, max)` of the size series, `None` when there is no data.
    pub fn size_range(&self) -> Option<(f64, f64)> {
        min_max(&self.size)
    }

    /// `(min, max)` of the cycles series, `None` when there is no data.
    pub fn cycles_range(&self) -> Option<(f64, f64)> {
        min_max(&self.cycles)
    }

    /// Evenly spaced x values spanning the recorded size range, one per
    /// measurement. This is the axis the cycles are plotted against.
    pub fn synthetic_axis(&self) -> Option<Vec<f64>> {
        let (min, max) = self.size_range()?;
        Some(linspace(min, max, self.len()))
    }

    /// Whether the recorded sizes coincide with `axis` (within a relative
    /// tolerance of the range).
    pub fn sizes_match(&self, axis: &[f64]) -> bool {
        if axis.len() != self.size.len() {
            return false;
        }
        let span = self
            .size_range()
            .map(|(min, max)| (max - min).abs())
            .unwrap_or(0.0);
        let tolerance = 1e-9 * span.max(1.0);
        self.size
            .iter()
            .zip(axis)
            .all(|(&recorded, &grid)| (recorded - grid).abs() <= tolerance)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

// ---------------------------------------------------------------------------
// Evenly spaced values
// ---------------------------------------------------------------------------

/// `num` evenly spaced values from `start` to `stop`, both inclusive.
///
/// `num == 1` yields `[start]`; the first value is always exactly `start`
/// and the last exactly `stop`, even when `stop - start` overflows.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    if num < 2 {
        return (num == 1).then_some(start).into_iter().collect();
    }

    let span = stop - start;
    let last = (num - 1) as f64;
    (0..num)
        .map(|i| {
            let t = i as f64 / last;
            if i == num - 1 {
                stop
            } else if span.is_finite() {
                start + span * t
            } else {
                start * (1.0 - t) + stop * t
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn measurements(pairs: &[(f64, f64)]) -> Measurements {
        let mut m = Measurements::new();
        for &(size, cycles) in pairs {
            m.push(size, cycles);
        }
        m
    }

    #[test]
    fn push_keeps_series_paired() {
        let m = measurements(&[(0.0, 100.0), (10.0, 150.0), (20.0, 300.0)]);
        assert_eq!(m.len(), 3);
        assert_eq!(m.size(), &[0.0, 10.0, 20.0]);
        assert_eq!(m.cycles(), &[100.0, 150.0, 300.0]);
    }

    #[test]
    fn ranges_are_none_when_empty() {
        let m = Measurements::new();
        assert!(m.is_empty());
        assert_eq!(m.size_range(), None);
        assert_eq!(m.cycles_range(), None);
        assert_eq!(m.synthetic_axis(), None);
    }

    #[test]
    fn size_range_ignores_file_order() {
        let m = measurements(&[(64.0, 4.0), (1.0, 3.0), (1024.0, 12.0), (8.0, 3.5)]);
        assert_eq!(m.size_range(), Some((1.0, 1024.0)));
        assert_eq!(m.cycles_range(), Some((3.0, 12.0)));
    }

    #[test]
    fn synthetic_axis_matches_example() {
        let m = measurements(&[(0.0, 100.0), (10.0, 150.0), (20.0, 300.0)]);
        assert_eq!(m.synthetic_axis(), Some(vec![0.0, 10.0, 20.0]));
    }

    #[test]
    fn synthetic_axis_spans_range_and_is_non_decreasing() {
        let m = measurements(&[(1.0, 4.0), (2.0, 4.0), (4.0, 4.1), (8.0, 4.2), (1025.0, 12.0)]);
        let axis = m.synthetic_axis().unwrap();

        assert_eq!(axis.len(), m.len());
        assert_eq!(axis[0], 1.0);
        assert_eq!(*axis.last().unwrap(), 1025.0);
        assert!(axis.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sizes_match_detects_uneven_sizes() {
        let even = measurements(&[(0.0, 1.0), (10.0, 1.0), (20.0, 1.0)]);
        assert!(even.sizes_match(&even.synthetic_axis().unwrap()));

        let doubling = measurements(&[(1.0, 1.0), (2.0, 1.0), (4.0, 1.0), (8.0, 1.0)]);
        assert!(!doubling.sizes_match(&doubling.synthetic_axis().unwrap()));
    }

    #[rstest]
    #[case(0.0, 1.0, 0, vec![])]
    #[case(5.0, 9.0, 1, vec![5.0])]
    #[case(0.0, 20.0, 3, vec![0.0, 10.0, 20.0])]
    #[case(1.0, 2.0, 5, vec![1.0, 1.25, 1.5, 1.75, 2.0])]
    #[case(3.0, 3.0, 3, vec![3.0, 3.0, 3.0])]
    fn linspace_cases(
        #[case] start: f64,
        #[case] stop: f64,
        #[case] num: usize,
        #[case] expected: Vec<f64>,
    ) {
        assert_eq!(linspace(start, stop, num), expected);
    }

    #[rstest]
    #[case::overflowing_span(-1e308, 1e308)]
    #[case::near_max(-f64::MAX, f64::MAX)]
    #[case::huge_equal(1e300, 1e300)]
    #[case::denormal_span(0.0, 1e-300)]
    fn linspace_stays_finite_at_range_edges(#[case] start: f64, #[case] stop: f64) {
        let values = linspace(start, stop, 5);
        assert_eq!(values[0], start);
        assert_eq!(values[4], stop);
        assert!(values.iter().all(|v| v.is_finite()));
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn synthetic_axis_survives_overflowing_span() {
        let m = measurements(&[(-1e308, 1.0), (1e308, 2.0)]);
        assert_eq!(m.synthetic_axis(), Some(vec![-1e308, 1e308]));
    }

    #[test]
    fn linspace_ends_exactly_on_stop() {
        let values = linspace(0.1, 0.7, 7);
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], 0.1);
        assert_eq!(values[6], 0.7);
    }
}
