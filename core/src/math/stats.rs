pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// `part` as a percentage of `whole`; zero when `whole` is zero.
    pub fn percentage(part: usize, whole: usize) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(StatsHelper::mean(&[]), 0.0);
        assert_eq!(StatsHelper::mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(StatsHelper::percentage(3, 0), 0.0);
        assert_eq!(StatsHelper::percentage(2, 8), 25.0);
    }
}
