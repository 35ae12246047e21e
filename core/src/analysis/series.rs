use crate::math::StatsHelper;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One point of the frequency/threat timeline shown for a selected signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSample {
    pub time: &'static str,
    pub frequency_ghz: f64,
    pub amplitude: f64,
    pub threat_score: f64,
}

const fn sample(
    time: &'static str,
    frequency_ghz: f64,
    amplitude: f64,
    threat_score: f64,
) -> SignalSample {
    SignalSample {
        time,
        frequency_ghz,
        amplitude,
        threat_score,
    }
}

const TIMELINE: [SignalSample; 6] = [
    sample("00:00", 5.6, 85.0, 0.8),
    sample("00:05", 5.62, 87.0, 0.85),
    sample("00:10", 5.58, 82.0, 0.75),
    sample("00:15", 5.64, 90.0, 0.92),
    sample("00:20", 5.61, 88.0, 0.88),
    sample("00:25", 5.59, 86.0, 0.82),
];

pub fn signal_timeline() -> &'static [SignalSample] {
    &TIMELINE
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumBin {
    pub frequency: f64,
    pub power: f64,
    pub threshold: f64,
}

/// Parameters for the synthetic spectrum waterfall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumConfig {
    pub bins: usize,
    pub bin_width: f64,
    pub noise_ceiling: f64,
    pub ripple: f64,
    pub threshold: f64,
    pub seed: u64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            bins: 100,
            bin_width: 0.1,
            noise_ceiling: 100.0,
            ripple: 20.0,
            threshold: 30.0,
            seed: 0,
        }
    }
}

impl SpectrumConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Uniform noise plus a slow sine ripple, reproducible for a given seed.
    pub fn generate(&self) -> Vec<SpectrumBin> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..self.bins)
            .map(|index| {
                let frequency = index as f64 * self.bin_width;
                let noise = if self.noise_ceiling > 0.0 {
                    rng.gen_range(0.0..self.noise_ceiling)
                } else {
                    0.0
                };
                SpectrumBin {
                    frequency,
                    power: noise + frequency.sin() * self.ripple,
                    threshold: self.threshold,
                }
            })
            .collect()
    }
}

/// Count of bins whose power rises above their threshold.
pub fn bins_above_threshold(spectrum: &[SpectrumBin]) -> usize {
    spectrum.iter().filter(|bin| bin.power > bin.threshold).count()
}

pub fn mean_power(spectrum: &[SpectrumBin]) -> f64 {
    let powers: Vec<f64> = spectrum.iter().map(|bin| bin.power).collect();
    StatsHelper::mean(&powers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_has_six_points_in_order() {
        let timeline = signal_timeline();
        assert_eq!(timeline.len(), 6);
        assert_eq!(timeline[0].time, "00:00");
        assert_eq!(timeline[3].threat_score, 0.92);
    }

    #[test]
    fn spectrum_is_reproducible_per_seed() {
        let config = SpectrumConfig::with_seed(7);
        let first = config.generate();
        let second = config.generate();
        assert_eq!(first, second);
        assert_eq!(first.len(), 100);
        assert!((first[10].frequency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn spectrum_power_stays_within_noise_and_ripple() {
        let spectrum = SpectrumConfig::with_seed(3).generate();
        for bin in &spectrum {
            assert!(bin.power >= -20.0 && bin.power < 120.0);
            assert_eq!(bin.threshold, 30.0);
        }
        assert!(bins_above_threshold(&spectrum) > 0);
        assert!(mean_power(&spectrum) > 0.0);
    }
}
