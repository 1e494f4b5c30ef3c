//! Fake telemetry for the live status dashboard.
//!
//! Nothing here talks to a device. Each tick nudges or rerolls every reading
//! from an injected random source and clamps it into a plausible range.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::Rng;

pub const BATTERY_RANGE: RangeInclusive<f64> = 50.0..=100.0;
pub const POWER_RANGE: RangeInclusive<f64> = 18.0..=26.0;
pub const HISTORY_LEN: usize = 5;

const BATTERY_STEP: f64 = 5.0;
const POWER_STEP: f64 = 2.0;
const CONNECTION_DROP_CHANCE: f64 = 0.1;
const SAMPLE_SPACING_SECS: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct PowerSample {
    pub seconds: u32,
    pub watts: u32,
}

impl PowerSample {
    pub fn label(&self) -> String {
        format!("{}s", self.seconds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryHealth {
    Healthy,
    Moderate,
    Low,
}

impl BatteryHealth {
    pub fn from_level(level: f64) -> Self {
        if level > 70.0 {
            BatteryHealth::Healthy
        } else if level > 50.0 {
            BatteryHealth::Moderate
        } else {
            BatteryHealth::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BatteryHealth::Healthy => "Healthy",
            BatteryHealth::Moderate => "Moderate",
            BatteryHealth::Low => "Low",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusReadings {
    pub battery: f64,
    pub power: f64,
    pub connected: bool,
    pub hip_angle: f64,
    pub knee_angle: f64,
    pub eeg_signal: u32,
    pub load_support: f64,
    pub history: VecDeque<PowerSample>,
    samples_taken: u32,
}

impl Default for StatusReadings {
    fn default() -> Self {
        let history: VecDeque<PowerSample> = [18, 22, 20, 23, 21]
            .iter()
            .zip(1..)
            .map(|(&watts, n)| PowerSample { seconds: n * SAMPLE_SPACING_SECS, watts })
            .collect();
        Self {
            battery: 83.0,
            power: 22.7,
            connected: false,
            hip_angle: 5.0,
            knee_angle: 40.9,
            eeg_signal: 67,
            load_support: 35.9,
            samples_taken: history.len() as u32,
            history,
        }
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn drift<R: Rng + ?Sized>(rng: &mut R, prev: f64, step: f64, range: &RangeInclusive<f64>) -> f64 {
    let next = prev + (rng.gen::<f64>() - 0.5) * step;
    next.clamp(*range.start(), *range.end())
}

impl StatusReadings {
    pub fn health(&self) -> BatteryHealth {
        BatteryHealth::from_level(self.battery)
    }

    /// Rolls one round of readings.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.battery = drift(rng, self.battery, BATTERY_STEP, &BATTERY_RANGE);
        self.power = drift(rng, self.power, POWER_STEP, &POWER_RANGE);
        self.connected = rng.gen::<f64>() > CONNECTION_DROP_CHANCE;
        self.hip_angle = one_decimal(rng.gen::<f64>() * 10.0);
        self.knee_angle = one_decimal(rng.gen::<f64>() * 80.0);
        self.eeg_signal = (rng.gen::<f64>() * 40.0).floor() as u32 + 60;
        self.load_support = one_decimal(rng.gen::<f64>() * 10.0 + 30.0);

        self.samples_taken += 1;
        let watts = (rng.gen::<f64>() * 8.0).floor() as u32 + 18;
        self.history.push_back(PowerSample {
            seconds: self.samples_taken * SAMPLE_SPACING_SECS,
            watts,
        });
        while self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initial_readings() {
        let readings = StatusReadings::default();
        assert_eq!(readings.battery, 83.0);
        assert_eq!(readings.power, 22.7);
        assert!(!readings.connected);
        assert_eq!(readings.eeg_signal, 67);
        assert_eq!(readings.history.len(), HISTORY_LEN);
        assert_eq!(readings.history.front().map(PowerSample::label), Some("10s".to_string()));
        assert_eq!(readings.history.back().map(PowerSample::label), Some("50s".to_string()));
    }

    #[test]
    fn test_readings_stay_in_range_over_many_ticks() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut readings = StatusReadings::default();

        for _ in 0..2_000 {
            readings.tick(&mut rng);
            assert!(BATTERY_RANGE.contains(&readings.battery), "battery {}", readings.battery);
            assert!(POWER_RANGE.contains(&readings.power), "power {}", readings.power);
            assert!((0.0..=10.0).contains(&readings.hip_angle));
            assert!((0.0..=80.0).contains(&readings.knee_angle));
            assert!((60..=99).contains(&readings.eeg_signal));
            assert!((30.0..=40.0).contains(&readings.load_support));
            assert!(readings.history.len() <= HISTORY_LEN);
            assert!(readings.history.iter().all(|s| (18..=25).contains(&s.watts)));
        }
    }

    #[test]
    fn test_history_slides_forward() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut readings = StatusReadings::default();

        readings.tick(&mut rng);
        readings.tick(&mut rng);

        let labels: Vec<String> = readings.history.iter().map(PowerSample::label).collect();
        assert_eq!(labels, vec!["30s", "40s", "50s", "60s", "70s"]);
    }

    #[test]
    fn test_new_samples_continue_the_label_sequence() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut readings = StatusReadings::default();

        let appended: Vec<String> = (0..3)
            .map(|_| {
                readings.tick(&mut rng);
                readings.history.back().map(PowerSample::label).unwrap_or_default()
            })
            .collect();
        assert_eq!(appended, vec!["60s", "70s", "80s"]);
    }

    #[test]
    fn test_battery_pinned_at_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut readings = StatusReadings { battery: 100.0, power: 18.0, ..Default::default() };
        readings.tick(&mut rng);
        assert!(readings.battery <= 100.0);
        assert!(readings.power >= 18.0);
    }

    #[test]
    fn test_battery_health_labels() {
        assert_eq!(BatteryHealth::from_level(83.0).label(), "Healthy");
        assert_eq!(BatteryHealth::from_level(70.0).label(), "Moderate");
        assert_eq!(BatteryHealth::from_level(50.5).label(), "Moderate");
        assert_eq!(BatteryHealth::from_level(50.0).label(), "Low");
    }
}
