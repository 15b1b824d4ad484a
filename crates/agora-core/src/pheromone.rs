//! Digital pheromone dynamics.
//!
//! Each opinion carries a scalar signal that decays exponentially with
//! time — `I(t) = I(0) · e^(-λt)` — and is reinforced when the opinion
//! receives support. Like a pheromone trail, recently supported opinions
//! stay "warm" while ignored ones evaporate toward zero.
//!
//! All operations are pure: [`PheromoneState::reinforce`] returns a
//! replacement value and the caller persists it in place of the old one.
//! Callers serialize writes to a given opinion's state; successive
//! reinforcements must observe a non-decreasing `now`.

use crate::error::{AgoraError, Result};
use crate::types::{PheromoneField, PheromoneState, Timestamp};

impl PheromoneState {
    /// Create a validated pheromone state.
    ///
    /// `intensity` must be ≥ 0, `quality` in 0-1, and `decay_rate`
    /// strictly positive. NaN is rejected for all three.
    pub fn new(
        intensity: f64,
        quality: f64,
        decay_rate: f64,
        last_updated: Timestamp,
    ) -> Result<Self> {
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(AgoraError::invalid_parameter(
                "intensity",
                intensity,
                "must be a finite non-negative number",
            ));
        }
        if !quality.is_finite() || !(0.0..=1.0).contains(&quality) {
            return Err(AgoraError::out_of_range("quality", 0.0, 1.0, quality));
        }
        if !decay_rate.is_finite() || decay_rate <= 0.0 {
            return Err(AgoraError::invalid_parameter(
                "decay_rate",
                decay_rate,
                "must be a finite positive number",
            ));
        }
        Ok(Self {
            intensity,
            quality,
            decay_rate,
            last_updated,
        })
    }

    /// Intensity at `now`, after exponential time decay.
    ///
    /// Decay is a pure multiplier, so the result never goes negative.
    /// A `now` at or before `last_updated` yields the stored intensity
    /// unchanged (elapsed time clamps at zero).
    pub fn current_intensity(&self, now: Timestamp) -> f64 {
        let elapsed_hours = self.last_updated.hours_until(now);
        self.intensity * (-self.decay_rate * elapsed_hours).exp()
    }

    /// Reinforce on a support event, returning the replacement state.
    ///
    /// The stored intensity is first decayed to `now`, then boosted by
    /// `quality · weight`. `quality` and `decay_rate` carry over
    /// unchanged. Reinforcements at an identical timestamp compose
    /// additively, so same-instant support events merge by sum.
    pub fn reinforce(&self, weight: f64, now: Timestamp) -> Result<PheromoneState> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AgoraError::invalid_parameter(
                "weight",
                weight,
                "must be a finite non-negative number",
            ));
        }
        Ok(PheromoneState {
            intensity: self.current_intensity(now) + self.quality * weight,
            last_updated: now,
            ..*self
        })
    }
}

/// Aggregate a set of pheromone states at one instant.
///
/// Returns all-zero totals for an empty field.
pub fn aggregate_field(states: &[PheromoneState], now: Timestamp) -> PheromoneField {
    if states.is_empty() {
        return PheromoneField {
            total: 0.0,
            avg: 0.0,
            max: 0.0,
        };
    }

    let mut total = 0.0;
    let mut max = f64::NEG_INFINITY;
    for state in states {
        let intensity = state.current_intensity(now);
        total += intensity;
        max = max.max(intensity);
    }

    PheromoneField {
        total,
        avg: total / states.len() as f64,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(intensity: f64, quality: f64, decay_rate: f64, at_millis: i64) -> PheromoneState {
        PheromoneState::new(intensity, quality, decay_rate, Timestamp::from_millis(at_millis))
            .unwrap()
    }

    #[test]
    fn rejects_invalid_parameters() {
        let now = Timestamp::from_millis(0);
        assert!(PheromoneState::new(-1.0, 0.5, 0.01, now).is_err());
        assert!(PheromoneState::new(1.0, 1.5, 0.01, now).is_err());
        assert!(PheromoneState::new(1.0, 0.5, 0.0, now).is_err());
        assert!(PheromoneState::new(1.0, 0.5, -0.01, now).is_err());
        assert!(PheromoneState::new(f64::NAN, 0.5, 0.01, now).is_err());
    }

    #[test]
    fn no_elapsed_time_means_no_decay() {
        let s = state(3.0, 0.5, 0.01, 42_000);
        assert_eq!(s.current_intensity(s.last_updated), 3.0);
    }

    #[test]
    fn decays_to_e_inverse_after_hundred_hours() {
        // λ = 0.01/h over 100h: I = e^-1 ≈ 0.3679
        let s = state(1.0, 0.5, 0.01, 0);
        let later = s.last_updated.plus_hours(100.0);
        assert!((s.current_intensity(later) - (-1.0f64).exp()).abs() < 0.001);
    }

    #[test]
    fn stale_clock_never_inflates_intensity() {
        let s = state(2.0, 0.5, 0.01, 1_000_000);
        let earlier = Timestamp::from_millis(0);
        assert_eq!(s.current_intensity(earlier), 2.0);
    }

    #[test]
    fn reinforce_adds_quality_weighted_boost() {
        let s = state(1.0, 0.8, 0.01, 0);
        let now = s.last_updated.plus_hours(100.0);
        let reinforced = s.reinforce(2.0, now).unwrap();

        let decayed = s.current_intensity(now);
        assert!((reinforced.intensity - (decayed + 0.8 * 2.0)).abs() < 1e-9);
        assert_eq!(reinforced.last_updated, now);
        assert_eq!(reinforced.quality, s.quality);
        assert_eq!(reinforced.decay_rate, s.decay_rate);
    }

    #[test]
    fn reinforce_never_drops_below_decayed_value() {
        let s = state(1.5, 0.3, 0.05, 0);
        for weight in [0.0, 0.1, 1.0, 10.0] {
            let now = s.last_updated.plus_hours(7.0);
            let reinforced = s.reinforce(weight, now).unwrap();
            assert!(reinforced.intensity >= s.current_intensity(now));
        }
    }

    #[test]
    fn reinforce_rejects_negative_weight() {
        let s = state(1.0, 0.5, 0.01, 0);
        assert!(s.reinforce(-0.1, s.last_updated).is_err());
    }

    #[test]
    fn same_instant_reinforcements_merge_by_sum() {
        let s = state(1.0, 0.5, 0.01, 0);
        let now = s.last_updated;
        let once = s.reinforce(2.0, now).unwrap().reinforce(3.0, now).unwrap();
        let swapped = s.reinforce(3.0, now).unwrap().reinforce(2.0, now).unwrap();
        assert!((once.intensity - swapped.intensity).abs() < 1e-12);
        assert!((once.intensity - (1.0 + 0.5 * 5.0)).abs() < 1e-12);
    }

    #[test]
    fn aggregate_of_empty_field_is_zero() {
        let field = aggregate_field(&[], Timestamp::from_millis(0));
        assert_eq!(field.total, 0.0);
        assert_eq!(field.avg, 0.0);
        assert_eq!(field.max, 0.0);
    }

    #[test]
    fn aggregate_computes_total_avg_max() {
        let now = Timestamp::from_millis(0);
        let states = vec![
            state(1.0, 0.5, 0.01, 0),
            state(2.0, 0.5, 0.01, 0),
            state(6.0, 0.5, 0.01, 0),
        ];
        let field = aggregate_field(&states, now);
        assert!((field.total - 9.0).abs() < 1e-9);
        assert!((field.avg - 3.0).abs() < 1e-9);
        assert!((field.max - 6.0).abs() < 1e-9);
    }
}
