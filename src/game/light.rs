//! # Light Module
//!
//! The light-budget state machine: continuous decay proportional to distance
//! moved, discrete replenishment from orb collection, and the non-linear
//! response curve that turns the budget into visual intensity and reach.

use crate::config::SimConfig;
use crate::game::lerp;
use serde::{Deserialize, Serialize};

/// Derived visual response of the light budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightOutput {
    /// Point-light intensity for the rendering collaborator
    pub intensity: f32,
    /// Light reach in world units
    pub distance: f32,
}

/// The depletable light budget.
///
/// Holds `duration ∈ [0, max]`, clamped on every mutation. The derived
/// response is a pure function of the current duration and can be queried at
/// any time.
///
/// # Examples
///
/// ```
/// use gloam::config::SimConfig;
/// use gloam::LightState;
///
/// let mut light = LightState::new(&SimConfig::default());
/// assert!(!light.is_depleted());
///
/// light.decay(1_000_000.0);
/// assert!(light.is_depleted());
/// assert_eq!(light.duration(), 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightState {
    duration: f32,
    max_duration: f32,
    decay_rate: f32,
    min_intensity: f32,
    max_intensity: f32,
    min_distance: f32,
    max_distance: f32,
}

impl LightState {
    /// Creates a full light budget from the simulation config.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            duration: config.max_light_duration,
            max_duration: config.max_light_duration,
            decay_rate: config.decay_rate,
            min_intensity: config.min_intensity,
            max_intensity: config.max_intensity,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
        }
    }

    /// Creates a light state at a specific duration, clamped into range.
    pub fn with_duration(config: &SimConfig, duration: f32) -> Self {
        let mut state = Self::new(config);
        state.duration = duration.clamp(0.0, state.max_duration);
        state
    }

    /// Current budget value.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Budget as a fraction of the maximum.
    pub fn ratio(&self) -> f32 {
        self.duration / self.max_duration
    }

    /// Whether the budget has hit its floor.
    pub fn is_depleted(&self) -> bool {
        self.duration <= 0.0
    }

    /// Whether the player's light source is currently contributing
    /// visibility. At or below the intensity floor, consumers must
    /// policy-hide orbs regardless of distance.
    pub fn is_contributing(&self) -> bool {
        self.output().intensity > self.min_intensity
    }

    /// Drains the budget for a tick's committed movement.
    ///
    /// `distance_moved` is the Euclidean magnitude of the committed
    /// displacement; a blocked axis contributes zero by construction.
    pub fn decay(&mut self, distance_moved: f32) {
        self.duration = (self.duration - distance_moved * self.decay_rate)
            .clamp(0.0, self.max_duration);
    }

    /// Applies an orb's reward, saturating at the maximum.
    pub fn collect(&mut self, light_value: f32) {
        self.duration = (self.duration + light_value).clamp(0.0, self.max_duration);
    }

    /// Derived intensity and reach.
    ///
    /// The ratio is eased with an exponent of 1.5 so the light visibly fails
    /// fast near empty instead of dimming linearly.
    pub fn output(&self) -> LightOutput {
        let eased = self.ratio().powf(1.5);
        LightOutput {
            intensity: lerp(self.min_intensity, self.max_intensity, eased),
            distance: lerp(self.min_distance, self.max_distance, eased),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimConfig {
        SimConfig::default()
    }

    #[test]
    fn test_starts_full() {
        let light = LightState::new(&config());
        assert_eq!(light.duration(), config().max_light_duration);
        assert_eq!(light.ratio(), 1.0);
        assert!(light.is_contributing());
    }

    #[test]
    fn test_decay_clamps_at_zero() {
        // duration 10, decay rate 0.5, 30 units moved: 10 - 15 clamps to 0.
        let cfg = SimConfig {
            decay_rate: 0.5,
            ..config()
        };
        let mut light = LightState::with_duration(&cfg, 10.0);
        light.decay(30.0);
        assert_eq!(light.duration(), 0.0);
        assert!(light.is_depleted());
    }

    #[test]
    fn test_collect_saturates_at_max() {
        // 60 + 50 against max 100 saturates at 100.
        let mut light = LightState::with_duration(&config(), 60.0);
        light.collect(50.0);
        assert_eq!(light.duration(), 100.0);
    }

    #[test]
    fn test_duration_stays_in_range_over_mixed_operations() {
        let mut light = LightState::new(&config());
        let max = config().max_light_duration;
        for i in 0..200 {
            if i % 3 == 0 {
                light.collect(37.0);
            } else {
                light.decay(19.0);
            }
            assert!(light.duration() >= 0.0);
            assert!(light.duration() <= max);
        }
    }

    #[test]
    fn test_output_endpoints() {
        let cfg = config();
        let full = LightState::new(&cfg).output();
        assert_eq!(full.intensity, cfg.max_intensity);
        assert_eq!(full.distance, cfg.max_distance);

        let empty = LightState::with_duration(&cfg, 0.0).output();
        assert_eq!(empty.intensity, cfg.min_intensity);
        assert_eq!(empty.distance, cfg.min_distance);
    }

    #[test]
    fn test_response_curve_eases_in() {
        // At half budget the eased ratio is 0.5^1.5 ≈ 0.3536, below linear.
        let cfg = config();
        let half = LightState::with_duration(&cfg, cfg.max_light_duration / 2.0);
        let linear_midpoint = lerp(cfg.min_intensity, cfg.max_intensity, 0.5);
        assert!(half.output().intensity < linear_midpoint);
    }

    #[test]
    fn test_depleted_light_does_not_contribute() {
        let light = LightState::with_duration(&config(), 0.0);
        assert!(!light.is_contributing());

        let barely = LightState::with_duration(&config(), 1.0);
        assert!(barely.is_contributing());
    }
}
