// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use overlook_camera::LimitMode;
use overlook_event_state::kinetics::DEFAULT_MOMENTUM_THRESHOLD;

/// Tuning knobs for a [`Behavior`](crate::Behavior).
///
/// All durations are in milliseconds and all velocities in screen pixels per
/// millisecond. Start from [`BehaviorConfig::default`] and adjust with the
/// `with_*` builders.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorConfig {
    /// Largest scale wheel and key zoom may reach.
    pub max_zoom: f64,
    /// Smallest scale wheel and key zoom may reach, before limits apply.
    pub min_zoom: f64,
    /// How the limits rectangle constrains panning.
    pub limit_mode: LimitMode,
    /// Whether drags feed kinetics and may end in a fling.
    pub kinetics_enabled: bool,
    /// Release speed (px per move sample) a fling must exceed.
    pub momentum_threshold: f64,
    /// Duration of the rubber-band correction after an overshooting drag.
    pub band_correction_ms: f64,
    /// Duration of a fling.
    pub fling_ms: f64,
    /// World width framed by a double-click zoom.
    pub double_click_target_width: f64,
    /// Travel speed of navigation animations.
    pub navigation_velocity: f64,
    /// Pan/zoom preference of navigation animations, in `[0, 1]`.
    pub pan_zoom: f64,
    /// Wheel units applied by the zoom keys.
    pub key_zoom_units: f64,
    /// How far past a scope group's bounds panning may go, as a fraction of its size.
    pub scope_overscroll: f64,
    /// Recompute limits from the scope group whenever it changes.
    pub limits_from_scope: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            max_zoom: 16.0,
            min_zoom: 0.01,
            limit_mode: LimitMode::default(),
            kinetics_enabled: true,
            momentum_threshold: DEFAULT_MOMENTUM_THRESHOLD,
            band_correction_ms: 250.0,
            fling_ms: 600.0,
            double_click_target_width: 300.0,
            navigation_velocity: 2.0,
            pan_zoom: 0.5,
            key_zoom_units: 100.0,
            scope_overscroll: 0.9,
            limits_from_scope: true,
        }
    }
}

impl BehaviorConfig {
    /// Sets the zoom range.
    #[must_use]
    pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the limit mode.
    #[must_use]
    pub fn with_limit_mode(mut self, mode: LimitMode) -> Self {
        self.limit_mode = mode;
        self
    }

    /// Enables or disables flings.
    #[must_use]
    pub fn with_kinetics(mut self, enabled: bool) -> Self {
        self.kinetics_enabled = enabled;
        self
    }

    /// Sets the fling threshold.
    #[must_use]
    pub fn with_momentum_threshold(mut self, threshold: f64) -> Self {
        self.momentum_threshold = threshold;
        self
    }

    /// Sets the rubber-band correction and fling durations.
    #[must_use]
    pub fn with_durations(mut self, band_correction_ms: f64, fling_ms: f64) -> Self {
        self.band_correction_ms = band_correction_ms;
        self.fling_ms = fling_ms;
        self
    }

    /// Sets the world width framed by a double-click.
    #[must_use]
    pub fn with_double_click_target_width(mut self, width: f64) -> Self {
        self.double_click_target_width = width;
        self
    }

    /// Sets navigation speed and pan/zoom preference.
    #[must_use]
    pub fn with_navigation(mut self, velocity: f64, pan_zoom: f64) -> Self {
        self.navigation_velocity = velocity;
        self.pan_zoom = pan_zoom;
        self
    }

    /// Sets the wheel units applied per zoom key press.
    #[must_use]
    pub fn with_key_zoom_units(mut self, units: f64) -> Self {
        self.key_zoom_units = units;
        self
    }

    /// Sets how limits follow the scope group.
    #[must_use]
    pub fn with_scope_limits(mut self, enabled: bool, overscroll: f64) -> Self {
        self.limits_from_scope = enabled;
        self.scope_overscroll = overscroll;
        self
    }
}

#[cfg(test)]
mod tests {
    use overlook_camera::LimitMode;

    use super::BehaviorConfig;

    #[test]
    fn builders_set_their_fields() {
        let config = BehaviorConfig::default()
            .with_zoom_range(0.5, 4.0)
            .with_limit_mode(LimitMode::Clamp)
            .with_kinetics(false)
            .with_momentum_threshold(8.0)
            .with_durations(100.0, 900.0)
            .with_double_click_target_width(120.0)
            .with_navigation(3.0, 0.25)
            .with_key_zoom_units(50.0)
            .with_scope_limits(false, 0.1);
        assert_eq!(
            config,
            BehaviorConfig {
                max_zoom: 4.0,
                min_zoom: 0.5,
                limit_mode: LimitMode::Clamp,
                kinetics_enabled: false,
                momentum_threshold: 8.0,
                band_correction_ms: 100.0,
                fling_ms: 900.0,
                double_click_target_width: 120.0,
                navigation_velocity: 3.0,
                pan_zoom: 0.25,
                key_zoom_units: 50.0,
                scope_overscroll: 0.1,
                limits_from_scope: false,
            }
        );
    }

    #[test]
    fn defaults_band_and_follow_the_scope() {
        let config = BehaviorConfig::default();
        assert_eq!(config.limit_mode, LimitMode::Band);
        assert!(config.kinetics_enabled);
        assert!(config.limits_from_scope);
        assert!(config.min_zoom < 1.0 && config.max_zoom > 1.0);
    }
}
