//! Damped spring used to smooth scroll-linked values.
//!
//! F = -k * x - c * v, integrated with semi-implicit Euler in fixed
//! sub-steps so large frame gaps (tab switches) stay stable.

/// Largest integration step, in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Frame gaps beyond this are treated as this long.
const MAX_FRAME: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Position and velocity both within this of rest snaps to the target.
    pub rest_delta: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
        }
    }
}

impl SpringConfig {
    /// Damping ratio; 1.0 is critical, above is overdamped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// 1D spring state tracking position and velocity
#[derive(Debug, Clone, PartialEq)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

impl SpringState {
    pub fn new(initial: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
        }
    }

    /// Advance by `dt` seconds toward `target` and return the new position.
    pub fn step(&mut self, target: f64, config: &SpringConfig, dt: f64) -> f64 {
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.position - target;
            let spring_force = -config.stiffness * displacement;
            let damping_force = -config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / config.mass;

            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled(target, config.rest_delta) {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }

    pub fn is_settled(&self, target: f64, threshold: f64) -> bool {
        (self.position - target).abs() < threshold && self.velocity.abs() < threshold
    }

    /// Jump to `position` with zero velocity.
    pub fn reset(&mut self, position: f64) {
        *self = Self::new(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn default_config_is_overdamped() {
        assert!(SpringConfig::default().damping_ratio() >= 1.0);
    }

    #[test]
    fn converges_exactly_to_target() {
        let config = SpringConfig::default();
        let mut state = SpringState::new(0.0);

        for _ in 0..600 {
            state.step(0.75, &config, FRAME);
        }

        assert_eq!(state.position, 0.75, "spring should rest on the target");
        assert_eq!(state.velocity, 0.0);
    }

    #[test]
    fn does_not_overshoot_with_default_config() {
        let config = SpringConfig::default();
        let mut state = SpringState::new(0.0);
        let mut max_pos = 0.0f64;

        for _ in 0..240 {
            max_pos = max_pos.max(state.step(1.0, &config, FRAME));
        }

        assert!(max_pos <= 1.0 + 1e-9, "max position {} overshot", max_pos);
    }

    #[test]
    fn long_frame_gap_stays_stable() {
        let config = SpringConfig::default();
        let mut state = SpringState::new(0.0);

        let pos = state.step(1.0, &config, 10.0);

        assert!(pos.is_finite());
        assert!((0.0..=1.0).contains(&pos), "position {} left bounds", pos);
    }

    #[test]
    fn reset_clears_velocity() {
        let config = SpringConfig::default();
        let mut state = SpringState::new(0.0);
        state.step(1.0, &config, FRAME);

        state.reset(0.4);

        assert_eq!(state, SpringState::new(0.4));
    }
}
