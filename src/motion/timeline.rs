//! Animation timing as plain data, rendered to CSS by the sections.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
    /// Approximated with a back-out curve; CSS has no spring timing.
    Spring { stiffness: f64 },
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::EaseOut => f.write_str("ease-out"),
            Easing::CubicBezier(a, b, c, d) => write!(f, "cubic-bezier({a}, {b}, {c}, {d})"),
            Easing::Spring { stiffness } => {
                // stiffer springs overshoot more
                let overshoot = (1.0 + stiffness / 600.0).min(1.6);
                write!(f, "cubic-bezier(0.34, {overshoot:.2}, 0.64, 1)")
            }
        }
    }
}

/// Duration, delay and easing, all in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self { duration, delay: 0.0, easing }
    }

    pub fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    /// `transition-*` declarations for a `.reveal` element.
    pub fn css(&self) -> String {
        format!(
            "transition-duration: {}s; transition-delay: {}s; transition-timing-function: {};",
            self.duration, self.delay, self.easing
        )
    }

    /// `animation-*` declarations for a keyframed element.
    pub fn animation_css(&self, keyframes: &str) -> String {
        format!(
            "animation: {} {}s {} {}s both;",
            keyframes, self.duration, self.easing, self.delay
        )
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(0.5, Easing::EaseOut)
    }
}

/// Parent-driven delays for a list of children.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, stagger_children: f64) -> Self {
        Self { delay_children, stagger_children }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }

    pub fn apply(&self, index: usize, transition: Transition) -> Transition {
        transition.delayed(transition.delay + self.delay_for(index))
    }
}

/// Piecewise-linear map from `input` stops to `output` stops, clamped at
/// both ends. `input` must be ascending and the same length as `output`.
pub fn interpolate(value: f64, input: &[f64], output: &[f64]) -> f64 {
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || value <= input[0] {
        return output[0];
    }
    if value >= input[n - 1] {
        return output[n - 1];
    }
    for i in 1..n {
        if value <= input[i] {
            let span = input[i] - input[i - 1];
            if span <= 0.0 {
                return output[i];
            }
            let t = (value - input[i - 1]) / span;
            return output[i - 1] + (output[i] - output[i - 1]) * t;
        }
    }
    output[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_offsets_each_child() {
        let stagger = Stagger::new(0.3, 0.1);
        assert_eq!(stagger.delay_for(0), 0.3);
        assert!((stagger.delay_for(3) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn stagger_adds_to_existing_delay() {
        let base = Transition::new(0.5, Easing::EaseOut).delayed(1.0);
        let t = Stagger::new(0.0, 0.2).apply(2, base);
        assert!((t.delay - 1.4).abs() < 1e-12);
        assert_eq!(t.duration, 0.5);
    }

    #[test]
    fn transition_renders_css() {
        let t = Transition::new(0.8, Easing::CubicBezier(0.2, 0.65, 0.3, 0.9)).delayed(0.25);
        assert_eq!(
            t.css(),
            "transition-duration: 0.8s; transition-delay: 0.25s; \
             transition-timing-function: cubic-bezier(0.2, 0.65, 0.3, 0.9);"
        );
        assert_eq!(
            Transition::new(2.0, Easing::EaseOut).animation_css("rise-20"),
            "animation: rise-20 2s ease-out 0s both;"
        );
    }

    #[test]
    fn interpolate_matches_parallax_and_fade() {
        let y = |p| interpolate(p, &[0.0, 1.0], &[-100.0, 100.0]);
        assert_eq!(y(0.0), -100.0);
        assert_eq!(y(0.5), 0.0);
        assert_eq!(y(1.0), 100.0);

        let opacity = |p| interpolate(p, &[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]);
        assert_eq!(opacity(0.25), 0.5);
        assert_eq!(opacity(0.5), 1.0);
        assert_eq!(opacity(0.75), 0.5);
    }

    #[test]
    fn interpolate_clamps_outside_input() {
        assert_eq!(interpolate(-1.0, &[0.0, 1.0], &[10.0, 20.0]), 10.0);
        assert_eq!(interpolate(2.0, &[0.0, 1.0], &[10.0, 20.0]), 20.0);
        assert_eq!(interpolate(0.3, &[], &[]), 0.0);
    }
}
