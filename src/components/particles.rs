use web_sys::js_sys::Math;
use yew::prelude::*;

/// How a field of particles moves: each dot's cycle lasts
/// `base_duration + [0, duration_spread)` seconds and wanders up to `drift`
/// px either side horizontally.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Drift {
    pub base_duration: f64,
    pub duration_spread: f64,
    pub drift: f64,
}

impl Drift {
    /// Straight up and back, as behind the hero copy.
    pub const RISE: Drift = Drift { base_duration: 2.0, duration_spread: 3.0, drift: 0.0 };
    /// Slower, with some sideways wander.
    pub const WANDER: Drift = Drift { base_duration: 3.0, duration_spread: 2.0, drift: 15.0 };
}

/// One floating dot: position in % of the parent, animation timing in s.
#[derive(Clone, PartialEq, Debug)]
pub struct Particle {
    pub top: f64,
    pub left: f64,
    pub drift_x: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    fn scatter(roll: &mut impl FnMut() -> f64, motion: &Drift) -> Self {
        Self {
            top: roll() * 100.0,
            left: roll() * 100.0,
            drift_x: (roll() * 2.0 - 1.0) * motion.drift,
            duration: motion.base_duration + roll() * motion.duration_spread,
            delay: roll() * 2.0,
        }
    }
}

/// Lays out `count` particles using `roll` as the source of randomness.
pub fn scatter(count: usize, motion: Drift, mut roll: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count).map(|_| Particle::scatter(&mut roll, &motion)).collect()
}

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    pub count: usize,
    #[prop_or(Drift::RISE)]
    pub motion: Drift,
    #[prop_or_else(|| classes!("particle"))]
    pub class: Classes,
}

#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let count = props.count;
    let motion = props.motion;
    // positions are rolled once per mount
    let layout = use_state(move || scatter(count, motion, Math::random));

    html! {
        <>
            <style>
                {r#"
                    @keyframes particle-float {
                        0%, 100% { transform: translate(0, 0) scale(1); opacity: 0; }
                        50% { transform: translate(var(--drift-x), -30px) scale(1.2); opacity: 1; }
                    }
                    .particle, .particle-dot {
                        position: absolute;
                        border-radius: 50%;
                        background: #72d3f5;
                        pointer-events: none;
                        animation-name: particle-float;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    .particle { width: 4px; height: 4px; }
                    .particle-dot { width: 16px; height: 16px; opacity: 0.5; }
                "#}
            </style>
            { for layout.iter().map(|p| html! {
                <div
                    class={props.class.clone()}
                    style={format!(
                        "top: {:.2}%; left: {:.2}%; --drift-x: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        p.top, p.left, p.drift_x, p.duration, p.delay
                    )}
                />
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_maps_rolls_into_ranges() {
        let particles = scatter(3, Drift::WANDER, || 0.5);

        assert_eq!(particles.len(), 3);
        assert_eq!(
            particles[0],
            Particle { top: 50.0, left: 50.0, drift_x: 0.0, duration: 4.0, delay: 1.0 }
        );
    }

    #[test]
    fn rise_moves_only_vertically_over_two_to_five_seconds() {
        for roll in [0.0, 0.999_999] {
            let p = &scatter(1, Drift::RISE, || roll)[0];
            assert_eq!(p.drift_x, 0.0);
            assert!((2.0..5.0).contains(&p.duration), "duration {}", p.duration);
        }
        let slowest = &scatter(1, Drift::RISE, || 0.999_999)[0];
        assert!(slowest.duration > 4.9);
    }

    #[test]
    fn wander_stays_in_bounds() {
        for roll in [0.0, 0.999_999] {
            let p = &scatter(1, Drift::WANDER, || roll)[0];
            assert!((0.0..100.0).contains(&p.top));
            assert!((-15.0..15.0).contains(&p.drift_x));
            assert!((3.0..5.0).contains(&p.duration));
        }
    }

    #[test]
    fn class_prop_takes_css_class_names() {
        let props = yew::props!(ParticlesProps { count: 4 });
        assert_eq!(props.class, classes!("particle"));
        assert_eq!(props.motion, Drift::RISE);

        let dots = yew::props!(ParticlesProps { count: 8, class: "particle-dot" });
        assert_eq!(dots.class, classes!("particle-dot"));
    }
}
