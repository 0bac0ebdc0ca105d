/// Entrance state of an element. Moves to `Revealed` the first time the
/// element intersects the viewport and stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feeds one intersection report. Returns `true` only on the
    /// `Hidden -> Revealed` transition.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        *self == RevealState::Revealed
    }
}

/// Intersection observer settings. `margin` uses CSS margin syntax; a
/// negative value waits until the element is that far inside the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportOptions {
    pub margin: &'static str,
    pub threshold: f64,
}

impl ViewportOptions {
    pub const fn inset(margin: &'static str) -> Self {
        Self { margin, threshold: 0.0 }
    }
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self::inset("0px")
    }
}
