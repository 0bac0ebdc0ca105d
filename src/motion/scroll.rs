//! Scroll-linked progress for a container moving through an observation
//! window, e.g. from "container top meets viewport bottom" to "container
//! bottom meets viewport top".

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;

use super::source::EventSource;
use super::spring::{SpringConfig, SpringState};

#[derive(Debug, Error, PartialEq)]
pub enum OffsetParseError {
    #[error("offset needs a target and a viewport edge, got {0:?}")]
    Arity(String),
    #[error("unknown edge {0:?} (expected start, center, end or a number)")]
    Edge(String),
}

/// One boundary of the window: the point on the target (0 = top edge,
/// 1 = bottom edge) that meets the point on the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }
}

fn parse_edge(word: &str) -> Result<f64, OffsetParseError> {
    match word {
        "start" => Ok(0.0),
        "center" => Ok(0.5),
        "end" => Ok(1.0),
        other => other
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| OffsetParseError::Edge(other.to_string())),
    }
}

impl FromStr for Intersection {
    type Err = OffsetParseError;

    /// Parses `"<target-edge> <viewport-edge>"`, e.g. `"start end"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [target, viewport] => Ok(Self::new(parse_edge(target)?, parse_edge(viewport)?)),
            _ => Err(OffsetParseError::Arity(s.to_string())),
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target, self.viewport)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollWindow {
    /// From the container entering at the bottom to it leaving at the top.
    pub const ENTER_TO_EXIT: ScrollWindow = ScrollWindow {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(1.0, 0.0),
    };

    /// From the container entering at the bottom to its bottom edge
    /// reaching the viewport bottom.
    pub const ENTER_TO_SETTLE: ScrollWindow = ScrollWindow {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(1.0, 1.0),
    };

    pub fn parse(start: &str, end: &str) -> Result<Self, OffsetParseError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Like [`ScrollWindow::parse`], but logs bad offsets and uses `fallback`.
    pub fn from_offsets(start: &str, end: &str, fallback: ScrollWindow) -> Self {
        Self::parse(start, end).unwrap_or_else(|err| {
            warn!("scroll window [{:?}, {:?}] rejected: {}", start, end, err);
            fallback
        })
    }

    /// Scroll offsets at which the window opens and closes.
    pub fn resolve(&self, layout: &ScrollLayout) -> WindowSpan {
        let doc_top = layout.scroll_y + layout.target_top;
        let at = |i: &Intersection| {
            doc_top + i.target * layout.target_height - i.viewport * layout.viewport_height
        };
        WindowSpan {
            start: at(&self.start),
            end: at(&self.end),
        }
    }
}

/// Everything needed to place a container against the viewport. `target_top`
/// is viewport-relative, as `getBoundingClientRect().top` reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollLayout {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub target_top: f64,
    pub target_height: f64,
}

/// A window resolved to absolute scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpan {
    pub start: f64,
    pub end: f64,
}

impl WindowSpan {
    pub fn progress_at(&self, scroll: f64) -> f64 {
        let length = self.end - self.start;
        let raw = if length > 0.0 {
            (scroll - self.start) / length
        } else if scroll >= self.end {
            1.0
        } else {
            0.0
        };
        if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// A container whose layout can be read on demand. `None` means it is not
/// mounted or not measurable yet.
pub trait ScrollContainer {
    fn layout(&self) -> Option<ScrollLayout>;
}

struct Observed {
    container: Rc<dyn ScrollContainer>,
    window: ScrollWindow,
    raw: Cell<f64>,
    smoothing: Option<(SpringConfig, RefCell<SpringState>)>,
    on_change: RefCell<Option<Rc<dyn Fn(f64)>>>,
}

impl Observed {
    fn recompute(&self) {
        let raw = self
            .container
            .layout()
            .map(|layout| {
                let span = self.window.resolve(&layout);
                span.progress_at(layout.scroll_y)
            })
            .unwrap_or(0.0);
        if raw == self.raw.get() {
            return;
        }
        self.raw.set(raw);
        let listener = self.on_change.borrow().clone();
        if let Some(listener) = listener {
            listener(self.value());
        }
    }

    fn value(&self) -> f64 {
        match &self.smoothing {
            Some((_, spring)) => spring.borrow().position.clamp(0.0, 1.0),
            None => self.raw.get(),
        }
    }
}

struct State<G> {
    observed: BTreeMap<u64, Rc<Observed>>,
    next_id: u64,
    listener: Option<G>,
}

struct Shared<S: EventSource<()>> {
    source: S,
    state: RefCell<State<S::Guard>>,
}

trait Unobserve {
    fn unobserve(&self, id: u64);
}

impl<S: EventSource<()>> Unobserve for Shared<S> {
    fn unobserve(&self, id: u64) {
        let released = {
            let mut state = self.state.borrow_mut();
            if state.observed.remove(&id).is_none() {
                return;
            }
            if state.observed.is_empty() {
                state.listener.take()
            } else {
                None
            }
        };
        if released.is_some() {
            debug!("scroll tracker: nothing observed, detaching listener");
        }
        drop(released);
    }
}

/// Converts scroll/resize events into per-container progress values.
pub struct ScrollProgressTracker<S: EventSource<()>> {
    shared: Rc<Shared<S>>,
}

impl<S: EventSource<()>> Clone for ScrollProgressTracker<S> {
    fn clone(&self) -> Self {
        Self { shared: Rc::clone(&self.shared) }
    }
}

impl<S: EventSource<()>> PartialEq for ScrollProgressTracker<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<S: EventSource<()> + 'static> ScrollProgressTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                source,
                state: RefCell::new(State {
                    observed: BTreeMap::new(),
                    next_id: 1,
                    listener: None,
                }),
            }),
        }
    }

    /// Starts observing `container`. The handle is measured immediately and
    /// after every scroll or resize event until it is dropped.
    pub fn observe(
        &self,
        container: Rc<dyn ScrollContainer>,
        window: ScrollWindow,
        smoothing: Option<SpringConfig>,
    ) -> ProgressHandle {
        if let Some(config) = &smoothing {
            let ratio = config.damping_ratio();
            if ratio < 1.0 {
                debug!("scroll tracker: underdamped spring (ratio {:.2}), overshoot is clamped", ratio);
            }
        }
        let observed = Rc::new(Observed {
            container,
            window,
            raw: Cell::new(0.0),
            smoothing: smoothing.map(|config| (config, RefCell::new(SpringState::new(0.0)))),
            on_change: RefCell::new(None),
        });
        observed.recompute();
        if let Some((_, spring)) = &observed.smoothing {
            spring.borrow_mut().reset(observed.raw.get());
        }

        let (id, needs_listener) = {
            let mut state = self.shared.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.observed.insert(id, Rc::clone(&observed));
            (id, state.listener.is_none())
        };

        debug!("scroll tracker: observing [{}] -> [{}]", window.start, window.end);
        if needs_listener {
            debug!("scroll tracker: first container observed, attaching listener");
            let weak = Rc::downgrade(&self.shared);
            let guard = self.shared.source.attach(Rc::new(move |()| {
                if let Some(shared) = weak.upgrade() {
                    Self::dispatch(&shared);
                }
            }));
            self.shared.state.borrow_mut().listener = Some(guard);
        }

        let tracker: Weak<dyn Unobserve> = Rc::downgrade(&self.shared) as Weak<dyn Unobserve>;
        ProgressHandle { id, observed, tracker }
    }

    fn dispatch(shared: &Shared<S>) {
        let snapshot: Vec<Rc<Observed>> = shared.state.borrow().observed.values().cloned().collect();
        for observed in snapshot {
            observed.recompute();
        }
    }

    pub fn len(&self) -> usize {
        self.shared.state.borrow().observed.len()
    }

    pub fn is_listening(&self) -> bool {
        self.shared.state.borrow().listener.is_some()
    }
}

/// Read side of one observation. Dropping it stops the observation.
pub struct ProgressHandle {
    id: u64,
    observed: Rc<Observed>,
    tracker: Weak<dyn Unobserve>,
}

impl ProgressHandle {
    /// Exposed progress: smoothed when a spring is configured, raw otherwise.
    pub fn value(&self) -> f64 {
        self.observed.value()
    }

    pub fn is_smoothed(&self) -> bool {
        self.observed.smoothing.is_some()
    }

    /// Steps the spring by `dt` seconds. Returns the new value.
    pub fn advance(&self, dt: f64) -> f64 {
        if let Some((config, spring)) = &self.observed.smoothing {
            spring.borrow_mut().step(self.observed.raw.get(), config, dt);
        }
        self.value()
    }

    /// True once the exposed value rests on the raw value.
    pub fn is_settled(&self) -> bool {
        match &self.observed.smoothing {
            Some((_, spring)) => {
                let spring = spring.borrow();
                spring.position == self.observed.raw.get() && spring.velocity == 0.0
            }
            None => true,
        }
    }

    /// Called with the exposed value whenever a scroll/resize moves the raw value.
    pub fn on_change(&self, listener: impl Fn(f64) + 'static) {
        *self.observed.on_change.borrow_mut() = Some(Rc::new(listener));
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        if let Some(tracker) = self.tracker.upgrade() {
            tracker.unobserve(self.id);
        }
    }
}

/// Steps a smoothed [`ProgressHandle`] on ticks from `clock`. The clock is
/// only held while the spring is moving: a raw change attaches it and it is
/// released once the value settles.
pub struct SpringDriver<C: EventSource<()>> {
    _driven: Rc<Driven<C>>,
}

struct Driven<C: EventSource<()>> {
    handle: ProgressHandle,
    clock: C,
    frame_dt: f64,
    ticking: RefCell<Option<C::Guard>>,
    on_frame: Box<dyn Fn(f64)>,
}

impl<C: EventSource<()> + 'static> SpringDriver<C> {
    pub fn new(
        handle: ProgressHandle,
        clock: C,
        frame_dt: f64,
        on_frame: impl Fn(f64) + 'static,
    ) -> Self {
        let inner = Rc::new(Driven {
            handle,
            clock,
            frame_dt,
            ticking: RefCell::new(None),
            on_frame: Box::new(on_frame),
        });
        let weak = Rc::downgrade(&inner);
        inner.handle.on_change(move |_| {
            if let Some(inner) = weak.upgrade() {
                Driven::wake(&inner);
            }
        });
        Self { _driven: inner }
    }
}

impl<C: EventSource<()> + 'static> Driven<C> {
    fn wake(this: &Rc<Self>) {
        if this.ticking.borrow().is_some() || this.handle.is_settled() {
            return;
        }
        let weak = Rc::downgrade(this);
        let guard = this.clock.attach(Rc::new(move |()| {
            if let Some(inner) = weak.upgrade() {
                inner.tick();
            }
        }));
        *this.ticking.borrow_mut() = Some(guard);
    }

    fn tick(&self) {
        let value = self.handle.advance(self.frame_dt);
        (self.on_frame)(value);
        if self.handle.is_settled() {
            let done = self.ticking.borrow_mut().take();
            drop(done);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::source::testing::ManualSource;

    /// Section 2000px down the document, 1000px tall, 1000px viewport.
    struct FakeSection {
        doc_top: f64,
        height: f64,
        viewport: f64,
        scroll_y: Cell<f64>,
        mounted: Cell<bool>,
    }

    impl FakeSection {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                doc_top: 2000.0,
                height: 1000.0,
                viewport: 1000.0,
                scroll_y: Cell::new(0.0),
                mounted: Cell::new(true),
            })
        }
    }

    impl ScrollContainer for FakeSection {
        fn layout(&self) -> Option<ScrollLayout> {
            if !self.mounted.get() {
                return None;
            }
            Some(ScrollLayout {
                scroll_y: self.scroll_y.get(),
                viewport_height: self.viewport,
                target_top: self.doc_top - self.scroll_y.get(),
                target_height: self.height,
            })
        }
    }

    fn tracker() -> (ScrollProgressTracker<ManualSource<()>>, ManualSource<()>) {
        let source = ManualSource::new();
        let probe = source.probe();
        (ScrollProgressTracker::new(source), probe)
    }

    #[test]
    fn midpoint_of_window_is_half() {
        let span = WindowSpan { start: 1000.0, end: 3000.0 };
        assert_eq!(span.progress_at(2000.0), 0.5);
    }

    #[test]
    fn progress_is_clamped_and_hits_both_boundaries() {
        let span = WindowSpan { start: 1000.0, end: 3000.0 };
        assert_eq!(span.progress_at(1000.0), 0.0);
        assert_eq!(span.progress_at(3000.0), 1.0);
        for scroll in (0..4000).step_by(125) {
            let p = span.progress_at(scroll as f64);
            assert!((0.0..=1.0).contains(&p), "progress {} out of bounds", p);
        }
    }

    #[test]
    fn empty_window_steps_at_end() {
        let span = WindowSpan { start: 500.0, end: 500.0 };
        assert_eq!(span.progress_at(499.0), 0.0);
        assert_eq!(span.progress_at(500.0), 1.0);
    }

    #[test]
    fn enter_to_exit_resolves_against_layout() {
        let section = FakeSection::new();
        let layout = section.layout().unwrap();

        let span = ScrollWindow::ENTER_TO_EXIT.resolve(&layout);

        assert_eq!(span, WindowSpan { start: 1000.0, end: 3000.0 });
    }

    #[test]
    fn enter_to_settle_resolves_against_layout() {
        let section = FakeSection::new();
        let span = ScrollWindow::ENTER_TO_SETTLE.resolve(&section.layout().unwrap());
        assert_eq!(span, WindowSpan { start: 1000.0, end: 2000.0 });
    }

    #[test]
    fn offsets_parse_keywords_and_numbers() {
        assert_eq!(
            ScrollWindow::parse("start end", "end start"),
            Ok(ScrollWindow::ENTER_TO_EXIT)
        );
        assert_eq!("center 0.25".parse::<Intersection>(), Ok(Intersection::new(0.5, 0.25)));
    }

    #[test]
    fn bad_offsets_fall_back_to_the_given_window() {
        assert_eq!(
            ScrollWindow::from_offsets("start end", "end end", ScrollWindow::ENTER_TO_EXIT),
            ScrollWindow::ENTER_TO_SETTLE
        );
        assert_eq!(
            ScrollWindow::from_offsets("start end", "bottom", ScrollWindow::ENTER_TO_EXIT),
            ScrollWindow::ENTER_TO_EXIT
        );
    }

    #[test]
    fn offsets_reject_bad_input() {
        assert_eq!(
            "start".parse::<Intersection>(),
            Err(OffsetParseError::Arity("start".into()))
        );
        assert_eq!(
            "top bottom".parse::<Intersection>(),
            Err(OffsetParseError::Edge("top".into()))
        );
    }

    #[test]
    fn tracker_recomputes_on_scroll_events() {
        let (tracker, source) = tracker();
        let section = FakeSection::new();
        let handle = tracker.observe(section.clone(), ScrollWindow::ENTER_TO_EXIT, None);
        assert_eq!(handle.value(), 0.0);

        section.scroll_y.set(2000.0);
        source.fire(());
        assert_eq!(handle.value(), 0.5);

        section.scroll_y.set(5000.0);
        source.fire(());
        assert_eq!(handle.value(), 1.0);
    }

    #[test]
    fn unmounted_container_reports_zero() {
        let (tracker, source) = tracker();
        let section = FakeSection::new();
        section.mounted.set(false);
        section.scroll_y.set(2000.0);
        let handle = tracker.observe(section.clone(), ScrollWindow::ENTER_TO_EXIT, None);
        assert_eq!(handle.value(), 0.0);

        section.mounted.set(true);
        source.fire(());
        assert_eq!(handle.value(), 0.5);
    }

    #[test]
    fn on_change_fires_only_when_raw_moves() {
        let (tracker, source) = tracker();
        let section = FakeSection::new();
        let handle = tracker.observe(section.clone(), ScrollWindow::ENTER_TO_EXIT, None);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            handle.on_change(move |v| seen.borrow_mut().push(v));
        }

        source.fire(());
        section.scroll_y.set(1500.0);
        source.fire(());
        source.fire(());

        assert_eq!(*seen.borrow(), vec![0.25]);
    }

    #[test]
    fn smoothed_progress_converges_to_raw() {
        let (tracker, source) = tracker();
        let section = FakeSection::new();
        let handle = tracker.observe(
            section.clone(),
            ScrollWindow::ENTER_TO_EXIT,
            Some(SpringConfig::default()),
        );

        section.scroll_y.set(2000.0);
        source.fire(());
        assert!(!handle.is_settled());
        assert!(handle.value() < 0.5, "spring should lag the raw value");

        for _ in 0..600 {
            let v = handle.advance(1.0 / 60.0);
            assert!((0.0..=1.0).contains(&v), "smoothed {} out of bounds", v);
        }

        assert_eq!(handle.value(), 0.5);
        assert!(handle.is_settled());
    }

    #[test]
    fn smoothing_starts_from_initial_position() {
        let (tracker, _source) = tracker();
        let section = FakeSection::new();
        section.scroll_y.set(3000.0);

        let handle = tracker.observe(section, ScrollWindow::ENTER_TO_EXIT, Some(SpringConfig::default()));

        assert_eq!(handle.value(), 1.0);
        assert!(handle.is_settled());
    }

    #[test]
    fn shared_listener_is_ref_counted() {
        let (tracker, source) = tracker();
        let a = tracker.observe(FakeSection::new(), ScrollWindow::ENTER_TO_EXIT, None);
        let b = tracker.observe(FakeSection::new(), ScrollWindow::ENTER_TO_SETTLE, None);
        assert_eq!(source.attach_count(), 1);

        drop(a);
        assert!(tracker.is_listening());
        drop(b);
        assert!(!tracker.is_listening());
        assert_eq!(source.detach_count(), 1);

        let _c = tracker.observe(FakeSection::new(), ScrollWindow::ENTER_TO_EXIT, None);
        assert_eq!(source.attach_count(), 2);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn spring_driver_holds_the_clock_only_while_moving() {
        let (tracker, scroll) = tracker();
        let section = FakeSection::new();
        let handle = tracker.observe(
            section.clone(),
            ScrollWindow::ENTER_TO_EXIT,
            Some(SpringConfig::default()),
        );
        let clock = ManualSource::new();
        let frames = clock.probe();
        let shown = Rc::new(Cell::new(0.0));
        let _driver = {
            let shown = Rc::clone(&shown);
            SpringDriver::new(handle, clock, 1.0 / 60.0, move |v| shown.set(v))
        };
        assert!(!frames.is_attached());

        section.scroll_y.set(2000.0);
        scroll.fire(());
        assert!(frames.is_attached());

        let mut ticks = 0;
        while frames.is_attached() && ticks < 1000 {
            frames.fire(());
            ticks += 1;
        }

        assert!(ticks < 1000, "spring never settled");
        assert!(ticks > 1, "spring should take several frames");
        assert_eq!(frames.detach_count(), 1);
        assert_eq!(shown.get(), 0.5);

        // a scroll event that does not move the raw value keeps the clock idle
        scroll.fire(());
        assert!(!frames.is_attached());
        assert_eq!(frames.attach_count(), 1);
    }

    #[test]
    fn dropping_spring_driver_releases_clock_and_observation() {
        let (tracker, scroll) = tracker();
        let section = FakeSection::new();
        let handle = tracker.observe(
            section.clone(),
            ScrollWindow::ENTER_TO_SETTLE,
            Some(SpringConfig::default()),
        );
        let clock = ManualSource::new();
        let frames = clock.probe();
        let driver = SpringDriver::new(handle, clock, 1.0 / 60.0, |_| ());

        section.scroll_y.set(1500.0);
        scroll.fire(());
        assert!(frames.is_attached());

        drop(driver);

        assert!(!frames.is_attached());
        assert_eq!(tracker.len(), 0);
        assert!(!tracker.is_listening());
    }
}
