//! Hover-spotlight pointer tracking.
//!
//! One window-wide `mousemove` listener serves every registered region. The
//! listener is attached when the first region registers and dropped when the
//! last one leaves, so nothing outlives the page.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use log::debug;

use super::geometry::{Point, Rect, RelativeCoordinate};
use super::source::EventSource;

pub type RegionId = u64;

/// Result of asking a region where it is right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Measured(Rect),
    /// Mounted but not laid out yet. Handled as a zero box.
    Unmeasured,
    /// Gone from the tree. Skipped.
    Detached,
}

/// An interactive surface owned by the rendering layer.
pub trait Region {
    fn measure(&self) -> Measurement;
    fn publish(&self, coordinate: RelativeCoordinate);
}

struct Tracked {
    region: Rc<dyn Region>,
    last: Option<RelativeCoordinate>,
}

struct State<G> {
    regions: BTreeMap<RegionId, Tracked>,
    next_id: RegionId,
    listener: Option<G>,
    last_sample: Option<Point>,
}

struct Shared<S: EventSource<Point>> {
    source: S,
    state: RefCell<State<S::Guard>>,
}

trait Detach {
    fn detach(&self, id: RegionId);
}

impl<S: EventSource<Point>> Detach for Shared<S> {
    fn detach(&self, id: RegionId) {
        let released = {
            let mut state = self.state.borrow_mut();
            if state.regions.remove(&id).is_none() {
                return;
            }
            if state.regions.is_empty() {
                state.listener.take()
            } else {
                None
            }
        };
        if released.is_some() {
            debug!("pointer tracker: last region left, detaching listener");
        }
        drop(released);
    }
}

/// Registry of spotlight regions sharing one pointer listener.
pub struct PointerTracker<S: EventSource<Point>> {
    shared: Rc<Shared<S>>,
}

impl<S: EventSource<Point>> Clone for PointerTracker<S> {
    fn clone(&self) -> Self {
        Self { shared: Rc::clone(&self.shared) }
    }
}

impl<S: EventSource<Point>> PartialEq for PointerTracker<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<S: EventSource<Point> + 'static> PointerTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                source,
                state: RefCell::new(State {
                    regions: BTreeMap::new(),
                    next_id: 1,
                    listener: None,
                    last_sample: None,
                }),
            }),
        }
    }

    /// Starts tracking `region` from the next pointer move on.
    pub fn register(&self, region: Rc<dyn Region>) -> Subscription {
        let (id, needs_listener) = {
            let mut state = self.shared.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.regions.insert(id, Tracked { region, last: None });
            (id, state.listener.is_none())
        };

        if needs_listener {
            debug!("pointer tracker: first region registered, attaching listener");
            let weak = Rc::downgrade(&self.shared);
            let guard = self.shared.source.attach(Rc::new(move |point: Point| {
                if let Some(shared) = weak.upgrade() {
                    Self::dispatch(&shared, point);
                }
            }));
            self.shared.state.borrow_mut().listener = Some(guard);
        }

        let weak: Weak<dyn Detach> = Rc::downgrade(&self.shared) as Weak<dyn Detach>;
        Subscription { id, tracker: RefCell::new(Some(weak)) }
    }

    pub fn unregister(&self, subscription: &Subscription) {
        subscription.unregister();
    }

    fn dispatch(shared: &Shared<S>, point: Point) {
        let snapshot: Vec<(RegionId, Rc<dyn Region>)> = {
            let mut state = shared.state.borrow_mut();
            state.last_sample = Some(point);
            state
                .regions
                .iter()
                .map(|(id, tracked)| (*id, Rc::clone(&tracked.region)))
                .collect()
        };

        for (id, region) in snapshot {
            if !shared.state.borrow().regions.contains_key(&id) {
                continue;
            }
            let bounds = match region.measure() {
                Measurement::Measured(rect) => rect,
                Measurement::Unmeasured => Rect::default(),
                Measurement::Detached => continue,
            };
            let coordinate = RelativeCoordinate::between(point, bounds);
            region.publish(coordinate);
            if let Some(tracked) = shared.state.borrow_mut().regions.get_mut(&id) {
                tracked.last = Some(coordinate);
            }
        }
    }

    pub fn last_sample(&self) -> Option<Point> {
        self.shared.state.borrow().last_sample
    }

    /// Last coordinate published to `id`, if it is still registered.
    pub fn coordinate(&self, id: RegionId) -> Option<RelativeCoordinate> {
        self.shared
            .state
            .borrow()
            .regions
            .get(&id)
            .and_then(|tracked| tracked.last)
    }

    pub fn len(&self) -> usize {
        self.shared.state.borrow().regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_listening(&self) -> bool {
        self.shared.state.borrow().listener.is_some()
    }
}

/// Handle returned by [`PointerTracker::register`]. Dropping it unregisters.
pub struct Subscription {
    id: RegionId,
    tracker: RefCell<Option<Weak<dyn Detach>>>,
}

impl Subscription {
    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn unregister(&self) {
        let tracker = self.tracker.borrow_mut().take();
        if let Some(shared) = tracker.and_then(|weak| weak.upgrade()) {
            shared.detach(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unregister();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::source::testing::ManualSource;
    use std::cell::{Cell, RefCell};

    struct FakeRegion {
        bounds: Cell<Measurement>,
        published: RefCell<Vec<RelativeCoordinate>>,
    }

    impl FakeRegion {
        fn at(left: f64, top: f64, width: f64, height: f64) -> Rc<Self> {
            Rc::new(Self {
                bounds: Cell::new(Measurement::Measured(Rect::new(left, top, width, height))),
                published: RefCell::new(Vec::new()),
            })
        }

        fn last(&self) -> Option<RelativeCoordinate> {
            self.published.borrow().last().copied()
        }

        fn updates(&self) -> usize {
            self.published.borrow().len()
        }
    }

    impl Region for FakeRegion {
        fn measure(&self) -> Measurement {
            self.bounds.get()
        }

        fn publish(&self, coordinate: RelativeCoordinate) {
            self.published.borrow_mut().push(coordinate);
        }
    }

    fn tracker() -> (PointerTracker<ManualSource<Point>>, ManualSource<Point>) {
        let source = ManualSource::new();
        let probe = source.probe();
        (PointerTracker::new(source), probe)
    }

    #[test]
    fn publishes_pointer_minus_box_origin() {
        let (tracker, source) = tracker();
        let card = FakeRegion::at(100.0, 50.0, 200.0, 200.0);
        let sub = tracker.register(card.clone());

        source.fire(Point::new(120.0, 80.0));

        assert_eq!(card.last(), Some(RelativeCoordinate { x: 20.0, y: 30.0 }));
        assert_eq!(tracker.coordinate(sub.id()), card.last());
        assert_eq!(tracker.last_sample(), Some(Point::new(120.0, 80.0)));
    }

    #[test]
    fn remeasures_box_on_every_event() {
        let (tracker, source) = tracker();
        let card = FakeRegion::at(100.0, 50.0, 200.0, 200.0);
        let _sub = tracker.register(card.clone());

        source.fire(Point::new(120.0, 80.0));
        // Page scrolled by 30px; the card moved up.
        card.bounds.set(Measurement::Measured(Rect::new(100.0, 20.0, 200.0, 200.0)));
        source.fire(Point::new(120.0, 80.0));

        assert_eq!(card.last(), Some(RelativeCoordinate { x: 20.0, y: 60.0 }));
    }

    #[test]
    fn every_region_sees_the_same_event() {
        let (tracker, source) = tracker();
        let left = FakeRegion::at(0.0, 0.0, 100.0, 100.0);
        let right = FakeRegion::at(150.0, 0.0, 100.0, 100.0);
        let _a = tracker.register(left.clone());
        let _b = tracker.register(right.clone());

        source.fire(Point::new(160.0, 10.0));

        assert_eq!(left.last(), Some(RelativeCoordinate { x: 160.0, y: 10.0 }));
        assert_eq!(right.last(), Some(RelativeCoordinate { x: 10.0, y: 10.0 }));
    }

    #[test]
    fn no_retroactive_update_on_register() {
        let (tracker, source) = tracker();
        let first = FakeRegion::at(0.0, 0.0, 10.0, 10.0);
        let _a = tracker.register(first);
        source.fire(Point::new(5.0, 5.0));

        let late = FakeRegion::at(0.0, 0.0, 10.0, 10.0);
        let _b = tracker.register(late.clone());

        assert_eq!(late.updates(), 0);
    }

    #[test]
    fn unregistered_region_keeps_last_value() {
        let (tracker, source) = tracker();
        let card = FakeRegion::at(100.0, 50.0, 200.0, 200.0);
        let sub = tracker.register(card.clone());
        source.fire(Point::new(120.0, 80.0));

        tracker.unregister(&sub);
        source.fire(Point::new(300.0, 300.0));

        assert_eq!(card.last(), Some(RelativeCoordinate { x: 20.0, y: 30.0 }));
        assert_eq!(card.updates(), 1);
        assert_eq!(tracker.coordinate(sub.id()), None);
    }

    #[test]
    fn unregister_twice_is_a_no_op() {
        let (tracker, _source) = tracker();
        let keep = FakeRegion::at(0.0, 0.0, 10.0, 10.0);
        let _keep = tracker.register(keep);
        let sub = tracker.register(FakeRegion::at(0.0, 0.0, 10.0, 10.0));

        sub.unregister();
        sub.unregister();
        tracker.unregister(&sub);

        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let (tracker, source) = tracker();
        let card = FakeRegion::at(0.0, 0.0, 10.0, 10.0);
        let sub = tracker.register(card.clone());
        drop(sub);

        source.fire(Point::new(1.0, 1.0));

        assert!(tracker.is_empty());
        assert_eq!(card.updates(), 0);
    }

    #[test]
    fn single_listener_regardless_of_region_count() {
        let (tracker, source) = tracker();
        let subs: Vec<_> = (0..5)
            .map(|i| tracker.register(FakeRegion::at(i as f64, 0.0, 10.0, 10.0)))
            .collect();

        assert_eq!(source.attach_count(), 1);
        assert!(tracker.is_listening());

        drop(subs);
        assert_eq!(source.detach_count(), 1);
        assert!(!source.is_attached());
        assert!(!tracker.is_listening());
    }

    #[test]
    fn listener_survives_n_to_zero_to_n() {
        let (tracker, source) = tracker();
        let sub = tracker.register(FakeRegion::at(0.0, 0.0, 10.0, 10.0));
        drop(sub);
        source.fire(Point::new(1.0, 1.0));

        let card = FakeRegion::at(10.0, 10.0, 10.0, 10.0);
        let _sub = tracker.register(card.clone());
        source.fire(Point::new(15.0, 12.0));

        assert_eq!(source.attach_count(), 2);
        assert_eq!(card.last(), Some(RelativeCoordinate { x: 5.0, y: 2.0 }));
    }

    #[test]
    fn detached_region_is_skipped() {
        let (tracker, source) = tracker();
        let gone = FakeRegion::at(0.0, 0.0, 10.0, 10.0);
        gone.bounds.set(Measurement::Detached);
        let live = FakeRegion::at(0.0, 0.0, 10.0, 10.0);
        let _a = tracker.register(gone.clone());
        let _b = tracker.register(live.clone());

        source.fire(Point::new(4.0, 4.0));

        assert_eq!(gone.updates(), 0);
        assert_eq!(live.updates(), 1);
    }

    #[test]
    fn unmeasured_region_uses_zero_box() {
        let (tracker, source) = tracker();
        let card = FakeRegion::at(0.0, 0.0, 0.0, 0.0);
        card.bounds.set(Measurement::Unmeasured);
        let _sub = tracker.register(card.clone());

        source.fire(Point::new(42.0, 7.0));

        assert_eq!(card.last(), Some(RelativeCoordinate { x: 42.0, y: 7.0 }));
    }

    #[test]
    fn subscription_outliving_tracker_is_harmless() {
        let (tracker, _source) = tracker();
        let sub = tracker.register(FakeRegion::at(0.0, 0.0, 10.0, 10.0));
        drop(tracker);

        sub.unregister();
    }
}
