//! `web-sys` implementations of the tracker seams.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlElement, MouseEvent, Window};
use yew::NodeRef;

use super::geometry::{Point, Rect, RelativeCoordinate};
use super::pointer::{Measurement, PointerTracker, Region};
use super::scroll::{ScrollContainer, ScrollLayout, ScrollProgressTracker};
use super::source::EventSource;
use crate::config;

pub type PagePointerTracker = PointerTracker<WindowPointerSource>;
pub type PageScrollTracker = ScrollProgressTracker<WindowScrollSource>;

/// A window event listener that removes itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    fn attach(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            warn!("failed to attach {} listener: {:?}", event, err);
            return None;
        }
        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Window-wide `mousemove`, in client coordinates.
pub struct WindowPointerSource;

impl EventSource<Point> for WindowPointerSource {
    type Guard = Option<WindowListener>;

    fn attach(&self, handler: Rc<dyn Fn(Point)>) -> Self::Guard {
        WindowListener::attach("mousemove", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                handler(Point::new(event.client_x() as f64, event.client_y() as f64));
            }
        })
    }
}

/// Window `scroll` and `resize`, both of which move observation windows.
pub struct WindowScrollSource;

impl EventSource<()> for WindowScrollSource {
    type Guard = Vec<WindowListener>;

    fn attach(&self, handler: Rc<dyn Fn(())>) -> Self::Guard {
        ["scroll", "resize"]
            .into_iter()
            .filter_map(|event| {
                let handler = Rc::clone(&handler);
                WindowListener::attach(event, move |_| handler(()))
            })
            .collect()
    }
}

/// Fixed-period ticks for spring frames.
pub struct FrameClock {
    period_ms: u32,
}

impl FrameClock {
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms }
    }
}

/// Running interval of a [`FrameClock`]. Dropping it stops the ticks.
pub struct FrameTicker(Option<Interval>);

impl Drop for FrameTicker {
    fn drop(&mut self) {
        // Can be dropped from inside its own tick; clear it once that returns.
        if let Some(interval) = self.0.take() {
            spawn_local(async move { drop(interval) });
        }
    }
}

impl EventSource<()> for FrameClock {
    type Guard = FrameTicker;

    fn attach(&self, handler: Rc<dyn Fn(())>) -> Self::Guard {
        FrameTicker(Some(Interval::new(self.period_ms, move || handler(()))))
    }
}

/// A rendered element used as a spotlight region. Publishes through the
/// `--mouse-x` / `--mouse-y` custom properties.
pub struct ElementRegion {
    node: NodeRef,
}

impl ElementRegion {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl Region for ElementRegion {
    fn measure(&self) -> Measurement {
        let Some(element) = self.node.cast::<Element>() else {
            return Measurement::Detached;
        };
        // display: none and friends produce no boxes at all
        if element.get_client_rects().length() == 0 {
            return Measurement::Unmeasured;
        }
        let rect = element.get_bounding_client_rect();
        Measurement::Measured(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn publish(&self, coordinate: RelativeCoordinate) {
        if let Some(element) = self.node.cast::<HtmlElement>() {
            let style = element.style();
            for (name, value) in [
                (config::SPOTLIGHT_VAR_X, coordinate.css_x()),
                (config::SPOTLIGHT_VAR_Y, coordinate.css_y()),
            ] {
                if let Err(err) = style.set_property(name, &value) {
                    debug!("failed to set {} on spotlight region: {:?}", name, err);
                }
            }
        }
    }
}

/// A rendered section whose scroll progress is observed.
pub struct ElementContainer {
    node: NodeRef,
}

impl ElementContainer {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl ScrollContainer for ElementContainer {
    fn layout(&self) -> Option<ScrollLayout> {
        let element = self.node.cast::<Element>()?;
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        let rect = element.get_bounding_client_rect();
        Some(ScrollLayout {
            scroll_y,
            viewport_height,
            target_top: rect.top(),
            target_height: rect.height(),
        })
    }
}
