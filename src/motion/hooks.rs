use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::dom::{ElementContainer, ElementRegion, FrameClock, PagePointerTracker, PageScrollTracker};
use super::reveal::{RevealState, ViewportOptions};
use super::scroll::{ScrollWindow, SpringDriver};
use super::spring::SpringConfig;

/// Frame period for the spring driver, in milliseconds.
const FRAME_MS: u32 = 16;

/// Registers the element behind `node` as a spotlight region for as long as
/// the calling component is mounted.
#[hook]
pub fn use_spotlight(node: NodeRef) {
    let tracker = use_context::<PagePointerTracker>();

    use_effect_with_deps(
        move |node| {
            let armed = match tracker {
                Some(tracker) => {
                    let subscription = tracker.register(Rc::new(ElementRegion::new(node.clone())));
                    Some((tracker, subscription))
                }
                None => {
                    warn!("use_spotlight called outside of the pointer tracker provider");
                    None
                }
            };
            move || {
                if let Some((tracker, subscription)) = armed {
                    tracker.unregister(&subscription);
                    debug!("spotlight region {} released, {} left", subscription.id(), tracker.len());
                }
            }
        },
        node,
    );
}

/// Scroll progress of the element behind `node` through `window`, in `[0, 1]`.
/// With `smoothing`, the value follows the raw progress on a spring.
#[hook]
pub fn use_scroll_progress(node: NodeRef, window: ScrollWindow, smoothing: Option<SpringConfig>) -> f64 {
    let tracker = use_context::<PageScrollTracker>();
    let progress = use_state(|| 0.0_f64);

    {
        let setter = progress.setter();
        use_effect_with_deps(
            move |node| {
                let mut raw = None;
                let mut driven = None;
                if let Some(tracker) = tracker {
                    let handle = tracker.observe(
                        Rc::new(ElementContainer::new(node.clone())),
                        window,
                        smoothing,
                    );
                    setter.set(handle.value());

                    if handle.is_smoothed() {
                        let setter = setter.clone();
                        driven = Some(SpringDriver::new(
                            handle,
                            FrameClock::new(FRAME_MS),
                            f64::from(FRAME_MS) / 1000.0,
                            move |value| setter.set(value),
                        ));
                    } else {
                        let setter = setter.clone();
                        handle.on_change(move |value| setter.set(value));
                        raw = Some(handle);
                    }
                } else {
                    warn!("use_scroll_progress called outside of the scroll tracker provider");
                }
                move || {
                    drop(driven);
                    drop(raw);
                }
            },
            node,
        );
    }

    *progress
}

/// `true` once the element behind `node` has entered the viewport. Never
/// flips back.
#[hook]
pub fn use_in_view(node: NodeRef, options: ViewportOptions) -> bool {
    let visible = use_state(|| false);
    let reveal = use_mut_ref(RevealState::default);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let mut armed = None;
                let revealed = reveal.borrow().is_revealed();
                let element = node.cast::<web_sys::Element>().filter(|_| !revealed);
                if let Some(element) = element {
                    let on_reveal = visible.clone();
                    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        let hit = entries.iter().any(|entry| {
                            entry
                                .dyn_into::<IntersectionObserverEntry>()
                                .map(|entry| entry.is_intersecting())
                                .unwrap_or(false)
                        });
                        if reveal.borrow_mut().observe(hit) {
                            on_reveal.set(true);
                            observer.disconnect();
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_root_margin(options.margin);
                    init.set_threshold(&JsValue::from_f64(options.threshold));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            armed = Some(Observer { observer, _callback: callback });
                        }
                        Err(err) => {
                            debug!("IntersectionObserver unavailable ({:?}), revealing immediately", err);
                            visible.set(true);
                        }
                    }
                }
                move || drop(armed)
            },
            (node, options),
        );
    }

    *visible
}

struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
