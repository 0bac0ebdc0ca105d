use std::rc::Rc;

/// Something global the trackers can subscribe to, e.g. the window's
/// `mousemove` or `scroll` events.
///
/// `attach` hands back a guard; the subscription lives exactly as long as
/// the guard does.
pub trait EventSource<E> {
    type Guard;

    fn attach(&self, handler: Rc<dyn Fn(E)>) -> Self::Guard;
}

#[cfg(test)]
pub mod testing {
    use super::EventSource;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory source that lets tests fire events by hand and count
    /// attach/detach calls.
    pub struct ManualSource<E> {
        handler: Rc<RefCell<Option<Rc<dyn Fn(E)>>>>,
        attached: Rc<Cell<usize>>,
        detached: Rc<Cell<usize>>,
    }

    pub struct ManualGuard<E> {
        handler: Rc<RefCell<Option<Rc<dyn Fn(E)>>>>,
        detached: Rc<Cell<usize>>,
    }

    impl<E> Drop for ManualGuard<E> {
        fn drop(&mut self) {
            self.handler.borrow_mut().take();
            self.detached.set(self.detached.get() + 1);
        }
    }

    impl<E> ManualSource<E> {
        pub fn new() -> Self {
            Self {
                handler: Rc::new(RefCell::new(None)),
                attached: Rc::new(Cell::new(0)),
                detached: Rc::new(Cell::new(0)),
            }
        }

        /// Shares the counters and handler slot with `self`.
        pub fn probe(&self) -> Self {
            Self {
                handler: Rc::clone(&self.handler),
                attached: Rc::clone(&self.attached),
                detached: Rc::clone(&self.detached),
            }
        }

        pub fn fire(&self, event: E) {
            let handler = self.handler.borrow().clone();
            if let Some(handler) = handler {
                handler(event);
            }
        }

        pub fn is_attached(&self) -> bool {
            self.handler.borrow().is_some()
        }

        pub fn attach_count(&self) -> usize {
            self.attached.get()
        }

        pub fn detach_count(&self) -> usize {
            self.detached.get()
        }
    }

    impl<E> EventSource<E> for ManualSource<E> {
        type Guard = ManualGuard<E>;

        fn attach(&self, handler: Rc<dyn Fn(E)>) -> ManualGuard<E> {
            assert!(
                self.handler.borrow().is_none(),
                "source attached twice without a detach in between"
            );
            *self.handler.borrow_mut() = Some(handler);
            self.attached.set(self.attached.get() + 1);
            ManualGuard {
                handler: Rc::clone(&self.handler),
                detached: Rc::clone(&self.detached),
            }
        }
    }
}
