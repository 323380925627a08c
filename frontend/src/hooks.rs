use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::dom::BrowserViewport;
use crate::viewport::{LayoutProbe, ViewportSnapshot, ViewportWatcher};

/// Something that emits scroll events.
pub trait ScrollTarget {
    type Listener;

    fn listen(&self, handler: Box<dyn Fn()>) -> Option<Self::Listener>;
    fn unlisten(&self, listener: &Self::Listener);
}

impl ScrollTarget for Window {
    type Listener = Closure<dyn Fn()>;

    fn listen(&self, handler: Box<dyn Fn()>) -> Option<Self::Listener> {
        let callback = Closure::wrap(handler);
        if let Err(err) = self.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            log::warn!("could not subscribe to scroll events: {:?}", err);
            return None;
        }
        Some(callback)
    }

    fn unlisten(&self, callback: &Self::Listener) {
        if let Err(err) = self.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            log::warn!("could not remove scroll listener: {:?}", err);
        }
    }
}

/// A scroll listener, removed again when the guard is dropped.
pub struct ScrollSubscription<T: ScrollTarget> {
    target: T,
    listener: T::Listener,
}

impl<T: ScrollTarget> ScrollSubscription<T> {
    pub fn attach<F>(target: T, handler: F) -> Option<Self>
    where
        F: Fn() + 'static,
    {
        let listener = target.listen(Box::new(handler))?;
        Some(ScrollSubscription { target, listener })
    }
}

impl<T: ScrollTarget> Drop for ScrollSubscription<T> {
    fn drop(&mut self) {
        self.target.unlisten(&self.listener);
    }
}

/// Observes the layout once, then again on every scroll event from `target`.
///
/// `on_change` receives the new state whenever an observation changed it. Observation stops
/// when the returned subscription is dropped.
pub fn watch_viewport<T, P, F, C>(
    target: T,
    watcher: Rc<RefCell<ViewportWatcher>>,
    probe: F,
    on_change: C,
) -> Option<ScrollSubscription<T>>
where
    T: ScrollTarget,
    P: LayoutProbe,
    F: Fn() -> Option<P> + 'static,
    C: Fn(ViewportSnapshot) + 'static,
{
    let refresh = move || {
        let Some(probe) = probe() else {
            return;
        };
        let mut watcher = watcher.borrow_mut();
        if watcher.observe(&probe) {
            on_change(watcher.snapshot());
        }
    };

    refresh(); // Content already on screen at load
    ScrollSubscription::attach(target, refresh)
}

/// Tracks the nav threshold and block reveals for as long as the calling component is mounted.
#[hook]
pub fn use_viewport_watcher() -> Rc<ViewportSnapshot> {
    let watcher = use_mut_ref(ViewportWatcher::default);
    let snapshot = use_state(|| Rc::new(ViewportSnapshot::default()));

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    watch_viewport(window, watcher, BrowserViewport::current, move |next| {
                        snapshot.set(Rc::new(next))
                    })
                });

                move || drop(subscription)
            },
            (),
        );
    }

    (*snapshot).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::BlockRect;
    use std::cell::Cell;

    /// Delivers scroll events synchronously to whoever is listening.
    #[derive(Clone, Default)]
    struct FakeWindow {
        listeners: Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>,
        next_id: Rc<Cell<usize>>,
    }

    impl FakeWindow {
        fn scroll(&self) {
            let handlers: Vec<Rc<dyn Fn()>> = self.listeners.borrow().iter().map(|(_, h)| h.clone()).collect();
            for handler in handlers {
                handler();
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollTarget for FakeWindow {
        type Listener = usize;

        fn listen(&self, handler: Box<dyn Fn()>) -> Option<usize> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, Rc::from(handler)));
            Some(id)
        }

        fn unlisten(&self, listener: &usize) {
            self.listeners.borrow_mut().retain(|(id, _)| id != listener);
        }
    }

    /// 800px viewport over a page with two tagged blocks at fixed document offsets.
    struct Page {
        offset: f64,
    }

    impl LayoutProbe for Page {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn viewport_height(&self) -> f64 {
            800.0
        }

        fn tagged_blocks(&self) -> Vec<BlockRect> {
            vec![
                BlockRect::new("about-header", 300.0 - self.offset),
                BlockRect::new("footer", 3000.0 - self.offset),
            ]
        }
    }

    struct Harness {
        window: FakeWindow,
        offset: Rc<Cell<f64>>,
        updates: Rc<RefCell<Vec<ViewportSnapshot>>>,
    }

    impl Harness {
        fn mount() -> (Self, Option<ScrollSubscription<FakeWindow>>) {
            let window = FakeWindow::default();
            let offset = Rc::new(Cell::new(0.0));
            let updates = Rc::new(RefCell::new(Vec::new()));

            let probe_offset = offset.clone();
            let sink = updates.clone();
            let subscription = watch_viewport(
                window.clone(),
                Rc::new(RefCell::new(ViewportWatcher::default())),
                move || Some(Page { offset: probe_offset.get() }),
                move |next| sink.borrow_mut().push(next),
            );
            (Harness { window, offset, updates }, subscription)
        }

        fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            self.window.scroll();
        }

        fn update_count(&self) -> usize {
            self.updates.borrow().len()
        }
    }

    #[test]
    fn mount_reveals_visible_blocks_without_a_scroll_event() {
        let (harness, subscription) = Harness::mount();
        assert!(subscription.is_some());
        assert_eq!(harness.update_count(), 1);

        let first = harness.updates.borrow()[0].clone();
        assert!(first.is_visible("about-header"));
        assert!(!first.is_visible("footer"));
        assert!(!first.scrolled());
    }

    #[test]
    fn scroll_events_update_state_while_mounted() {
        let (harness, _subscription) = Harness::mount();
        assert_eq!(harness.window.listener_count(), 1);

        harness.scroll_to(2600.0);
        assert_eq!(harness.update_count(), 2);
        let latest = harness.updates.borrow().last().cloned().unwrap();
        assert!(latest.scrolled());
        assert!(latest.is_visible("footer"));
        assert!(latest.is_visible("about-header"));

        harness.scroll_to(2610.0);
        assert_eq!(harness.update_count(), 2, "nothing new to render");
    }

    #[test]
    fn dropping_the_subscription_stops_updates() {
        let (harness, subscription) = Harness::mount();
        assert_eq!(harness.window.listener_count(), 1);

        drop(subscription);
        assert_eq!(harness.window.listener_count(), 0);

        harness.scroll_to(2600.0);
        assert_eq!(harness.update_count(), 1);
    }

    #[test]
    fn each_subscription_removes_only_its_own_listener() {
        let window = FakeWindow::default();
        let first = ScrollSubscription::attach(window.clone(), || ()).unwrap();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let second = ScrollSubscription::attach(window.clone(), move || counter.set(counter.get() + 1)).unwrap();

        drop(first);
        window.scroll();
        assert_eq!(hits.get(), 1);

        drop(second);
        window.scroll();
        assert_eq!(hits.get(), 1);
        assert_eq!(window.listener_count(), 0);
    }
}
