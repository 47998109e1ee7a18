use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot visibility state of a mounted section. Starts pending, flips to
/// revealed on the first intersecting notification and stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    entered: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(self) -> bool {
        self.entered
    }

    /// Feeds one observer notification. Returns true only when this call is
    /// the pending-to-revealed transition; everything after that is a no-op,
    /// including scrolling back out of view.
    pub fn on_intersect(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.entered {
            self.entered = true;
            true
        } else {
            false
        }
    }
}

/// Transition delay for the child at `index`, so siblings appear in
/// declaration order instead of all at once.
pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", index as u32 * step_ms)
}

/// Hands out stagger slots in call order. Sections with a mix of fixed and
/// conditional children use this so skipped children never leave gaps.
pub struct Stagger {
    step_ms: u32,
    next: usize,
}

impl Stagger {
    pub fn new(step_ms: u32) -> Self {
        Self { step_ms, next: 0 }
    }

    pub fn delay(&mut self) -> String {
        let style = stagger_style(self.next, self.step_ms);
        self.next += 1;
        style
    }

    /// Index the next child would get, for lists that compute their own
    /// offsets from it.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn skip(&mut self, count: usize) {
        self.next += count;
    }
}

/// Observes the returned node and reports whether it has entered the
/// viewport. The observer disconnects itself after the one transition and is
/// also disconnected on unmount, so no callback can outlive the section.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let setter = revealed.setter();
        use_effect_with_deps(
            move |_| {
                let state = Rc::new(RefCell::new(RevealState::new()));

                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                if state.borrow_mut().on_intersect(entry.is_intersecting()) {
                                    setter.set(true);
                                    observer.disconnect();
                                }
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(threshold));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();

                if let (Some(observer), Some(element)) =
                    (observer.as_ref(), node.cast::<web_sys::Element>())
                {
                    observer.observe(&element);
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    (node, *revealed)
}

/// Shared entrance transition. A section root carries `reveal-group` and
/// gains `visible` once revealed; children marked `reveal-item` slide up and
/// fade in, each offset by its own transition delay.
pub fn reveal_styles() -> Html {
    html! {
        <style>
            {r#"
            .reveal-group .reveal-item {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .reveal-group.visible .reveal-item {
                opacity: 1;
                transform: translateY(0);
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_exactly_once() {
        let mut state = RevealState::new();
        assert!(!state.has_entered());

        assert!(state.on_intersect(true));
        assert!(state.has_entered());

        // a second intersection is a no-op
        assert!(!state.on_intersect(true));
        assert!(state.has_entered());
    }

    #[test]
    fn leaving_the_viewport_never_resets() {
        let mut state = RevealState::new();
        assert!(state.on_intersect(true));
        assert!(!state.on_intersect(false));
        assert!(state.has_entered());
    }

    #[test]
    fn non_intersecting_notifications_keep_it_pending() {
        let mut state = RevealState::new();
        assert!(!state.on_intersect(false));
        assert!(!state.has_entered());
        assert!(state.on_intersect(true));
    }

    #[test]
    fn stagger_delays_strictly_increase_with_index() {
        let delays: Vec<String> = (0..5).map(|i| stagger_style(i, 200)).collect();
        for (i, delay) in delays.iter().enumerate() {
            assert_eq!(delay, &format!("transition-delay: {}ms;", i * 200));
        }
    }

    #[test]
    fn stagger_cursor_hands_out_consecutive_slots() {
        let mut stagger = Stagger::new(100);
        assert_eq!(stagger.delay(), "transition-delay: 0ms;");
        assert_eq!(stagger.delay(), "transition-delay: 100ms;");
        assert_eq!(stagger.position(), 2);

        stagger.skip(3);
        assert_eq!(stagger.delay(), "transition-delay: 500ms;");
    }
}
