//! Page mutation layer
//!
//! `Page` names the handful of DOM touch points the eggs are allowed to
//! mutate; `apply_effects` replays a plan against it. The real page lives
//! in `dom`; tests run against a recording fake.

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod theme;

use crate::eggs::EggEffect;
use crate::platform::schedule::Scheduler;

/// DOM touch points for egg effects
pub trait Page {
    fn set_background(&self, color: &str);
    fn tint_buttons(&self, color: &str);
    fn add_card_class(&self, class: &str);
    /// Must tolerate the card having left the page since scheduling
    fn remove_card_class(&self, class: &str);
    fn replace_card_html(&self, html: &str);
}

/// Apply a plan: immediate effects now, deferred ones via the scheduler.
/// Deferred removals are fire-and-forget; the page never cancels them.
pub fn apply_effects<P, S>(effects: Vec<EggEffect>, page: &P, scheduler: &S)
where
    P: Page + Clone + 'static,
    S: Scheduler,
{
    for effect in effects {
        match effect {
            EggEffect::SetBackground(color) => page.set_background(&color),
            EggEffect::TintButtons(color) => page.tint_buttons(&color),
            EggEffect::AddCardClass(class) => page.add_card_class(class),
            EggEffect::ReplaceCardHtml(html) => page.replace_card_html(html),
            EggEffect::RemoveCardClassAfter { class, delay_ms } => {
                let page = page.clone();
                let _ = scheduler.schedule(
                    delay_ms,
                    Box::new(move || page.remove_card_class(class)),
                );
            }
        }
    }
}

/// Recording page double. `detach_card` simulates the card leaving the DOM
/// before a deferred removal fires.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct FakePage {
    inner: std::rc::Rc<std::cell::RefCell<FakeState>>,
}

#[cfg(test)]
#[derive(Default)]
struct FakeState {
    background: Option<String>,
    button_color: Option<String>,
    card_classes: Vec<String>,
    card_html: Option<String>,
    card_present: bool,
}

#[cfg(test)]
impl FakePage {
    pub fn new() -> Self {
        let page = Self::default();
        page.inner.borrow_mut().card_present = true;
        page
    }

    pub fn background(&self) -> Option<String> {
        self.inner.borrow().background.clone()
    }

    pub fn button_color(&self) -> Option<String> {
        self.inner.borrow().button_color.clone()
    }

    pub fn has_card_class(&self, class: &str) -> bool {
        self.inner.borrow().card_classes.iter().any(|c| c == class)
    }

    pub fn card_html(&self) -> Option<String> {
        self.inner.borrow().card_html.clone()
    }

    pub fn detach_card(&self) {
        self.inner.borrow_mut().card_present = false;
    }
}

#[cfg(test)]
impl Page for FakePage {
    fn set_background(&self, color: &str) {
        self.inner.borrow_mut().background = Some(color.to_string());
    }

    fn tint_buttons(&self, color: &str) {
        self.inner.borrow_mut().button_color = Some(color.to_string());
    }

    fn add_card_class(&self, class: &str) {
        let mut state = self.inner.borrow_mut();
        if state.card_present && !state.card_classes.iter().any(|c| c == class) {
            state.card_classes.push(class.to_string());
        }
    }

    fn remove_card_class(&self, class: &str) {
        let mut state = self.inner.borrow_mut();
        if state.card_present {
            state.card_classes.retain(|c| c != class);
        }
    }

    fn replace_card_html(&self, html: &str) {
        let mut state = self.inner.borrow_mut();
        if state.card_present {
            state.card_html = Some(html.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::schedule::ManualScheduler;

    #[test]
    fn test_immediate_effects_apply_in_order() {
        let page = FakePage::new();
        let scheduler = ManualScheduler::new();

        apply_effects(
            vec![
                EggEffect::SetBackground("hsla(10,42%,42%,0.9)".to_string()),
                EggEffect::TintButtons("hsla(10,42%,35%,1)".to_string()),
                EggEffect::AddCardClass("egg-frt"),
            ],
            &page,
            &scheduler,
        );

        assert_eq!(page.background().as_deref(), Some("hsla(10,42%,42%,0.9)"));
        assert_eq!(page.button_color().as_deref(), Some("hsla(10,42%,35%,1)"));
        assert!(page.has_card_class("egg-frt"));
    }

    #[test]
    fn test_deferred_removal_waits_for_the_clock() {
        let page = FakePage::new();
        let scheduler = ManualScheduler::new();

        apply_effects(
            vec![
                EggEffect::AddCardClass("egg-wrw"),
                EggEffect::RemoveCardClassAfter {
                    class: "egg-wrw",
                    delay_ms: 5_000,
                },
            ],
            &page,
            &scheduler,
        );

        assert!(page.has_card_class("egg-wrw"));
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(5_000.0);
        assert!(!page.has_card_class("egg-wrw"));
    }

    #[test]
    fn test_deferred_removal_survives_a_detached_card() {
        let page = FakePage::new();
        let scheduler = ManualScheduler::new();

        apply_effects(
            vec![
                EggEffect::AddCardClass("egg-wrw"),
                EggEffect::RemoveCardClassAfter {
                    class: "egg-wrw",
                    delay_ms: 5_000,
                },
            ],
            &page,
            &scheduler,
        );

        page.detach_card();
        // Must not panic; the removal just has nothing left to touch.
        scheduler.advance(5_000.0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_card_html_replacement() {
        let page = FakePage::new();
        let scheduler = ManualScheduler::new();

        apply_effects(
            vec![EggEffect::ReplaceCardHtml("<span>#0f4c81</span>")],
            &page,
            &scheduler,
        );
        assert_eq!(page.card_html().as_deref(), Some("<span>#0f4c81</span>"));
    }
}
