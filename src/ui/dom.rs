//! Real DOM bindings
//!
//! Elements are queried once at startup; every mutation afterwards goes
//! through the cached handles. Missing elements degrade to no-ops.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::Page;

/// CSS hooks the markup provides
pub const SELECTOR_NAME: &str = ".profile-name";
pub const SELECTOR_BUTTONS: &str = ".profile-button";
pub const SELECTOR_CARD: &str = ".profile-card";

/// Handles to the fixed page elements
#[derive(Clone)]
pub struct DomPage {
    body: Option<HtmlElement>,
    name: Option<Element>,
    card: Option<Element>,
    buttons: Vec<HtmlElement>,
}

impl DomPage {
    pub fn query(document: &Document) -> Self {
        let name = document.query_selector(SELECTOR_NAME).ok().flatten();
        if name.is_none() {
            log::warn!("no {SELECTOR_NAME} element; eggs stay dormant");
        }

        let card = document.query_selector(SELECTOR_CARD).ok().flatten();
        if card.is_none() {
            log::warn!("no {SELECTOR_CARD} element; card effects will be skipped");
        }

        let mut buttons = Vec::new();
        if let Ok(list) = document.query_selector_all(SELECTOR_BUTTONS) {
            for index in 0..list.length() {
                if let Some(node) = list.get(index) {
                    if let Ok(element) = node.dyn_into::<HtmlElement>() {
                        buttons.push(element);
                    }
                }
            }
        }

        Self {
            body: document.body(),
            name,
            card,
            buttons,
        }
    }

    /// Click target for egg selection
    pub fn name_element(&self) -> Option<&Element> {
        self.name.as_ref()
    }
}

impl Page for DomPage {
    fn set_background(&self, color: &str) {
        if let Some(body) = &self.body {
            let _ = body.style().set_property("background-color", color);
        }
    }

    fn tint_buttons(&self, color: &str) {
        for button in &self.buttons {
            let _ = button.style().set_property("color", color);
        }
    }

    fn add_card_class(&self, class: &str) {
        if let Some(card) = &self.card {
            let _ = card.class_list().add_1(class);
        }
    }

    fn remove_card_class(&self, class: &str) {
        // A deferred removal may fire after the card has left the page.
        if let Some(card) = &self.card {
            let _ = card.class_list().remove_1(class);
        }
    }

    fn replace_card_html(&self, html: &str) {
        if let Some(card) = &self.card {
            card.set_inner_html(html);
        }
    }
}
