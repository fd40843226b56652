//! Dark mode toggle
//!
//! Mirrors the header checkbox onto a root `dark` class. The stylesheet
//! does the rest.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

/// Class flipped on the document element
pub const DARK_THEME_CLASS: &str = "dark";
/// Checkbox that drives the theme
pub const TOGGLE_ID: &str = "theme-checkbox";

pub fn wire_toggle(document: &Document) {
    let Some(toggle) = document.get_element_by_id(TOGGLE_ID) else {
        log::warn!("no #{TOGGLE_ID} element; theme toggle disabled");
        return;
    };

    let root = document.document_element();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        if let Some(root) = &root {
            let _ = root.class_list().toggle(DARK_THEME_CLASS);
        }
    });
    let _ = toggle.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
