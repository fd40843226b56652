//! Planned page mutations
//!
//! Rules never touch the DOM directly. They return effects; the `ui` layer
//! replays them, handing the timed ones to a scheduler. Keeping plans as
//! data is what lets every rule outcome be asserted without a browser.

/// A single DOM mutation planned by a rule
#[derive(Debug, Clone, PartialEq)]
pub enum EggEffect {
    /// Set the page-wide background color
    SetBackground(String),
    /// Tint every profile button
    TintButtons(String),
    /// Add a marker class to the profile card
    AddCardClass(&'static str),
    /// Remove a marker class from the profile card after a delay
    RemoveCardClassAfter {
        class: &'static str,
        delay_ms: u32,
    },
    /// Replace the profile card's inner markup
    ReplaceCardHtml(&'static str),
}
