//! Profile Eggs - easter-egg picker for a profile landing page
//!
//! Core modules:
//! - `eggs`: Rule evaluation and effect planning (pure, deterministic)
//! - `platform`: Browser/native abstraction (storage, time, timers)
//! - `ui`: Applying planned effects to the page

pub mod eggs;
pub mod platform;
pub mod ui;

pub use eggs::{Egg, EggEffect, EggEnv, EggPlan, color_shuffle, egg_rules};
pub use platform::storage::Db;

/// Page behavior constants
pub mod consts {
    /// Delay before the first color shuffle after page ready (ms)
    pub const INITIAL_SHUFFLE_DELAY_MS: u32 = 100;
    /// How long the rare marker class stays on the profile card (ms)
    pub const RARE_CLASS_DURATION_MS: u32 = 5_000;

    /// Minimum random draw for the rare egg
    pub const RARE_THRESHOLD: f64 = 0.7;
    /// Quiet period required between rare eggs (3 days in ms)
    pub const RARE_BACKOFF_MS: f64 = 259_200_000.0;
    /// Storage slot (under the db prefix) holding the last rare trigger time
    pub const KEY_RARE: &str = "wrw";

    /// Special-day date: February 14th (1-based month)
    pub const SPECIAL_MONTH: u32 = 2;
    pub const SPECIAL_DAY_OF_MONTH: u32 = 14;
    /// Fixed background for the special-day egg
    pub const SPECIAL_BACKGROUND: &str = "#0f4c81";
    /// Decorative fragment swapped into the profile card on the special day
    pub const SPECIAL_HTML: &str =
        "<span class=\"egg-frt-code\" aria-hidden=\"true\">#0f4c81</span>";

    /// Marker classes toggled on the profile card
    pub const CLASS_SPECIAL: &str = "egg-frt";
    pub const CLASS_RARE: &str = "egg-wrw";

    /// Color shuffle parameters
    pub const HUE_MAX: i32 = 360;
    pub const BASE_SATURATION: u8 = 42;
    pub const BASE_LIGHTNESS: u8 = 42;
    pub const SECONDARY_LIGHTNESS: u8 = 35;
    pub const BASE_ALPHA: f32 = 0.9;
}
