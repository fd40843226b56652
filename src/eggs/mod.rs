//! Egg selection core
//!
//! Decides, per click, which visual egg the page gets. This module must stay
//! pure with respect to the platform:
//! - Time, randomness and storage come in through the `EggEnv` context
//! - Decisions go out as `EggEffect` plans; no DOM access here
//! - Rule order is fixed and first match wins

pub mod color;
pub mod effect;
pub mod random;
pub mod rules;
pub mod selector;

pub use color::{ColorPair, Hsla};
pub use effect::EggEffect;
pub use random::{UniformSource, between};
pub use rules::{Firing, RuleSet};
pub use selector::{Egg, EggEnv, EggPlan, color_shuffle, egg_rules};
