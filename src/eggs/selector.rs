//! The profile page's egg rules
//!
//! Three rules, first match wins:
//! 1. special day (February 14th): fixed blue background and card fragment
//! 2. rare: random draw over threshold, at most once per backoff window
//! 3. fallback: shuffle the page colors
//!
//! The rare rule records its trigger time while the predicate evaluates,
//! before the action runs. Keep it that way: moving the write into the
//! action changes when the timestamp lands relative to the draw, which is
//! observable across tabs.

use crate::consts::{
    CLASS_RARE, CLASS_SPECIAL, KEY_RARE, RARE_BACKOFF_MS, RARE_CLASS_DURATION_MS, RARE_THRESHOLD,
    SPECIAL_BACKGROUND, SPECIAL_DAY_OF_MONTH, SPECIAL_HTML, SPECIAL_MONTH,
};
use crate::platform::storage::{Db, KvStore};
use crate::platform::time::Clock;

use super::color::ColorPair;
use super::effect::EggEffect;
use super::random::UniformSource;
use super::rules::RuleSet;

/// Which egg a click resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Egg {
    SpecialDay,
    Rare,
    Shuffle,
}

/// A selected egg and the mutations it wants applied
#[derive(Debug, Clone, PartialEq)]
pub struct EggPlan {
    pub egg: Egg,
    pub effects: Vec<EggEffect>,
}

/// Everything rule evaluation is allowed to see
pub struct EggEnv<C, R, S: KvStore> {
    pub clock: C,
    pub rng: R,
    pub db: Db<S>,
}

/// The default shuffle: one hue draw, base on the page background,
/// secondary on every profile button. Also runs on its own shortly after
/// load, independent of any click.
pub fn color_shuffle(rng: &mut impl UniformSource) -> Vec<EggEffect> {
    let pair = ColorPair::random(rng);
    vec![
        EggEffect::SetBackground(pair.base.to_string()),
        EggEffect::TintButtons(pair.secondary.to_string()),
    ]
}

fn special_day_plan() -> EggPlan {
    EggPlan {
        egg: Egg::SpecialDay,
        effects: vec![
            EggEffect::SetBackground(SPECIAL_BACKGROUND.to_string()),
            EggEffect::AddCardClass(CLASS_SPECIAL),
            EggEffect::ReplaceCardHtml(SPECIAL_HTML),
        ],
    }
}

fn rare_plan() -> EggPlan {
    EggPlan {
        egg: Egg::Rare,
        effects: vec![
            EggEffect::AddCardClass(CLASS_RARE),
            EggEffect::RemoveCardClassAfter {
                class: CLASS_RARE,
                delay_ms: RARE_CLASS_DURATION_MS,
            },
        ],
    }
}

/// Build the click rule set. Every click re-evaluates from the top, so the
/// selected egg can change between clicks within one page view.
pub fn egg_rules<C, R, S>() -> RuleSet<EggEnv<C, R, S>, EggPlan>
where
    C: Clock + 'static,
    R: UniformSource + 'static,
    S: KvStore + 'static,
{
    RuleSet::<EggEnv<C, R, S>, EggPlan>::builder()
        .when(
            "special-day",
            |env| {
                let today = env.clock.today();
                today.month == SPECIAL_MONTH && today.day == SPECIAL_DAY_OF_MONTH
            },
            |_env| special_day_plan(),
        )
        .when(
            "rare",
            |env| {
                // Draw first; a low roll never touches storage.
                if env.rng.draw() < RARE_THRESHOLD {
                    return false;
                }
                let now = env.clock.now_ms();
                let quiet = match env.db.get::<i64>(KEY_RARE) {
                    None => true,
                    Some(last) => now - last as f64 >= RARE_BACKOFF_MS,
                };
                if quiet {
                    // Recorded during evaluation, not in the action.
                    env.db.set(KEY_RARE, &(now as i64));
                }
                quiet
            },
            |_env| rare_plan(),
        )
        .otherwise("shuffle", |env| EggPlan {
            egg: Egg::Shuffle,
            effects: color_shuffle(&mut env.rng),
        })
}
