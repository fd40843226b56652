//! Profile Eggs entry point
//!
//! Wires the page once it is ready: the theme toggle, the startup color
//! shuffle and the click-driven egg selection.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use profile_eggs::consts::INITIAL_SHUFFLE_DELAY_MS;
    use profile_eggs::platform::schedule::{BrowserScheduler, Scheduler};
    use profile_eggs::platform::storage::LocalStorage;
    use profile_eggs::platform::time::SystemClock;
    use profile_eggs::ui::dom::DomPage;
    use profile_eggs::ui::{apply_effects, theme};
    use profile_eggs::{Db, EggEnv, color_shuffle, egg_rules};

    type PageEnv = EggEnv<SystemClock, rand::rngs::ThreadRng, LocalStorage>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Profile eggs starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if document.ready_state() == "loading" {
            let closure = Closure::once(move || setup());
            let _ = document
                .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            setup();
        }
    }

    fn setup() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");

        let page = DomPage::query(&document);
        theme::wire_toggle(&document);

        let env: Rc<RefCell<PageEnv>> = Rc::new(RefCell::new(EggEnv {
            clock: SystemClock,
            rng: rand::rng(),
            db: Db::new(LocalStorage),
        }));

        // Shuffle the colors shortly after load, click or no click.
        {
            let page = page.clone();
            let env = env.clone();
            let _ = BrowserScheduler.schedule(
                INITIAL_SHUFFLE_DELAY_MS,
                Box::new(move || {
                    let effects = color_shuffle(&mut env.borrow_mut().rng);
                    apply_effects(effects, &page, &BrowserScheduler);
                }),
            );
        }

        // Every click re-evaluates the rules from the top.
        let Some(name) = page.name_element().cloned() else {
            return;
        };
        let rules = egg_rules::<SystemClock, rand::rngs::ThreadRng, LocalStorage>();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let fired = rules.evaluate(&mut env.borrow_mut());
            log::info!("egg: {}", fired.rule);
            apply_effects(fired.output.effects, &page, &BrowserScheduler);
        });
        let _ = name.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();

        log::info!("Profile eggs ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rand::SeedableRng;

    use profile_eggs::platform::storage::MemoryStore;
    use profile_eggs::platform::time::SystemClock;
    use profile_eggs::{Db, EggEnv, egg_rules};

    env_logger::init();
    log::info!("profile-eggs (native) starting...");
    log::info!("Native mode is a smoke run - serve the wasm build for the real page");

    let mut env = EggEnv {
        clock: SystemClock,
        rng: rand_pcg::Pcg32::seed_from_u64(0xE66),
        db: Db::new(MemoryStore::new()),
    };
    let rules = egg_rules();

    for click in 1..=5 {
        let fired = rules.evaluate(&mut env);
        println!(
            "click {}: {} ({} effects)",
            click,
            fired.rule,
            fired.output.effects.len()
        );
    }
}
