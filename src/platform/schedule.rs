//! One-shot timers
//!
//! The page schedules exactly two kinds of deferred work: the startup color
//! shuffle and the rare egg's class removal. Timers hand back a cancel
//! handle; dropping the handle detaches the task, which then fires on its
//! own. The page never cancels, but tests and future callers can.

/// Deferred unit of work
pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled task
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    /// Handle that cannot cancel anything (scheduling failed, or the
    /// backend has no way to revoke)
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop the task if it has not fired yet
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    /// Run `task` once, `delay_ms` from now
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle;
}

/// setTimeout/clearTimeout scheduler
#[cfg(target_arch = "wasm32")]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return TaskHandle::detached();
        };
        let closure = Closure::once(task);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => {
                closure.forget();
                TaskHandle::new(move || {
                    if let Some(window) = web_sys::window() {
                        window.clear_timeout_with_handle(id);
                    }
                })
            }
            Err(_) => TaskHandle::detached(),
        }
    }
}

/// Scheduler driven by explicit time advancement, for tests and the native
/// smoke run. Tasks run in due order; insertion order breaks ties.
pub struct ManualScheduler {
    inner: std::rc::Rc<std::cell::RefCell<ManualQueue>>,
}

#[derive(Default)]
struct ManualQueue {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Pending>,
}

struct Pending {
    id: u64,
    due_ms: f64,
    task: Task,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            inner: Default::default(),
        }
    }

    /// Current simulated time
    pub fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    /// Tasks still waiting
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Advance simulated time, running every task that comes due. A task
    /// may schedule further tasks; those run too if they land inside the
    /// same advancement window.
    pub fn advance(&self, ms: f64) {
        let target = self.inner.borrow().now_ms + ms;
        loop {
            let next = {
                let mut queue = self.inner.borrow_mut();
                let due = queue
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due_ms <= target)
                    .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)))
                    .map(|(index, _)| index);
                due.map(|index| {
                    let pending = queue.pending.remove(index);
                    queue.now_ms = queue.now_ms.max(pending.due_ms);
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now_ms = target;
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        let id;
        {
            let mut queue = self.inner.borrow_mut();
            id = queue.next_id;
            queue.next_id += 1;
            let due_ms = queue.now_ms + delay_ms as f64;
            queue.pending.push(Pending { id, due_ms, task });
        }

        let inner = std::rc::Rc::downgrade(&self.inner);
        TaskHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().pending.retain(|pending| pending.id != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let log_in = log.clone();
        let record = move |tag: &'static str| -> Task {
            let log = log_in.clone();
            Box::new(move || log.borrow_mut().push(tag))
        };
        (log, record)
    }

    #[test]
    fn test_tasks_fire_only_when_due() {
        let (log, record) = recorder();
        let scheduler = ManualScheduler::new();
        scheduler.schedule(100, record("shuffle"));

        scheduler.advance(99.0);
        assert!(log.borrow().is_empty());
        scheduler.advance(1.0);
        assert_eq!(*log.borrow(), vec!["shuffle"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_due_order_then_insertion_order() {
        let (log, record) = recorder();
        let scheduler = ManualScheduler::new();
        scheduler.schedule(5_000, record("late"));
        scheduler.schedule(100, record("early-a"));
        scheduler.schedule(100, record("early-b"));

        scheduler.advance(10_000.0);
        assert_eq!(*log.borrow(), vec!["early-a", "early-b", "late"]);
    }

    #[test]
    fn test_cancel_before_due_drops_the_task() {
        let (log, record) = recorder();
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(100, record("dropped"));
        scheduler.schedule(100, record("kept"));

        handle.cancel();
        scheduler.advance(200.0);
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn test_cancel_after_fire_is_harmless() {
        let (log, record) = recorder();
        let scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(50, record("fired"));

        scheduler.advance(60.0);
        handle.cancel();
        assert_eq!(*log.borrow(), vec!["fired"]);
    }

    #[test]
    fn test_task_scheduled_from_task_runs_in_same_window() {
        let (log, record) = recorder();
        let scheduler = ManualScheduler::new();

        let inner_task = record("inner");
        let log_outer = log.clone();
        let chain = {
            let scheduler = ManualScheduler {
                inner: scheduler.inner.clone(),
            };
            Box::new(move || {
                log_outer.borrow_mut().push("outer");
                scheduler.schedule(10, inner_task);
            })
        };
        scheduler.schedule(100, chain);

        scheduler.advance(200.0);
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_time_advances_to_target_even_when_idle() {
        let scheduler = ManualScheduler::new();
        scheduler.advance(123.0);
        assert_eq!(scheduler.now_ms(), 123.0);
    }
}
