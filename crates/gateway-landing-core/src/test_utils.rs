//! Test doubles for the environment, timer and clipboard capabilities
//!
//! All doubles are cheap `Rc` handles: keep a clone in the test to drive
//! or inspect the instance handed to [`crate::LandingPage`].

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::task::{Poll, Waker};
use std::time::Duration;

use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::clipboard::ClipboardStrategy;
use crate::environment::Environment;
use crate::error::{CopyError, CopyResult, Result};
use crate::scheduler::Scheduler;

// ─────────────────────────────────────────────────────────────────────────────
// FakeEnvironment
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct EnvState {
    language: Option<String>,
    width: Option<u32>,
    origin: Option<String>,
    listeners: BTreeMap<u64, Rc<dyn Fn()>>,
    next_id: u64,
}

/// Scriptable environment. Starts with every signal absent.
#[derive(Clone, Default)]
pub struct FakeEnvironment {
    state: Rc<RefCell<EnvState>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(self, tag: &str) -> Self {
        self.state.borrow_mut().language = Some(tag.to_string());
        self
    }

    pub fn with_width(self, width: u32) -> Self {
        self.state.borrow_mut().width = Some(width);
        self
    }

    pub fn with_origin(self, origin: &str) -> Self {
        self.state.borrow_mut().origin = Some(origin.to_string());
        self
    }

    /// Change the width and fire every resize listener
    pub fn resize_to(&self, width: u32) {
        self.state.borrow_mut().width = Some(width);
        let listeners: Vec<_> = self.state.borrow().listeners.values().cloned().collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl Environment for FakeEnvironment {
    type Subscription = u64;

    fn language(&self) -> Option<String> {
        self.state.borrow().language.clone()
    }

    fn viewport_width(&self) -> Option<u32> {
        self.state.borrow().width
    }

    fn origin(&self) -> Option<String> {
        self.state.borrow().origin.clone()
    }

    fn subscribe_resize(&self, callback: Box<dyn Fn()>) -> Result<u64> {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.insert(id, Rc::from(callback));
        Ok(id)
    }

    fn unsubscribe_resize(&self, subscription: u64) {
        self.state.borrow_mut().listeners.remove(&subscription);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// VirtualScheduler
// ─────────────────────────────────────────────────────────────────────────────

enum TimerCallback {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn Fn()>),
}

struct TimerEntry {
    due: u64,
    period: u64,
    callback: TimerCallback,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    timers: BTreeMap<u64, TimerEntry>,
    running: Option<u64>,
    running_cancelled: bool,
}

/// Handle to a timer registered with [`VirtualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

/// Deterministic scheduler on a virtual millisecond clock.
///
/// Nothing fires until [`VirtualScheduler::advance`] moves the clock;
/// timers due at the same instant fire in registration order.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of timers still scheduled
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move the clock forward by `ms`, firing everything that falls due
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;

        loop {
            let next = {
                let clock = self.clock.borrow();
                clock
                    .timers
                    .iter()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(id, entry)| (entry.due, **id))
                    .map(|(id, _)| *id)
            };
            let Some(id) = next else { break };

            let entry = {
                let mut clock = self.clock.borrow_mut();
                let Some(entry) = clock.timers.remove(&id) else { break };
                clock.now = entry.due;
                clock.running = Some(id);
                clock.running_cancelled = false;
                entry
            };

            match entry.callback {
                TimerCallback::Once(callback) => callback(),
                TimerCallback::Repeat(callback) => {
                    callback();
                    let mut clock = self.clock.borrow_mut();
                    if !clock.running_cancelled {
                        clock.timers.insert(
                            id,
                            TimerEntry {
                                due: entry.due + entry.period,
                                period: entry.period,
                                callback: TimerCallback::Repeat(callback),
                            },
                        );
                    }
                }
            }

            self.clock.borrow_mut().running = None;
        }

        self.clock.borrow_mut().now = target;
    }

    fn register(&self, delay: Duration, callback: TimerCallback) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        clock.next_id += 1;
        let id = clock.next_id;
        let period = (delay.as_millis() as u64).max(1);
        let due = clock.now + period;
        clock.timers.insert(
            id,
            TimerEntry {
                due,
                period,
                callback,
            },
        );
        TimerId(id)
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = TimerId;

    fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> Result<TimerId> {
        Ok(self.register(period, TimerCallback::Repeat(callback)))
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Result<TimerId> {
        Ok(self.register(delay, TimerCallback::Once(callback)))
    }

    fn cancel(&self, handle: TimerId) {
        let mut clock = self.clock.borrow_mut();
        clock.timers.remove(&handle.0);
        if clock.running == Some(handle.0) {
            clock.running_cancelled = true;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard doubles
// ─────────────────────────────────────────────────────────────────────────────

/// Strategy with a fixed availability and outcome that records writes
pub struct FakeClipboard {
    name: &'static str,
    available: bool,
    outcome: CopyResult<()>,
    writes: Rc<RefCell<Vec<String>>>,
}

impl FakeClipboard {
    pub fn working(name: &'static str) -> Self {
        Self {
            name,
            available: true,
            outcome: Ok(()),
            writes: Rc::default(),
        }
    }

    pub fn failing(name: &'static str, reason: &str) -> Self {
        Self {
            outcome: Err(CopyError::failed(reason)),
            ..Self::working(name)
        }
    }

    pub fn unavailable(name: &'static str) -> Self {
        Self {
            available: false,
            ..Self::working(name)
        }
    }

    /// Shared log of every attempted write
    pub fn writes(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.writes)
    }
}

impl ClipboardStrategy for FakeClipboard {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn write<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, CopyResult<()>> {
        self.writes.borrow_mut().push(text.to_string());
        let outcome = self.outcome.clone();
        async move { outcome }.boxed_local()
    }
}

#[derive(Default)]
struct GateState {
    outcome: Option<CopyResult<()>>,
    waker: Option<Waker>,
}

/// Strategy whose writes stay pending until [`DeferredClipboard::resolve`]
#[derive(Clone, Default)]
pub struct DeferredClipboard {
    gate: Rc<RefCell<GateState>>,
    started: Rc<Cell<usize>>,
}

impl DeferredClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete the pending write with `outcome`
    pub fn resolve(&self, outcome: CopyResult<()>) {
        let waker = {
            let mut gate = self.gate.borrow_mut();
            gate.outcome = Some(outcome);
            gate.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }

    /// Number of writes started so far
    pub fn started(&self) -> usize {
        self.started.get()
    }
}

impl ClipboardStrategy for DeferredClipboard {
    fn name(&self) -> &'static str {
        "deferred"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn write<'a>(&'a self, _text: &'a str) -> LocalBoxFuture<'a, CopyResult<()>> {
        self.started.set(self.started.get() + 1);
        let gate = Rc::clone(&self.gate);
        std::future::poll_fn(move |cx| {
            let mut gate = gate.borrow_mut();
            match gate.outcome.take() {
                Some(outcome) => Poll::Ready(outcome),
                None => {
                    gate.waker = Some(cx.waker().clone());
                    Poll::Pending
                }
            }
        })
        .boxed_local()
    }
}
