//! Cross-browser wheel listener registration and delta normalization.
//!
//! Browsers fire different event names for the scroll wheel, and some fire more
//! than one of them for a single physical scroll. Registering a listener for all
//! of them would invoke it several times per tick.
//!
//! Instead, the first registration attaches a one-shot detector under every
//! candidate name. Whichever candidate fires first wins: its dialect is recorded
//! in the shared [`WheelSupport`], the detectors are removed, the real listener is
//! attached under the winning name and invoked with the triggering event. Every
//! later registration goes straight to the detected name.
//!
//! The event system itself is abstracted behind [`WheelTarget`] so the state
//! machine runs the same against the DOM and against in-memory test targets.

#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A wheel event name, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDialect {
    /// Standard `wheel`.
    Wheel,
    /// Legacy `mousewheel` (`wheelDelta`).
    MouseWheel,
    /// Legacy Gecko `DOMMouseScroll` (`detail`).
    DomMouseScroll,
}

impl WheelDialect {
    /// Every dialect, highest priority first.
    pub const CANDIDATES: [Self; 3] = [Self::Wheel, Self::MouseWheel, Self::DomMouseScroll];

    /// The DOM event name for this dialect.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
            Self::MouseWheel => "mousewheel",
            Self::DomMouseScroll => "DOMMouseScroll",
        }
    }

    #[must_use]
    pub fn from_event_name(name: &str) -> Option<Self> {
        Self::CANDIDATES.into_iter().find(|d| d.event_name() == name)
    }
}

/// Canonical single-step wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDelta {
    /// Scroll up / away from the user.
    Negative,
    /// Scroll down / towards the user. Also the default when no delta is known.
    Positive,
}

impl WheelDelta {
    /// `-1.0` or `+1.0`.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }
}

/// Raw delta fields of a wheel event, across dialects.
///
/// A field the event does not carry is `None`.
pub trait WheelEventData {
    /// The event name the event was dispatched under.
    fn event_type(&self) -> String;
    /// `deltaY` of the standard `wheel` event.
    fn delta_y(&self) -> Option<f64>;
    /// `wheelDelta` of `mousewheel` (positive = scroll up).
    fn wheel_delta(&self) -> Option<f64>;
    /// `detail` of `DOMMouseScroll`.
    fn detail(&self) -> Option<f64>;
}

/// Reduce an event's delta to a single signed step.
///
/// Takes the first non-zero, non-NaN of `deltaY`, `-wheelDelta` and `detail`,
/// converts it to a 32-bit integer and shifts it right by 10 bits. A zero result
/// counts as positive.
#[must_use]
pub fn normalized_delta<E: WheelEventData + ?Sized>(event: &E) -> WheelDelta {
    let raw = [event.delta_y(), event.wheel_delta().map(|v| -v), event.detail()]
        .into_iter()
        .flatten()
        .find(|v| *v != 0.0 && !v.is_nan())
        .unwrap_or(0.0);
    if (to_int32(raw) >> 10) < 0 { WheelDelta::Negative } else { WheelDelta::Positive }
}

/// ECMAScript `ToInt32`: truncate, then wrap modulo 2^32 into the `i32` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32 as i32
}

thread_local! {
    static PROCESS_SUPPORT: WheelSupport = WheelSupport::new();
}

/// Which wheel dialect the runtime has been seen to fire.
///
/// Clones share the same state. Written at most once; the first detection
/// sticks for the lifetime of the handle.
#[derive(Debug, Clone, Default)]
pub struct WheelSupport {
    detected: Rc<Cell<Option<WheelDialect>>>,
}

impl WheelSupport {
    /// A fresh, undetected state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The state shared by every registration on this thread.
    #[must_use]
    pub fn process() -> Self {
        PROCESS_SUPPORT.with(Clone::clone)
    }

    #[must_use]
    pub fn detected(&self) -> Option<WheelDialect> {
        self.detected.get()
    }

    /// Forget the detected dialect.
    pub fn reset(&self) {
        self.detected.set(None);
    }

    fn record(&self, dialect: WheelDialect) {
        if self.detected.get().is_none() {
            log::info!("wheel dialect detected: {}", dialect.event_name());
            self.detected.set(Some(dialect));
        }
    }
}

/// Options forwarded to the target with every registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenerOptions {
    /// Invoke the listener for the first event only.
    pub once: bool,
}

/// A registered callback. Identity (pointer equality) is what removal matches on.
pub type WheelHandler<E> = Rc<dyn Fn(&E)>;

/// An element that accepts wheel listeners by event name.
pub trait WheelTarget {
    type Event: WheelEventData;

    /// Attach `handler` under `event_name`. Attaching the same handler twice under
    /// the same name has no effect.
    fn add_listener(&self, event_name: &'static str, handler: &WheelHandler<Self::Event>, options: ListenerOptions);

    /// Detach `handler` from `event_name`. Unknown handlers are ignored.
    fn remove_listener(&self, event_name: &'static str, handler: &WheelHandler<Self::Event>);
}

/// Register `on_wheel` for exactly one wheel dialect on `target`.
///
/// The callback receives the raw event and its [`normalized_delta`].
pub fn add_wheel_listener<T, F>(target: &Rc<T>, support: &WheelSupport, options: ListenerOptions, on_wheel: F)
where
    T: WheelTarget + 'static,
    F: Fn(&T::Event, WheelDelta) + 'static,
{
    let listener: WheelHandler<T::Event> = Rc::new(move |event: &T::Event| on_wheel(event, normalized_delta(event)));

    if let Some(dialect) = support.detected() {
        target.add_listener(dialect.event_name(), &listener, options);
        return;
    }

    // The detector finds itself through this slot; emptying it makes it one-shot.
    let slot: Rc<RefCell<Option<Weak<dyn Fn(&T::Event)>>>> = Rc::new(RefCell::new(None));

    let detector: WheelHandler<T::Event> = {
        let slot = Rc::clone(&slot);
        let target = Rc::downgrade(target);
        let support = support.clone();
        Rc::new(move |event: &T::Event| {
            let event_type = event.event_type();
            let Some(dialect) = WheelDialect::from_event_name(&event_type) else {
                log::warn!("ignoring non-wheel event {event_type:?} in wheel detector");
                return;
            };
            let Some(this) = slot.borrow_mut().take().and_then(|weak| weak.upgrade()) else {
                return;
            };

            support.record(dialect);

            if let Some(target) = target.upgrade() {
                for candidate in WheelDialect::CANDIDATES {
                    target.remove_listener(candidate.event_name(), &this);
                }
                if !options.once {
                    target.add_listener(dialect.event_name(), &listener, options);
                }
            }

            listener(event);
        })
    };
    *slot.borrow_mut() = Some(Rc::downgrade(&detector));

    for candidate in WheelDialect::CANDIDATES {
        target.add_listener(candidate.event_name(), &detector, options);
    }
}
