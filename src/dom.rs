//! DOM adapters for the engine's wheel abstraction.
//!
//! [`DomWheelEvent`] reads the dialect-specific delta fields off a raw
//! `Event` by property lookup, since `mousewheel` and `DOMMouseScroll` have
//! no typed bindings. [`DomWheelTarget`] turns `add_listener` /
//! `remove_listener` into real `addEventListener` calls and keeps every JS
//! closure alive for as long as the target lives.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::wheel::{ListenerOptions, WheelEventData, WheelHandler, WheelTarget};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A wheel-family event as delivered by the browser.
pub struct DomWheelEvent(pub Event);

impl WheelEventData for DomWheelEvent {
    fn event_type(&self) -> String {
        self.0.type_()
    }

    fn delta_y(&self) -> Option<f64> {
        number_field(&self.0, "deltaY")
    }

    fn wheel_delta(&self) -> Option<f64> {
        number_field(&self.0, "wheelDelta")
    }

    fn detail(&self) -> Option<f64> {
        number_field(&self.0, "detail")
    }
}

fn number_field(event: &Event, name: &str) -> Option<f64> {
    match js_sys::Reflect::get(event, &JsValue::from_str(name)) {
        Ok(value) => value.as_f64(),
        Err(_) => None,
    }
}

struct Binding {
    event_name: &'static str,
    handler: WheelHandler<DomWheelEvent>,
    closure: Closure<dyn FnMut(Event)>,
}

/// An `EventTarget` accepting wheel listeners.
pub struct DomWheelTarget {
    target: EventTarget,
    bindings: RefCell<Vec<Binding>>,
    /// Removed bindings. A handler may detach itself while running, so its
    /// closure cannot be freed yet.
    retired: RefCell<Vec<Binding>>,
}

impl DomWheelTarget {
    #[must_use]
    pub fn new(target: EventTarget) -> Self {
        Self { target, bindings: RefCell::new(Vec::new()), retired: RefCell::new(Vec::new()) }
    }

    fn is_bound(&self, event_name: &str, handler: &WheelHandler<DomWheelEvent>) -> bool {
        self.bindings
            .borrow()
            .iter()
            .any(|b| b.event_name == event_name && Rc::ptr_eq(&b.handler, handler))
    }
}

impl WheelTarget for DomWheelTarget {
    type Event = DomWheelEvent;

    fn add_listener(&self, event_name: &'static str, handler: &WheelHandler<DomWheelEvent>, options: ListenerOptions) {
        if self.is_bound(event_name, handler) {
            return;
        }

        let callback = Rc::clone(handler);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            callback(&DomWheelEvent(event));
        }) as Box<dyn FnMut(Event)>);

        let dom_options = AddEventListenerOptions::new();
        dom_options.set_once(options.once);
        if let Err(err) = self.target.add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            closure.as_ref().unchecked_ref(),
            &dom_options,
        ) {
            log::warn!("failed to add {event_name} listener: {}", crate::error::describe(&err));
            return;
        }

        self.bindings.borrow_mut().push(Binding { event_name, handler: Rc::clone(handler), closure });
    }

    fn remove_listener(&self, event_name: &'static str, handler: &WheelHandler<DomWheelEvent>) {
        let binding = {
            let mut bindings = self.bindings.borrow_mut();
            let Some(index) = bindings
                .iter()
                .position(|b| b.event_name == event_name && Rc::ptr_eq(&b.handler, handler))
            else {
                return;
            };
            bindings.remove(index)
        };

        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(event_name, binding.closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {event_name} listener: {}", crate::error::describe(&err));
        }
        self.retired.borrow_mut().push(binding);
    }
}
