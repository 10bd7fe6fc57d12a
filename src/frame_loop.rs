use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::{HostError, describe};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Call `frame` once per animation frame, forever.
///
/// The callback reschedules itself through a shared holder, so the loop keeps
/// running after this function returns.
///
/// # Errors
///
/// Returns `Err` if there is no window or the first frame cannot be scheduled.
pub fn run_forever<F>(mut frame: F) -> Result<(), HostError>
where
    F: FnMut() + 'static,
{
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let holder: FrameCallback = Rc::new(RefCell::new(None));

    let callback = {
        let holder = Rc::clone(&holder);
        let window = window.clone();
        Closure::wrap(Box::new(move |_timestamp: f64| {
            frame();
            if let Some(next) = holder.borrow().as_ref() {
                if let Err(err) = window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    log::error!("failed to schedule next frame: {}", describe(&err));
                }
            }
        }) as Box<dyn FnMut(f64)>)
    };

    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    *holder.borrow_mut() = Some(callback);
    Ok(())
}
