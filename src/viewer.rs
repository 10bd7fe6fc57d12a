use std::cell::RefCell;
use std::rc::Rc;

use canvas::camera::Point;
use canvas::config::ViewerConfig;
use canvas::engine::Engine;
use canvas::wheel::{ListenerOptions, WheelSupport, add_wheel_listener};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::dom::{DomWheelEvent, DomWheelTarget};
use crate::error::{HostError, describe};
use crate::frame_loop;

/// A grid viewer bound to one canvas element.
///
/// ```js
/// const viewer = new Viewer(document.querySelector("canvas"), null);
/// viewer.start();
/// ```
#[wasm_bindgen]
pub struct Viewer {
    engine: Rc<RefCell<Engine>>,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
    wheel_target: Rc<DomWheelTarget>,
    running: bool,
}

#[wasm_bindgen]
impl Viewer {
    /// Bind to `canvas`, size it to the window and start listening for input.
    /// `config_json` overrides any subset of the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config is invalid, there is no window, or the
    /// canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<Viewer, JsValue> {
        Ok(Self::create(canvas, config_json.as_deref())?)
    }

    /// Start the render loop. Calling it again has no effect.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the first animation frame cannot be scheduled.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.running {
            return Ok(());
        }
        let engine = Rc::clone(&self.engine);
        frame_loop::run_forever(move || {
            if let Err(err) = engine.borrow().render() {
                log::error!("render failed: {}", describe(&err));
            }
        })?;
        self.running = true;
        log::info!("render loop started");
        Ok(())
    }
}

impl Viewer {
    fn create(canvas: HtmlCanvasElement, config_json: Option<&str>) -> Result<Self, HostError> {
        crate::init_logging();

        let config = match config_json {
            Some(json) => ViewerConfig::from_json(json)?,
            None => ViewerConfig::default(),
        };
        let window = web_sys::window().ok_or(HostError::NoWindow)?;

        let mut engine = Engine::new(canvas.clone(), config)?;
        let (width, height) = window_size(&window);
        engine.set_viewport(width, height);

        let canvas_target: EventTarget = canvas.into();
        let mut viewer = Self {
            engine: Rc::new(RefCell::new(engine)),
            listeners: Vec::new(),
            wheel_target: Rc::new(DomWheelTarget::new(canvas_target.clone())),
            running: false,
        };

        viewer.enable_resizing(&window)?;
        viewer.enable_panning(&canvas_target)?;
        viewer.enable_zooming();
        viewer.enable_cursor_tracking(&window)?;

        log::info!("viewer ready at {width}x{height}");
        Ok(viewer)
    }

    fn listen<F>(&mut self, target: &EventTarget, event_name: &str, handler: F) -> Result<(), HostError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        self.listeners.push(closure);
        Ok(())
    }

    fn enable_resizing(&mut self, window: &Window) -> Result<(), HostError> {
        let engine = Rc::clone(&self.engine);
        let source = window.clone();
        self.listen(window, "resize", move |_event| {
            let (width, height) = window_size(&source);
            engine.borrow_mut().set_viewport(width, height);
        })
    }

    fn enable_panning(&mut self, canvas: &EventTarget) -> Result<(), HostError> {
        let engine = Rc::clone(&self.engine);
        self.listen(canvas, "mousedown", move |event| {
            if let Some(pt) = mouse_point(&event) {
                report(engine.borrow_mut().on_pointer_down(pt));
            }
        })?;

        let engine = Rc::clone(&self.engine);
        self.listen(canvas, "touchstart", move |event| {
            report(engine.borrow_mut().on_touch_start(&touch_points(&event)));
        })?;

        let engine = Rc::clone(&self.engine);
        self.listen(canvas, "mouseup", move |_event| {
            report(engine.borrow_mut().on_pointer_up());
        })?;

        let engine = Rc::clone(&self.engine);
        self.listen(canvas, "touchend", move |_event| {
            report(engine.borrow_mut().on_touch_end());
        })?;

        let engine = Rc::clone(&self.engine);
        self.listen(canvas, "mousemove", move |event| {
            if let Some(pt) = mouse_point(&event) {
                report(engine.borrow_mut().on_pointer_move(pt));
            }
        })?;

        let engine = Rc::clone(&self.engine);
        self.listen(canvas, "touchmove", move |event| {
            report(engine.borrow_mut().on_touch_move(&touch_points(&event)));
        })
    }

    fn enable_zooming(&self) {
        let engine = Rc::clone(&self.engine);
        add_wheel_listener(
            &self.wheel_target,
            &WheelSupport::process(),
            ListenerOptions::default(),
            move |_event: &DomWheelEvent, delta| engine.borrow_mut().on_wheel(delta),
        );
    }

    fn enable_cursor_tracking(&mut self, window: &Window) -> Result<(), HostError> {
        let engine = Rc::clone(&self.engine);
        self.listen(window, "mousemove", move |event| {
            if let Some(pt) = mouse_point(&event) {
                engine.borrow_mut().on_mouse_move(pt);
            }
        })
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("input handler failed: {}", describe(&err));
    }
}

fn window_size(window: &Window) -> (f64, f64) {
    let dimension = |value: Result<JsValue, JsValue>| match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    };
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

fn mouse_point(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn touch_points(event: &Event) -> Vec<Point> {
    let Some(touch_event) = event.dyn_ref::<TouchEvent>() else {
        return Vec::new();
    };
    let touches = touch_event.target_touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}
