//! Browser bindings for the Pong simulation
//!
//! The page owns a `PongClient`, forwards key events and commands to it,
//! and reads positions back each animation frame to draw the canvas.

mod client;
mod input;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use client::PongClient;
pub use input::{key_binding, KeyBinding};

#[cfg(target_arch = "wasm32")]
mod bindings {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        crate::logger::init(log::LevelFilter::Info);
    }

    fn window() -> Result<web_sys::Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
    }

    fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
        window()?.request_animation_frame(f.as_ref().unchecked_ref())
    }

    /// Call `callback(timestamp)` on every display refresh until the page goes away.
    ///
    /// The callback is expected to `tick()` the client and draw it.
    #[wasm_bindgen]
    pub fn start_loop(callback: js_sys::Function) -> Result<(), JsValue> {
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = frame.clone();

        *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_f64(timestamp)) {
                log::error!("Frame callback failed: {:?}", err);
            }
            if let Some(f) = next.borrow().as_ref() {
                if let Err(err) = request_animation_frame(f) {
                    log::error!("Failed to schedule frame: {:?}", err);
                }
            }
        }));

        let scheduled = frame.borrow();
        match scheduled.as_ref() {
            Some(f) => request_animation_frame(f).map(|_| ()),
            None => Err(JsValue::from_str("Frame closure missing")),
        }
    }
}
