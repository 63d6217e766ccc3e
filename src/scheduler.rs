// Drives a ParticleBackground from the browser: a self re-arming setTimeout loop
// plus the mousemove and resize listeners. Every callback runs to completion on
// the JS thread, so a tick never overlaps another tick or a pointer update.

use crate::error::BackgroundError;
use crate::ParticleBackground;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, MouseEvent, Window};

/// Starts animating `background` and returns the handle the listeners share.
pub fn start(
    background: ParticleBackground,
) -> Result<Rc<RefCell<ParticleBackground>>, BackgroundError> {
    let window = web_sys::window().ok_or(BackgroundError::NoWindow)?;
    let interval = background.tick_interval_ms();
    let canvas = background.canvas().clone();
    log!(
        "particle backdrop: {} particles every {} ms",
        background.particle_count(),
        interval
    );
    let shared = Rc::new(RefCell::new(background));
    let background = shared.clone();

    {
        let background = background.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            background
                .borrow_mut()
                .on_pointer_move(event.offset_x() as f64, event.offset_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>);
        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        on_move.forget();
    }

    {
        let background = background.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            if let Err(err) = background.borrow_mut().fit_to_window() {
                console::error_1(&err);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // The loop closure keeps a handle to itself so it can re-arm the timer
    let f = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
    let g = f.clone();
    let loop_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(err) = background.borrow_mut().tick() {
            console::error_1(&err);
        }
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = schedule(&loop_window, next, interval) {
                console::error_1(&err);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        schedule(&window, first, interval)?;
    }
    Ok(shared)
}

fn schedule(window: &Window, f: &Closure<dyn FnMut()>, interval_ms: i32) -> Result<i32, JsValue> {
    window.set_timeout_with_callback_and_timeout_and_arguments_0(f.as_ref().unchecked_ref(), interval_ms)
}
