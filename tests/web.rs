//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use canvas_particle_backdrop::config::FieldConfig;
use canvas_particle_backdrop::error::BackgroundError;
use canvas_particle_backdrop::field::Field;
use canvas_particle_backdrop::renderer::Renderer;
use canvas_particle_backdrop::{scheduler, start_background, ParticleBackground};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(tag: &str, id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
}

fn canvas(id: &str) -> HtmlCanvasElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_an_error() {
    assert!(ParticleBackground::new("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_an_error() {
    mount("div", "not-a-canvas");
    assert!(ParticleBackground::new("not-a-canvas").is_err());
}

#[wasm_bindgen_test]
fn background_ramps_up_over_twenty_ticks() {
    mount("canvas", "backdrop-ramp");
    let mut background = ParticleBackground::new("backdrop-ramp").unwrap();
    assert_eq!(background.particle_count(), 100);
    assert_eq!(background.elapsed(), 0);

    background.on_pointer_move(40.0, 40.0);
    for _ in 0..30 {
        background.tick().unwrap();
    }
    assert_eq!(background.elapsed(), 20);
    assert_eq!(background.particle_count(), 100);
}

#[wasm_bindgen_test]
fn resize_updates_canvas_and_field() {
    mount("canvas", "backdrop-resize");
    let mut background = ParticleBackground::new("backdrop-resize").unwrap();
    background.resize(320, 200);
    assert_eq!(background.width(), 320.0);
    assert_eq!(background.height(), 200.0);
    for p in background.field().particles() {
        assert!(p.pos[0] >= 0.0 && p.pos[0] < 320.0);
        assert!(p.pos[1] >= 0.0 && p.pos[1] < 200.0);
    }
}

#[wasm_bindgen_test]
fn field_draws_onto_a_detached_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let mut renderer = Renderer::new(canvas).unwrap();
    renderer.set_size(200, 100);

    let config = FieldConfig {
        particle_count: 8,
        ..FieldConfig::default()
    };
    let mut field = Field::with_config(config, renderer.bounds());
    for _ in 0..5 {
        field.tick(&mut renderer).unwrap();
    }
    assert_eq!(field.particles().len(), 8);
    assert_eq!(field.elapsed(), 5);
}

#[wasm_bindgen_test]
fn fit_to_window_matches_field_to_canvas() {
    mount("canvas", "backdrop-fit");
    let mut background = ParticleBackground::new("backdrop-fit").unwrap();
    background.resize(10, 10);
    background.fit_to_window().unwrap();

    let canvas = canvas("backdrop-fit");
    assert_eq!(background.width(), canvas.width() as f64);
    assert_eq!(background.height(), canvas.height() as f64);
}

#[wasm_bindgen_test]
fn profiled_ticks_still_advance() {
    mount("canvas", "backdrop-profile");
    let mut background = ParticleBackground::new("backdrop-profile").unwrap();
    background.set_profiling(true);
    background.tick().unwrap();
    background.set_profiling(false);
    background.tick().unwrap();
    assert_eq!(background.elapsed(), 2);
}

#[wasm_bindgen_test]
fn start_background_attaches_to_a_canvas() {
    mount("canvas", "backdrop-start");
    assert!(start_background("backdrop-start").is_ok());
    assert!(start_background("backdrop-absent").is_err());
}

#[wasm_bindgen_test]
async fn timer_loop_keeps_ticking() {
    mount("canvas", "backdrop-loop");
    let handle = scheduler::start(ParticleBackground::new("backdrop-loop").unwrap()).unwrap();
    assert_eq!(handle.borrow().elapsed(), 0);
    sleep(250).await;
    assert!(handle.borrow().elapsed() >= 2);
}

#[wasm_bindgen_test]
fn mousemove_on_canvas_updates_pointer() {
    mount("canvas", "backdrop-pointer");
    let handle = scheduler::start(ParticleBackground::new("backdrop-pointer").unwrap()).unwrap();
    assert_eq!(handle.borrow().field().pointer(), [0.0, 0.0]);

    let mut init = MouseEventInit::new();
    #[allow(deprecated)]
    {
        init.client_x(500);
        init.client_y(400);
    }
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    canvas("backdrop-pointer").dispatch_event(&event).unwrap();

    assert_ne!(handle.borrow().field().pointer(), [0.0, 0.0]);
}

#[wasm_bindgen_test]
fn window_resize_refits_canvas_and_field() {
    mount("canvas", "backdrop-refit");
    let handle = scheduler::start(ParticleBackground::new("backdrop-refit").unwrap()).unwrap();
    handle.borrow_mut().resize(10, 10);
    assert_eq!(handle.borrow().width(), 10.0);

    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();

    let canvas = canvas("backdrop-refit");
    assert_eq!(handle.borrow().width(), canvas.width() as f64);
    assert_eq!(handle.borrow().height(), canvas.height() as f64);
    assert_eq!(canvas.width() as f64, window.inner_width().unwrap().as_f64().unwrap().floor());
}

#[wasm_bindgen_test]
fn errors_cross_into_js() {
    let value = JsValue::from(BackgroundError::CanvasNotFound("chat".into()));
    let error = value.dyn_into::<js_sys::Error>().unwrap();
    assert_eq!(String::from(error.message()), "No element with id 'chat'");

    let thrown = JsValue::from_str("quota exceeded");
    let wrapped = BackgroundError::from(thrown);
    assert_eq!(wrapped.to_string(), "Browser error: quota exceeded");
    assert_eq!(JsValue::from(wrapped).as_string().as_deref(), Some("quota exceeded"));
}
