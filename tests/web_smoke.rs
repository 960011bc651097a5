#![cfg(target_arch = "wasm32")]

use rocket_playground::Playground;
use wasm_bindgen_test::*;
use web_sys::{KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn host(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_id(id);
    // Wide enough that the top-left bar starts well right of the rocket.
    el.set_attribute("style", "width:4000px").unwrap();
    document.body().unwrap().append_child(&el).unwrap();
}

#[wasm_bindgen_test]
fn mounts_moves_and_unmounts() {
    host("playground-root");
    let mut playground = Playground::new("playground-root", None).unwrap();
    assert_eq!(playground.top(), 0.0);

    playground.press("ArrowDown");
    assert_eq!(playground.top(), 10.0);
    assert!(playground.moving());

    playground.press("x");
    assert_eq!(playground.top(), 10.0);

    playground.unmount();
    assert!(!playground.moving());
    let document = web_sys::window().unwrap().document().unwrap();
    assert_eq!(document.get_elements_by_class_name("rocket").length(), 0);
}

fn dispatch_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn dispatch_mouse(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn window_events_drive_the_rocket_until_unmount() {
    host("playground-events");
    let mut playground = Playground::new("playground-events", None).unwrap();

    dispatch_key("ArrowDown");
    assert_eq!(playground.top(), 10.0);
    assert!(playground.moving());

    let before = playground.rotation();
    dispatch_mouse(600, 10);
    assert_eq!((playground.pointer_x(), playground.pointer_y()), (600.0, 10.0));
    assert_ne!(playground.rotation(), before);

    playground.unmount();
    assert!(!playground.moving());

    // Listeners are gone: neither event reaches the controller any more
    dispatch_key("ArrowDown");
    dispatch_mouse(10, 600);
    assert_eq!(playground.top(), 10.0);
    assert_eq!((playground.pointer_x(), playground.pointer_y()), (600.0, 10.0));
    assert!(!playground.moving());
}

#[wasm_bindgen_test]
fn press_after_unmount_is_a_no_op() {
    host("playground-press-after-unmount");
    let mut playground = Playground::new("playground-press-after-unmount", None).unwrap();
    playground.unmount();

    playground.press("ArrowDown");
    assert_eq!(playground.top(), 0.0);
    assert!(!playground.moving());
}

#[wasm_bindgen_test]
fn missing_root_is_an_error() {
    assert!(Playground::new("does-not-exist", None).is_err());
}

#[wasm_bindgen_test]
fn bad_settings_are_an_error() {
    host("playground-bad-settings");
    assert!(Playground::new("playground-bad-settings", Some("{\"step_px\": -1}".to_string())).is_err());
}
