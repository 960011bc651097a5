use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, MouseEvent};

use crate::controller::{ControllerCore, MoveOutcome};
use crate::domain::settings::ControllerSettings;
use crate::systems::TimerToken;

use super::page::PageView;
use super::probe::DomProbe;
use super::scheduler::WindowScheduler;
use super::session::Session;

/// The mounted demo page.
///
/// Listens to `keydown` and `mousemove` on the window until `unmount` is
/// called or the object is freed from JS.
#[wasm_bindgen]
pub struct Playground {
    session: Rc<RefCell<Session>>,
    listeners: Vec<EventListener>,
    mounted: bool,
}

#[wasm_bindgen]
impl Playground {
    /// Mount into the element with id `root_id`.
    /// `settings_json` may override any controller tunable.
    #[wasm_bindgen(constructor)]
    pub fn new(root_id: &str, settings_json: Option<String>) -> Result<Playground, JsValue> {
        let settings = match settings_json {
            Some(json) => ControllerSettings::from_json(&json).map_err(|e| JsValue::from_str(&e))?,
            None => ControllerSettings::default(),
        };

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let host = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", root_id)))?;

        let page = PageView::mount(&document, &host)?;
        let movable = page.rocket().clone();
        let obstacles = page.obstacles().to_vec();

        let session = Rc::new_cyclic(|weak: &Weak<RefCell<Session>>| {
            let weak = weak.clone();
            let on_fire: Rc<dyn Fn(TimerToken)> = Rc::new(move |token| {
                if let Some(session) = weak.upgrade() {
                    if let Ok(mut session) = session.try_borrow_mut() {
                        session.idle_elapsed(token);
                    }
                }
            });
            let controller = ControllerCore::with_settings(
                DomProbe::new(window.clone()),
                WindowScheduler::new(on_fire),
                movable,
                obstacles,
                settings,
            );
            RefCell::new(Session { controller, page })
        });
        session.borrow().render();

        let keydown = {
            let session = Rc::downgrade(&session);
            // Not passive: recognised keys cancel the default scroll.
            let options = EventListenerOptions::enable_prevent_default();
            EventListener::new_with_options(&window, "keydown", options, move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let Some(session) = session.upgrade() else {
                    return;
                };
                let Ok(mut session) = session.try_borrow_mut() else {
                    return;
                };
                if session.key_down(&event.key()) != MoveOutcome::Ignored {
                    // Arrow keys would otherwise scroll the page under the rocket.
                    event.prevent_default();
                }
            })
        };

        let mousemove = {
            let session = Rc::downgrade(&session);
            EventListener::new(&window, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if let Some(session) = session.upgrade() {
                    if let Ok(mut session) = session.try_borrow_mut() {
                        session.pointer_moved(event.client_x() as f64, event.client_y() as f64);
                    }
                }
            })
        };

        log::info!("playground mounted into #{}", root_id);

        Ok(Playground {
            session,
            listeners: vec![keydown, mousemove],
            mounted: true,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> f64 {
        self.session.borrow().controller.position().top
    }

    #[wasm_bindgen(getter)]
    pub fn left(&self) -> f64 {
        self.session.borrow().controller.position().left
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.session.borrow().controller.rotation_deg()
    }

    /// Last pointer position the controller saw (viewport coordinates)
    #[wasm_bindgen(getter, js_name = pointerX)]
    pub fn pointer_x(&self) -> f64 {
        self.session.borrow().controller.pointer().x
    }

    #[wasm_bindgen(getter, js_name = pointerY)]
    pub fn pointer_y(&self) -> f64 {
        self.session.borrow().controller.pointer().y
    }

    #[wasm_bindgen(getter)]
    pub fn moving(&self) -> bool {
        self.session.borrow().controller.is_moving()
    }

    /// Feed a key as if it came from the keyboard
    pub fn press(&self, key: &str) {
        if !self.mounted {
            return;
        }
        self.session.borrow_mut().key_down(key);
    }

    /// Remove listeners, cancel the idle timer and take the page out of the DOM
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        // Each guard removes its own listener.
        self.listeners.clear();
        self.session.borrow_mut().teardown();
        log::info!("playground unmounted");
    }
}

impl Drop for Playground {
    fn drop(&mut self) {
        self.unmount();
    }
}
