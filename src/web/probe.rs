use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Window};

use crate::core::{Rect, Size};
use crate::systems::LayoutProbe;

/// Geometry straight from the live DOM
pub(crate) struct DomProbe {
    window: Window,
}

impl DomProbe {
    pub(crate) fn new(window: Window) -> Self {
        Self { window }
    }
}

fn px(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

impl LayoutProbe for DomProbe {
    type Handle = Element;

    fn measure(&self, element: &Element) -> Option<Rect> {
        if !element.is_connected() {
            return None;
        }
        let r = element.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
    }

    /// `offsetWidth/offsetHeight` ignore the rotation the renderer applies.
    fn size(&self, element: &Element) -> Option<Size> {
        if !element.is_connected() {
            return None;
        }
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => Some(Size::new(html.offset_width() as f64, html.offset_height() as f64)),
            None => self.measure(element).map(|r| r.size()),
        }
    }

    fn viewport(&self) -> Size {
        Size::new(px(self.window.inner_width()), px(self.window.inner_height()))
    }
}
