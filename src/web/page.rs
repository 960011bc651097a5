use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::controller::RocketView;

pub(crate) const ROCKET_SIZE_PX: u32 = 80;
pub(crate) const MOVING_CLASS: &str = "moving";

const CONTAINER_STYLE: &str = "position:relative;display:flex;width:100%;min-height:100vh;";
const LEFT_COLUMN_STYLE: &str =
    "width:50%;min-height:100vh;display:flex;flex-direction:column;align-items:center;";
const RIGHT_COLUMN_STYLE: &str = "width:50%;min-height:100vh;display:flex;flex-direction:column;\
     align-items:center;justify-content:center;gap:96px;";
const OBSTACLE_STYLE: &str = "border:1px solid black;box-sizing:border-box;width:75%;";

/// The demo page: one rocket and three obstacle placeholders
pub(crate) struct PageView {
    container: Element,
    rocket: HtmlElement,
    obstacles: Vec<Element>,
}

impl PageView {
    pub(crate) fn mount(document: &Document, host: &Element) -> Result<Self, JsValue> {
        let container = div(document, "playground", CONTAINER_STYLE)?;

        let rocket: HtmlElement = div(document, "rocket", &rocket_style())?.dyn_into()?;
        rocket.set_text_content(Some("Move me with arrow keys!"));
        container.append_child(&rocket)?;

        let left = div(document, "column", LEFT_COLUMN_STYLE)?;
        let right = div(document, "column", RIGHT_COLUMN_STYLE)?;

        // 40px bar at the top left, an 80px and a 192px box centred on the right
        let mut obstacles = Vec::with_capacity(3);
        for (column, height) in [(&left, 40), (&right, 80), (&right, 192)] {
            let obstacle = div(document, "obstacle", &format!("{}height:{}px;", OBSTACLE_STYLE, height))?;
            column.append_child(&obstacle)?;
            obstacles.push(obstacle);
        }

        container.append_child(&left)?;
        container.append_child(&right)?;
        host.append_child(&container)?;

        Ok(Self {
            container,
            rocket,
            obstacles,
        })
    }

    pub(crate) fn rocket(&self) -> &Element {
        &self.rocket
    }

    pub(crate) fn obstacles(&self) -> &[Element] {
        &self.obstacles
    }

    pub(crate) fn render(&self, view: &RocketView) -> Result<(), JsValue> {
        let style = self.rocket.style();
        style.set_property("top", &format!("{}px", view.position.top))?;
        style.set_property("left", &format!("{}px", view.position.left))?;
        style.set_property("transform", &format!("rotate({}deg)", view.rotation_deg))?;
        self.rocket.class_list().toggle_with_force(MOVING_CLASS, view.moving)?;
        Ok(())
    }

    pub(crate) fn unmount(&self) {
        self.container.remove();
    }
}

fn rocket_style() -> String {
    format!(
        "position:absolute;top:0px;left:0px;width:{size}px;height:{size}px;z-index:50;\
         background:#3b82f6;transition:transform 60ms linear;",
        size = ROCKET_SIZE_PX
    )
}

fn div(document: &Document, class: &str, style: &str) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    el.set_attribute("style", style)?;
    Ok(el)
}
