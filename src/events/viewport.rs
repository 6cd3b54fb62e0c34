use super::SceneWiring;
use crate::dom;
use web_sys as web;

pub(super) fn wire(w: &SceneWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let wr = w.clone();
    dom::add_listener(&window, "resize", false, move |_: web::Event| {
        let Some(viewport) = dom::viewport() else {
            return;
        };
        wr.update(|c| c.resize(viewport));
    });

    let ws = w.clone();
    dom::add_listener(&window, "scroll", true, move |_: web::Event| {
        let y = dom::scroll_y();
        ws.update(|c| c.scroll(y));
    });
}
