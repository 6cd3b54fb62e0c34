use super::SceneWiring;
use crate::dom;
use glam::Vec2;
use web_sys as web;

pub(super) fn wire(w: &SceneWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let wm = w.clone();
    dom::add_listener(&window, "mousemove", true, move |ev: web::MouseEvent| {
        let client = dom::client_pos(ev.client_x(), ev.client_y());
        wm.update(|c| c.pointer_moved(client));
    });

    for event in ["touchstart", "touchmove"] {
        let wt = w.clone();
        dom::add_listener(&window, event, true, move |ev: web::TouchEvent| {
            let touches = touch_points(&ev.touches());
            if touches.is_empty() {
                return;
            }
            wt.update(|c| c.touch_moved(&touches));
        });
    }

    // window never fires mouseleave; the root element does
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let wl = w.clone();
        dom::add_listener(&root, "mouseleave", true, move |_: web::MouseEvent| {
            wl.update(|c| c.pointer_left());
        });
    }

    let we = w.clone();
    dom::add_listener(&window, "touchend", true, move |_: web::TouchEvent| {
        we.update(|c| c.touch_ended());
    });
}

fn touch_points(list: &web::TouchList) -> Vec<Vec2> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| dom::client_pos(t.client_x(), t.client_y()))
        .collect()
}
