use crate::constants::{NAV_LINKS_ID, NAV_TOGGLE_SELECTOR};
use crate::dom;
use crate::ui;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct Nav {
    toggle: web::Element,
    links: web::Element,
}

impl Nav {
    fn set_open(&self, open: bool) {
        _ = self
            .toggle
            .set_attribute("aria-expanded", ui::bool_attr(open));
        _ = self.links.set_attribute("data-open", ui::bool_attr(open));
    }

    fn toggle(&self) {
        let expanded = self.toggle.get_attribute("aria-expanded");
        self.set_open(ui::nav_next_open(expanded.as_deref()));
    }
}

/// Wire the mobile menu: toggle button, link clicks and Escape all work
/// independently of the WebGL scene.
pub fn setup(document: &web::Document) {
    let toggle = document.query_selector(NAV_TOGGLE_SELECTOR).ok().flatten();
    let links = document.get_element_by_id(NAV_LINKS_ID);
    let (Some(toggle), Some(links)) = (toggle, links) else {
        log::debug!("[nav] no menu on this page");
        return;
    };
    let nav = Nav { toggle, links };
    nav.set_open(false);

    let n = nav.clone();
    dom::add_listener(
        &nav.toggle,
        "click",
        false,
        move |_: web::MouseEvent| n.toggle(),
    );

    let n = nav.clone();
    dom::add_listener(
        &nav.links,
        "click",
        false,
        move |ev: web::MouseEvent| {
            let on_link = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .is_some_and(|el| ui::is_link_tag(&el.tag_name()));
            if on_link {
                n.set_open(false);
            }
        },
    );

    if let Some(window) = web::window() {
        let n = nav;
        dom::add_listener(
            &window,
            "keydown",
            false,
            move |ev: web::KeyboardEvent| {
                if ui::closes_nav(&ev.key()) {
                    n.set_open(false);
                }
            },
        );
    }
}
