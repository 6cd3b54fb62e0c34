#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn append(document: &web_sys::Document, tag: &str, id: Option<&str>) -> web_sys::Element {
    let el = document.create_element(tag).unwrap();
    if let Some(id) = id {
        el.set_id(id);
    }
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn page_chrome_works_without_a_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let toggle = append(&document, "button", None);
    toggle.set_class_name("nav__toggle");
    let links = append(&document, "ul", Some("navLinks"));
    let year = append(&document, "span", Some("year"));

    knot_web::start().unwrap();

    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(links.get_attribute("data-open").as_deref(), Some("false"));
    let this_year = js_sys::Date::new_0().get_full_year().to_string();
    assert_eq!(year.text_content().as_deref(), Some(this_year.as_str()));

    let button = toggle.dyn_ref::<web_sys::HtmlElement>().unwrap();
    button.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(links.get_attribute("data-open").as_deref(), Some("true"));
    button.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn teardown_is_idempotent() {
    knot_web::teardown();
    knot_web::teardown();
}
