use crate::constants::{TOOLTIP_ID, WEBGL_NOTICE_ID, YEAR_ID};
use crate::ui;
use glam::Vec2;
use knot_core::{SurfaceSize, TooltipUpdate, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Window size in CSS pixels and the raw device pixel ratio.
pub fn viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(
        width as f32,
        height as f32,
        w.device_pixel_ratio() as f32,
    ))
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn client_pos(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32, y as f32)
}

/// Backing store at physical pixels, CSS box at the window size.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, size: &SurfaceSize) {
    canvas.set_width(size.physical_width);
    canvas.set_height(size.physical_height);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", size.css_width));
    _ = style.set_property("height", &format!("{}px", size.css_height));
}

pub fn set_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&ui::year_text(year)));
    }
}

pub fn show_webgl_notice(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(WEBGL_NOTICE_ID) {
        _ = el.remove_attribute("hidden");
        log::info!("[dom] WebGL unavailable, notice shown");
    }
}

pub fn tooltip_element(document: &web::Document) -> Option<web::HtmlElement> {
    html_element_by_id(document, TOOLTIP_ID)
}

pub fn apply_tooltip(tooltip: Option<&web::HtmlElement>, update: &TooltipUpdate) {
    let Some(el) = tooltip else {
        return;
    };
    let style = ui::tooltip_style(update);
    el.set_text_content(Some(&style.text));
    _ = el.style().set_property("transform", &style.transform);
}
