use crate::constants::{REDUCED_MOTION_QUERY, WEBGL_CONTEXT_KINDS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Try each WebGL flavour on a throwaway canvas.
pub fn webgl_available(document: &web::Document) -> bool {
    let Some(canvas) = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        return false;
    };
    WEBGL_CONTEXT_KINDS
        .iter()
        .any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))))
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}
