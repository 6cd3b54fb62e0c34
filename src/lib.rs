#![cfg(target_arch = "wasm32")]
use crate::constants::BG_CANVAS_ID;
use crate::frame::{AnimationFrameTicks, FrameContext};
use knot_core::{
    apply_scroll, AnimationDriver, MotionParams, MotionPreference, OnDemandTicks, SkillScene,
    SurfaceSize, Subscription, TickSource,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod probe;
mod render;
mod ui;

/// A running background. Dropping it stops the ticks and frees the GPU state;
/// listeners still registered on the page hold it weakly and go quiet.
struct Background {
    _subscription: Subscription,
    _ticks: Rc<dyn TickSource>,
    _ctx: Rc<RefCell<FrameContext>>,
}

thread_local! {
    static ACTIVE: RefCell<Option<Background>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("knot-web starting");

    // Page chrome works with or without WebGL
    if let Some(document) = dom::window_document() {
        nav::setup(&document);
        dom::set_year(&document);
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation and release the scene. Safe to call more than once.
#[wasm_bindgen]
pub fn teardown() {
    let taken = ACTIVE.with(|a| a.borrow_mut().take());
    if taken.is_some() {
        log::info!("background torn down");
    }
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::canvas_by_id(&document, BG_CANVAS_ID) else {
        log::info!("no #{} canvas, background disabled", BG_CANVAS_ID);
        return Ok(());
    };
    if !probe::webgl_available(&document) {
        dom::show_webgl_notice(&document);
        return Ok(());
    }

    let motion = if probe::prefers_reduced_motion() {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    };
    log::info!("motion preference: {:?}", motion);

    let viewport = dom::viewport().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    let mut scene = SkillScene::with_default_skills(&mut StdRng::from_entropy());
    let size = knot_core::apply_resize(&viewport, &mut scene.camera);
    dom::size_canvas(&canvas, &size);

    let gpu = match render::GpuState::new(canvas.clone(), &scene, size).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("GPU init error: {:?}", e);
            dom::show_webgl_notice(&document);
            return Ok(());
        }
    };

    let params = MotionParams::default();
    apply_scroll(dom::scroll_y(), &params.scroll, &mut scene);
    let driver = AnimationDriver::new(params, motion);
    let ctx = Rc::new(RefCell::new(FrameContext::new(
        scene,
        driver,
        gpu,
        canvas,
        dom::tooltip_element(&document),
        viewport,
    )));

    let ticks: Rc<dyn TickSource> = match motion {
        MotionPreference::Full => Rc::new(AnimationFrameTicks::new()),
        MotionPreference::Reduced => Rc::new(OnDemandTicks::new()),
    };
    events::wire_scene_handlers(events::SceneWiring {
        ctx: Rc::downgrade(&ctx),
        ticks: ticks.clone(),
    });

    let weak = Rc::downgrade(&ctx);
    let subscription = ticks.subscribe(Box::new(move |now| {
        if let Some(ctx) = weak.upgrade() {
            ctx.borrow_mut().frame(now);
        }
    }));

    // replace any earlier instance
    teardown();
    ACTIVE.with(|a| {
        *a.borrow_mut() = Some(Background {
            _subscription: subscription,
            _ticks: ticks,
            _ctx: ctx,
        })
    });
    wire_pagehide();
    log::info!("background running ({})", describe(&size));
    Ok(())
}

fn wire_pagehide() {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "pagehide", false, |ev: web::PageTransitionEvent| {
            if ui::tears_down_on_pagehide(ev.persisted()) {
                teardown();
            } else {
                log::debug!("page cached, background kept");
            }
        });
    }
}

fn describe(size: &SurfaceSize) -> String {
    format!(
        "{}x{} css, {}x{} px",
        size.css_width, size.css_height, size.physical_width, size.physical_height
    )
}
