use crate::dom;
use crate::render;
use glam::Vec2;
use knot_core::{
    apply_resize, apply_scroll, AnimationDriver, InputTracker, SkillScene, Subscription,
    TickCallback, TickSource, TooltipUpdate, Viewport,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one tick touches. Event handlers mutate it between ticks.
pub struct FrameContext {
    pub scene: SkillScene,
    pub input: InputTracker,
    pub driver: AnimationDriver,
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub tooltip: Option<web::HtmlElement>,
    viewport: Viewport,
    shown_tooltip: Option<TooltipUpdate>,
}

impl FrameContext {
    pub fn new(
        scene: SkillScene,
        driver: AnimationDriver,
        gpu: render::GpuState,
        canvas: web::HtmlCanvasElement,
        tooltip: Option<web::HtmlElement>,
        viewport: Viewport,
    ) -> Self {
        let params = driver.params();
        let input = InputTracker::with_gains(params.yaw_gain, params.pitch_gain);
        Self {
            scene,
            input,
            driver,
            gpu,
            canvas,
            tooltip,
            viewport,
            shown_tooltip: None,
        }
    }

    pub fn frame(&mut self, now: f64) {
        let tip = self
            .driver
            .frame(now, &mut self.scene, &self.input, &mut self.gpu);
        // skip DOM writes when nothing changed
        if self.shown_tooltip.as_ref() != Some(&tip) {
            dom::apply_tooltip(self.tooltip.as_ref(), &tip);
            self.shown_tooltip = Some(tip);
        }
    }

    pub fn pointer_moved(&mut self, client: Vec2) {
        self.input.pointer_moved(client, &self.viewport);
    }

    pub fn touch_moved(&mut self, touches: &[Vec2]) {
        self.input.touch_moved(touches, &self.viewport);
    }

    pub fn pointer_left(&mut self) {
        self.input.pointer_left();
    }

    pub fn touch_ended(&mut self) {
        self.input.touch_ended();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let size = apply_resize(&viewport, &mut self.scene.camera);
        dom::size_canvas(&self.canvas, &size);
        self.gpu.resize(size);
    }

    pub fn scroll(&mut self, scroll_y: f32) {
        apply_scroll(scroll_y, &self.driver.params().scroll, &mut self.scene);
    }
}

struct RafLoop {
    callback: RefCell<Option<TickCallback>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    handle: Cell<Option<i32>>,
    cancelled: Cell<bool>,
}

impl RafLoop {
    fn schedule(&self) {
        if self.cancelled.get() || self.handle.get().is_some() {
            return;
        }
        let closure = self.closure.borrow();
        let (Some(closure), Some(w)) = (closure.as_ref(), web::window()) else {
            return;
        };
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::error!("[tick] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn run(&self, timestamp_ms: f64) {
        self.handle.set(None);
        if self.cancelled.get() {
            return;
        }
        match self.callback.try_borrow_mut() {
            Ok(mut slot) => {
                if let Some(callback) = slot.as_mut() {
                    callback(timestamp_ms / 1000.0);
                }
            }
            Err(_) => log::debug!("[tick] re-entrant frame skipped"),
        }
        self.schedule();
    }

    fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if let Ok(mut slot) = self.callback.try_borrow_mut() {
            slot.take();
        }
    }
}

/// Continuous ticks from `requestAnimationFrame`, one per display refresh.
pub struct AnimationFrameTicks {
    inner: Rc<RafLoop>,
}

impl Default for AnimationFrameTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationFrameTicks {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RafLoop {
                callback: RefCell::new(None),
                closure: RefCell::new(None),
                handle: Cell::new(None),
                cancelled: Cell::new(false),
            }),
        }
    }
}

impl TickSource for AnimationFrameTicks {
    fn subscribe(&self, callback: TickCallback) -> Subscription {
        *self.inner.callback.borrow_mut() = Some(callback);
        self.inner.cancelled.set(false);
        let weak = Rc::downgrade(&self.inner);
        *self.inner.closure.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            if let Some(lp) = weak.upgrade() {
                lp.run(ts);
            }
        }) as Box<dyn FnMut(f64)>));
        self.inner.schedule();
        let inner = self.inner.clone();
        Subscription::new(move || inner.cancel())
    }

    fn request_frame(&self) {
        // the next refresh picks up the change
    }

    fn is_continuous(&self) -> bool {
        true
    }
}
