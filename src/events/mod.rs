use crate::frame::FrameContext;
use knot_core::TickSource;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

mod pointer;
mod viewport;

/// Shared by every scene listener. Holds the scene weakly so handlers that
/// outlive a teardown do nothing.
#[derive(Clone)]
pub struct SceneWiring {
    pub ctx: Weak<RefCell<FrameContext>>,
    pub ticks: Rc<dyn TickSource>,
}

impl SceneWiring {
    /// Apply `f` to the live scene. An on-demand source is asked for a frame;
    /// a continuous one picks the change up on its next refresh.
    fn update(&self, f: impl FnOnce(&mut FrameContext)) {
        let Some(ctx) = self.ctx.upgrade() else {
            return;
        };
        match ctx.try_borrow_mut() {
            Ok(mut c) => f(&mut c),
            Err(_) => {
                log::debug!("[events] scene busy, event dropped");
                return;
            }
        }
        // borrow released; an on-demand source renders synchronously
        if !self.ticks.is_continuous() {
            self.ticks.request_frame();
        }
    }
}

pub fn wire_scene_handlers(w: SceneWiring) {
    pointer::wire(&w);
    viewport::wire(&w);
}
