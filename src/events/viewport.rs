use super::{wire_input_handlers, Listener};
use crate::dom;
use crate::frame::{FrameContext, LoopHandle};
use sparkle_core::Transition;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Reclassifies the device on every resize. Entering touch drops all input
/// subscriptions and sparkles; leaving it re-subscribes and restarts the loop.
pub fn wire_resize(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
    frame_loop: LoopHandle,
) -> anyhow::Result<Listener> {
    let weak = Rc::downgrade(ctx);
    let window_resize = window.clone();
    Listener::new(window, "resize", move |_ev: web::Event| {
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        let width = dom::viewport_width(&window_resize);
        let transition = ctx.borrow_mut().engine.resize(width);
        match transition {
            Transition::Unchanged => {}
            Transition::EnteredTouch => {
                let input = ctx.borrow_mut().input.take();
                drop(input);
                let c = &mut *ctx.borrow_mut();
                c.projection.clear_sparkles();
                c.projection.set_visible(false);
            }
            Transition::LeftTouch => {
                match wire_input_handlers(&ctx) {
                    Ok(input) => ctx.borrow_mut().input = Some(input),
                    Err(e) => log::error!("[resize] input wiring failed: {:?}", e),
                }
                ctx.borrow().projection.set_visible(true);
                frame_loop.request();
            }
        }
    })
}
