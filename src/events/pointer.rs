use super::Listener;
use crate::frame::FrameContext;
use smallvec::SmallVec;
use sparkle_core::{InteractiveHandle, PointerView};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every input subscription of an active (non-touch) mount.
pub struct InputListeners {
    _global: SmallVec<[Listener; 3]>,
    interactive: Vec<(InteractiveHandle, [Listener; 2])>,
}

impl InputListeners {
    pub fn add_interactive(&mut self, handle: InteractiveHandle, pair: [Listener; 2]) {
        self.interactive.push((handle, pair));
    }

    pub fn remove_interactive(&mut self, handle: InteractiveHandle) {
        self.interactive.retain(|(h, _)| *h != handle);
    }
}

// Repaints the cursor layers after a flag change.
fn repaint(ctx: &mut FrameContext) {
    let view = PointerView::from(ctx.engine.pointer());
    ctx.projection.paint_pointer(&view);
}

pub fn wire_input_handlers(ctx: &Rc<RefCell<FrameContext>>) -> anyhow::Result<InputListeners> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut global = SmallVec::new();
    global.push(wire_pointermove(&window, Rc::downgrade(ctx))?);
    global.push(wire_pointerdown(&window, Rc::downgrade(ctx))?);
    global.push(wire_pointerup(&window, Rc::downgrade(ctx))?);

    let targets: Vec<(web::Element, InteractiveHandle)> =
        ctx.borrow().registry.iter().cloned().collect();
    let mut interactive = Vec::with_capacity(targets.len());
    for (el, handle) in targets {
        interactive.push((handle, wire_interactive(ctx, &el, handle)?));
    }
    Ok(InputListeners {
        _global: global,
        interactive,
    })
}

fn wire_pointermove(window: &web::Window, ctx: Weak<RefCell<FrameContext>>) -> anyhow::Result<Listener> {
    Listener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(ctx) = ctx.upgrade() else {
            return;
        };
        let c = &mut *ctx.borrow_mut();
        if let Some(paint) = c.engine.pointer_move(ev.client_x() as f32, ev.client_y() as f32) {
            c.projection.paint_pointer(&paint);
        }
    })
}

// Global press/release so a release outside the pressed element still lands.
fn wire_pointerdown(window: &web::Window, ctx: Weak<RefCell<FrameContext>>) -> anyhow::Result<Listener> {
    Listener::new(window, "pointerdown", move |_ev: web::Event| {
        if let Some(ctx) = ctx.upgrade() {
            let c = &mut *ctx.borrow_mut();
            c.engine.pointer_down();
            repaint(c);
        }
    })
}

fn wire_pointerup(window: &web::Window, ctx: Weak<RefCell<FrameContext>>) -> anyhow::Result<Listener> {
    Listener::new(window, "pointerup", move |_ev: web::Event| {
        if let Some(ctx) = ctx.upgrade() {
            let c = &mut *ctx.borrow_mut();
            c.engine.pointer_up();
            repaint(c);
        }
    })
}

pub fn wire_interactive(
    ctx: &Rc<RefCell<FrameContext>>,
    el: &web::Element,
    handle: InteractiveHandle,
) -> anyhow::Result<[Listener; 2]> {
    let enter_ctx = Rc::downgrade(ctx);
    let enter = Listener::new(el, "mouseenter", move |_ev: web::Event| {
        if let Some(ctx) = enter_ctx.upgrade() {
            let c = &mut *ctx.borrow_mut();
            c.engine.enter_interactive(handle);
            repaint(c);
        }
    })?;
    let leave_ctx = Rc::downgrade(ctx);
    let leave = Listener::new(el, "mouseleave", move |_ev: web::Event| {
        if let Some(ctx) = leave_ctx.upgrade() {
            let c = &mut *ctx.borrow_mut();
            c.engine.leave_interactive(handle);
            repaint(c);
        }
    })?;
    Ok([enter, leave])
}
