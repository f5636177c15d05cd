use crate::events::InputListeners;
use crate::projection::DomProjection;
use crate::registry::InteractiveRegistry;
use sparkle_core::CursorEngine;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: CursorEngine,
    pub projection: DomProjection,
    pub registry: InteractiveRegistry,
    // None while touch-inert
    pub input: Option<InputListeners>,
}

impl FrameContext {
    /// One display refresh. Returns whether another frame should be requested.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if let Some(snap) = self.engine.on_frame(now_ms) {
            self.projection.render(&snap);
        }
        self.engine.is_running()
    }
}

struct LoopInner {
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn request(&self) {
        if self.raf_id.get().is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Owner of the rAF loop. Dropping it cancels the pending frame and frees the
/// callback, so no tick can run after the owner is gone.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

/// Non-owning handle used by listeners to restart a stopped loop.
#[derive(Clone)]
pub struct LoopHandle(Weak<LoopInner>);

impl LoopHandle {
    pub fn request(&self) {
        if let Some(inner) = self.0.upgrade() {
            inner.request();
        }
    }
}

impl FrameLoop {
    pub fn handle(&self) -> LoopHandle {
        LoopHandle(Rc::downgrade(&self.inner))
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.inner.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.inner.tick.borrow_mut().take();
    }
}

/// Builds the self-rescheduling rAF callback and requests the first frame if
/// the engine is running. The loop parks itself whenever the engine stops.
pub fn start_loop(ctx: &Rc<RefCell<FrameContext>>) -> FrameLoop {
    let inner = Rc::new(LoopInner {
        raf_id: Cell::new(None),
        tick: RefCell::new(None),
    });
    let weak_inner = Rc::downgrade(&inner);
    let weak_ctx = Rc::downgrade(ctx);
    *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let Some(inner) = weak_inner.upgrade() else {
            return;
        };
        inner.raf_id.set(None);
        let Some(ctx) = weak_ctx.upgrade() else {
            return;
        };
        let keep_going = ctx.borrow_mut().frame(now_ms);
        if keep_going {
            inner.request();
        }
    }) as Box<dyn FnMut(f64)>));
    if ctx.borrow().engine.is_running() {
        inner.request();
    }
    FrameLoop { inner }
}
