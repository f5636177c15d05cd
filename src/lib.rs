#![cfg(target_arch = "wasm32")]
use sparkle_core::{CursorEngine, PointerView, SparkleParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod projection;
mod registry;
mod style;

use frame::{FrameContext, FrameLoop};
use projection::DomProjection;
use registry::InteractiveRegistry;

/// A live cursor. Dropping it is the only way out of the mounted state:
/// the pending frame is cancelled, every listener detached, the engine
/// unmounted and the generated DOM removed.
struct Mount {
    ctx: Rc<RefCell<FrameContext>>,
    frame_loop: Option<FrameLoop>,
    _resize: events::Listener,
}

impl Mount {
    fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let width = dom::viewport_width(&window);
        let mut engine = CursorEngine::new(SparkleParams::default(), dom::entropy_seed(), width)?;
        let projection = DomProjection::new(&document)?;
        projection.set_visible(!engine.is_touch_device());

        // Initial scan; later elements go through `CursorHandle::register_interactive`
        let mut registry = InteractiveRegistry::default();
        for el in dom::query_all(&document, constants::INTERACTIVE_SELECTOR)? {
            if let Some(handle) = registry.insert(&el) {
                engine.register_interactive(handle);
            }
        }
        log::info!(
            "[mount] width={} touch={} interactive={}",
            width,
            engine.is_touch_device(),
            registry.len()
        );

        let touch = engine.is_touch_device();
        let ctx = Rc::new(RefCell::new(FrameContext {
            engine,
            projection,
            registry,
            input: None,
        }));
        if !touch {
            let input = events::wire_input_handlers(&ctx)?;
            ctx.borrow_mut().input = Some(input);
        }
        let frame_loop = frame::start_loop(&ctx);
        let resize = events::wire_resize(&window, &ctx, frame_loop.handle())?;
        Ok(Self {
            ctx,
            frame_loop: Some(frame_loop),
            _resize: resize,
        })
    }

    fn register(&self, el: &web::Element) -> anyhow::Result<bool> {
        let handle = {
            let c = &mut *self.ctx.borrow_mut();
            let Some(handle) = c.registry.insert(el) else {
                return Ok(false);
            };
            c.engine.register_interactive(handle);
            handle
        };
        if self.ctx.borrow().input.is_some() {
            let pair = events::wire_interactive(&self.ctx, el, handle)?;
            if let Some(input) = self.ctx.borrow_mut().input.as_mut() {
                input.add_interactive(handle, pair);
            }
        }
        Ok(true)
    }

    fn unregister(&self, el: &web::Element) -> bool {
        let c = &mut *self.ctx.borrow_mut();
        let Some(handle) = c.registry.remove(el) else {
            return false;
        };
        c.engine.unregister_interactive(handle);
        if let Some(input) = c.input.as_mut() {
            input.remove_interactive(handle);
        }
        let view = PointerView::from(c.engine.pointer());
        c.projection.paint_pointer(&view);
        true
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        drop(self.frame_loop.take());
        let input = self.ctx.borrow_mut().input.take();
        drop(input);
        let c = &mut *self.ctx.borrow_mut();
        let sparkles = c.projection.sparkle_count();
        c.engine.unmount();
        c.projection.remove();
        log::info!("[mount] unmounted, removed {} sparkle elements", sparkles);
    }
}

/// JS-facing handle of a mounted cursor.
#[wasm_bindgen]
pub struct CursorHandle {
    mount: Option<Mount>,
}

#[wasm_bindgen]
impl CursorHandle {
    /// Tracks hover on an element added after mount. Returns false if it was
    /// already tracked or the cursor is unmounted.
    pub fn register_interactive(&self, el: web::Element) -> Result<bool, JsValue> {
        match &self.mount {
            Some(m) => m.register(&el).map_err(to_js),
            None => Ok(false),
        }
    }

    pub fn unregister_interactive(&self, el: web::Element) -> bool {
        self.mount.as_ref().is_some_and(|m| m.unregister(&el))
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn unmount(&mut self) {
        self.mount.take();
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:?}", e))
}

#[wasm_bindgen]
pub fn mount_cursor() -> Result<CursorHandle, JsValue> {
    let mount = Mount::new().map_err(|e| {
        log::error!("mount error: {:?}", e);
        to_js(e)
    })?;
    Ok(CursorHandle { mount: Some(mount) })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sparkle-cursor starting");
    Ok(())
}
