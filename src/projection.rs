//! DOM projection of the cursor engine.
//!
//! All generated elements live under one fixed-position root appended to
//! `<body>`. Cursor layers are repositioned straight from pointer events
//! ([`DomProjection::paint_pointer`]); sparkles only change through frame
//! snapshots and are reconciled by id so each sparkle keeps its element for
//! its whole life.

use crate::constants::*;
use crate::dom;
use crate::style;
use fnv::{FnvHashMap, FnvHashSet};
use sparkle_core::{CursorLayers, FrameSnapshot, PointerView};
use web_sys as web;

pub struct DomProjection {
    document: web::Document,
    root: web::Element,
    keyframes: web::Element,
    trail: web::Element,
    halo: web::Element,
    ring: web::Element,
    dot: web::Element,
    sparkles: FnvHashMap<u64, web::Element>,
    detached: bool,
}

impl DomProjection {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
        let keyframes = dom::create_child(document, &body, "style", "")?;
        keyframes.set_text_content(Some(KEYFRAMES_CSS));
        let root = match dom::create_child(document, &body, "div", ROOT_CLASS) {
            Ok(root) => root,
            Err(e) => {
                keyframes.remove();
                return Err(e);
            }
        };
        let (trail, halo, ring, dot) = match build_layers(document, &root) {
            Ok(layers) => layers,
            Err(e) => {
                root.remove();
                keyframes.remove();
                return Err(e);
            }
        };

        let projection = Self {
            document: document.clone(),
            root,
            keyframes,
            trail,
            halo,
            ring,
            dot,
            sparkles: FnvHashMap::default(),
            detached: false,
        };
        projection.paint_pointer(&PointerView::default());
        Ok(projection)
    }

    /// Immediate paint: cursor layers only, outside the frame cadence.
    pub fn paint_pointer(&self, p: &PointerView) {
        let layers = CursorLayers::for_pointer(p);
        dom::set_style(&self.trail, &style::trail_css(p, &layers));
        dom::set_style(&self.halo, &style::halo_css(p, &layers));
        dom::set_style(&self.ring, &style::ring_css(p, &layers));
        dom::set_style(&self.dot, &style::dot_css(p, &layers));
        let cl = self.dot.class_list();
        _ = cl.toggle_with_force("hover", p.is_hovering);
        _ = cl.toggle_with_force("clicking", p.is_pressing);
    }

    pub fn render(&mut self, snap: &FrameSnapshot) {
        self.paint_pointer(&snap.pointer);

        let live: FnvHashSet<u64> = snap.particles.iter().map(|s| s.id).collect();
        self.sparkles.retain(|id, el| {
            let keep = live.contains(id);
            if !keep {
                el.remove();
            }
            keep
        });

        for s in &snap.particles {
            if !self.sparkles.contains_key(&s.id) {
                match dom::create_child(&self.document, &self.root, "div", SPARKLE_CLASS) {
                    Ok(el) => {
                        self.sparkles.insert(s.id, el);
                    }
                    Err(e) => {
                        log::warn!("[render] sparkle {} skipped: {:?}", s.id, e);
                        continue;
                    }
                }
            }
            if let Some(el) = self.sparkles.get(&s.id) {
                dom::set_style(el, &style::sparkle_css(s));
            }
        }
    }

    pub fn sparkle_count(&self) -> usize {
        self.sparkles.len()
    }

    pub fn clear_sparkles(&mut self) {
        for (_, el) in self.sparkles.drain() {
            el.remove();
        }
    }

    pub fn set_visible(&self, visible: bool) {
        dom::set_style(&self.root, style::visibility_css(visible));
    }

    /// Detaches everything this projection added to the document. Only the
    /// first call does anything.
    pub fn remove(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.clear_sparkles();
        self.root.remove();
        self.keyframes.remove();
    }
}

type Layers = (web::Element, web::Element, web::Element, web::Element);

// Appended back to front; z-index decides the final order anyway
fn build_layers(document: &web::Document, root: &web::Element) -> anyhow::Result<Layers> {
    let trail = dom::create_child(document, root, "div", TRAIL_CLASS)?;
    let halo = dom::create_child(document, root, "div", HALO_CLASS)?;
    for i in 0..HALO_DOTS.len() {
        let d = dom::create_child(document, &halo, "div", HALO_DOT_CLASS)?;
        if let Some(css) = style::halo_dot_css(i) {
            dom::set_style(&d, &css);
        }
    }
    let ring = dom::create_child(document, root, "div", RING_CLASS)?;
    let dot = dom::create_child(document, root, "div", DOT_CLASS)?;
    Ok((trail, halo, ring, dot))
}

// A mount that fails halfway drops its projection without going through
// `Mount::drop`; the layers must not outlive it.
impl Drop for DomProjection {
    fn drop(&mut self) {
        self.remove();
    }
}
