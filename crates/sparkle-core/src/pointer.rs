//! Pointer position and interaction flags.
//!
//! The tracker keeps a single authoritative snapshot of where the pointer is
//! and what it is doing. Position updates are last-write-wins with no
//! smoothing, so the cursor paints exactly at the last reported location.

use fnv::FnvHashSet;
use glam::Vec2;

/// Opaque identity of an element that counts as interactive (links, buttons,
/// form fields, ...). The host decides how to map its elements to handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractiveHandle(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub is_hovering: bool,
    pub is_pressing: bool,
    pub is_touch_device: bool,
}

#[derive(Debug)]
pub struct PointerTracker {
    state: PointerState,
    registered: FnvHashSet<InteractiveHandle>,
    hovered: FnvHashSet<InteractiveHandle>,
    touch_width_threshold: f64,
}

impl PointerTracker {
    pub fn new(viewport_width: f64, touch_width_threshold: f64) -> Self {
        let mut tracker = Self {
            state: PointerState::default(),
            registered: FnvHashSet::default(),
            hovered: FnvHashSet::default(),
            touch_width_threshold,
        };
        tracker.state.is_touch_device = tracker.classify(viewport_width);
        tracker
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    #[inline]
    pub fn is_touch_device(&self) -> bool {
        self.state.is_touch_device
    }

    #[inline]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.state.position = Vec2::new(x, y);
    }

    #[inline]
    pub fn on_press(&mut self) {
        self.state.is_pressing = true;
    }

    #[inline]
    pub fn on_release(&mut self) {
        self.state.is_pressing = false;
    }

    /// Returns false when the handle was already registered.
    pub fn register_interactive(&mut self, handle: InteractiveHandle) -> bool {
        self.registered.insert(handle)
    }

    /// Forgets the handle, including any hover it currently contributes.
    pub fn unregister_interactive(&mut self, handle: InteractiveHandle) -> bool {
        self.hovered.remove(&handle);
        self.refresh_hover();
        self.registered.remove(&handle)
    }

    pub fn is_registered(&self, handle: InteractiveHandle) -> bool {
        self.registered.contains(&handle)
    }

    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    pub fn on_enter_interactive(&mut self, handle: InteractiveHandle) {
        if self.registered.contains(&handle) {
            self.hovered.insert(handle);
            self.refresh_hover();
        }
    }

    pub fn on_leave_interactive(&mut self, handle: InteractiveHandle) {
        if self.hovered.remove(&handle) {
            self.refresh_hover();
        }
    }

    /// Drops press and hover. Releases and leaves are not observed while the
    /// viewport is touch-sized, so neither flag may carry across that span.
    pub fn reset_interaction(&mut self) {
        self.state.is_pressing = false;
        self.hovered.clear();
        self.refresh_hover();
    }

    /// Reclassifies the device from the new viewport width. Returns true when
    /// the touch/non-touch classification flipped.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let touch = self.classify(viewport_width);
        let changed = touch != self.state.is_touch_device;
        self.state.is_touch_device = touch;
        changed
    }

    #[inline]
    fn classify(&self, viewport_width: f64) -> bool {
        viewport_width <= self.touch_width_threshold
    }

    #[inline]
    fn refresh_hover(&mut self) {
        self.state.is_hovering = !self.hovered.is_empty();
    }
}
