use sparkle_core::InteractiveHandle;
use web_sys as web;

/// Maps DOM elements to the engine's interactive handles.
#[derive(Default)]
pub struct InteractiveRegistry {
    next: u32,
    entries: Vec<(web::Element, InteractiveHandle)>,
}

impl InteractiveRegistry {
    /// Returns `None` if the element is already registered.
    pub fn insert(&mut self, el: &web::Element) -> Option<InteractiveHandle> {
        if self.handle_of(el).is_some() {
            return None;
        }
        let handle = InteractiveHandle(self.next);
        self.next = self.next.wrapping_add(1);
        self.entries.push((el.clone(), handle));
        Some(handle)
    }

    pub fn remove(&mut self, el: &web::Element) -> Option<InteractiveHandle> {
        let pos = self.entries.iter().position(|(e, _)| e == el)?;
        Some(self.entries.swap_remove(pos).1)
    }

    pub fn handle_of(&self, el: &web::Element) -> Option<InteractiveHandle> {
        self.entries.iter().find(|(e, _)| e == el).map(|(_, h)| *h)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(web::Element, InteractiveHandle)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
