//! The DOM-facing host object.
//!
//! A `Device` owns the distinguished top-level element (the application
//! root, whose class list reflects global "any animation active" state)
//! and hands out container elements for UI code to assemble. Animation
//! modifiers are installed alongside the device at construction time by
//! the application bootstrap; the device itself knows nothing about
//! animation.

use std::cell::Cell;

use crate::element::Element;

/// Id given to the top-level application element.
const TOP_LEVEL_ID: &str = "app";

/// Element factory and top-level element holder for one screen.
#[derive(Debug)]
pub struct Device {
    top_level: Element,
    anonymous_containers: Cell<u64>,
}

impl Device {
    /// Create a device with an empty top-level element.
    pub fn new() -> Self {
        Self {
            top_level: Element::new(TOP_LEVEL_ID),
            anonymous_containers: Cell::new(0),
        }
    }

    /// Create a device sized to a layout, with the layout's classes on
    /// the top-level element.
    pub fn with_layout(width: u32, height: u32, classes: &[String]) -> Self {
        let device = Self::new();
        device
            .top_level
            .set_style_property("width", &format!("{width}px"));
        device
            .top_level
            .set_style_property("height", &format!("{height}px"));
        for class in classes {
            device.top_level.add_class(class);
        }
        log::debug!("device created for {width}x{height} layout");
        device
    }

    /// Create a detached container element.
    ///
    /// Pass `None` for an anonymous container; the device assigns it a
    /// generated id.
    pub fn create_container(&self, id: Option<&str>) -> Element {
        match id {
            Some(id) => Element::new(id),
            None => {
                let n = self.anonymous_containers.get() + 1;
                self.anonymous_containers.set(n);
                Element::new(&format!("container_{n}"))
            }
        }
    }

    /// Append `child` to `parent`'s children.
    pub fn append_child_element(&self, parent: &Element, child: &Element) {
        parent.append_child(child);
    }

    /// Handle to the single top-level application element.
    pub fn top_level_element(&self) -> Element {
        self.top_level.clone()
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}
