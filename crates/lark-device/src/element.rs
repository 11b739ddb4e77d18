//! Element handles.
//!
//! An `Element` is a cheaply cloneable handle to a node in the retained
//! element tree: an id, a class list, an inline style, and children.
//! Handles share the underlying node, so a clone captured by an animation
//! callback observes (and applies) the same mutations the caller sees.
//! The tree is single-threaded by construction.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::style::Style;

struct ElementInner {
    id: String,
    classes: BTreeSet<String>,
    style: Style,
    children: Vec<Element>,
}

/// Shared handle to an element node.
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementInner>>,
}

impl Element {
    /// Create a detached element with the given id.
    pub fn new(id: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementInner {
                id: id.to_string(),
                classes: BTreeSet::new(),
                style: Style::new(),
                children: Vec::new(),
            })),
        }
    }

    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    /// True if both handles refer to the same underlying node.
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn add_class(&self, class: &str) {
        self.inner.borrow_mut().classes.insert(class.to_string());
    }

    pub fn remove_class(&self, class: &str) {
        self.inner.borrow_mut().classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    /// Snapshot of the class list, in name order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.borrow().classes.iter().cloned().collect()
    }

    /// Write a style property, creating it if it was never set.
    pub fn set_style_property(&self, name: &str, value: &str) {
        self.inner.borrow_mut().style.set_property(name, value);
    }

    /// Read a style property's written value.
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.inner.borrow().style.property(name).map(str::to_string)
    }

    /// Read the numeric part of a style property, if there is one.
    pub fn style_numeric(&self, name: &str) -> Option<f64> {
        self.inner.borrow().style.numeric_value(name)
    }

    /// Snapshot of the whole style object.
    pub fn style(&self) -> Style {
        self.inner.borrow().style.clone()
    }

    pub fn append_child(&self, child: &Element) {
        self.inner.borrow_mut().children.push(child.clone());
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Element")
            .field("id", &inner.id)
            .field("classes", &inner.classes)
            .field("style", &inner.style)
            .field("children", &inner.children.len())
            .finish()
    }
}
