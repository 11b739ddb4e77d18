//! Device abstraction for the Lark TV application layer.
//!
//! A `Device` wraps whatever a particular TV browser engine gives us for
//! building a page: element creation, a style object per element, and a
//! class list. UI code never touches the engine directly; it asks the
//! device for containers and mutates them through the narrow surface in
//! this crate. Higher layers (notably `lark-anim`) extend the device with
//! animation behaviour.

pub mod device;
pub mod element;
pub mod style;

pub use device::Device;
pub use element::Element;
pub use style::Style;
