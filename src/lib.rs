//! Lark: a device-abstraction UI layer for TV applications.
//!
//! One UI codebase targets many TV browser engines by talking to a
//! [`Device`] instead of the engine, with per-target behaviour supplied
//! by modifier modules named in the target's configuration document.
//! This crate wires the pieces together: it loads a [`DeviceConfig`],
//! builds the device for the best-fitting layout, and installs the
//! configured animation modifier.
//!
//! ```
//! use lark::{AnimatedDevice, AnimationRequest, DeviceConfig};
//!
//! let config = DeviceConfig::from_json(
//!     r#"{
//!         "modules": { "base": "lark/devices/browserdevice",
//!                      "modifiers": ["lark/devices/anim/noanim"] },
//!         "layouts": [{ "width": 960, "height": 540,
//!                       "module": "layouts/default", "classes": [] }]
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut device = AnimatedDevice::from_config(&config, 1280, 720).unwrap();
//! let panel = device.device().create_container(Some("panel"));
//! device.move_element_to(AnimationRequest::new(&panel).to("left", 100.0));
//! assert_eq!(panel.style_property("left").as_deref(), Some("100px"));
//! ```

pub use lark_anim::{
    AnimationId, AnimationModifier, AnimationRequest, IntervalTicker, ManualTicker,
    NoopModifier, SchedulerHandle, TweenedModifier,
};
pub use lark_config::{AnimModifier, ConfigError, DeviceConfig};
pub use lark_device::{Device, Element, Style};

/// A device with its configured animation modifier installed.
///
/// This is the surface application code holds: the device's element
/// primitives plus the animation operations, routed through whichever
/// modifier the target's configuration selected.
pub struct AnimatedDevice {
    device: Device,
    modifier: Box<dyn AnimationModifier>,
}

impl AnimatedDevice {
    /// Build the device for a configuration and screen size.
    ///
    /// Picks the best-fitting layout, sizes the top-level element to it,
    /// and installs the configured animation modifier.
    pub fn from_config(
        config: &DeviceConfig,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<Self, ConfigError> {
        let layout = config.layout_for(screen_width, screen_height)?;
        let device = Device::with_layout(layout.width, layout.height, &layout.classes);
        let modifier: Box<dyn AnimationModifier> = match config.anim_modifier() {
            AnimModifier::Tweened => Box::new(TweenedModifier::new(device.top_level_element())),
            AnimModifier::Noop => Box::new(NoopModifier::new()),
        };
        log::debug!(
            "installed {} animation modifier",
            if modifier.is_animation_disabled() {
                "no-op"
            } else {
                "tweened"
            }
        );
        Ok(Self { device, modifier })
    }

    /// Compose a device with an explicit modifier (tests, embedders).
    pub fn with_modifier(device: Device, modifier: Box<dyn AnimationModifier>) -> Self {
        Self { device, modifier }
    }

    /// The underlying element factory.
    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn scroll_element_to(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        self.modifier.scroll_element_to(request)
    }

    pub fn move_element_to(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        self.modifier.move_element_to(request)
    }

    pub fn hide_element(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        self.modifier.hide_element(request)
    }

    pub fn show_element(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        self.modifier.show_element(request)
    }

    pub fn tween_element_style(&mut self, request: AnimationRequest) -> Option<AnimationId> {
        self.modifier.tween_element_style(request)
    }

    pub fn is_animation_disabled(&self) -> bool {
        self.modifier.is_animation_disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_modifier(anim_module: &str) -> DeviceConfig {
        DeviceConfig::from_json(&format!(
            r#"{{
                "modules": {{
                    "base": "lark/devices/browserdevice",
                    "modifiers": ["lark/devices/{anim_module}"]
                }},
                "layouts": [
                    {{ "width": 960, "height": 540,
                       "module": "layouts/default",
                       "classes": ["browserdevice540p"] }}
                ],
                "deviceConfigurationKey": "devices-html5-1"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_config_selects_noop_modifier() {
        let config = config_with_modifier("anim/noanim");
        let device = AnimatedDevice::from_config(&config, 1280, 720).unwrap();
        assert!(device.is_animation_disabled());
    }

    #[test]
    fn test_config_selects_tweened_modifier() {
        let config = config_with_modifier("anim/tween");
        let device = AnimatedDevice::from_config(&config, 1280, 720).unwrap();
        assert!(!device.is_animation_disabled());
    }

    #[test]
    fn test_device_gets_layout_size_and_classes() {
        let config = config_with_modifier("anim/noanim");
        let device = AnimatedDevice::from_config(&config, 1280, 720).unwrap();
        let top = device.device().top_level_element();
        assert_eq!(top.style_property("width").as_deref(), Some("960px"));
        assert!(top.has_class("browserdevice540p"));
    }

    #[test]
    fn test_operations_route_through_the_installed_modifier() {
        let config = config_with_modifier("anim/noanim");
        let mut device = AnimatedDevice::from_config(&config, 1280, 720).unwrap();
        let panel = device.device().create_container(Some("panel"));

        let id = device.scroll_element_to(AnimationRequest::new(&panel).to("left", 100.0));
        assert!(id.is_none());
        assert_eq!(panel.style_numeric("left"), Some(-100.0));
    }

    #[test]
    fn test_with_modifier_composition() {
        let ticker = ManualTicker::new();
        let device = Device::new();
        let modifier = TweenedModifier::with_scheduler(
            device.top_level_element(),
            ticker.scheduler(),
        );
        let mut device = AnimatedDevice::with_modifier(device, Box::new(modifier));

        let panel = device.device().create_container(Some("panel"));
        device.move_element_to(
            AnimationRequest::new(&panel)
                .to("left", 80.0)
                .duration_ms(40.0),
        );
        ticker.step_frames(3, 20.0);
        assert_eq!(panel.style_property("left").as_deref(), Some("80px"));
    }
}
