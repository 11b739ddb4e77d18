//! Demo: a carousel scroll and a panel fade on a tween-configured device.
//!
//! The host's frame loop stands in for a real engine's refresh callback,
//! ticking the shared scheduler until the animations settle. Run with
//! `RUST_LOG=debug` to watch the scheduler and tween lifecycle.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use lark::{AnimatedDevice, AnimationRequest, DeviceConfig, SchedulerHandle};

const DEVICE_CONFIG: &str = r#"{
    "modules": {
        "base": "lark/devices/browserdevice",
        "modifiers": ["lark/devices/anim/tween"]
    },
    "input": { "map": {} },
    "layouts": [
        {
            "width": 1280,
            "height": 720,
            "module": "layouts/default",
            "classes": ["browserdevice720p"]
        }
    ],
    "deviceConfigurationKey": "devices-html5-1"
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let config = DeviceConfig::from_json(DEVICE_CONFIG)?;
    let mut device = AnimatedDevice::from_config(&config, 1280, 720)?;

    let mask = device.device().create_container(Some("carousel_mask"));
    let carousel = device.device().create_container(Some("carousel"));
    device.device().append_child_element(&mask, &carousel);
    let panel = device.device().create_container(Some("info_panel"));

    device.scroll_element_to(
        AnimationRequest::new(&carousel)
            .to("left", 300.0)
            .duration_ms(400.0)
            .easing("easeInOutQuad")
            .class_name("scrolling")
            .on_complete(|| log::info!("carousel scroll complete")),
    );
    device.hide_element(
        AnimationRequest::new(&panel)
            .duration_ms(250.0)
            .on_complete(|| log::info!("panel hidden")),
    );

    // Host frame loop: deliver a tick per "refresh" until the scheduler
    // drains.
    let scheduler = SchedulerHandle::global();
    while scheduler.active_count() > 0 {
        thread::sleep(Duration::from_millis(20));
        scheduler.tick();
    }

    println!(
        "carousel: left={}",
        carousel.style_property("left").unwrap_or_default()
    );
    println!(
        "panel: opacity={} visibility={}",
        panel.style_property("opacity").unwrap_or_default(),
        panel.style_property("visibility").unwrap_or_default()
    );
    Ok(())
}
