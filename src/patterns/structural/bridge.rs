use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// Implementation side of the bridge.
pub trait Device {
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> i32;
    fn set_volume(&mut self, volume: i32);
    fn channel(&self) -> i32;
    fn set_channel(&mut self, channel: i32);
    fn status(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DeviceState {
    on: bool,
    volume: i32,
    channel: i32,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            on: false,
            volume: 30,
            channel: 1,
        }
    }
}

impl DeviceState {
    fn status(&self, title: &str) -> Vec<String> {
        let rule = "-".repeat(26);
        vec![
            rule.clone(),
            format!("| I'm {}.", title),
            format!("| I'm {}", if self.on { "enabled" } else { "disabled" }),
            format!("| Current volume is {}%", self.volume),
            format!("| Current channel is {}", self.channel),
            rule,
        ]
    }
}

macro_rules! impl_device {
    ($device:ty, $title:expr) => {
        impl Device for $device {
            fn is_enabled(&self) -> bool {
                self.state.on
            }

            fn enable(&mut self) {
                self.state.on = true;
            }

            fn disable(&mut self) {
                self.state.on = false;
            }

            fn volume(&self) -> i32 {
                self.state.volume
            }

            fn set_volume(&mut self, volume: i32) {
                self.state.volume = volume.clamp(0, 100);
            }

            fn channel(&self) -> i32 {
                self.state.channel
            }

            fn set_channel(&mut self, channel: i32) {
                self.state.channel = channel;
            }

            fn status(&self) -> Vec<String> {
                self.state.status($title)
            }
        }
    };
}

#[derive(Debug, Default)]
pub struct Tv {
    state: DeviceState,
}

#[derive(Debug, Default)]
pub struct Radio {
    state: DeviceState,
}

impl_device!(Tv, "TV set");
impl_device!(Radio, "radio");

/// Abstraction side: remotes only talk to `Device`.
pub struct BasicRemote<'d> {
    device: &'d mut dyn Device,
}

impl<'d> BasicRemote<'d> {
    pub fn new(device: &'d mut dyn Device) -> Self {
        Self { device }
    }

    pub fn power(&mut self, ctx: &mut DemoContext<'_>) {
        ctx.say("Remote: power toggle");
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    pub fn volume_down(&mut self, ctx: &mut DemoContext<'_>) {
        ctx.say("Remote: volume down");
        let volume = self.device.volume();
        self.device.set_volume(volume - 10);
    }

    pub fn volume_up(&mut self, ctx: &mut DemoContext<'_>) {
        ctx.say("Remote: volume up");
        let volume = self.device.volume();
        self.device.set_volume(volume + 10);
    }

    pub fn channel_down(&mut self, ctx: &mut DemoContext<'_>) {
        ctx.say("Remote: channel down");
        let channel = self.device.channel();
        self.device.set_channel(channel - 1);
    }

    pub fn channel_up(&mut self, ctx: &mut DemoContext<'_>) {
        ctx.say("Remote: channel up");
        let channel = self.device.channel();
        self.device.set_channel(channel + 1);
    }
}

pub struct AdvancedRemote<'d> {
    basic: BasicRemote<'d>,
}

impl<'d> AdvancedRemote<'d> {
    pub fn new(device: &'d mut dyn Device) -> Self {
        Self {
            basic: BasicRemote::new(device),
        }
    }

    pub fn basic(&mut self) -> &mut BasicRemote<'d> {
        &mut self.basic
    }

    pub fn mute(&mut self, ctx: &mut DemoContext<'_>) {
        ctx.say("Remote: mute");
        self.basic.device.set_volume(0);
    }
}

fn print_status(ctx: &mut DemoContext<'_>, device: &dyn Device) {
    for line in device.status() {
        ctx.say(line);
    }
}

pub struct BridgeDemo;

impl Demo for BridgeDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "bridge-remotes",
            pattern: "Bridge",
            category: Category::Structural,
            summary: "Remotes and devices vary independently behind one interface",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut tv = Tv::default();
        BasicRemote::new(&mut tv).power(ctx);
        print_status(ctx, &tv);

        let mut tv = Tv::default();
        {
            let mut remote = AdvancedRemote::new(&mut tv);
            remote.basic().power(ctx);
            remote.mute(ctx);
        }
        print_status(ctx, &tv);

        let mut radio = Radio::default();
        BasicRemote::new(&mut radio).power(ctx);
        print_status(ctx, &radio);

        let mut radio = Radio::default();
        {
            let mut remote = AdvancedRemote::new(&mut radio);
            remote.basic().power(ctx);
            remote.mute(ctx);
        }
        print_status(ctx, &radio);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_volume_is_clamped() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let mut radio = Radio::default();
        {
            let mut remote = BasicRemote::new(&mut radio);
            for _ in 0..10 {
                remote.volume_up(&mut ctx);
            }
        }
        assert_eq!(radio.volume(), 100);

        {
            let mut remote = BasicRemote::new(&mut radio);
            for _ in 0..12 {
                remote.volume_down(&mut ctx);
            }
            remote.channel_up(&mut ctx);
            remote.channel_up(&mut ctx);
            remote.channel_down(&mut ctx);
        }
        assert_eq!(radio.volume(), 0);
        assert_eq!(radio.channel(), 2);
    }

    #[test]
    fn test_disabled_status_line_is_framed() {
        let status = Tv::default().status();
        assert_eq!(status[2], "| I'm disabled");
        assert_eq!(status.len(), 6);
    }
}
