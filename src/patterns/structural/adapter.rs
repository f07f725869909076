use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait RoundPeg {
    fn radius(&self) -> f64;
}

pub struct PlainRoundPeg {
    radius: f64,
}

impl PlainRoundPeg {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl RoundPeg for PlainRoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn fits(&self, peg: &dyn RoundPeg) -> bool {
        self.radius >= peg.radius()
    }
}

/// Written long ago, knows nothing about round holes.
pub struct SquarePeg {
    width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn square(&self) -> f64 {
        self.width.powi(2)
    }
}

pub struct SquarePegAdapter<'a> {
    peg: &'a SquarePeg,
}

impl<'a> SquarePegAdapter<'a> {
    pub fn new(peg: &'a SquarePeg) -> Self {
        Self { peg }
    }
}

impl RoundPeg for SquarePegAdapter<'_> {
    /// Smallest circle radius that fits the square.
    fn radius(&self) -> f64 {
        self.peg.width() * std::f64::consts::SQRT_2 / 2.0
    }
}

pub struct PegAdapterDemo;

impl Demo for PegAdapterDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "adapter-pegs",
            pattern: "Adapter",
            category: Category::Structural,
            summary: "An adapter lets square pegs be measured against round holes",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let hole = RoundHole::new(5.0);
        let peg = PlainRoundPeg::new(5.0);
        if hole.fits(&peg) {
            ctx.say("Round peg r5 fits round hole r5.");
        }

        let small = SquarePeg::new(2.0);
        let large = SquarePeg::new(20.0);
        tracing::debug!("📐 Square pegs of area {} and {}", small.square(), large.square());

        if hole.fits(&SquarePegAdapter::new(&small)) {
            ctx.say("Square peg w2 fits round hole r5.");
        }
        if !hole.fits(&SquarePegAdapter::new(&large)) {
            ctx.say("Square peg w20 does not fit into round hole r5.");
        }
        Ok(())
    }
}

// 插座

pub trait EuropeanSocketInterface {
    fn voltage(&self) -> u32;
    fn live(&self) -> i32;
    fn neutral(&self) -> i32;
    fn earth(&self) -> i32;
}

pub trait UsaSocketInterface {
    fn voltage(&self) -> u32;
    fn live(&self) -> i32;
    fn neutral(&self) -> i32;
}

pub struct EuropeanSocket;

impl EuropeanSocketInterface for EuropeanSocket {
    fn voltage(&self) -> u32 {
        230
    }

    fn live(&self) -> i32 {
        1
    }

    fn neutral(&self) -> i32 {
        -1
    }

    fn earth(&self) -> i32 {
        0
    }
}

/// A European socket wired straight in, without stepping down the voltage.
pub struct RawPlug<T>(pub T);

impl<T: EuropeanSocketInterface> UsaSocketInterface for RawPlug<T> {
    fn voltage(&self) -> u32 {
        self.0.voltage()
    }

    fn live(&self) -> i32 {
        self.0.live()
    }

    fn neutral(&self) -> i32 {
        self.0.neutral()
    }
}

pub struct SocketAdapter<T> {
    socket: T,
}

impl<T: EuropeanSocketInterface> SocketAdapter<T> {
    pub fn new(socket: T) -> Self {
        Self { socket }
    }
}

impl<T: EuropeanSocketInterface> UsaSocketInterface for SocketAdapter<T> {
    fn voltage(&self) -> u32 {
        110
    }

    fn live(&self) -> i32 {
        self.socket.live()
    }

    fn neutral(&self) -> i32 {
        self.socket.neutral()
    }
}

pub struct AmericanKettle<'a> {
    power: &'a dyn UsaSocketInterface,
}

impl<'a> AmericanKettle<'a> {
    pub fn new(power: &'a dyn UsaSocketInterface) -> Self {
        Self { power }
    }

    pub fn boil(&self) -> &'static str {
        if self.power.voltage() > 110 {
            "Kettle on fire!"
        } else if self.power.live() == 1 && self.power.neutral() == -1 {
            "Coffee time!"
        } else {
            "No power."
        }
    }
}

pub struct SocketAdapterDemo;

impl Demo for SocketAdapterDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "adapter-sockets",
            pattern: "Adapter",
            category: Category::Structural,
            summary: "A 110 V adapter lets an American kettle use a European socket",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let raw = RawPlug(EuropeanSocket);
        tracing::debug!("🔌 European socket earth pin: {}", raw.0.earth());
        ctx.say(AmericanKettle::new(&raw).boil());

        let adapter = SocketAdapter::new(EuropeanSocket);
        ctx.say(AmericanKettle::new(&adapter).boil());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_radius() {
        let peg = SquarePeg::new(10.0);
        let adapter = SquarePegAdapter::new(&peg);
        assert!((adapter.radius() - 7.0710678).abs() < 1e-6);
        assert!(!RoundHole::new(7.0).fits(&adapter));
        assert!(RoundHole::new(7.1).fits(&adapter));
    }

    #[test]
    fn test_kettle_needs_adapter() {
        assert_eq!(AmericanKettle::new(&RawPlug(EuropeanSocket)).boil(), "Kettle on fire!");
        assert_eq!(
            AmericanKettle::new(&SocketAdapter::new(EuropeanSocket)).boil(),
            "Coffee time!"
        );
    }
}
