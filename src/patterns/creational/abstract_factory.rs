use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};

// GUI 元件家族

pub trait Button {
    fn paint(&self, ctx: &mut DemoContext<'_>);
}

pub trait Checkbox {
    fn paint(&self, ctx: &mut DemoContext<'_>);
}

pub struct MacOsButton;
pub struct WindowsButton;
pub struct MacOsCheckbox;
pub struct WindowsCheckbox;

impl Button for MacOsButton {
    fn paint(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("You have created MacOSButton.");
    }
}

impl Button for WindowsButton {
    fn paint(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("You have created WindowsButton.");
    }
}

impl Checkbox for MacOsCheckbox {
    fn paint(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("You have created MacOSCheckbox.");
    }
}

impl Checkbox for WindowsCheckbox {
    fn paint(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("You have created WindowsCheckbox.");
    }
}

/// Knows every product type of one platform.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct MacOsFactory;
pub struct WindowsFactory;

impl GuiFactory for MacOsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacOsCheckbox)
    }
}

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn paint(&self, ctx: &mut DemoContext<'_>) {
        self.button.paint(ctx);
        self.checkbox.paint(ctx);
    }
}

pub struct GuiFactoryDemo;

impl Demo for GuiFactoryDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "abstract-factory-gui",
            pattern: "Abstract Factory",
            category: Category::Creational,
            summary: "One factory per platform builds a matching button and checkbox",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        // 偶數選 MacOS
        let factory: Box<dyn GuiFactory> = if ctx.roll(1..=10) % 2 == 0 {
            Box::new(MacOsFactory)
        } else {
            Box::new(WindowsFactory)
        };

        Application::new(factory.as_ref()).paint(ctx);
        Ok(())
    }
}

// 2D / 3D 形狀家族

pub trait Shape2D {
    fn draw(&self, ctx: &mut DemoContext<'_>);
}

pub trait Shape3D {
    fn build(&self, ctx: &mut DemoContext<'_>);
}

pub struct Circle;
pub struct Square;
pub struct Sphere;
pub struct Cube;

impl Shape2D for Circle {
    fn draw(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Circle.draw");
    }
}

impl Shape2D for Square {
    fn draw(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Square.draw");
    }
}

impl Shape3D for Sphere {
    fn build(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Sphere.build");
    }
}

impl Shape3D for Cube {
    fn build(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Cube.build");
    }
}

pub struct Shape2DFactory;
pub struct Shape3DFactory;

impl Shape2DFactory {
    pub fn get_shape(sides: u32) -> Result<Box<dyn Shape2D>> {
        match sides {
            1 => Ok(Box::new(Circle)),
            4 => Ok(Box::new(Square)),
            n => Err(CatalogError::unknown_variant(
                "2D shape with sides:",
                n.to_string(),
            )),
        }
    }
}

impl Shape3DFactory {
    /// `faces` is the number of faces of the solid.
    pub fn get_shape(faces: u32) -> Result<Box<dyn Shape3D>> {
        match faces {
            1 => Ok(Box::new(Sphere)),
            6 => Ok(Box::new(Cube)),
            n => Err(CatalogError::unknown_variant(
                "3D shape with faces:",
                n.to_string(),
            )),
        }
    }
}

pub struct ShapeFamiliesDemo;

impl Demo for ShapeFamiliesDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "abstract-factory-shapes",
            pattern: "Abstract Factory",
            category: Category::Creational,
            summary: "2D and 3D factories pick a shape from its side or face count",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        Shape2DFactory::get_shape(1)?.draw(ctx);
        Shape2DFactory::get_shape(4)?.draw(ctx);
        Shape3DFactory::get_shape(1)?.build(ctx);
        Shape3DFactory::get_shape(6)?.build(ctx);

        match Shape2DFactory::get_shape(3) {
            Ok(shape) => shape.draw(ctx),
            Err(e) => ctx.say(e.to_string()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_factories_reject_unknown_counts() {
        assert!(Shape2DFactory::get_shape(3).is_err());
        assert!(Shape3DFactory::get_shape(4).is_err());
        assert!(Shape3DFactory::get_shape(6).is_ok());
    }

    #[test]
    fn test_gui_products_match_platform() {
        for seed in 0..8 {
            let mut console = BufferConsole::new();
            let mut ctx = DemoContext::new(&mut console, DemoSettings::default().with_seed(seed));
            GuiFactoryDemo.run(&mut ctx).unwrap();
            drop(ctx);

            let lines = console.lines();
            assert_eq!(lines.len(), 2);
            let platform = if lines[0].contains("MacOS") { "MacOS" } else { "Windows" };
            assert_eq!(lines[1], format!("You have created {}Checkbox.", platform));
        }
    }
}
