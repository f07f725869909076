use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};

pub trait Shape {
    fn draw(&self, ctx: &mut DemoContext<'_>);
}

pub struct Circle;
pub struct Square;

impl Shape for Circle {
    fn draw(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Circle.draw");
    }
}

impl Shape for Square {
    fn draw(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Square.draw");
    }
}

/// Picks the concrete shape at run time from its name.
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn get_shape(shape_type: &str) -> Result<Box<dyn Shape>> {
        match shape_type {
            "circle" => Ok(Box::new(Circle)),
            "square" => Ok(Box::new(Square)),
            other => Err(CatalogError::unknown_variant("shape", other)),
        }
    }
}

pub struct FactoryDemo;

impl Demo for FactoryDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "factory-shapes",
            pattern: "Factory",
            category: Category::Creational,
            summary: "A static factory maps a shape name to its implementation",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        for name in ["circle", "square", "triange"] {
            match ShapeFactory::get_shape(name) {
                Ok(shape) => shape.draw(ctx),
                Err(e) => {
                    tracing::debug!("🔍 Factory refused '{}'", name);
                    ctx.say(e.to_string());
                }
            }
        }
        Ok(())
    }
}
