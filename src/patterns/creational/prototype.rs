use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use std::any::Any;
use std::collections::BTreeMap;

/// Shapes copy themselves, so callers never need the concrete type.
pub trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn as_any(&self) -> &dyn Any;
    fn same_as(&self, other: &dyn Prototype) -> bool;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeBase {
    pub x: i32,
    pub y: i32,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    pub base: ShapeBase,
    pub radius: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rectangle {
    pub base: ShapeBase,
    pub width: u32,
    pub height: u32,
}

macro_rules! impl_prototype {
    ($shape:ty) => {
        impl Prototype for $shape {
            fn clone_box(&self) -> Box<dyn Prototype> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn same_as(&self, other: &dyn Prototype) -> bool {
                // 型別不同就不相等
                other
                    .as_any()
                    .downcast_ref::<$shape>()
                    .map(|other| self == other)
                    .unwrap_or(false)
            }
        }
    };
}

impl_prototype!(Circle);
impl_prototype!(Rectangle);

fn same_object(a: &dyn Prototype, b: &dyn Prototype) -> bool {
    std::ptr::eq(a as *const dyn Prototype as *const (), b as *const dyn Prototype as *const ())
}

/// Registry of preconfigured shapes; `get` always hands out a copy.
pub struct ShapeCache {
    cache: BTreeMap<String, Box<dyn Prototype>>,
}

impl Default for ShapeCache {
    fn default() -> Self {
        let circle = Circle {
            base: ShapeBase {
                x: 5,
                y: 7,
                color: "Green".to_string(),
            },
            radius: 45,
        };
        let rectangle = Rectangle {
            base: ShapeBase {
                x: 6,
                y: 9,
                color: "Blue".to_string(),
            },
            width: 8,
            height: 10,
        };

        let mut cache = Self {
            cache: BTreeMap::new(),
        };
        cache.put("Big green circle", Box::new(circle));
        cache.put("Medium blue rectangle", Box::new(rectangle));
        cache
    }
}

impl ShapeCache {
    pub fn put(&mut self, key: &str, shape: Box<dyn Prototype>) {
        self.cache.insert(key.to_string(), shape);
    }

    pub fn get(&self, key: &str) -> Result<Box<dyn Prototype>> {
        self.cache
            .get(key)
            .map(|shape| shape.clone_box())
            .ok_or_else(|| CatalogError::unknown_variant("cached shape", key))
    }
}

pub struct ShapePrototypeDemo;

impl ShapePrototypeDemo {
    fn clone_and_compare(ctx: &mut DemoContext<'_>, shapes: &[Box<dyn Prototype>]) {
        let copies: Vec<Box<dyn Prototype>> = shapes.iter().map(|s| s.clone_box()).collect();

        for (index, (shape, copy)) in shapes.iter().zip(&copies).enumerate() {
            if same_object(shape.as_ref(), copy.as_ref()) {
                ctx.say(format!("{}: Shape objects are the same (booo!)", index));
                continue;
            }
            ctx.say(format!("{}: Shapes are different objects (yay!)", index));
            if shape.same_as(copy.as_ref()) {
                ctx.say(format!("{}: And they are identical (yay)", index));
            } else {
                ctx.say(format!("{}: But they are not identical (booo!)", index));
            }
        }
    }
}

impl Demo for ShapePrototypeDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "prototype-shapes",
            pattern: "Prototype",
            category: Category::Creational,
            summary: "Shapes clone themselves, and a registry hands out copies",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let circle = Circle {
            base: ShapeBase {
                x: 10,
                y: 20,
                ..ShapeBase::default()
            },
            radius: 15,
        };
        let another_circle = circle.clone_box();
        let rectangle = Rectangle {
            width: 10,
            height: 20,
            ..Rectangle::default()
        };

        let shapes: Vec<Box<dyn Prototype>> =
            vec![Box::new(circle), another_circle, Box::new(rectangle)];
        Self::clone_and_compare(ctx, &shapes);

        let cache = ShapeCache::default();
        let shape1 = cache.get("Big green circle")?;
        let shape2 = cache.get("Medium blue rectangle")?;
        let shape3 = cache.get("Medium blue rectangle")?;

        if !same_object(shape1.as_ref(), shape2.as_ref()) && !shape1.same_as(shape2.as_ref()) {
            ctx.say("Big green circle != Medium blue rectangle (yay!)");
        } else {
            ctx.say("Big green circle == Medium blue rectangle (booo!)");
        }

        if same_object(shape2.as_ref(), shape3.as_ref()) {
            ctx.say("Rectangle objects are the same (booo!)");
        } else {
            ctx.say("Medium blue rectangles are two different objects (yay!)");
            if shape2.same_as(shape3.as_ref()) {
                ctx.say("And they are identical (yay!)");
            } else {
                ctx.say("But they are not identical (booo!)");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }
}

pub struct PointPrototypeDemo;

impl Demo for PointPrototypeDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "prototype-point",
            pattern: "Prototype",
            category: Category::Creational,
            summary: "A copied point moves independently of the original",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut point = Point::new(0, 0);
        let mut cloned_point = point;

        point.translate(1, 1);
        ctx.say(format!("{}, {}", point.x, point.y));

        cloned_point.translate(2, 2);
        ctx.say(format!("{}, {}", cloned_point.x, cloned_point.y));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_equal_but_distinct() {
        let circle: Box<dyn Prototype> = Box::new(Circle {
            radius: 3,
            ..Circle::default()
        });
        let copy = circle.clone_box();

        assert!(circle.same_as(copy.as_ref()));
        assert!(!same_object(circle.as_ref(), copy.as_ref()));
    }

    #[test]
    fn test_different_types_never_equal() {
        let circle = Circle::default();
        let rectangle = Rectangle::default();
        assert!(!circle.same_as(&rectangle));
    }

    #[test]
    fn test_cache_unknown_key() {
        let cache = ShapeCache::default();
        assert!(cache.get("Tiny red triangle").is_err());
    }
}
