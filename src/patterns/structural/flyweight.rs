use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

pub const CANVAS_SIZE: i32 = 500;
const TREE_BYTES: usize = 8;
const TREE_TYPE_BYTES: usize = 30;
const MIB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Green,
    Orange,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Green => "green",
            Color::Orange => "orange",
        };
        f.write_str(name)
    }
}

pub struct Graphics<'c, 'a> {
    ctx: &'c mut DemoContext<'a>,
    color: Color,
}

impl<'c, 'a> Graphics<'c, 'a> {
    pub fn new(ctx: &'c mut DemoContext<'a>) -> Self {
        Self {
            ctx,
            color: Color::Black,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.block(&["      *      "; 3], x, y, width, height);
    }

    pub fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.block(
            &["     ***     ", "    *****    ", "     ***     "],
            x,
            y,
            width,
            height,
        );
    }

    fn block(&mut self, art: &[&str], x: i32, y: i32, width: i32, height: i32) {
        self.ctx.say("-".repeat(48));
        for line in art {
            self.ctx.say(line);
        }
        self.ctx.say(format!(
            "x: {}, y: {}, width: {}, height: {}, color: {}",
            x, y, width, height, self.color
        ));
    }
}

/// Intrinsic state, shared by every tree of the same kind.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    name: String,
    color: Color,
    texture: String,
}

impl TreeType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn draw(&self, graphics: &mut Graphics<'_, '_>, x: i32, y: i32) {
        graphics.set_color(Color::Black);
        graphics.fill_rect(x - 1, y, 3, 5);
        graphics.set_color(self.color);
        graphics.fill_oval(x - 5, y - 10, 10, 10);
    }
}

/// Extrinsic state: only the position is stored per tree.
#[derive(Debug)]
pub struct Tree {
    x: i32,
    y: i32,
    tree_type: Rc<TreeType>,
}

impl Tree {
    pub fn draw(&self, graphics: &mut Graphics<'_, '_>) {
        self.tree_type.draw(graphics, self.x, self.y);
    }
}

#[derive(Debug, Default)]
pub struct TreeFactory {
    cache: HashMap<String, Rc<TreeType>>,
}

impl TreeFactory {
    pub fn get_tree_type(&mut self, name: &str, color: Color, texture: &str) -> Rc<TreeType> {
        let tree_type = self.cache.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!("🌳 New tree type: {}", name);
            Rc::new(TreeType {
                name: name.to_string(),
                color,
                texture: texture.to_string(),
            })
        });
        Rc::clone(tree_type)
    }

    pub fn type_count(&self) -> usize {
        self.cache.len()
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    factory: TreeFactory,
    trees: Vec<Tree>,
}

impl Forest {
    pub fn plant_tree(&mut self, x: i32, y: i32, name: &str, color: Color, texture: &str) {
        let tree_type = self.factory.get_tree_type(name, color, texture);
        self.trees.push(Tree { x, y, tree_type });
    }

    pub fn paint(&self, graphics: &mut Graphics<'_, '_>) {
        for tree in &self.trees {
            tree.draw(graphics);
        }
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn tree_type_count(&self) -> usize {
        self.factory.type_count()
    }
}

/// (shared, unshared) memory estimate in MiB for `trees` trees.
pub fn memory_estimate(trees: usize, tree_types: usize) -> (f64, f64) {
    let shared = (trees * TREE_BYTES + tree_types * TREE_TYPE_BYTES) as f64 / MIB;
    let unshared = (trees * (TREE_BYTES + TREE_TYPE_BYTES)) as f64 / MIB;
    (shared, unshared)
}

pub struct FlyweightDemo;

impl Demo for FlyweightDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "flyweight-forest",
            pattern: "Flyweight",
            category: Category::Structural,
            summary: "Thousands of trees share two cached tree types",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let pairs = ctx.settings().forest_size;
        let mut forest = Forest::default();

        for _ in 0..pairs {
            let (x, y) = random_position(ctx);
            forest.plant_tree(x, y, "Summer Oak", Color::Green, "Oak texture stub");
            let (x, y) = random_position(ctx);
            forest.plant_tree(x, y, "Autumn Oak", Color::Orange, "Autumn Oak texture stub");
        }

        {
            let mut graphics = Graphics::new(ctx);
            forest.paint(&mut graphics);
        }

        let trees = forest.tree_count();
        let types = forest.tree_type_count();
        let (shared, unshared) = memory_estimate(trees, types);

        ctx.say(format!("{} trees drawn", trees));
        ctx.say("----------------");
        ctx.say("Memory usage:");
        ctx.say(format!("Tree size ({} bytes) * {}", TREE_BYTES, trees));
        ctx.say(format!("+ TreeTypes size (~{} bytes) * {}", TREE_TYPE_BYTES, types));
        ctx.say("----------------");
        ctx.say(format!("Total: {} MB (instead of {} MB)", shared, unshared));
        Ok(())
    }
}

fn random_position(ctx: &mut DemoContext<'_>) -> (i32, i32) {
    let rng = ctx.rng();
    (rng.gen_range(0..=CANVAS_SIZE), rng.gen_range(0..=CANVAS_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_reuses_types() {
        let mut factory = TreeFactory::default();
        let a = factory.get_tree_type("Summer Oak", Color::Green, "stub");
        let b = factory.get_tree_type("Summer Oak", Color::Orange, "other");

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(b.texture(), "stub");
        assert_eq!(factory.type_count(), 1);
    }

    #[test]
    fn test_memory_estimate() {
        let (shared, unshared) = memory_estimate(1_000_000, 2);
        assert!((shared - 7.62945).abs() < 1e-4);
        assert!((unshared - 36.23962).abs() < 1e-4);
    }

    #[test]
    fn test_forest_has_two_types() {
        let mut forest = Forest::default();
        for i in 0..50 {
            forest.plant_tree(i, i, "Summer Oak", Color::Green, "stub");
            forest.plant_tree(i, i, "Autumn Oak", Color::Orange, "stub");
        }
        assert_eq!(forest.tree_count(), 100);
        assert_eq!(forest.tree_type_count(), 2);
    }
}
