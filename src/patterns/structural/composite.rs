use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    LightGray,
    Black,
    Red,
    Blue,
    Green,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::LightGray => "light_gray",
            Color::Black => "black",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
        };
        f.write_str(name)
    }
}

/// Stand-in canvas: every drawing call prints a block of text.
pub struct Graphics<'c, 'a> {
    ctx: &'c mut DemoContext<'a>,
    color: Color,
    focus: bool,
}

impl<'c, 'a> Graphics<'c, 'a> {
    pub fn new(ctx: &'c mut DemoContext<'a>) -> Self {
        Self {
            ctx,
            color: Color::Black,
            focus: false,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    pub fn is_focused(&self) -> bool {
        self.focus
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.block(&[" * "], x, y, width, height);
    }

    pub fn draw_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.block(
            &[
                "     *********     ",
                "   *************   ",
                "  ***************  ",
                " ***************** ",
                "  ***************  ",
                "   *************   ",
                "     *********     ",
            ],
            x,
            y,
            width,
            height,
        );
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let row = "    ************************    ";
        self.block(&[row; 7], x, y, width, height);
    }

    fn block(&mut self, art: &[&str], x: i32, y: i32, width: i32, height: i32) {
        self.ctx.say("-".repeat(48));
        for line in art {
            self.ctx.say(line);
        }
        self.ctx.say(format!("x: {}", x));
        self.ctx.say(format!("y: {}", y));
        self.ctx.say(format!("width: {}", width));
        self.ctx.say(format!("height: {}", height));
        self.ctx.say(format!("color: {}", self.color));
        self.ctx.say(format!("focus: {}", self.focus));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeBase {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub selected: bool,
}

impl ShapeBase {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            selected: false,
        }
    }
}

/// Leaves only supply their size and drawing; the defaults cover the rest.
pub trait Shape {
    fn base(&self) -> &ShapeBase;
    fn base_mut(&mut self) -> &mut ShapeBase;
    fn paint(&self, graphics: &mut Graphics<'_, '_>);

    fn x(&self) -> i32 {
        self.base().x
    }

    fn y(&self) -> i32 {
        self.base().y
    }

    fn width(&self) -> i32 {
        0
    }

    fn height(&self) -> i32 {
        0
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        let base = self.base_mut();
        base.x += dx;
        base.y += dy;
    }

    fn is_inside_bounds(&self, x: i32, y: i32) -> bool {
        x > self.x() && x < self.x() + self.width() && y > self.y() && y < self.y() + self.height()
    }

    fn select(&mut self) {
        self.base_mut().selected = true;
    }

    fn unselect(&mut self) {
        self.base_mut().selected = false;
    }

    fn is_selected(&self) -> bool {
        self.base().selected
    }

    fn apply_style(&self, graphics: &mut Graphics<'_, '_>) {
        if self.is_selected() {
            graphics.set_color(Color::LightGray);
            graphics.set_focus(true);
        } else {
            graphics.set_color(self.base().color);
            graphics.set_focus(false);
        }
    }
}

pub struct Dot {
    base: ShapeBase,
}

impl Dot {
    const SIZE: i32 = 3;

    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            base: ShapeBase::new(x, y, color),
        }
    }
}

impl Shape for Dot {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn width(&self) -> i32 {
        Self::SIZE
    }

    fn height(&self) -> i32 {
        Self::SIZE
    }

    fn paint(&self, graphics: &mut Graphics<'_, '_>) {
        self.apply_style(graphics);
        graphics.fill_rect(self.x() - 1, self.y() - 1, self.width(), self.height());
    }
}

pub struct Circle {
    base: ShapeBase,
    radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: i32, color: Color) -> Self {
        Self {
            base: ShapeBase::new(x, y, color),
            radius,
        }
    }
}

impl Shape for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn width(&self) -> i32 {
        self.radius * 2
    }

    fn height(&self) -> i32 {
        self.radius * 2
    }

    fn paint(&self, graphics: &mut Graphics<'_, '_>) {
        self.apply_style(graphics);
        graphics.draw_oval(self.x(), self.y(), self.width() - 1, self.height() - 1);
    }
}

pub struct Rectangle {
    base: ShapeBase,
    width: i32,
    height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Self {
        Self {
            base: ShapeBase::new(x, y, color),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn paint(&self, graphics: &mut Graphics<'_, '_>) {
        self.apply_style(graphics);
        graphics.draw_rect(self.x(), self.y(), self.width() - 1, self.height() - 1);
    }
}

/// A tree node that answers the `Shape` calls for all of its children.
pub struct CompoundShape {
    base: ShapeBase,
    children: Vec<Box<dyn Shape>>,
}

impl CompoundShape {
    pub fn new(children: Vec<Box<dyn Shape>>) -> Self {
        Self {
            base: ShapeBase::new(0, 0, Color::Black),
            children,
        }
    }

    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.children.push(shape);
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// 選取第一個包含該點的子圖形
    pub fn select_child_at(&mut self, x: i32, y: i32) -> bool {
        match self
            .children
            .iter_mut()
            .find(|child| child.is_inside_bounds(x, y))
        {
            Some(child) => {
                child.select();
                true
            }
            None => false,
        }
    }
}

impl Shape for CompoundShape {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn x(&self) -> i32 {
        self.children.iter().map(|c| c.x()).min().unwrap_or(0)
    }

    fn y(&self) -> i32 {
        self.children.iter().map(|c| c.y()).min().unwrap_or(0)
    }

    fn width(&self) -> i32 {
        let x = self.x();
        self.children
            .iter()
            .map(|c| c.x() - x + c.width())
            .max()
            .unwrap_or(0)
            .max(0)
    }

    fn height(&self) -> i32 {
        let y = self.y();
        self.children
            .iter()
            .map(|c| c.y() - y + c.height())
            .max()
            .unwrap_or(0)
            .max(0)
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
    }

    fn is_inside_bounds(&self, x: i32, y: i32) -> bool {
        self.children.iter().any(|c| c.is_inside_bounds(x, y))
    }

    fn unselect(&mut self) {
        self.base.selected = false;
        for child in &mut self.children {
            child.unselect();
        }
    }

    fn paint(&self, graphics: &mut Graphics<'_, '_>) {
        if self.is_selected() {
            self.apply_style(graphics);
            graphics.draw_rect(self.x() - 1, self.y() - 1, self.width() + 1, self.height() + 1);
            graphics.set_color(self.base.color);
            graphics.set_focus(false);
        } else {
            for child in &self.children {
                child.paint(graphics);
            }
        }
    }
}

pub struct CompositeDemo;

impl Demo for CompositeDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "composite-shapes",
            pattern: "Composite",
            category: Category::Structural,
            summary: "Compound shapes are painted and moved exactly like single shapes",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let circle = Circle::new(10, 10, 10, Color::Blue);
        let circle_with_dot = CompoundShape::new(vec![
            Box::new(Circle::new(110, 110, 50, Color::Red)),
            Box::new(Dot::new(160, 160, Color::Red)),
        ]);
        let rectangle_with_dots = CompoundShape::new(vec![
            Box::new(Rectangle::new(250, 250, 100, 100, Color::Green)),
            Box::new(Dot::new(240, 240, Color::Green)),
            Box::new(Dot::new(240, 360, Color::Green)),
            Box::new(Dot::new(360, 360, Color::Green)),
            Box::new(Dot::new(360, 240, Color::Green)),
        ]);

        let mut all_shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(circle),
            Box::new(circle_with_dot),
            Box::new(rectangle_with_dots),
        ];

        {
            let mut graphics = Graphics::new(ctx);
            for shape in &all_shapes {
                shape.paint(&mut graphics);
            }
        }

        // 選取整個群組只會畫出淺灰色的外框
        if let Some(group) = all_shapes.last_mut() {
            group.select();
            ctx.say("Selected the rectangle group:");
            let mut graphics = Graphics::new(ctx);
            group.paint(&mut graphics);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_bounds() {
        let group = CompoundShape::new(vec![
            Box::new(Rectangle::new(250, 250, 100, 100, Color::Green)),
            Box::new(Dot::new(240, 240, Color::Green)),
            Box::new(Dot::new(360, 360, Color::Green)),
        ]);

        assert_eq!(group.x(), 240);
        assert_eq!(group.y(), 240);
        assert_eq!(group.width(), 123);
        assert_eq!(group.height(), 123);
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn test_move_and_select_child() {
        let mut group = CompoundShape::new(vec![Box::new(Circle::new(0, 0, 10, Color::Red))]);
        group.move_by(5, 5);
        assert_eq!(group.x(), 5);

        assert!(group.select_child_at(10, 10));
        assert!(!group.select_child_at(100, 100));
        group.unselect();
        assert!(!group.is_selected());
    }

    #[test]
    fn test_empty_compound() {
        let mut group = CompoundShape::new(Vec::new());
        assert!(group.is_empty());
        assert_eq!(group.width(), 0);
        group.add(Box::new(Dot::new(1, 1, Color::Black)));
        group.clear();
        assert_eq!(group.x(), 0);
    }
}
