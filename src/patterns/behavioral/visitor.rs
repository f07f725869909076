use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::rc::Rc;

pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT: &str = "    ";

pub trait Shape {
    fn id(&self) -> u32;
    fn accept(&self, visitor: &dyn Visitor) -> String;
}

pub trait Visitor {
    fn visit_dot(&self, dot: &Dot) -> String;
    fn visit_circle(&self, circle: &Circle) -> String;
    fn visit_rectangle(&self, rectangle: &Rectangle) -> String;
    fn visit_compound_shape(&self, compound: &CompoundShape) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub id: u32,
    pub x: i32,
    pub y: i32,
}

impl Shape for Dot {
    fn id(&self) -> u32 {
        self.id
    }

    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_dot(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub radius: u32,
}

impl Shape for Circle {
    fn id(&self) -> u32 {
        self.id
    }

    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_circle(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Shape for Rectangle {
    fn id(&self) -> u32 {
        self.id
    }

    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_rectangle(self)
    }
}

/// Children are shared handles; the same shape may sit in several groups.
pub struct CompoundShape {
    id: u32,
    children: Vec<Rc<dyn Shape>>,
}

impl CompoundShape {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, shape: Rc<dyn Shape>) {
        self.children.push(shape);
    }

    pub fn children(&self) -> &[Rc<dyn Shape>] {
        &self.children
    }
}

impl Shape for CompoundShape {
    fn id(&self) -> u32 {
        self.id
    }

    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_compound_shape(self)
    }
}

fn element(tag: &str, fields: &[(&str, String)]) -> String {
    let mut xml = format!("<{}>\n", tag);
    for (name, value) in fields {
        xml.push_str(&format!("{}<{}>{}</{}>\n", INDENT, name, value, name));
    }
    xml.push_str(&format!("</{}>", tag));
    xml
}

#[derive(Debug, Default)]
pub struct XmlExportVisitor;

impl XmlExportVisitor {
    pub fn export(&self, shapes: &[&dyn Shape]) -> String {
        shapes
            .iter()
            .map(|shape| format!("{}\n{}\n", XML_HEADER, shape.accept(self)))
            .collect()
    }
}

impl Visitor for XmlExportVisitor {
    fn visit_dot(&self, dot: &Dot) -> String {
        element(
            "dot",
            &[
                ("id", dot.id.to_string()),
                ("x", dot.x.to_string()),
                ("y", dot.y.to_string()),
            ],
        )
    }

    fn visit_circle(&self, circle: &Circle) -> String {
        element(
            "circle",
            &[
                ("id", circle.id.to_string()),
                ("x", circle.x.to_string()),
                ("y", circle.y.to_string()),
                ("radius", circle.radius.to_string()),
            ],
        )
    }

    fn visit_rectangle(&self, rectangle: &Rectangle) -> String {
        element(
            "rectangle",
            &[
                ("id", rectangle.id.to_string()),
                ("x", rectangle.x.to_string()),
                ("y", rectangle.y.to_string()),
                ("width", rectangle.width.to_string()),
                ("height", rectangle.height.to_string()),
            ],
        )
    }

    fn visit_compound_shape(&self, compound: &CompoundShape) -> String {
        let mut xml = format!("<compound_shape>\n{}<id>{}</id>\n", INDENT, compound.id());
        for child in compound.children() {
            // 子節點每一行都多縮排一層
            for line in child.accept(self).lines() {
                xml.push_str(INDENT);
                xml.push_str(line);
                xml.push('\n');
            }
        }
        xml.push_str("</compound_shape>");
        xml
    }
}

pub struct XmlExportDemo;

impl Demo for XmlExportDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "visitor-xml",
            pattern: "Visitor",
            category: Category::Behavioral,
            summary: "An XML exporter visits dots, circles, rectangles and nested groups",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let dot: Rc<dyn Shape> = Rc::new(Dot { id: 1, x: 10, y: 55 });
        let circle = Circle {
            id: 2,
            x: 23,
            y: 15,
            radius: 10,
        };
        let rectangle = Rectangle {
            id: 3,
            x: 10,
            y: 17,
            width: 20,
            height: 30,
        };

        let mut second = CompoundShape::new(5);
        second.add(Rc::clone(&dot));

        let mut first = CompoundShape::new(4);
        first.add(Rc::clone(&dot));
        first.add(Rc::new(circle));
        first.add(Rc::new(rectangle));
        first.add(Rc::new(second));

        let roots: [&dyn Shape; 2] = [&circle, &first];
        let xml = XmlExportVisitor.export(&roots);
        for line in xml.lines() {
            ctx.say(line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_compound_indentation() {
        let dot: Rc<dyn Shape> = Rc::new(Dot { id: 1, x: 10, y: 55 });
        let mut inner = CompoundShape::new(5);
        inner.add(dot);
        let mut outer = CompoundShape::new(4);
        outer.add(Rc::new(inner));

        let expected = "\
<compound_shape>
    <id>4</id>
    <compound_shape>
        <id>5</id>
        <dot>
            <id>1</id>
            <x>10</x>
            <y>55</y>
        </dot>
    </compound_shape>
</compound_shape>";
        assert_eq!(outer.accept(&XmlExportVisitor), expected);
    }

    #[test]
    fn test_each_root_gets_a_header() {
        let circle = Circle {
            id: 2,
            x: 23,
            y: 15,
            radius: 10,
        };
        let roots: [&dyn Shape; 2] = [&circle, &circle];
        let xml = XmlExportVisitor.export(&roots);
        assert_eq!(xml.matches(XML_HEADER).count(), 2);
        assert!(xml.contains("<radius>10</radius>"));
    }
}
