use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait DialogButton {
    fn render(&self, ctx: &mut DemoContext<'_>);
    fn on_click(&self, ctx: &mut DemoContext<'_>);
}

pub struct WindowsButton;
pub struct HtmlButton;

impl DialogButton for WindowsButton {
    fn render(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("TKInter (Test Button)");
        self.on_click(ctx);
    }

    fn on_click(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("WINDOWS -> Button says - 'Hello World!'");
    }
}

impl DialogButton for HtmlButton {
    fn render(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("<button>Test Button</button>");
        self.on_click(ctx);
    }

    fn on_click(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("HTML -> Click! Button says - 'Hello World!'");
    }
}

/// `render_window` is shared; subclasses only decide which button it gets.
pub trait Dialog {
    fn create_button(&self) -> Box<dyn DialogButton>;

    fn render_window(&self, ctx: &mut DemoContext<'_>) {
        let ok_button = self.create_button();
        ok_button.render(ctx);
    }
}

pub struct WindowsDialog;
pub struct WebDialog;

impl Dialog for WindowsDialog {
    fn create_button(&self) -> Box<dyn DialogButton> {
        Box::new(WindowsButton)
    }
}

impl Dialog for WebDialog {
    fn create_button(&self) -> Box<dyn DialogButton> {
        Box::new(HtmlButton)
    }
}

pub struct DialogDemo;

impl Demo for DialogDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "factory-method-dialog",
            pattern: "Factory Method",
            category: Category::Creational,
            summary: "Each dialog overrides the method that creates its button",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let dialog: Box<dyn Dialog> = if ctx.roll(1..=10) % 2 == 0 {
            Box::new(WindowsDialog)
        } else {
            Box::new(WebDialog)
        };
        dialog.render_window(ctx);
        Ok(())
    }
}

// Creator / Product

pub trait Product {
    fn interface(&self) -> &'static str;
}

pub struct ConcreteProduct1;
pub struct ConcreteProduct2;

impl Product for ConcreteProduct1 {
    fn interface(&self) -> &'static str {
        "ConcreteProduct1"
    }
}

impl Product for ConcreteProduct2 {
    fn interface(&self) -> &'static str {
        "ConcreteProduct2"
    }
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self, ctx: &mut DemoContext<'_>) {
        let product = self.factory_method();
        ctx.say(format!("Creator: working with {}", product.interface()));
    }
}

pub struct ConcreteCreator1;
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

pub struct CreatorDemo;

impl Demo for CreatorDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "factory-method-creator",
            pattern: "Factory Method",
            category: Category::Creational,
            summary: "Concrete creators override the factory method to pick a product",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let creators: [&dyn Creator; 2] = [&ConcreteCreator1, &ConcreteCreator2];
        for creator in creators {
            creator.some_operation(ctx);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    fn dialog_lines(dialog: &dyn Dialog) -> Vec<String> {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        dialog.render_window(&mut ctx);
        drop(ctx);
        console.lines().to_vec()
    }

    #[test]
    fn test_each_dialog_renders_its_own_button() {
        assert_eq!(
            dialog_lines(&WindowsDialog),
            [
                "TKInter (Test Button)",
                "WINDOWS -> Button says - 'Hello World!'"
            ]
        );
        assert_eq!(
            dialog_lines(&WebDialog),
            [
                "<button>Test Button</button>",
                "HTML -> Click! Button says - 'Hello World!'"
            ]
        );
    }

    #[test]
    fn test_creators_pick_their_products() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        CreatorDemo.run(&mut ctx).unwrap();
        drop(ctx);

        assert_eq!(
            console.lines(),
            [
                "Creator: working with ConcreteProduct1",
                "Creator: working with ConcreteProduct2"
            ]
        );
    }
}
