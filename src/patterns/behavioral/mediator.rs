use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    A,
    B,
    C,
    D,
}

/// Components only know how to report events; the mediator decides what
/// happens next.
pub trait Mediator {
    fn notify(&self, ctx: &mut DemoContext<'_>, event: Event);
}

#[derive(Debug, Default)]
pub struct Component1;

impl Component1 {
    pub fn do_a(&self, ctx: &mut DemoContext<'_>, mediator: &dyn Mediator) {
        ctx.say("Component 1 does A.");
        mediator.notify(ctx, Event::A);
    }

    pub fn do_b(&self, ctx: &mut DemoContext<'_>, mediator: &dyn Mediator) {
        ctx.say("Component 1 does B.");
        mediator.notify(ctx, Event::B);
    }
}

#[derive(Debug, Default)]
pub struct Component2;

impl Component2 {
    pub fn do_c(&self, ctx: &mut DemoContext<'_>, mediator: &dyn Mediator) {
        ctx.say("Component 2 does C.");
        mediator.notify(ctx, Event::C);
    }

    pub fn do_d(&self, ctx: &mut DemoContext<'_>, mediator: &dyn Mediator) {
        ctx.say("Component 2 does D.");
        mediator.notify(ctx, Event::D);
    }
}

#[derive(Debug, Default)]
pub struct ConcreteMediator {
    component1: Component1,
    component2: Component2,
}

impl ConcreteMediator {
    pub fn new(component1: Component1, component2: Component2) -> Self {
        Self {
            component1,
            component2,
        }
    }

    pub fn component1(&self) -> &Component1 {
        &self.component1
    }

    pub fn component2(&self) -> &Component2 {
        &self.component2
    }
}

impl Mediator for ConcreteMediator {
    fn notify(&self, ctx: &mut DemoContext<'_>, event: Event) {
        match event {
            Event::A => {
                ctx.say("Mediator reacts on A and triggers following operations:");
                self.component2.do_c(ctx, self);
            }
            Event::D => {
                ctx.say("Mediator reacts on D and triggers following operations:");
                self.component1.do_b(ctx, self);
                self.component2.do_c(ctx, self);
            }
            Event::B | Event::C => {}
        }
    }
}

pub struct ComponentsDemo;

impl Demo for ComponentsDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "mediator-components",
            pattern: "Mediator",
            category: Category::Behavioral,
            summary: "Two components talk only through a mediator",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mediator = ConcreteMediator::new(Component1, Component2);

        ctx.say("Client triggers operation A.");
        mediator.component1().do_a(ctx, &mediator);
        ctx.blank();

        ctx.say("Client triggers operation D.");
        mediator.component2().do_d(ctx, &mediator);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_event_d_triggers_b_then_c() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let mediator = ConcreteMediator::default();
        mediator.component2().do_d(&mut ctx, &mediator);
        drop(ctx);

        assert_eq!(
            console.lines(),
            [
                "Component 2 does D.",
                "Mediator reacts on D and triggers following operations:",
                "Component 1 does B.",
                "Component 2 does C.",
            ]
        );
    }
}
