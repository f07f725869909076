pub mod chain;
pub mod command;
pub mod interpreter;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;

use crate::domain::ports::Demo;

pub fn demos() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(chain::MiddlewareDemo),
        Box::new(chain::GarageDemo),
        Box::new(command::EditorCommandDemo),
        Box::new(command::ScreenCommandDemo),
        Box::new(interpreter::RulesDemo),
        Box::new(iterator::SocialSpammerDemo),
        Box::new(mediator::ComponentsDemo),
        Box::new(memento::CaretakerDemo),
        Box::new(memento::UndoableDemo),
        Box::new(observer::EditorEventsDemo),
        Box::new(observer::StockMarketDemo),
        Box::new(state::MediaPlayerDemo),
        Box::new(state::ComputerStateDemo),
        Box::new(strategy::ShopDemo),
        Box::new(strategy::PrimeFinderDemo),
        Box::new(template_method::SocialPostDemo),
        Box::new(template_method::MealDemo),
        Box::new(visitor::XmlExportDemo),
    ]
}
