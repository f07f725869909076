pub mod abstract_factory;
pub mod borg;
pub mod builder;
pub mod factory;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

use crate::domain::ports::Demo;

pub fn demos() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(abstract_factory::GuiFactoryDemo),
        Box::new(abstract_factory::ShapeFamiliesDemo),
        Box::new(factory::FactoryDemo),
        Box::new(factory_method::DialogDemo),
        Box::new(factory_method::CreatorDemo),
        Box::new(builder::CarBuilderDemo),
        Box::new(builder::VehicleBuilderDemo),
        Box::new(prototype::ShapePrototypeDemo),
        Box::new(prototype::PointPrototypeDemo),
        Box::new(singleton::SingletonDemo),
        Box::new(borg::BorgDemo),
    ]
}
