pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;

use crate::domain::ports::Demo;

pub fn demos() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(adapter::PegAdapterDemo),
        Box::new(adapter::SocketAdapterDemo),
        Box::new(bridge::BridgeDemo),
        Box::new(composite::CompositeDemo),
        Box::new(decorator::DataSourceDemo),
        Box::new(decorator::WindowDecoratorDemo),
        Box::new(facade::FacadeDemo),
        Box::new(flyweight::FlyweightDemo),
        Box::new(proxy::CachingProxyDemo),
        Box::new(proxy::AccessProxyDemo),
    ]
}
