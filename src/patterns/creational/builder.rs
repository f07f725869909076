use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarType {
    CityCar,
    SportCar,
    Suv,
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CarType::CityCar => "CityCar",
            CarType::SportCar => "SportCar",
            CarType::Suv => "SUV",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    SingleSpeed,
    Manual,
    Automatic,
    SemiAutomatic,
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transmission::SingleSpeed => "single speed",
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
            Transmission::SemiAutomatic => "semi-automatic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub volume: f64,
    pub mileage: f64,
}

impl Engine {
    pub fn new(volume: f64, mileage: f64) -> Self {
        Self { volume, mileage }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripComputer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpsNavigator {
    pub route: String,
}

impl Default for GpsNavigator {
    fn default() -> Self {
        Self {
            route: "221b, Baker Street, London to Scotland Yard, 8-10 Broadway, London".to_string(),
        }
    }
}

/// Every way a car can be configured. Optional parts are passed as `None`.
pub trait Builder {
    fn set_type(&mut self, car_type: CarType);
    fn set_seats(&mut self, seats: u32);
    fn set_engine(&mut self, engine: Engine);
    fn set_transmission(&mut self, transmission: Transmission);
    fn set_trip_computer(&mut self, trip_computer: Option<TripComputer>);
    fn set_gps_navigator(&mut self, gps_navigator: Option<GpsNavigator>);
}

/// 兩個 builder 共用的零件暫存
#[derive(Debug, Default)]
struct Parts {
    car_type: Option<CarType>,
    seats: Option<u32>,
    engine: Option<Engine>,
    transmission: Option<Transmission>,
    trip_computer: Option<TripComputer>,
    gps_navigator: Option<GpsNavigator>,
}

impl Parts {
    fn take(&mut self) -> Result<(CarType, u32, Engine, Transmission)> {
        let missing = |step: &str| {
            CatalogError::invalid_operation(format!("Cannot build yet: {} was never set", step))
        };
        let car_type = self.car_type.take().ok_or_else(|| missing("type"))?;
        let seats = self.seats.take().ok_or_else(|| missing("seats"))?;
        let engine = self.engine.take().ok_or_else(|| missing("engine"))?;
        let transmission = self
            .transmission
            .take()
            .ok_or_else(|| missing("transmission"))?;
        Ok((car_type, seats, engine, transmission))
    }
}

macro_rules! impl_builder_steps {
    ($builder:ty) => {
        impl Builder for $builder {
            fn set_type(&mut self, car_type: CarType) {
                self.parts.car_type = Some(car_type);
            }

            fn set_seats(&mut self, seats: u32) {
                self.parts.seats = Some(seats);
            }

            fn set_engine(&mut self, engine: Engine) {
                self.parts.engine = Some(engine);
            }

            fn set_transmission(&mut self, transmission: Transmission) {
                self.parts.transmission = Some(transmission);
            }

            fn set_trip_computer(&mut self, trip_computer: Option<TripComputer>) {
                self.parts.trip_computer = trip_computer;
            }

            fn set_gps_navigator(&mut self, gps_navigator: Option<GpsNavigator>) {
                self.parts.gps_navigator = gps_navigator;
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub car_type: CarType,
    pub seats: u32,
    pub engine: Engine,
    pub transmission: Transmission,
    pub trip_computer: Option<TripComputer>,
    pub gps_navigator: Option<GpsNavigator>,
    pub fuel: f64,
}

#[derive(Debug, Default)]
pub struct CarBuilder {
    parts: Parts,
}

impl_builder_steps!(CarBuilder);

impl CarBuilder {
    pub fn get_result(&mut self) -> Result<Car> {
        let (car_type, seats, engine, transmission) = self.parts.take()?;
        Ok(Car {
            car_type,
            seats,
            engine,
            transmission,
            trip_computer: self.parts.trip_computer.take(),
            gps_navigator: self.parts.gps_navigator.take(),
            fuel: 0.0,
        })
    }
}

/// A product unrelated to `Car`, built through the same steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Manual {
    pub car_type: CarType,
    pub seats: u32,
    pub engine: Engine,
    pub transmission: Transmission,
    pub trip_computer: bool,
    pub gps_navigator: bool,
}

impl Manual {
    pub fn lines(&self) -> Vec<String> {
        let available = |present: bool| if present { "Functional" } else { "N/A" };
        vec![
            format!("Type of car: {}", self.car_type),
            format!("Count of seats: {}", self.seats),
            format!(
                "Engine: volume - {}; mileage - {}",
                self.engine.volume, self.engine.mileage
            ),
            format!("Transmission: {}", self.transmission),
            format!("Trip Computer: {}", available(self.trip_computer)),
            format!("GPS Navigator: {}", available(self.gps_navigator)),
        ]
    }
}

#[derive(Debug, Default)]
pub struct CarManualBuilder {
    parts: Parts,
}

impl_builder_steps!(CarManualBuilder);

impl CarManualBuilder {
    pub fn get_result(&mut self) -> Result<Manual> {
        let (car_type, seats, engine, transmission) = self.parts.take()?;
        Ok(Manual {
            car_type,
            seats,
            engine,
            transmission,
            trip_computer: self.parts.trip_computer.take().is_some(),
            gps_navigator: self.parts.gps_navigator.take().is_some(),
        })
    }
}

/// Knows the building recipes, not the products.
pub struct Director;

impl Director {
    pub fn construct_sports_car(&self, builder: &mut dyn Builder) {
        builder.set_type(CarType::SportCar);
        builder.set_seats(2);
        builder.set_engine(Engine::new(3.0, 0.0));
        builder.set_transmission(Transmission::SemiAutomatic);
        builder.set_trip_computer(Some(TripComputer));
        builder.set_gps_navigator(Some(GpsNavigator::default()));
    }

    pub fn construct_city_car(&self, builder: &mut dyn Builder) {
        builder.set_type(CarType::CityCar);
        builder.set_seats(2);
        builder.set_engine(Engine::new(1.2, 2.0));
        builder.set_transmission(Transmission::Automatic);
        builder.set_trip_computer(Some(TripComputer));
        builder.set_gps_navigator(Some(GpsNavigator::default()));
    }

    pub fn construct_suv(&self, builder: &mut dyn Builder) {
        builder.set_type(CarType::Suv);
        builder.set_seats(4);
        builder.set_engine(Engine::new(2.5, 0.0));
        builder.set_transmission(Transmission::Manual);
        builder.set_trip_computer(None);
        builder.set_gps_navigator(Some(GpsNavigator::default()));
    }
}

pub struct CarBuilderDemo;

impl Demo for CarBuilderDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "builder-cars",
            pattern: "Builder",
            category: Category::Creational,
            summary: "A director drives the same steps to build a car and its manual",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let director = Director;

        let mut car_builder = CarBuilder::default();
        director.construct_sports_car(&mut car_builder);
        let car = car_builder.get_result()?;
        ctx.say(format!("Car built: {}", car.car_type));

        let mut manual_builder = CarManualBuilder::default();
        director.construct_sports_car(&mut manual_builder);
        let manual = manual_builder.get_result()?;
        ctx.say("Car manual built:");
        for line in manual.lines() {
            ctx.say(line);
        }

        ctx.blank();
        director.construct_suv(&mut manual_builder);
        let manual = manual_builder.get_result()?;
        ctx.say("Car manual built:");
        for line in manual.lines() {
            ctx.say(line);
        }
        Ok(())
    }
}

// 第二種寫法：director 組裝零件，builder 只負責產生零件

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub shape: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleEngine {
    pub horsepower: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wheel {
    pub size: u32,
}

#[derive(Debug, Default)]
pub struct Vehicle {
    body: Option<Body>,
    engine: Option<VehicleEngine>,
    wheels: Vec<Wheel>,
}

impl Vehicle {
    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    pub fn specification(&self) -> Result<Vec<String>> {
        let incomplete = || CatalogError::invalid_operation("Vehicle is not fully assembled");
        let body = self.body.as_ref().ok_or_else(incomplete)?;
        let engine = self.engine.ok_or_else(incomplete)?;
        let wheel = self.wheels.first().ok_or_else(incomplete)?;

        Ok(vec![
            format!("body: {}", body.shape),
            format!("engine horsepower: {}", engine.horsepower),
            format!("tire size: {}", wheel.size),
        ])
    }
}

pub trait VehicleBuilder {
    fn get_body(&self) -> Body;
    fn get_engine(&self) -> VehicleEngine;
    fn get_wheel(&self) -> Wheel;
}

pub struct JeepBuilder;
pub struct NissanBuilder;

impl VehicleBuilder for JeepBuilder {
    fn get_body(&self) -> Body {
        Body {
            shape: "SUV".to_string(),
        }
    }

    fn get_engine(&self) -> VehicleEngine {
        VehicleEngine { horsepower: 400 }
    }

    fn get_wheel(&self) -> Wheel {
        Wheel { size: 22 }
    }
}

impl VehicleBuilder for NissanBuilder {
    fn get_body(&self) -> Body {
        Body {
            shape: "hatchback".to_string(),
        }
    }

    fn get_engine(&self) -> VehicleEngine {
        VehicleEngine { horsepower: 100 }
    }

    fn get_wheel(&self) -> Wheel {
        Wheel { size: 16 }
    }
}

#[derive(Default)]
pub struct VehicleDirector {
    builder: Option<Box<dyn VehicleBuilder>>,
}

impl VehicleDirector {
    pub fn set_builder(&mut self, builder: Box<dyn VehicleBuilder>) {
        self.builder = Some(builder);
    }

    /// Body, then engine, then four wheels.
    pub fn get_vehicle(&self) -> Result<Vehicle> {
        let builder = self
            .builder
            .as_ref()
            .ok_or_else(|| CatalogError::invalid_operation("No builder set on the director"))?;

        let mut vehicle = Vehicle {
            body: Some(builder.get_body()),
            engine: Some(builder.get_engine()),
            wheels: Vec::with_capacity(4),
        };
        for _ in 0..4 {
            vehicle.wheels.push(builder.get_wheel());
        }
        Ok(vehicle)
    }
}

pub struct VehicleBuilderDemo;

impl Demo for VehicleBuilderDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "builder-vehicles",
            pattern: "Builder",
            category: Category::Creational,
            summary: "A director assembles vehicles from parts made by a swappable builder",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut director = VehicleDirector::default();

        director.set_builder(Box::new(JeepBuilder));
        for line in director.get_vehicle()?.specification()? {
            ctx.say(line);
        }

        director.set_builder(Box::new(NissanBuilder));
        for line in director.get_vehicle()?.specification()? {
            ctx.say(line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_before_steps_is_invalid() {
        let mut builder = CarBuilder::default();
        builder.set_type(CarType::CityCar);

        let err = builder.get_result().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidOperation { .. }));
        assert!(err.to_string().contains("seats"));
    }

    #[test]
    fn test_director_recipes() {
        let director = Director;
        let mut builder = CarBuilder::default();

        director.construct_city_car(&mut builder);
        let city = builder.get_result().unwrap();
        assert_eq!(city.car_type, CarType::CityCar);
        assert_eq!(city.engine, Engine::new(1.2, 2.0));

        director.construct_suv(&mut builder);
        let suv = builder.get_result().unwrap();
        assert_eq!(suv.seats, 4);
        assert!(suv.trip_computer.is_none());
        assert!(suv.gps_navigator.is_some());
    }

    #[test]
    fn test_manual_reports_missing_parts() {
        let director = Director;
        let mut builder = CarManualBuilder::default();
        director.construct_suv(&mut builder);

        let lines = builder.get_result().unwrap().lines();
        assert!(lines.contains(&"Trip Computer: N/A".to_string()));
        assert!(lines.contains(&"GPS Navigator: Functional".to_string()));
    }

    #[test]
    fn test_vehicle_director_needs_builder() {
        let director = VehicleDirector::default();
        assert!(director.get_vehicle().is_err());
    }

    #[test]
    fn test_vehicle_gets_four_wheels() {
        let mut director = VehicleDirector::default();
        director.set_builder(Box::new(NissanBuilder));
        let vehicle = director.get_vehicle().unwrap();
        assert_eq!(vehicle.wheels().len(), 4);
    }
}
