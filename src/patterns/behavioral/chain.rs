use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const ADMIN_EMAIL: &str = "admin@example.com";

#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashMap<String, String>,
}

impl UserRegistry {
    pub fn register(&mut self, email: &str, password: &str) {
        self.users.insert(email.to_string(), password.to_string());
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    pub fn is_valid_password(&self, email: &str, password: &str) -> bool {
        self.users.get(email).map(|p| p == password).unwrap_or(false)
    }
}

/// What a middleware decided about a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Let the next middleware look at it.
    Pass,
    Accept,
    Reject,
}

pub trait Middleware {
    fn check(
        &mut self,
        ctx: &mut DemoContext<'_>,
        users: &UserRegistry,
        email: &str,
        password: &str,
    ) -> Verdict;
}

pub struct ThrottlingMiddleware {
    requests_per_window: u32,
    window: Duration,
    window_start: Instant,
    requests: u32,
}

impl ThrottlingMiddleware {
    pub fn new(requests_per_minute: u32) -> Self {
        Self::with_window(requests_per_minute, Duration::from_secs(60))
    }

    pub fn with_window(requests_per_window: u32, window: Duration) -> Self {
        Self {
            requests_per_window,
            window,
            window_start: Instant::now(),
            requests: 0,
        }
    }
}

impl Middleware for ThrottlingMiddleware {
    fn check(&mut self, ctx: &mut DemoContext<'_>, _: &UserRegistry, _: &str, _: &str) -> Verdict {
        if self.window_start.elapsed() > self.window {
            self.requests = 0;
            self.window_start = Instant::now();
        }

        self.requests += 1;
        if self.requests > self.requests_per_window {
            tracing::debug!("🚦 Throttled request #{}", self.requests);
            ctx.say("Request limit excedeed!");
            return Verdict::Reject;
        }
        Verdict::Pass
    }
}

pub struct UserExistsMiddleware;

impl Middleware for UserExistsMiddleware {
    fn check(
        &mut self,
        ctx: &mut DemoContext<'_>,
        users: &UserRegistry,
        email: &str,
        password: &str,
    ) -> Verdict {
        if !users.has_email(email) {
            ctx.say("This email is not registered!");
            return Verdict::Reject;
        }
        if !users.is_valid_password(email, password) {
            ctx.say("Wrong password!");
            return Verdict::Reject;
        }
        Verdict::Pass
    }
}

pub struct RoleCheckMiddleware;

impl Middleware for RoleCheckMiddleware {
    fn check(&mut self, ctx: &mut DemoContext<'_>, _: &UserRegistry, email: &str, _: &str) -> Verdict {
        if email == ADMIN_EMAIL {
            ctx.say("Hello, admin!");
            return Verdict::Accept;
        }
        ctx.say("Hello, user!");
        Verdict::Pass
    }
}

/// Middlewares run in link order; the first non-`Pass` verdict ends the walk.
#[derive(Default)]
pub struct MiddlewareChain {
    links: Vec<Box<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new(first: impl Middleware + 'static) -> Self {
        Self {
            links: vec![Box::new(first)],
        }
    }

    pub fn link_with(mut self, next: impl Middleware + 'static) -> Self {
        self.links.push(Box::new(next));
        self
    }

    pub fn check(
        &mut self,
        ctx: &mut DemoContext<'_>,
        users: &UserRegistry,
        email: &str,
        password: &str,
    ) -> bool {
        for middleware in &mut self.links {
            match middleware.check(ctx, users, email, password) {
                Verdict::Pass => continue,
                Verdict::Accept => return true,
                Verdict::Reject => return false,
            }
        }
        true
    }
}

#[derive(Default)]
pub struct Server {
    users: UserRegistry,
    middleware: MiddlewareChain,
}

impl Server {
    pub fn register(&mut self, email: &str, password: &str) {
        self.users.register(email, password);
    }

    pub fn set_middleware(&mut self, middleware: MiddlewareChain) {
        self.middleware = middleware;
    }

    pub fn login(&mut self, ctx: &mut DemoContext<'_>, email: &str, password: &str) -> bool {
        if self.middleware.check(ctx, &self.users, email, password) {
            ctx.say("Authorization have been successful!");
            return true;
        }
        false
    }
}

pub struct MiddlewareDemo;

impl Demo for MiddlewareDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "chain-middleware",
            pattern: "Chain of Responsibility",
            category: Category::Behavioral,
            summary: "Login requests pass through throttling, user and role checks",
            interactive: true,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut server = Server::default();
        server.register(ADMIN_EMAIL, "admin_pass");
        server.register("user@example.com", "user_pass");

        server.set_middleware(
            MiddlewareChain::new(ThrottlingMiddleware::new(2))
                .link_with(UserExistsMiddleware)
                .link_with(RoleCheckMiddleware),
        );

        loop {
            let email = ctx.ask("Enter a email: ")?;
            let password = ctx.ask("Enter a password: ")?;
            if server.login(ctx, email.trim(), &password) {
                return Ok(());
            }
        }
    }
}

// 修車廠

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub name: String,
    pub water: u32,
    pub fuel: u32,
    pub oil: u32,
}

impl Car {
    pub fn new(name: &str, water: u32, fuel: u32, oil: u32) -> Self {
        Self {
            name: name.to_string(),
            water,
            fuel,
            oil,
        }
    }

    pub fn is_fine(&self) -> bool {
        self.water >= 20 && self.fuel >= 5 && self.oil >= 10
    }
}

pub trait GarageHandler {
    fn refill(&self, ctx: &mut DemoContext<'_>, car: &mut Car);
    fn successor(&self) -> Option<&dyn GarageHandler>;

    fn handle_request(&self, ctx: &mut DemoContext<'_>, car: &mut Car) {
        self.refill(ctx, car);
        if car.is_fine() {
            ctx.say("Car is good to go");
        } else if let Some(next) = self.successor() {
            next.handle_request(ctx, car);
        }
    }
}

macro_rules! garage_handler {
    ($name:ident, $field:ident, $minimum:expr, $message:expr) => {
        #[derive(Default)]
        pub struct $name {
            successor: Option<Box<dyn GarageHandler>>,
        }

        impl $name {
            pub fn new(successor: impl GarageHandler + 'static) -> Self {
                Self {
                    successor: Some(Box::new(successor)),
                }
            }
        }

        impl GarageHandler for $name {
            fn refill(&self, ctx: &mut DemoContext<'_>, car: &mut Car) {
                if car.$field < $minimum {
                    car.$field = 100;
                    ctx.say($message);
                }
            }

            fn successor(&self) -> Option<&dyn GarageHandler> {
                self.successor.as_deref()
            }
        }
    };
}

garage_handler!(OilHandler, oil, 10, "Added oil");
garage_handler!(FuelHandler, fuel, 5, "Added fuel");
garage_handler!(WaterHandler, water, 20, "Added water");

pub struct GarageDemo;

impl Demo for GarageDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "chain-garage",
            pattern: "Chain of Responsibility",
            category: Category::Behavioral,
            summary: "Oil, fuel and water handlers top up a car until it is fine",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let garage = OilHandler::new(FuelHandler::new(WaterHandler::default()));

        for level in [1, 5, 10, 20] {
            let mut car = Car::new("my car", level, level, level);
            garage.handle_request(ctx, &mut car);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    fn registry() -> UserRegistry {
        let mut users = UserRegistry::default();
        users.register(ADMIN_EMAIL, "admin_pass");
        users.register("user@example.com", "user_pass");
        users
    }

    #[test]
    fn test_chain_verdicts() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let users = registry();
        let mut chain = MiddlewareChain::new(UserExistsMiddleware).link_with(RoleCheckMiddleware);

        assert!(chain.check(&mut ctx, &users, ADMIN_EMAIL, "admin_pass"));
        assert!(chain.check(&mut ctx, &users, "user@example.com", "user_pass"));
        assert!(!chain.check(&mut ctx, &users, "user@example.com", "nope"));
        assert!(!chain.check(&mut ctx, &users, "ghost@example.com", "x"));
        drop(ctx);

        assert_eq!(
            console.lines(),
            [
                "Hello, admin!",
                "Hello, user!",
                "Wrong password!",
                "This email is not registered!"
            ]
        );
    }

    #[test]
    fn test_throttle_resets_after_window() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let users = UserRegistry::default();
        let mut throttle = ThrottlingMiddleware::with_window(1, Duration::from_millis(20));

        assert_eq!(throttle.check(&mut ctx, &users, "", ""), Verdict::Pass);
        assert_eq!(throttle.check(&mut ctx, &users, "", ""), Verdict::Reject);
        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(throttle.check(&mut ctx, &users, "", ""), Verdict::Pass);
    }

    #[test]
    fn test_empty_chain_accepts() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        assert!(MiddlewareChain::default().check(&mut ctx, &UserRegistry::default(), "a", "b"));
    }
}
