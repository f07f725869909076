use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use std::time::Duration;

const LATENCY_TICKS: usize = 10;
const LATENCY_TICK: Duration = Duration::from_millis(500);

/// `post` is fixed; networks only fill in the three steps.
pub trait Network {
    fn name(&self) -> &'static str;
    fn username(&self) -> &str;
    fn password(&self) -> &str;

    fn login(&self, ctx: &mut DemoContext<'_>) -> bool {
        ctx.say("Checking user's parameters.");
        ctx.say(format!("Name: {}", self.username()));
        ctx.say(format!("Password: {}", "*".repeat(self.password().chars().count())));
        simulate_network_latency(ctx);
        ctx.say(format!("Login success on {}.", self.name()));
        true
    }

    fn send_data(&self, ctx: &mut DemoContext<'_>, data: &str) -> bool {
        ctx.say(format!("Message: {} was posted on {}.", data, self.name()));
        true
    }

    fn logout(&self, ctx: &mut DemoContext<'_>) {
        ctx.say(format!(
            "User: {} was logged out from {}.",
            self.username(),
            self.name()
        ));
    }

    fn post(&self, ctx: &mut DemoContext<'_>, message: &str) -> bool {
        if !self.login(ctx) {
            return false;
        }
        let posted = self.send_data(ctx, message);
        self.logout(ctx);
        posted
    }
}

fn simulate_network_latency(ctx: &mut DemoContext<'_>) {
    for _ in 0..LATENCY_TICKS {
        ctx.pause(LATENCY_TICK);
        ctx.write(".");
    }
}

macro_rules! network {
    ($name:ident, $label:expr) => {
        pub struct $name {
            username: String,
            password: String,
        }

        impl $name {
            pub fn new(username: &str, password: &str) -> Self {
                Self {
                    username: username.to_string(),
                    password: password.to_string(),
                }
            }
        }

        impl Network for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn username(&self) -> &str {
                &self.username
            }

            fn password(&self) -> &str {
                &self.password
            }
        }
    };
}

network!(Facebook, "Facebook");
network!(Twitter, "Twitter");

pub struct SocialPostDemo;

impl Demo for SocialPostDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "template-method-network",
            pattern: "Template Method",
            category: Category::Behavioral,
            summary: "Posting always logs in, sends and logs out; networks fill in the steps",
            interactive: true,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let username = ctx.ask("Input username: ")?;
        let password = ctx.ask("Input password: ")?;
        let message = ctx.ask("Input message: ")?;

        ctx.say("Choose social network for posting message.");
        ctx.say("1 - Facebook");
        ctx.say("2 - Twitter");
        let choice: u32 = ctx.ask_parsed("Input your choice: ")?;

        let network: Box<dyn Network> = match choice {
            1 => Box::new(Facebook::new(username.trim(), &password)),
            2 => Box::new(Twitter::new(username.trim(), &password)),
            other => {
                return Err(CatalogError::unknown_variant(
                    "social network",
                    other.to_string(),
                ))
            }
        };
        network.post(ctx, &message);
        Ok(())
    }
}

// 做菜

pub trait MakeMeal {
    fn cost(&self) -> f64;
    fn prepare(&self, ctx: &mut DemoContext<'_>);
    fn cook(&self, ctx: &mut DemoContext<'_>);

    fn buy_ingredients(&self, money: f64) -> Result<()> {
        if money < self.cost() {
            return Err(CatalogError::InsufficientFunds {
                needed: self.cost(),
                available: money,
            });
        }
        Ok(())
    }

    fn go(&self, ctx: &mut DemoContext<'_>, money: f64) -> Result<()> {
        self.buy_ingredients(money)?;
        self.prepare(ctx);
        self.cook(ctx);
        Ok(())
    }
}

pub struct MakePizza;

impl MakeMeal for MakePizza {
    fn cost(&self) -> f64 {
        3.0
    }

    fn prepare(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Prepare Pizza - make a dough and add toppings.");
    }

    fn cook(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Cook Pizza - cook in the oven on gas mark 8 for 10 minutes.");
    }
}

pub struct MakeCake;

impl MakeMeal for MakeCake {
    fn cost(&self) -> f64 {
        2.0
    }

    fn prepare(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Prepare Cake - mix ingredients together and pour into a cake tin.");
    }

    fn cook(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Cook Cake - bake in the oven on gas mark 6 to 20 minutes.");
    }
}

pub struct MealDemo;

impl Demo for MealDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "template-method-meal",
            pattern: "Template Method",
            category: Category::Behavioral,
            summary: "Every meal is bought, prepared and cooked in the same order",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        MakePizza.go(ctx, 5.0)?;
        MakeCake.go(ctx, 5.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_post_runs_steps_in_order() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default().without_latency());

        assert!(Twitter::new("jane", "secret").post(&mut ctx, "hi"));
        drop(ctx);

        assert_eq!(
            console.lines(),
            [
                "Checking user's parameters.",
                "Name: jane",
                "Password: ******",
                "..........Login success on Twitter.",
                "Message: hi was posted on Twitter.",
                "User: jane was logged out from Twitter.",
            ]
        );
    }

    #[test]
    fn test_meal_needs_enough_money() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());

        let err = MakePizza.go(&mut ctx, 2.5).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InsufficientFunds { needed, available } if needed == 3.0 && available == 2.5
        ));
        MakeCake.go(&mut ctx, 2.0).unwrap();
        drop(ctx);

        assert_eq!(console.lines().len(), 2);
    }
}
