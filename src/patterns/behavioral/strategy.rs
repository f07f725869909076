use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use std::collections::BTreeMap;

pub const CARD_LIMIT: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCard {
    amount: u64,
    number: u64,
    date: String,
    cvv: String,
}

impl CreditCard {
    pub fn new(number: u64, date: &str, cvv: &str) -> Self {
        Self {
            amount: CARD_LIMIT,
            number,
            date: date.to_string(),
            cvv: cvv.to_string(),
        }
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn expiration_date(&self) -> &str {
        &self.date
    }

    pub fn matches_cvv(&self, cvv: &str) -> bool {
        self.cvv == cvv
    }
}

/// Only the order's total and whether it was paid; payment details live in
/// the strategy.
#[derive(Debug, Default)]
pub struct Order {
    total_cost: u64,
    closed: bool,
}

impl Order {
    pub fn process_order(
        &self,
        ctx: &mut DemoContext<'_>,
        strategy: &mut dyn PayStrategy,
    ) -> Result<()> {
        strategy.collect_payment_details(ctx)
    }

    /// 總額溢位時不更動訂單
    pub fn add_cost(&mut self, count: u64, price: u64) -> Result<()> {
        let total = count
            .checked_mul(price)
            .and_then(|cost| self.total_cost.checked_add(cost))
            .ok_or_else(|| CatalogError::InvalidInput {
                prompt: "Count: ".to_string(),
                value: count.to_string(),
                reason: "order total is too large".to_string(),
            })?;
        self.total_cost = total;
        Ok(())
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn set_closed(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

pub trait PayStrategy {
    fn collect_payment_details(&mut self, ctx: &mut DemoContext<'_>) -> Result<()>;
    fn pay(&mut self, ctx: &mut DemoContext<'_>, amount: u64) -> bool;
}

pub struct PayByPayPal {
    accounts: BTreeMap<&'static str, &'static str>,
    email: String,
    password: String,
    signed_in: bool,
}

impl Default for PayByPayPal {
    fn default() -> Self {
        Self {
            // 密碼 -> 信箱
            accounts: BTreeMap::from([
                ("amanda1985", "amanda@ya.com"),
                ("qwerty", "jonh@amazon.eu"),
            ]),
            email: String::new(),
            password: String::new(),
            signed_in: false,
        }
    }
}

impl PayByPayPal {
    pub fn verify(&mut self) -> bool {
        self.signed_in = self
            .accounts
            .get(self.password.as_str())
            .map(|email| *email == self.email)
            .unwrap_or(false);
        self.signed_in
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> bool {
        self.email = email.to_string();
        self.password = password.to_string();
        self.verify()
    }
}

impl PayStrategy for PayByPayPal {
    fn collect_payment_details(&mut self, ctx: &mut DemoContext<'_>) -> Result<()> {
        while !self.signed_in {
            let email = ctx.ask("Enter the user's email: ")?;
            let password = ctx.ask("Enter the password: ")?;
            if self.sign_in(email.trim(), password.trim()) {
                ctx.say("Data verification has been successful.");
            } else {
                ctx.say("Wrong email or password!");
            }
        }
        Ok(())
    }

    fn pay(&mut self, ctx: &mut DemoContext<'_>, amount: u64) -> bool {
        if !self.signed_in {
            return false;
        }
        ctx.say(format!("Paying {} using PayPal.", amount));
        true
    }
}

#[derive(Debug, Default)]
pub struct PayByCreditCard {
    card: Option<CreditCard>,
}

impl PayByCreditCard {
    pub fn with_card(card: CreditCard) -> Self {
        Self { card: Some(card) }
    }

    pub fn card(&self) -> Option<&CreditCard> {
        self.card.as_ref()
    }
}

impl PayStrategy for PayByCreditCard {
    fn collect_payment_details(&mut self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let number: u64 = ctx.ask_parsed("Enter the card number: ")?;
        let date = ctx.ask("Enter the card expiration date 'mm/yy': ")?;
        let cvv = ctx.ask("Enter the cvv code: ")?;
        self.card = Some(CreditCard::new(number, date.trim(), cvv.trim()));
        Ok(())
    }

    fn pay(&mut self, ctx: &mut DemoContext<'_>, amount: u64) -> bool {
        let Some(card) = self.card.as_mut() else {
            return false;
        };
        ctx.say(format!("Paying {} using Credit Card.", amount));
        card.amount = card.amount.saturating_sub(amount);
        tracing::debug!(
            "💳 Card ending {} (expires {}) has {} left",
            card.number % 10_000,
            card.expiration_date(),
            card.amount
        );
        true
    }
}

pub const PRODUCTS: [(u32, &str, u64); 4] = [
    (1, "Mother board", 2200),
    (2, "CPU", 1850),
    (3, "HDD", 1100),
    (4, "Memory", 890),
];

pub fn product_price(choice: u32) -> Option<u64> {
    PRODUCTS
        .iter()
        .find(|(id, _, _)| *id == choice)
        .map(|(_, _, price)| *price)
}

fn select_products(ctx: &mut DemoContext<'_>, order: &mut Order) -> Result<()> {
    loop {
        ctx.say("Please, select a product: ");
        for (id, name, _) in PRODUCTS {
            ctx.say(format!("{} - {}", id, name));
        }

        let choice: u32 = ctx.ask_parsed("Enter your choice here: ")?;
        match product_price(choice) {
            Some(price) => {
                let count: u64 = ctx.ask_parsed("Count: ")?;
                order.add_cost(count, price)?;
            }
            None => ctx.say(format!("Could not find product {}", choice)),
        }

        let more = ctx.ask("Do you wish to continue selecting products? Y/N: ")?;
        if !more.trim().eq_ignore_ascii_case("Y") {
            return Ok(());
        }
    }
}

pub struct ShopDemo;

impl Demo for ShopDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "strategy-payment",
            pattern: "Strategy",
            category: Category::Behavioral,
            summary: "A console shop lets the customer pick PayPal or credit card at checkout",
            interactive: true,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut order = Order::default();

        while !order.is_closed() {
            select_products(ctx, &mut order)?;

            ctx.say("Please, select the payment method: ");
            ctx.say("1 - PayPal");
            ctx.say("2 - Credit Card");
            let method: u32 = ctx.ask_parsed("Enter your choice here: ")?;

            let mut strategy: Box<dyn PayStrategy> = if method == 1 {
                Box::new(PayByPayPal::default())
            } else {
                Box::new(PayByCreditCard::default())
            };
            order.process_order(ctx, strategy.as_mut())?;

            let answer = ctx.ask(&format!(
                "Pay {} units or Continue shopping? P/C: ",
                order.total_cost()
            ))?;
            if answer.trim().eq_ignore_ascii_case("P") {
                if strategy.pay(ctx, order.total_cost()) {
                    ctx.say("Payment has been successful.");
                } else {
                    ctx.say("FAIL! Please, check your data.");
                }
                order.set_closed();
            }
        }
        Ok(())
    }
}

// 質數搜尋

pub trait PrimeFinder {
    fn name(&self) -> &'static str;
    /// All primes strictly below `limit`.
    fn calculate(&self, limit: u32) -> Vec<u32>;
}

pub struct HardcodedPrimeFinder;

impl PrimeFinder for HardcodedPrimeFinder {
    fn name(&self) -> &'static str {
        "HardcodedPrimeFinder"
    }

    fn calculate(&self, limit: u32) -> Vec<u32> {
        const KNOWN: [u32; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
        KNOWN.into_iter().filter(|p| *p < limit).collect()
    }
}

pub struct StandardPrimeFinder;

impl PrimeFinder for StandardPrimeFinder {
    fn name(&self) -> &'static str {
        "StandardPrimeFinder"
    }

    fn calculate(&self, limit: u32) -> Vec<u32> {
        if limit <= 2 {
            return Vec::new();
        }
        let mut primes = vec![2];
        for number in (3..limit).step_by(2) {
            if primes.iter().all(|p| number % p != 0) {
                primes.push(number);
            }
        }
        primes
    }
}

pub struct PrimeFinderClient {
    limit: u32,
    finder: Box<dyn PrimeFinder>,
}

impl PrimeFinderClient {
    pub fn new(limit: u32) -> Self {
        let finder: Box<dyn PrimeFinder> = if limit <= 50 {
            Box::new(HardcodedPrimeFinder)
        } else {
            Box::new(StandardPrimeFinder)
        };
        Self { limit, finder }
    }

    pub fn finder_name(&self) -> &'static str {
        self.finder.name()
    }

    pub fn primes(&self) -> Vec<u32> {
        self.finder.calculate(self.limit)
    }
}

pub struct PrimeFinderDemo;

impl Demo for PrimeFinderDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "strategy-primes",
            pattern: "Strategy",
            category: Category::Behavioral,
            summary: "Small limits use a lookup table, larger ones trial division",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        for limit in [50, 100] {
            let client = PrimeFinderClient::new(limit);
            ctx.say(client.finder_name());
            for prime in client.primes() {
                ctx.say(prime.to_string());
            }
        }
        Ok(())
    }
}
