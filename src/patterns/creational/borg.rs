use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

type SharedState = Rc<RefCell<BTreeMap<String, String>>>;

thread_local! {
    static SHARED_STATE: SharedState = Rc::new(RefCell::new(BTreeMap::new()));
}

/// Monostate: as many instances as you like, all reading and writing one map.
#[derive(Debug)]
pub struct Borg {
    state: SharedState,
}

impl Borg {
    pub fn new() -> Self {
        Self {
            state: SHARED_STATE.with(Rc::clone),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.state.borrow().get(key).cloned()
    }

    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.state.borrow_mut().insert(key.to_string(), value.into());
    }

    pub fn state_snapshot(&self) -> String {
        format!("{:?}", self.state.borrow())
    }

    /// 清空共享狀態，讓每次執行都從空字典開始
    pub fn forget_all() {
        SHARED_STATE.with(|state| state.borrow_mut().clear());
    }
}

impl Default for Borg {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BorgDemo;

impl Demo for BorgDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "borg",
            pattern: "Borg",
            category: Category::Creational,
            summary: "Distinct instances that all share one state",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        Borg::forget_all();

        let b = Borg::new();
        ctx.say(b.state_snapshot());
        let c = Borg::new();
        ctx.say(c.state_snapshot());

        let identical = std::ptr::eq(&b, &c);
        ctx.say(format!("b == c is {}", identical));
        ctx.say(format!("b is c is {}", identical));

        b.set("val", "milkshake");
        ctx.say(format!(
            "c.val is {} shared state",
            c.get("val").unwrap_or_default()
        ));
        Ok(())
    }
}
