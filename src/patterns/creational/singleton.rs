use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::OnceLock;

/// Process-wide instance, created on first access.
#[derive(Debug)]
pub struct Singleton {
    created_by: &'static str,
}

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

impl Singleton {
    pub fn get_instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            tracing::debug!("🔒 Creating the singleton instance");
            Singleton {
                created_by: "get_instance",
            }
        })
    }

    pub fn created_by(&self) -> &'static str {
        self.created_by
    }
}

/// Hands out one shared object; every `get` resets its value, the way a
/// constructor returning the cached instance would.
#[derive(Debug)]
pub struct SharedInstance<T> {
    instance: Option<Rc<RefCell<T>>>,
}

impl<T> Default for SharedInstance<T> {
    fn default() -> Self {
        Self { instance: None }
    }
}

impl<T> SharedInstance<T> {
    pub fn get(&mut self, value: T) -> Rc<RefCell<T>> {
        match &self.instance {
            Some(existing) => {
                *existing.borrow_mut() = value;
                Rc::clone(existing)
            }
            None => {
                let created = Rc::new(RefCell::new(value));
                self.instance = Some(Rc::clone(&created));
                created
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snack {
    pub val: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub val: String,
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "self {}", self.val)
    }
}

pub struct SingletonDemo;

impl Demo for SingletonDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "singleton",
            pattern: "Singleton",
            category: Category::Creational,
            summary: "Every access returns the one and only instance",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let s1 = Singleton::get_instance();
        let s2 = Singleton::get_instance();
        if std::ptr::eq(s1, s2) {
            ctx.say("Singleton works, both variables contain the same instance.");
        } else {
            ctx.say("Singleton failed, variables contain different instances.");
        }

        // 最後寫入的值勝出
        let mut snacks = SharedInstance::default();
        let x = snacks.get(Snack::default());
        x.borrow_mut().val = Some("burger".to_string());
        ctx.say(x.borrow().val.clone().unwrap_or_default());

        let y = snacks.get(Snack::default());
        y.borrow_mut().val = Some("chips".to_string());
        ctx.say(y.borrow().val.clone().unwrap_or_default());

        ctx.say(x.borrow().val.clone().unwrap_or_default());
        ctx.say(format!("x == y is {}", *x.borrow() == *y.borrow()));
        ctx.say(format!("x is y is {}", Rc::ptr_eq(&x, &y)));

        // 每次建構都重新初始化同一個實例
        let mut bars = SharedInstance::default();
        let x = bars.get(Bar {
            val: "sausage".to_string(),
        });
        let y = bars.get(Bar {
            val: "eggs".to_string(),
        });
        let z = bars.get(Bar {
            val: "spam".to_string(),
        });

        ctx.say(format!("x: {}", x.borrow()));
        ctx.say(format!("y: {}", y.borrow()));
        ctx.say(format!("z: {}", z.borrow()));
        ctx.say(format!("{}", Rc::ptr_eq(&x, &y) && Rc::ptr_eq(&y, &z)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_instance_is_stable() {
        let first = Singleton::get_instance();
        let second = Singleton::get_instance();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.created_by(), "get_instance");
    }

    #[test]
    fn test_shared_instance_resets_value() {
        let mut shared = SharedInstance::default();
        let a = shared.get(1);
        *a.borrow_mut() += 10;
        let b = shared.get(5);

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(*a.borrow(), 5);
    }

    #[test]
    fn test_shared_instance_holds_type_without_default() {
        let mut bars: SharedInstance<Bar> = SharedInstance::default();
        let first = bars.get(Bar {
            val: "eggs".to_string(),
        });
        let second = bars.get(Bar {
            val: "spam".to_string(),
        });

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.borrow().to_string(), "self spam");
    }
}
