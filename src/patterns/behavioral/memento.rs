use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use chrono::{DateTime, Local};
use rand::Rng;

const STATE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const STATE_LEN: usize = 30;

/// Metadata a caretaker may look at. The saved state stays hidden.
pub trait Memento {
    fn name(&self) -> String;
    fn date(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone)]
pub struct ConcreteMemento {
    state: String,
    date: DateTime<Local>,
}

impl ConcreteMemento {
    fn new(state: &str) -> Self {
        Self {
            state: state.to_string(),
            date: Local::now(),
        }
    }
}

impl Memento for ConcreteMemento {
    fn name(&self) -> String {
        let prefix: String = self.state.chars().take(9).collect();
        format!("{}/{}...", self.date.format("%Y-%m-%d %H:%M:%S%.6f"), prefix)
    }

    fn date(&self) -> DateTime<Local> {
        self.date
    }
}

pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(ctx: &mut DemoContext<'_>, state: &str) -> Self {
        ctx.say(format!("Originator: My initial state is: {}", state));
        Self {
            state: state.to_string(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn do_something(&mut self, ctx: &mut DemoContext<'_>) {
        ctx.say("Originator: I'm doing something important.");
        self.state = random_state(ctx);
        ctx.say(format!("Originator: And my state has changed to {}", self.state));
    }

    pub fn save(&self) -> ConcreteMemento {
        ConcreteMemento::new(&self.state)
    }

    pub fn restore(&mut self, ctx: &mut DemoContext<'_>, memento: ConcreteMemento) {
        self.state = memento.state;
        ctx.say(format!("Originator: My state has changed to: {}", self.state));
    }
}

fn random_state(ctx: &mut DemoContext<'_>) -> String {
    let rng = ctx.rng();
    (0..STATE_LEN)
        .map(|_| char::from(STATE_CHARSET[rng.gen_range(0..STATE_CHARSET.len())]))
        .collect()
}

#[derive(Debug, Default)]
pub struct Caretaker {
    mementos: Vec<ConcreteMemento>,
}

impl Caretaker {
    pub fn backup(&mut self, ctx: &mut DemoContext<'_>, originator: &Originator) {
        ctx.say("Caretaker: Saving Originator's state...");
        self.mementos.push(originator.save());
    }

    /// Returns false when there is nothing left to restore.
    pub fn undo(&mut self, ctx: &mut DemoContext<'_>, originator: &mut Originator) -> bool {
        let Some(memento) = self.mementos.pop() else {
            return false;
        };
        ctx.say(format!("Caretaker: Restoring state to: {}", memento.name()));
        originator.restore(ctx, memento);
        true
    }

    pub fn show_history(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Caretaker: Here's the list of mementos:");
        for memento in &self.mementos {
            ctx.say(memento.name());
        }
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub struct CaretakerDemo;

impl Demo for CaretakerDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "memento-caretaker",
            pattern: "Memento",
            category: Category::Behavioral,
            summary: "A caretaker stacks opaque snapshots and rolls the originator back",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut originator = Originator::new(ctx, "Super-duper-super-puper-super.");
        let mut caretaker = Caretaker::default();

        for _ in 0..3 {
            caretaker.backup(ctx, &originator);
            originator.do_something(ctx);
        }

        ctx.say("Show history");
        caretaker.show_history(ctx);

        ctx.say("Client: Now, let's rollback!");
        caretaker.undo(ctx, &mut originator);

        ctx.say("Client: Once more!");
        caretaker.undo(ctx, &mut originator);
        Ok(())
    }
}

// 可復原的資料

/// Keeps every saved snapshot of `T`; each undo steps back one save.
#[derive(Debug, Clone, Default)]
pub struct Undoable<T: Clone> {
    value: T,
    snapshots: Vec<T>,
}

impl<T: Clone> Undoable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            snapshots: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn save(&mut self) {
        self.snapshots.push(self.value.clone());
    }

    /// Returns false and leaves the value alone when nothing was saved.
    pub fn undo(&mut self) -> bool {
        match self.snapshots.pop() {
            Some(previous) => {
                self.value = previous;
                true
            }
            None => false,
        }
    }
}

pub struct UndoableDemo;

impl Demo for UndoableDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "memento-undoable",
            pattern: "Memento",
            category: Category::Behavioral,
            summary: "A list remembers every saved copy and undoes them one by one",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut numbers: Undoable<Vec<i32>> = Undoable::default();

        for i in 0..10 {
            numbers.save();
            numbers.get_mut().push(i);
        }
        numbers.save();
        ctx.say(format!("{:?}", numbers.get()));

        for _ in 0..10 {
            numbers.undo();
            ctx.say(format!("{:?}", numbers.get()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_random_state_shape() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default().with_seed(3));
        let state = random_state(&mut ctx);
        assert_eq!(state.len(), STATE_LEN);
        assert!(state.bytes().all(|b| STATE_CHARSET.contains(&b)));
    }

    #[test]
    fn test_caretaker_restores_in_reverse() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default().with_seed(3));
        let mut originator = Originator::new(&mut ctx, "start");
        let mut caretaker = Caretaker::default();

        caretaker.backup(&mut ctx, &originator);
        originator.do_something(&mut ctx);
        let second = originator.state().to_string();
        caretaker.backup(&mut ctx, &originator);
        originator.do_something(&mut ctx);

        assert!(caretaker.undo(&mut ctx, &mut originator));
        assert_eq!(originator.state(), second);
        assert!(caretaker.undo(&mut ctx, &mut originator));
        assert_eq!(originator.state(), "start");
        assert!(!caretaker.undo(&mut ctx, &mut originator));
        assert!(caretaker.is_empty());
    }

    #[test]
    fn test_memento_name_uses_state_prefix() {
        let memento = ConcreteMemento::new("ABCDEFGHIJKLMNOP");
        assert!(memento.name().ends_with("/ABCDEFGHI..."));
    }

    #[test]
    fn test_undo_without_save_is_noop() {
        let mut value = Undoable::new(vec![1]);
        assert!(!value.undo());
        assert_eq!(value.get(), &vec![1]);
    }
}
