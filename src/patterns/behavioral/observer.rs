use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: String,
    name: String,
}

impl File {
    pub fn new(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            path: path.to_string(),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

pub trait EventListener {
    fn update(&self, ctx: &mut DemoContext<'_>, event_type: &str, file: &File);
}

/// Listeners are shared handles, so unsubscribing compares identity.
pub struct EventManager {
    listeners: BTreeMap<String, Vec<Rc<dyn EventListener>>>,
}

impl EventManager {
    pub fn new(operations: &[&str]) -> Self {
        Self {
            listeners: operations
                .iter()
                .map(|op| (op.to_string(), Vec::new()))
                .collect(),
        }
    }

    fn channel(&mut self, event_type: &str) -> Result<&mut Vec<Rc<dyn EventListener>>> {
        self.listeners
            .get_mut(event_type)
            .ok_or_else(|| CatalogError::unknown_variant("event type", event_type))
    }

    pub fn subscribe(&mut self, event_type: &str, listener: Rc<dyn EventListener>) -> Result<()> {
        self.channel(event_type)?.push(listener);
        Ok(())
    }

    pub fn unsubscribe(&mut self, event_type: &str, listener: &Rc<dyn EventListener>) -> Result<()> {
        self.channel(event_type)?
            .retain(|existing| !Rc::ptr_eq(existing, listener));
        Ok(())
    }

    pub fn notify(&self, ctx: &mut DemoContext<'_>, event_type: &str, file: &File) -> Result<()> {
        let users = self
            .listeners
            .get(event_type)
            .ok_or_else(|| CatalogError::unknown_variant("event type", event_type))?;
        for listener in users {
            listener.update(ctx, event_type, file);
        }
        Ok(())
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.get(event_type).map(Vec::len).unwrap_or(0)
    }
}

pub struct EmailNotificationListener {
    email: String,
}

impl EmailNotificationListener {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
        }
    }
}

impl EventListener for EmailNotificationListener {
    fn update(&self, ctx: &mut DemoContext<'_>, event_type: &str, file: &File) {
        ctx.say(format!(
            "Email to {}: Someone has performed {} operation with the following file: {}",
            self.email,
            event_type,
            file.name()
        ));
    }
}

pub struct LogOpenListener {
    log: File,
}

impl LogOpenListener {
    pub fn new(log_path: &str) -> Self {
        Self {
            log: File::new(log_path),
        }
    }
}

impl EventListener for LogOpenListener {
    fn update(&self, ctx: &mut DemoContext<'_>, event_type: &str, file: &File) {
        ctx.say(format!(
            "Save to log {}: Someone has performed {} operation with the following file: {}",
            self.log.name(),
            event_type,
            file.name()
        ));
    }
}

pub struct Editor {
    pub events: EventManager,
    file: Option<File>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            events: EventManager::new(&["open", "save"]),
            file: None,
        }
    }
}

impl Editor {
    pub fn open_file(&mut self, ctx: &mut DemoContext<'_>, path: &str) -> Result<()> {
        let file = self.file.insert(File::new(path));
        self.events.notify(ctx, "open", file)
    }

    pub fn save_file(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        match &self.file {
            Some(file) => self.events.notify(ctx, "save", file),
            None => Err(CatalogError::invalid_operation("Please open a file first.")),
        }
    }
}

pub struct EditorEventsDemo;

impl Demo for EditorEventsDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "observer-editor",
            pattern: "Observer",
            category: Category::Behavioral,
            summary: "Editor events fan out to log and email listeners",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut editor = Editor::default();
        editor
            .events
            .subscribe("open", Rc::new(LogOpenListener::new("/path/to/log/file.text")))?;
        editor
            .events
            .subscribe("save", Rc::new(EmailNotificationListener::new("admin@example.com")))?;

        if let Err(err) = editor.save_file(ctx) {
            ctx.say(format!("An error occured when try to save file, error: {}", err));
        }

        editor.open_file(ctx, "text.txt")?;
        editor.save_file(ctx)?;
        Ok(())
    }
}

// 股市通知

pub trait StockObserver {
    fn update(
        &self,
        ctx: &mut DemoContext<'_>,
        message: &str,
        details: &BTreeMap<String, String>,
    );
}

#[derive(Default)]
pub struct Observable {
    observers: Vec<Rc<dyn StockObserver>>,
}

impl Observable {
    pub fn register(&mut self, observer: Rc<dyn StockObserver>) {
        self.observers.push(observer);
    }

    pub fn unregister(&mut self, observer: &Rc<dyn StockObserver>) {
        self.observers.retain(|existing| !Rc::ptr_eq(existing, observer));
    }

    pub fn unregister_all(&mut self) {
        self.observers.clear();
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn update_observers(
        &self,
        ctx: &mut DemoContext<'_>,
        message: &str,
        details: &BTreeMap<String, String>,
    ) {
        for observer in &self.observers {
            observer.update(ctx, message, details);
        }
    }
}

pub struct AmericanStockMarket;

impl StockObserver for AmericanStockMarket {
    fn update(
        &self,
        ctx: &mut DemoContext<'_>,
        message: &str,
        details: &BTreeMap<String, String>,
    ) {
        ctx.say(format!("American stock market received: {}", message));
        ctx.say(format!("{:?}", details));
    }
}

pub struct EuropeanStockMarket;

impl StockObserver for EuropeanStockMarket {
    fn update(
        &self,
        ctx: &mut DemoContext<'_>,
        message: &str,
        details: &BTreeMap<String, String>,
    ) {
        ctx.say(format!("European stock market received: {}", message));
        ctx.say(format!("{:?}", details));
    }
}

pub struct StockMarketDemo;

impl Demo for StockMarketDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "observer-stock",
            pattern: "Observer",
            category: Category::Behavioral,
            summary: "A company pushes news to every registered stock market",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut really_big_company = Observable::default();
        really_big_company.register(Rc::new(AmericanStockMarket));
        really_big_company.register(Rc::new(EuropeanStockMarket));

        let details = BTreeMap::from([(
            "msg".to_string(),
            "CEO unexpectedly resigns".to_string(),
        )]);
        really_big_company.update_observers(ctx, "important update", &details);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_save_before_open_fails() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let editor = Editor::default();

        let err = editor.save_file(&mut ctx).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidOperation { .. }));
        assert!(err.to_string().contains("Please open a file first."));
    }

    #[test]
    fn test_unsubscribe_by_identity() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let mut editor = Editor::default();
        let first: Rc<dyn EventListener> = Rc::new(LogOpenListener::new("/var/log/a.log"));
        let second: Rc<dyn EventListener> = Rc::new(LogOpenListener::new("/var/log/b.log"));

        editor.events.subscribe("open", Rc::clone(&first)).unwrap();
        editor.events.subscribe("open", Rc::clone(&second)).unwrap();
        editor.events.unsubscribe("open", &first).unwrap();
        assert_eq!(editor.events.listener_count("open"), 1);

        editor.open_file(&mut ctx, "docs/readme.md").unwrap();
        drop(ctx);
        assert_eq!(
            console.lines(),
            ["Save to log b.log: Someone has performed open operation with the following file: readme.md"]
        );
    }

    #[test]
    fn test_unknown_channel() {
        let mut manager = EventManager::new(&["open"]);
        let listener: Rc<dyn EventListener> = Rc::new(EmailNotificationListener::new("a@b"));
        assert!(manager.subscribe("delete", listener).is_err());
    }

    #[test]
    fn test_observable_registration() {
        let mut company = Observable::default();
        let american: Rc<dyn StockObserver> = Rc::new(AmericanStockMarket);
        company.register(Rc::clone(&american));
        company.register(Rc::new(EuropeanStockMarket));

        company.unregister(&american);
        assert_eq!(company.len(), 1);
        company.unregister_all();
        assert!(company.is_empty());
    }
}
