use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_kebab_case;

/// 所有設計模式示範的註冊表
pub struct Catalog {
    demos: Vec<Box<dyn Demo>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { demos: Vec::new() }
    }

    /// Every demo shipped with the crate, in catalogue order.
    pub fn builtin() -> Self {
        Self {
            demos: crate::patterns::builtin_demos(),
        }
    }

    pub fn register(&mut self, demo: Box<dyn Demo>) -> Result<()> {
        let info = demo.info();
        validate_kebab_case("demo.name", info.name)?;

        if self.find(info.name).is_some() {
            return Err(CatalogError::ConfigError {
                message: format!("demo '{}' is already registered", info.name),
            });
        }

        tracing::debug!("📚 Registered demo {} ({})", info.name, info.category);
        self.demos.push(demo);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Demo> {
        self.demos.iter().map(|demo| demo.as_ref())
    }

    pub fn list(&self) -> Vec<DemoInfo> {
        self.iter().map(|demo| demo.info()).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|demo| demo.info().name).collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&dyn Demo> {
        self.iter()
            .filter(|demo| demo.info().category == category)
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&dyn Demo> {
        let name = name.trim().to_ascii_lowercase();
        self.iter().find(|demo| demo.info().name == name)
    }

    /// Resolves a selector to demos. An exact demo name selects one demo;
    /// a pattern name (`observer`, `chain of responsibility`) or a name
    /// prefix (`chain`) selects every variant of that pattern.
    pub fn select(&self, selector: &str) -> Result<Vec<&dyn Demo>> {
        if let Some(demo) = self.find(selector) {
            return Ok(vec![demo]);
        }

        let wanted = normalize(selector);
        let prefix = format!("{}-", wanted);
        let matches: Vec<&dyn Demo> = self
            .iter()
            .filter(|demo| {
                let info = demo.info();
                normalize(info.pattern) == wanted || info.name.starts_with(&prefix)
            })
            .collect();

        if matches.is_empty() {
            return Err(CatalogError::UnknownDemo {
                name: selector.to_string(),
            });
        }
        Ok(matches)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique_kebab_case() {
        let catalog = Catalog::builtin();
        let names = catalog.names();
        let unique: HashSet<_> = names.iter().collect();

        assert_eq!(names.len(), unique.len());
        for name in names {
            assert!(validate_kebab_case("name", name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_every_category_has_demos() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert!(!catalog.by_category(category).is_empty(), "{}", category);
        }
    }

    #[test]
    fn test_select_by_pattern_name() {
        let catalog = Catalog::builtin();

        let observers = catalog.select("Observer").unwrap();
        assert!(observers.len() >= 2);
        assert!(observers
            .iter()
            .all(|demo| demo.info().name.starts_with("observer-")));

        let chain = catalog.select("chain of responsibility").unwrap();
        assert_eq!(chain.len(), 2);

        let exact = catalog.select("chain-garage").unwrap();
        assert_eq!(exact.len(), 1);
    }

    #[test]
    fn test_select_unknown() {
        let catalog = Catalog::builtin();
        let err = catalog.select("monad").err().unwrap();
        assert!(matches!(err, CatalogError::UnknownDemo { .. }));
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut catalog = Catalog::new();
        catalog
            .register(Box::new(crate::patterns::creational::borg::BorgDemo))
            .unwrap();
        assert!(catalog
            .register(Box::new(crate::patterns::creational::borg::BorgDemo))
            .is_err());
        assert_eq!(catalog.len(), 1);
    }
}
