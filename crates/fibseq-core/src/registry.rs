//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
use crate::iterative::Iterative;
use crate::memoized::Memoized;
use crate::naive::NaiveRecursive;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List the canonical calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and a per-factory cache.
///
/// Calculators are shared per canonical name, so repeated lookups of
/// `memo` and `memoized` hit the same memoization cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<&'static str, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn canonical(name: &str) -> Result<&'static str, FibError> {
        match name {
            "naive" => Ok("naive"),
            "memo" | "memoized" => Ok("memo"),
            "iterative" | "iter" => Ok("iterative"),
            _ => Err(FibError::Config(format!("unknown calculator: {name}"))),
        }
    }

    fn create_calculator(canonical: &str) -> Arc<dyn Calculator> {
        let core: Arc<dyn CoreCalculator> = match canonical {
            "naive" => Arc::new(NaiveRecursive::new()),
            "memo" => Arc::new(Memoized::new()),
            _ => Arc::new(Iterative::new()),
        };
        Arc::new(FibCalculator::new(core))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let key = Self::canonical(name)?;

        // Check cache first
        if let Some(calc) = self.cache.read().get(key) {
            return Ok(Arc::clone(calc));
        }

        let mut cache = self.cache.write();
        let calc = cache
            .entry(key)
            .or_insert_with(|| Self::create_calculator(key));
        Ok(Arc::clone(calc))
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "memo", "iterative"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    #[test]
    fn factory_creates_each_strategy() {
        let factory = DefaultFactory::new();
        assert_eq!(factory.get("naive").unwrap().name(), "NaiveRecursive");
        assert_eq!(factory.get("memo").unwrap().name(), "Memoized");
        assert_eq!(factory.get("iterative").unwrap().name(), "Iterative");
    }

    #[test]
    fn factory_resolves_aliases() {
        let factory = DefaultFactory::new();
        let memo = factory.get("memo").unwrap();
        let memoized = factory.get("memoized").unwrap();
        assert!(Arc::ptr_eq(&memo, &memoized));
        assert_eq!(factory.get("iter").unwrap().name(), "Iterative");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let calc1 = factory.get("naive").unwrap();
        let calc2 = factory.get("naive").unwrap();
        assert!(Arc::ptr_eq(&calc1, &calc2));
    }

    #[test]
    fn factories_are_isolated() {
        let a = DefaultFactory::new();
        let b = DefaultFactory::new();
        assert!(!Arc::ptr_eq(&a.get("memo").unwrap(), &b.get("memo").unwrap()));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            factory.get("fast"),
            Err(FibError::Config(msg)) if msg.contains("fast")
        ));
    }

    #[test]
    fn every_available_name_computes_f10() {
        let factory = DefaultFactory::new();
        let opts = Options::default();
        for name in factory.available() {
            let value = factory.get(name).unwrap().calculate(10, &opts).unwrap();
            assert_eq!(value.to_string(), "55", "{name}");
        }
    }
}
