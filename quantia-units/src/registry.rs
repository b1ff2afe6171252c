//! The unit registry: registration, symbol resolution and consistency checks

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, LazyLock};
use tracing::debug;
use quantia_core::{QuantityError, Result};
use crate::base_unit::BaseUnit;
use crate::prefix::UnitPrefix;
use crate::unit::Unit;

/// Process-wide registry, populated on first access
static GLOBAL: LazyLock<Registry> =
    LazyLock::new(|| Registry::build().expect("built-in unit tables must not contain duplicate symbols"));

/// Where a unit token points to: a registered unit plus the prefix that was matched
#[derive(Debug, Clone, Copy)]
struct Resolution {
    index: usize,
    prefix: Option<&'static UnitPrefix>,
}

/// Registry of all known base units
///
/// Read-only once built; share it by reference. Tokens resolve in O(1) through an
/// index with a fixed tie-break: a bare symbol always wins, otherwise the first
/// `prefix + symbol` match in registration order (and prefix-list order) wins.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    units: Vec<Arc<BaseUnit>>,
    bare: HashMap<String, usize>,
    tokens: HashMap<String, Resolution>,
}

impl Registry {
    /// An empty registry, for callers that want to register their own table
    pub fn empty() -> Self {
        Registry::default()
    }

    /// A registry holding the built-in tables
    pub fn build() -> Result<Self> {
        let mut registry = Registry::empty();
        registry.rebuild()?;
        Ok(registry)
    }

    /// The shared built-in registry
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Clear and repopulate the built-in tables. Running it twice yields the same table.
    pub fn rebuild(&mut self) -> Result<()> {
        self.units.clear();
        self.bare.clear();
        self.tokens.clear();
        self.register_builtin_units()?;
        self.reindex();
        debug!(units = self.units.len(), tokens = self.tokens.len(), "unit registry built");
        Ok(())
    }

    /// Register a unit, assigning it the next order number.
    pub fn register(&mut self, unit: BaseUnit) -> Result<()> {
        self.insert(unit)?;
        self.reindex();
        Ok(())
    }

    /// Register without refreshing the token index (bulk loading).
    pub(crate) fn insert(&mut self, mut unit: BaseUnit) -> Result<()> {
        if self.bare.contains_key(&unit.symbol) {
            return Err(QuantityError::DuplicateSymbol(unit.symbol));
        }
        unit.order = self.units.iter().map(|u| u.order).max().unwrap_or(0) + 1;
        self.bare.insert(unit.symbol.clone(), self.units.len());
        self.units.push(Arc::new(unit));
        Ok(())
    }

    fn reindex(&mut self) {
        let mut tokens = HashMap::new();
        for (index, unit) in self.units.iter().enumerate() {
            tokens.insert(unit.symbol.clone(), Resolution { index, prefix: None });
        }
        for (index, unit) in self.units.iter().enumerate() {
            for &prefix in unit.prefixes() {
                tokens
                    .entry(format!("{}{}", prefix.symbol, unit.symbol))
                    .or_insert(Resolution { index, prefix: Some(prefix) });
            }
        }
        self.tokens = tokens;
    }

    /// Look up a unit by its bare symbol (no prefix scanning)
    pub fn get(&self, symbol: &str) -> Option<&Arc<BaseUnit>> {
        self.bare.get(symbol).map(|&i| &self.units[i])
    }

    /// All units in registration order
    pub fn units(&self) -> impl Iterator<Item = &Arc<BaseUnit>> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Resolve `prefix + symbol` text (exponent already split off) to a unit.
    pub fn resolve(&self, prefix_base: &str, exponent: i32) -> Result<Unit> {
        let found = self.tokens.get(prefix_base).ok_or_else(|| {
            QuantityError::format(format!(
                "Base unit '{}' is invalid or unknown.",
                prefix_base
            ))
        })?;
        Ok(Unit::new(self.units[found.index].clone(), found.prefix, exponent))
    }

    /// Every symbol that can be produced more than once from
    /// `{bare symbol} ∪ {prefix + symbol}` across the whole table.
    /// Empty for a consistent registry.
    pub fn clashes(&self) -> BTreeSet<String> {
        let mut seen = HashSet::new();
        let mut clashes = BTreeSet::new();
        for unit in &self.units {
            let spellings = std::iter::once(unit.symbol.clone()).chain(
                unit.prefixes()
                    .iter()
                    .map(|p| format!("{}{}", p.symbol, unit.symbol)),
            );
            for spelling in spellings {
                if !seen.insert(spelling.clone()) {
                    clashes.insert(spelling);
                }
            }
        }
        clashes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix;

    fn small_registry() -> Registry {
        let mut registry = Registry::empty();
        registry.register(BaseUnit::new("m", "meter").with_prefixes(prefix::metric())).unwrap();
        registry.register(BaseUnit::new("s", "second").with_prefixes(prefix::metric())).unwrap();
        registry.register(BaseUnit::linear("min", "minute", 60.0, "s")).unwrap();
        registry
    }

    #[test]
    fn test_order_is_sequential() {
        let registry = small_registry();
        let orders: Vec<u32> = registry.units().map(|u| u.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_symbol() {
        let mut registry = small_registry();
        let err = registry.register(BaseUnit::new("m", "other meter")).unwrap_err();
        assert_eq!(err, QuantityError::DuplicateSymbol("m".to_string()));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_get_matches_bare_symbols_only() {
        let registry = small_registry();
        assert_eq!(registry.get("s").map(|u| u.name.as_str()), Some("second"));
        assert!(registry.get("km").is_none());
    }

    #[test]
    fn test_bare_symbol_wins_over_prefixed() {
        // "ms" only resolves through the milli prefix
        let registry = small_registry();
        let min = registry.resolve("min", 1).unwrap();
        assert_eq!(min.base.symbol, "min");
        assert!(min.prefix.is_none());

        let ms = registry.resolve("ms", -1).unwrap();
        assert_eq!(ms.base.symbol, "s");
        assert_eq!(ms.prefix.map(|p| p.symbol), Some("m"));
        assert_eq!(ms.exponent, -1);
    }

    #[test]
    fn test_bare_symbol_shadows_prefixed_spelling() {
        let mut registry = Registry::empty();
        registry.register(BaseUnit::new("a", "first").with_prefixes(prefix::get_multiple("k").unwrap())).unwrap();
        registry.register(BaseUnit::new("ka", "second").with_prefixes(vec![])).unwrap();
        // "ka" is a bare symbol of the second unit: bare wins
        assert_eq!(registry.resolve("ka", 1).unwrap().base.name, "second");
        assert!(registry.clashes().contains("ka"));
    }

    #[test]
    fn test_unknown_token() {
        let registry = small_registry();
        assert!(matches!(registry.resolve("xyz", 1), Err(QuantityError::Format(_))));
    }

    #[test]
    fn test_builtin_has_no_clashes() {
        let registry = Registry::build().unwrap();
        let clashes = registry.clashes();
        assert!(clashes.is_empty(), "clashing symbols: {:?}", clashes);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut registry = Registry::build().unwrap();
        let count = registry.len();
        let last_order = registry.units().last().map(|u| u.order);
        registry.rebuild().unwrap();
        assert_eq!(registry.len(), count);
        assert_eq!(registry.units().last().map(|u| u.order), last_order);
    }

    #[test]
    fn test_global_is_shared() {
        let a = Registry::global() as *const Registry;
        let b = Registry::global() as *const Registry;
        assert_eq!(a, b);
        assert!(Registry::global().get("m").is_some());
    }

    #[test]
    fn test_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| Registry::global().len()))
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(counts.windows(2).all(|w| w[0] == w[1]));
    }
}
