//! Category ledger
//!
//! The running total spent per expense category. Categories keep the order in
//! which they were added; defaults come first on a fresh ledger. Categories are
//! never removed and totals never go below zero.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;
use crate::error::{PlannerError, PlannerResult};

/// Categories every fresh ledger starts with, in display order
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Accommodation",
    "Transportation",
    "Food & Dining",
    "Activities & Sightseeing",
    "Miscellaneous",
];

/// One category and the amount spent in it so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: Money,
}

/// Mapping from category name to accumulated spend, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryLedger {
    entries: Vec<CategoryTotal>,
}

impl CategoryLedger {
    /// Create a ledger with no categories at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding the default categories, each at zero
    pub fn with_default_categories() -> Self {
        Self {
            entries: DEFAULT_CATEGORIES
                .iter()
                .map(|name| CategoryTotal {
                    name: (*name).to_string(),
                    amount: Money::zero(),
                })
                .collect(),
        }
    }

    /// Add a new category with a zero total
    ///
    /// The name is trimmed first; the stored (trimmed) name is returned.
    pub fn add_category(&mut self, name: &str) -> PlannerResult<&str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::EmptyName);
        }
        if self.contains(name) {
            return Err(PlannerError::DuplicateCategory(name.to_string()));
        }

        self.entries.push(CategoryTotal {
            name: name.to_string(),
            amount: Money::zero(),
        });
        Ok(self.entries[self.entries.len() - 1].name.as_str())
    }

    /// Add `amount` to an existing category, returning the new total
    pub fn add_amount(&mut self, category: &str, amount: Money) -> PlannerResult<Money> {
        if amount.is_negative() {
            return Err(PlannerError::NegativeAmount(amount));
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == category)
            .ok_or_else(|| PlannerError::CategoryNotFound(category.to_string()))?;

        entry.amount = entry.amount.checked_add(amount).ok_or_else(|| {
            PlannerError::Validation(format!("total for '{}' is too large", category))
        })?;
        Ok(entry.amount)
    }

    /// Category names in insertion order
    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Look up the running total for a category
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.name == category)
            .map(|e| e.amount)
    }

    /// Check whether a category with this exact name exists
    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|e| e.name == category)
    }

    /// Iterate over categories and totals in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no categories at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every category total
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Check the ledger invariants: non-empty names and non-negative totals
    pub fn validate(&self) -> PlannerResult<()> {
        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(PlannerError::EmptyName);
            }
            if entry.amount.is_negative() {
                return Err(PlannerError::NegativeAmount(entry.amount));
            }
        }
        Ok(())
    }

    /// Insert or overwrite, keeping the original position of an existing name
    fn upsert(&mut self, name: String, amount: Money) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.amount = amount,
            None => self.entries.push(CategoryTotal { name, amount }),
        }
    }
}

// Serialized as a JSON object so the file reads `{"Food & Dining": 200.0, ...}`.
impl Serialize for CategoryLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LedgerVisitor;

        impl<'de> Visitor<'de> for LedgerVisitor {
            type Value = CategoryLedger;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut ledger = CategoryLedger::new();
                while let Some((name, amount)) = access.next_entry::<String, Money>()? {
                    ledger.upsert(name, amount);
                }
                Ok(ledger)
            }
        }

        deserializer.deserialize_map(LedgerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let ledger = CategoryLedger::with_default_categories();
        assert_eq!(ledger.categories(), DEFAULT_CATEGORIES.to_vec());
        assert!(ledger.total().is_zero());
    }

    #[test]
    fn test_add_category_appends() {
        let mut ledger = CategoryLedger::with_default_categories();
        let name = ledger.add_category("  Souvenirs ").unwrap().to_string();

        assert_eq!(name, "Souvenirs");
        assert_eq!(ledger.categories().last(), Some(&"Souvenirs"));
        assert_eq!(ledger.get("Souvenirs"), Some(Money::zero()));
    }

    #[test]
    fn test_add_category_rejects_duplicate_without_change() {
        let mut ledger = CategoryLedger::with_default_categories();
        ledger.add_category("Souvenirs").unwrap();
        ledger.add_amount("Souvenirs", Money::from_cents(900)).unwrap();
        let before = ledger.clone();

        let err = ledger.add_category("Souvenirs").unwrap_err();
        assert!(matches!(err, PlannerError::DuplicateCategory(ref n) if n == "Souvenirs"));
        assert_eq!(ledger, before);

        // Trimming happens before the duplicate check
        assert!(ledger.add_category(" Food & Dining ").is_err());
    }

    #[test]
    fn test_add_category_rejects_blank() {
        let mut ledger = CategoryLedger::new();
        assert!(matches!(ledger.add_category("   "), Err(PlannerError::EmptyName)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_amount_accumulates() {
        let mut ledger = CategoryLedger::with_default_categories();
        ledger.add_amount("Food & Dining", Money::from_cents(5550)).unwrap();
        let total = ledger
            .add_amount("Food & Dining", Money::from_cents(4450))
            .unwrap();

        assert_eq!(total, Money::from_cents(10000));
        assert_eq!(ledger.total(), Money::from_cents(10000));
    }

    #[test]
    fn test_add_amount_zero_is_allowed() {
        let mut ledger = CategoryLedger::with_default_categories();
        assert_eq!(
            ledger.add_amount("Miscellaneous", Money::zero()).unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_add_amount_errors() {
        let mut ledger = CategoryLedger::with_default_categories();
        assert!(matches!(
            ledger.add_amount("Nope", Money::from_cents(1)),
            Err(PlannerError::CategoryNotFound(_))
        ));
        assert!(matches!(
            ledger.add_amount("Accommodation", Money::from_cents(-1)),
            Err(PlannerError::NegativeAmount(_))
        ));
        assert!(ledger.total().is_zero());
    }

    #[test]
    fn test_total_matches_sum_of_additions() {
        let mut ledger = CategoryLedger::with_default_categories();
        let additions = [
            ("Accommodation", 120_00),
            ("Transportation", 45_50),
            ("Accommodation", 80_00),
            ("Miscellaneous", 3_25),
            ("Food & Dining", 0),
        ];
        for (category, cents) in additions {
            ledger.add_amount(category, Money::from_cents(cents)).unwrap();
        }

        let expected: i64 = additions.iter().map(|(_, c)| c).sum();
        assert_eq!(ledger.total().cents(), expected);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut ledger = CategoryLedger::new();
        ledger.add_category("Zebra rides").unwrap();
        ledger.add_category("Apples").unwrap();
        ledger.add_amount("Apples", Money::from_cents(250)).unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"Zebra rides":0.0,"Apples":2.5}"#);

        let back: CategoryLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.categories(), vec!["Zebra rides", "Apples"]);
    }

    #[test]
    fn test_deserialize_duplicate_key_last_wins() {
        let ledger: CategoryLedger =
            serde_json::from_str(r#"{"Food": 1.0, "Hotel": 2.0, "Food": 3.0}"#).unwrap();
        assert_eq!(ledger.categories(), vec!["Food", "Hotel"]);
        assert_eq!(ledger.get("Food"), Some(Money::from_cents(300)));
    }

    #[test]
    fn test_validate() {
        let ledger: CategoryLedger = serde_json::from_str(r#"{"Food": -1.0}"#).unwrap();
        assert!(ledger.validate().is_err());

        let ledger: CategoryLedger = serde_json::from_str(r#"{" ": 1.0}"#).unwrap();
        assert!(matches!(ledger.validate(), Err(PlannerError::EmptyName)));

        assert!(CategoryLedger::with_default_categories().validate().is_ok());
    }
}
