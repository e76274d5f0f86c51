//! Category labels.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, OnceLock, RwLock};

use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult, ValueObject};

/// Canonical, case-normalized product category.
///
/// Equality and hashing are by normalized name. Names are interned in a
/// process-wide pool, so equal categories usually share one allocation; that is
/// an optimization only and nothing relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    /// Build a category from a raw label.
    ///
    /// The label is trimmed, then its first character is upper-cased and the
    /// whole remainder lower-cased (`"fRESH produce"` becomes
    /// `"Fresh produce"`; this is not per-word title casing).
    pub fn of(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_argument("Category name can't be blank"));
        }

        Ok(Self {
            name: intern(capitalize(trimmed)),
        })
    }

    /// Normalized display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.name.to_string()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn pool() -> &'static RwLock<HashSet<Arc<str>>> {
    static POOL: OnceLock<RwLock<HashSet<Arc<str>>>> = OnceLock::new();
    POOL.get_or_init(|| RwLock::new(HashSet::new()))
}

fn intern(name: String) -> Arc<str> {
    if let Ok(names) = pool().read() {
        if let Some(existing) = names.get(name.as_str()) {
            return Arc::clone(existing);
        }
    }

    match pool().write() {
        Ok(mut names) => {
            // Another thread may have interned it between the two locks.
            if let Some(existing) = names.get(name.as_str()) {
                return Arc::clone(existing);
            }
            let interned: Arc<str> = Arc::from(name);
            names.insert(Arc::clone(&interned));
            interned
        }
        Err(_) => Arc::from(name),
    }
}
