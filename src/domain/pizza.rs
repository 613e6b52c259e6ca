//! Pizza type and the topping encoding used for storage.
//!
//! Toppings are persisted denormalized: one text column holding the labels
//! joined by [`TOPPING_SEPARATOR`]. [`join_toppings`] and [`split_toppings`]
//! are the two halves of that contract. Labels are trimmed, blanks are
//! dropped and commas are rejected, so an accepted topping list always
//! survives a join followed by a split.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Separator between topping labels in the stored string.
pub const TOPPING_SEPARATOR: &str = ", ";

/// Join topping labels into their stored form.
#[must_use]
pub fn join_toppings(toppings: &[String]) -> String {
    toppings.join(TOPPING_SEPARATOR)
}

/// Split a stored (or typed) topping string into trimmed, non-empty labels.
#[must_use]
pub fn split_toppings(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// A pizza: a size label plus an ordered list of toppings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    size: String,
    toppings: Vec<String>,
}

impl Pizza {
    /// Create a pizza with no toppings.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptySize`] if the size is blank.
    pub fn new(size: impl Into<String>) -> Result<Self, DomainError> {
        let size = size.into().trim().to_string();
        if size.is_empty() {
            return Err(DomainError::EmptySize);
        }
        Ok(Self {
            size,
            toppings: Vec::new(),
        })
    }

    /// Create a pizza from a size and a list of topping labels.
    ///
    /// # Errors
    /// Returns an error if the size is blank or a topping contains a comma.
    pub fn with_toppings<I, S>(size: impl Into<String>, toppings: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pizza = Self::new(size)?;
        for topping in toppings {
            pizza.add_topping(topping)?;
        }
        Ok(pizza)
    }

    /// Create a pizza from the two form values a clerk types: a size and a
    /// comma separated topping list.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptySize`] if the size is blank.
    pub fn from_form(size: &str, toppings: &str) -> Result<Self, DomainError> {
        Self::with_toppings(size, split_toppings(toppings))
    }

    /// Append a topping. Blank labels are ignored.
    ///
    /// # Errors
    /// Returns [`DomainError::ToppingContainsSeparator`] if the label contains a comma.
    pub fn add_topping(&mut self, topping: impl Into<String>) -> Result<(), DomainError> {
        let topping = topping.into();
        let topping = topping.trim();
        if topping.is_empty() {
            return Ok(());
        }
        if topping.contains(',') {
            return Err(DomainError::ToppingContainsSeparator {
                topping: topping.to_string(),
            });
        }
        self.toppings.push(topping.to_string());
        Ok(())
    }

    /// Get the size label.
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Get the toppings in the order they were added.
    #[must_use]
    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    /// Toppings in their stored, joined form.
    #[must_use]
    pub fn toppings_label(&self) -> String {
        join_toppings(&self.toppings)
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size: {}, Toppings: {}", self.size, self.toppings_label())
    }
}

/// Parses the compact `SIZE[:TOPPINGS]` notation, e.g. `Large:Pepperoni, Olives`.
impl FromStr for Pizza {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((size, toppings)) => Self::from_form(size, toppings),
            None => Self::new(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn join_uses_comma_space() {
        assert_eq!(
            join_toppings(&labels(&["Pepperoni", "Olives"])),
            "Pepperoni, Olives"
        );
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join_toppings(&[]), "");
    }

    #[test]
    fn split_trims_and_drops_blanks() {
        assert_eq!(
            split_toppings(" Ham ,, Pineapple ,"),
            labels(&["Ham", "Pineapple"])
        );
        assert!(split_toppings("").is_empty());
        assert!(split_toppings(" , ").is_empty());
    }

    #[test]
    fn accepted_topping_lists_survive_join_then_split() {
        let cases: &[&[&str]] = &[
            &[],
            &["Cheese"],
            &["Pepperoni", "Olives"],
            &["Extra Cheese", "Sun-dried Tomato", "Basil"],
            &["  Onion  ", "", "Garlic"],
        ];
        for case in cases {
            let pizza = Pizza::with_toppings("Large", case.iter().copied()).unwrap();
            let decoded = split_toppings(&pizza.toppings_label());
            assert_eq!(decoded, pizza.toppings(), "case {case:?}");
        }
    }

    #[test]
    fn new_trims_size() {
        let pizza = Pizza::new("  Medium ").unwrap();
        assert_eq!(pizza.size(), "Medium");
        assert!(pizza.toppings().is_empty());
    }

    #[test]
    fn new_rejects_blank_size() {
        assert_eq!(Pizza::new(""), Err(DomainError::EmptySize));
        assert_eq!(Pizza::new(" \t"), Err(DomainError::EmptySize));
    }

    #[test]
    fn add_topping_rejects_separator() {
        let mut pizza = Pizza::new("Small").unwrap();
        let err = pizza.add_topping("Ham, Egg").unwrap_err();
        assert_eq!(
            err,
            DomainError::ToppingContainsSeparator {
                topping: "Ham, Egg".to_string()
            }
        );
        assert!(pizza.toppings().is_empty());
    }

    #[test]
    fn from_form_splits_typed_toppings() {
        let pizza = Pizza::from_form("Large", "Pepperoni, Olives").unwrap();
        assert_eq!(pizza.toppings(), labels(&["Pepperoni", "Olives"]).as_slice());
        assert_eq!(pizza.toppings_label(), "Pepperoni, Olives");
    }

    #[test]
    fn parse_compact_notation() {
        let pizza: Pizza = "Large:Pepperoni,Olives".parse().unwrap();
        assert_eq!(pizza.size(), "Large");
        assert_eq!(pizza.toppings_label(), "Pepperoni, Olives");

        let plain: Pizza = "Medium".parse().unwrap();
        assert_eq!(plain.size(), "Medium");
        assert!(plain.toppings().is_empty());
    }

    #[test]
    fn parse_rejects_missing_size() {
        assert_eq!(":Cheese".parse::<Pizza>(), Err(DomainError::EmptySize));
    }

    #[test]
    fn display_matches_receipt_format() {
        let pizza = Pizza::from_form("Large", "Pepperoni, Olives").unwrap();
        assert_eq!(
            pizza.to_string(),
            "Size: Large, Toppings: Pepperoni, Olives"
        );
    }
}
