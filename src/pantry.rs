//! Pantry Editor State
//!
//! Working copy of the fridge while the add-ingredient modal is open.
//! Keeps insertion order so the list does not jump around while editing.

use crate::models::{Ingredient, SaveMode};

/// Mode used when the editor saves: the list replaces the fridge
pub const SAVE_MODE: SaveMode = SaveMode::Replace;
pub const PURGE_MISSING: bool = true;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryLine {
    pub name: String,
    pub quantity: u32,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pantry {
    lines: Vec<PantryLine>,
}

impl Pantry {
    /// Seed from the fridge; missing or zero quantities become 1
    pub fn from_fridge(items: &[Ingredient]) -> Self {
        let mut pantry = Self::default();
        for item in items {
            let name = item.name.trim();
            if name.is_empty() {
                continue;
            }
            let quantity = item.quantity.filter(|q| *q > 0).unwrap_or(1);
            match pantry.position(name) {
                Some(idx) => pantry.lines[idx].quantity = quantity,
                None => pantry.lines.push(PantryLine {
                    name: name.to_string(),
                    quantity,
                    unit: item.unit.clone(),
                }),
            }
        }
        pantry
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name == name)
    }

    pub fn lines(&self) -> &[PantryLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity(&self, name: &str) -> Option<u32> {
        self.position(name).map(|idx| self.lines[idx].quantity)
    }

    /// Picked from search: bump an existing line or append with 1
    pub fn add_from_search(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        match self.position(name) {
            Some(idx) => self.lines[idx].quantity += 1,
            None => self.lines.push(PantryLine {
                name: name.to_string(),
                quantity: 1,
                unit: None,
            }),
        }
    }

    pub fn increment(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.lines[idx].quantity += 1;
        }
    }

    pub fn decrement(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            let line = &mut self.lines[idx];
            line.quantity = line.quantity.saturating_sub(1).max(1);
        }
    }

    pub fn set_quantity(&mut self, name: &str, quantity: u32) {
        if let Some(idx) = self.position(name) {
            self.lines[idx].quantity = quantity.max(1);
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.lines.retain(|line| line.name != name);
    }

    pub fn to_ingredients(&self) -> Vec<Ingredient> {
        self.lines
            .iter()
            .map(|line| Ingredient {
                name: line.name.clone(),
                quantity: Some(line.quantity),
                unit: line.unit.clone(),
            })
            .collect()
    }
}

/// Parse a quantity typed into the stepper; unparsable input reads as 1
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, quantity: Option<u32>) -> Ingredient {
        Ingredient { name: name.to_string(), quantity, unit: None }
    }

    #[test]
    fn test_seed_floors_quantities() {
        let pantry = Pantry::from_fridge(&[
            ingredient("양파", Some(3)),
            ingredient("계란", Some(0)),
            ingredient("두부", None),
            ingredient("  ", Some(2)),
        ]);
        assert_eq!(pantry.len(), 3);
        assert_eq!(pantry.quantity("양파"), Some(3));
        assert_eq!(pantry.quantity("계란"), Some(1));
        assert_eq!(pantry.quantity("두부"), Some(1));
    }

    #[test]
    fn test_add_from_search() {
        let mut pantry = Pantry::from_fridge(&[ingredient("양파", Some(2))]);
        pantry.add_from_search("양파");
        pantry.add_from_search("대파");
        assert_eq!(pantry.quantity("양파"), Some(3));
        assert_eq!(pantry.quantity("대파"), Some(1));
        let names: Vec<&str> = pantry.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["양파", "대파"]);
    }

    #[test]
    fn test_stepper_floor() {
        let mut pantry = Pantry::from_fridge(&[ingredient("김치", Some(2))]);
        pantry.decrement("김치");
        pantry.decrement("김치");
        assert_eq!(pantry.quantity("김치"), Some(1));
        pantry.increment("김치");
        assert_eq!(pantry.quantity("김치"), Some(2));
        pantry.set_quantity("김치", 0);
        assert_eq!(pantry.quantity("김치"), Some(1));
    }

    #[test]
    fn test_remove_and_export() {
        let mut pantry = Pantry::from_fridge(&[ingredient("양파", Some(2)), ingredient("두부", None)]);
        pantry.remove("양파");
        assert_eq!(pantry.to_ingredients(), vec![ingredient("두부", Some(1))]);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 4 "), 4);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("abc"), 1);
    }
}
