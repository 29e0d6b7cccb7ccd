use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single ingredient the user already has, as entered manually or parsed
/// from a receipt scan. `line_total` is quantity x unit cost when the unit
/// cost is known, else 0.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit_cost: f64,
    #[serde(default)]
    pub line_total: f64,
}

impl PantryItem {
    pub fn new(name: &str, quantity: f64, unit_cost: f64) -> Self {
        PantryItem {
            name: name.to_string(),
            quantity,
            unit_cost,
            line_total: quantity * unit_cost,
        }
    }
}

/// Case-insensitive containment match: "Chicken Breast" and "chicken" count
/// as the same ingredient. This predicate decides every "does the user
/// already have this" question, so exact-equality would change behavior.
pub fn same_ingredient(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

pub fn pantry_contains(pantry: &[PantryItem], name: &str) -> bool {
    pantry.iter().any(|item| same_ingredient(&item.name, name))
}

/// The user's current ingredient inventory. Owned by the caller; the grocery
/// engine only ever reads a slice of it.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    items: Vec<PantryItem>,
}

impl Pantry {
    pub fn new() -> Self {
        Pantry { items: Vec::new() }
    }

    pub fn from_items(items: Vec<PantryItem>) -> Self {
        let mut pantry = Pantry::new();
        pantry.add_items(items);
        pantry
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    /// Adds an item, merging into an existing entry when the names match
    /// case-insensitively (quantity and line total are summed, the first
    /// entry's spelling wins).
    pub fn add_item(&mut self, item: PantryItem) {
        let existing = self
            .items
            .iter_mut()
            .find(|i| i.name.to_lowercase() == item.name.to_lowercase());
        match existing {
            Some(existing) => {
                existing.quantity += item.quantity;
                existing.line_total += item.line_total;
            }
            None => self.items.push(item),
        }
    }

    pub fn add_items(&mut self, items: Vec<PantryItem>) {
        for item in items {
            self.add_item(item);
        }
    }

    pub fn remove_item(&mut self, name: &str) {
        self.items
            .retain(|i| i.name.to_lowercase() != name.to_lowercase());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        pantry_contains(&self.items, name)
    }
}

/// Simulated receipt OCR. Real parsing is out of scope; the scan always
/// yields the same fixed line items so the rest of the pipeline can be
/// exercised end to end.
pub fn scan_receipt() -> Vec<PantryItem> {
    vec![
        PantryItem::new("Chicken Breast", 2.0, 4.49),
        PantryItem::new("Rice", 1.0, 3.99),
        PantryItem::new("Tomatoes", 4.0, 0.75),
        PantryItem::new("Olive Oil", 1.0, 5.99),
        PantryItem::new("Eggs", 12.0, 0.25),
    ]
}

pub async fn load_pantry_file(path: &Path) -> Result<Vec<PantryItem>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read pantry file {:?}", path))?;
    let items: Vec<PantryItem> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse pantry file {:?} as JSON", path))?;
    Ok(items)
}
