use crate::constants::MAX_QUANTITY_PER_LINE;
use crate::error::CartError;
use crate::types::menu_item::MenuItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
    pub special_instructions: Option<String>,
}

impl CartLine {
    pub fn total(&self) -> u64 {
        u64::from(self.item.price) * u64::from(self.quantity)
    }
}

/// Session cart. Lines keep insertion order and are keyed by menu item id.
/// No line ever holds more than `MAX_QUANTITY_PER_LINE` units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

fn check_quantity(quantity: u32) -> Result<(), CartError> {
    match quantity {
        0 => Err(CartError::ZeroQuantity),
        q if q > MAX_QUANTITY_PER_LINE => Err(CartError::TooMany {
            max: MAX_QUANTITY_PER_LINE,
        }),
        _ => Ok(()),
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units of `item`, merging with an existing line.
    /// The cart is left unchanged when the line would exceed the cap.
    pub fn add(
        &mut self,
        item: MenuItem,
        quantity: u32,
        special_instructions: Option<String>,
    ) -> Result<(), CartError> {
        check_quantity(quantity)?;
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            let merged = line.quantity.saturating_add(quantity);
            check_quantity(merged)?;
            line.quantity = merged;
            if special_instructions.is_some() {
                line.special_instructions = special_instructions;
            }
            return Ok(());
        }
        self.lines.push(CartLine {
            item,
            quantity,
            special_instructions,
        });
        Ok(())
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item.id != item_id);
        self.lines.len() != before
    }

    /// Sets the quantity of an existing line; zero removes it.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return if self.remove(item_id) {
                Ok(())
            } else {
                Err(CartError::NotInCart(item_id.to_string()))
            };
        }
        check_quantity(quantity)?;
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.item.id == item_id)
            .ok_or_else(|| CartError::NotInCart(item_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::total).sum()
    }
}
