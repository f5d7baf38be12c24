use std::collections::HashMap;

use crate::CosmeticCategory;

/// Error returned when a purchase costs more than the current balance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("insufficient funds: item costs {cost}, balance is {balance}")]
pub struct InsufficientFunds {
    /// The attempted spend.
    pub cost: u32,
    /// The balance at the time of the attempt.
    pub balance: u32,
}

/// A player's coin balance and equipped cosmetics.
///
/// The balance never goes negative: spending is checked and deducted in
/// one step via [`Inventory::try_spend`]. Mutated by survey-completion
/// rewards and shop purchases only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    coins: u32,
    equipped: HashMap<CosmeticCategory, String>,
}

impl Inventory {
    /// Create an inventory with a starting balance and nothing equipped.
    pub fn new(starting_coins: u32) -> Self {
        Self {
            coins: starting_coins,
            equipped: HashMap::new(),
        }
    }

    /// Get the current coin balance.
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Credit coins, e.g. a survey reward.
    pub fn credit(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Deduct `cost` coins, failing without mutation if the balance is
    /// too low.
    pub fn try_spend(&mut self, cost: u32) -> Result<(), InsufficientFunds> {
        if self.coins < cost {
            return Err(InsufficientFunds {
                cost,
                balance: self.coins,
            });
        }
        self.coins -= cost;
        Ok(())
    }

    /// Equip a value into a cosmetic slot, replacing whatever was there.
    pub fn equip(&mut self, category: CosmeticCategory, value: impl Into<String>) {
        self.equipped.insert(category, value.into());
    }

    /// Get the currently equipped value for a slot.
    pub fn equipped(&self, category: CosmeticCategory) -> Option<&str> {
        self.equipped.get(&category).map(String::as_str)
    }

    /// Check if a slot currently holds exactly this value.
    pub fn is_equipped(&self, category: CosmeticCategory, value: &str) -> bool {
        self.equipped(category) == Some(value)
    }
}
