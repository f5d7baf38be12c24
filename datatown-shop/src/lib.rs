//! Cosmetic shop flow.
//!
//! Purchasing is an atomic check-then-deduct-then-equip over the player's
//! [`Inventory`]. There is deliberately no re-purchase guard at this
//! level: buying an already-equipped item charges again, and callers use
//! [`is_owned`] to disable the control instead.

use datatown_types::{CategoryFilter, InsufficientFunds, Inventory, ShopItem};
use tracing::info;

/// Buy an item: deduct its cost and equip its value into the item's
/// cosmetic slot.
///
/// Fails without any mutation when the balance is below the cost.
pub fn purchase(inventory: &mut Inventory, item: &ShopItem) -> Result<(), InsufficientFunds> {
    inventory.try_spend(item.cost)?;
    inventory.equip(item.category, item.value.clone());
    info!(item = %item.id, cost = item.cost, balance = inventory.coins(), "item purchased");
    Ok(())
}

/// Check if the item's slot currently holds exactly this item's value.
pub fn is_owned(inventory: &Inventory, item: &ShopItem) -> bool {
    inventory.is_equipped(item.category, &item.value)
}

/// Filter catalog items by category; [`CategoryFilter::All`] is the
/// identity.
pub fn filter_by_category<'a>(items: &'a [ShopItem], filter: CategoryFilter) -> Vec<&'a ShopItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
