//! Static catalogs, embedded at build time and parsed once at first use.
//!
//! Two catalogs ship with the game:
//! - the cosmetic shop items sold for coins
//! - the sponsor companies and their fixed surveys
//!
//! Both are plain data. Representing them as configuration rather than
//! code keeps future externalization a data change, not a logic change.

use std::sync::LazyLock;

use datatown_types::{Company, ShopItem, SurveyDefinition};
use serde::{Deserialize, Serialize};

/// A sponsor company together with its fixed survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    /// The company offering the survey.
    pub company: Company,

    /// The survey it pays respondents to complete.
    pub survey: SurveyDefinition,
}

/// Error type for catalog parsing.
#[derive(Debug, thiserror::Error)]
#[error("malformed catalog data: {0}")]
pub struct CatalogError(#[from] serde_json::Error);

/// Parse a shop item catalog from JSON.
pub fn parse_shop_items(json: &str) -> Result<Vec<ShopItem>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a sponsor catalog from JSON.
pub fn parse_sponsors(json: &str) -> Result<Vec<Sponsor>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

static SHOP_ITEMS: LazyLock<Vec<ShopItem>> = LazyLock::new(|| {
    parse_shop_items(include_str!("../data/shop_items.json"))
        .expect("embedded shop catalog is valid")
});

static SPONSORS: LazyLock<Vec<Sponsor>> = LazyLock::new(|| {
    parse_sponsors(include_str!("../data/sponsors.json")).expect("embedded sponsors are valid")
});

/// The built-in shop items, in display order.
pub fn shop_items() -> &'static [ShopItem] {
    &SHOP_ITEMS
}

/// The built-in sponsors, in display order.
pub fn sponsors() -> &'static [Sponsor] {
    &SPONSORS
}

/// Look up a sponsor by company name.
pub fn sponsor_by_name(name: &str) -> Option<&'static Sponsor> {
    SPONSORS.iter().find(|s| s.company.name == name)
}
