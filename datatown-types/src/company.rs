use serde::{Deserialize, Serialize};

/// A sponsor company offering a fixed survey in exchange for coins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Display name, e.g. `"TechCorp"`.
    pub name: String,

    /// Brand color as a packed RGB value.
    pub color: u32,

    /// The data categories this company is interested in.
    pub interests: Vec<String>,

    /// Payout multiplier applied to matching data sales.
    pub multiplier: f64,

    /// Short display description.
    pub description: String,
}
