//! Core types for the datatown survey economy.
//!
//! This crate provides the foundational types shared by all flows:
//! - `SurveyDefinition`, `Question` and `QuestionKind` - survey structure
//! - `AnswerValue` and `AnswerSet` - collected respondent answers
//! - `ShopItem`, `CosmeticCategory` and `CategoryFilter` - the cosmetic catalog
//! - `Inventory` - a player's coin balance and equipped cosmetics
//! - `Company` - sponsor metadata for built-in surveys

mod id;
pub use id::{QuestionId, SurveyId, UserId};

mod question;
pub use question::{Question, QuestionKind};

mod survey;
pub use survey::SurveyDefinition;

mod answers;
pub use answers::{AnswerSet, AnswerValue};

mod shop_item;
pub use shop_item::{CategoryFilter, CosmeticCategory, ShopItem};

mod inventory;
pub use inventory::{InsufficientFunds, Inventory};

mod company;
pub use company::Company;
