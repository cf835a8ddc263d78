pub mod audit;
pub mod cache;
pub mod config;
pub mod error;
pub mod index;
pub mod kinship;
pub mod loader;
pub mod model;

pub use cache::RelationCache;
pub use config::Config;
pub use error::{FamtreeError, Result};
pub use index::{PersonIndex, RelationRuleTable};
pub use kinship::{derive_relations, is_male_label, relations_for};
pub use model::{Person, PersonId, RelationResult, RelationRule};
