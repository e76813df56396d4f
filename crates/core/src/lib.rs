pub mod matcher;
pub mod models;
pub mod normalize;
pub mod rules;
pub mod stem;

pub use models::{MatchOutcome, Rule, RuleScore, RuleSetError, RuleSpec};
pub use normalize::normalize;
pub use rules::{builtin_specs, RuleDocument, RuleSet, DEFAULT_FALLBACK};
pub use stem::stem;
