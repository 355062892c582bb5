//! Abbreviation rule tables
//!
//! Rules are grouped by stage and kept in source order. Tables are built
//! once, validated and compiled up front, then shared read-only between
//! every normalize call.

pub mod config;
pub mod loader;
pub mod stage;
pub mod table;

pub use config::{Metadata, Rule, RuleSetConfig};
pub use loader::embedded;
pub use stage::Stage;
pub use table::{CompiledRule, RuleTable};
