//! Embedded rule table loader
//!
//! The French rule set ships inside the crate and is compiled on first use.

use crate::error::Result;
use crate::rules::RuleTable;
use std::sync::{Arc, OnceLock};

/// Source of the embedded French rule set
pub const FRENCH_RULES: &str = include_str!("../../configs/rules/french.toml");

static EMBEDDED: OnceLock<Result<Arc<RuleTable>>> = OnceLock::new();

/// The embedded French rule table, shared by every caller
pub fn embedded() -> Result<Arc<RuleTable>> {
    EMBEDDED
        .get_or_init(|| RuleTable::from_toml_str(FRENCH_RULES).map(Arc::new))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Stage;

    #[test]
    fn test_embedded_table_compiles() {
        let table = embedded().unwrap();
        assert_eq!(table.code(), "fr");
        for stage in Stage::ALL {
            assert!(
                !table.rules(stage).is_empty(),
                "stage {stage} has no embedded rules"
            );
        }
    }

    #[test]
    fn test_embedded_table_is_shared() {
        let first = embedded().unwrap();
        let second = embedded().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
