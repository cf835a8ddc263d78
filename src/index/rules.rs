//! Relation Rule Table: relation key -> localized labels.

use std::collections::HashMap;

use crate::model::RelationRule;

/// Labels registered for one relation key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEntry {
    pub translated_label: String,
    pub reverse_key: String,
    pub reverse_translated_label: String,
}

/// Lookup of labeling rules by relation key.
#[derive(Debug, Clone, Default)]
pub struct RelationRuleTable {
    by_key: HashMap<String, RuleEntry>,
}

impl RelationRuleTable {
    /// Build the table. Rules with an empty relation key are skipped; on
    /// duplicate keys the later rule wins.
    pub fn build<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = RelationRule>,
    {
        let mut by_key = HashMap::new();
        for rule in rules {
            if rule.relation_key.is_empty() {
                continue;
            }
            by_key.insert(
                rule.relation_key,
                RuleEntry {
                    translated_label: rule.translated_label,
                    reverse_key: rule.reverse_key,
                    reverse_translated_label: rule.reverse_translated_label,
                },
            );
        }
        log::debug!("Relation rule table built: {} rules", by_key.len());
        Self { by_key }
    }

    pub fn get(&self, relation_key: &str) -> Option<&RuleEntry> {
        self.by_key.get(relation_key)
    }

    /// Translated label for a key, or `""` when no rule is registered.
    pub fn label_for(&self, relation_key: &str) -> &str {
        self.get(relation_key)
            .map(|entry| entry.translated_label.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl FromIterator<RelationRule> for RelationRuleTable {
    fn from_iter<I: IntoIterator<Item = RelationRule>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(key: &str, label: &str) -> RelationRule {
        RelationRule {
            relation_key: key.to_string(),
            translated_label: label.to_string(),
            reverse_key: String::new(),
            reverse_translated_label: String::new(),
        }
    }

    #[test]
    fn test_label_lookup() {
        let table = RelationRuleTable::build(vec![rule("Father", "Baba")]);
        assert_eq!(table.label_for("Father"), "Baba");
        assert_eq!(table.label_for("Mother"), "");
    }

    #[test]
    fn test_reverse_metadata_carried() {
        let mut father = rule("Father", "Baba");
        father.reverse_key = "Son".to_string();
        father.reverse_translated_label = "Mulga".to_string();
        let table = RelationRuleTable::build(vec![father]);

        let entry = table.get("Father").unwrap();
        assert_eq!(entry.reverse_key, "Son");
        assert_eq!(entry.reverse_translated_label, "Mulga");
    }

    #[test]
    fn test_rules_without_key_are_skipped() {
        let table: RelationRuleTable = vec![rule("", "orphan"), rule("Wife", "Patni")]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 1);
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let table = RelationRuleTable::build(vec![rule("Son", "old"), rule("Son", "Mulga")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.label_for("Son"), "Mulga");
    }

    #[test]
    fn test_empty_table() {
        let table = RelationRuleTable::default();
        assert!(table.is_empty());
        assert_eq!(table.label_for("Father"), "");
    }
}
