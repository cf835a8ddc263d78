//! Family records: people, relation labeling rules, and derived relations.
//!
//! Field names follow the stored member documents (`serNo`, `fatherSerNo`, ...).
//! The generic `id`/`fatherId` spellings are read only when the stored name is
//! absent, so documents carrying a driver-generated `id` next to `serNo` load.

mod loose;

pub use loose::{normalize_id, parse_id, ToPersonId};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Serial number identifying a person.
pub type PersonId = i64;

/// A single family member.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Person {
    /// Serial number. `None` when the stored value is missing or malformed.
    #[serde(rename = "serNo")]
    pub id: Option<PersonId>,
    /// Free-form gender. Only the exact male literal is significant.
    pub gender: String,
    #[serde(rename = "fatherSerNo")]
    pub father_id: Option<PersonId>,
    #[serde(rename = "motherSerNo")]
    pub mother_id: Option<PersonId>,
    /// Not required to be reciprocated by the spouse's record.
    #[serde(rename = "spouseSerNo")]
    pub spouse_id: Option<PersonId>,
    /// Unordered; duplicates are kept as stored.
    #[serde(rename = "childrenSerNos")]
    pub children_ids: Vec<PersonId>,
    /// Every other stored field (names, photos, ...), carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Person {
    /// Never rejects a record: a non-object decodes as a person without an
    /// id, which the person index skips.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = match Value::deserialize(deserializer)? {
            Value::Object(fields) => fields,
            _ => return Ok(Self::default()),
        };
        let mut take_id = |names: &[&str]| {
            loose::take_field(&mut fields, names)
                .as_ref()
                .and_then(normalize_id)
        };

        let id = take_id(&["serNo", "id"]);
        let father_id = take_id(&["fatherSerNo", "fatherId"]);
        let mother_id = take_id(&["motherSerNo", "motherId"]);
        let spouse_id = take_id(&["spouseSerNo", "spouseId"]);
        let gender = loose::string_or_empty(loose::take_field(&mut fields, &["gender"]));
        let children_ids =
            loose::id_list(loose::take_field(&mut fields, &["childrenSerNos", "childrenIds"]));

        Ok(Self {
            id,
            gender,
            father_id,
            mother_id,
            spouse_id,
            children_ids,
            extra: fields,
        })
    }
}

impl Person {
    pub fn new(id: PersonId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = gender.to_string();
        self
    }

    pub fn with_father(mut self, id: PersonId) -> Self {
        self.father_id = Some(id);
        self
    }

    pub fn with_mother(mut self, id: PersonId) -> Self {
        self.mother_id = Some(id);
        self
    }

    pub fn with_spouse(mut self, id: PersonId) -> Self {
        self.spouse_id = Some(id);
        self
    }

    pub fn with_children(mut self, ids: &[PersonId]) -> Self {
        self.children_ids = ids.to_vec();
        self
    }

    /// Best-effort display name from the carried-through fields.
    ///
    /// Top-level names win; member exports that keep names under
    /// `personalDetails` fall back to its first, middle and last names.
    pub fn display_name(&self) -> Option<String> {
        for key in ["fullName", "name"] {
            if let Some(name) = non_blank(self.extra.get(key)) {
                return Some(name.to_string());
            }
        }
        joined_name(&self.extra, &["firstName", "lastName"]).or_else(|| {
            match self.extra.get("personalDetails") {
                Some(Value::Object(details)) => {
                    joined_name(details, &["firstName", "middleName", "lastName"])
                }
                _ => None,
            }
        })
    }
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim()),
        _ => None,
    }
}

fn joined_name(fields: &Map<String, Value>, parts: &[&str]) -> Option<String> {
    let parts: Vec<&str> = parts
        .iter()
        .filter_map(|key| non_blank(fields.get(*key)))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Localization record for one relation key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationRule {
    #[serde(
        rename = "relationEnglish",
        alias = "relationKey",
        default,
        deserialize_with = "loose::deserialize_string"
    )]
    pub relation_key: String,
    #[serde(
        rename = "relationMarathi",
        alias = "translatedLabel",
        default,
        deserialize_with = "loose::deserialize_string"
    )]
    pub translated_label: String,
    #[serde(
        rename = "reverseEnglish",
        alias = "reverseKey",
        default,
        deserialize_with = "loose::deserialize_string"
    )]
    pub reverse_key: String,
    #[serde(
        rename = "reverseMarathi",
        alias = "reverseTranslatedLabel",
        default,
        deserialize_with = "loose::deserialize_string"
    )]
    pub reverse_translated_label: String,
}

/// One derived relation between the queried person and `related`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationResult {
    #[serde(rename = "relationEnglish")]
    pub relation_key: String,
    /// Empty when no rule is registered for the key.
    #[serde(rename = "relationMarathi")]
    pub translated_label: String,
    pub related: Person,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_from_stored_document() {
        let person: Person = serde_json::from_value(json!({
            "serNo": "12",
            "gender": "Male",
            "fatherSerNo": 3,
            "motherSerNo": "",
            "spouseSerNo": null,
            "childrenSerNos": [20, "21", null, "x"],
            "fullName": "Ravi Kulkarni",
            "_id": "abc"
        }))
        .unwrap();

        assert_eq!(person.id, Some(12));
        assert_eq!(person.gender, "Male");
        assert_eq!(person.father_id, Some(3));
        assert_eq!(person.mother_id, None);
        assert_eq!(person.spouse_id, None);
        assert_eq!(person.children_ids, vec![20, 21]);
        assert_eq!(person.extra.get("_id"), Some(&json!("abc")));
        assert_eq!(person.display_name().as_deref(), Some("Ravi Kulkarni"));
    }

    #[test]
    fn test_person_accepts_generic_field_names() {
        let person: Person = serde_json::from_value(json!({
            "id": 5,
            "fatherId": 2,
            "motherId": 4,
            "spouseId": 9,
            "childrenIds": [7]
        }))
        .unwrap();

        assert_eq!(person.id, Some(5));
        assert_eq!(person.father_id, Some(2));
        assert_eq!(person.mother_id, Some(4));
        assert_eq!(person.spouse_id, Some(9));
        assert_eq!(person.children_ids, vec![7]);
        assert_eq!(person.gender, "");
    }

    #[test]
    fn test_person_lenient_fields() {
        let person: Person = serde_json::from_value(json!({
            "serNo": null,
            "gender": null,
            "childrenSerNos": "not a list"
        }))
        .unwrap();

        assert_eq!(person.id, None);
        assert_eq!(person.gender, "");
        assert!(person.children_ids.is_empty());
    }

    #[test]
    fn test_person_serializes_stored_names() {
        let mut person = Person::new(1).with_gender("Female").with_children(&[2]);
        person.extra.insert("firstName".to_string(), json!("Asha"));
        let value = serde_json::to_value(&person).unwrap();

        assert_eq!(value["serNo"], json!(1));
        assert_eq!(value["childrenSerNos"], json!([2]));
        assert_eq!(value["firstName"], json!("Asha"));
        assert_eq!(value["fatherSerNo"], Value::Null);
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut person = Person::new(1);
        assert_eq!(person.display_name(), None);

        person.extra.insert("firstName".to_string(), json!("Asha"));
        assert_eq!(person.display_name().as_deref(), Some("Asha"));

        person.extra.insert("lastName".to_string(), json!("Joshi"));
        assert_eq!(person.display_name().as_deref(), Some("Asha Joshi"));
    }

    #[test]
    fn test_display_name_from_personal_details() {
        let person: Person = serde_json::from_value(json!({
            "serNo": 8,
            "personalDetails": {
                "firstName": "Sunita",
                "middleName": "Ramesh",
                "lastName": " Patil ",
                "gender": "Female"
            }
        }))
        .unwrap();
        assert_eq!(person.display_name().as_deref(), Some("Sunita Ramesh Patil"));

        let mut person = person;
        person.extra.insert("firstName".to_string(), json!("Sunu"));
        assert_eq!(person.display_name().as_deref(), Some("Sunu"));

        let person: Person = serde_json::from_value(json!({
            "serNo": 9,
            "personalDetails": {"firstName": "", "lastName": null}
        }))
        .unwrap();
        assert_eq!(person.display_name(), None);
    }

    #[test]
    fn test_stored_id_wins_over_generic_id() {
        let person: Person = serde_json::from_value(json!({
            "serNo": 1,
            "id": "64ab12cd",
            "fatherSerNo": "3",
            "fatherId": 99,
            "gender": "Male"
        }))
        .unwrap();

        assert_eq!(person.id, Some(1));
        assert_eq!(person.father_id, Some(3));
        assert_eq!(person.extra.get("id"), Some(&json!("64ab12cd")));
        assert_eq!(person.extra.get("fatherId"), Some(&json!(99)));
    }

    #[test]
    fn test_non_object_record_has_no_id() {
        let person: Person = serde_json::from_value(json!("not a member")).unwrap();
        assert_eq!(person, Person::default());
    }

    #[test]
    fn test_rule_defaults_missing_fields() {
        let rule: RelationRule = serde_json::from_value(json!({
            "relationEnglish": "Father",
            "relationMarathi": "Baba"
        }))
        .unwrap();

        assert_eq!(rule.relation_key, "Father");
        assert_eq!(rule.translated_label, "Baba");
        assert_eq!(rule.reverse_key, "");
        assert_eq!(rule.reverse_translated_label, "");
    }

    #[test]
    fn test_relation_result_wire_names() {
        let result = RelationResult {
            relation_key: "Father".to_string(),
            translated_label: String::new(),
            related: Person::new(2),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["relationEnglish"], json!("Father"));
        assert_eq!(value["relationMarathi"], json!(""));
        assert_eq!(value["related"]["serNo"], json!(2));
    }
}
