use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A record of the remote pet collection.
///
/// `name` and `status` are optional because the service accepts and returns
/// partial records; absent fields are left out of request bodies.
/// Responses are read with [`Pet::from_json`], which accepts whatever shape
/// the service stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Pet {
    pub fn new(id: i64, name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    /// The partial record submitted by an adoption.
    pub fn adoption(id: i64) -> Self {
        Self {
            id,
            name: None,
            status: Some(PetStatus::Sold.as_str().to_string()),
        }
    }

    /// Reads a record as returned by the service. `None` when the record has
    /// no id that fits an `i64`; other fields of unexpected types are kept as
    /// their JSON text.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let id = match value.get("id")? {
            serde_json::Value::Number(n) => n.as_i64()?,
            serde_json::Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };

        Some(Self {
            id,
            name: text_field(value, "name"),
            status: text_field(value, "status"),
        })
    }

    pub fn name_or_blank(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn status_or_blank(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

fn text_field(value: &serde_json::Value, field: &str) -> Option<String> {
    match value.get(field)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(PetStatus::Available),
            "pending" => Ok(PetStatus::Pending),
            "sold" | "adopted" => Ok(PetStatus::Sold),
            other => Err(format!(
                "unknown status '{}', expected available, pending or sold",
                other
            )),
        }
    }
}

/// Fields of the "add a pet" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPetInput {
    pub name: String,
    pub status: String,
}

/// Fields of the edit form, kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFields {
    pub id: String,
    pub name: String,
    pub status: String,
}

impl EditFields {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty() && self.status.is_empty()
    }
}

impl From<&Pet> for EditFields {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id.to_string(),
            name: pet.name_or_blank().to_string(),
            status: pet.status_or_blank().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdoptInput {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupInput {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_body() {
        let pet = Pet::new(5, "Rex", "available");
        assert_eq!(
            serde_json::to_value(&pet).unwrap(),
            json!({"id": 5, "name": "Rex", "status": "available"})
        );
    }

    #[test]
    fn test_adoption_body_omits_name() {
        let body = serde_json::to_value(Pet::adoption(7)).unwrap();
        assert_eq!(body, json!({"id": 7, "status": "sold"}));
    }

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let pet = Pet::from_json(&json!({
            "id": 12,
            "category": {"id": 0, "name": "dogs"},
            "name": "doggie",
            "photoUrls": [],
            "tags": [],
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(pet, Pet::new(12, "doggie", "pending"));
    }

    #[test]
    fn test_from_json_partial_record() {
        let pet = Pet::from_json(&json!({"id": 3, "name": null})).unwrap();
        assert_eq!(pet.name, None);
        assert_eq!(pet.name_or_blank(), "");
        assert_eq!(pet.status_or_blank(), "");
    }

    #[test]
    fn test_from_json_keeps_odd_field_types() {
        let pet = Pet::from_json(&json!({"id": "8", "name": 42, "status": ["sold"]})).unwrap();
        assert_eq!(pet.id, 8);
        assert_eq!(pet.name_or_blank(), "42");
        assert_eq!(pet.status_or_blank(), r#"["sold"]"#);
    }

    #[test]
    fn test_from_json_without_usable_id() {
        assert_eq!(Pet::from_json(&json!({"name": "noid"})), None);
        assert_eq!(Pet::from_json(&json!({"id": null})), None);
        assert_eq!(Pet::from_json(&json!({"id": 9223372036854775808u64})), None);
        assert_eq!(Pet::from_json(&json!({"id": 1.5})), None);
        assert_eq!(Pet::from_json(&json!("doggie")), None);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("available".parse::<PetStatus>(), Ok(PetStatus::Available));
        assert_eq!(" Sold ".parse::<PetStatus>(), Ok(PetStatus::Sold));
        assert_eq!("adopted".parse::<PetStatus>(), Ok(PetStatus::Sold));
        assert!("lost".parse::<PetStatus>().is_err());
        assert_eq!(PetStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_edit_fields_from_pet() {
        let fields = EditFields::from(&Pet::new(9, "Tom", "sold"));
        assert_eq!(fields.id, "9");
        assert_eq!(fields.name, "Tom");
        assert_eq!(fields.status, "sold");
        assert!(!fields.is_empty());
        assert!(EditFields::default().is_empty());
    }
}
