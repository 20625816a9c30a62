//! The unit of storage: a JSON object plus the fields the store owns.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Key under which a document's identifier appears in API payloads.
pub const ID_FIELD: &str = "_id";
pub const CREATED_AT_FIELD: &str = "created_at";
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// JSON object body of a document.
pub type Body = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: Body,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredDocument {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// The document as clients see it: the body with `_id` and timestamps
    /// merged in. Store-owned keys win over body keys of the same name.
    pub fn to_json(&self) -> Value {
        let mut object = self.body.clone();
        object.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        object.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(self.created_at.to_rfc3339()),
        );
        object.insert(
            UPDATED_AT_FIELD.to_string(),
            Value::String(self.updated_at.to_rfc3339()),
        );
        Value::Object(object)
    }

    /// Decodes the client view of this document into a typed record.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json())
    }
}

/// Removes keys the store owns so a caller-supplied body cannot overwrite them.
pub(crate) fn strip_reserved(mut body: Body) -> Body {
    body.remove(ID_FIELD);
    body.remove(CREATED_AT_FIELD);
    body.remove(UPDATED_AT_FIELD);
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Subject {
        #[serde(rename = "_id")]
        id: Uuid,
        subject_name: String,
        created_at: DateTime<Utc>,
    }

    fn document(body: Value) -> StoredDocument {
        let now = Utc::now();
        StoredDocument {
            id: Uuid::new_v4(),
            body: body.as_object().cloned().unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_to_json_merges_store_fields() {
        let doc = document(json!({"subject_name": "Math"}));
        let value = doc.to_json();

        assert_eq!(value["_id"], doc.id.to_string());
        assert_eq!(value["subject_name"], "Math");
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn test_decode_typed_record() {
        let doc = document(json!({"subject_name": "Math"}));
        let subject: Subject = doc.decode().unwrap();

        assert_eq!(subject.id, doc.id);
        assert_eq!(subject.subject_name, "Math");
        assert_eq!(subject.created_at, doc.created_at);
    }

    #[test]
    fn test_strip_reserved() {
        let body = json!({"_id": "x", "created_at": "y", "updated_at": "z", "title": "t"});
        let stripped = strip_reserved(body.as_object().cloned().unwrap());
        assert_eq!(stripped.len(), 1);
        assert_eq!(stripped["title"], "t");
    }
}
