//! Sport entity and the request payload that creates or overlays it.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A persisted sport. `id` is assigned by the store on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Sport {
    pub id: i64,
    pub name: String,
}

/// Values for a sport that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSport {
    pub name: String,
}

/// Request body for create and update.
///
/// `name` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(None)`) so an update only touches fields the client sent.
/// Unknown keys, including `id`, are ignored.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct SportPayload {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Nouveau Sport")]
    pub name: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A sport as it would look after a create or update, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SportDraft {
    /// Row id when the draft overlays an existing sport.
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl SportDraft {
    /// Draft for a new sport built from the request payload.
    pub fn from_payload(payload: SportPayload) -> Self {
        SportDraft {
            id: None,
            name: payload.name.flatten(),
        }
    }

    /// Draft for an existing sport with the payload's fields applied on top.
    pub fn overlay(current: &Sport, payload: SportPayload) -> Self {
        let name = match payload.name {
            Some(name) => name,
            None => Some(current.name.clone()),
        };
        SportDraft {
            id: Some(current.id),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> SportPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn payload_distinguishes_absent_and_null_name() {
        assert_eq!(payload("{}").name, None);
        assert_eq!(payload(r#"{"name": null}"#).name, Some(None));
        assert_eq!(payload(r#"{"name": "Rugby"}"#).name, Some(Some("Rugby".into())));
    }

    #[test]
    fn payload_ignores_unknown_fields() {
        let p = payload(r#"{"id": 42, "name": "Rugby", "color": "green"}"#);
        assert_eq!(p.name, Some(Some("Rugby".into())));
    }

    #[test]
    fn overlay_keeps_fields_missing_from_payload() {
        let current = Sport { id: 7, name: "Tennis".into() };
        let draft = SportDraft::overlay(&current, payload("{}"));
        assert_eq!(draft, SportDraft { id: Some(7), name: Some("Tennis".into()) });
    }

    #[test]
    fn overlay_applies_explicit_null() {
        let current = Sport { id: 7, name: "Tennis".into() };
        let draft = SportDraft::overlay(&current, payload(r#"{"name": null}"#));
        assert_eq!(draft.name, None);
        assert_eq!(draft.id, Some(7));
    }

    #[test]
    fn sport_serializes_as_id_and_name() {
        let json = serde_json::to_value(Sport { id: 3, name: "Judo".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "name": "Judo"}));
    }
}
