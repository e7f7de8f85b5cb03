//! Sport validation: required and unique `name`.

use crate::error::AppError;
use crate::model::SportDraft;
use crate::repository::SportRepository;
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const NAME_REQUIRED: &str = "Le nom du sport est obligatoire";
pub const NAME_TAKEN: &str = "Ce nom de sport est déjà pris";

/// One failed rule on one property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub property_path: String,
    pub title: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,
}

impl Violation {
    pub fn name_required() -> Self {
        Violation {
            property_path: "name".into(),
            title: NAME_REQUIRED.into(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn name_taken(name: &str) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert("{{ value }}".to_string(), format!("\"{}\"", name));
        Violation {
            property_path: "name".into(),
            title: NAME_TAKEN.into(),
            parameters,
        }
    }

    /// `property: title`, as used in the `detail` line.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.property_path, self.title)
    }
}

pub struct SportValidator;

impl SportValidator {
    /// Check a draft against the stored sports. Returns the accepted name.
    ///
    /// Uniqueness ignores the draft's own row, so saving a sport under its
    /// current name passes.
    pub async fn validate<'a>(
        repo: &dyn SportRepository,
        draft: &'a SportDraft,
    ) -> Result<&'a str, AppError> {
        let name = match draft.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::Validation(vec![Violation::name_required()])),
        };
        if let Some(existing) = repo.find_by_name(name).await? {
            if Some(existing.id) != draft.id {
                return Err(AppError::Validation(vec![Violation::name_taken(name)]));
            }
        }
        Ok(name)
    }
}
