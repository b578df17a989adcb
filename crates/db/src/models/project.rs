//! Project entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use folio_core::validation::not_blank;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image: String,
    pub tags: Vec<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub featured: bool,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Unknown fields (including client-supplied `id` or timestamps) are ignored;
/// the store assigns those.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub long_description: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
}

/// An explicit `null` falls back to the field's default, same as omitting it.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// DTO for updating an existing project. All fields are optional.
///
/// Absent and `null` fields both leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    pub long_description: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub demo_link: Option<String>,
    pub code_link: Option<String>,
    pub featured: Option<bool>,
    pub challenges: Option<String>,
    pub solutions: Option<String>,
}

impl UpdateProject {
    /// Apply every supplied field onto `project`, leaving the rest as-is.
    ///
    /// Timestamps are the caller's concern.
    pub fn merge_into(&self, project: &mut Project) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }
        fn set_opt<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                *slot = value.clone();
            }
        }

        set(&mut project.title, &self.title);
        set(&mut project.description, &self.description);
        set_opt(&mut project.long_description, &self.long_description);
        set(&mut project.image, &self.image);
        set(&mut project.tags, &self.tags);
        set_opt(&mut project.demo_link, &self.demo_link);
        set_opt(&mut project.code_link, &self.code_link);
        set(&mut project.featured, &self.featured);
        set_opt(&mut project.challenges, &self.challenges);
        set_opt(&mut project.solutions, &self.solutions);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;

    fn sample() -> Project {
        let now = Utc::now();
        Project {
            id: Uuid::new_v4(),
            title: "Old".into(),
            description: "Desc".into(),
            long_description: Some("Long".into()),
            image: "http://img".into(),
            tags: vec!["rust".into()],
            demo_link: None,
            code_link: Some("http://code".into()),
            featured: false,
            challenges: None,
            solutions: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn create_defaults_tags_and_featured() {
        let input: CreateProject = serde_json::from_value(json!({
            "title": "A",
            "description": "B",
            "image": "http://x"
        }))
        .unwrap();

        assert!(input.tags.is_empty());
        assert!(!input.featured);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn create_null_tags_and_featured_use_defaults() {
        let input: CreateProject = serde_json::from_value(json!({
            "title": "A",
            "description": "B",
            "image": "http://x",
            "tags": null,
            "featured": null
        }))
        .unwrap();

        assert!(input.tags.is_empty());
        assert!(!input.featured);
    }

    #[test]
    fn create_reads_camel_case_fields() {
        let input: CreateProject = serde_json::from_value(json!({
            "title": "A",
            "description": "B",
            "image": "http://x",
            "longDescription": "More",
            "demoLink": "http://demo",
            "codeLink": "http://code"
        }))
        .unwrap();

        assert_eq!(input.long_description.as_deref(), Some("More"));
        assert_eq!(input.demo_link.as_deref(), Some("http://demo"));
        assert_eq!(input.code_link.as_deref(), Some("http://code"));
    }

    #[test]
    fn create_rejects_blank_required_fields() {
        let input: CreateProject = serde_json::from_value(json!({
            "title": "  ",
            "description": "B",
            "image": ""
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("image"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn create_missing_required_field_fails_to_deserialize() {
        let result: Result<CreateProject, _> = serde_json::from_value(json!({
            "title": "A",
            "image": "http://x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn update_skips_validation_of_absent_fields() {
        let input = UpdateProject {
            featured: Some(true),
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_rejects_blank_supplied_title() {
        let input = UpdateProject {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn merge_only_touches_supplied_fields() {
        let mut project = sample();
        let before = project.clone();

        UpdateProject {
            title: Some("New".into()),
            ..Default::default()
        }
        .merge_into(&mut project);

        assert_eq!(project.title, "New");
        assert_eq!(project.description, before.description);
        assert_eq!(project.long_description, before.long_description);
        assert_eq!(project.image, before.image);
        assert_eq!(project.tags, before.tags);
        assert_eq!(project.code_link, before.code_link);
    }

    #[test]
    fn null_optional_field_keeps_prior_value() {
        let mut project = sample();
        let input: UpdateProject =
            serde_json::from_value(json!({ "longDescription": null, "featured": true })).unwrap();

        input.merge_into(&mut project);

        assert_eq!(project.long_description.as_deref(), Some("Long"));
        assert!(project.featured);
    }

    #[test]
    fn project_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("longDescription").is_some());
        assert!(value.get("codeLink").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("long_description").is_none());
    }
}
