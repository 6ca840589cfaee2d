use chrono::Utc;
use serde_json::Value;
use thiserror::Error;

use crate::models::entries::{EducationEntry, QaEntry, WorkEntry};
use crate::models::profile::Profile;
use crate::models::snapshot::{Snapshot, SnapshotImport};

/// Import content that cannot be applied at all. Any of these leaves the
/// session untouched.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("content is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("expected a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),

    #[error("a section has the wrong shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Copies the current store state into a detached snapshot stamped now.
pub fn export_snapshot(
    profile: &Profile,
    jobs: &[WorkEntry],
    education: &[EducationEntry],
    skills: &[String],
    qas: &[QaEntry],
) -> Snapshot {
    Snapshot {
        profile: profile.clone(),
        jobs: jobs.to_vec(),
        education: education.to_vec(),
        skills: skills.to_vec(),
        qas: qas.to_vec(),
        exported_at: Utc::now(),
    }
}

/// Pretty JSON with two-space indentation, the on-disk export format.
pub fn snapshot_to_json(snapshot: &Snapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Parses raw file content. Nothing is applied here, so a failure can never
/// leave a half-imported session behind.
pub fn parse_snapshot(raw: &str) -> Result<SnapshotImport, SnapshotError> {
    let value: Value = serde_json::from_str(raw).map_err(SnapshotError::Syntax)?;
    if !value.is_object() {
        return Err(SnapshotError::NotAnObject(json_kind(&value)));
    }
    serde_json::from_value(value).map_err(SnapshotError::Shape)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entries::EntryId;

    #[test]
    fn test_not_json_is_syntax_error() {
        assert!(matches!(
            parse_snapshot("definitely not json"),
            Err(SnapshotError::Syntax(_))
        ));
        assert!(matches!(parse_snapshot(""), Err(SnapshotError::Syntax(_))));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            parse_snapshot("[null, null, null, null, null]"),
            Err(SnapshotError::NotAnObject("an array"))
        ));
        assert!(matches!(
            parse_snapshot("42"),
            Err(SnapshotError::NotAnObject(_))
        ));
    }

    #[test]
    fn test_wrong_section_shape_rejected() {
        assert!(matches!(
            parse_snapshot(r#"{"jobs": "three"}"#),
            Err(SnapshotError::Shape(_))
        ));
    }

    #[test]
    fn test_empty_object_is_valid_and_empty() {
        let import = parse_snapshot("{}").unwrap();
        assert!(import.is_empty());
    }

    #[test]
    fn test_browser_export_parses() {
        let raw = r#"{
          "profile": {"firstName": "Jane", "lastName": "Doe", "email": "jane@example.com"},
          "jobs": [{"company": "Acme", "title": "Engineer", "location": "", "startDate": "Jan 2023",
                    "endDate": "", "current": true, "description": "", "id": 1718000000000}],
          "education": [],
          "skills": ["Rust", "SQL"],
          "qas": [{"question": "Why us?", "answer": "Mission.", "id": 1718000000001}],
          "exportedAt": "2024-06-10T08:00:00.000Z"
        }"#;
        let import = parse_snapshot(raw).unwrap();
        assert_eq!(import.profile.unwrap().first_name, "Jane");
        let jobs = import.jobs.unwrap();
        assert_eq!(jobs[0].id, EntryId(1718000000000));
        assert!(jobs[0].current);
        assert_eq!(import.education, Some(vec![]));
        assert_eq!(import.skills.unwrap(), vec!["Rust", "SQL"]);
        assert_eq!(import.qas.unwrap()[0].answer, "Mission.");
    }

    #[test]
    fn test_export_json_has_six_top_level_fields() {
        let snapshot = export_snapshot(&Profile::default(), &[], &[], &["Go".to_string()], &[]);
        let json: Value = serde_json::from_str(&snapshot_to_json(&snapshot).unwrap()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["profile", "jobs", "education", "skills", "qas", "exportedAt"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 6);
        assert_eq!(json["skills"][0], "Go");
    }
}
