use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key of a repeatable entry. Zero is never generated and marks an
/// entry whose id was missing from an imported file. Ids above
/// [`EntryId::MAX`] are treated the same way.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    /// Largest integer a browser-produced export can hold exactly (2^53 - 1).
    pub const MAX: EntryId = EntryId(9_007_199_254_740_991);

    pub fn is_assigned(&self) -> bool {
        self.0 != 0 && *self <= Self::MAX
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: EntryId,
    pub company: String,
    pub title: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, the range renders as ongoing; `end_date` is kept as typed.
    pub current: bool,
    pub description: String,
}

/// One field of a [`WorkEntry`] together with its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum WorkField {
    Company(String),
    Title(String),
    Location(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
}

impl WorkEntry {
    pub fn apply(&mut self, field: WorkField) {
        match field {
            WorkField::Company(v) => self.company = v,
            WorkField::Title(v) => self.title = v,
            WorkField::Location(v) => self.location = v,
            WorkField::StartDate(v) => self.start_date = v,
            WorkField::EndDate(v) => self.end_date = v,
            WorkField::Current(v) => self.current = v,
            WorkField::Description(v) => self.description = v,
        }
    }

    pub fn text_fields(&self) -> [&str; 6] {
        [
            &self.company,
            &self.title,
            &self.location,
            &self.start_date,
            &self.end_date,
            &self.description,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum EducationField {
    School(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Gpa(String),
    Notes(String),
}

impl EducationEntry {
    pub fn apply(&mut self, field: EducationField) {
        match field {
            EducationField::School(v) => self.school = v,
            EducationField::Degree(v) => self.degree = v,
            EducationField::Field(v) => self.field = v,
            EducationField::StartDate(v) => self.start_date = v,
            EducationField::EndDate(v) => self.end_date = v,
            EducationField::Gpa(v) => self.gpa = v,
            EducationField::Notes(v) => self.notes = v,
        }
    }

    pub fn text_fields(&self) -> [&str; 7] {
        [
            &self.school,
            &self.degree,
            &self.field,
            &self.start_date,
            &self.end_date,
            &self.gpa,
            &self.notes,
        ]
    }
}

/// A prepared answer to a common application question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QaEntry {
    pub id: EntryId,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum QaField {
    Question(String),
    Answer(String),
}

impl QaEntry {
    pub fn apply(&mut self, field: QaField) {
        match field {
            QaField::Question(v) => self.question = v,
            QaField::Answer(v) => self.answer = v,
        }
    }

    pub fn text_fields(&self) -> [&str; 2] {
        [&self.question, &self.answer]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_work_entry_is_not_current() {
        let entry = WorkEntry::default();
        assert!(!entry.current);
        assert!(entry.text_fields().iter().all(|f| f.is_empty()));
        assert!(!entry.id.is_assigned());
    }

    #[test]
    fn test_out_of_range_id_is_unassigned() {
        assert!(EntryId::MAX.is_assigned());
        assert!(!EntryId(EntryId::MAX.0 + 1).is_assigned());
        assert!(!EntryId(u64::MAX).is_assigned());
    }

    #[test]
    fn test_field_patch_wire_shape() {
        let patch: WorkField =
            serde_json::from_str(r#"{"field":"startDate","value":"Jan 2023"}"#).unwrap();
        assert_eq!(patch, WorkField::StartDate("Jan 2023".to_string()));

        let patch: WorkField = serde_json::from_str(r#"{"field":"current","value":true}"#).unwrap();
        assert_eq!(patch, WorkField::Current(true));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<QaField>(r#"{"field":"id","value":"7"}"#).is_err());
    }

    #[test]
    fn test_entry_uses_export_field_names() {
        let entry = EducationEntry {
            id: EntryId(1718000000000),
            start_date: "Sep 2019".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 1718000000000u64);
        assert_eq!(json["startDate"], "Sep 2019");
        assert_eq!(json["gpa"], "");
    }
}
