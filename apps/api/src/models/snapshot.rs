use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::models::entries::{EducationEntry, QaEntry, WorkEntry};
use crate::models::profile::Profile;

/// Suggested filename for a downloaded export.
pub const EXPORT_FILENAME: &str = "job-profile.json";

/// Complete exportable state at one instant. Detached from the live stores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub profile: Profile,
    pub jobs: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub qas: Vec<QaEntry>,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub exported_at: DateTime<Utc>,
}

/// Incoming snapshot. Each top-level section is optional; `None` (absent or
/// `null`) leaves the live store untouched, `Some(vec![])` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotImport {
    pub profile: Option<Profile>,
    pub jobs: Option<Vec<WorkEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Vec<String>>,
    pub qas: Option<Vec<QaEntry>>,
}

impl SnapshotImport {
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.jobs.is_none()
            && self.education.is_none()
            && self.skills.is_none()
            && self.qas.is_none()
    }
}

fn serialize_iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
