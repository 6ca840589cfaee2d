use serde::Serialize;
use tracing::{debug, info};

use crate::models::entries::{
    EducationEntry, EducationField, EntryId, QaEntry, QaField, WorkEntry, WorkField,
};
use crate::models::profile::{Profile, ProfileKey};
use crate::models::snapshot::{Snapshot, SnapshotImport};
use crate::profile::completion::{compute_completion_report, CompletionReport};
use crate::profile::ids::IdStrategy;
use crate::profile::profile_store::ProfileStore;
use crate::profile::section_store::SectionStore;
use crate::profile::skills::SkillSet;
use crate::profile::snapshot::{export_snapshot, parse_snapshot, SnapshotError};

/// All profile state for one editing session. Starts empty; nothing is kept
/// once it is dropped unless it was exported.
#[derive(Debug)]
pub struct Session {
    profile: ProfileStore,
    jobs: SectionStore<WorkEntry>,
    education: SectionStore<EducationEntry>,
    skills: SkillSet,
    qas: SectionStore<QaEntry>,
}

/// Sections replaced by an import, in file order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub applied: Vec<&'static str>,
}

impl Session {
    pub fn new(ids: IdStrategy) -> Self {
        Self {
            profile: ProfileStore::default(),
            jobs: SectionStore::new(ids.generator()),
            education: SectionStore::new(ids.generator()),
            skills: SkillSet::default(),
            qas: SectionStore::new(ids.generator()),
        }
    }

    // ── reads ──────────────────────────────────────────────────────────────

    pub fn profile(&self) -> &Profile {
        self.profile.get()
    }

    pub fn jobs(&self) -> &[WorkEntry] {
        self.jobs.list()
    }

    pub fn job(&self, id: EntryId) -> Option<&WorkEntry> {
        self.jobs.get(id)
    }

    pub fn education(&self) -> &[EducationEntry] {
        self.education.list()
    }

    pub fn education_entry(&self, id: EntryId) -> Option<&EducationEntry> {
        self.education.get(id)
    }

    pub fn skills(&self) -> &[String] {
        self.skills.list()
    }

    pub fn qas(&self) -> &[QaEntry] {
        self.qas.list()
    }

    pub fn qa(&self, id: EntryId) -> Option<&QaEntry> {
        self.qas.get(id)
    }

    // ── profile ────────────────────────────────────────────────────────────

    pub fn set_profile_field(&mut self, key: ProfileKey, value: impl Into<String>) {
        self.profile.set_field(key, value);
    }

    // ── work ───────────────────────────────────────────────────────────────

    pub fn add_job(&mut self, initial: impl IntoIterator<Item = WorkField>) -> EntryId {
        self.jobs.add(initial)
    }

    pub fn update_job(&mut self, id: EntryId, field: WorkField) -> bool {
        self.jobs.update(id, field)
    }

    pub fn remove_job(&mut self, id: EntryId) -> bool {
        self.jobs.remove(id)
    }

    // ── education ──────────────────────────────────────────────────────────

    pub fn add_education(&mut self, initial: impl IntoIterator<Item = EducationField>) -> EntryId {
        self.education.add(initial)
    }

    pub fn update_education(&mut self, id: EntryId, field: EducationField) -> bool {
        self.education.update(id, field)
    }

    pub fn remove_education(&mut self, id: EntryId) -> bool {
        self.education.remove(id)
    }

    // ── skills ─────────────────────────────────────────────────────────────

    pub fn add_skill(&mut self, text: &str) -> bool {
        self.skills.add(text)
    }

    pub fn remove_skill(&mut self, text: &str) -> bool {
        self.skills.remove(text)
    }

    // ── q&a ────────────────────────────────────────────────────────────────

    pub fn add_qa(&mut self, initial: impl IntoIterator<Item = QaField>) -> EntryId {
        self.qas.add(initial)
    }

    pub fn update_qa(&mut self, id: EntryId, field: QaField) -> bool {
        self.qas.update(id, field)
    }

    pub fn remove_qa(&mut self, id: EntryId) -> bool {
        self.qas.remove(id)
    }

    // ── derived ────────────────────────────────────────────────────────────

    pub fn completion_report(&self) -> CompletionReport {
        compute_completion_report(
            self.profile(),
            self.jobs(),
            self.education(),
            self.skills(),
            self.qas(),
        )
    }

    // ── export / import ────────────────────────────────────────────────────

    pub fn export(&self) -> Snapshot {
        export_snapshot(
            self.profile(),
            self.jobs(),
            self.education(),
            self.skills(),
            self.qas(),
        )
    }

    /// Replaces every section present in `import`; absent sections are kept.
    pub fn import(&mut self, import: SnapshotImport) -> ImportSummary {
        if import.is_empty() {
            debug!("snapshot carried no known sections, nothing to apply");
        }
        let mut applied = Vec::new();
        if let Some(profile) = import.profile {
            self.profile.replace(profile);
            applied.push("profile");
        }
        if let Some(jobs) = import.jobs {
            self.jobs.replace(jobs);
            applied.push("jobs");
        }
        if let Some(education) = import.education {
            self.education.replace(education);
            applied.push("education");
        }
        if let Some(skills) = import.skills {
            self.skills.replace(skills);
            applied.push("skills");
        }
        if let Some(qas) = import.qas {
            self.qas.replace(qas);
            applied.push("qas");
        }
        info!(sections = ?applied, "snapshot imported");
        ImportSummary { applied }
    }

    /// Parses then applies raw file content. On error the session is unchanged.
    pub fn import_str(&mut self, raw: &str) -> Result<ImportSummary, SnapshotError> {
        let import = parse_snapshot(raw)?;
        Ok(self.import(import))
    }
}
