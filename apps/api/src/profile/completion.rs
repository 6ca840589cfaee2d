use serde::{Deserialize, Serialize};

use crate::models::entries::{EducationEntry, QaEntry, WorkEntry};
use crate::models::profile::Profile;

pub const TOTAL_SECTIONS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionReport {
    pub completed: usize,
    pub total: usize,
    pub incomplete_sections: Vec<String>,
}

fn section_flags(
    profile: &Profile,
    jobs: &[WorkEntry],
    education: &[EducationEntry],
    skills: &[String],
    qas: &[QaEntry],
) -> [(&'static str, bool); TOTAL_SECTIONS] {
    [
        ("personal", profile.has_name()),
        ("work", !jobs.is_empty()),
        ("education", !education.is_empty()),
        ("skills", !skills.is_empty()),
        ("qa", !qas.is_empty()),
    ]
}

/// Number of sections (0-5) holding any content. The personal section counts
/// once a first or last name is set.
pub fn completion_count(
    profile: &Profile,
    jobs: &[WorkEntry],
    education: &[EducationEntry],
    skills: &[String],
    qas: &[QaEntry],
) -> usize {
    section_flags(profile, jobs, education, skills, qas)
        .iter()
        .filter(|(_, done)| *done)
        .count()
}

pub fn compute_completion_report(
    profile: &Profile,
    jobs: &[WorkEntry],
    education: &[EducationEntry],
    skills: &[String],
    qas: &[QaEntry],
) -> CompletionReport {
    let flags = section_flags(profile, jobs, education, skills, qas);
    CompletionReport {
        completed: completion_count(profile, jobs, education, skills, qas),
        total: TOTAL_SECTIONS,
        incomplete_sections: flags
            .iter()
            .filter(|(_, done)| !*done)
            .map(|(name, _)| name.to_string())
            .collect(),
    }
}
