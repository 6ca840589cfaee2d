use serde::Serialize;

use crate::models::entries::EntryId;
use crate::models::profile::ProfileKey;
use crate::profile::session::Session;

/// Everything in the session that contains the query text.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHits {
    pub query: String,
    pub profile_fields: Vec<ProfileKey>,
    pub jobs: Vec<EntryId>,
    pub education: Vec<EntryId>,
    pub skills: Vec<String>,
    pub qas: Vec<EntryId>,
}

impl SearchHits {
    pub fn total(&self) -> usize {
        self.profile_fields.len()
            + self.jobs.len()
            + self.education.len()
            + self.skills.len()
            + self.qas.len()
    }
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle_lower)
}

/// Case-insensitive substring search over every text field. A blank query
/// matches nothing.
pub fn search(session: &Session, query: &str) -> SearchHits {
    let trimmed = query.trim();
    let mut hits = SearchHits {
        query: trimmed.to_string(),
        ..Default::default()
    };
    if trimmed.is_empty() {
        return hits;
    }
    let needle = trimmed.to_lowercase();

    let profile = session.profile();
    hits.profile_fields = ProfileKey::ALL
        .into_iter()
        .filter(|key| contains_folded(profile.get(*key), &needle))
        .collect();

    hits.jobs = session
        .jobs()
        .iter()
        .filter(|e| e.text_fields().iter().any(|f| contains_folded(f, &needle)))
        .map(|e| e.id)
        .collect();

    hits.education = session
        .education()
        .iter()
        .filter(|e| e.text_fields().iter().any(|f| contains_folded(f, &needle)))
        .map(|e| e.id)
        .collect();

    hits.skills = session
        .skills()
        .iter()
        .filter(|s| contains_folded(s, &needle))
        .cloned()
        .collect();

    hits.qas = session
        .qas()
        .iter()
        .filter(|e| e.text_fields().iter().any(|f| contains_folded(f, &needle)))
        .map(|e| e.id)
        .collect();

    hits
}
