use tracing::debug;

/// Insertion-ordered set of skill names. Matching is exact and case-sensitive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    /// Trims `text` and appends it unless blank or already present.
    /// Returns whether the set grew.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        if self.contains(trimmed) {
            debug!(skill = trimmed, "skill already present");
            return false;
        }
        self.skills.push(trimmed.to_string());
        true
    }

    pub fn remove(&mut self, text: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != text);
        self.skills.len() != before
    }

    pub fn contains(&self, text: &str) -> bool {
        self.skills.iter().any(|s| s == text)
    }

    pub fn list(&self) -> &[String] {
        &self.skills
    }

    /// Clears the set and re-adds `skills` under the same rules as [`SkillSet::add`].
    pub fn replace(&mut self, skills: Vec<String>) {
        self.skills.clear();
        for skill in &skills {
            self.add(skill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_dedupe() {
        let mut set = SkillSet::default();
        assert!(set.add("  Go  "));
        assert!(!set.add("Go"));
        assert_eq!(set.list(), &["Go".to_string()]);
    }

    #[test]
    fn test_blank_ignored() {
        let mut set = SkillSet::default();
        assert!(!set.add(""));
        assert!(!set.add("   \t"));
        assert!(set.list().is_empty());
    }

    #[test]
    fn test_case_sensitive() {
        let mut set = SkillSet::default();
        set.add("rust");
        set.add("Rust");
        assert_eq!(set.list().len(), 2);
    }

    #[test]
    fn test_remove_exact_match_only() {
        let mut set = SkillSet::default();
        set.add("SQL");
        set.add("Python");
        assert!(!set.remove("sql"));
        assert!(set.remove("SQL"));
        assert_eq!(set.list(), &["Python".to_string()]);
    }

    #[test]
    fn test_replace_keeps_order() {
        let mut set = SkillSet::default();
        set.add("old");
        set.replace(vec!["b".into(), "a".into(), "b".into(), " ".into()]);
        assert_eq!(set.list(), &["b".to_string(), "a".to_string()]);
    }
}
