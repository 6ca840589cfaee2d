use crate::models::entries::QaEntry;

/// Common application questions offered for quick-add.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "Why do you want to work here?",
    "What is your greatest strength?",
    "What is your greatest weakness?",
    "Tell me about yourself.",
    "Where do you see yourself in 5 years?",
    "Why are you leaving your current role?",
    "What salary range are you looking for?",
    "Are you authorized to work in this country?",
    "What is your availability / earliest start date?",
    "Do you require visa sponsorship?",
];

/// Suggestions not yet used verbatim as a question.
pub fn remaining_suggestions(qas: &[QaEntry]) -> Vec<&'static str> {
    SUGGESTED_QUESTIONS
        .iter()
        .copied()
        .filter(|s| {
            !qas
                .iter()
                .any(|qa| !qa.question.is_empty() && qa.question == *s)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entries::EntryId;

    fn qa(question: &str) -> QaEntry {
        QaEntry {
            id: EntryId(1),
            question: question.to_string(),
            answer: String::new(),
        }
    }

    #[test]
    fn test_all_offered_when_empty() {
        assert_eq!(remaining_suggestions(&[]).len(), SUGGESTED_QUESTIONS.len());
    }

    #[test]
    fn test_used_question_not_reoffered() {
        let qas = vec![qa("Tell me about yourself."), qa("")];
        let remaining = remaining_suggestions(&qas);
        assert_eq!(remaining.len(), SUGGESTED_QUESTIONS.len() - 1);
        assert!(!remaining.contains(&"Tell me about yourself."));
    }

    #[test]
    fn test_near_match_still_offered() {
        let qas = vec![qa("tell me about yourself")];
        assert_eq!(remaining_suggestions(&qas).len(), SUGGESTED_QUESTIONS.len());
    }
}
