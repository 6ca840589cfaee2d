//! Plain-text renderings used by the copy actions.
//!
//! Every function here is pure and total: empty input produces empty (or
//! label-only) text, never an error.

use crate::models::entries::{EducationEntry, QaEntry, WorkEntry};
use crate::models::profile::Profile;

const RANGE_SEPARATOR: &str = " – ";

/// Joins the non-empty lines with `\n`.
fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn labeled(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{label} {value}")
    }
}

/// `start – end`, with `Present` in place of the end when `current`.
/// Empty when there is nothing to show.
fn date_range(start: &str, end: &str, current: bool) -> String {
    let mut out = start.to_string();
    if !start.is_empty() || !end.is_empty() {
        out.push_str(RANGE_SEPARATOR);
    }
    out.push_str(if current { "Present" } else { end });
    out
}

pub fn project_profile(profile: &Profile) -> String {
    let name = format!("{} {}", profile.first_name, profile.last_name);
    let address = [
        profile.address.as_str(),
        profile.city.as_str(),
        profile.state.as_str(),
        profile.zip.as_str(),
        profile.country.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");
    let linkedin = labeled("LinkedIn:", &profile.linkedin);
    let github = labeled("GitHub:", &profile.github);
    let website = labeled("Website:", &profile.website);
    let portfolio = labeled("Portfolio:", &profile.portfolio);

    join_lines([
        name.trim(),
        profile.email.as_str(),
        profile.phone.as_str(),
        address.as_str(),
        linkedin.as_str(),
        github.as_str(),
        website.as_str(),
        portfolio.as_str(),
    ])
}

pub fn project_work_entry(entry: &WorkEntry) -> String {
    let heading = if entry.company.is_empty() {
        entry.title.clone()
    } else {
        format!("{} at {}", entry.title, entry.company)
    };
    let range = date_range(&entry.start_date, &entry.end_date, entry.current);
    join_lines([
        heading.as_str(),
        entry.location.as_str(),
        range.as_str(),
        entry.description.as_str(),
    ])
}

pub fn project_education_entry(entry: &EducationEntry) -> String {
    let heading = if entry.field.is_empty() {
        entry.degree.clone()
    } else {
        format!("{} in {}", entry.degree, entry.field)
    };
    let range = date_range(&entry.start_date, &entry.end_date, false);
    let gpa = labeled("GPA:", &entry.gpa);
    join_lines([
        heading.as_str(),
        entry.school.as_str(),
        range.as_str(),
        gpa.as_str(),
        entry.notes.as_str(),
    ])
}

/// Always two lines, even when the question or answer is blank.
pub fn project_qa_entry(entry: &QaEntry) -> String {
    format!("Q: {}\nA: {}", entry.question, entry.answer)
}

pub fn project_skills(skills: &[String]) -> String {
    skills.join(", ")
}

/// Renders each entry and separates them with a blank line.
pub fn project_all<E>(entries: &[E], render: impl Fn(&E) -> String) -> String {
    entries.iter().map(render).collect::<Vec<_>>().join("\n\n")
}
