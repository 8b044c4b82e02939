//! Label rules the presentation layer measures before arrangement.

use crate::graph::Ancestor;
use crate::record::Person;
use regex::Regex;
use std::sync::OnceLock;

/// Short display text for a person card.
///
/// `label` wins; otherwise the GEDCOM name with its surname slashes dropped.
pub fn essence(person: &Person) -> String {
    let label = person.label.as_deref().map(str::trim).unwrap_or_default();
    if !label.is_empty() {
        return label.to_string();
    }

    let name = person.name.as_deref().unwrap_or_default().replace('/', " ");
    let out = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if out.is_empty() {
        return "?".to_string();
    }
    out
}

pub fn ancestor_label(ancestor: &Ancestor) -> String {
    ancestor.ancestry.to_string()
}

/// Extracts the year from a GEDCOM date phrase (`ABT 1850`, `12 MAR 1890`, `BET 1850 AND 1860`).
pub fn marriage_year(date: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\b(\d{3,4})\b").expect("year regex must compile"));
    re.captures(date)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn essence_strips_gedcom_surname_slashes() {
        let person = Person::new("I1").with_name("John  /Smith/");
        assert_eq!(essence(&person), "John Smith");
    }

    #[test]
    fn essence_prefers_explicit_label() {
        let mut person = Person::new("I1").with_name("John /Smith/");
        person.label = Some("Grandpa John".to_string());
        assert_eq!(essence(&person), "Grandpa John");
    }

    #[test]
    fn essence_of_unnamed_person_is_a_placeholder() {
        assert_eq!(essence(&Person::new("I9")), "?");
        assert_eq!(essence(&Person::new("I9").with_name("//")), "?");
    }

    #[test]
    fn marriage_year_reads_common_gedcom_phrases() {
        assert_eq!(marriage_year("12 MAR 1890").as_deref(), Some("1890"));
        assert_eq!(marriage_year("ABT 1850").as_deref(), Some("1850"));
        assert_eq!(marriage_year("BET 1850 AND 1860").as_deref(), Some("1850"));
        assert_eq!(marriage_year("unknown"), None);
    }
}
