use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::TutorId;

/// A tutor listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutor {
    id: TutorId,
    name: String,
    subjects: Vec<String>,
    description: String,
    availability: String,
}

impl Tutor {
    #[must_use]
    pub fn new(
        id: TutorId,
        name: impl Into<String>,
        subjects: Vec<String>,
        description: impl Into<String>,
        availability: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            subjects,
            description: description.into(),
            availability: availability.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TutorId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn availability(&self) -> &str {
        &self.availability
    }

    /// Case-insensitive match against the tutor's name or any subject.
    ///
    /// `query` is expected to be trimmed and lowercased already.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(query)
            || self
                .subjects
                .iter()
                .any(|subject| subject.to_lowercase().contains(query))
    }
}

/// The logged-in student's profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    name: String,
    email: String,
    birth_date: NaiveDate,
}

impl StudentProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            birth_date,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor() -> Tutor {
        Tutor::new(
            TutorId::new(3),
            "Mtro. Carlos Ramírez",
            vec!["Programación".into(), "Algoritmos".into()],
            "Desarrollador de software",
            "Lun-Mie 10:00-13:00",
        )
    }

    #[test]
    fn matches_name_and_subjects() {
        let t = tutor();
        assert!(t.matches_query(""));
        assert!(t.matches_query("carlos"));
        assert!(t.matches_query("algorit"));
        assert!(!t.matches_query("química"));
    }

    #[test]
    fn profile_deserializes_iso_birth_date() {
        let profile: StudentProfile = serde_json::from_str(
            r#"{"name": "Juan", "email": "juan@example.com", "birth_date": "1995-03-15"}"#,
        )
        .unwrap();
        assert_eq!(
            profile.birth_date(),
            NaiveDate::from_ymd_opt(1995, 3, 15).unwrap()
        );
    }
}
