use portal_core::model::{Tutor, TutorId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorCardVm {
    pub id: TutorId,
    pub name: String,
    pub subjects: String,
    pub description: String,
    pub availability: String,
}

impl From<&Tutor> for TutorCardVm {
    fn from(tutor: &Tutor) -> Self {
        Self {
            id: tutor.id(),
            name: tutor.name().to_owned(),
            subjects: tutor.subjects().join(", "),
            description: tutor.description().to_owned(),
            availability: tutor.availability().to_owned(),
        }
    }
}

#[must_use]
pub fn map_tutor_cards(tutors: &[Tutor]) -> Vec<TutorCardVm> {
    tutors.iter().map(TutorCardVm::from).collect()
}

#[must_use]
pub fn schedule_notice(tutor_name: &str) -> String {
    format!("Scheduling with {tutor_name} is not available yet.")
}
