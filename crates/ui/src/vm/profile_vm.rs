use portal_core::model::StudentProfile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileVm {
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub initials: String,
}

impl From<&StudentProfile> for ProfileVm {
    fn from(profile: &StudentProfile) -> Self {
        let initials = profile
            .name()
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        Self {
            name: profile.name().to_owned(),
            email: profile.email().to_owned(),
            birth_date: profile.birth_date().format("%-d %B %Y").to_string(),
            initials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_birth_date_and_initials() {
        let profile = StudentProfile::new(
            "Juan Pérez García",
            "juan.perez@example.com",
            NaiveDate::from_ymd_opt(1995, 3, 15).unwrap(),
        );
        let vm = ProfileVm::from(&profile);
        assert_eq!(vm.birth_date, "15 March 1995");
        assert_eq!(vm.initials, "JP");
    }
}
