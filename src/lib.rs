pub mod completeness;
pub mod logging;
pub mod matching;
pub mod recompute;
pub mod run_id;
pub mod store;
pub mod strength;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// The seven independently maintained profile sections, in canonical order.
/// Missing-section reporting and recommendations always follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileSection {
    BasicProfile,
    Horoscope,
    EducationProfession,
    FamilyBackground,
    PartnerPreference,
    ContactDetails,
    Documents,
}

pub const SECTION_ORDER: [ProfileSection; 7] = [
    ProfileSection::BasicProfile,
    ProfileSection::Horoscope,
    ProfileSection::EducationProfession,
    ProfileSection::FamilyBackground,
    ProfileSection::PartnerPreference,
    ProfileSection::ContactDetails,
    ProfileSection::Documents,
];

impl ProfileSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSection::BasicProfile => "basicProfile",
            ProfileSection::Horoscope => "horoscope",
            ProfileSection::EducationProfession => "educationProfession",
            ProfileSection::FamilyBackground => "familyBackground",
            ProfileSection::PartnerPreference => "partnerPreference",
            ProfileSection::ContactDetails => "contactDetails",
            ProfileSection::Documents => "documents",
        }
    }
}

// Read models supplied by the profile/section collaborators. A section that
// could not be resolved to a concrete value arrives here as None; the engine
// never sees partial or corrupt references.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicProfile {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub religion: Option<String>,
    pub caste: Option<String>,
    pub mother_tongue: Option<String>,
    pub marital_status: Option<String>,
    pub current_city: Option<String>,
    pub diet_preference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Horoscope {
    pub rashi: Option<String>,
    pub nakshatra: Option<String>,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
    pub manglik: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationProfession {
    pub education_level: Option<String>,
    pub institution: Option<String>,
    pub profession: Option<String>,
    pub employer: Option<String>,
    /// Annual income in thousands, currency-agnostic.
    pub annual_income: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyBackground {
    pub family_type: Option<String>,
    pub father_occupation: Option<String>,
    pub mother_occupation: Option<String>,
    pub siblings: Option<i32>,
    pub native_place: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerPreference {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// "Any" relaxes the religion dimension to a preference match.
    pub preferred_religion: Option<String>,
    pub preferred_caste: Option<String>,
    pub preferred_education: Option<String>,
    pub preferred_cities: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub doc_type: String,
    pub storage_key: String,
    pub verified: bool,
}

/// Aggregated read model for one user: the seven optional sections plus the
/// verification flags. Assembled by the host application from its stores; the
/// engine treats it as an immutable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileAggregate {
    pub user_id: UserId,
    pub basic_profile: Option<BasicProfile>,
    pub horoscope: Option<Horoscope>,
    pub education_profession: Option<EducationProfession>,
    pub family_background: Option<FamilyBackground>,
    pub partner_preference: Option<PartnerPreference>,
    pub contact_details: Option<ContactDetails>,
    pub documents: Vec<ProfileDocument>,
    pub mobile_verified: bool,
    pub email_verified: bool,
    pub identity_verified: bool,
    pub has_profile_photo: bool,
}

impl ProfileAggregate {
    pub fn has_section(&self, section: ProfileSection) -> bool {
        match section {
            ProfileSection::BasicProfile => self.basic_profile.is_some(),
            ProfileSection::Horoscope => self.horoscope.is_some(),
            ProfileSection::EducationProfession => self.education_profession.is_some(),
            ProfileSection::FamilyBackground => self.family_background.is_some(),
            ProfileSection::PartnerPreference => self.partner_preference.is_some(),
            ProfileSection::ContactDetails => self.contact_details.is_some(),
            ProfileSection::Documents => !self.documents.is_empty(),
        }
    }

    pub fn completed_sections(&self) -> usize {
        SECTION_ORDER
            .iter()
            .filter(|section| self.has_section(**section))
            .count()
    }

    pub fn religion(&self) -> Option<&str> {
        self.basic_profile.as_ref()?.religion.as_deref()
    }

    pub fn caste(&self) -> Option<&str> {
        self.basic_profile.as_ref()?.caste.as_deref()
    }

    pub fn diet_preference(&self) -> Option<&str> {
        self.basic_profile.as_ref()?.diet_preference.as_deref()
    }

    pub fn current_city(&self) -> Option<&str> {
        self.basic_profile.as_ref()?.current_city.as_deref()
    }

    pub fn education_level(&self) -> Option<&str> {
        self.education_profession.as_ref()?.education_level.as_deref()
    }

    pub fn profession(&self) -> Option<&str> {
        self.education_profession.as_ref()?.profession.as_deref()
    }

    pub fn annual_income(&self) -> Option<u32> {
        self.education_profession.as_ref()?.annual_income
    }

    /// Age in whole years as of today, when a date of birth is on file.
    pub fn age_years(&self) -> Option<i32> {
        let dob = self.basic_profile.as_ref()?.date_of_birth?;
        let today = Utc::now().date_naive();
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        Some(age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_aggregate_has_no_sections() {
        let profile = ProfileAggregate::default();
        assert_eq!(profile.completed_sections(), 0);
        assert!(SECTION_ORDER.iter().all(|s| !profile.has_section(*s)));
    }

    #[test]
    fn documents_present_only_when_non_empty() {
        let mut profile = ProfileAggregate::default();
        assert!(!profile.has_section(ProfileSection::Documents));

        profile.documents.push(ProfileDocument {
            doc_type: "id_proof".into(),
            storage_key: "docs/1".into(),
            verified: false,
        });
        assert!(profile.has_section(ProfileSection::Documents));
    }

    #[test]
    fn age_accounts_for_birthday_not_yet_reached() {
        let today = Utc::now().date_naive();
        let dob = NaiveDate::from_ymd_opt(today.year() - 30, today.month(), today.day())
            .or_else(|| NaiveDate::from_ymd_opt(today.year() - 30, today.month(), 28))
            .unwrap();

        let profile = ProfileAggregate {
            basic_profile: Some(BasicProfile {
                date_of_birth: Some(dob),
                ..BasicProfile::default()
            }),
            ..ProfileAggregate::default()
        };

        assert_eq!(profile.age_years(), Some(30));
    }

    #[test]
    fn section_names_follow_canonical_order() {
        let names: Vec<&str> = SECTION_ORDER.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "basicProfile",
                "horoscope",
                "educationProfession",
                "familyBackground",
                "partnerPreference",
                "contactDetails",
                "documents",
            ]
        );
    }
}
