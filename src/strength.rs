//! Per-facet profile strength scores for the profile-quality display.
//!
//! Unlike completeness, these are display-only: each facet is a flat baseline
//! when its section is present, with verification bonuses folded into the
//! contact and document facets.

use serde::Serialize;
use strum::Display;

use crate::{ProfileAggregate, ProfileSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    /// Mobile, email and identity all verified.
    Verified,
    /// At least one of the three verified.
    Pending,
    Unverified,
}

impl VerificationStatus {
    fn from_flags(mobile: bool, email: bool, identity: bool) -> Self {
        if mobile && email && identity {
            VerificationStatus::Verified
        } else if mobile || email || identity {
            VerificationStatus::Pending
        } else {
            VerificationStatus::Unverified
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthMetrics {
    pub basic_info_score: u32,
    pub contact_info_score: u32,
    pub personal_score: u32,
    pub family_score: u32,
    pub professional_score: u32,
    pub preference_score: u32,
    pub document_score: u32,
    pub mobile_verified: bool,
    pub email_verified: bool,
    pub identity_verified: bool,
    pub has_profile_photo: bool,
    pub verification_status: VerificationStatus,
}

fn baseline(present: bool, score: u32) -> u32 {
    if present {
        score
    } else {
        0
    }
}

pub fn compute_strength_metrics(profile: &ProfileAggregate) -> StrengthMetrics {
    let contact_info_score = if profile.has_section(ProfileSection::ContactDetails) {
        let mut score = 60;
        if profile.mobile_verified {
            score += 20;
        }
        if profile.email_verified {
            score += 20;
        }
        score
    } else {
        0
    };

    let document_score = if profile.has_section(ProfileSection::Documents) {
        let mut score = 40;
        if profile.has_profile_photo {
            score += 30;
        }
        if profile.identity_verified {
            score += 30;
        }
        score
    } else {
        0
    };

    StrengthMetrics {
        basic_info_score: baseline(profile.has_section(ProfileSection::BasicProfile), 95),
        contact_info_score,
        personal_score: baseline(profile.has_section(ProfileSection::Horoscope), 90),
        family_score: baseline(profile.has_section(ProfileSection::FamilyBackground), 85),
        professional_score: baseline(profile.has_section(ProfileSection::EducationProfession), 85),
        preference_score: baseline(profile.has_section(ProfileSection::PartnerPreference), 80),
        document_score,
        mobile_verified: profile.mobile_verified,
        email_verified: profile.email_verified,
        identity_verified: profile.identity_verified,
        has_profile_photo: profile.has_profile_photo,
        verification_status: VerificationStatus::from_flags(
            profile.mobile_verified,
            profile.email_verified,
            profile.identity_verified,
        ),
    }
}
