//! Profile completeness scoring.
//!
//! Two deliberately different measures come out of one pass over the
//! aggregate: `completion_percentage` counts sections evenly ("how much is
//! filled in"), while `completeness_score` weights them by product value
//! ("how valuable is what is filled in"). Quality tiers and recommendations
//! derive from the weighted score only.

use serde::Serialize;
use strum::Display;

use crate::{ProfileAggregate, ProfileSection, SECTION_ORDER};

/// Per-section weights for the weighted completeness score. Must sum to 100.
#[derive(Debug, Clone, Copy)]
pub struct SectionWeights {
    pub basic_profile: u32,
    pub horoscope: u32,
    pub education_profession: u32,
    pub family_background: u32,
    pub partner_preference: u32,
    pub contact_details: u32,
    pub documents: u32,
}

pub const DEFAULT_SECTION_WEIGHTS: SectionWeights = SectionWeights {
    basic_profile: 25,
    horoscope: 5,
    education_profession: 15,
    family_background: 10,
    partner_preference: 20,
    contact_details: 20,
    documents: 5,
};

impl SectionWeights {
    pub fn weight_of(&self, section: ProfileSection) -> u32 {
        match section {
            ProfileSection::BasicProfile => self.basic_profile,
            ProfileSection::Horoscope => self.horoscope,
            ProfileSection::EducationProfession => self.education_profession,
            ProfileSection::FamilyBackground => self.family_background,
            ProfileSection::PartnerPreference => self.partner_preference,
            ProfileSection::ContactDetails => self.contact_details,
            ProfileSection::Documents => self.documents,
        }
    }

    pub fn sum(&self) -> u32 {
        SECTION_ORDER.iter().map(|s| self.weight_of(*s)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileQuality {
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl ProfileQuality {
    /// Tier boundaries are inclusive on the lower bound, checked highest-first.
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            ProfileQuality::Excellent
        } else if score >= 75 {
            ProfileQuality::VeryGood
        } else if score >= 60 {
            ProfileQuality::Good
        } else if score >= 40 {
            ProfileQuality::Fair
        } else {
            ProfileQuality::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// One actionable "fill this in next" entry for a missing section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub section: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: RecommendationPriority,
    pub estimated_minutes: u32,
    pub score_impact: u32,
}

/// Result of one completeness pass. Recomputed wholesale on every section
/// change; collaborators persist it as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessResult {
    pub completion_percentage: u32,
    pub completeness_score: u32,
    pub profile_quality: ProfileQuality,
    pub profile_completed: bool,
    pub missing_sections_count: usize,
    pub missing_section_names: Vec<&'static str>,
    pub priority_sections: Vec<&'static str>,
    pub estimated_completion_minutes: u32,
    pub recommendations: Vec<Recommendation>,
}

/// Sections surfaced as "priority" whenever missing, in this order.
const PRIORITY_SECTIONS: [ProfileSection; 3] = [
    ProfileSection::BasicProfile,
    ProfileSection::ContactDetails,
    ProfileSection::PartnerPreference,
];

fn completion_minutes(section: ProfileSection) -> u32 {
    match section {
        ProfileSection::BasicProfile => 10,
        ProfileSection::Horoscope => 5,
        ProfileSection::EducationProfession => 8,
        ProfileSection::FamilyBackground => 12,
        ProfileSection::PartnerPreference => 15,
        ProfileSection::ContactDetails => 7,
        ProfileSection::Documents => 10,
    }
}

fn recommendation_for(section: ProfileSection) -> Recommendation {
    match section {
        ProfileSection::BasicProfile => Recommendation {
            section: section.as_str(),
            title: "Complete your basic profile",
            description: "Name, age, religion and community details are the first thing matches see.",
            priority: RecommendationPriority::Critical,
            estimated_minutes: 10,
            score_impact: 25,
        },
        ProfileSection::ContactDetails => Recommendation {
            section: section.as_str(),
            title: "Add your contact details",
            description: "Verified contact details let interested matches reach you.",
            priority: RecommendationPriority::High,
            estimated_minutes: 7,
            score_impact: 20,
        },
        ProfileSection::PartnerPreference => Recommendation {
            section: section.as_str(),
            title: "Describe your ideal partner",
            description: "Partner preferences drive the quality of your match suggestions.",
            priority: RecommendationPriority::High,
            estimated_minutes: 15,
            score_impact: 20,
        },
        ProfileSection::EducationProfession => Recommendation {
            section: section.as_str(),
            title: "Add education and profession",
            description: "Education and career details are among the most compared fields.",
            priority: RecommendationPriority::Medium,
            estimated_minutes: 8,
            score_impact: 15,
        },
        ProfileSection::FamilyBackground => Recommendation {
            section: section.as_str(),
            title: "Tell us about your family",
            description: "Family background builds trust with prospective families.",
            priority: RecommendationPriority::Medium,
            estimated_minutes: 12,
            score_impact: 10,
        },
        ProfileSection::Horoscope => Recommendation {
            section: section.as_str(),
            title: "Add horoscope details",
            description: "Many families shortlist only when horoscope details are available.",
            priority: RecommendationPriority::Low,
            estimated_minutes: 5,
            score_impact: 5,
        },
        ProfileSection::Documents => Recommendation {
            section: section.as_str(),
            title: "Upload verification documents",
            description: "A photo and identity proof unlock the verified badge.",
            priority: RecommendationPriority::Medium,
            estimated_minutes: 10,
            score_impact: 15,
        },
    }
}

pub struct CompletenessCalculator {
    weights: SectionWeights,
}

impl Default for CompletenessCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_WEIGHTS)
    }
}

impl CompletenessCalculator {
    pub fn new(weights: SectionWeights) -> Self {
        Self { weights }
    }

    /// Total over all inputs: absent data lowers the score, it never errors.
    pub fn compute(&self, profile: &ProfileAggregate) -> CompletenessResult {
        let completed = profile.completed_sections();
        let completion_percentage =
            ((completed as f64 / SECTION_ORDER.len() as f64) * 100.0).round() as u32;

        let mut completeness_score = 0;
        let mut missing = Vec::new();
        for section in SECTION_ORDER {
            if profile.has_section(section) {
                completeness_score += self.weights.weight_of(section);
            } else {
                missing.push(section);
            }
        }

        let priority_sections = PRIORITY_SECTIONS
            .iter()
            .filter(|s| missing.contains(s))
            .map(|s| s.as_str())
            .collect();

        let estimated_completion_minutes = missing.iter().map(|s| completion_minutes(*s)).sum();
        let recommendations = missing.iter().map(|s| recommendation_for(*s)).collect();

        CompletenessResult {
            completion_percentage,
            completeness_score,
            profile_quality: ProfileQuality::from_score(completeness_score),
            profile_completed: completed == SECTION_ORDER.len(),
            missing_sections_count: missing.len(),
            missing_section_names: missing.iter().map(|s| s.as_str()).collect(),
            priority_sections,
            estimated_completion_minutes,
            recommendations,
        }
    }
}

/// Convenience entry point with the default weight table.
pub fn compute_completeness(profile: &ProfileAggregate) -> CompletenessResult {
    CompletenessCalculator::default().compute(profile)
}
