//! Pairwise compatibility scoring across the eight weighted dimensions.
//!
//! Every dimension is total over missing data: an absent section, field or
//! unrecognized value lands on that dimension's weakest tier and is tagged
//! with a [`Degradation`] reason instead of raising. The tags are collapsed
//! away at the public [`CompatibilityBreakdown`] boundary.

use serde::Serialize;
use tracing::debug;

use super::{
    education::education_ordinal,
    fold_eq,
    location::evaluate_location,
    profession::same_affinity_group,
    weights::{DimensionWeights, DEFAULT_DIMENSION_WEIGHTS},
};
use crate::{PartnerPreference, ProfileAggregate};

/// Why a dimension scored below its full signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degradation {
    /// A compared field was absent on at least one side.
    MissingValue,
    /// The backing section itself was absent.
    MissingSection,
    /// A value was present but not in the recognized vocabulary.
    UnrecognizedValue,
    /// Structured contact data was unavailable; compared the profile's
    /// free-text current city instead.
    CoarseLocationFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionStatus {
    Matched,
    /// Values differ but a stated partner preference admits the other side.
    PreferenceFallback,
    Partial,
    Mismatch,
    /// Not enough data to compare.
    Unknown,
}

/// Internal per-dimension outcome: points in `[0, weight]` plus the tagged
/// reason when the signal was degraded.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub points: f64,
    pub weight: f64,
    pub status: DimensionStatus,
    pub degradation: Option<Degradation>,
    pub details: String,
}

impl DimensionScore {
    pub(crate) fn new(
        points: f64,
        weight: f64,
        status: DimensionStatus,
        details: impl Into<String>,
    ) -> Self {
        Self {
            points,
            weight,
            status,
            degradation: None,
            details: details.into(),
        }
    }

    pub(crate) fn degraded(
        points: f64,
        weight: f64,
        status: DimensionStatus,
        degradation: Degradation,
        details: impl Into<String>,
    ) -> Self {
        Self {
            points,
            weight,
            status,
            degradation: Some(degradation),
            details: details.into(),
        }
    }
}

/// Full scoring outcome for one pair, per-dimension detail included.
#[derive(Debug, Clone)]
pub struct CompatibilityScore {
    pub overall: u32,
    pub religion: DimensionScore,
    pub caste: DimensionScore,
    pub education: DimensionScore,
    pub profession: DimensionScore,
    pub income: DimensionScore,
    pub age: DimensionScore,
    pub location: DimensionScore,
    pub lifestyle: DimensionScore,
}

impl CompatibilityScore {
    pub fn dimensions(&self) -> [&DimensionScore; 8] {
        [
            &self.religion,
            &self.caste,
            &self.education,
            &self.profession,
            &self.income,
            &self.age,
            &self.location,
            &self.lifestyle,
        ]
    }

    pub fn is_basically_compatible(&self) -> bool {
        self.overall >= BASIC_COMPATIBILITY_THRESHOLD
    }

    /// Collapse to the plain-number view collaborators serialize.
    pub fn breakdown(&self) -> CompatibilityBreakdown {
        CompatibilityBreakdown {
            overall: self.overall,
            religion: self.religion.points,
            caste: self.caste.points,
            education: self.education.points,
            profession: self.profession.points,
            income: self.income.points,
            age: self.age.points,
            location: self.location.points,
            lifestyle: self.lifestyle.points,
        }
    }
}

/// Overall score at or above this counts as "basically compatible".
pub const BASIC_COMPATIBILITY_THRESHOLD: u32 = 50;

/// Overall score reported when one side of a pairwise check could not be
/// resolved at all.
pub const FALLBACK_OVERALL: u32 = 25;

/// Public value object: eight dimension scores bounded by their weights plus
/// the normalized overall. Never persisted by the engine itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityBreakdown {
    pub overall: u32,
    pub religion: f64,
    pub caste: f64,
    pub education: f64,
    pub profession: f64,
    pub income: f64,
    pub age: f64,
    pub location: f64,
    pub lifestyle: f64,
}

impl CompatibilityBreakdown {
    /// Degraded result for a pair where one profile was unresolvable.
    pub fn fallback() -> Self {
        Self {
            overall: FALLBACK_OVERALL,
            religion: 0.0,
            caste: 0.0,
            education: 0.0,
            profession: 0.0,
            income: 0.0,
            age: 0.0,
            location: 0.0,
            lifestyle: 0.0,
        }
    }

    pub fn is_basically_compatible(&self) -> bool {
        self.overall >= BASIC_COMPATIBILITY_THRESHOLD
    }
}

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: DimensionWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_DIMENSION_WEIGHTS,
        }
    }
}

pub struct CompatibilityScorer {
    config: ScoringConfig,
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl CompatibilityScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score one pair. Total over missing data; an all-empty pair still
    /// produces a (very low) score rather than an error.
    pub fn score(
        &self,
        a: &ProfileAggregate,
        b: &ProfileAggregate,
        pref_a: Option<&PartnerPreference>,
        pref_b: Option<&PartnerPreference>,
    ) -> CompatibilityScore {
        let religion = self.score_religion(a, b, pref_a, pref_b);
        let caste = self.score_caste(a, b, pref_a, pref_b);
        let education = self.score_education(a, b);
        let profession = self.score_profession(a, b);
        let income = self.score_income(a, b);
        let age = self.score_age(a, b);
        let location = evaluate_location(a, b, self.config.weights.location);
        let lifestyle = self.score_lifestyle(a, b);

        let dims = [
            &religion, &caste, &education, &profession, &income, &age, &location, &lifestyle,
        ];
        for dim in dims {
            if let Some(reason) = dim.degradation {
                debug!(
                    user_a = a.user_id,
                    user_b = b.user_id,
                    degradation = ?reason,
                    details = %dim.details,
                    "dimension scored on degraded signal"
                );
            }
        }

        let total: f64 = dims.iter().map(|d| d.points).sum();
        let weight_sum = self.config.weights.sum();
        let overall = ((total / weight_sum) * 100.0).round().clamp(0.0, 100.0) as u32;

        CompatibilityScore {
            overall,
            religion,
            caste,
            education,
            profession,
            income,
            age,
            location,
            lifestyle,
        }
    }

    fn score_religion(
        &self,
        a: &ProfileAggregate,
        b: &ProfileAggregate,
        pref_a: Option<&PartnerPreference>,
        pref_b: Option<&PartnerPreference>,
    ) -> DimensionScore {
        let weight = self.config.weights.religion;
        match (a.religion(), b.religion()) {
            (Some(ra), Some(rb)) if fold_eq(ra, rb) => DimensionScore::new(
                weight,
                weight,
                DimensionStatus::Matched,
                format!("same religion: {ra}"),
            ),
            (Some(ra), Some(rb)) => {
                if religion_preference_admits(pref_a, rb)
                    || religion_preference_admits(pref_b, ra)
                {
                    DimensionScore::new(
                        weight / 2.0,
                        weight,
                        DimensionStatus::PreferenceFallback,
                        format!("{ra} vs {rb}, admitted by stated preference"),
                    )
                } else {
                    DimensionScore::new(
                        0.0,
                        weight,
                        DimensionStatus::Mismatch,
                        format!("religion mismatch: {ra} vs {rb}"),
                    )
                }
            }
            _ => DimensionScore::degraded(
                0.0,
                weight,
                DimensionStatus::Unknown,
                Degradation::MissingValue,
                "religion not stated on at least one side",
            ),
        }
    }

    fn score_caste(
        &self,
        a: &ProfileAggregate,
        b: &ProfileAggregate,
        pref_a: Option<&PartnerPreference>,
        pref_b: Option<&PartnerPreference>,
    ) -> DimensionScore {
        let weight = self.config.weights.caste;
        match (a.caste(), b.caste()) {
            (Some(ca), Some(cb)) if fold_eq(ca, cb) => DimensionScore::new(
                weight,
                weight,
                DimensionStatus::Matched,
                format!("same caste: {ca}"),
            ),
            (Some(ca), Some(cb)) => {
                if caste_preference_admits(pref_a, cb) || caste_preference_admits(pref_b, ca) {
                    DimensionScore::new(
                        weight / 2.0,
                        weight,
                        DimensionStatus::PreferenceFallback,
                        format!("{ca} vs {cb}, admitted by stated preference"),
                    )
                } else {
                    DimensionScore::new(
                        0.0,
                        weight,
                        DimensionStatus::Mismatch,
                        format!("caste mismatch: {ca} vs {cb}"),
                    )
                }
            }
            // Caste is a soft-optional signal: unknown on either side keeps
            // half the weight rather than zeroing the dimension.
            _ => DimensionScore::degraded(
                weight / 2.0,
                weight,
                DimensionStatus::Unknown,
                Degradation::MissingValue,
                "caste not stated on at least one side",
            ),
        }
    }

    fn score_education(&self, a: &ProfileAggregate, b: &ProfileAggregate) -> DimensionScore {
        let weight = self.config.weights.education;
        match (a.education_level(), b.education_level()) {
            (Some(ea), Some(eb)) => match (education_ordinal(ea), education_ordinal(eb)) {
                (Some(oa), Some(ob)) => {
                    let diff = oa.abs_diff(ob);
                    let (fraction, status) = match diff {
                        0 => (1.0, DimensionStatus::Matched),
                        1 => (0.75, DimensionStatus::Partial),
                        2 => (0.5, DimensionStatus::Partial),
                        _ => (0.25, DimensionStatus::Partial),
                    };
                    DimensionScore::new(
                        weight * fraction,
                        weight,
                        status,
                        format!("education rungs {oa} vs {ob}"),
                    )
                }
                _ => DimensionScore::degraded(
                    weight * 0.5,
                    weight,
                    DimensionStatus::Partial,
                    Degradation::UnrecognizedValue,
                    format!("unrecognized education level: {ea} vs {eb}"),
                ),
            },
            _ => {
                let reason = if a.education_profession.is_none() || b.education_profession.is_none()
                {
                    Degradation::MissingSection
                } else {
                    Degradation::MissingValue
                };
                DimensionScore::degraded(
                    0.0,
                    weight,
                    DimensionStatus::Unknown,
                    reason,
                    "education not stated on at least one side",
                )
            }
        }
    }

    fn score_profession(&self, a: &ProfileAggregate, b: &ProfileAggregate) -> DimensionScore {
        let weight = self.config.weights.profession;
        match (a.profession(), b.profession()) {
            (Some(pa), Some(pb)) if fold_eq(pa, pb) => DimensionScore::new(
                weight,
                weight,
                DimensionStatus::Matched,
                format!("same profession: {pa}"),
            ),
            (Some(pa), Some(pb)) if same_affinity_group(pa, pb) => DimensionScore::new(
                weight * 0.75,
                weight,
                DimensionStatus::Partial,
                format!("related professions: {pa} / {pb}"),
            ),
            (Some(pa), Some(pb)) => DimensionScore::new(
                weight * 0.5,
                weight,
                DimensionStatus::Partial,
                format!("unrelated professions: {pa} / {pb}"),
            ),
            _ => DimensionScore::degraded(
                0.0,
                weight,
                DimensionStatus::Unknown,
                Degradation::MissingValue,
                "profession not stated on at least one side",
            ),
        }
    }

    fn score_income(&self, a: &ProfileAggregate, b: &ProfileAggregate) -> DimensionScore {
        let weight = self.config.weights.income;
        match (a.annual_income(), b.annual_income()) {
            (Some(x), Some(y)) => {
                let (x, y) = (x as f64, y as f64);
                let max = x.max(y);
                let relative = if max == 0.0 { 0.0 } else { (x - y).abs() / max };
                let (fraction, status) = if relative <= 0.2 {
                    (1.0, DimensionStatus::Matched)
                } else if relative <= 0.5 {
                    (0.75, DimensionStatus::Partial)
                } else if relative <= 1.0 {
                    (0.5, DimensionStatus::Partial)
                } else {
                    (0.25, DimensionStatus::Partial)
                };
                DimensionScore::new(
                    weight * fraction,
                    weight,
                    status,
                    format!("relative income gap {:.2}", relative),
                )
            }
            _ => DimensionScore::degraded(
                0.0,
                weight,
                DimensionStatus::Unknown,
                Degradation::MissingValue,
                "income not stated on at least one side",
            ),
        }
    }

    fn score_age(&self, a: &ProfileAggregate, b: &ProfileAggregate) -> DimensionScore {
        let weight = self.config.weights.age;
        match (a.age_years(), b.age_years()) {
            (Some(x), Some(y)) => {
                let diff = (x - y).abs();
                let (fraction, status) = if diff <= 2 {
                    (1.0, DimensionStatus::Matched)
                } else if diff <= 5 {
                    (0.75, DimensionStatus::Partial)
                } else if diff <= 10 {
                    (0.5, DimensionStatus::Partial)
                } else {
                    (0.25, DimensionStatus::Partial)
                };
                DimensionScore::new(
                    weight * fraction,
                    weight,
                    status,
                    format!("age gap {diff} years"),
                )
            }
            _ => DimensionScore::degraded(
                0.0,
                weight,
                DimensionStatus::Unknown,
                Degradation::MissingValue,
                "date of birth not stated on at least one side",
            ),
        }
    }

    fn score_lifestyle(&self, a: &ProfileAggregate, b: &ProfileAggregate) -> DimensionScore {
        let weight = self.config.weights.lifestyle;
        // Half the weight is an unconditional baseline; the other half needs
        // a diet match with both sides stated.
        let baseline = weight / 2.0;
        match (a.diet_preference(), b.diet_preference()) {
            (Some(da), Some(db)) if fold_eq(da, db) => DimensionScore::new(
                weight,
                weight,
                DimensionStatus::Matched,
                format!("diet matches: {da}"),
            ),
            (Some(da), Some(db)) => DimensionScore::new(
                baseline,
                weight,
                DimensionStatus::Partial,
                format!("diet differs: {da} vs {db}"),
            ),
            _ => DimensionScore::degraded(
                baseline,
                weight,
                DimensionStatus::Partial,
                Degradation::MissingValue,
                "diet not stated on at least one side",
            ),
        }
    }
}

fn religion_preference_admits(pref: Option<&PartnerPreference>, other_actual: &str) -> bool {
    pref.and_then(|p| p.preferred_religion.as_deref())
        .map(|p| fold_eq(p, "Any") || fold_eq(p, other_actual))
        .unwrap_or(false)
}

fn caste_preference_admits(pref: Option<&PartnerPreference>, other_actual: &str) -> bool {
    pref.and_then(|p| p.preferred_caste.as_deref())
        .map(|p| fold_eq(p, "Any") || fold_eq(p, other_actual))
        .unwrap_or(false)
}

/// Convenience entry point with the default weight table.
pub fn score_compatibility(
    a: &ProfileAggregate,
    b: &ProfileAggregate,
    pref_a: Option<&PartnerPreference>,
    pref_b: Option<&PartnerPreference>,
) -> CompatibilityBreakdown {
    CompatibilityScorer::default().score(a, b, pref_a, pref_b).breakdown()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicProfile, ContactDetails, EducationProfession, ProfileAggregate};
    use chrono::{Datelike, NaiveDate, Utc};

    fn dob(age: i32) -> NaiveDate {
        let today = Utc::now().date_naive();
        // Birthday well in the past this year so the age is exact.
        NaiveDate::from_ymd_opt(today.year() - age, 1, 1).unwrap()
    }

    fn hindu_profile(id: i64, age: i32, city: &str) -> ProfileAggregate {
        ProfileAggregate {
            user_id: id,
            basic_profile: Some(BasicProfile {
                religion: Some("Hindu".into()),
                caste: Some("Patel".into()),
                date_of_birth: Some(dob(age)),
                current_city: Some(city.into()),
                ..BasicProfile::default()
            }),
            education_profession: Some(EducationProfession {
                education_level: Some("Bachelor's Degree".into()),
                ..EducationProfession::default()
            }),
            contact_details: Some(ContactDetails {
                country: Some("India".into()),
                state: Some("Gujarat".into()),
                city: Some(city.into()),
                ..ContactDetails::default()
            }),
            ..ProfileAggregate::default()
        }
    }

    #[test]
    fn all_missing_data_scores_floor_without_error() {
        let a = ProfileAggregate::default();
        let b = ProfileAggregate::default();
        let score = CompatibilityScorer::default().score(&a, &b, None, None);

        // Caste half-weight and lifestyle baseline survive even on empty
        // input: 7.5 + 2.5 of 100 rounds to 10.
        assert_eq!(score.overall, 10);
        assert_eq!(score.religion.points, 0.0);
        assert_eq!(score.religion.degradation, Some(Degradation::MissingValue));
        assert!(!score.is_basically_compatible());
    }

    #[test]
    fn overall_stays_within_bounds() {
        let a = hindu_profile(1, 28, "Ahmedabad");
        let b = hindu_profile(2, 29, "Ahmedabad");
        let score = CompatibilityScorer::default().score(&a, &b, None, None);
        assert!(score.overall <= 100);
        for dim in score.dimensions() {
            assert!(dim.points >= 0.0 && dim.points <= dim.weight);
        }
    }

    #[test]
    fn worked_example_same_community_pair() {
        // Identical religion, caste, education; ages 28/29; same city.
        // Religion 20 + caste 15 + education 15 + age 15 + location 10 +
        // lifestyle baseline 2.5 = 77.5; profession and income unknown = 0.
        let a = hindu_profile(1, 28, "Ahmedabad");
        let b = hindu_profile(2, 29, "Ahmedabad");
        let score = CompatibilityScorer::default().score(&a, &b, None, None);

        assert_eq!(score.overall, 78);
        assert!(score.is_basically_compatible());
        assert_eq!(score.profession.points, 0.0);
        assert_eq!(score.income.points, 0.0);
    }

    #[test]
    fn symmetric_dimensions_are_order_independent() {
        // Location and lifestyle also come out symmetric here because both
        // fallback paths compare the same fields on both sides; only the six
        // core dimensions are guaranteed order-independent.
        let mut a = hindu_profile(1, 26, "Pune");
        let mut b = hindu_profile(2, 34, "Mumbai");
        a.education_profession = Some(EducationProfession {
            education_level: Some("PhD".into()),
            profession: Some("Doctor".into()),
            annual_income: Some(900),
            ..EducationProfession::default()
        });
        b.education_profession = Some(EducationProfession {
            education_level: Some("High School".into()),
            profession: Some("Nurse".into()),
            annual_income: Some(300),
            ..EducationProfession::default()
        });

        let scorer = CompatibilityScorer::default();
        let ab = scorer.score(&a, &b, None, None);
        let ba = scorer.score(&b, &a, None, None);
        assert_eq!(ab.overall, ba.overall);
        assert_eq!(ab.religion.points, ba.religion.points);
        assert_eq!(ab.caste.points, ba.caste.points);
        assert_eq!(ab.education.points, ba.education.points);
        assert_eq!(ab.profession.points, ba.profession.points);
        assert_eq!(ab.income.points, ba.income.points);
        assert_eq!(ab.age.points, ba.age.points);
    }

    #[test]
    fn religion_mismatch_scores_zero_without_preference() {
        let a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");
        b.basic_profile.as_mut().unwrap().religion = Some("Christian".into());

        let score = CompatibilityScorer::default().score(&a, &b, None, None);
        assert_eq!(score.religion.points, 0.0);
        assert_eq!(score.religion.status, DimensionStatus::Mismatch);
    }

    #[test]
    fn any_religion_preference_grants_half_weight() {
        let a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");
        b.basic_profile.as_mut().unwrap().religion = Some("Christian".into());

        let pref_a = PartnerPreference {
            preferred_religion: Some("Any".into()),
            ..PartnerPreference::default()
        };

        let score = CompatibilityScorer::default().score(&a, &b, Some(&pref_a), None);
        assert_eq!(score.religion.points, 10.0);
        assert_eq!(score.religion.status, DimensionStatus::PreferenceFallback);

        // Preference on the other side works the same way.
        let score = CompatibilityScorer::default().score(&a, &b, None, Some(&pref_a));
        assert_eq!(score.religion.points, 10.0);
    }

    #[test]
    fn preference_naming_the_other_religion_grants_half_weight() {
        let a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");
        b.basic_profile.as_mut().unwrap().religion = Some("Jain".into());

        let pref_a = PartnerPreference {
            preferred_religion: Some("Jain".into()),
            ..PartnerPreference::default()
        };

        let score = CompatibilityScorer::default().score(&a, &b, Some(&pref_a), None);
        assert_eq!(score.religion.points, 10.0);
    }

    #[test]
    fn missing_caste_keeps_half_weight() {
        let a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");
        b.basic_profile.as_mut().unwrap().caste = None;

        let score = CompatibilityScorer::default().score(&a, &b, None, None);
        assert_eq!(score.caste.points, 7.5);
        assert_eq!(score.caste.status, DimensionStatus::Unknown);
        assert_eq!(score.caste.degradation, Some(Degradation::MissingValue));
    }

    #[test]
    fn education_ladder_fractions() {
        let scorer = CompatibilityScorer::default();
        let mut a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");

        let cases = [
            ("PhD", "PhD", 15.0),
            ("PhD", "Master's Degree", 11.25),
            ("PhD", "Bachelor's Degree", 7.5),
            ("PhD", "High School", 3.75),
        ];
        for (ea, eb, expected) in cases {
            a.education_profession.as_mut().unwrap().education_level = Some(ea.into());
            b.education_profession.as_mut().unwrap().education_level = Some(eb.into());
            let score = scorer.score(&a, &b, None, None);
            assert_eq!(score.education.points, expected, "{ea} vs {eb}");
        }
    }

    #[test]
    fn unrecognized_education_scores_half() {
        let mut a = hindu_profile(1, 28, "Pune");
        let b = hindu_profile(2, 28, "Pune");
        a.education_profession.as_mut().unwrap().education_level = Some("Gurukul".into());

        let score = CompatibilityScorer::default().score(&a, &b, None, None);
        assert_eq!(score.education.points, 7.5);
        assert_eq!(
            score.education.degradation,
            Some(Degradation::UnrecognizedValue)
        );
    }

    #[test]
    fn missing_education_section_scores_zero() {
        let mut a = hindu_profile(1, 28, "Pune");
        let b = hindu_profile(2, 28, "Pune");
        a.education_profession = None;

        let score = CompatibilityScorer::default().score(&a, &b, None, None);
        assert_eq!(score.education.points, 0.0);
        assert_eq!(
            score.education.degradation,
            Some(Degradation::MissingSection)
        );
    }

    #[test]
    fn profession_tiers() {
        let scorer = CompatibilityScorer::default();
        let mut a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");

        let cases = [
            ("Doctor", "Doctor", 10.0),
            ("Doctor", "Nurse", 7.5),
            ("Doctor", "Farmer", 5.0),
        ];
        for (pa, pb, expected) in cases {
            a.education_profession.as_mut().unwrap().profession = Some(pa.into());
            b.education_profession.as_mut().unwrap().profession = Some(pb.into());
            let score = scorer.score(&a, &b, None, None);
            assert_eq!(score.profession.points, expected, "{pa} vs {pb}");
        }

        b.education_profession.as_mut().unwrap().profession = None;
        let score = scorer.score(&a, &b, None, None);
        assert_eq!(score.profession.points, 0.0);
    }

    #[test]
    fn income_bands_on_relative_difference() {
        let scorer = CompatibilityScorer::default();
        let mut a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");

        let cases = [
            (1000u32, 900u32, 10.0), // gap 0.10 -> full
            (1000, 800, 10.0),       // gap 0.20 boundary stays full
            (1000, 700, 7.5),        // gap 0.30 -> 75%
            (1000, 500, 7.5),        // gap 0.50 boundary stays 75%
            (1000, 300, 5.0),        // gap 0.70 -> 50%
            (1000, 0, 5.0),          // gap 1.00 boundary stays 50%
        ];
        for (ia, ib, expected) in cases {
            a.education_profession.as_mut().unwrap().annual_income = Some(ia);
            b.education_profession.as_mut().unwrap().annual_income = Some(ib);
            let score = scorer.score(&a, &b, None, None);
            assert_eq!(score.income.points, expected, "{ia} vs {ib}");
        }

        // Equal zero incomes compare as equal, not as a division by zero.
        a.education_profession.as_mut().unwrap().annual_income = Some(0);
        b.education_profession.as_mut().unwrap().annual_income = Some(0);
        let score = scorer.score(&a, &b, None, None);
        assert_eq!(score.income.points, 10.0);
    }

    #[test]
    fn age_bands_on_absolute_difference() {
        let scorer = CompatibilityScorer::default();
        let cases = [(28, 29, 15.0), (28, 33, 11.25), (28, 38, 7.5), (28, 45, 3.75)];
        for (age_a, age_b, expected) in cases {
            let a = hindu_profile(1, age_a, "Pune");
            let b = hindu_profile(2, age_b, "Pune");
            let score = scorer.score(&a, &b, None, None);
            assert_eq!(score.age.points, expected, "{age_a} vs {age_b}");
        }
    }

    #[test]
    fn lifestyle_baseline_always_granted() {
        let scorer = CompatibilityScorer::default();
        let mut a = hindu_profile(1, 28, "Pune");
        let mut b = hindu_profile(2, 28, "Pune");

        a.basic_profile.as_mut().unwrap().diet_preference = Some("Vegetarian".into());
        b.basic_profile.as_mut().unwrap().diet_preference = Some("vegetarian".into());
        assert_eq!(scorer.score(&a, &b, None, None).lifestyle.points, 5.0);

        b.basic_profile.as_mut().unwrap().diet_preference = Some("Non-Vegetarian".into());
        assert_eq!(scorer.score(&a, &b, None, None).lifestyle.points, 2.5);

        b.basic_profile.as_mut().unwrap().diet_preference = None;
        assert_eq!(scorer.score(&a, &b, None, None).lifestyle.points, 2.5);
    }

    #[test]
    fn breakdown_collapses_to_plain_numbers() {
        let a = hindu_profile(1, 28, "Ahmedabad");
        let b = hindu_profile(2, 29, "Ahmedabad");
        let score = CompatibilityScorer::default().score(&a, &b, None, None);
        let breakdown = score.breakdown();

        assert_eq!(breakdown.overall, score.overall);
        assert_eq!(breakdown.religion, score.religion.points);
        assert!(breakdown.is_basically_compatible());

        let json = serde_json::to_value(&breakdown).unwrap();
        assert!(json.get("overall").is_some());
        assert!(json.get("lifestyle").is_some());
    }

    #[test]
    fn fallback_breakdown_is_25() {
        let fallback = CompatibilityBreakdown::fallback();
        assert_eq!(fallback.overall, FALLBACK_OVERALL);
        assert!(!fallback.is_basically_compatible());
    }
}
