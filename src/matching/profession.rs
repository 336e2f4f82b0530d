//! Profession affinity groups for the profession dimension.
//!
//! Two different professions in the same group score higher than two
//! unrelated ones; the groups are a fixed product-defined table, not learned.

const AFFINITY_GROUPS: &[(&str, &[&str])] = &[
    (
        "tech",
        &[
            "software engineer",
            "it professional",
            "data scientist",
            "systems engineer",
            "web developer",
            "network engineer",
            "devops engineer",
        ],
    ),
    (
        "medical",
        &[
            "doctor",
            "surgeon",
            "dentist",
            "nurse",
            "pharmacist",
            "physiotherapist",
        ],
    ),
    (
        "business",
        &[
            "business owner",
            "entrepreneur",
            "manager",
            "accountant",
            "banker",
            "financial analyst",
        ],
    ),
    (
        "education",
        &["teacher", "professor", "lecturer", "principal", "tutor"],
    ),
];

/// The affinity group a profession belongs to, if any.
pub fn affinity_group(profession: &str) -> Option<&'static str> {
    let folded = profession.trim().to_lowercase();
    AFFINITY_GROUPS
        .iter()
        .find(|(_, members)| members.contains(&folded.as_str()))
        .map(|(name, _)| *name)
}

pub fn same_affinity_group(a: &str, b: &str) -> bool {
    match (affinity_group(a), affinity_group(b)) {
        (Some(ga), Some(gb)) => ga == gb,
        _ => false,
    }
}
