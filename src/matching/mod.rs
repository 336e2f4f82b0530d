pub mod education;
pub mod location;
pub mod pipeline;
pub mod profession;
pub mod scoring;
pub mod weights;

/// Case-insensitive, whitespace-trimmed comparison for free-text fields
/// (religion, caste, city names, diet). All dimension comparisons go through
/// this so "Hindu" and " hindu " agree.
pub(crate) fn fold_eq(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
