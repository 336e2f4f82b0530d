//! Education-level ordinals for the education dimension.

/// Maps a stated education level to an ordinal rung (1 = high school,
/// 5 = doctorate). Free-text input, so common spellings are accepted;
/// anything else is unrecognized and scored neutrally by the caller.
pub fn education_ordinal(level: &str) -> Option<u8> {
    let folded = level.trim().to_lowercase();
    let ordinal = match folded.as_str() {
        "high school" | "higher secondary" | "secondary school" | "10th" | "12th" => 1,
        "diploma" | "associate degree" | "iti" => 2,
        "bachelor's degree" | "bachelors degree" | "bachelor degree" | "graduate" | "b.tech"
        | "b.e." | "b.com" | "b.sc" => 3,
        "master's degree" | "masters degree" | "master degree" | "post graduate"
        | "postgraduate" | "m.tech" | "mba" | "m.sc" => 4,
        "phd" | "ph.d" | "ph.d." | "doctorate" => 5,
        _ => return None,
    };
    Some(ordinal)
}
