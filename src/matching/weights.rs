/// Compatibility dimension weights. The scoring policy lives here, injected
/// into the scorer at construction so it stays auditable in one place.
/// The default table must sum to 100.
#[derive(Debug, Clone, Copy)]
pub struct DimensionWeights {
    pub religion: f64,
    pub caste: f64,
    pub education: f64,
    pub profession: f64,
    pub income: f64,
    pub age: f64,
    pub location: f64,
    pub lifestyle: f64,
}

pub const DEFAULT_DIMENSION_WEIGHTS: DimensionWeights = DimensionWeights {
    religion: 20.0,
    caste: 15.0,
    education: 15.0,
    profession: 10.0,
    income: 10.0,
    age: 15.0,
    location: 10.0,
    lifestyle: 5.0,
};

impl DimensionWeights {
    pub fn sum(&self) -> f64 {
        self.religion
            + self.caste
            + self.education
            + self.profession
            + self.income
            + self.age
            + self.location
            + self.lifestyle
    }
}
