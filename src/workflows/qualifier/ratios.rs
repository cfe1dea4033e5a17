use super::domain::{ApplicantProfile, DerivedRatios};

/// Monthly debt payments divided by monthly income.
///
/// `monthly_income` must be positive; [`ApplicantProfile::new`] enforces this
/// before any ratio is computed.
pub fn monthly_debt_ratio(monthly_debt: f64, monthly_income: f64) -> f64 {
    monthly_debt / monthly_income
}

/// Requested loan amount divided by home value.
pub fn loan_to_value_ratio(loan_amount: f64, home_value: f64) -> f64 {
    loan_amount / home_value
}

impl DerivedRatios {
    pub fn from_profile(profile: &ApplicantProfile) -> Self {
        Self {
            monthly_debt_ratio: monthly_debt_ratio(
                profile.monthly_debt(),
                profile.monthly_income(),
            ),
            loan_to_value_ratio: loan_to_value_ratio(profile.loan_amount(), profile.home_value()),
        }
    }
}
