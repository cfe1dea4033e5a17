//! Loan qualification core: ratio calculation and the ordered filter chain.

pub mod domain;
pub mod filters;
pub mod pipeline;
pub mod ratios;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantError, ApplicantProfile, DerivedRatios, OfferRecord, OfferTable, RATE_SHEET_COLUMNS,
};
pub use filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
    QualificationFilter,
};
pub use pipeline::{find_qualifying_loans, QualificationOutcome, QualificationPipeline, StageTally};
pub use ratios::{loan_to_value_ratio, monthly_debt_ratio};
