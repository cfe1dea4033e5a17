//! Threshold predicates applied to rate-sheet offers.
//!
//! Every filter keeps an offer when the applicant value is at least as
//! favorable as the lender threshold. Thresholds are inclusive and the
//! surviving offers keep their rate-sheet order.

use super::domain::OfferRecord;
use serde::Serialize;

/// Labels for the filters, listed in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationFilter {
    MaxLoanSize,
    CreditScore,
    DebtToIncome,
    LoanToValue,
}

impl QualificationFilter {
    pub const fn label(self) -> &'static str {
        match self {
            QualificationFilter::MaxLoanSize => "max loan size",
            QualificationFilter::CreditScore => "credit score",
            QualificationFilter::DebtToIncome => "debt to income",
            QualificationFilter::LoanToValue => "loan to value",
        }
    }
}

pub fn filter_max_loan_size(loan_amount: f64, offers: &[OfferRecord]) -> Vec<OfferRecord> {
    retain(offers, |offer| loan_amount <= offer.max_loan_amount)
}

pub fn filter_credit_score(credit_score: u16, offers: &[OfferRecord]) -> Vec<OfferRecord> {
    retain(offers, |offer| credit_score >= offer.min_credit_score)
}

pub fn filter_debt_to_income(monthly_debt_ratio: f64, offers: &[OfferRecord]) -> Vec<OfferRecord> {
    retain(offers, |offer| monthly_debt_ratio <= offer.max_debt_to_income)
}

pub fn filter_loan_to_value(loan_to_value_ratio: f64, offers: &[OfferRecord]) -> Vec<OfferRecord> {
    retain(offers, |offer| loan_to_value_ratio <= offer.max_loan_to_value)
}

fn retain<F>(offers: &[OfferRecord], keep: F) -> Vec<OfferRecord>
where
    F: Fn(&OfferRecord) -> bool,
{
    offers.iter().filter(|offer| keep(*offer)).cloned().collect()
}
