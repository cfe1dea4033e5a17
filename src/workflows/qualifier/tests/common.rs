use crate::workflows::qualifier::domain::{ApplicantProfile, OfferRecord, OfferTable};

pub(super) fn offer(
    lender: &str,
    max_loan_amount: f64,
    max_loan_to_value: f64,
    max_debt_to_income: f64,
    min_credit_score: u16,
) -> OfferRecord {
    OfferRecord {
        lender: lender.to_string(),
        max_loan_amount,
        max_loan_to_value,
        max_debt_to_income,
        min_credit_score,
        interest_rate: 0.045,
    }
}

pub(super) fn header() -> Vec<String> {
    [
        "Lender",
        "Max Loan Amount",
        "Max LTV",
        "Max DTI",
        "Min Credit Score",
        "Interest Rate",
    ]
    .iter()
    .map(|column| column.to_string())
    .collect()
}

pub(super) fn table(offers: Vec<OfferRecord>) -> OfferTable {
    OfferTable::new(header(), offers)
}

/// Single offer used by the reference scenarios.
pub(super) fn reference_offer() -> OfferRecord {
    offer("Bank of Reference", 500_000.0, 0.80, 0.40, 640)
}

pub(super) fn applicant(credit_score: u16) -> ApplicantProfile {
    ApplicantProfile::new(credit_score, 400.0, 4_000.0, 300_000.0, 400_000.0)
        .expect("valid applicant")
}

pub(super) fn mixed_offers() -> Vec<OfferRecord> {
    vec![
        offer("Small Loans Co", 100_000.0, 0.90, 0.50, 600),
        offer("Prime Mortgage", 500_000.0, 0.85, 0.45, 650),
        offer("Strict Credit Union", 600_000.0, 0.85, 0.45, 760),
        offer("Low DTI Bank", 600_000.0, 0.85, 0.05, 600),
        offer("Conservative LTV", 600_000.0, 0.60, 0.45, 600),
        offer("Everyone Welcome", 900_000.0, 0.95, 0.60, 500),
    ]
}
