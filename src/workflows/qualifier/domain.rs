use serde::{Deserialize, Serialize};

/// Number of columns every rate-sheet row carries.
pub const RATE_SHEET_COLUMNS: usize = 6;

/// One lender product as published on the daily rate sheet.
///
/// Field order matches the rate-sheet column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub lender: String,
    pub max_loan_amount: f64,
    pub max_loan_to_value: f64,
    pub max_debt_to_income: f64,
    pub min_credit_score: u16,
    pub interest_rate: f64,
}

impl OfferRecord {
    /// Render the offer as rate-sheet fields, numbers in their shortest form.
    pub fn to_row(&self) -> [String; RATE_SHEET_COLUMNS] {
        [
            self.lender.clone(),
            self.max_loan_amount.to_string(),
            self.max_loan_to_value.to_string(),
            self.max_debt_to_income.to_string(),
            self.min_credit_score.to_string(),
            self.interest_rate.to_string(),
        ]
    }
}

/// The loaded rate sheet: header row plus offers in file order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OfferTable {
    header: Vec<String>,
    offers: Vec<OfferRecord>,
}

impl OfferTable {
    pub fn new(header: Vec<String>, offers: Vec<OfferRecord>) -> Self {
        Self { header, offers }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn offers(&self) -> &[OfferRecord] {
        &self.offers
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

/// Validated applicant inputs for a single qualification run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplicantProfile {
    credit_score: u16,
    monthly_debt: f64,
    monthly_income: f64,
    loan_amount: f64,
    home_value: f64,
}

impl ApplicantProfile {
    /// Build a profile, rejecting values that would make the ratios meaningless.
    pub fn new(
        credit_score: u16,
        monthly_debt: f64,
        monthly_income: f64,
        loan_amount: f64,
        home_value: f64,
    ) -> Result<Self, ApplicantError> {
        require_finite("monthly debt", monthly_debt)?;
        require_finite("monthly income", monthly_income)?;
        require_finite("loan amount", loan_amount)?;
        require_finite("home value", home_value)?;

        if monthly_debt < 0.0 {
            return Err(ApplicantError::NegativeDebt(monthly_debt));
        }
        if monthly_income <= 0.0 {
            return Err(ApplicantError::NonPositive {
                field: "monthly income",
                value: monthly_income,
            });
        }
        if loan_amount <= 0.0 {
            return Err(ApplicantError::NonPositive {
                field: "loan amount",
                value: loan_amount,
            });
        }
        if home_value <= 0.0 {
            return Err(ApplicantError::NonPositive {
                field: "home value",
                value: home_value,
            });
        }

        Ok(Self {
            credit_score,
            monthly_debt,
            monthly_income,
            loan_amount,
            home_value,
        })
    }

    pub fn credit_score(&self) -> u16 {
        self.credit_score
    }

    pub fn monthly_debt(&self) -> f64 {
        self.monthly_debt
    }

    pub fn monthly_income(&self) -> f64 {
        self.monthly_income
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn home_value(&self) -> f64 {
        self.home_value
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ApplicantError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ApplicantError::NotFinite { field })
    }
}

/// Rejection reasons for applicant inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApplicantError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("monthly debt cannot be negative (got {0})")]
    NegativeDebt(f64),
}

/// Ratios derived once per run from the applicant profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedRatios {
    pub monthly_debt_ratio: f64,
    pub loan_to_value_ratio: f64,
}
