use super::domain::{ApplicantProfile, DerivedRatios, OfferRecord, OfferTable};
use super::filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
    QualificationFilter,
};
use serde::Serialize;
use tracing::debug;

/// Runs the four qualification filters over a loaded rate sheet.
///
/// The filter order is fixed (loan size, credit score, debt to income, loan
/// to value) so stage tallies are reproducible between runs.
pub struct QualificationPipeline<'a> {
    table: &'a OfferTable,
}

impl<'a> QualificationPipeline<'a> {
    pub fn new(table: &'a OfferTable) -> Self {
        Self { table }
    }

    pub fn run(&self, applicant: &ApplicantProfile) -> QualificationOutcome {
        let ratios = DerivedRatios::from_profile(applicant);
        debug!(
            offers = self.table.len(),
            monthly_debt_ratio = ratios.monthly_debt_ratio,
            loan_to_value_ratio = ratios.loan_to_value_ratio,
            "starting qualification"
        );

        let mut stages = Vec::with_capacity(4);

        let remaining = filter_max_loan_size(applicant.loan_amount(), self.table.offers());
        record_stage(&mut stages, QualificationFilter::MaxLoanSize, &remaining);

        let remaining = filter_credit_score(applicant.credit_score(), &remaining);
        record_stage(&mut stages, QualificationFilter::CreditScore, &remaining);

        let remaining = filter_debt_to_income(ratios.monthly_debt_ratio, &remaining);
        record_stage(&mut stages, QualificationFilter::DebtToIncome, &remaining);

        let remaining = filter_loan_to_value(ratios.loan_to_value_ratio, &remaining);
        record_stage(&mut stages, QualificationFilter::LoanToValue, &remaining);

        QualificationOutcome {
            ratios,
            stages,
            qualifying: remaining,
        }
    }
}

fn record_stage(
    stages: &mut Vec<StageTally>,
    filter: QualificationFilter,
    remaining: &[OfferRecord],
) {
    debug!(stage = filter.label(), remaining = remaining.len(), "filter applied");
    stages.push(StageTally {
        filter,
        remaining: remaining.len(),
    });
}

/// Number of offers still standing after a filter ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageTally {
    pub filter: QualificationFilter,
    pub remaining: usize,
}

/// Result of a qualification run. An empty qualifying set is a valid outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualificationOutcome {
    pub ratios: DerivedRatios,
    pub stages: Vec<StageTally>,
    pub qualifying: Vec<OfferRecord>,
}

impl QualificationOutcome {
    pub fn len(&self) -> usize {
        self.qualifying.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualifying.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Found {} qualifying loans", self.qualifying.len())
    }

    /// First filter that left no offers standing, if any.
    pub fn eliminated_by(&self) -> Option<QualificationFilter> {
        self.stages
            .iter()
            .find(|stage| stage.remaining == 0)
            .map(|stage| stage.filter)
    }
}

/// Convenience wrapper running the pipeline once.
pub fn find_qualifying_loans(
    table: &OfferTable,
    applicant: &ApplicantProfile,
) -> QualificationOutcome {
    QualificationPipeline::new(table).run(applicant)
}
