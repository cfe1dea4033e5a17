/// Property-based tests for the qualification filters and ratios
use loan_qualifier::workflows::qualifier::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
    find_qualifying_loans, loan_to_value_ratio, monthly_debt_ratio, ApplicantProfile,
    OfferRecord, OfferTable,
};
use proptest::prelude::*;

fn offer_strategy() -> impl Strategy<Value = OfferRecord> {
    (
        "[A-Za-z ]{1,20}",
        10_000u32..2_000_000u32,
        1u32..100u32,
        1u32..100u32,
        300u16..=850u16,
        1u32..1_000u32,
    )
        .prop_map(|(lender, max_loan, ltv, dti, min_credit, rate)| OfferRecord {
            lender,
            max_loan_amount: f64::from(max_loan),
            max_loan_to_value: f64::from(ltv) / 100.0,
            max_debt_to_income: f64::from(dti) / 100.0,
            min_credit_score: min_credit,
            interest_rate: f64::from(rate) / 100.0,
        })
}

fn offers_strategy() -> impl Strategy<Value = Vec<OfferRecord>> {
    prop::collection::vec(offer_strategy(), 0..25)
}

#[derive(Debug, Clone, Copy)]
struct Inputs {
    credit_score: u16,
    debt: f64,
    income: f64,
    loan: f64,
    home_value: f64,
}

impl Inputs {
    fn profile(self) -> ApplicantProfile {
        ApplicantProfile::new(
            self.credit_score,
            self.debt,
            self.income,
            self.loan,
            self.home_value,
        )
        .expect("strategy produces valid applicants")
    }
}

fn inputs_strategy() -> impl Strategy<Value = Inputs> {
    (
        300u16..=850u16,
        0u32..10_000u32,
        1u32..20_000u32,
        1u32..1_500_000u32,
        1u32..2_000_000u32,
    )
        .prop_map(|(credit_score, debt, income, loan, home_value)| Inputs {
            credit_score,
            debt: f64::from(debt),
            income: f64::from(income),
            loan: f64::from(loan),
            home_value: f64::from(home_value),
        })
}

fn table(offers: Vec<OfferRecord>) -> OfferTable {
    OfferTable::new(Vec::new(), offers)
}

fn is_subsequence(needle: &[OfferRecord], haystack: &[OfferRecord]) -> bool {
    let mut rest = haystack.iter();
    needle
        .iter()
        .all(|wanted| rest.by_ref().any(|candidate| candidate == wanted))
}

proptest! {
    #[test]
    fn filters_are_idempotent(offers in offers_strategy(), inputs in inputs_strategy()) {
        let ratio = monthly_debt_ratio(inputs.debt, inputs.income);
        let ltv = loan_to_value_ratio(inputs.loan, inputs.home_value);

        let once = filter_max_loan_size(inputs.loan, &offers);
        prop_assert_eq!(filter_max_loan_size(inputs.loan, &once), once);

        let once = filter_credit_score(inputs.credit_score, &offers);
        prop_assert_eq!(filter_credit_score(inputs.credit_score, &once), once);

        let once = filter_debt_to_income(ratio, &offers);
        prop_assert_eq!(filter_debt_to_income(ratio, &once), once);

        let once = filter_loan_to_value(ltv, &offers);
        prop_assert_eq!(filter_loan_to_value(ltv, &once), once);
    }

    #[test]
    fn ratios_are_scale_invariant(
        numerator in 0u32..1_000_000u32,
        denominator in 1u32..1_000_000u32,
        factor in prop::sample::select(vec![2.0_f64, 4.0, 8.0, 0.5, 0.25]),
    ) {
        let numerator = f64::from(numerator);
        let denominator = f64::from(denominator);
        prop_assert_eq!(
            monthly_debt_ratio(numerator, denominator),
            monthly_debt_ratio(numerator * factor, denominator * factor)
        );
        prop_assert_eq!(
            loan_to_value_ratio(numerator, denominator),
            loan_to_value_ratio(numerator * factor, denominator * factor)
        );
    }

    #[test]
    fn qualifying_set_preserves_rate_sheet_order(
        offers in offers_strategy(),
        inputs in inputs_strategy(),
    ) {
        let table = table(offers);
        let outcome = find_qualifying_loans(&table, &inputs.profile());
        prop_assert!(is_subsequence(&outcome.qualifying, table.offers()));
        prop_assert_eq!(outcome.stages.len(), 4);
        prop_assert_eq!(outcome.stages[3].remaining, outcome.len());
    }

    #[test]
    fn less_favorable_inputs_never_add_offers(
        offers in offers_strategy(),
        inputs in inputs_strategy(),
        worse_credit in 0u16..100u16,
        extra_debt in 0u32..5_000u32,
        extra_loan in 0u32..500_000u32,
    ) {
        let table = table(offers);
        let baseline = find_qualifying_loans(&table, &inputs.profile()).len();

        let lower_credit = Inputs {
            credit_score: inputs.credit_score.saturating_sub(worse_credit),
            ..inputs
        };
        prop_assert!(find_qualifying_loans(&table, &lower_credit.profile()).len() <= baseline);

        let higher_debt = Inputs { debt: inputs.debt + f64::from(extra_debt), ..inputs };
        prop_assert!(find_qualifying_loans(&table, &higher_debt.profile()).len() <= baseline);

        let lower_income = Inputs { income: (inputs.income / 2.0).max(1.0), ..inputs };
        prop_assert!(find_qualifying_loans(&table, &lower_income.profile()).len() <= baseline);

        let bigger_loan = Inputs { loan: inputs.loan + f64::from(extra_loan), ..inputs };
        prop_assert!(find_qualifying_loans(&table, &bigger_loan.profile()).len() <= baseline);

        let cheaper_home = Inputs { home_value: (inputs.home_value / 2.0).max(1.0), ..inputs };
        prop_assert!(find_qualifying_loans(&table, &cheaper_home.profile()).len() <= baseline);
    }

    #[test]
    fn equal_thresholds_are_retained(offer in offer_strategy()) {
        let offers = vec![offer.clone()];
        prop_assert_eq!(filter_max_loan_size(offer.max_loan_amount, &offers).len(), 1);
        prop_assert_eq!(filter_credit_score(offer.min_credit_score, &offers).len(), 1);
        prop_assert_eq!(filter_debt_to_income(offer.max_debt_to_income, &offers).len(), 1);
        prop_assert_eq!(filter_loan_to_value(offer.max_loan_to_value, &offers).len(), 1);
    }
}
