use crate::workflows::qualifier::{OfferRecord, RATE_SHEET_COLUMNS};
use std::io::Read;

pub(crate) struct ParsedRateSheet {
    pub(crate) header: Vec<String>,
    pub(crate) offers: Vec<OfferRecord>,
}

/// Positional row layout of the rate sheet.
type RateSheetRow = (String, f64, f64, f64, u16, f64);

pub(crate) fn parse_rate_sheet<R: Read>(
    reader: R,
) -> Result<ParsedRateSheet, super::RateSheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(strip_bom)
        .collect();
    if header.len() != RATE_SHEET_COLUMNS {
        return Err(super::RateSheetError::ColumnCount {
            expected: RATE_SHEET_COLUMNS,
            found: header.len(),
        });
    }

    let mut offers = Vec::new();
    for row in csv_reader.deserialize::<RateSheetRow>() {
        offers.push(offer_from_row(row?));
    }

    Ok(ParsedRateSheet { header, offers })
}

fn offer_from_row(row: RateSheetRow) -> OfferRecord {
    let (
        lender,
        max_loan_amount,
        max_loan_to_value,
        max_debt_to_income,
        min_credit_score,
        interest_rate,
    ) = row;
    OfferRecord {
        lender,
        max_loan_amount,
        max_loan_to_value,
        max_debt_to_income,
        min_credit_score,
        interest_rate,
    }
}

fn strip_bom(value: &str) -> String {
    value.trim_start_matches('\u{feff}').to_string()
}
