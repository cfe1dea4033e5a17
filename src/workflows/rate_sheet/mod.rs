mod parser;

use crate::workflows::qualifier::OfferTable;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub enum RateSheetError {
    NotFound { path: PathBuf },
    Io(std::io::Error),
    Csv(csv::Error),
    ColumnCount { expected: usize, found: usize },
}

impl std::fmt::Display for RateSheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateSheetError::NotFound { path } => {
                write!(f, "can't find this path: {}", path.display())
            }
            RateSheetError::Io(err) => write!(f, "failed to read rate sheet: {}", err),
            RateSheetError::Csv(err) => write!(f, "invalid rate sheet data: {}", err),
            RateSheetError::ColumnCount { expected, found } => write!(
                f,
                "rate sheet must have {} columns, found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for RateSheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RateSheetError::Io(err) => Some(err),
            RateSheetError::Csv(err) => Some(err),
            RateSheetError::NotFound { .. } | RateSheetError::ColumnCount { .. } => None,
        }
    }
}

impl From<std::io::Error> for RateSheetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RateSheetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads the lender rate sheet into an [`OfferTable`].
pub struct RateSheetLoader;

impl RateSheetLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OfferTable, RateSheetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RateSheetError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        info!(path = %path.display(), offers = table.len(), "rate sheet loaded");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<OfferTable, RateSheetError> {
        let parsed = parser::parse_rate_sheet(reader)?;
        Ok(OfferTable::new(parsed.header, parsed.offers))
    }
}
