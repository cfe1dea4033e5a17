use crate::workflows::qualifier::OfferRecord;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Controls the shape of exported qualifying-loan files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// Re-emit the rate-sheet header before the data rows.
    pub include_header: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write qualifying loans: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode qualifying loans as CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes qualifying offers as comma-delimited rows in rate-sheet column order.
pub struct QualifyingLoanExporter {
    options: ExportOptions,
}

impl QualifyingLoanExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn to_path<P: AsRef<Path>>(
        &self,
        path: P,
        header: &[String],
        offers: &[OfferRecord],
    ) -> Result<usize, ExportError> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let written = self.to_writer(file, header, offers)?;
        info!(path = %path.display(), rows = written, "qualifying loans saved");
        Ok(written)
    }

    /// Returns the number of data rows written.
    pub fn to_writer<W: Write>(
        &self,
        writer: W,
        header: &[String],
        offers: &[OfferRecord],
    ) -> Result<usize, ExportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        if self.options.include_header && !header.is_empty() {
            csv_writer.write_record(header)?;
        }

        for offer in offers {
            csv_writer.write_record(offer.to_row())?;
        }

        csv_writer.flush()?;
        Ok(offers.len())
    }
}
