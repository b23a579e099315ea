use std::path::Path;

use tracing::warn;
use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{BusinessRecord, OpeningHours};

use crate::errors::LoaderError;
use crate::loader::{flush, PassReport};
use crate::source::JsonSource;

/// Populates the Hours table from the business dump, one row per day
/// present in a record's day→range map. A malformed range skips that day
/// only.
pub async fn load_hours(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("hours");
    let mut batch: Vec<OpeningHours> = Vec::with_capacity(batch_size);
    for record in JsonSource::<BusinessRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        for (day, range) in record.hours.iter().flatten() {
            match OpeningHours::from_day(&record.business_id, day, range) {
                Ok(row) => batch.push(row),
                Err(error) => {
                    warn!(business_id = %record.business_id, day = %day, %error, "skipping hours row");
                    report.rows_skipped += 1;
                }
            }
        }
        if batch.len() >= batch_size {
            flush_hours(&mut batch, &mut report, repository).await;
        }
    }
    flush_hours(&mut batch, &mut report, repository).await;
    Ok(report)
}

async fn flush_hours(
    batch: &mut Vec<OpeningHours>,
    report: &mut PassReport,
    repository: &dyn ImportRepository,
) {
    flush(
        batch,
        report,
        |row| format!("{}:{}", row.business_id, row.day_of_week),
        async |rows| repository.insert_hours(rows).await,
    )
    .await;
}
