use std::path::Path;

use tracing::warn;
use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{Checkin, CheckinRecord};

use crate::errors::LoaderError;
use crate::loader::{flush, PassReport};
use crate::source::JsonSource;

/// Populates the Checkin table from the check-in dump, one row per timestamp
/// in a record's comma-joined `date` listing. An unparseable timestamp skips
/// that row only.
pub async fn load_checkins(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("checkin");
    let mut batch: Vec<Checkin> = Vec::with_capacity(batch_size);
    for record in JsonSource::<CheckinRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        let timestamps = record.date.as_deref().unwrap_or("");
        for raw in timestamps.split(", ").filter(|entry| !entry.is_empty()) {
            match Checkin::from_timestamp(&record.business_id, raw) {
                Ok(checkin) => batch.push(checkin),
                Err(error) => {
                    warn!(business_id = %record.business_id, %error, "skipping check-in row");
                    report.rows_skipped += 1;
                }
            }
        }
        if batch.len() >= batch_size {
            flush_checkins(&mut batch, &mut report, repository).await;
        }
    }
    flush_checkins(&mut batch, &mut report, repository).await;
    Ok(report)
}

async fn flush_checkins(
    batch: &mut Vec<Checkin>,
    report: &mut PassReport,
    repository: &dyn ImportRepository,
) {
    flush(
        batch,
        report,
        |checkin| format!("{}@{}", checkin.business_id, checkin.checked_in_at),
        async |checkins| repository.insert_checkins(checkins).await,
    )
    .await;
}
