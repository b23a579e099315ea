use std::path::Path;

use tracing::warn;
use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{Tip, TipRecord};

use crate::errors::LoaderError;
use crate::loader::{flush, PassReport};
use crate::source::JsonSource;

/// Populates the Tip table from the tip dump, one row per line. Duplicates
/// on (user, business, timestamp) are skipped by the repository's conflict
/// no-op.
pub async fn load_tips(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("tip");
    let mut batch: Vec<Tip> = Vec::with_capacity(batch_size);
    for record in JsonSource::<TipRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        match Tip::try_from(&record) {
            Ok(tip) => batch.push(tip),
            Err(error) => {
                warn!(user_id = %record.user_id, business_id = %record.business_id, %error, "skipping tip row");
                report.rows_skipped += 1;
            }
        }
        if batch.len() >= batch_size {
            flush_tips(&mut batch, &mut report, repository).await;
        }
    }
    flush_tips(&mut batch, &mut report, repository).await;
    Ok(report)
}

async fn flush_tips(
    batch: &mut Vec<Tip>,
    report: &mut PassReport,
    repository: &dyn ImportRepository,
) {
    flush(
        batch,
        report,
        |tip| format!("{}:{}", tip.user_id, tip.business_id),
        async |tips| repository.insert_tips(tips).await,
    )
    .await;
}
