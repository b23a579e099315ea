use std::path::Path;

use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{Business, BusinessRecord};

use crate::errors::LoaderError;
use crate::loader::{flush, PassReport};
use crate::source::JsonSource;

/// Populates the Business table from the business dump, one row per line.
/// Duplicate business ids are skipped by the repository's conflict no-op.
pub async fn load_businesses(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("business");
    let mut batch: Vec<Business> = Vec::with_capacity(batch_size);
    for record in JsonSource::<BusinessRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        batch.push(Business::from(&record));
        if batch.len() >= batch_size {
            flush(
                &mut batch,
                &mut report,
                |row| row.business_id.clone(),
                async |rows| repository.insert_businesses(rows).await,
            )
            .await;
        }
    }
    flush(
        &mut batch,
        &mut report,
        |row| row.business_id.clone(),
        async |rows| repository.insert_businesses(rows).await,
    )
    .await;
    Ok(report)
}
