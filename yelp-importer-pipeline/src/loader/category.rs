use std::path::Path;

use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{BusinessRecord, CategoryLink};

use crate::errors::LoaderError;
use crate::loader::{distinct_names, flush, PassReport};
use crate::source::JsonSource;

/// Populates the Category lookup table and the BusinessCategory link table
/// from the business dump.
///
/// Each batch flush upserts the distinct category names it references before
/// inserting the link rows, so every link finds its parent row. Link rows
/// carry no conflict policy: re-running this pass duplicates them.
pub async fn load_business_categories(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("business_category");
    let mut batch: Vec<CategoryLink> = Vec::with_capacity(batch_size);
    for record in JsonSource::<BusinessRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        batch.extend(CategoryLink::expand(&record));
        if batch.len() >= batch_size {
            flush_links(&mut batch, &mut report, repository).await;
        }
    }
    flush_links(&mut batch, &mut report, repository).await;
    Ok(report)
}

async fn flush_links(
    batch: &mut Vec<CategoryLink>,
    report: &mut PassReport,
    repository: &dyn ImportRepository,
) {
    flush(
        batch,
        report,
        |link| format!("{}:{}", link.business_id, link.category_name),
        async |links| {
            let names = distinct_names(links.iter().map(|link| link.category_name.as_str()));
            repository.upsert_categories(&names).await?;
            repository.insert_business_categories(links).await
        },
    )
    .await;
}
