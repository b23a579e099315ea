use std::path::Path;

use yelp_importer_repository::ImportRepository;
use yelp_importer_shared::types::{AttributeValue, BusinessRecord};

use crate::errors::LoaderError;
use crate::loader::{distinct_names, flush, PassReport};
use crate::source::JsonSource;

/// Populates the Attribute lookup table and the BusinessAttributeValue table
/// from the business dump, one row per flattened (name, value) pair.
///
/// Like the category pass, each batch flush upserts the distinct attribute
/// names it references before inserting the value rows.
pub async fn load_business_attributes(
    path: &Path,
    repository: &dyn ImportRepository,
    batch_size: usize,
) -> Result<PassReport, LoaderError> {
    let mut report = PassReport::new("business_attribute_value");
    let mut batch: Vec<AttributeValue> = Vec::with_capacity(batch_size);
    for record in JsonSource::<BusinessRecord>::open(path)? {
        let record = record?;
        report.lines_read += 1;
        batch.extend(AttributeValue::expand(&record));
        if batch.len() >= batch_size {
            flush_values(&mut batch, &mut report, repository).await;
        }
    }
    flush_values(&mut batch, &mut report, repository).await;
    Ok(report)
}

async fn flush_values(
    batch: &mut Vec<AttributeValue>,
    report: &mut PassReport,
    repository: &dyn ImportRepository,
) {
    flush(
        batch,
        report,
        |value| format!("{}:{}", value.business_id, value.attribute_name),
        async |values| {
            let names = distinct_names(values.iter().map(|value| value.attribute_name.as_str()));
            repository.upsert_attributes(&names).await?;
            repository.insert_attribute_values(values).await
        },
    )
    .await;
}
