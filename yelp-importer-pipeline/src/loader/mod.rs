//! The eight population passes of the load pipeline.
//!
//! Every loader follows the same protocol: stream its JSON source one line
//! at a time, expand each record into zero or more normalized rows, and
//! buffer the rows up to the configured batch size. A full buffer is flushed
//! through one repository batch call (one transaction). When a batch fails,
//! the rows are retried individually so a single bad row only ever skips
//! itself; committed batches are never rolled back by later failures.
use tracing::warn;
use yelp_importer_repository::ImportRepositoryError;

mod attribute;
mod business;
mod category;
mod checkin;
mod friendship;
mod hours;
mod tip;
mod user;

pub use attribute::load_business_attributes;
pub use business::load_businesses;
pub use category::load_business_categories;
pub use checkin::load_checkins;
pub use friendship::load_friendships;
pub use hours::load_hours;
pub use tip::load_tips;
pub use user::load_users;

/// Outcome counters for one pass, logged when the pass completes.
#[derive(Debug, Clone)]
pub struct PassReport {
    pub pass: &'static str,
    /// Source lines consumed, whether or not they expanded to rows.
    pub lines_read: u64,
    /// Rows handed to the repository in a committed batch or retry.
    pub rows_written: u64,
    /// Rows dropped by a conversion failure or a failed retry.
    pub rows_skipped: u64,
}

impl PassReport {
    pub(crate) fn new(pass: &'static str) -> Self {
        PassReport {
            pass,
            lines_read: 0,
            rows_written: 0,
            rows_skipped: 0,
        }
    }
}

/// Flushes the buffered rows through one batch insert, falling back to
/// row-local retries when the batch fails. The buffer is drained either way.
pub(crate) async fn flush<R>(
    batch: &mut Vec<R>,
    report: &mut PassReport,
    key: impl Fn(&R) -> String,
    insert: impl AsyncFn(&[R]) -> Result<(), ImportRepositoryError>,
) {
    if batch.is_empty() {
        return;
    }
    match insert(batch.as_slice()).await {
        Ok(()) => report.rows_written += batch.len() as u64,
        Err(error) => {
            warn!(
                pass = report.pass,
                rows = batch.len(),
                %error,
                "batch insert failed, retrying rows individually"
            );
            for row in batch.iter() {
                match insert(std::slice::from_ref(row)).await {
                    Ok(()) => report.rows_written += 1,
                    Err(error) => {
                        warn!(pass = report.pass, row = %key(row), %error, "row skipped");
                        report.rows_skipped += 1;
                    }
                }
            }
        }
    }
    batch.clear();
}

/// Collects the distinct lookup names referenced by a batch, in a stable
/// order, for the pre-step upsert into a lookup table.
pub(crate) fn distinct_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .map(str::to_owned)
        .collect::<std::collections::BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory repository double shared by the loader and driver tests.
    use std::sync::Mutex;

    use async_trait::async_trait;
    use yelp_importer_repository::{ImportRepository, ImportRepositoryError};
    use yelp_importer_shared::types::{
        AttributeValue, Business, CategoryLink, Checkin, Friendship, OpeningHours, Tip, YelpUser,
    };

    /// One recorded repository call: the method, the keys of the rows it
    /// carried, and whether it was accepted.
    #[derive(Debug, Clone)]
    pub(crate) struct Op {
        pub(crate) method: &'static str,
        pub(crate) keys: Vec<String>,
        pub(crate) ok: bool,
    }

    /// Records every call; rejects any call whose batch contains `fail_key`.
    pub(crate) struct MockRepository {
        pub(crate) ops: Mutex<Vec<Op>>,
        pub(crate) fail_key: Option<String>,
        pub(crate) tables_ready: bool,
    }

    impl MockRepository {
        pub(crate) fn new() -> Self {
            MockRepository {
                ops: Mutex::new(Vec::new()),
                fail_key: None,
                tables_ready: true,
            }
        }

        pub(crate) fn failing_on(key: &str) -> Self {
            MockRepository {
                fail_key: Some(key.to_string()),
                ..Self::new()
            }
        }

        fn record(
            &self,
            method: &'static str,
            keys: Vec<String>,
        ) -> Result<(), ImportRepositoryError> {
            let poisoned = self
                .fail_key
                .as_deref()
                .is_some_and(|bad| keys.iter().any(|key| key == bad));
            self.ops.lock().unwrap().push(Op {
                method,
                keys,
                ok: !poisoned,
            });
            if poisoned {
                return Err(ImportRepositoryError::DatabaseError(sqlx::Error::Protocol(
                    "poisoned row".to_string(),
                )));
            }
            Ok(())
        }

        /// Methods in call order.
        pub(crate) fn methods(&self) -> Vec<&'static str> {
            self.ops.lock().unwrap().iter().map(|op| op.method).collect()
        }

        /// Keys carried by accepted calls of `method`.
        pub(crate) fn written(&self, method: &str) -> Vec<String> {
            self.ops
                .lock()
                .unwrap()
                .iter()
                .filter(|op| op.ok && op.method == method)
                .flat_map(|op| op.keys.clone())
                .collect()
        }
    }

    #[async_trait]
    impl ImportRepository for MockRepository {
        async fn insert_businesses(
            &self,
            businesses: &[Business],
        ) -> Result<(), ImportRepositoryError> {
            let keys = businesses.iter().map(|b| b.business_id.clone()).collect();
            self.record("insert_businesses", keys)
        }

        async fn upsert_categories(
            &self,
            names: &[String],
        ) -> Result<(), ImportRepositoryError> {
            self.record("upsert_categories", names.to_vec())
        }

        async fn insert_business_categories(
            &self,
            links: &[CategoryLink],
        ) -> Result<(), ImportRepositoryError> {
            let keys = links
                .iter()
                .map(|link| format!("{}:{}", link.business_id, link.category_name))
                .collect();
            self.record("insert_business_categories", keys)
        }

        async fn upsert_attributes(
            &self,
            names: &[String],
        ) -> Result<(), ImportRepositoryError> {
            self.record("upsert_attributes", names.to_vec())
        }

        async fn insert_attribute_values(
            &self,
            values: &[AttributeValue],
        ) -> Result<(), ImportRepositoryError> {
            let keys = values
                .iter()
                .map(|value| format!("{}:{}", value.business_id, value.attribute_name))
                .collect();
            self.record("insert_attribute_values", keys)
        }

        async fn insert_hours(
            &self,
            hours: &[OpeningHours],
        ) -> Result<(), ImportRepositoryError> {
            let keys = hours
                .iter()
                .map(|row| format!("{}:{}", row.business_id, row.day_of_week))
                .collect();
            self.record("insert_hours", keys)
        }

        async fn insert_users(&self, users: &[YelpUser]) -> Result<(), ImportRepositoryError> {
            let keys = users.iter().map(|user| user.user_id.clone()).collect();
            self.record("insert_users", keys)
        }

        async fn insert_friendships(
            &self,
            friendships: &[Friendship],
        ) -> Result<(), ImportRepositoryError> {
            let keys = friendships
                .iter()
                .map(|edge| format!("{}->{}", edge.follower_id, edge.followee_id))
                .collect();
            self.record("insert_friendships", keys)
        }

        async fn insert_tips(&self, tips: &[Tip]) -> Result<(), ImportRepositoryError> {
            let keys = tips
                .iter()
                .map(|tip| format!("{}:{}", tip.user_id, tip.business_id))
                .collect();
            self.record("insert_tips", keys)
        }

        async fn insert_checkins(
            &self,
            checkins: &[Checkin],
        ) -> Result<(), ImportRepositoryError> {
            let keys = checkins
                .iter()
                .map(|checkin| format!("{}@{}", checkin.business_id, checkin.checked_in_at))
                .collect();
            self.record("insert_checkins", keys)
        }

        async fn check_tables_created(&self) -> Result<bool, ImportRepositoryError> {
            Ok(self.tables_ready)
        }
    }

    /// Writes an NDJSON fixture file into `dir` and returns its path.
    pub(crate) fn fixture(
        dir: &tempfile::TempDir,
        name: &str,
        lines: &[serde_json::Value],
    ) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let contents = lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(&path, contents).unwrap();
        path
    }
}
