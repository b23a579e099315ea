use chrono::NaiveDateTime;

use crate::sanitize::clean_text;
use crate::types::{parse_timestamp, RecordError, TipRecord};

/// One row of the Tip table. Uniqueness is (user, business, timestamp); the
/// schema declares it so the full-row conflict no-op is effective.
#[derive(Debug, Clone, PartialEq)]
pub struct Tip {
    pub user_id: String,
    pub business_id: String,
    pub tipped_at: NaiveDateTime,
    pub likes: i32,
    pub text: String,
}

impl TryFrom<&TipRecord> for Tip {
    type Error = RecordError;

    fn try_from(record: &TipRecord) -> Result<Self, Self::Error> {
        Ok(Tip {
            user_id: record.user_id.clone(),
            business_id: record.business_id.clone(),
            tipped_at: parse_timestamp(&record.date)?,
            likes: record.likes,
            text: clean_text(&record.text),
        })
    }
}
