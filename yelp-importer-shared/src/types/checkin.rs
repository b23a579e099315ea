use chrono::NaiveDateTime;

use crate::types::{parse_timestamp, RecordError};

/// One check-in row: one business at one timestamp, extracted from the
/// source's comma-joined timestamp list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkin {
    pub business_id: String,
    pub checked_in_at: NaiveDateTime,
}

impl Checkin {
    pub fn from_timestamp(business_id: &str, raw: &str) -> Result<Self, RecordError> {
        Ok(Checkin {
            business_id: business_id.to_string(),
            checked_in_at: parse_timestamp(raw)?,
        })
    }
}
