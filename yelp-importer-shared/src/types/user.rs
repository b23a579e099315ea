use chrono::NaiveDateTime;

use crate::sanitize::clean_text;
use crate::types::{parse_timestamp, RecordError, UserRecord};

/// One row of the YelpUser table.
#[derive(Debug, Clone, PartialEq)]
pub struct YelpUser {
    pub user_id: String,
    pub name: String,
    pub yelping_since: NaiveDateTime,
    pub tip_count: i32,
    pub fans: i32,
    pub average_stars: f64,
    pub funny: i32,
    pub useful: i32,
    pub cool: i32,
}

impl TryFrom<&UserRecord> for YelpUser {
    type Error = RecordError;

    fn try_from(record: &UserRecord) -> Result<Self, Self::Error> {
        Ok(YelpUser {
            user_id: record.user_id.clone(),
            name: clean_text(&record.name),
            yelping_since: parse_timestamp(&record.yelping_since)?,
            tip_count: record.tip_count,
            fans: record.fans,
            average_stars: record.average_stars,
            funny: record.funny,
            useful: record.useful,
            cool: record.cool,
        })
    }
}
