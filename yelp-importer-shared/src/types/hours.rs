use chrono::NaiveTime;

use crate::types::RecordError;

/// One opening-hours row, derived by splitting a single `"open-close"` range
/// string for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub business_id: String,
    pub day_of_week: String,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl OpeningHours {
    /// Builds the row for one day's range string (`"8:0-17:0"`). The source
    /// does not zero-pad hours or minutes.
    pub fn from_day(business_id: &str, day: &str, range: &str) -> Result<Self, RecordError> {
        let Some((open, close)) = range.split_once('-') else {
            return Err(RecordError::MalformedHoursRange(range.to_string()));
        };
        Ok(OpeningHours {
            business_id: business_id.to_string(),
            day_of_week: day.to_string(),
            open_time: parse_clock(open)?,
            close_time: parse_clock(close)?,
        })
    }
}

fn parse_clock(raw: &str) -> Result<NaiveTime, RecordError> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| RecordError::InvalidTime(raw.to_string()))
}
