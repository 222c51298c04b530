use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Normalizes timestamps to UTC. Observations are grouped by UTC calendar date,
/// so every timestamp entering a row goes through this conversion.
pub trait IntoUtcDateTime {
    fn into_utc(self) -> DateTime<Utc>;
}

/// Naive datetimes are taken to already be UTC wall time.
impl IntoUtcDateTime for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}

impl<Tz: TimeZone> IntoUtcDateTime for DateTime<Tz> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}
