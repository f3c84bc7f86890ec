/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All instants are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (token validity, event scheduling) carry no timezone.
///
/// "Today" is always computed server-side and passed down explicitly so the
/// persistence layer never reads ambient time.
pub type DayDate = chrono::NaiveDate;

/// Wall-clock start times for events.
pub type ClockTime = chrono::NaiveTime;
