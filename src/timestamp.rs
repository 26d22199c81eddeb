//! Timestamp normalization for Robot Framework start/end times.
//!
//! Robot writes naive wall-clock times; they are interpreted in the local
//! timezone, the same way the run itself recorded them.
use chrono::{Duration, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone};

/// Accepted layouts, tried in order. The first successful parse wins.
const TIME_FORMATS: [&str; 4] = [
    "%Y%m%d %H:%M:%S%.f",
    "%Y%m%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a Robot timestamp into epoch milliseconds.
///
/// Returns `None` for absent, empty, or unrecognized input; callers omit the
/// corresponding field instead of failing.
pub fn parse_time_ms(value: Option<&str>) -> Option<i64> {
    let value = value.filter(|value| !value.is_empty())?;
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .and_then(local_epoch_ms)
}

fn local_epoch_ms(naive: NaiveDateTime) -> Option<i64> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(time) => Some(time.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp_millis()),
        LocalResult::None => {
            // Skipped by a DST jump: apply the offset in force a day earlier,
            // whatever the width of the gap.
            let before = naive.checked_sub_signed(Duration::days(1))?;
            let offset = Local.from_local_datetime(&before).earliest()?.offset().fix();
            Some(epoch_ms_with_offset(naive, offset))
        }
    }
}

fn epoch_ms_with_offset(naive: NaiveDateTime, offset: FixedOffset) -> i64 {
    naive.and_utc().timestamp_millis() - i64::from(offset.local_minus_utc()) * 1000
}
