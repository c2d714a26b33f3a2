//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// en-US long form: `Jan 05, 2023, 02:07:09 PM`.
const RECORD_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day], [year], [hour repr:12]:[minute]:[second] [period]");

/// Format a record timestamp in UTC.
#[must_use]
pub fn format_date(date: OffsetDateTime) -> String {
    date.to_offset(UtcOffset::UTC)
        .format(RECORD_DATE_FORMAT)
        .unwrap_or_default()
}
