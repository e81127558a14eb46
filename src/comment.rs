use chrono::NaiveDateTime;

use crate::error::Error;

const TIMESTAMP_FORMAT: &str = "%m/%d/%Y-%H:%M:%S";

/// Audit string recorded with the change batch, documenting when the change
/// was sent in and which addresses were involved.
pub fn format_comment(previous: &str, new: &str, timestamp: NaiveDateTime) -> Result<String, Error> {
    if previous.is_empty() || new.is_empty() {
        return Err(Error::Format(format!(
            "missing address. previous={previous:?}, new={new:?}"
        )));
    }

    Ok(format!(
        "Updated IP from {previous} to {new} on {}",
        timestamp.format(TIMESTAMP_FORMAT)
    ))
}
