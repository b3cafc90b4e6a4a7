use thiserror::Error;

/// Every failure the working-day engine can report.
#[derive(Debug, Error)]
pub enum WorkingDayError {
    /// Neither an override locator, the custom table, the built-in table
    /// nor the fallback identifier knows the requested culture.
    #[error("culture '{0}' is not supported")]
    UnsupportedCulture(String),

    /// A fixed or weekday-of-month rule has no date in the requested year.
    #[error("{month:02}-{day:02} is not a valid date in {year}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Easter Sunday is only defined from the first Gregorian year on.
    #[error("year {0} is outside the range of the Gregorian Easter computation")]
    YearOutOfRange(i32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonParse(#[from] serde_json::Error)
}

pub type Result<T, E = WorkingDayError> = std::result::Result<T, E>;

pub(crate) fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T>
    where T: for<'a> serde::Deserialize<'a> {
    Ok(serde_json::from_value(json_value)?)
}
