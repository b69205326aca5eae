use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use thiserror::Error;

/// Layouts accepted for naive timestamps, tried in order
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Display style for show start times
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// e.g. `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// e.g. `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

impl FormatStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Full => "%A %B, %-d, %Y at %-I:%M%p",
            Self::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

impl FromStr for FormatStyle {
    type Err = UnknownFormatStyle;

    fn from_str(style: &str) -> Result<Self, Self::Err> {
        match style.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "medium" => Ok(Self::Medium),
            _ => Err(UnknownFormatStyle(style.to_owned())),
        }
    }
}

impl Display for FormatStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Full => write!(f, "full"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown datetime format style `{0}`")]
pub struct UnknownFormatStyle(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse `{0}` as a timestamp")]
pub struct TimestampParseError(pub String);

/// Renders a timestamp in English using the given style
pub fn format_datetime(value: NaiveDateTime, style: FormatStyle) -> String {
    value.format(style.pattern()).to_string()
}

/// Parses a serialized timestamp, then renders it
pub fn format_datetime_str(value: &str, style: FormatStyle) -> Result<String, TimestampParseError> {
    parse_timestamp(value).map(|ts| format_datetime(ts, style))
}

/// Parses the string forms a start time arrives in: store serializations,
/// `datetime-local` form inputs, RFC 3339 (normalised to UTC) and bare dates
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampParseError> {
    let value = value.trim();

    for layout in NAIVE_LAYOUTS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, layout) {
            return Ok(ts);
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.naive_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| TimestampParseError(value.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_full_and_medium_styles() {
        let full = format_datetime(sample(), FormatStyle::Full);
        let medium = format_datetime(sample(), FormatStyle::Medium);

        assert_eq!(full, "Tuesday May, 21, 2019 at 9:30PM");
        assert_eq!(medium, "Tue 05, 21, 2019 9:30PM");
        assert_ne!(full, medium);
    }

    #[test]
    fn test_default_style_is_medium() {
        assert_eq!(FormatStyle::default(), FormatStyle::Medium);
    }

    #[test]
    fn test_morning_hours_use_am() {
        let ts = NaiveDate::from_ymd_opt(2035, 4, 1)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_datetime(ts, FormatStyle::Medium), "Sun 04, 01, 2035 9:05AM");
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("full".parse::<FormatStyle>().unwrap(), FormatStyle::Full);
        assert_eq!(" Medium ".parse::<FormatStyle>().unwrap(), FormatStyle::Medium);
        assert!("short".parse::<FormatStyle>().is_err());
    }

    #[test]
    fn test_parse_timestamp_forms() {
        for raw in [
            "2019-05-21 21:30:00",
            "2019-05-21T21:30:00",
            "2019-05-21 21:30:00.000",
            "2019-05-21 21:30",
            "2019-05-21T21:30",
            "2019-05-21T21:30:00Z",
            "2019-05-21T23:30:00+02:00",
        ] {
            assert_eq!(parse_timestamp(raw).unwrap(), sample(), "input: {raw}");
        }

        let midnight = parse_timestamp("2019-05-21").unwrap();
        assert_eq!(midnight, sample().date().and_time(NaiveTime::MIN));

        assert!(parse_timestamp("next tuesday").is_err());
    }

    #[test]
    fn test_format_datetime_str_round_trip() {
        let rendered = format_datetime_str(&sample().to_string(), FormatStyle::Full).unwrap();
        assert_eq!(rendered, format_datetime(sample(), FormatStyle::Full));
    }
}
