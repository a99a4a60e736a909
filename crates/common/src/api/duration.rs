//! Durations as the cluster transmits them.
//!
//! Duration fields arrive either as ISO-8601 durations (`PT1H30M`) or as a
//! string holding a total count of milliseconds (`5400000`). Parsing tries the
//! ISO-8601 form first and falls back to milliseconds. Values are always sent
//! back in canonical ISO-8601 form.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
const SECS_PER_WEEK: u64 = 7 * SECS_PER_DAY;

/// Error returned when a duration string matches neither accepted format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    /// The input was empty or only whitespace.
    #[error("duration is empty")]
    Empty,
    /// The input was not ISO-8601 and not a millisecond count.
    #[error("'{0}' is neither an ISO-8601 duration nor a count of milliseconds")]
    Invalid(String),
    /// Years and months have no fixed length and are refused.
    #[error("duration '{0}' uses years or months, which have no fixed length")]
    Ambiguous(String),
    /// The value does not fit in a `std::time::Duration`.
    #[error("duration '{0}' is too large")]
    Overflow(String),
}

/// A non-negative duration accepted in either wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FabricDuration(pub Duration);

impl FabricDuration {
    /// Builds a duration from whole seconds.
    pub const fn from_secs(secs: u64) -> Self {
        FabricDuration(Duration::from_secs(secs))
    }

    /// Builds a duration from milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        FabricDuration(Duration::from_millis(millis))
    }

    /// Returns the wrapped standard duration.
    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    /// Parses either wire format: ISO-8601 first, then total milliseconds.
    pub fn parse(input: &str) -> Result<Self, DurationParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DurationParseError::Empty);
        }
        match parse_iso8601(trimmed) {
            Ok(duration) => Ok(FabricDuration(duration)),
            Err(iso_err) => match trimmed.parse::<u64>() {
                Ok(millis) => Ok(FabricDuration::from_millis(millis)),
                Err(_) => Err(match iso_err {
                    DurationParseError::Ambiguous(_) | DurationParseError::Overflow(_) => iso_err,
                    _ => DurationParseError::Invalid(trimmed.to_string()),
                }),
            },
        }
    }

    /// Renders the canonical ISO-8601 form, e.g. `P1DT2H3M4.5S`.
    pub fn to_iso8601(&self) -> String {
        let total = self.0.as_secs();
        let nanos = self.0.subsec_nanos();
        if total == 0 && nanos == 0 {
            return "PT0S".to_string();
        }

        let days = total / SECS_PER_DAY;
        let hours = (total % SECS_PER_DAY) / SECS_PER_HOUR;
        let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = total % SECS_PER_MINUTE;

        let mut out = String::from("P");
        if days > 0 {
            out.push_str(&format!("{days}D"));
        }
        if hours > 0 || minutes > 0 || seconds > 0 || nanos > 0 {
            out.push('T');
            if hours > 0 {
                out.push_str(&format!("{hours}H"));
            }
            if minutes > 0 {
                out.push_str(&format!("{minutes}M"));
            }
            if seconds > 0 || nanos > 0 {
                if nanos > 0 {
                    let frac = format!("{nanos:09}");
                    out.push_str(&format!("{seconds}.{}S", frac.trim_end_matches('0')));
                } else {
                    out.push_str(&format!("{seconds}S"));
                }
            }
        }
        out
    }
}

impl From<Duration> for FabricDuration {
    fn from(value: Duration) -> Self {
        FabricDuration(value)
    }
}

impl From<FabricDuration> for Duration {
    fn from(value: FabricDuration) -> Self {
        value.0
    }
}

impl FromStr for FabricDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FabricDuration::parse(s)
    }
}

impl fmt::Display for FabricDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for FabricDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for FabricDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FabricDurationVisitor)
    }
}

struct FabricDurationVisitor;

impl<'de> Visitor<'de> for FabricDurationVisitor {
    type Value = FabricDuration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 duration or a count of milliseconds")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        FabricDuration::parse(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(FabricDuration::from_millis(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(FabricDuration::from_millis)
            .map_err(|_| E::custom(format!("duration cannot be negative: {value}")))
    }
}

fn parse_iso8601(input: &str) -> Result<Duration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(input.to_string());
    let body = input.strip_prefix('P').ok_or_else(invalid)?;
    if body.is_empty() {
        return Err(invalid());
    }

    let mut total_secs: u64 = 0;
    let mut nanos: u32 = 0;
    let mut in_time = false;
    let mut seen_component = false;
    let mut seen_time_component = false;
    // Components must appear in W, D, H, M, S order, each at most once.
    let mut last_rank = 0u8;
    let mut seconds_done = false;
    let mut number = String::new();

    for ch in body.chars() {
        match ch {
            '0'..='9' | '.' => {
                if seconds_done {
                    return Err(invalid());
                }
                number.push(ch);
            }
            'T' => {
                if in_time || !number.is_empty() {
                    return Err(invalid());
                }
                in_time = true;
            }
            'Y' => return Err(DurationParseError::Ambiguous(input.to_string())),
            'M' if !in_time => return Err(DurationParseError::Ambiguous(input.to_string())),
            'W' | 'D' | 'H' | 'M' => {
                if number.is_empty() || number.contains('.') {
                    return Err(invalid());
                }
                let value: u64 = number.parse().map_err(|_| invalid())?;
                let (unit, rank) = match ch {
                    'W' if !in_time => (SECS_PER_WEEK, 1),
                    'D' if !in_time => (SECS_PER_DAY, 2),
                    'H' if in_time => (SECS_PER_HOUR, 3),
                    'M' => (SECS_PER_MINUTE, 4),
                    _ => return Err(invalid()),
                };
                if rank <= last_rank {
                    return Err(invalid());
                }
                last_rank = rank;
                seen_time_component |= in_time;
                let add = value
                    .checked_mul(unit)
                    .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?;
                total_secs = total_secs
                    .checked_add(add)
                    .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?;
                number.clear();
                seen_component = true;
            }
            'S' => {
                if !in_time || number.is_empty() {
                    return Err(invalid());
                }
                let (whole, frac) = match number.split_once('.') {
                    Some((whole, frac)) => (whole, frac),
                    None => (number.as_str(), ""),
                };
                if whole.is_empty() && frac.is_empty() {
                    return Err(invalid());
                }
                let secs: u64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                nanos = parse_fraction_nanos(frac).ok_or_else(invalid)?;
                total_secs = total_secs
                    .checked_add(secs)
                    .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?;
                number.clear();
                seen_component = true;
                seen_time_component = true;
                seconds_done = true;
            }
            _ => return Err(invalid()),
        }
    }

    if !number.is_empty() || !seen_component || (in_time && !seen_time_component) {
        return Err(invalid());
    }
    Ok(Duration::new(total_secs, nanos))
}

fn parse_fraction_nanos(frac: &str) -> Option<u32> {
    if frac.is_empty() {
        return Some(0);
    }
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits: String = frac.chars().take(9).collect();
    let scale = 10u32.pow(9 - digits.len() as u32);
    digits.parse::<u32>().ok().map(|value| value * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_iso8601_first() {
        let parsed = FabricDuration::parse("PT1H2M3.5S").expect("iso duration");
        assert_eq!(parsed.as_duration(), Duration::from_millis(3_723_500));

        let parsed = FabricDuration::parse("P1DT2H").expect("iso duration with days");
        assert_eq!(parsed.as_duration(), Duration::from_secs(26 * 3600));

        let parsed = FabricDuration::parse("P2W").expect("weeks");
        assert_eq!(parsed.as_duration(), Duration::from_secs(14 * SECS_PER_DAY));
    }

    #[test]
    fn falls_back_to_milliseconds() {
        let parsed = FabricDuration::parse("120000").expect("millis");
        assert_eq!(parsed.as_duration(), Duration::from_secs(120));
    }

    #[test]
    fn rejects_months_and_garbage() {
        assert!(matches!(
            FabricDuration::parse("P1M"),
            Err(DurationParseError::Ambiguous(_))
        ));
        assert!(matches!(
            FabricDuration::parse("abc"),
            Err(DurationParseError::Invalid(_))
        ));
        assert!(matches!(
            FabricDuration::parse("  "),
            Err(DurationParseError::Empty)
        ));
        assert!(FabricDuration::parse("PT").is_err());
        assert!(FabricDuration::parse("PT5").is_err());
        assert!(FabricDuration::parse("P1H").is_err());
        assert!(FabricDuration::parse("-5").is_err());
    }

    #[test]
    fn rejects_dangling_time_marker_and_out_of_order_units() {
        for raw in ["P1DT", "P2WT", "PT1M2H", "PT5S1M", "P1D2W", "PT1H2H", "P1DT1H1H"] {
            assert!(
                matches!(FabricDuration::parse(raw), Err(DurationParseError::Invalid(_))),
                "{raw} should be rejected"
            );
        }
        assert_eq!(
            FabricDuration::parse("P1W2DT3H4M5S")
                .expect("every unit in order")
                .as_duration(),
            Duration::from_secs(
                SECS_PER_WEEK + 2 * SECS_PER_DAY + 3 * SECS_PER_HOUR + 4 * SECS_PER_MINUTE + 5
            )
        );
    }

    #[test]
    fn renders_canonical_iso8601() {
        assert_eq!(FabricDuration::default().to_string(), "PT0S");
        assert_eq!(FabricDuration::from_secs(90).to_string(), "PT1M30S");
        assert_eq!(FabricDuration::from_millis(1500).to_string(), "PT1.5S");
        assert_eq!(
            FabricDuration::from_secs(SECS_PER_DAY + 7200).to_string(),
            "P1DT2H"
        );
    }

    #[test]
    fn serde_accepts_strings_and_numbers() {
        let from_iso: FabricDuration = serde_json::from_value(json!("PT10M")).expect("iso");
        assert_eq!(from_iso, FabricDuration::from_secs(600));

        let from_text_millis: FabricDuration =
            serde_json::from_value(json!("600000")).expect("millis string");
        assert_eq!(from_text_millis, from_iso);

        let from_number: FabricDuration = serde_json::from_value(json!(600000)).expect("number");
        assert_eq!(from_number, from_iso);

        assert_eq!(serde_json::to_value(from_iso).expect("encode"), json!("PT10M"));
    }
}
