//! Activity lifetime tokens (`30-days`, `1-hour`, ...).

use std::str::FromStr;

use chrono::Duration;

/// How long an activity stays visible after it is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    ThirtyDays,
    SevenDays,
    ThreeDays,
    OneDay,
    TwelveHours,
    ThreeHours,
    OneHour,
}

impl Ttl {
    /// Every accepted token, longest lifetime first.
    pub const TOKENS: [&'static str; 7] = [
        "30-days", "7-days", "3-days", "1-day", "12-hours", "3-hours", "1-hour",
    ];

    pub fn duration(self) -> Duration {
        match self {
            Self::ThirtyDays => Duration::days(30),
            Self::SevenDays => Duration::days(7),
            Self::ThreeDays => Duration::days(3),
            Self::OneDay => Duration::days(1),
            Self::TwelveHours => Duration::hours(12),
            Self::ThreeHours => Duration::hours(3),
            Self::OneHour => Duration::hours(1),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized ttl {0:?}, expected one of {tokens}", tokens = Ttl::TOKENS.join(", "))]
pub struct UnknownTtl(pub String);

impl FromStr for Ttl {
    type Err = UnknownTtl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "30-days" => Ok(Self::ThirtyDays),
            "7-days" => Ok(Self::SevenDays),
            "3-days" => Ok(Self::ThreeDays),
            "1-day" => Ok(Self::OneDay),
            "12-hours" => Ok(Self::TwelveHours),
            "3-hours" => Ok(Self::ThreeHours),
            "1-hour" => Ok(Self::OneHour),
            other => Err(UnknownTtl(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_and_hour_tokens() {
        assert_eq!("30-days".parse::<Ttl>(), Ok(Ttl::ThirtyDays));
        assert_eq!("7-days".parse::<Ttl>(), Ok(Ttl::SevenDays));
        assert_eq!("3-days".parse::<Ttl>(), Ok(Ttl::ThreeDays));
        assert_eq!("1-day".parse::<Ttl>(), Ok(Ttl::OneDay));
        assert_eq!("12-hours".parse::<Ttl>(), Ok(Ttl::TwelveHours));
        assert_eq!("3-hours".parse::<Ttl>(), Ok(Ttl::ThreeHours));
        assert_eq!("1-hour".parse::<Ttl>(), Ok(Ttl::OneHour));
    }

    #[test]
    fn unknown_token_message_lists_accepted_tokens() {
        let err = "forever".parse::<Ttl>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized ttl \"forever\", expected one of 30-days, 7-days, 3-days, 1-day, 12-hours, 3-hours, 1-hour"
        );
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert!("1-Day".parse::<Ttl>().is_err());
    }

    #[test]
    fn bare_numbers_are_rejected() {
        assert_eq!("30".parse::<Ttl>(), Err(UnknownTtl("30".into())));
    }

    #[test]
    fn durations() {
        assert_eq!(Ttl::ThirtyDays.duration(), Duration::days(30));
        assert_eq!(Ttl::TwelveHours.duration(), Duration::hours(12));
    }
}
