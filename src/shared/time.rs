const HOUR_TO_SEC: u32 = 60 * 60;
const MINUTE_TO_SEC: u32 = 60;

/// A GTFS clock value in seconds since the start of the service day.
///
/// Hours may be 24 or above, meaning the event happens after midnight
/// but still belongs to the same service day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u32);

impl Time {
    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Whole minutes since the start of the service day, seconds truncated.
    pub const fn as_minutes(&self) -> u32 {
        self.0 / MINUTE_TO_SEC
    }

    pub const fn hours(&self) -> u32 {
        self.0 / HOUR_TO_SEC
    }

    pub const fn minutes(&self) -> u32 {
        (self.0 % HOUR_TO_SEC) / MINUTE_TO_SEC
    }

    pub fn to_hms_string(&self) -> String {
        let s = self.0 % 60;
        format!("{:02}:{:02}:{:02}", self.hours(), self.minutes(), s)
    }

    pub fn to_hm_string(&self) -> String {
        format!("{:02}:{:02}", self.hours(), self.minutes())
    }

    /// Parses `HH:MM:SS` or `HH:MM`. Hours are not capped at 23.
    pub fn from_hms(time: &str) -> Option<Self> {
        let mut split = time.trim().split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = match split.next() {
            Some(seconds) => seconds.parse().ok()?,
            None => 0,
        };
        if split.next().is_some() {
            return None;
        }
        hours
            .checked_mul(HOUR_TO_SEC)?
            .checked_add(minutes.checked_mul(MINUTE_TO_SEC)?)?
            .checked_add(seconds)
            .map(Self)
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00:00";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_2() {
    let time = "00:00:30";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_3() {
    let time = "12:30:30";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_past_midnight() {
    let stime = Time::from_hms("25:10:00").unwrap();
    assert_eq!(stime.hours(), 25);
    assert_eq!(stime.minutes(), 10);
    assert_eq!(stime.to_hm_string(), "25:10");
}

#[test]
fn parse_unpadded_hours() {
    let stime = Time::from_hms("8:05:00").unwrap();
    assert_eq!(stime.to_hm_string(), "08:05");
}

#[test]
fn truncates_seconds_to_minutes() {
    let stime = Time::from_hms("08:05:59").unwrap();
    assert_eq!(stime.as_minutes(), 8 * 60 + 5);
}
