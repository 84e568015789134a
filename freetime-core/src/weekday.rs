//! The five weekdays a timetable tracks.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in display order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Key the day's schedule is persisted under.
    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Korean label shown on the original timetable screen.
    pub fn korean_name(self) -> &'static str {
        match self {
            Weekday::Monday => "월요일",
            Weekday::Tuesday => "화요일",
            Weekday::Wednesday => "수요일",
            Weekday::Thursday => "목요일",
            Weekday::Friday => "금요일",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepts the storage key, the English name or its first three letters, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                wanted == name || wanted == day.key().to_ascii_lowercase() || wanted == name[..3]
            })
            .or_else(|| Weekday::ALL.into_iter().find(|day| day.korean_name() == s.trim()))
            .ok_or_else(|| format!("Unknown weekday '{}'. Expected one of MON, TUE, WED, THU, FRI", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_keys_and_names() {
        assert_eq!("MON".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("tuesday".parse::<Weekday>().unwrap(), Weekday::Tuesday);
        assert_eq!("Wed".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!("금요일".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("saturday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_keys_are_distinct_and_ordered() {
        let keys: Vec<_> = Weekday::ALL.iter().map(|d| d.key()).collect();
        assert_eq!(keys, vec!["MON", "TUE", "WED", "THU", "FRI"]);
        assert!(Weekday::Monday < Weekday::Friday);
    }
}
