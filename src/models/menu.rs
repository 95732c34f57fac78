use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl MessDay {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| s.eq_ignore_ascii_case(day.as_str()))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    #[must_use]
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for MessDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Menu lookups accept either a literal day name or the sentinel `today`.
/// Both variants funnel through [`DaySelector::resolve`] so the sentinel is
/// handled in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    Today,
    Day(MessDay),
}

impl DaySelector {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("today") {
            Some(Self::Today)
        } else {
            MessDay::parse(s).map(Self::Day)
        }
    }

    #[must_use]
    pub const fn resolve(self, today: Weekday) -> MessDay {
        match self {
            Self::Today => MessDay::from_weekday(today),
            Self::Day(day) => day,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessMenuEntry {
    pub day: MessDay,
    pub breakfast: String,
    pub lunch: String,
    pub tea: String,
    pub dinner: String,
}

/// Partial menu update. Absent fields keep their prior values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuPatch {
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub tea: Option<String>,
    pub dinner: Option<String>,
}

impl MessMenuEntry {
    pub fn apply(&mut self, patch: MenuPatch) {
        if let Some(breakfast) = patch.breakfast {
            self.breakfast = breakfast;
        }
        if let Some(lunch) = patch.lunch {
            self.lunch = lunch;
        }
        if let Some(tea) = patch.tea {
            self.tea = tea;
        }
        if let Some(dinner) = patch.dinner {
            self.dinner = dinner;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_day_names_case_insensitively() {
        assert_eq!(MessDay::parse("tuesday"), Some(MessDay::Tuesday));
        assert_eq!(MessDay::parse("TUESDAY"), Some(MessDay::Tuesday));
        assert_eq!(MessDay::parse("Sunday"), Some(MessDay::Sunday));
        assert_eq!(MessDay::parse("funday"), None);
        assert_eq!(MessDay::parse(""), None);
    }

    #[test]
    fn selector_resolves_sentinel_to_current_day() {
        let selector = DaySelector::parse("today").unwrap();
        assert_eq!(selector.resolve(Weekday::Wed), MessDay::Wednesday);

        let selector = DaySelector::parse("friday").unwrap();
        assert_eq!(selector.resolve(Weekday::Wed), MessDay::Friday);
    }

    #[test]
    fn patch_merges_only_provided_fields() {
        let mut entry = MessMenuEntry {
            day: MessDay::Monday,
            breakfast: "Poha, Tea".to_string(),
            lunch: "Dal, Rice".to_string(),
            tea: "Tea, Biscuits".to_string(),
            dinner: "Rajma, Rice".to_string(),
        };

        entry.apply(MenuPatch {
            lunch: Some("Chole, Rice".to_string()),
            ..MenuPatch::default()
        });

        assert_eq!(entry.breakfast, "Poha, Tea");
        assert_eq!(entry.lunch, "Chole, Rice");
        assert_eq!(entry.dinner, "Rajma, Rice");
    }
}
