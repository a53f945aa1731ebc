//! Individual model

use super::IndividualId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recorded sex of an individual
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    #[serde(alias = "M", alias = "m")]
    Male,
    /// Female
    #[serde(alias = "F", alias = "f")]
    Female,
    /// Not recorded
    #[default]
    #[serde(alias = "U", alias = "u")]
    Unknown,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A date where any of year, month and day may be unknown
///
/// Displayed as `"<year>. <month>. <day>."` with `?` standing in for each
/// unknown component, e.g. `1901. ?. ?.`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncertainDate {
    /// Year, if known
    #[serde(default)]
    pub year: Option<i32>,
    /// Month (1-12), if known
    #[serde(default)]
    pub month: Option<u32>,
    /// Day of month, if known
    #[serde(default)]
    pub day: Option<u32>,
}

impl UncertainDate {
    /// A date with only the year known
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            month: None,
            day: None,
        }
    }

    /// A fully known date
    #[must_use]
    pub const fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    /// Whether no component is known
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

fn write_component<T: fmt::Display>(f: &mut fmt::Formatter<'_>, part: Option<T>) -> fmt::Result {
    match part {
        Some(value) => write!(f, "{value}."),
        None => f.write_str("?."),
    }
}

impl fmt::Display for UncertainDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_component(f, self.year)?;
        f.write_str(" ")?;
        write_component(f, self.month)?;
        f.write_str(" ")?;
        write_component(f, self.day)
    }
}

/// A recorded birth or death date
///
/// Either free display text kept exactly as written (`ABT 1900`,
/// `BET 1850 AND 1855`) or structured parts shown in the
/// [`UncertainDate`] format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Date {
    /// Display text, passed through unchanged
    Text(String),
    /// Structured year/month/day parts
    Parts(UncertainDate),
}

impl From<UncertainDate> for Date {
    fn from(date: UncertainDate) -> Self {
        Self::Parts(date)
    }
}

impl From<&str> for Date {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Date {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Parts(date) => date.fmt(f),
        }
    }
}

/// A person in the family tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Unique, stable identifier
    pub id: IndividualId,

    /// Display name
    pub name: String,

    /// Recorded sex
    #[serde(default)]
    pub sex: Sex,

    /// Birth date, if recorded
    #[serde(default)]
    pub birth: Option<Date>,

    /// Death date, if recorded
    #[serde(default)]
    pub death: Option<Date>,
}

impl Individual {
    /// Create an individual with unknown sex and no dates
    #[must_use]
    pub fn new(id: impl Into<IndividualId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sex: Sex::Unknown,
            birth: None,
            death: None,
        }
    }

    /// Set the recorded sex
    #[must_use]
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Set the birth date
    #[must_use]
    pub fn with_birth(mut self, birth: impl Into<Date>) -> Self {
        self.birth = Some(birth.into());
        self
    }

    /// Set the death date
    #[must_use]
    pub fn with_death(mut self, death: impl Into<Date>) -> Self {
        self.death = Some(death.into());
        self
    }

    /// Birth date as display text (empty when not recorded)
    #[must_use]
    pub fn birth_text(&self) -> String {
        self.birth.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Death date as display text (empty when not recorded)
    #[must_use]
    pub fn death_text(&self) -> String {
        self.death.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncertain_date_display() {
        assert_eq!(UncertainDate::ymd(1901, 3, 9).to_string(), "1901. 3. 9.");
        assert_eq!(UncertainDate::year(1850).to_string(), "1850. ?. ?.");
        assert_eq!(UncertainDate::default().to_string(), "?. ?. ?.");
    }

    #[test]
    fn test_uncertain_date_month_without_year() {
        let date = UncertainDate {
            year: None,
            month: Some(12),
            day: None,
        };
        assert_eq!(date.to_string(), "?. 12. ?.");
        assert!(!date.is_unknown());
    }

    #[test]
    fn test_individual_builder() {
        let ada = Individual::new("I1", "Ada")
            .with_sex(Sex::Female)
            .with_birth(UncertainDate::year(1815));
        assert_eq!(ada.id.as_str(), "I1");
        assert_eq!(ada.sex, Sex::Female);
        assert_eq!(ada.birth_text(), "1815. ?. ?.");
        assert_eq!(ada.death_text(), "");
    }

    #[test]
    fn test_date_text_passes_through() {
        let ada = Individual::new("I1", "Ada")
            .with_birth("ABT 1900")
            .with_death("BET 1950 AND 1955");
        assert_eq!(ada.birth_text(), "ABT 1900");
        assert_eq!(ada.death_text(), "BET 1950 AND 1955");
    }

    #[test]
    fn test_date_accepts_text_or_parts() {
        #[derive(Deserialize)]
        struct Row {
            birth: Date,
        }
        let row: Row = toml::from_str("birth = \"BEF 1850\"").unwrap();
        assert_eq!(row.birth, Date::Text("BEF 1850".to_string()));
        let row: Row = toml::from_str("birth = { year = 1850, day = 2 }").unwrap();
        assert_eq!(row.birth.to_string(), "1850. ?. 2.");
    }

    #[test]
    fn test_sex_accepts_short_forms() {
        #[derive(Deserialize)]
        struct Row {
            sex: Sex,
        }
        let row: Row = toml::from_str("sex = \"F\"").unwrap();
        assert_eq!(row.sex, Sex::Female);
        let row: Row = toml::from_str("sex = \"male\"").unwrap();
        assert_eq!(row.sex, Sex::Male);
    }
}
