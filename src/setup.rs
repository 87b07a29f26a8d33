//! Birth settings chosen on the game page
//!
//! The life simulation itself does not exist yet: the server side `start_life`
//! reports [`SetupError::NotImplemented`] for every valid setup.

use serde::{Deserialize, Serialize};

pub const BIRTH_YEAR_MIN: i32 = 1800;
pub const BIRTH_YEAR_MAX: i32 = 2050;
pub const BIRTH_YEAR_DEFAULT: i32 = 1950;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    China,
    Usa,
    Japan,
    Uk,
    France,
    Random,
}

impl Country {
    /// Countries in the order the form lists them
    pub const ALL: [Country; 6] = [
        Country::China,
        Country::Usa,
        Country::Japan,
        Country::Uk,
        Country::France,
        Country::Random,
    ];

    /// Value carried by the `<option>` element
    pub fn value(self) -> &'static str {
        match self {
            Country::China => "china",
            Country::Usa => "usa",
            Country::Japan => "japan",
            Country::Uk => "uk",
            Country::France => "france",
            Country::Random => "random",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Country::China => "中国",
            Country::Usa => "美国",
            Country::Japan => "日本",
            Country::Uk => "英国",
            Country::France => "法国",
            Country::Random => "随机选择",
        }
    }

    pub fn from_value(value: &str) -> Option<Country> {
        Country::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    UnknownCountry(String),
    BirthYearOutOfRange(i32),
    NotImplemented,
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::UnknownCountry(value) => write!(f, "未知的出生国家: {}", value),
            SetupError::BirthYearOutOfRange(year) => write!(
                f,
                "出生年份 {} 超出范围 {}-{}",
                year, BIRTH_YEAR_MIN, BIRTH_YEAR_MAX
            ),
            SetupError::NotImplemented => write!(f, "人生模拟尚未开放，敬请期待"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Birth settings for a new life
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeSetup {
    pub country: Country,
    pub birth_year: i32,
}

impl Default for LifeSetup {
    fn default() -> Self {
        Self {
            country: Country::China,
            birth_year: BIRTH_YEAR_DEFAULT,
        }
    }
}

impl LifeSetup {
    /// Build a setup from raw form values
    pub fn parse(country: &str, birth_year: i32) -> Result<Self, SetupError> {
        let country = Country::from_value(country)
            .ok_or_else(|| SetupError::UnknownCountry(country.to_string()))?;
        Self {
            country,
            birth_year,
        }
        .validate()
    }

    pub fn validate(self) -> Result<Self, SetupError> {
        if !(BIRTH_YEAR_MIN..=BIRTH_YEAR_MAX).contains(&self.birth_year) {
            return Err(SetupError::BirthYearOutOfRange(self.birth_year));
        }
        Ok(self)
    }
}

/// Entry point of the life simulation, which has no engine behind it yet
#[cfg(feature = "server")]
pub fn start_life(setup: &LifeSetup) -> Result<(), SetupError> {
    log::debug!(
        "Start requested for {} in {}",
        setup.country.value(),
        setup.birth_year
    );
    Err(SetupError::NotImplemented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup() {
        let setup = LifeSetup::default();
        assert_eq!(setup.country, Country::China);
        assert_eq!(setup.birth_year, 1950);
    }

    #[test]
    fn test_country_values_in_form_order() {
        let values: Vec<&str> = Country::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(
            values,
            vec!["china", "usa", "japan", "uk", "france", "random"]
        );
        assert_eq!(Country::from_value("japan"), Some(Country::Japan));
        assert_eq!(Country::from_value("Japan"), None);
        assert_eq!(Country::Random.label(), "随机选择");
    }

    #[test]
    fn test_parse_accepts_bounds() {
        assert_eq!(
            LifeSetup::parse("uk", 1800),
            Ok(LifeSetup {
                country: Country::Uk,
                birth_year: 1800
            })
        );
        assert!(LifeSetup::parse("random", 2050).is_ok());
    }

    #[test]
    fn test_parse_rejects_out_of_range_year() {
        assert_eq!(
            LifeSetup::parse("china", 1799),
            Err(SetupError::BirthYearOutOfRange(1799))
        );
        assert_eq!(
            LifeSetup::parse("china", 2051),
            Err(SetupError::BirthYearOutOfRange(2051))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_country() {
        assert_eq!(
            LifeSetup::parse("atlantis", 1950),
            Err(SetupError::UnknownCountry("atlantis".to_string()))
        );
    }

    #[test]
    fn test_validate_checks_year_of_typed_setup() {
        let setup = LifeSetup {
            country: Country::France,
            birth_year: 3000,
        };
        assert_eq!(setup.validate(), Err(SetupError::BirthYearOutOfRange(3000)));
        assert!(LifeSetup::default().validate().is_ok());
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_start_life_is_pending() {
        let err = start_life(&LifeSetup::default()).unwrap_err();
        assert_eq!(err, SetupError::NotImplemented);
        assert!(!err.to_string().is_empty());
    }
}
