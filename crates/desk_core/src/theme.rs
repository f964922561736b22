use std::fmt;
use std::str::FromStr;

/// Display theme. Toggling cycles `Light -> Dark -> Day -> Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Day,
}

impl Theme {
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Day,
            Theme::Day => Theme::Light,
        }
    }

    /// Theme used when no preference has been stored: dark from 18:00 to 06:00.
    pub fn initial_for_hour(hour: u32) -> Theme {
        if hour >= 18 || hour < 6 {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Day => "day",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}'", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "day" => Ok(Theme::Day),
            _ => Err(UnknownTheme(raw.to_string())),
        }
    }
}
