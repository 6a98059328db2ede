use std::{fmt, str::FromStr};

use thiserror::Error;

/// Name of a Berkeley Earth region, such as `France` or `united-kingdom`.
///
/// Stored lower-cased, the way it appears in download URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    #[error("Empty region name")]
    Empty,
    #[error("Region name `{name}` contains {invalid:?}")]
    InvalidChar { name: String, invalid: char },
}

impl Region {
    pub fn new(name: &str) -> Result<Self, RegionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegionError::Empty);
        }

        // anything that would change the shape of the url path
        if let Some(invalid) = name
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '?' | '#' | '%'))
        {
            return Err(RegionError::InvalidChar {
                name: name.to_string(),
                invalid,
            });
        }

        Ok(Self(name.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_cases_and_trims() {
        let region: Region = "  United-Kingdom\n".parse().unwrap();
        assert_eq!(region.as_str(), "united-kingdom");
        assert_eq!(region.to_string(), "united-kingdom");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Region::new(""), Err(RegionError::Empty));
        assert_eq!(Region::new(" \t"), Err(RegionError::Empty));
    }

    #[test]
    fn rejects_path_breaking_chars() {
        for (name, invalid) in [
            ("united states", ' '),
            ("../etc", '/'),
            ("france?x=1", '?'),
            ("france#top", '#'),
            ("fr%61nce", '%'),
        ] {
            assert_eq!(
                Region::new(name),
                Err(RegionError::InvalidChar {
                    name: name.to_string(),
                    invalid
                })
            );
        }
    }

    #[test]
    fn keeps_apostrophes_and_accents() {
        assert_eq!(Region::new("Côte-d'Ivoire").unwrap().as_str(), "côte-d'ivoire");
    }
}
