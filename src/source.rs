use std::{fmt, str::FromStr};

use crate::region::{Region, RegionError};

pub const BERKELEY_EARTH_URL: &str = "http://berkeleyearth.lbl.gov/auto/Regional";

/// Quantity published in the regional trend files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Measure {
    #[default]
    Average,
    Maximum,
    Minimum,
}

impl Measure {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Average => "TAVG",
            Self::Maximum => "TMAX",
            Self::Minimum => "TMIN",
        }
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TAVG" | "tavg" => Ok(Self::Average),
            "TMAX" | "tmax" => Ok(Self::Maximum),
            "TMIN" | "tmin" => Ok(Self::Minimum),
            s => Err(format!("Unknown measure {s}. Expecting TAVG, TMAX or TMIN")),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where trend files are downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    base_url: String,
    measure: Measure,
}

impl Default for Source {
    fn default() -> Self {
        Self::new(BERKELEY_EARTH_URL)
    }
}

impl Source {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            measure: Measure::default(),
        }
    }

    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    pub fn url(&self, region: &Region) -> String {
        let measure = self.measure.code();
        format!("{}/{measure}/Text/{region}-{measure}-Trend.txt", self.base_url)
    }
}

/// Url of the average temperature trend of `region` on Berkeley Earth.
pub fn build_url(region: &str) -> Result<String, RegionError> {
    Ok(Source::default().url(&Region::new(region)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url() {
        assert_eq!(
            build_url("France").unwrap(),
            "http://berkeleyearth.lbl.gov/auto/Regional/TAVG/Text/france-TAVG-Trend.txt"
        );
        assert_eq!(build_url(""), Err(RegionError::Empty));
    }

    #[test]
    fn custom_source() {
        let source = Source::new("http://localhost:8080/data//").with_measure(Measure::Maximum);
        let region = Region::new("New-Zealand").unwrap();

        assert_eq!(source.base_url(), "http://localhost:8080/data");
        assert_eq!(
            source.url(&region),
            "http://localhost:8080/data/TMAX/Text/new-zealand-TMAX-Trend.txt"
        );
    }

    #[test]
    fn parse_measure() {
        assert_eq!("tmin".parse(), Ok(Measure::Minimum));
        assert_eq!(Measure::Average.to_string(), "TAVG");
        assert!("TMED".parse::<Measure>().is_err());
    }
}
