//! Regional temperature trends from Berkeley Earth, and a centered moving
//! average to smooth them.
//!
//! ```no_run
//! use tavg::{download, moving_average, Column};
//!
//! let table = download("France", None)?;
//! let anomaly = table.series(Column::MonthlyAnomaly).unwrap_or_default();
//! let smoothed = moving_average(&anomaly, 120);
//! # Ok::<(), tavg::FetchError>(())
//! ```

mod fetch;
mod region;
mod smooth;
mod source;
mod table;

pub use fetch::{download, FetchError};
pub use region::{Region, RegionError};
pub use smooth::moving_average;
pub use source::{build_url, Measure, Source, BERKELEY_EARTH_URL};
pub use table::{date_fraction, Column, DateError, ParseError, Table};
