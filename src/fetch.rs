use std::{
    io,
    path::{Path, PathBuf},
};

use miette::Diagnostic;
use thiserror::Error;

use crate::{
    region::{Region, RegionError},
    source::Source,
    table::{ParseError, Table},
};

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error("Could not fetch `{url}`: server answered {code}")]
    Status { url: String, code: u16 },
    #[error("Could not fetch `{url}`: {source}")]
    Transport {
        url: String,
        source: Box<ureq::Transport>,
    },
    #[error("Could not read the body of `{url}`: {source}")]
    Body { url: String, source: io::Error },
    #[error("Could not write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl Source {
    /// Download the trend table of `region`.
    ///
    /// When `output` is set the raw body is written there before being parsed,
    /// so it is kept even if it turns out not to be a valid table.
    pub fn download(&self, region: &Region, output: Option<&Path>) -> Result<Table, FetchError> {
        let url = self.url(region);
        log::info!("downloading {url}");

        let response = match ureq::get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status { url, code }),
            Err(ureq::Error::Transport(e)) => {
                return Err(FetchError::Transport {
                    url,
                    source: Box::new(e),
                })
            }
        };

        let body = match response.into_string() {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Body { url, source }),
        };

        if let Some(path) = output {
            std::fs::write(path, &body).map_err(|source| FetchError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("wrote {} bytes to {path:?}", body.len());
        }

        let table = Table::parse(&url, &body)?;
        log::debug!("{url}: {} rows of {} columns", table.len(), table.width());

        Ok(table)
    }
}

/// Download the average temperature trend of `region` from Berkeley Earth,
/// optionally keeping a copy of the raw file at `output`.
pub fn download(region: &str, output: Option<&Path>) -> Result<Table, FetchError> {
    let region = Region::new(region)?;
    Source::default().download(&region, output)
}
