use std::path::Path;

use log::info;
use serde_jsonlines::json_lines;
use snafu::ResultExt;

use crate::advisor::FertilizerAdvisor;
use crate::errors::{AdvisorError, RequestsIOSnafu};
use crate::readings::SoilReadings;

/// Read one [`SoilReadings`] request per line from a JSON lines file.
pub fn read_requests(path: &Path) -> Result<Vec<SoilReadings>, AdvisorError> {
    let origin = path.display().to_string();
    json_lines(path)
        .context(RequestsIOSnafu {
            path: origin.clone(),
        })?
        .collect::<std::io::Result<Vec<SoilReadings>>>()
        .context(RequestsIOSnafu { path: origin })
}

/// Produce a report for every request in the file, in file order.
pub fn run_batch(advisor: &FertilizerAdvisor, path: &Path) -> Result<Vec<String>, AdvisorError> {
    let requests = read_requests(path)?;
    info!("Processing {} requests from {:?}", requests.len(), path);
    Ok(requests
        .iter()
        .map(|readings| advisor.report(readings).to_string())
        .collect())
}
