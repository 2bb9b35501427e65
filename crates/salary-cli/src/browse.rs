//! Dataset selection and filter application shared by the subcommands.

use anyhow::{Context, Result, anyhow};
use salary_core::FilterState;
use salary_ingest::{AssetSource, DataSession, Dataset, FsAssetSource};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::logging::redact_value;

/// Coarse and name filters requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct FilterRequest<'a> {
    pub college: Option<&'a str>,
    pub department: Option<&'a str>,
    pub name: Option<&'a str>,
}

pub fn open_session(settings: &Settings) -> DataSession<FsAssetSource> {
    DataSession::new(FsAssetSource::new(&settings.assets_dir))
}

/// Loads years and selects `year`, or the newest one.
pub fn select_year<S: AssetSource>(session: &mut DataSession<S>, year: Option<&str>) -> Result<()> {
    session.load_years().context("load years")?;
    let year = match year {
        Some(year) => year.to_string(),
        None => session
            .default_year()
            .ok_or_else(|| anyhow!("no years available"))?
            .to_string(),
    };
    session
        .select_year(&year)
        .with_context(|| format!("load locations for {year}"))?;
    Ok(())
}

/// Loads the dataset for `year`/`location`, falling back to the newest year
/// and its first location.
pub fn open_dataset<S: AssetSource>(
    session: &mut DataSession<S>,
    year: Option<&str>,
    location: Option<&str>,
) -> Result<Dataset> {
    select_year(session, year)?;
    let location = match location {
        Some(location) => location.to_string(),
        None => session
            .selected_location()
            .ok_or_else(|| anyhow!("no locations available"))?
            .to_string(),
    };
    session
        .load_dataset(&location)
        .with_context(|| format!("load dataset for {location}"))
}

/// Applies college, department and name filters in cascade order.
pub fn apply_filters(state: &mut FilterState, request: &FilterRequest<'_>) -> Result<()> {
    if let Some(college) = request.college {
        if !state.index().colleges().iter().any(|c| c == college) {
            warn!(college = %college, "college not present in dataset");
        }
        state.select(college);
    }
    if let Some(department) = request.department {
        state
            .select_department(department)
            .context("apply department filter")?;
        if let Some(college) = state.selected_college()
            && !state.index().contains(college, department)
        {
            warn!(college = %college, department = %department, "department not present under college");
        }
    }
    if let Some(name) = request.name {
        debug!(query = redact_value(name), "name search");
        state.set_name_query(name);
    }
    Ok(())
}
