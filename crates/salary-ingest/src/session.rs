//! Year/location selection and dataset loading.
//!
//! Every load runs as a request stamped with a generation number. Starting a
//! new request makes all earlier ones stale: applying a stale result fails
//! with [`IngestError::Superseded`] and leaves the session untouched. A
//! failed fetch also leaves the current selection as it was.

use std::path::{Path, PathBuf};

use salary_model::Record;
use tracing::{debug, info, info_span};

use crate::dataset::parse_dataset;
use crate::error::{IngestError, Result};
use crate::manifest::{LocationManifest, parse_location_manifest, parse_year_manifest};
use crate::source::{AssetSource, MANIFEST_FILENAME};

/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A fetched location manifest waiting to be applied.
#[derive(Debug)]
pub struct PendingLocations {
    ticket: RequestTicket,
    year: String,
    manifest: LocationManifest,
}

impl PendingLocations {
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }
}

/// A fetched dataset waiting to be applied.
#[derive(Debug)]
pub struct PendingDataset {
    ticket: RequestTicket,
    location: String,
    path: PathBuf,
    records: Vec<Record>,
}

impl PendingDataset {
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }
}

/// Records loaded for one year and location.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub year: String,
    pub location: String,
    pub path: PathBuf,
    pub records: Vec<Record>,
}

/// Browsing session over an asset tree.
#[derive(Debug)]
pub struct DataSession<S> {
    source: S,
    years: Vec<String>,
    year: Option<String>,
    locations: LocationManifest,
    location: Option<String>,
    generation: u64,
}

impl<S: AssetSource> DataSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            years: Vec::new(),
            year: None,
            locations: LocationManifest::default(),
            location: None,
            generation: 0,
        }
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Newest listed year.
    pub fn default_year(&self) -> Option<&str> {
        self.years.first().map(String::as_str)
    }

    pub fn selected_year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn locations(&self) -> &LocationManifest {
        &self.locations
    }

    pub fn selected_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Generation of the most recently started request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a new request, superseding any that are still pending.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            generation: self.generation,
        }
    }

    fn ensure_current(&self, ticket: RequestTicket) -> Result<()> {
        if ticket.generation != self.generation {
            return Err(IngestError::Superseded {
                generation: ticket.generation,
                current: self.generation,
            });
        }
        Ok(())
    }

    /// Reads the top-level year manifest.
    pub fn load_years(&mut self) -> Result<&[String]> {
        let path = PathBuf::from(MANIFEST_FILENAME);
        let text = self.source.read_text(&path)?;
        let years = parse_year_manifest(&text);
        if years.is_empty() {
            return Err(IngestError::EmptyManifest { path });
        }
        info!(count = years.len(), "years loaded");
        self.years = years;
        Ok(&self.years)
    }

    /// Fetches the location manifest for `year` without applying it.
    pub fn request_locations(&mut self, year: &str) -> Result<PendingLocations> {
        if !self.years.iter().any(|y| y == year) {
            return Err(IngestError::UnknownYear {
                year: year.to_string(),
            });
        }
        let ticket = self.begin_request();
        let path = Path::new(year).join(MANIFEST_FILENAME);
        let text = self.source.read_text(&path)?;
        let manifest = parse_location_manifest(&text);
        if manifest.is_empty() {
            return Err(IngestError::EmptyManifest { path });
        }
        debug!(year = %year, generation = ticket.generation, "locations fetched");
        Ok(PendingLocations {
            ticket,
            year: year.to_string(),
            manifest,
        })
    }

    /// Applies fetched locations and selects the first location.
    pub fn apply_locations(&mut self, pending: PendingLocations) -> Result<&LocationManifest> {
        self.ensure_current(pending.ticket)?;
        self.location = pending.manifest.default_location().map(str::to_string);
        self.year = Some(pending.year);
        self.locations = pending.manifest;
        info!(
            year = self.year.as_deref().unwrap_or_default(),
            count = self.locations.len(),
            "locations loaded"
        );
        Ok(&self.locations)
    }

    /// Selects a year and loads its locations.
    pub fn select_year(&mut self, year: &str) -> Result<&LocationManifest> {
        let pending = self.request_locations(year)?;
        self.apply_locations(pending)
    }

    /// Fetches and parses the dataset for `location` in the selected year.
    pub fn request_dataset(&mut self, location: &str) -> Result<PendingDataset> {
        let year = self.year.clone().ok_or(IngestError::NoYearSelected)?;
        let filename = self
            .locations
            .filename(location)
            .ok_or_else(|| IngestError::UnknownLocation {
                year: year.clone(),
                location: location.to_string(),
            })?
            .to_string();
        let span = info_span!("dataset", year = %year, location = %location);
        let _guard = span.enter();
        let ticket = self.begin_request();
        let path = Path::new(&year).join(filename);
        let text = self.source.read_text(&path)?;
        let records = parse_dataset(&text, &path)?;
        debug!(
            records = records.len(),
            generation = ticket.generation,
            "dataset fetched"
        );
        Ok(PendingDataset {
            ticket,
            location: location.to_string(),
            path,
            records,
        })
    }

    /// Applies a fetched dataset, making its location the selected one.
    pub fn apply_dataset(&mut self, pending: PendingDataset) -> Result<Dataset> {
        self.ensure_current(pending.ticket)?;
        let year = self.year.clone().ok_or(IngestError::NoYearSelected)?;
        self.location = Some(pending.location.clone());
        info!(
            year = %year,
            location = %pending.location,
            records = pending.records.len(),
            "dataset loaded"
        );
        Ok(Dataset {
            year,
            location: pending.location,
            path: pending.path,
            records: pending.records,
        })
    }

    /// Selects a location in the current year and loads its records.
    pub fn load_dataset(&mut self, location: &str) -> Result<Dataset> {
        let pending = self.request_dataset(location)?;
        self.apply_dataset(pending)
    }
}
