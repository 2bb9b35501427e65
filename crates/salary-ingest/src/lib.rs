pub mod csv_import;
pub mod dataset;
pub mod error;
pub mod manifest;
pub mod session;
pub mod source;

pub use csv_import::import_salary_csv;
pub use dataset::{parse_dataset, write_dataset};
pub use error::{IngestError, Result};
pub use manifest::{
    LocationEntry, LocationManifest, parse_location_manifest, parse_year_manifest, split_entry,
};
pub use session::{DataSession, Dataset, PendingDataset, PendingLocations, RequestTicket};
pub use source::{AssetSource, FsAssetSource, MANIFEST_FILENAME};
