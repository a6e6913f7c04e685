pub mod loader;

pub use loader::{BandRecord, TaxTableLoader, TaxTableLoaderError, YearParamsRecord};
