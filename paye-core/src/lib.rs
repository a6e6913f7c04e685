pub mod calculations;
pub mod models;
pub mod registry;

pub use calculations::{PayrollError, calculate, calculate_with_config};
pub use models::*;
pub use registry::{RegistryError, TaxYearRegistry};
