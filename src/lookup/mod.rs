pub mod rest_countries;
pub mod source;
pub mod types;

pub use rest_countries::RestCountriesClient;
pub use source::{CountrySource, LookupError};
pub use types::Country;
