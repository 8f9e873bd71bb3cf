pub mod lookup;
pub use lookup::{LookupError, LookupService, merge_results};
