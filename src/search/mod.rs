pub mod filter;
pub mod types;

pub use filter::{filter, matches};
pub use types::SearchCriteria;
