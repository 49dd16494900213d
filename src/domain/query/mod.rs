//! Pure, side-effect-free transformations over the contract list projection

mod filter;
mod page;
mod sort;
mod stats;

pub use filter::{search, ListFilter};
pub use page::{paginate, Page};
pub use sort::{sort_contracts, SortKey, SortOrder};
pub use stats::{ContractStats, RiskCounts, StatusCounts};
