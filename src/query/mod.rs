pub mod criteria;
pub mod filter;
pub mod present;

pub use criteria::Criteria;
