//! Types that represent the parsed statement, such as `Statement` and `Transaction`.
mod amount;
pub(crate) mod date;
mod statement;
mod transaction;

pub use amount::{Amount, AmountError};
pub use statement::Statement;
pub use transaction::Transaction;
