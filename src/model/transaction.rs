use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line item of a statement, built from a `STMTTRN` block.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    pub(crate) fit_id: String,
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) posted: Option<NaiveDate>,
    pub(crate) user_date: Option<NaiveDate>,
    pub(crate) amount: Amount,
    pub(crate) memo: String,
}

impl Transaction {
    /// The financial institution's unique id for this transaction (`FITID`).
    pub fn fit_id(&self) -> &str {
        &self.fit_id
    }

    /// The transaction type code, e.g. `DEBIT` or `CREDIT` (`TRNTYPE`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The date the transaction was posted (`DTPOSTED`).
    pub fn posted(&self) -> Option<NaiveDate> {
        self.posted
    }

    /// The date the user initiated the transaction (`DTUSER`).
    pub fn user_date(&self) -> Option<NaiveDate> {
        self.user_date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The description, from whichever of `NAME` or `MEMO` came last.
    pub fn memo(&self) -> &str {
        &self.memo
    }
}
