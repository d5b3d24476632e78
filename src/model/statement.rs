use crate::model::{Amount, Transaction};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The result of parsing one statement document: the account it describes, its balances, and its
/// transactions in document order.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Statement {
    pub(crate) generated_at: Option<NaiveDateTime>,
    pub(crate) language: String,
    pub(crate) bank_id: String,
    pub(crate) branch_id: String,
    pub(crate) account_number: String,
    pub(crate) account_type: String,
    pub(crate) currency: String,
    pub(crate) ledger_balance: Amount,
    pub(crate) available_balance: Amount,
    pub(crate) period_start: Option<NaiveDate>,
    pub(crate) period_end: Option<NaiveDate>,
    transactions: Vec<Transaction>,
}

impl Statement {
    /// When the server generated the document (`DTSERVER`).
    pub fn generated_at(&self) -> Option<NaiveDateTime> {
        self.generated_at
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The routing number (`BANKID`).
    pub fn bank_id(&self) -> &str {
        &self.bank_id
    }

    pub fn branch_id(&self) -> &str {
        &self.branch_id
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// E.g. `CHECKING` or `SAVINGS`.
    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    /// The default currency of the statement (`CURDEF`).
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn ledger_balance(&self) -> Amount {
        self.ledger_balance
    }

    pub fn available_balance(&self) -> Amount {
        self.available_balance
    }

    pub fn period_start(&self) -> Option<NaiveDate> {
        self.period_start
    }

    pub fn period_end(&self) -> Option<NaiveDate> {
        self.period_end
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Appends a completed transaction. Transactions are never removed or reordered.
    pub(crate) fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}
