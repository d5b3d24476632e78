//! The fixed vocabulary of leaf tags that map onto output fields.

/// Tag that opens a transaction block.
pub(crate) const TRANSACTION: &str = "STMTTRN";

/// An output field that the next text chunk will populate.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Field {
    GeneratedAt,
    Language,
    BankId,
    BranchId,
    AccountId,
    AccountType,
    Currency,
    PeriodStart,
    PeriodEnd,
    LedgerBalance,
    AvailableBalance,
    TransactionType,
    DatePosted,
    DateUser,
    Amount,
    FitId,
    Name,
    Memo,
}

impl Field {
    /// Looks up the field armed by the start tag `name`, if any.
    pub(crate) fn from_tag(name: &str) -> Option<Self> {
        let field = match name {
            "DTSERVER" => Field::GeneratedAt,
            "LANGUAGE" => Field::Language,
            "BANKID" => Field::BankId,
            "BRANCHID" => Field::BranchId,
            "ACCTID" => Field::AccountId,
            "ACCTTYPE" => Field::AccountType,
            "CURDEF" => Field::Currency,
            "DTSTART" => Field::PeriodStart,
            "DTEND" => Field::PeriodEnd,
            "LEDGERBAL" => Field::LedgerBalance,
            "AVAILBAL" => Field::AvailableBalance,
            "TRNTYPE" => Field::TransactionType,
            "DTPOSTED" => Field::DatePosted,
            "DTUSER" => Field::DateUser,
            "TRNAMT" => Field::Amount,
            "FITID" => Field::FitId,
            "NAME" => Field::Name,
            "MEMO" => Field::Memo,
            _ => return None,
        };
        Some(field)
    }
}
