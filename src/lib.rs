//! Converts OFX bank statements into a structured `Statement` record.
//!
//! Both OFX 1.x (SGML, with unclosed leaf elements) and OFX 2.x (XML) documents are read in a
//! single streaming pass. The result serializes to JSON with `to_json`.
//!
//! ```
//! let ofx = "<STMTRS><CURDEF>USD<BANKTRANLIST><STMTTRN><FITID>1<TRNAMT>-42.5\
//!            </STMTTRN></BANKTRANLIST><LEDGERBAL><BALAMT>1234.56</LEDGERBAL></STMTRS>";
//! let statement = ofx2json::parse(ofx.as_bytes()).unwrap();
//! assert_eq!(statement.currency(), "USD");
//! assert_eq!(statement.ledger_balance().to_string(), "1234.56");
//! assert_eq!(statement.transactions()[0].amount().to_string(), "-42.50");
//! ```

pub mod args;
mod error;
pub mod model;
mod parser;
mod token;


pub use error::{Error, ParseError, Result};
pub use model::{Amount, Statement, Transaction};
pub use parser::{parse, parse_tokens, StatementParser};
pub use token::{SgmlReader, Token, TokenError};

/// Serializes `statement` as JSON, optionally pretty-printed.
pub fn to_json(statement: &Statement, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(statement)?
    } else {
        serde_json::to_string(statement)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::CHECKING_SGML;

    #[test]
    fn test_to_json() {
        let statement = parse(CHECKING_SGML.as_bytes()).unwrap();
        let json = to_json(&statement, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["generated_at"], "2024-01-31T09:30:12");
        assert_eq!(value["account_number"], "1234567890");
        assert_eq!(value["ledger_balance"], "1234.56");
        assert_eq!(value["available_balance"], "1200.00");
        assert_eq!(value["period_start"], "2024-01-01");
        assert_eq!(value["transactions"][0]["fit_id"], "202401150001");
        assert_eq!(value["transactions"][0]["type"], "DEBIT");
        assert_eq!(value["transactions"][0]["posted"], "2024-01-15");
        assert_eq!(value["transactions"][0]["amount"], "-14.05");
        assert_eq!(value["transactions"][1]["memo"], "PAYROLL ACME INC");
        assert_eq!(value["transactions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_to_json_round_trips() {
        let statement = parse(CHECKING_SGML.as_bytes()).unwrap();
        let json = to_json(&statement, true).unwrap();
        assert!(json.contains('\n'));
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, statement);
    }
}
