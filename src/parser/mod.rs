//! The single-pass statement parser.
//!
//! `StatementParser` consumes `Token`s one at a time and assembles a `Statement` without building
//! a tree. It keeps three pieces of state:
//!
//! - the path of open elements,
//! - at most one pending field, armed by a recognized start tag and consumed by the next text,
//! - the transaction currently being filled in.
//!
//! OFX leaves most leaf elements unclosed, so an end tag is resolved by popping the path until an
//! element of the same name comes off. Every element popped on the way is closed implicitly, and
//! leaving a `STMTTRN` element this way completes the current transaction.

mod field;
mod path;

use crate::error::ParseError;
use crate::model::date::{parse_date, parse_date_time};
use crate::model::{Amount, Statement, Transaction};
use crate::token::{SgmlReader, Token};
use field::{Field, TRANSACTION};
use path::{PathStack, MAX_DEPTH};
use std::fmt::Display;
use std::io::BufRead;
use tracing::{debug, trace, warn};

/// Parses a statement document from `input`.
///
/// Reader errors are logged and end the parse early; the statement assembled up to that point is
/// returned. Only the conditions in `ParseError` fail the parse.
pub fn parse<R: BufRead>(input: R) -> crate::Result<Statement> {
    parse_tokens(SgmlReader::new(input))
}

/// Parses a statement from an already tokenized document. See `parse`.
pub fn parse_tokens<I, E>(tokens: I) -> crate::Result<Statement>
where
    I: IntoIterator<Item = Result<Token, E>>,
    E: Display,
{
    let mut parser = StatementParser::new();
    for token in tokens {
        match token {
            Ok(token) => parser.feed(token)?,
            Err(e) => {
                warn!("Stopping at unreadable input: {e}");
                break;
            }
        }
    }
    Ok(parser.finish())
}

/// Assembles a `Statement` from a stream of tokens.
#[derive(Debug, Clone)]
pub struct StatementParser {
    path: PathStack,
    pending: Option<Field>,
    current: Option<Transaction>,
    statement: Statement,
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_DEPTH)
    }

    /// Creates a parser that fails once more than `max_depth` elements are open at once.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            path: PathStack::new(max_depth),
            pending: None,
            current: None,
            statement: Statement::default(),
        }
    }

    /// Applies one token.
    pub fn feed(&mut self, token: Token) -> Result<(), ParseError> {
        trace!("{token:?}");
        match token {
            Token::Start(name) => self.start(&name),
            Token::Text(text) => self.text(&text),
            Token::End(name) => {
                self.end(&name);
                Ok(())
            }
        }
    }

    /// Returns the assembled statement. A transaction that is still open is dropped.
    pub fn finish(self) -> Statement {
        if let Some(open) = &self.current {
            debug!(
                "Dropping transaction '{}' that was never closed",
                open.fit_id()
            );
        }
        if !self.path.is_empty() {
            trace!("{} elements still open at end of input", self.path.len());
        }
        self.statement
    }

    fn start(&mut self, name: &str) -> Result<(), ParseError> {
        self.path.push(name)?;
        if name == TRANSACTION {
            if let Some(abandoned) = self.current.replace(Transaction::default()) {
                warn!(
                    "Discarding transaction '{}': a new one started before it was closed",
                    abandoned.fit_id()
                );
            }
            debug!("Transaction opened");
        }
        if let Some(field) = Field::from_tag(name) {
            self.pending = Some(field);
        }
        Ok(())
    }

    /// Writes `text` to the pending field, if one is armed. Only the first text after a tag
    /// counts; the field is disarmed whether or not the value could be used.
    fn text(&mut self, text: &str) -> Result<(), ParseError> {
        let Some(field) = self.pending.take() else {
            return Ok(());
        };
        let value = text.trim();
        let statement = &mut self.statement;
        match field {
            Field::GeneratedAt => statement.generated_at = lenient(field, value, parse_date_time),
            Field::Language => statement.language = value.to_string(),
            Field::BankId => statement.bank_id = value.to_string(),
            Field::BranchId => statement.branch_id = value.to_string(),
            Field::AccountId => statement.account_number = value.to_string(),
            Field::AccountType => statement.account_type = value.to_string(),
            Field::Currency => statement.currency = value.to_string(),
            Field::PeriodStart => statement.period_start = lenient(field, value, parse_date),
            Field::PeriodEnd => statement.period_end = lenient(field, value, parse_date),
            Field::LedgerBalance => statement.ledger_balance = Amount::parse_lossy(value),
            Field::AvailableBalance => statement.available_balance = Amount::parse_lossy(value),
            Field::TransactionType => self.update_transaction(field, |t| t.kind = value.into()),
            Field::DatePosted => {
                let posted = parse_date(value)?;
                self.update_transaction(field, |t| t.posted = Some(posted));
            }
            Field::DateUser => {
                let user_date = lenient(field, value, parse_date);
                self.update_transaction(field, |t| t.user_date = user_date);
            }
            Field::Amount => {
                let amount = Amount::parse_lossy(value);
                self.update_transaction(field, |t| t.amount = amount);
            }
            Field::FitId => self.update_transaction(field, |t| t.fit_id = value.into()),
            Field::Name | Field::Memo => self.update_transaction(field, |t| t.memo = value.into()),
        }
        Ok(())
    }

    fn update_transaction(&mut self, field: Field, update: impl FnOnce(&mut Transaction)) {
        match self.current.as_mut() {
            Some(transaction) => update(transaction),
            None => debug!("Dropping {field:?} found outside of a transaction"),
        }
    }

    /// Pops the path until an element named `name` comes off, completing the current transaction
    /// whenever a `STMTTRN` element is left on the way.
    fn end(&mut self, name: &str) {
        while let Some(top) = self.path.top() {
            if top == TRANSACTION {
                if let Some(transaction) = self.current.take() {
                    debug!("Transaction '{}' closed", transaction.fit_id());
                    self.statement.push(transaction);
                }
            }
            if self.path.pop().as_deref() == Some(name) {
                return;
            }
        }
        trace!("End tag '{name}' did not match an open element");
    }
}

/// Converts a date that is not required, logging and discarding a bad value.
fn lenient<T>(field: Field, value: &str, parse: fn(&str) -> Result<T, ParseError>) -> Option<T> {
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {field:?}: {e}");
            None
        }
    }
}
