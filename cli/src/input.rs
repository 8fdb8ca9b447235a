//! Interactive input
//!
//! Reads the extra allocation and the list of debts from a line-oriented
//! reader, re-prompting on bad input the way a console calculator should.

use debt_snowball_core::DebtConfig;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors for a single line of user input
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid format. Please use: Balance,MinimumPayment")]
    InvalidFormat,

    #[error("Not a valid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Amounts must be positive")]
    NonPositive,
}

/// Parse a money amount, tolerating surrounding whitespace and a leading `$`
pub fn parse_amount(text: &str) -> Result<Decimal, InputError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    Decimal::from_str(digits).map_err(|_| InputError::InvalidAmount(trimmed.to_string()))
}

/// Parse the extra allocation; it must be strictly positive
pub fn parse_allocation(text: &str) -> Result<Decimal, InputError> {
    let amount = parse_amount(text)?;
    if amount <= Decimal::ZERO {
        return Err(InputError::NonPositive);
    }
    Ok(amount)
}

/// Parse a `balance,minimum` line
pub fn parse_debt_line(line: &str) -> Result<DebtConfig, InputError> {
    let mut parts = line.split(',');
    let (Some(balance), Some(minimum), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::InvalidFormat);
    };

    let balance = parse_amount(balance)?;
    let minimum_payment = parse_amount(minimum)?;
    if balance <= Decimal::ZERO || minimum_payment <= Decimal::ZERO {
        return Err(InputError::NonPositive);
    }

    Ok(DebtConfig {
        balance,
        minimum_payment,
    })
}

/// Ask for the extra allocation until a positive amount is given
///
/// Returns `None` if the input ends first.
pub fn prompt_allocation<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<Decimal>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            out,
            "Enter the EXTRA amount you can pay toward debt each month (on top of minimum payments): $"
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_allocation(&line) {
            Ok(amount) => return Ok(Some(amount)),
            Err(_) => writeln!(out, "Please enter a valid positive amount.")?,
        }
    }
}

/// Read debts one per line until an empty line or end of input
pub fn prompt_debts<R, W>(input: &mut R, out: &mut W) -> io::Result<Vec<DebtConfig>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "\nEnter your debts (one per line).")?;
    writeln!(out, "Format: Balance,MinimumPayment (e.g., 5000.00,150.00)")?;
    writeln!(out, "Enter an empty line when finished.\n")?;

    let mut debts = Vec::new();
    loop {
        write!(out, "Debt #{}: ", debts.len() + 1)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        match parse_debt_line(&line) {
            Ok(debt) => debts.push(debt),
            Err(err) => {
                tracing::debug!(input = line.trim(), error = %err, "rejected debt line");
                writeln!(out, "{}", InputError::InvalidFormat)?;
            }
        }
    }

    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount(" 150.00\n"), Ok(dec!(150.00)));
        assert_eq!(parse_amount("$75.5"), Ok(dec!(75.5)));
        assert_eq!(
            parse_amount("abc"),
            Err(InputError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_allocation_requires_positive() {
        assert_eq!(parse_allocation("0"), Err(InputError::NonPositive));
        assert_eq!(parse_allocation("-10"), Err(InputError::NonPositive));
        assert_eq!(parse_allocation("200"), Ok(dec!(200)));
    }

    #[test]
    fn test_parse_debt_line() {
        assert_eq!(
            parse_debt_line("5000.00,150.00"),
            Ok(DebtConfig {
                balance: dec!(5000.00),
                minimum_payment: dec!(150.00)
            })
        );
        assert_eq!(
            parse_debt_line(" 750 , 25 \n").map(|d| d.balance),
            Ok(dec!(750))
        );
    }

    #[test]
    fn test_parse_debt_line_rejects_bad_input() {
        assert_eq!(parse_debt_line("5000"), Err(InputError::InvalidFormat));
        assert_eq!(parse_debt_line("1,2,3"), Err(InputError::InvalidFormat));
        assert_eq!(parse_debt_line("0,25"), Err(InputError::NonPositive));
        assert_eq!(parse_debt_line("100,0"), Err(InputError::NonPositive));
        assert!(matches!(
            parse_debt_line("ten,5"),
            Err(InputError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_prompt_allocation_retries() {
        let mut input = Cursor::new("nope\n-5\n250.00\n");
        let mut out = Vec::new();

        let allocation = prompt_allocation(&mut input, &mut out).unwrap();

        assert_eq!(allocation, Some(dec!(250.00)));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please enter a valid positive amount.").count(), 2);
    }

    #[test]
    fn test_prompt_allocation_end_of_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        assert_eq!(prompt_allocation(&mut input, &mut out).unwrap(), None);
    }

    #[test]
    fn test_prompt_debts_until_blank_line() {
        let mut input = Cursor::new("5000,150\nbad\n750,25\n\n100,10\n");
        let mut out = Vec::new();

        let debts = prompt_debts(&mut input, &mut out).unwrap();

        assert_eq!(debts.len(), 2);
        assert_eq!(debts[1].balance, dec!(750));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Debt #3: "));
        assert!(text.contains("Invalid format. Please use: Balance,MinimumPayment"));
    }

    #[test]
    fn test_prompt_debts_stops_at_end_of_input() {
        let mut input = Cursor::new("300,20");
        let mut out = Vec::new();

        let debts = prompt_debts(&mut input, &mut out).unwrap();

        assert_eq!(debts.len(), 1);
    }
}
