//! Input checks applied before sessions or debt terms are saved, and before
//! user-entered projection inputs reach the calculators.
//!
//! Every failing field is collected so a form can show all errors at once.

use super::{NewSession, SessionUpdate};
use crate::error::{FieldError, RealityError, Result};

fn check(errors: &mut Vec<FieldError>, ok: bool, field: &'static str, message: &str) {
    if !ok {
        errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }
}

fn finish(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RealityError::Validation(errors))
    }
}

// NaN fails every comparison, so it is rejected along with out-of-range values
fn positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

fn non_negative(value: f64) -> bool {
    value >= 0.0 && value.is_finite()
}

fn amount_errors(
    bet_amount: f64,
    win_amount: f64,
    loss_amount: f64,
    duration: u32,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check(&mut errors, positive(bet_amount), "bet_amount", "Bet amount must be greater than 0");
    check(&mut errors, duration > 0, "duration", "Duration must be greater than 0");
    check(&mut errors, non_negative(win_amount), "win_amount", "Win amount cannot be negative");
    check(&mut errors, non_negative(loss_amount), "loss_amount", "Loss amount cannot be negative");
    errors
}

fn game_type_error(errors: &mut Vec<FieldError>, game_type: &str) {
    check(errors, !game_type.trim().is_empty(), "game_type", "Game type is required");
}

pub fn validate_new_session(session: &NewSession) -> Result<()> {
    let mut errors = amount_errors(
        session.bet_amount,
        session.win_amount,
        session.loss_amount,
        session.duration,
    );
    game_type_error(&mut errors, &session.game_type);
    finish(errors)
}

pub fn validate_update(update: &SessionUpdate) -> Result<()> {
    let mut errors = amount_errors(
        update.bet_amount,
        update.win_amount,
        update.loss_amount,
        update.duration,
    );
    game_type_error(&mut errors, &update.game_type);
    finish(errors)
}

/// Debt terms need a balance and a payment; a 0% rate is allowed
pub fn validate_debt_terms(
    total_debt: f64,
    monthly_payment: f64,
    interest_rate: f64,
) -> Result<()> {
    let mut errors = Vec::new();
    check(&mut errors, positive(total_debt), "total_debt", "Total debt must be greater than 0");
    check(
        &mut errors,
        positive(monthly_payment),
        "monthly_payment",
        "Monthly payment must be greater than 0",
    );
    check(
        &mut errors,
        non_negative(interest_rate),
        "interest_rate",
        "Interest rate cannot be negative",
    );
    finish(errors)
}

/// Bankroll, bet and session frequency must all be positive
pub fn validate_profitability_inputs(
    bankroll: f64,
    average_bet: f64,
    sessions_per_month: f64,
) -> Result<()> {
    let mut errors = Vec::new();
    check(&mut errors, bankroll > 0.0, "bankroll", "Bankroll must be greater than 0");
    check(&mut errors, average_bet > 0.0, "average_bet", "Average bet must be greater than 0");
    check(
        &mut errors,
        sessions_per_month > 0.0,
        "sessions_per_month",
        "Sessions per month must be greater than 0",
    );
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(result: Result<()>) -> Vec<&'static str> {
        match result {
            Err(RealityError::Validation(errors)) => errors.iter().map(|e| e.field).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_valid_session_passes() {
        let new = NewSession::new("Keno", 10.0, 0.0, 10.0, 15);
        assert!(validate_new_session(&new).is_ok());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let new = NewSession::new("", 0.0, -5.0, -1.0, 0);
        assert_eq!(
            fields(validate_new_session(&new)),
            vec!["bet_amount", "duration", "win_amount", "loss_amount", "game_type"]
        );
    }

    #[test]
    fn test_nan_bet_rejected() {
        let new = NewSession::new("Keno", f64::NAN, 0.0, 0.0, 5);
        assert_eq!(fields(validate_new_session(&new)), vec!["bet_amount"]);
    }

    #[test]
    fn test_debt_terms() {
        assert!(validate_debt_terms(10_000.0, 300.0, 0.0).is_ok());
        assert_eq!(
            fields(validate_debt_terms(0.0, 0.0, 18.0)),
            vec!["total_debt", "monthly_payment"]
        );
    }

    #[test]
    fn test_profitability_inputs() {
        assert!(validate_profitability_inputs(1000.0, 50.0, 8.0).is_ok());
        assert_eq!(fields(validate_profitability_inputs(1000.0, 0.0, 8.0)), vec!["average_bet"]);
    }
}
