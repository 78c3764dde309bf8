//! Session, debt and settings records

use crate::calculations::{months_to_payoff, Currency};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Fields supplied when logging a new session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    pub date: DateTime<Utc>,
    pub game_type: String,
    pub bet_amount: f64,
    pub win_amount: f64,
    pub loss_amount: f64,
    /// Minutes played
    pub duration: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewSession {
    /// New session dated now
    pub fn new(
        game_type: impl Into<String>,
        bet_amount: f64,
        win_amount: f64,
        loss_amount: f64,
        duration: u32,
    ) -> Self {
        Self {
            date: Utc::now(),
            game_type: game_type.into(),
            bet_amount,
            win_amount,
            loss_amount,
            duration,
            location: None,
            notes: None,
        }
    }

    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn net_result(&self) -> f64 {
        self.win_amount - self.loss_amount
    }
}

/// Replacement values for every mutable field of a session.
/// The id and the date are preserved by an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    pub game_type: String,
    pub bet_amount: f64,
    pub win_amount: f64,
    pub loss_amount: f64,
    pub duration: u32,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl From<&Session> for SessionUpdate {
    fn from(session: &Session) -> Self {
        Self {
            game_type: session.game_type.clone(),
            bet_amount: session.bet_amount,
            win_amount: session.win_amount,
            loss_amount: session.loss_amount,
            duration: session.duration,
            location: session.location.clone(),
            notes: session.notes.clone(),
        }
    }
}

/// One logged gambling session
///
/// `net_result` is stored alongside `win_amount` and `loss_amount` and is
/// always equal to `win_amount - loss_amount`. Fields are private so the
/// only ways to change the amounts go through [`Session::apply`], and
/// deserialization recomputes the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SessionRecord")]
pub struct Session {
    id: String,
    date: DateTime<Utc>,
    game_type: String,
    bet_amount: f64,
    win_amount: f64,
    loss_amount: f64,
    net_result: f64,
    duration: u32,
    location: Option<String>,
    notes: Option<String>,
}

/// Serialized shape of a session; `net_result` on disk is ignored
#[derive(Deserialize)]
struct SessionRecord {
    id: String,
    date: DateTime<Utc>,
    game_type: String,
    bet_amount: f64,
    win_amount: f64,
    loss_amount: f64,
    duration: u32,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl From<SessionRecord> for Session {
    fn from(r: SessionRecord) -> Self {
        Self {
            net_result: r.win_amount - r.loss_amount,
            id: r.id,
            date: r.date,
            game_type: r.game_type,
            bet_amount: r.bet_amount,
            win_amount: r.win_amount,
            loss_amount: r.loss_amount,
            duration: r.duration,
            location: r.location,
            notes: r.notes,
        }
    }
}

impl Session {
    /// Create a session with a freshly generated id
    pub fn create(new: NewSession) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), new)
    }

    pub fn with_id(id: impl Into<String>, new: NewSession) -> Self {
        Self {
            id: id.into(),
            net_result: new.net_result(),
            date: new.date,
            game_type: new.game_type,
            bet_amount: new.bet_amount,
            win_amount: new.win_amount,
            loss_amount: new.loss_amount,
            duration: new.duration,
            location: new.location,
            notes: new.notes,
        }
    }

    /// Replace every mutable field and recompute the net result
    pub fn apply(&mut self, update: SessionUpdate) {
        self.game_type = update.game_type;
        self.bet_amount = update.bet_amount;
        self.win_amount = update.win_amount;
        self.loss_amount = update.loss_amount;
        self.net_result = update.win_amount - update.loss_amount;
        self.duration = update.duration;
        self.location = update.location;
        self.notes = update.notes;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn game_type(&self) -> &str {
        &self.game_type
    }

    pub fn bet_amount(&self) -> f64 {
        self.bet_amount
    }

    pub fn win_amount(&self) -> f64 {
        self.win_amount
    }

    pub fn loss_amount(&self) -> f64 {
        self.loss_amount
    }

    pub fn net_result(&self) -> f64 {
        self.net_result
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_win(&self) -> bool {
        self.net_result > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.net_result < 0.0
    }

    pub fn is_break_even(&self) -> bool {
        self.net_result == 0.0
    }
}

/// Debt the user is paying down. At most one exists per store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtInfo {
    pub total_debt: f64,
    pub monthly_payment: f64,
    /// Annual interest rate in percent (18.0 = 18% APR)
    pub interest_rate: f64,
    /// `None` when the payment never covers the interest
    pub original_payoff_date: Option<NaiveDate>,
    pub current_payoff_date: Option<NaiveDate>,
}

impl DebtInfo {
    /// Record debt terms as of `today`, with both payoff dates set to the
    /// plain amortization schedule
    pub fn from_terms(
        total_debt: f64,
        monthly_payment: f64,
        interest_rate: f64,
        today: NaiveDate,
    ) -> Self {
        let payoff =
            months_to_payoff(total_debt, monthly_payment, interest_rate).payoff_date(today);
        Self {
            total_debt,
            monthly_payment,
            interest_rate,
            original_payoff_date: payoff,
            current_payoff_date: payoff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    #[serde(default)]
    pub theme: Theme,
}

fn default_notifications() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            notifications: true,
            theme: Theme::Dark,
        }
    }
}
