// Domain-level shape of a server-pushed move update.

/// Who the current prompt is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Ussr,
    Us,
    // Random-event resolver; the server calls this side "neutral".
    Rng,
}

impl Side {
    /// Maps the server's integer side code. Unknown codes have no side.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Side::Ussr),
            1 => Some(Side::Us),
            2 => Some(Side::Rng),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Side::Ussr => 0,
            Side::Us => 1,
            Side::Rng => 2,
        }
    }
}

/// Remaining repetitions for the active prompt, e.g. ("US Ops", "2").
///
/// The count is display text; the server usually sends an integer but
/// whatever arrives is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reps {
    pub label: String,
    pub count: String,
}

/// One move update as pushed by the game server.
///
/// Every field is optional on the wire; missing text fields are empty
/// strings here and missing reps are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerMovePayload {
    pub notification: String,
    pub side: Option<Side>,
    pub input_type: String,
    pub current_selection: String,
    pub selected_this_turn: String,
    pub reps: Option<Reps>,
    // Kept in server order; the option list is displayed as sent.
    pub available_options: Vec<(String, String)>,
    pub commit: String,
}
