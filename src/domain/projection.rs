// Pure projection of a move payload into display-ready text.

use super::payload::{Reps, ServerMovePayload, Side};

pub const USSR_PROMPT: &str = "----- USSR Player: -----";
pub const US_PROMPT: &str = "----- US Player: -----";
pub const RNG_PROMPT: &str = "----- RNG: -----";
pub const AVAILABLE_OPTIONS_HEADER: &str = "Available options:";

/// Display state derived from the most recent move payload.
///
/// Rebuilt in full on every move; nothing carries over from the previous
/// projection except the `game_in_progress` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedViewState {
    pub log_line: String,
    pub side_prompt: String,
    pub reps_line: String,
    pub options_block: String,
    pub notification: String,
    pub side: Option<Side>,
    pub input_type: String,
    pub current_selection: String,
    pub selected_this_turn: String,
    pub available_options: Vec<(String, String)>,
    pub commit: String,
    pub game_in_progress: bool,
}

impl ProjectedViewState {
    /// A prompt is active once a recognised side has been addressed.
    pub fn has_active_prompt(&self) -> bool {
        !self.side_prompt.is_empty()
    }
}

pub fn side_prompt(side: Option<Side>) -> &'static str {
    match side {
        Some(Side::Ussr) => USSR_PROMPT,
        Some(Side::Us) => US_PROMPT,
        Some(Side::Rng) => RNG_PROMPT,
        None => "",
    }
}

pub fn format_reps(reps: Option<&Reps>) -> String {
    match reps {
        Some(reps) => format!("Remaining {}: {}", reps.label, reps.count),
        None => String::new(),
    }
}

pub fn format_options(options: &[(String, String)]) -> String {
    options
        .iter()
        .map(|(key, label)| format!("{key} \t {label} "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the log text shown to the player.
///
/// Without a side prompt only the notification is shown.
pub fn compose_log(
    notification: &str,
    current_selection: &str,
    side_prompt: &str,
    reps_line: &str,
    options_block: &str,
) -> String {
    if side_prompt.is_empty() {
        return notification.to_string();
    }

    [
        notification,
        current_selection,
        side_prompt,
        reps_line,
        AVAILABLE_OPTIONS_HEADER,
        options_block,
    ]
    .join("\n")
}

pub fn project(payload: &ServerMovePayload, game_in_progress: bool) -> ProjectedViewState {
    let side_prompt = side_prompt(payload.side);
    let reps_line = format_reps(payload.reps.as_ref());
    let options_block = format_options(&payload.available_options);
    let log_line = compose_log(
        &payload.notification,
        &payload.current_selection,
        side_prompt,
        &reps_line,
        &options_block,
    );

    ProjectedViewState {
        log_line,
        side_prompt: side_prompt.to_string(),
        reps_line,
        options_block,
        notification: payload.notification.clone(),
        side: payload.side,
        input_type: payload.input_type.clone(),
        current_selection: payload.current_selection.clone(),
        selected_this_turn: payload.selected_this_turn.clone(),
        available_options: payload.available_options.clone(),
        commit: payload.commit.clone(),
        game_in_progress,
    }
}
