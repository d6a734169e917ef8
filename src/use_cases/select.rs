use super::types::Selection;
use crate::domain::ProjectedViewState;

#[derive(Debug, PartialEq, Eq)]
pub enum SelectError {
    BlankOption,
    NoActivePrompt,
}

// The server validates the option itself, so unlisted options (e.g. an
// early-stop choice) are passed through untouched.
pub fn prepare_selection(
    view: &ProjectedViewState,
    option: &str,
) -> Result<Selection, SelectError> {
    let option = option.trim();
    if option.is_empty() {
        return Err(SelectError::BlankOption);
    }
    if !view.has_active_prompt() {
        return Err(SelectError::NoActivePrompt);
    }

    Ok(Selection {
        option: option.to_string(),
        commit: view.commit.clone(),
    })
}
