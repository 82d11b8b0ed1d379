//! Text rendering of the status page.

use std::fmt;

use crate::state::ViewState;

const EYEBROW: &str = "Family Task Manager";
const HEADING: &str = "Project Foundation Ready";

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Loading => f.write_str("Backend status: loading..."),
            ViewState::Ready { environment } => write!(f, "Backend status: ok ({environment})"),
            ViewState::Error => f.write_str("Backend status: unavailable"),
        }
    }
}

/// The status line for `state`.
pub fn render(state: &ViewState) -> String {
    state.to_string()
}

/// The whole status card, one line per element.
pub fn render_page(state: &ViewState, base_url: &str) -> String {
    format!(
        "{EYEBROW}\n{HEADING}\nThis scaffold wires the status page to the backend through {base_url}.\n{state}"
    )
}
