//! View state of the status page.

/// What the status page currently shows.
///
/// Starts as `Loading` and settles at most once per mount into `Ready` or
/// `Error`; both are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Ready {
        environment: String,
    },
    Error,
}

impl ViewState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}
