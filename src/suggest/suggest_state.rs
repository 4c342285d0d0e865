use tokio_util::sync::CancellationToken;

use crate::suggest::worker::SuggestResponse;
use crate::suggest::Suggestion;

/// Dropdown visibility as an explicit value
///
/// `Shown` always carries a non-empty item list: an empty response hides
/// the dropdown instead of showing an empty box.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dropdown {
    #[default]
    Hidden,
    Shown {
        items: Vec<Suggestion>,
        selected: Option<usize>,
    },
}

impl Dropdown {
    pub fn is_shown(&self) -> bool {
        matches!(self, Dropdown::Shown { .. })
    }

    /// Name of the item at `index`, if the dropdown is shown and the index is valid
    pub fn item_name(&self, index: usize) -> Option<&str> {
        match self {
            Dropdown::Shown { items, .. } => items.get(index).map(|s| s.name.as_str()),
            Dropdown::Hidden => None,
        }
    }
}

/// Suggestion fetch state owned by the UI thread
///
/// Tracks the dropdown plus the request sequence. Every issued request
/// gets a fresh monotonic id; responses carrying any other id are stale
/// and get discarded, so a slow early response can never overwrite the
/// result of a later keystroke.
pub struct SuggestState {
    pub dropdown: Dropdown,
    latest_request_id: u64,
    in_flight: Option<CancellationToken>,
}

impl SuggestState {
    pub fn new() -> Self {
        Self {
            dropdown: Dropdown::Hidden,
            latest_request_id: 0,
            in_flight: None,
        }
    }

    /// Start a new request: cancel the previous one and allocate the next id
    ///
    /// # Returns
    /// The request id and the cancellation token to ship with the request.
    pub fn begin_request(&mut self) -> (u64, CancellationToken) {
        self.cancel_in_flight();
        self.latest_request_id += 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        (self.latest_request_id, token)
    }

    /// Cancel the in-flight request, if any
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Drop interest in any outstanding request
    ///
    /// Cancels it and advances the sequence, so a fetch that resolved
    /// just before the cancellation reached it is still stale on
    /// arrival. Used when the input empties and no result may be shown.
    pub fn invalidate_pending(&mut self) {
        self.cancel_in_flight();
        self.latest_request_id += 1;
    }

    /// Hide the dropdown without touching the request sequence
    pub fn hide(&mut self) {
        self.dropdown = Dropdown::Hidden;
    }

    /// Apply a worker response
    ///
    /// Stale responses (any id other than the latest issued) are
    /// discarded. A failed fetch retains the prior dropdown state, so
    /// the list simply does not update.
    ///
    /// # Returns
    /// `true` if the response was current and applied, `false` if discarded.
    pub fn apply_response(&mut self, response: SuggestResponse) -> bool {
        match response {
            SuggestResponse::Results { items, request_id } => {
                if request_id != self.latest_request_id {
                    log::debug!(
                        "discarding stale results for request {} (latest: {})",
                        request_id,
                        self.latest_request_id
                    );
                    return false;
                }
                self.in_flight = None;
                self.dropdown = if items.is_empty() {
                    Dropdown::Hidden
                } else {
                    Dropdown::Shown {
                        items,
                        selected: None,
                    }
                };
                true
            }
            SuggestResponse::Failed {
                message,
                request_id,
            } => {
                if request_id != self.latest_request_id {
                    log::debug!("discarding stale failure for request {}", request_id);
                    return false;
                }
                self.in_flight = None;
                log::debug!("suggest fetch failed for request {}: {}", request_id, message);
                true
            }
            SuggestResponse::Cancelled { request_id } => {
                log::debug!("request {} cancelled", request_id);
                if request_id == self.latest_request_id {
                    self.in_flight = None;
                }
                false
            }
        }
    }

    /// Move the keyboard selection down, wrapping at the end
    pub fn select_next(&mut self) {
        if let Dropdown::Shown { items, selected } = &mut self.dropdown {
            *selected = Some(match selected {
                None => 0,
                Some(i) => (*i + 1) % items.len(),
            });
        }
    }

    /// Move the keyboard selection up, wrapping at the start
    pub fn select_prev(&mut self) {
        if let Dropdown::Shown { items, selected } = &mut self.dropdown {
            *selected = Some(match selected {
                None => items.len() - 1,
                Some(i) => (*i + items.len() - 1) % items.len(),
            });
        }
    }

    /// Index of the keyboard-selected row, if any
    pub fn selected_index(&self) -> Option<usize> {
        match &self.dropdown {
            Dropdown::Shown { selected, .. } => *selected,
            Dropdown::Hidden => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn latest_request_id(&self) -> u64 {
        self.latest_request_id
    }
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
