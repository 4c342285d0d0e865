use std::sync::mpsc::{self, Receiver, Sender};

use crate::config::ServerConfig;
use crate::error::MandiError;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::suggest::{
    SuggestClient, SuggestRequest, SuggestResponse, SuggestState, spawn_worker,
};

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub regions: LayoutRegions,
    pub server_label: String,
    request_tx: Sender<SuggestRequest>,
    response_rx: Receiver<SuggestResponse>,
    last_text: String,
    should_quit: bool,
    output: Option<String>,
}

impl App {
    /// Create a new App connected to the suggest endpoint
    ///
    /// Spawns the background fetch worker. Fails if the server base URL
    /// does not parse.
    pub fn new(server: &ServerConfig) -> Result<Self, MandiError> {
        let client = SuggestClient::new(&server.base_url)?;
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);

        Ok(Self::with_channels(
            server.base_url.clone(),
            request_tx,
            response_rx,
        ))
    }

    /// Create an App wired to explicit channels, without a worker thread
    pub fn with_channels(
        server_label: String,
        request_tx: Sender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) -> Self {
        Self {
            input: InputState::new(),
            suggest: SuggestState::new(),
            regions: LayoutRegions::new(),
            server_label,
            request_tx,
            response_rx,
            last_text: String::new(),
            should_quit: false,
            output: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Quit, printing the current input text on exit
    pub fn accept_input_and_quit(&mut self) {
        self.output = Some(self.input.text().to_string());
        self.should_quit = true;
    }

    /// Text to print after the terminal is restored, if any
    pub fn take_output(&mut self) -> Option<String> {
        self.output.take()
    }

    /// React to an edit of the input field
    ///
    /// Empty text (after trimming) hides the dropdown and cancels the
    /// in-flight fetch without touching the network; anything else
    /// issues exactly one new request for the trimmed text.
    pub fn on_input_changed(&mut self) {
        let text = self.input.text().to_string();
        if text == self.last_text {
            return;
        }
        self.last_text = text.clone();

        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.suggest.invalidate_pending();
            self.suggest.hide();
            return;
        }

        let (request_id, cancel) = self.suggest.begin_request();
        let request = SuggestRequest {
            query: trimmed.to_string(),
            request_id,
            cancel,
        };
        if self.request_tx.send(request).is_err() {
            log::debug!("suggest worker gone; request {} dropped", request_id);
        }
    }

    /// Activate the dropdown row at `index`
    ///
    /// Copies the row's name into the input field and hides the
    /// dropdown. No request is issued and nothing is submitted.
    pub fn activate_row(&mut self, index: usize) {
        let Some(name) = self.suggest.dropdown.item_name(index).map(str::to_string) else {
            return;
        };

        self.input.set_text(&name);
        // Programmatic edit: keep change detection in sync so the next
        // keystroke diffs against the activated name
        self.last_text = self.input.text().to_string();
        self.suggest.hide();
    }

    /// Apply all pending worker responses
    pub fn drain_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.suggest.apply_response(response);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
