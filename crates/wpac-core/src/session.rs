//! The submission state machine.
//!
//! Modeled as a pure function `step(state, event) -> (state, effects)` so the
//! Loading/Result/Error transitions are testable without a network layer or a
//! real UI. Drivers apply the returned effects, in order, to a [`UiHandle`]
//! and feed the dispatcher's outcome back as [`Event::Resolved`].

use crate::dispatch::{Outcome, IN_FLIGHT_MESSAGE};
use crate::model::AnalysisResult;
use crate::render::{self, DisplayModel};
use crate::url_check;

/// Fixed message for submitting an empty (or whitespace-only) input.
/// Deliberately distinct from the live validity message.
pub const EMPTY_INPUT_MESSAGE: &str = "Enter a URL to analyze";

/// Transient per-session state. Created on startup, never persisted;
/// result and error are never shown simultaneously.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    Loading,
    ShowingResult(AnalysisResult),
    ShowingError(String),
}

/// Inputs to the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The input field changed; refresh the advisory validity annotation.
    InputChanged(String),
    /// The user triggered a submission with the field's raw text.
    Submit(String),
    /// The dispatcher resolved the outstanding request.
    Resolved(Outcome),
}

/// Ordered instructions for the driver. `SetBusy(false)` always precedes the
/// panel effect on paths out of Loading, so the trigger is re-enabled even if
/// the render sink fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetValidity(Option<&'static str>),
    SetBusy(bool),
    HidePanels,
    Dispatch(String),
    ShowResult(DisplayModel),
    ShowError(String),
}

/// Anchor points of the host presentation: busy trigger, result panel,
/// error panel, input validity annotation. Passed in explicitly so tests
/// can substitute a recording double.
pub trait UiHandle {
    fn set_validity(&mut self, message: Option<&'static str>);
    fn set_busy(&mut self, busy: bool);
    fn hide_panels(&mut self);
    fn show_result(&mut self, model: &DisplayModel);
    fn show_error(&mut self, message: &str);
}

/// Advances the machine by one event.
pub fn step(state: UiState, event: Event) -> (UiState, Vec<Effect>) {
    match (state, event) {
        (state, Event::InputChanged(text)) => {
            let effects = vec![Effect::SetValidity(url_check::validity_message(&text))];
            (state, effects)
        }

        // A submit while a request is outstanding is inert; the trigger is
        // disabled, and drivers that bypass it hit the dispatcher's own guard.
        (UiState::Loading, Event::Submit(_)) => (UiState::Loading, Vec::new()),

        (_, Event::Submit(raw)) => {
            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() {
                // No request is dispatched; Loading is never entered.
                return (
                    UiState::ShowingError(EMPTY_INPUT_MESSAGE.to_string()),
                    vec![
                        Effect::HidePanels,
                        Effect::ShowError(EMPTY_INPUT_MESSAGE.to_string()),
                    ],
                );
            }
            (
                UiState::Loading,
                vec![
                    Effect::HidePanels,
                    Effect::SetBusy(true),
                    Effect::Dispatch(trimmed),
                ],
            )
        }

        (UiState::Loading, Event::Resolved(outcome)) => match outcome {
            Outcome::Success(result) => {
                let model = render::render(&result);
                (
                    UiState::ShowingResult(result),
                    vec![Effect::SetBusy(false), Effect::ShowResult(model)],
                )
            }
            failure => {
                let message = error_message(&failure);
                (
                    UiState::ShowingError(message.clone()),
                    vec![Effect::SetBusy(false), Effect::ShowError(message)],
                )
            }
        },

        // A resolution with no outstanding request is ignored.
        (state, Event::Resolved(_)) => (state, Vec::new()),
    }
}

/// Applies effects to the handle in order. Returns the URL of a `Dispatch`
/// effect, if present, for the driver to hand to the dispatcher.
pub fn apply(effects: Vec<Effect>, ui: &mut dyn UiHandle) -> Option<String> {
    let mut dispatch = None;
    for effect in effects {
        match effect {
            Effect::SetValidity(message) => ui.set_validity(message),
            Effect::SetBusy(busy) => ui.set_busy(busy),
            Effect::HidePanels => ui.hide_panels(),
            Effect::Dispatch(url) => dispatch = Some(url),
            Effect::ShowResult(model) => ui.show_result(&model),
            Effect::ShowError(message) => ui.show_error(&message),
        }
    }
    dispatch
}

fn error_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Upstream {
            status_code,
            description,
        } => format!("HTTP {status_code}: {description}"),
        Outcome::Generic(message)
        | Outcome::Transport(message)
        | Outcome::Malformed(message) => message.clone(),
        Outcome::InFlight => IN_FLIGHT_MESSAGE.to_string(),
        Outcome::Success(_) => unreachable!("success is not an error outcome"),
    }
}
