//! `wpac check` – validate a URL locally, without contacting the service.

use crate::cli::ui::{ConsoleUi, OutputFormat};
use wpac_core::session::{self, Event, UiState};
use wpac_core::url_check;

/// Prints the validation verdict; returns true when the input is acceptable.
pub fn run_check(url: &str) -> bool {
    let mut ui = ConsoleUi::new(OutputFormat::Text);
    // Same advisory annotation the input-change hook produces live.
    let (_, effects) = session::step(UiState::Idle, Event::InputChanged(url.to_string()));
    session::apply(effects, &mut ui);

    match url_check::normalize(url) {
        Some(normalized) => {
            println!("valid: {normalized}");
            true
        }
        None => {
            println!("invalid");
            false
        }
    }
}
