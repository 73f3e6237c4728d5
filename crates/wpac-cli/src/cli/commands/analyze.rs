//! `wpac analyze` – drive one submission cycle against the service.

use crate::cli::ui::{ConsoleUi, OutputFormat};
use anyhow::{Context, Result};
use std::sync::Arc;
use wpac_core::config;
use wpac_core::dispatch::Dispatcher;
use wpac_core::session::{self, Event, UiState};

/// Runs the submit → dispatch → render cycle. Returns true when the session
/// ends showing a result, false when it ends showing an error.
pub async fn run_analyze(
    url: &str,
    endpoint: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    let cfg = config::load_or_init().context("failed to load configuration")?;
    let endpoint = endpoint.unwrap_or(&cfg.endpoint);
    tracing::debug!(endpoint, "analyzing via configured endpoint");

    let dispatcher = Arc::new(Dispatcher::new(endpoint, cfg.user_agent.clone()));
    let mut ui = ConsoleUi::new(format);

    let (mut state, effects) = session::step(UiState::Idle, Event::Submit(url.to_string()));
    if let Some(target) = session::apply(effects, &mut ui) {
        let d = Arc::clone(&dispatcher);
        let outcome = tokio::task::spawn_blocking(move || d.submit(&target))
            .await
            .context("dispatch task failed")?;
        let (next, effects) = session::step(state, Event::Resolved(outcome));
        state = next;
        session::apply(effects, &mut ui);
    }

    Ok(matches!(state, UiState::ShowingResult(_)))
}
