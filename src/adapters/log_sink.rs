//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured wash events to the `log`
//! facade.  A front-panel display adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::WashEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`WashEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &WashEvent) {
        match event {
            WashEvent::Started {
                program,
                fill_level,
                tablets_used,
            } => {
                info!(
                    "START | program={} | fill={} | tablets={}",
                    program,
                    fill_level,
                    if *tablets_used { "yes" } else { "no" },
                );
            }
            WashEvent::StateChanged { from, to } => {
                info!("STATE | {} -> {}", from, to);
            }
            WashEvent::Aborted { state, status } => {
                warn!("ABORT | in {} | status={}", state, status);
            }
            WashEvent::Finished(result) => {
                info!("DONE  | {}", result);
            }
        }
    }
}
