//! Camera event handling.
//!
//! Capture requests are served off the UI thread so the render loop stays
//! responsive while a capture is in flight. There is no cancellation token;
//! a result arriving after the user left the checklist simply lands as an
//! alert or a no-op on shared state.

use crate::camera::{capture_with_fallback, CameraProvider, CaptureOptions, CaptureOutcome};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::{Arc, Mutex};

const ALERT_TITLE: &str = "Camera launch failed";
const FALLBACK_ERROR_MESSAGE: &str = "Unable to open the camera.";
const FAULT_FALLBACK_MESSAGE: &str =
    "Unable to open the camera. Reinstall the capture tool and try again.";

/// Specify different camera event types.
///
#[derive(Debug, Clone)]
pub enum Request {
    Capture { options: CaptureOptions },
}

/// Specify struct for managing state with camera events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    primary: Box<dyn CameraProvider>,
    legacy: Vec<Box<dyn CameraProvider>>,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state and the default provider
    /// chain.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>) -> Self {
        Self::with_providers(
            state,
            crate::camera::primary_provider(),
            crate::camera::legacy_providers(),
        )
    }

    /// Return new instance with an explicit provider chain.
    ///
    pub fn with_providers(
        state: &'a Arc<Mutex<State>>,
        primary: Box<dyn CameraProvider>,
        legacy: Vec<Box<dyn CameraProvider>>,
    ) -> Self {
        Handler {
            state,
            primary,
            legacy,
        }
    }

    /// Handle camera events by type.
    ///
    pub fn handle(&mut self, request: Request) -> Result<()> {
        debug!("Processing camera event '{:?}'...", request);
        match request {
            Request::Capture { options } => self.capture(options)?,
        }
        Ok(())
    }

    /// Run one capture attempt and apply the outcome to shared state:
    /// cancellation is silent, a failure raises a dismissable alert, and a
    /// fault raises an alert with best-effort message extraction.
    ///
    fn capture(&mut self, options: CaptureOptions) -> Result<()> {
        let outcome = capture_with_fallback(self.primary.as_ref(), &self.legacy, &options);
        let mut state = self
            .state
            .lock()
            .map_err(|_| anyhow::anyhow!("State lock poisoned"))?;
        match outcome {
            Ok(CaptureOutcome::Captured) => {
                info!("Capture finished.");
            }
            Ok(CaptureOutcome::Cancelled) => {
                debug!("Capture cancelled by user.");
            }
            Ok(CaptureOutcome::Failed { message }) => {
                warn!("Capture failed: {:?}", message);
                state.set_alert(
                    ALERT_TITLE,
                    message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
                );
            }
            Err(e) => {
                error!("Camera launch faulted: {}", e);
                let message = e.to_string();
                state.set_alert(
                    ALERT_TITLE,
                    if message.is_empty() {
                        FAULT_FALLBACK_MESSAGE.to_string()
                    } else {
                        message
                    },
                );
            }
        }
        Ok(())
    }
}
