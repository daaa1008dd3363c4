//! Camera capability shim.
//!
//! The checklist screen can fire a one-shot photo capture. The capability is
//! opaque: a primary provider is attempted first and, when it errors, a
//! fixed-priority list of legacy providers is probed and the first available
//! one is used. If none is available the primary's original error is
//! surfaced. Captured frames are written to a temp file and removed
//! immediately; only success/cancel/failure signaling leaves this module.

use log::*;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// Errors that can occur while launching the camera.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// Provider binary not present on PATH
    #[error("Camera capability '{0}' is not available")]
    Unavailable(String),

    /// Provider process failed to start
    #[error("Failed to launch camera '{name}': {source}")]
    Launch {
        name: String,
        source: std::io::Error,
    },
}

/// Kind of media to capture.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MediaKind {
    Photo,
}

/// Which camera to use.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CameraFacing {
    Back,
}

/// Options for one capture attempt.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CaptureOptions {
    pub media_kind: MediaKind,
    pub facing: CameraFacing,
    pub save_to_gallery: bool,
}

impl Default for CaptureOptions {
    fn default() -> CaptureOptions {
        CaptureOptions {
            media_kind: MediaKind::Photo,
            facing: CameraFacing::Back,
            save_to_gallery: false,
        }
    }
}

/// Outcome of a capture attempt, shared by the primary and legacy paths.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CaptureOutcome {
    Captured,
    Cancelled,
    Failed { message: Option<String> },
}

/// A camera capability provider. Implementations adapt whatever the host
/// offers into the common `CaptureOutcome` shape.
///
pub trait CameraProvider {
    /// Stable provider name, used for logs and errors.
    fn name(&self) -> &str;

    /// Whether the capability can be invoked at all.
    fn is_available(&self) -> bool;

    /// Attempt one capture.
    fn capture(&self, options: &CaptureOptions) -> Result<CaptureOutcome, CameraError>;
}

/// Try the primary provider and fall back to the legacy providers in their
/// given priority order. Only the first available legacy provider is
/// invoked; when none is available the primary's original error is returned.
///
pub fn capture_with_fallback(
    primary: &dyn CameraProvider,
    legacy: &[Box<dyn CameraProvider>],
    options: &CaptureOptions,
) -> Result<CaptureOutcome, CameraError> {
    match primary.capture(options) {
        Ok(outcome) => Ok(outcome),
        Err(primary_error) => {
            warn!(
                "Primary camera '{}' failed ({}); probing legacy providers...",
                primary.name(),
                primary_error
            );
            match legacy.iter().find(|provider| provider.is_available()) {
                Some(provider) => {
                    info!("Falling back to legacy camera '{}'.", provider.name());
                    provider.capture(options)
                }
                None => Err(primary_error),
            }
        }
    }
}

/// A provider backed by a command-line capture tool.
///
/// The capture writes a single frame to a temp file which is removed right
/// away, honoring the no-gallery contract. A process killed by a signal is
/// treated as user cancellation; any other non-zero exit is a failure
/// carrying the tool's stderr.
pub struct CommandProvider {
    name: String,
    program: String,
    args: fn(&PathBuf) -> Vec<OsString>,
}

impl CommandProvider {
    pub fn new(name: &str, program: &str, args: fn(&PathBuf) -> Vec<OsString>) -> Self {
        CommandProvider {
            name: name.to_string(),
            program: program.to_string(),
            args,
        }
    }

    fn output_path(&self) -> PathBuf {
        std::env::temp_dir().join(format!("homescout-capture-{}.jpg", std::process::id()))
    }
}

impl CameraProvider for CommandProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        binary_on_path(&self.program)
    }

    fn capture(&self, options: &CaptureOptions) -> Result<CaptureOutcome, CameraError> {
        if !self.is_available() {
            return Err(CameraError::Unavailable(self.name.clone()));
        }
        debug!(
            "Capturing {:?} via '{}' (facing: {:?}, gallery: {})...",
            options.media_kind, self.name, options.facing, options.save_to_gallery
        );
        let output_path = self.output_path();
        let output = Command::new(&self.program)
            .args((self.args)(&output_path))
            .output()
            .map_err(|e| CameraError::Launch {
                name: self.name.clone(),
                source: e,
            })?;

        // Never keep the frame around.
        let _ = std::fs::remove_file(&output_path);

        if output.status.success() {
            return Ok(CaptureOutcome::Captured);
        }
        if output.status.code().is_none() {
            // Killed by a signal: the user aborted the capture.
            return Ok(CaptureOutcome::Cancelled);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = stderr.lines().last().map(|line| line.trim().to_string());
        Ok(CaptureOutcome::Failed { message })
    }
}

/// Check whether a binary can be found on PATH.
///
fn binary_on_path(program: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| dir.join(program).is_file())
}

/// Return the primary capture provider.
///
pub fn primary_provider() -> Box<dyn CameraProvider> {
    Box::new(CommandProvider::new("ffmpeg", "ffmpeg", |out| {
        vec![
            OsString::from("-y"),
            OsString::from("-f"),
            OsString::from("v4l2"),
            OsString::from("-i"),
            OsString::from("/dev/video0"),
            OsString::from("-frames:v"),
            OsString::from("1"),
            out.into(),
        ]
    }))
}

/// Return the legacy providers in their fixed priority order.
///
pub fn legacy_providers() -> Vec<Box<dyn CameraProvider>> {
    vec![
        Box::new(CommandProvider::new("fswebcam", "fswebcam", |out| {
            vec![OsString::from("--no-banner"), out.into()]
        })),
        Box::new(CommandProvider::new("streamer", "streamer", |out| {
            vec![OsString::from("-o"), out.into()]
        })),
        Box::new(CommandProvider::new("uvccapture", "uvccapture", |out| {
            let mut arg = OsString::from("-o");
            arg.push(out);
            vec![arg]
        })),
    ]
}
