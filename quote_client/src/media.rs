//! Media library boundary used by the profile image picker.
//!
//! Permission is asked once when the picker mounts. A denial produces a blocking
//! alert and leaves the picker unusable; a cancelled pick changes nothing; a
//! successful pick stores the returned URI verbatim.
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use quote_common::{QuoteError, Result};

/// Alert shown when media library access is refused.
pub const PERMISSION_DENIED_ALERT: &str =
    "Sorry, we need camera roll permissions to make this work!";

/// Answer of the platform permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// What the platform picker returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Local URI of the chosen image.
    Picked(String),
    Cancelled,
}

/// Platform media library: a permission prompt plus an image picker.
pub trait MediaLibrary: Send {
    /// Asks for access to the media library.
    fn request_permission(&self) -> PermissionStatus;

    /// Opens the picker. `request` carries whatever the user typed to choose an image.
    fn launch_picker(&self, request: &str) -> PickOutcome;
}

/// Image picker state owned by the profile screen.
pub struct ImagePicker {
    library: Box<dyn MediaLibrary>,
    permission: Option<PermissionStatus>,
    image: Option<String>,
}

impl ImagePicker {
    pub fn new(library: Box<dyn MediaLibrary>) -> Self {
        Self {
            library,
            permission: None,
            image: None,
        }
    }

    /// Requests permission on first mount. Returns the alert to show on denial.
    pub fn mount(&mut self) -> Option<&'static str> {
        if self.permission.is_some() {
            return None;
        }
        let status = self.library.request_permission();
        self.permission = Some(status);
        match status {
            PermissionStatus::Granted => {
                info!("Media library permission granted");
                None
            }
            PermissionStatus::Denied => {
                warn!("Media library permission denied");
                Some(PERMISSION_DENIED_ALERT)
            }
        }
    }

    /// Opens the picker. Returns `true` when a new image was stored.
    pub fn pick(&mut self, request: &str) -> Result<bool> {
        if self.permission != Some(PermissionStatus::Granted) {
            return Err(QuoteError::PermissionDenied);
        }
        match self.library.launch_picker(request) {
            PickOutcome::Picked(uri) => {
                info!("Picked image {}", uri);
                self.image = Some(uri);
                Ok(true)
            }
            PickOutcome::Cancelled => {
                debug!("Image selection cancelled");
                Ok(false)
            }
        }
    }

    /// URI of the current image, exactly as the picker returned it.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// Media library backed by a local directory.
///
/// Permission is granted when the directory can be read. A pick resolves the request
/// relative to the directory and must land on a file inside it; anything else counts
/// as a cancellation.
pub struct FsMediaLibrary {
    root: Option<PathBuf>,
}

impl FsMediaLibrary {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl MediaLibrary for FsMediaLibrary {
    fn request_permission(&self) -> PermissionStatus {
        match &self.root {
            Some(root) if fs::read_dir(root).is_ok() => PermissionStatus::Granted,
            _ => PermissionStatus::Denied,
        }
    }

    fn launch_picker(&self, request: &str) -> PickOutcome {
        let request = request.trim();
        let Some(root) = &self.root else {
            return PickOutcome::Cancelled;
        };
        if request.is_empty() {
            return PickOutcome::Cancelled;
        }

        let (Ok(root), Ok(path)) = (root.canonicalize(), root.join(request).canonicalize()) else {
            debug!("No such image: {}", request);
            return PickOutcome::Cancelled;
        };
        if !path.starts_with(&root) || !path.is_file() {
            debug!("{} is not an image inside {}", path.display(), root.display());
            return PickOutcome::Cancelled;
        }
        PickOutcome::Picked(format!("file://{}", path.display()))
    }
}
