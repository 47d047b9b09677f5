//! Profile screen: a few free-text fields plus the image picker.
use std::io::{self, Write};

use quote_common::Result;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::media::{ImagePicker, MediaLibrary};
use crate::screen::Screen;

/// Editable profile fields, parsed from the command verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ProfileField {
    Name,
    #[strum(to_string = "D.O.B", serialize = "dob")]
    Dob,
    #[strum(to_string = "Current mood", serialize = "mood")]
    Mood,
    #[strum(to_string = "Dream job", serialize = "job")]
    Job,
}

impl ProfileField {
    pub fn placeholder(self) -> &'static str {
        match self {
            ProfileField::Name => "Your name",
            ProfileField::Dob => "mm/dd/yyyy",
            ProfileField::Mood => "i.e. happy, exhausted, calm, etc.",
            ProfileField::Job => "i.e. CodeHers Ambassador",
        }
    }
}

pub struct ProfileScreen {
    name: String,
    dob: String,
    mood: String,
    job: String,
    picker: ImagePicker,
}

impl ProfileScreen {
    pub fn new(library: Box<dyn MediaLibrary>) -> Self {
        Self {
            name: String::new(),
            dob: String::new(),
            mood: String::new(),
            job: String::new(),
            picker: ImagePicker::new(library),
        }
    }

    /// Mounts the picker. Returns the permission alert on denial.
    pub fn mount(&mut self) -> Option<&'static str> {
        self.picker.mount()
    }

    /// Stores `value` as typed; D.O.B. is not validated.
    pub fn set(&mut self, field: ProfileField, value: &str) {
        *self.field_mut(field) = value.to_string();
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Dob => &self.dob,
            ProfileField::Mood => &self.mood,
            ProfileField::Job => &self.job,
        }
    }

    /// "Upload an image". Returns `true` when a new image was stored.
    pub fn pick_image(&mut self, request: &str) -> Result<bool> {
        self.picker.pick(request)
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Dob => &mut self.dob,
            ProfileField::Mood => &mut self.mood,
            ProfileField::Job => &mut self.job,
        }
    }
}

impl Screen for ProfileScreen {
    fn title(&self) -> &'static str {
        "My Profile"
    }

    fn render_body(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[ Upload an image ]  (`pick <file>`)")?;
        if let Some(uri) = self.picker.image() {
            writeln!(out, "  image: {}", uri)?;
        }
        for field in ProfileField::iter() {
            let value = self.get(field);
            if value.is_empty() {
                writeln!(out, "{}: ({})", field, field.placeholder())?;
            } else {
                writeln!(out, "{}: {}", field, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{PERMISSION_DENIED_ALERT, PermissionStatus, PickOutcome};
    use quote_common::QuoteError;

    struct FixedLibrary(PermissionStatus);

    impl MediaLibrary for FixedLibrary {
        fn request_permission(&self) -> PermissionStatus {
            self.0
        }

        fn launch_picker(&self, request: &str) -> PickOutcome {
            if request.is_empty() {
                PickOutcome::Cancelled
            } else {
                PickOutcome::Picked(format!("file:///media/{}", request))
            }
        }
    }

    fn rendered(profile: &ProfileScreen) -> String {
        let mut out = Vec::new();
        profile.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("name".parse::<ProfileField>().unwrap(), ProfileField::Name);
        assert_eq!("DOB".parse::<ProfileField>().unwrap(), ProfileField::Dob);
        assert_eq!("mood".parse::<ProfileField>().unwrap(), ProfileField::Mood);
        assert_eq!("job".parse::<ProfileField>().unwrap(), ProfileField::Job);
        assert!("email".parse::<ProfileField>().is_err());
    }

    #[test]
    fn renders_placeholders_then_values() {
        let mut profile = ProfileScreen::new(Box::new(FixedLibrary(PermissionStatus::Granted)));
        let empty = rendered(&profile);
        assert!(empty.contains("== My Profile =="));
        assert!(empty.contains("Name: (Your name)"));
        assert!(empty.contains("D.O.B: (mm/dd/yyyy)"));
        assert!(empty.contains("Dream job: (i.e. CodeHers Ambassador)"));

        profile.set(ProfileField::Name, "Ada");
        profile.set(ProfileField::Dob, "not a date");
        let filled = rendered(&profile);
        assert!(filled.contains("Name: Ada"));
        assert!(filled.contains("D.O.B: not a date"));
        assert_eq!(profile.get(ProfileField::Mood), "");
    }

    #[test]
    fn picked_image_is_rendered() {
        let mut profile = ProfileScreen::new(Box::new(FixedLibrary(PermissionStatus::Granted)));
        assert_eq!(profile.mount(), None);
        assert!(profile.pick_image("me.png").unwrap());
        assert!(!profile.pick_image("").unwrap());
        assert!(rendered(&profile).contains("image: file:///media/me.png"));
    }

    #[test]
    fn denied_permission_alerts_and_blocks_the_picker() {
        let mut profile = ProfileScreen::new(Box::new(FixedLibrary(PermissionStatus::Denied)));
        assert_eq!(profile.mount(), Some(PERMISSION_DENIED_ALERT));
        assert!(matches!(profile.pick_image("me.png"), Err(QuoteError::PermissionDenied)));
    }
}
