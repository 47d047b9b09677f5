//! Bottom-tab style navigation between the three screens.
use strum_macros::{Display, EnumIter, EnumString};

/// Named destinations of the navigation chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Tab {
    /// Quote of the day.
    #[default]
    Home,
    /// Daily diary with happiness/productivity ratings.
    #[strum(to_string = "My Diary", serialize = "diary")]
    Diary,
    /// Profile form and image picker.
    Profile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("home".parse::<Tab>().unwrap(), Tab::Home);
        assert_eq!("DIARY".parse::<Tab>().unwrap(), Tab::Diary);
        assert_eq!("my diary".parse::<Tab>().unwrap(), Tab::Diary);
        assert_eq!("Profile".parse::<Tab>().unwrap(), Tab::Profile);
        assert!("settings".parse::<Tab>().is_err());
    }

    #[test]
    fn labels_match_the_tab_bar() {
        let labels: Vec<String> = Tab::iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, vec!["Home", "My Diary", "Profile"]);
    }

    #[test]
    fn starts_on_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }
}
