//! Facility cards shown in the master plan grid.

use crate::content::links::PARTNER_ALUMINUM_URL;
use crate::content::Icon;
use crate::i18n::Language;

pub const FACILITY_COUNT: usize = 8;

/// A facility card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    /// Two-digit sequence number shown on the card
    pub number: &'static str,
    pub icon: Icon,
    /// External site of the operating company, if any
    pub url: Option<&'static str>,
}

impl Facility {
    /// Cards with an external site render as links.
    pub fn is_link(&self) -> bool {
        self.url.is_some()
    }
}

pub static FACILITIES: [Facility; FACILITY_COUNT] = [
    Facility { number: "01", icon: Icon::Building, url: Some(PARTNER_ALUMINUM_URL) },
    Facility { number: "02", icon: Icon::Hammer, url: None },
    Facility { number: "03", icon: Icon::Warehouse, url: None },
    Facility { number: "04", icon: Icon::Settings, url: None },
    Facility { number: "05", icon: Icon::Home, url: None },
    Facility { number: "06", icon: Icon::Zap, url: None },
    Facility { number: "07", icon: Icon::Scroll, url: None },
    Facility { number: "08", icon: Icon::MapPin, url: None },
];

/// Facilities paired with their names in `language`, in display order.
pub fn localized(language: Language) -> impl Iterator<Item = (&'static Facility, &'static str)> {
    FACILITIES
        .iter()
        .zip(language.strings().factories.names.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_sequential() {
        for (i, facility) in FACILITIES.iter().enumerate() {
            assert_eq!(facility.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn test_only_aluminum_profile_links_out() {
        let links: Vec<_> = FACILITIES.iter().filter(|f| f.is_link()).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].number, "01");
        assert_eq!(links[0].url, Some("https://www.nkaluminum.sa"));
    }

    #[test]
    fn test_localized_pairs_names() {
        let english: Vec<_> = localized(Language::ENGLISH).collect();
        let arabic: Vec<_> = localized(Language::ARABIC).collect();

        assert_eq!(english.len(), FACILITY_COUNT);
        assert_eq!(english[0].1, "Aluminum Profile");
        assert_eq!(arabic[0].1, "مقاطع الألمنيوم");
        assert_eq!(english[7].1, "Accommodation");
    }
}
