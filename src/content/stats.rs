//! Headline investment statistics.

use crate::content::Icon;
use crate::i18n::Language;

pub const STAT_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    /// Unit suffix; empty when the value stands alone
    pub unit: &'static str,
    pub icon: Icon,
}

pub static STATS: [Stat; STAT_COUNT] = [
    Stat { value: "2M", unit: "m²", icon: Icon::MapPin },
    Stat { value: "5B+", unit: "SAR", icon: Icon::TrendingUp },
    Stat { value: "8B+", unit: "SAR", icon: Icon::Banknote },
    Stat { value: "4000+", unit: "", icon: Icon::Users },
    Stat { value: "30%", unit: "+", icon: Icon::Ship },
    Stat { value: "7+", unit: "", icon: Icon::Building },
];

/// Statistics paired with their labels in `language`.
pub fn localized(language: Language) -> impl Iterator<Item = (&'static Stat, &'static str)> {
    STATS
        .iter()
        .zip(language.strings().stats.labels.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_labels() {
        let english: Vec<_> = localized(Language::ENGLISH).collect();
        assert_eq!(english.len(), STAT_COUNT);
        assert_eq!(english[0].0.value, "2M");
        assert_eq!(english[0].1, "Total Area");

        let arabic: Vec<_> = localized(Language::ARABIC).collect();
        assert_eq!(arabic[3].1, "فرص وظيفية");
    }

    #[test]
    fn test_values_are_not_empty() {
        assert!(STATS.iter().all(|s| !s.value.is_empty()));
    }
}
