//! Preset dilemma categories and life stages offered to the user.

use crate::core::language::Language;

const CATEGORIES_ZH: [&str; 7] = [
    "職業生涯轉型",
    "創業與資本",
    "財富管理",
    "職場政治學",
    "危機處理",
    "自我超越",
    "十年願景",
];

const CATEGORIES_EN: [&str; 7] = [
    "Career Pivot",
    "Venture Creation",
    "Wealth Management",
    "Office Politics",
    "Crisis Management",
    "Self Transcendence",
    "Decade Vision",
];

const LIFE_STAGES_ZH: [&str; 5] = ["初入社會", "資深專業人士", "管理階層", "創業家", "自由工作者"];

const LIFE_STAGES_EN: [&str; 5] = [
    "Early Career",
    "Senior Professional",
    "Executive",
    "Founder",
    "Freelancer",
];

/// Dilemma categories in the given language.
///
/// A category may be submitted as the dilemma when no free text is given.
pub fn categories(language: Language) -> &'static [&'static str] {
    match language {
        Language::ZhTw => &CATEGORIES_ZH,
        Language::En => &CATEGORIES_EN,
    }
}

/// Career stages a user may describe themselves with
pub fn life_stages(language: Language) -> &'static [&'static str] {
    match language {
        Language::ZhTw => &LIFE_STAGES_ZH,
        Language::En => &LIFE_STAGES_EN,
    }
}

/// Look up a category by its 1-based position
pub fn category(language: Language, position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|i| categories(language).get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_align_across_languages() {
        assert_eq!(categories(Language::En).len(), categories(Language::ZhTw).len());
        assert_eq!(life_stages(Language::En).len(), life_stages(Language::ZhTw).len());
    }

    #[test]
    fn test_category_lookup_is_one_based() {
        assert_eq!(category(Language::En, 1), Some("Career Pivot"));
        assert_eq!(category(Language::ZhTw, 7), Some("十年願景"));
        assert_eq!(category(Language::En, 0), None);
        assert_eq!(category(Language::En, 8), None);
    }
}
