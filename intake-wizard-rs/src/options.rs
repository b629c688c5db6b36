// intake-wizard-rs/src/options.rs
// Fixed answer sets of the choice fields

use shared_types_rs::{Language, AFFIRMATIVE, NEGATIVE};

const LEVEL_SEPARATOR: &str = ", ";

/// Company ownership, stored as its label in the language active when chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipType {
    Government,
    Private,
    Mixed,
    GroupSubsidiary,
}

impl OwnershipType {
    pub const ALL: [OwnershipType; 4] = [
        OwnershipType::Government,
        OwnershipType::Private,
        OwnershipType::Mixed,
        OwnershipType::GroupSubsidiary,
    ];

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (OwnershipType::Government, Language::En) => "Government",
            (OwnershipType::Private, Language::En) => "Private",
            (OwnershipType::Mixed, Language::En) => "Mixed",
            (OwnershipType::GroupSubsidiary, Language::En) => "Group subsidiary",
            (OwnershipType::Government, Language::Ar) => "حكومية",
            (OwnershipType::Private, Language::Ar) => "خاصة",
            (OwnershipType::Mixed, Language::Ar) => "مختلطة",
            (OwnershipType::GroupSubsidiary, Language::Ar) => "تابعة لمجموعة",
        }
    }

    /// Recognise a stored label in either language
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|o| Language::ALL.into_iter().any(|l| o.label(l) == label))
    }
}

/// Management tier, several of which may be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgLevel {
    Top,
    Middle,
    Operational,
}

impl OrgLevel {
    pub const ALL: [OrgLevel; 3] = [OrgLevel::Top, OrgLevel::Middle, OrgLevel::Operational];

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (OrgLevel::Top, Language::En) => "Top Management",
            (OrgLevel::Middle, Language::En) => "Middle Management",
            (OrgLevel::Operational, Language::En) => "Operational",
            (OrgLevel::Top, Language::Ar) => "الإدارة العليا",
            (OrgLevel::Middle, Language::Ar) => "الإدارة المتوسطة",
            (OrgLevel::Operational, Language::Ar) => "الإدارة التشغيلية",
        }
    }

    /// Whether `levels` (the stored `orgLevels` text) contains this level's label
    pub fn is_selected(self, levels: &str, language: Language) -> bool {
        split_levels(levels).any(|l| l == self.label(language))
    }

    /// Add this level's label to `levels`, or remove it if already present.
    ///
    /// Selection order is kept; labels are joined with `", "`.
    pub fn toggle(self, levels: &str, language: Language) -> String {
        let label = self.label(language);
        let mut selected: Vec<&str> = split_levels(levels).collect();
        if selected.contains(&label) {
            selected.retain(|l| *l != label);
        } else {
            selected.push(label);
        }
        selected.join(LEVEL_SEPARATOR)
    }
}

fn split_levels(levels: &str) -> impl Iterator<Item = &str> {
    levels.split(',').map(str::trim).filter(|l| !l.is_empty())
}

/// A yes/no answer. The stored value is always English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    pub fn stored_value(self) -> &'static str {
        match self {
            Choice::Yes => AFFIRMATIVE,
            Choice::No => NEGATIVE,
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            AFFIRMATIVE => Some(Choice::Yes),
            NEGATIVE => Some(Choice::No),
            _ => None,
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Choice::Yes, Language::En) => "Yes",
            (Choice::No, Language::En) => "No",
            (Choice::Yes, Language::Ar) => "نعم",
            (Choice::No, Language::Ar) => "لا",
        }
    }
}

impl From<bool> for Choice {
    fn from(value: bool) -> Self {
        if value {
            Choice::Yes
        } else {
            Choice::No
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes_in_order() {
        let levels = OrgLevel::Middle.toggle("", Language::En);
        assert_eq!(levels, "Middle Management");

        let levels = OrgLevel::Top.toggle(&levels, Language::En);
        assert_eq!(levels, "Middle Management, Top Management");
        assert!(OrgLevel::Top.is_selected(&levels, Language::En));

        let levels = OrgLevel::Middle.toggle(&levels, Language::En);
        assert_eq!(levels, "Top Management");
        assert!(!OrgLevel::Middle.is_selected(&levels, Language::En));

        assert_eq!(OrgLevel::Top.toggle(&levels, Language::En), "");
    }

    #[test]
    fn test_toggle_uses_display_language() {
        let levels = OrgLevel::Operational.toggle("Top Management", Language::Ar);
        assert_eq!(levels, "Top Management, الإدارة التشغيلية");
    }

    #[test]
    fn test_ownership_labels() {
        assert_eq!(OwnershipType::GroupSubsidiary.label(Language::En), "Group subsidiary");
        assert_eq!(OwnershipType::from_label("خاصة"), Some(OwnershipType::Private));
        assert_eq!(OwnershipType::from_label("Other"), None);
    }

    #[test]
    fn test_choice_is_stored_in_english() {
        assert_eq!(Choice::from(true).stored_value(), "Yes");
        assert_eq!(Choice::No.stored_value(), "No");
        assert_eq!(Choice::Yes.label(Language::Ar), "نعم");
        assert_eq!(Choice::from_stored("Yes"), Some(Choice::Yes));
        assert_eq!(Choice::from_stored("نعم"), None);
    }
}
