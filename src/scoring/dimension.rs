use serde::{Deserialize, Serialize};

/// One pole of a bipolar skin characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkinTrait {
    Dry,
    Oily,
    Sensitive,
    Insensitive,
    Pigmented,
    NonPigmented,
    Wrinkled,
    Tight,
}

impl SkinTrait {
    pub const ALL: [SkinTrait; 8] = [
        SkinTrait::Dry,
        SkinTrait::Oily,
        SkinTrait::Sensitive,
        SkinTrait::Insensitive,
        SkinTrait::Pigmented,
        SkinTrait::NonPigmented,
        SkinTrait::Wrinkled,
        SkinTrait::Tight,
    ];

    pub fn letter(self) -> char {
        match self {
            SkinTrait::Dry => 'D',
            SkinTrait::Oily => 'O',
            SkinTrait::Sensitive => 'S',
            SkinTrait::Insensitive => 'I',
            SkinTrait::Pigmented => 'P',
            SkinTrait::NonPigmented => 'N',
            SkinTrait::Wrinkled => 'W',
            SkinTrait::Tight => 'T',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        SkinTrait::ALL
            .into_iter()
            .find(|t| t.letter() == letter.to_ascii_uppercase())
    }

    /// Suffix of the `trait.*` i18n keys.
    pub fn key(self) -> &'static str {
        match self {
            SkinTrait::Dry => "dry",
            SkinTrait::Oily => "oily",
            SkinTrait::Sensitive => "sensitive",
            SkinTrait::Insensitive => "insensitive",
            SkinTrait::Pigmented => "pigmented",
            SkinTrait::NonPigmented => "non_pigmented",
            SkinTrait::Wrinkled => "wrinkled",
            SkinTrait::Tight => "tight",
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            SkinTrait::Dry | SkinTrait::Oily => Dimension::Hydration,
            SkinTrait::Sensitive | SkinTrait::Insensitive => Dimension::Sensitivity,
            SkinTrait::Pigmented | SkinTrait::NonPigmented => Dimension::Pigmentation,
            SkinTrait::Wrinkled | SkinTrait::Tight => Dimension::Aging,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A dimension-pair. Declaration order is the letter order of a skin-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Hydration,
    Sensitivity,
    Pigmentation,
    Aging,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Hydration,
        Dimension::Sensitivity,
        Dimension::Pigmentation,
        Dimension::Aging,
    ];

    /// `(primary, secondary)`; the primary trait wins ties.
    pub fn pair(self) -> (SkinTrait, SkinTrait) {
        match self {
            Dimension::Hydration => (SkinTrait::Dry, SkinTrait::Oily),
            Dimension::Sensitivity => (SkinTrait::Sensitive, SkinTrait::Insensitive),
            Dimension::Pigmentation => (SkinTrait::Pigmented, SkinTrait::NonPigmented),
            Dimension::Aging => (SkinTrait::Wrinkled, SkinTrait::Tight),
        }
    }

    pub fn primary(self) -> SkinTrait {
        self.pair().0
    }

    pub fn secondary(self) -> SkinTrait {
        self.pair().1
    }

    /// Suffix of the `dimension.*` i18n keys.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Hydration => "hydration",
            Dimension::Sensitivity => "sensitivity",
            Dimension::Pigmentation => "pigmentation",
            Dimension::Aging => "aging",
        }
    }

    pub(crate) fn position(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_and_are_unique() {
        let mut letters: Vec<char> = SkinTrait::ALL.iter().map(|t| t.letter()).collect();
        for t in SkinTrait::ALL {
            assert_eq!(SkinTrait::from_letter(t.letter()), Some(t));
        }
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 8);
    }

    #[test]
    fn lowercase_letters_are_accepted() {
        assert_eq!(SkinTrait::from_letter('n'), Some(SkinTrait::NonPigmented));
        assert_eq!(SkinTrait::from_letter('x'), None);
    }

    #[test]
    fn every_trait_belongs_to_its_own_pair() {
        for t in SkinTrait::ALL {
            let (primary, secondary) = t.dimension().pair();
            assert!(t == primary || t == secondary);
            assert_ne!(primary, secondary);
        }
    }

    #[test]
    fn keys_are_snake_case() {
        assert_eq!(SkinTrait::NonPigmented.key(), "non_pigmented");
        assert_eq!(Dimension::Aging.key(), "aging");
        for t in SkinTrait::ALL {
            assert!(t.key().chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn dimensions_are_in_code_order() {
        let positions: Vec<usize> = Dimension::ALL.iter().map(|d| d.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }
}
