use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Dimension, SkinTrait};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeParseError {
    #[error("skin-type code must have 4 letters, got {0:?}")]
    Length(String),
    #[error("'{letter}' is not a valid letter at position {position} of a skin-type code")]
    Letter { letter: char, position: usize },
}

/// Four-letter skin-type classification, one trait per dimension-pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkinTypeCode(pub(super) [SkinTrait; 4]);

impl SkinTypeCode {
    pub fn traits(&self) -> [SkinTrait; 4] {
        self.0
    }

    pub fn trait_for(&self, dimension: Dimension) -> SkinTrait {
        self.0[dimension.position()]
    }

    /// All 16 codes, primary traits first (`DSPW` .. `OINT`).
    pub fn all() -> Vec<SkinTypeCode> {
        (0..16u8)
            .map(|bits| {
                let mut traits = [SkinTrait::Dry; 4];
                for dimension in Dimension::ALL {
                    let shift = 3 - dimension.position();
                    traits[dimension.position()] = if bits >> shift & 1 == 0 {
                        dimension.primary()
                    } else {
                        dimension.secondary()
                    };
                }
                SkinTypeCode(traits)
            })
            .collect()
    }
}

impl fmt::Display for SkinTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.0 {
            write!(f, "{}", t.letter())?;
        }
        Ok(())
    }
}

impl FromStr for SkinTypeCode {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.trim().chars().collect();
        if letters.len() != 4 {
            return Err(CodeParseError::Length(s.to_string()));
        }

        let mut traits = [SkinTrait::Dry; 4];
        for (position, (&letter, dimension)) in letters.iter().zip(Dimension::ALL).enumerate() {
            traits[position] = SkinTrait::from_letter(letter)
                .filter(|t| t.dimension() == dimension)
                .ok_or(CodeParseError::Letter { letter, position })?;
        }
        Ok(Self(traits))
    }
}

impl TryFrom<String> for SkinTypeCode {
    type Error = CodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SkinTypeCode> for String {
    fn from(code: SkinTypeCode) -> Self {
        code.to_string()
    }
}
