use std::{ops::Index, str::FromStr};

use crate::{format_code, parse_code, CodePeg, Error};

/// The secret code. Never empty, never changes once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shield {
    colors: Box<[CodePeg]>,
}

impl Shield {
    pub fn new(colors: impl Into<Vec<CodePeg>>) -> Result<Self, Error> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(Error::EmptyShield);
        }
        Ok(Self {
            colors: colors.into_boxed_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    pub fn color_at(&self, index: usize) -> CodePeg {
        self.colors[index]
    }

    pub fn has_color_at(&self, index: usize, color: CodePeg) -> bool {
        self.colors.get(index) == Some(&color)
    }

    pub fn colors(&self) -> &[CodePeg] {
        &self.colors
    }
}

impl Index<usize> for Shield {
    type Output = CodePeg;

    fn index(&self, index: usize) -> &CodePeg {
        &self.colors[index]
    }
}

impl FromStr for Shield {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shield::new(parse_code(s)?)
    }
}

impl std::fmt::Display for Shield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_code(&self.colors))
    }
}
