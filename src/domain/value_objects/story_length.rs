//! Target length of a generated storyline, in words

/// Word count target, always within [`StoryLength::MIN`, `StoryLength::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StoryLength(u32);

impl StoryLength {
    pub const MIN: u32 = 100;
    pub const MAX: u32 = 2000;
    /// Slider increment offered to the user
    pub const STEP: u32 = 50;
    pub const DEFAULT: u32 = 500;

    /// Out-of-range values are clamped
    pub fn new(words: u32) -> Self {
        Self(words.clamp(Self::MIN, Self::MAX))
    }

    pub fn words(&self) -> u32 {
        self.0
    }
}

impl Default for StoryLength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for StoryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} words", self.0)
    }
}
