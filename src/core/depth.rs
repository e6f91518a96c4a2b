use std::fmt::Display;

/// Recursion depth of the snowflake, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u32);

impl Depth {
    pub const MIN: Depth = Depth(0);
    pub const MAX: Depth = Depth(5);

    /// Clamps `level` into range.
    pub fn new(level: u32) -> Self {
        Depth(level.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Depth::new(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Depth::new(self.0.saturating_sub(1))
    }
}

impl Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
