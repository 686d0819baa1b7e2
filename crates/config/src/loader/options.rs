//! Load policy options.
//!
//! Responsibilities:
//! - Carry the overwrite and expand policies for a single load call.
//!
//! Invariants:
//! - Options are `Copy` and never mutated by the loader.
//! - The default policy neither overwrites existing variables nor expands `${VAR}`.

/// Policy switches for one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Replace variables already present in the environment.
    pub overwrite: bool,
    /// Expand `${VAR}` references after all files are merged.
    pub expand: bool,
}

impl LoadOptions {
    /// Options with both policies disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overwrite policy.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the expand policy.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }
}
