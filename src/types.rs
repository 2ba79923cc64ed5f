use serde::{Deserialize, Serialize};

/// Bullets used when no `chars` are configured, cycled by nesting level.
pub const DEFAULT_BULLETS: [&str; 3] = ["-", "*", "+"];

/// Indent unit used for nested levels when no `indent` is configured.
pub const DEFAULT_INDENT: &str = "  ";

/// Largest indentation, in bytes, a single item may carry.
pub const MAX_INDENT_BYTES: usize = 1 << 20;

/// Source of the bullet sequence.
///
/// In JSON an array maps to `Explicit` and a string maps to `Range`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulletSpec {
    /// Bullets used verbatim, in order.
    Explicit(Vec<String>),
    /// A range expression such as `"a..e"` or `"1..10..2"`.
    Range(String),
}

impl Default for BulletSpec {
    fn default() -> Self {
        BulletSpec::Explicit(DEFAULT_BULLETS.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&str> for BulletSpec {
    fn from(range: &str) -> Self {
        BulletSpec::Range(range.to_string())
    }
}

impl From<Vec<String>> for BulletSpec {
    fn from(chars: Vec<String>) -> Self {
        BulletSpec::Explicit(chars)
    }
}

impl From<Vec<&str>> for BulletSpec {
    fn from(chars: Vec<&str>) -> Self {
        BulletSpec::Explicit(chars.into_iter().map(str::to_string).collect())
    }
}

/// When a range-based bullet sequence is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Expand once, when the formatter is built.
    #[default]
    Eager,
    /// Expand again on every format call.
    PerCall,
}

impl Resolution {
    /// Returns the string representation of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Eager => "eager",
            Resolution::PerCall => "percall",
        }
    }
}

/// Options for a list-item formatter. Immutable once the formatter is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemOptions {
    /// Bullets to cycle through by level, or a range expression producing them.
    pub chars: BulletSpec,
    /// Indent unit repeated once per level. When unset, level 0 gets no
    /// indentation and deeper levels use two spaces per level.
    pub indent: Option<String>,
    /// Emit indentation and text only, without a bullet.
    pub nobullet: bool,
    /// Expansion policy for range-based bullets.
    pub resolution: Resolution,
}

impl ListItemOptions {
    /// Options with the given bullet source and defaults for everything else.
    pub fn with_chars(chars: impl Into<BulletSpec>) -> Self {
        Self {
            chars: chars.into(),
            ..Self::default()
        }
    }
}
