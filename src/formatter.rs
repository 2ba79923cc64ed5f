use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::errors::{ListItemError, Result};
use crate::numeric::IntoLevel;
use crate::range::{split_range, BulletFn, DefaultRangeExpander, RangeExpander};
use crate::types::{BulletSpec, ListItemOptions, Resolution, DEFAULT_INDENT, MAX_INDENT_BYTES};

/// Callback that takes over composition of a list item. It receives the
/// indentation, the bullet (empty when suppressed) and the 1-based invocation
/// count, and its return value is the whole item.
pub type TransformFn = Box<dyn Fn(&str, &str, usize) -> String + Send + Sync>;

/// Resolves a bullet source into an explicit sequence.
///
/// Explicit bullets pass through unchanged. A range expression is split on
/// `".."` and handed to `expander`; a single token is used as the only bullet
/// and more than three tokens resolve to nothing.
pub fn resolve_bullets<E: RangeExpander + ?Sized>(
    spec: &BulletSpec,
    expander: &E,
    each: Option<&BulletFn>,
) -> Vec<String> {
    let range = match spec {
        BulletSpec::Explicit(chars) => return chars.clone(),
        BulletSpec::Range(range) => range,
    };

    let bullets = match split_range(range).as_slice() {
        [single] if single.is_empty() => Vec::new(),
        [single] => vec![each.map_or_else(|| single.to_string(), |f| f(*single, 0))],
        [start, end] => expander.expand(*start, *end, None, each),
        [start, end, step] => expander.expand(*start, *end, Some(*step), each),
        _ => Vec::new(),
    };
    debug!(range = %range, count = bullets.len(), "resolved range bullets");
    bullets
}

/// Formats one list item at a time from options fixed at construction.
///
/// ```
/// use listitem::{listitem, ListItemOptions};
///
/// let mut li = listitem(ListItemOptions::default());
/// assert_eq!(li.format(0, "Level 0 list item").unwrap(), "- Level 0 list item");
/// assert_eq!(li.format(1, "Level 1 list item").unwrap(), "  * Level 1 list item");
/// assert_eq!(li.format(2, "Level 2 list item").unwrap(), "    + Level 2 list item");
/// ```
pub struct ListItemFormatter<E: RangeExpander = DefaultRangeExpander> {
    options: ListItemOptions,
    expander: E,
    bullets: Vec<String>,
    transform: Option<TransformFn>,
    bullet_fn: Option<BulletFn>,
    invocations: usize,
}

impl ListItemFormatter<DefaultRangeExpander> {
    /// Builds a formatter using the default range expander.
    pub fn new(options: ListItemOptions) -> Self {
        Self::with_expander(options, DefaultRangeExpander)
    }
}

impl<E: RangeExpander> ListItemFormatter<E> {
    /// Builds a formatter that expands range bullets with `expander`.
    ///
    /// Never fails: a malformed range resolves to an empty sequence and every
    /// item then gets an empty bullet.
    pub fn with_expander(options: ListItemOptions, expander: E) -> Self {
        let bullets = resolve_bullets(&options.chars, &expander, None);
        debug!(
            bullets = bullets.len(),
            nobullet = options.nobullet,
            resolution = options.resolution.as_str(),
            "built list-item formatter"
        );
        Self {
            options,
            expander,
            bullets,
            transform: None,
            bullet_fn: None,
            invocations: 0,
        }
    }

    /// Hands final composition of every item to `transform`.
    ///
    /// The item text is not appended in this mode.
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str, &str, usize) -> String + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Applies `each` to every value a range expression generates.
    pub fn with_bullet_fn<F>(mut self, each: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        self.bullet_fn = Some(Arc::new(each));
        self.bullets = self.resolve();
        self
    }

    /// Formats `text` as a list item at nesting `level`.
    ///
    /// Fails when `level` is not numeric, or when its indentation would
    /// exceed `MAX_INDENT_BYTES`. Negative levels get no indentation and pick
    /// their bullet by Euclidean modulo.
    pub fn format(&mut self, level: impl IntoLevel, text: &str) -> Result<String> {
        let level = level.into_level()?;
        let unit = match &self.options.indent {
            Some(indent) => indent.as_str(),
            None if level == 0 => "",
            None => DEFAULT_INDENT,
        };
        let indentation = indentation(unit, level)?;
        self.invocations += 1;

        if self.options.resolution == Resolution::PerCall
            && matches!(self.options.chars, BulletSpec::Range(_))
        {
            self.bullets = self.resolve();
        }

        let bullet = if self.options.nobullet {
            ""
        } else {
            self.bullet_for(level)
        };

        trace!(level, invocation = self.invocations, bullet, "formatting list item");

        if let Some(transform) = &self.transform {
            return Ok(transform(&indentation, bullet, self.invocations));
        }

        let mut item = indentation;
        if !self.options.nobullet {
            item.push_str(bullet);
            item.push(' ');
        }
        item.push_str(text);
        Ok(item)
    }

    /// The bullet sequence currently in use.
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    /// Number of `format` calls that passed level validation.
    pub fn invocations(&self) -> usize {
        self.invocations
    }

    /// The options this formatter was built with.
    pub fn options(&self) -> &ListItemOptions {
        &self.options
    }

    fn resolve(&self) -> Vec<String> {
        resolve_bullets(&self.options.chars, &self.expander, self.bullet_fn.as_ref())
    }

    fn bullet_for(&self, level: i64) -> &str {
        if self.bullets.is_empty() {
            return "";
        }
        let index = level.rem_euclid(self.bullets.len() as i64) as usize;
        &self.bullets[index]
    }
}

impl<E: RangeExpander + fmt::Debug> fmt::Debug for ListItemFormatter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListItemFormatter")
            .field("options", &self.options)
            .field("expander", &self.expander)
            .field("bullets", &self.bullets)
            .field("transform", &self.transform.is_some())
            .field("bullet_fn", &self.bullet_fn.is_some())
            .field("invocations", &self.invocations)
            .finish()
    }
}

/// Repeats `unit` once per level, refusing results over `MAX_INDENT_BYTES`.
fn indentation(unit: &str, level: i64) -> Result<String> {
    if unit.is_empty() || level <= 0 {
        return Ok(String::new());
    }
    let bytes = usize::try_from(level)
        .ok()
        .and_then(|count| unit.len().checked_mul(count))
        .filter(|bytes| *bytes <= MAX_INDENT_BYTES);
    match bytes {
        Some(_) => Ok(unit.repeat(level as usize)),
        None => Err(ListItemError::InvalidArgument {
            message: format!(
                "list-item level is too deep to indent (limit {} bytes)",
                MAX_INDENT_BYTES
            ),
            value: level.to_string(),
        }),
    }
}

/// Returns a formatter for `options`, ready to format items one at a time.
pub fn listitem(options: ListItemOptions) -> ListItemFormatter {
    ListItemFormatter::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_bullets_pass_through() {
        let spec = BulletSpec::from(vec!["a", "b"]);
        let bullets = resolve_bullets(&spec, &DefaultRangeExpander, None);
        assert_eq!(bullets, vec!["a", "b"]);
    }

    #[test]
    fn test_single_token_range() {
        let bullets = resolve_bullets(&BulletSpec::from("#"), &DefaultRangeExpander, None);
        assert_eq!(bullets, vec!["#"]);
        assert!(resolve_bullets(&BulletSpec::from(""), &DefaultRangeExpander, None).is_empty());
    }

    #[test]
    fn test_too_many_range_tokens() {
        let bullets = resolve_bullets(&BulletSpec::from("1..5..1..2"), &DefaultRangeExpander, None);
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_empty_bullets_degrade() {
        let mut li = listitem(ListItemOptions::with_chars(Vec::<String>::new()));
        assert_eq!(li.format(1, "x").unwrap(), "   x");
    }

    #[test]
    fn test_failed_validation_does_not_count() {
        let mut li = listitem(ListItemOptions::default());
        assert!(li.format("abc", "x").is_err());
        li.format(0, "x").unwrap();
        assert_eq!(li.invocations(), 1);
    }

    #[test]
    fn test_indentation_limit() {
        assert_eq!(indentation("  ", 3).unwrap(), "      ");
        assert_eq!(indentation("", i64::MAX).unwrap(), "");
        assert!(indentation(" ", MAX_INDENT_BYTES as i64).is_ok());
        assert!(indentation(" ", MAX_INDENT_BYTES as i64 + 1).is_err());
        assert!(indentation("  ", i64::MAX).is_err());
    }

    #[test]
    fn test_negative_level() {
        let mut li = listitem(ListItemOptions::default());
        assert_eq!(li.format(-1, "x").unwrap(), "+ x");
    }

    #[test]
    fn test_debug_omits_callbacks() {
        let li = listitem(ListItemOptions::default()).with_transform(|i, b, _| format!("{i}{b}"));
        let debug = format!("{:?}", li);
        assert!(debug.contains("transform: true"));
    }
}
