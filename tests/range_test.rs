use std::sync::Mutex;

use listitem::*;

/// Records the tokens it is asked to expand and returns roman numerals.
#[derive(Debug, Default)]
struct RomanExpander {
    calls: Mutex<Vec<(String, String, Option<String>)>>,
}

impl RangeExpander for RomanExpander {
    fn expand(
        &self,
        start: &str,
        end: &str,
        step: Option<&str>,
        each: Option<&BulletFn>,
    ) -> Vec<String> {
        self.calls.lock().unwrap().push((
            start.to_string(),
            end.to_string(),
            step.map(str::to_string),
        ));
        ["i", "ii", "iii"]
            .into_iter()
            .enumerate()
            .map(|(i, v)| each.map_or_else(|| v.to_string(), |f| f(v, i)))
            .collect()
    }
}

#[test]
fn test_custom_expander_receives_split_tokens() {
    let expander = RomanExpander::default();
    let bullets = resolve_bullets(&BulletSpec::from("1..10..2"), &expander, None);
    assert_eq!(bullets, vec!["i", "ii", "iii"]);
    let calls = expander.calls.lock().unwrap();
    assert_eq!(
        calls.as_slice(),
        [("1".to_string(), "10".to_string(), Some("2".to_string()))]
    );
}

#[test]
fn test_formatter_with_custom_expander() {
    let mut li = ListItemFormatter::with_expander(
        ListItemOptions::with_chars("I..III"),
        RomanExpander::default(),
    );
    assert_eq!(li.format(2, "x").unwrap(), "    iii x");
}

#[test]
fn test_explicit_chars_skip_expander() {
    let expander = RomanExpander::default();
    let bullets = resolve_bullets(&BulletSpec::from(vec!["1..3"]), &expander, None);
    assert_eq!(bullets, vec!["1..3"]);
    assert!(expander.calls.lock().unwrap().is_empty());
}

#[test]
fn test_default_expander_ranges() {
    let cases = [
        ("1..5", vec!["1", "2", "3", "4", "5"]),
        ("a..e", vec!["a", "b", "c", "d", "e"]),
        ("1..10..2", vec!["1", "3", "5", "7", "9"]),
        ("c..a", vec!["c", "b", "a"]),
        ("001..3", vec!["001", "002", "003"]),
    ];
    for (spec, expected) in cases {
        let bullets = resolve_bullets(&BulletSpec::from(spec), &DefaultRangeExpander, None);
        assert_eq!(bullets, expected, "range '{}'", spec);
    }
}
