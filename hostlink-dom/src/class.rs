//! Class-name membership helpers.
//!
//! The `class` attribute is treated as a whitespace-separated token list,
//! compared case-sensitively.

use crate::element::Element;

const CLASS: &str = "class";

fn tokens<E: Element + ?Sized>(el: &E) -> Vec<&str> {
    el.attribute(CLASS)
        .map(|v| v.split_ascii_whitespace().collect())
        .unwrap_or_default()
}

/// Whether the element carries `class_name`.
///
/// A name containing whitespace is never a single token, so it never matches.
pub fn has_class<E: Element + ?Sized>(el: &E, class_name: &str) -> bool {
    !class_name.is_empty() && tokens(el).contains(&class_name)
}

/// Add `class_name` to the element. No-op if it is already present.
///
/// Whitespace-separated names add every listed token. [`has_class`] checks a
/// single token, so it reports `false` for the combined name even after this.
pub fn add_class<E: Element + ?Sized>(el: &mut E, class_name: &str) {
    let mut classes: Vec<String> = tokens(&*el).into_iter().map(str::to_owned).collect();
    let before = classes.len();
    for name in class_name.split_ascii_whitespace() {
        if !classes.iter().any(|c| c == name) {
            classes.push(name.to_owned());
        }
    }
    if classes.len() != before {
        el.set_attribute(CLASS, classes.join(" "));
    }
}

/// Remove `class_name` from the element. No-op if it is absent.
///
/// Whitespace-separated names remove every listed token.
pub fn remove_class<E: Element + ?Sized>(el: &mut E, class_name: &str) {
    let doomed: Vec<&str> = class_name.split_ascii_whitespace().collect();
    let current = tokens(&*el);
    let kept: Vec<&str> = current
        .iter()
        .copied()
        .filter(|c| !doomed.contains(c))
        .collect();
    if kept.len() != current.len() {
        let joined = kept.join(" ");
        el.set_attribute(CLASS, joined);
    }
}
