//! Form-level queries over element collections.

use crate::element::Element;

/// The distinct `type` attributes across a form's elements, in order of
/// first occurrence.
///
/// Elements without a `type` attribute are skipped.
pub fn unique_input_types<'a, E, I>(elements: I) -> Vec<String>
where
    E: Element + ?Sized + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen: Vec<String> = Vec::new();
    for ty in elements.into_iter().filter_map(|el| el.attribute("type")) {
        if !seen.iter().any(|s| s == ty) {
            seen.push(ty.to_owned());
        }
    }
    seen
}
