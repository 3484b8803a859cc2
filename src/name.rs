//! Splitting CIF-style data names.
//!
//! PDBx items are addressed by names of the form `_category.attribute`.
//! The category part strips the leading `_` sigil; the attribute part does
//! not (a name without a dot has no attribute part). The asymmetry matches
//! the format's addressing rules and is intentional.

/// Extract the category part of a data name.
///
/// Strips a single leading `_` if present, then returns the substring before
/// the first `.`. A name with no dot yields the whole (sigil-stripped) name.
///
/// ```
/// use pdbx_model::name::category_part;
/// assert_eq!(category_part("_atom_site.id"), "atom_site");
/// assert_eq!(category_part("atom_site"), "atom_site");
/// ```
pub fn category_part(name: &str) -> &str {
    let stripped = name.strip_prefix('_').unwrap_or(name);
    match stripped.find('.') {
        Some(i) => &stripped[..i],
        None => stripped,
    }
}

/// Extract the attribute part of a data name.
///
/// Returns the substring after the first `.`, or `None` if the name has no
/// dot. No sigil stripping is applied.
///
/// ```
/// use pdbx_model::name::attribute_part;
/// assert_eq!(attribute_part("_atom_site.id"), Some("id"));
/// assert_eq!(attribute_part("_atom_site"), None);
/// ```
pub fn attribute_part(name: &str) -> Option<&str> {
    name.find('.').map(|i| &name[i + 1..])
}
