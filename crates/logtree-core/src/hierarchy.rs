//! Dotted-name hierarchy
//!
//! Logger ancestry is never stored: it is derived from the name alone by
//! cutting it at each `.` separator. `a` and `a.b` are ancestors of `a.b.c`.
//!
//! Splitting is literal. Empty segments are kept, so `a..b` has the ancestors
//! `a.` and `a`, and `.a` has the single (empty) ancestor `""`.

use crate::backend::SeverityBackend;
use crate::error::LoggingResult;
use crate::level::Level;

/// Separator between hierarchy segments
pub const SEPARATOR: char = '.';

/// Iterator over the ancestors of a logger name, closest first
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    remaining: &'a str,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let cut = self.remaining.rfind(SEPARATOR)?;
        self.remaining = &self.remaining[..cut];
        Some(self.remaining)
    }
}

/// Ancestors of `name`, from the longest proper prefix to the shortest
pub fn ancestors(name: &str) -> Ancestors<'_> {
    Ancestors { remaining: name }
}

/// Byte offsets of every separator in `name`, in ascending order
///
/// `&name[..offset]` for each offset is an ancestor name.
pub fn separator_offsets(name: &str) -> Vec<usize> {
    name.match_indices(SEPARATOR).map(|(i, _)| i).collect()
}

/// Check whether `ancestor` is a proper dot-segment prefix of `name`
pub fn is_ancestor(ancestor: &str, name: &str) -> bool {
    name.len() > ancestor.len()
        && name.starts_with(ancestor)
        && name[ancestor.len()..].starts_with(SEPARATOR)
}

/// Name of the child `suffix` under `parent`
pub fn child_name(parent: &str, suffix: &str) -> String {
    let mut name = String::with_capacity(parent.len() + 1 + suffix.len());
    name.push_str(parent);
    name.push(SEPARATOR);
    name.push_str(suffix);
    name
}

/// Resolve the effective level of `name`
///
/// The logger's own explicit level wins, then the first explicit level found
/// among `ancestors` (which must be ordered closest first), then the
/// backend's default severity. A failing query aborts the walk.
pub fn resolve_effective_level<'a, I>(
    backend: &dyn SeverityBackend,
    name: &str,
    ancestors: I,
) -> LoggingResult<Level>
where
    I: IntoIterator<Item = &'a str>,
{
    let own = backend.get_severity(name)?;
    if !own.is_unset() {
        return Ok(own);
    }

    for ancestor in ancestors {
        let level = backend.get_severity(ancestor)?;
        if !level.is_unset() {
            return Ok(level);
        }
    }

    Ok(backend.default_severity())
}
