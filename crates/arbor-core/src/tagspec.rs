use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::content::{self, Content};

// An optional `.` or `#` prefix followed by a run of non-separator
// characters.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.#]?[^.#\s]+").unwrap());

pub(crate) struct TagSpec {
    pub name: String,
    /// Class/id descriptors synthesized from the spec, folded before the
    /// caller's explicit content so the latter can override them.
    pub seed: SmallVec<[Content; 4]>,
}

/// Parse `"table .grid .tiny #main"` into a tag name plus synthesized
/// descriptors. The last unprefixed token names the element; with none,
/// the name defaults to `div`. An empty or unparseable spec is not an
/// error.
pub(crate) fn parse(spec: &str) -> TagSpec {
    let mut name = None;
    let mut seed = SmallVec::new();
    for token in TOKEN.find_iter(spec) {
        let token = token.as_str();
        if let Some(class) = token.strip_prefix('.') {
            seed.push(content::classes([(class, true)]));
        } else if let Some(id) = token.strip_prefix('#') {
            seed.push(content::id(id));
        } else {
            name = Some(token.to_string());
        }
    }
    TagSpec {
        name: name.unwrap_or_else(|| "div".to_string()),
        seed,
    }
}
