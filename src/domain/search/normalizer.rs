// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// A group of surface forms (synonyms and common misspellings) that all
/// fold to one canonical search term.
struct SynonymGroup {
    canonical: &'static str,
    surface_forms: &'static [&'static str],
}

// Matching is substring containment against the lower-cased query, not
// tokenization, so "ww2 speeches" still triggers the "war" group. Adding a
// group is a data change here, nothing else.
static SYNONYM_GROUPS: &[SynonymGroup] = &[
    SynonymGroup {
        canonical: "roosevelt",
        surface_forms: &["roosevelt", "roosvelt", "roosavelt", "fdr"],
    },
    SynonymGroup {
        canonical: "churchill",
        surface_forms: &["churchill", "churchil"],
    },
    SynonymGroup {
        canonical: "war",
        surface_forms: &["world war", "ww2"],
    },
    SynonymGroup {
        canonical: "pearl harbor",
        surface_forms: &["pearl harbor"],
    },
];

/// Maps a raw free-text query to its canonical search terms.
///
/// The query is lower-cased, then every synonym group whose surface form
/// appears as a substring contributes its canonical term once, in table
/// order. A query matching no group falls through to a single term equal
/// to the whole lower-cased query, so arbitrary free text still searches.
///
/// An empty query normalizes to `[""]`; callers must reject empty queries
/// before searching, since the empty string matches every article.
pub fn normalize(raw_query: &str) -> Vec<String> {
    let query = raw_query.to_lowercase();

    let mut terms: Vec<String> = Vec::new();
    for group in SYNONYM_GROUPS {
        let matched = group.surface_forms.iter().any(|form| query.contains(form));
        if matched && !terms.iter().any(|t| t == group.canonical) {
            terms.push(group.canonical.to_string());
        }
    }

    if terms.is_empty() {
        terms.push(query);
    }
    terms
}
