//! Substring filtering of branch names as the user types.

/// Positions of the names matching `query`, in original order.
///
/// `None` matches everything. Matching is case-sensitive substring
/// containment.
pub fn filter_indices<S: AsRef<str>>(names: &[S], query: Option<&str>) -> Vec<usize> {
    match query {
        None => (0..names.len()).collect(),
        Some(query) => names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.as_ref().contains(query))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// Names matching `query`, in original order.
pub fn filter_branches<'a, S: AsRef<str>>(names: &'a [S], query: Option<&str>) -> Vec<&'a str> {
    filter_indices(names, query)
        .into_iter()
        .map(|i| names[i].as_ref())
        .collect()
}
