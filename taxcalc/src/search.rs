use tracing::debug;

use crate::record::TaxpayerRecord;

/// Returns the index of the first record whose name equals `query`,
/// ignoring letter case.
pub fn position_by_name(records: &[TaxpayerRecord], query: &str) -> Option<usize> {
    let position = records.iter().position(|r| names_match(r.name(), query));
    debug!("Lookup for {:?}: {:?}", query, position);
    position
}

/// Returns the first record whose name equals `query`, ignoring letter case.
///
/// Records are scanned from the front, so when several share a name the one
/// nearest index 0 wins.
pub fn find_by_name<'a>(
    records: &'a [TaxpayerRecord],
    query: &str,
) -> Option<&'a TaxpayerRecord> {
    position_by_name(records, query).map(|i| &records[i])
}

fn names_match(name: &str, query: &str) -> bool {
    if name.is_ascii() && query.is_ascii() {
        return name.eq_ignore_ascii_case(query);
    }
    name.chars().count() == query.chars().count()
        && name.chars().zip(query.chars()).all(|(a, b)| chars_match(a, b))
}

/// Per-character case-insensitive equality: same char, same uppercase, or
/// same lowercase of the uppercase. Uses single-char (simple) case mappings.
fn chars_match(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (ua, ub) = (simple_upper(a), simple_upper(b));
    ua == ub || simple_lower(ua) == simple_lower(ub)
}

fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

// The only multi-char lowercase mapping is U+0130, whose simple form is 'i'.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
