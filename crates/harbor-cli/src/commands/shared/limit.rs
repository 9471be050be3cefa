/// Compute the number of rows to show: global `--limit`, then the
/// configured default. Zero means unlimited.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> usize {
    match global.unwrap_or(fallback) {
        0 => usize::MAX,
        limit => usize::try_from(limit).unwrap_or(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 20), 5);
    }

    #[test]
    fn fallback_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn zero_means_unlimited() {
        assert_eq!(effective_limit(Some(0), 20), usize::MAX);
        assert_eq!(effective_limit(None, 0), usize::MAX);
    }
}
