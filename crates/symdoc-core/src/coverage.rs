//! Documentation coverage aggregation.

use symdoc_sourcekitten::RawRecord;

/// Integer documentation-coverage percentage for one unit.
///
/// Shallow sum of the per-file `documented`/`undocumented` counts over the
/// top-level record list as supplied by the indexer; the built tree is not
/// consulted. Empty input (both sums zero) is defined as 0.
#[must_use]
pub fn doc_coverage(records: &[RawRecord]) -> u64 {
    let documented: u64 = records.iter().map(|record| record.documented).sum();
    let undocumented: u64 = records.iter().map(|record| record.undocumented).sum();
    let total = documented + undocumented;
    if total == 0 {
        return 0;
    }
    documented * 100 / total
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn counted(documented: u64, undocumented: u64) -> RawRecord {
        RawRecord {
            documented,
            undocumented,
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(doc_coverage(&[]), 0);
        assert_eq!(doc_coverage(&[counted(0, 0)]), 0);
    }

    #[test]
    fn test_percentage_floors() {
        assert_eq!(doc_coverage(&[counted(3, 1)]), 75);
        assert_eq!(doc_coverage(&[counted(1, 2)]), 33);
    }

    #[test]
    fn test_sums_across_files() {
        assert_eq!(doc_coverage(&[counted(2, 0), counted(1, 1)]), 75);
    }

    #[test]
    fn test_fully_documented_is_one_hundred() {
        assert_eq!(doc_coverage(&[counted(5, 0)]), 100);
    }

    #[test]
    fn test_ignores_nested_substructure_counts() {
        let mut record = counted(1, 1);
        record.substructure = vec![counted(10, 0)];
        assert_eq!(doc_coverage(&[record]), 50);
    }
}
