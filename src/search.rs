// src/search.rs
//
// Live search over the loaded records.
// A record matches when its lowercased "name description branch pieces"
// contains the lowercased query. Matches keep sheet order.

use crate::sheet::{Record, RecordSet};

/// Does `record` match an already-lowercased query?
pub fn matches(record: &Record, lower_query: &str) -> bool {
    lower_query.is_empty() || record.search_text().contains(lower_query)
}

/// Records matching `query`, in their original order.
pub fn filter(records: &[Record], query: &str) -> Vec<Record> {
    let q = query.to_lowercase();
    records.iter().filter(|r| matches(r, &q)).cloned().collect()
}

/// Zero-copy filtered view: positions of matching rows in a RecordSet.
#[derive(Clone, Debug)]
pub struct SearchView<'a> {
    pub row_ix: Vec<usize>,
    set: &'a RecordSet,
}

impl<'a> SearchView<'a> {
    pub fn new(set: &'a RecordSet, query: &str) -> Self {
        let q = query.to_lowercase();
        let row_ix = if q.is_empty() {
            (0..set.len()).collect()
        } else {
            (0..set.len())
                .filter(|&ix| set.haystack(ix).is_some_and(|h| h.contains(&q)))
                .collect()
        };
        Self { row_ix, set }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn total(&self) -> usize { self.set.len() }

    pub fn records(&self) -> Vec<&'a Record> {
        self.row_ix.iter().filter_map(|&ix| self.set.get(ix)).collect()
    }

    /// Materialize owned records (for callers that outlive the set).
    pub fn to_owned_records(&self) -> Vec<Record> {
        self.records().into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, description: &str, branch: &str, pieces: &str) -> Record {
        Record {
            image: s!("img.png"),
            name: s!(name),
            description: s!(description),
            branch: s!(branch),
            pieces: s!(pieces),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("Hammer", "Steel claw hammer", "Brno", "4"),
            rec("Saw", "", "Prague", "10"),
            rec("Drill", "Cordless", "Ostrava", ""),
        ]
    }

    #[test]
    fn empty_query_keeps_everything() {
        assert_eq!(filter(&sample(), ""), sample());
    }

    #[test]
    fn matches_on_each_searchable_field() {
        let names = |q: &str| filter(&sample(), q).into_iter().map(|r| r.name).collect::<Vec<_>>();
        assert_eq!(names("drill"), vec!["Drill"]);
        assert_eq!(names("claw"), vec!["Hammer"]);
        assert_eq!(names("PRAGUE"), vec!["Saw"]);
        assert_eq!(names("10"), vec!["Saw"]);
        assert!(names("nothing like this").is_empty());
    }

    #[test]
    fn image_is_not_searched() {
        assert!(filter(&sample(), "img.png").is_empty());
    }

    #[test]
    fn query_may_span_field_boundary() {
        // Fields are joined with single spaces before matching.
        assert_eq!(filter(&sample(), "saw  prague").len(), 1);
        assert_eq!(filter(&sample(), "cordless ostrava").len(), 1);
    }

    #[test]
    fn view_matches_filter() {
        let set = RecordSet::new(sample());
        for q in ["", "r", "BRNO", "x"] {
            let view = SearchView::new(&set, q);
            assert_eq!(view.to_owned_records(), filter(set.records(), q), "query {q:?}");
            assert_eq!(view.total(), 3);
        }
    }

    #[test]
    fn view_over_empty_set_is_empty() {
        let set = RecordSet::default();
        assert!(SearchView::new(&set, "").is_empty());
    }

    #[test]
    fn unicode_case_folding() {
        let recs = vec![rec("Šroubovák", "", "Plzeň", "")];
        assert_eq!(filter(&recs, "šroub").len(), 1);
        assert_eq!(filter(&recs, "PLZEŇ").len(), 1);
    }
}
