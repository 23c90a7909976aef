// src/sheet/columns.rs
use crate::config::consts::{COL_BRANCH, COL_DESCRIPTION, COL_IMAGE, COL_NAME, COL_PIECES};

/// The fields a row carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Image,
    Name,
    Description,
    Branch,
    Pieces,
}

/// Cell position of each field. Reordering sheet columns only touches this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    pub image: usize,
    pub name: usize,
    pub description: usize,
    pub branch: usize,
    pub pieces: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            image: COL_IMAGE,
            name: COL_NAME,
            description: COL_DESCRIPTION,
            branch: COL_BRANCH,
            pieces: COL_PIECES,
        }
    }
}

impl ColumnLayout {
    pub fn index(&self, col: Column) -> usize {
        match col {
            Column::Image       => self.image,
            Column::Name        => self.name,
            Column::Description => self.description,
            Column::Branch      => self.branch,
            Column::Pieces      => self.pieces,
        }
    }
}

/// Decides whether the first row is a header, given its first cell's text.
pub trait HeaderRule {
    fn is_header(&self, first_cell: &str) -> bool;
}

impl<F: Fn(&str) -> bool> HeaderRule for F {
    fn is_header(&self, first_cell: &str) -> bool {
        self(first_cell)
    }
}

/// Header iff the trimmed, lowercased first cell contains a label fragment.
///
/// A data row whose first cell happens to contain the fragment is also taken
/// for a header. Image cells normally hold no text, so this rarely bites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentinelHeader {
    sentinel: String,
}

impl SentinelHeader {
    pub fn new(sentinel: &str) -> Self {
        Self { sentinel: sentinel.trim().to_lowercase() }
    }
}

impl HeaderRule for SentinelHeader {
    fn is_header(&self, first_cell: &str) -> bool {
        first_cell.trim().to_lowercase().contains(&self.sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_positional() {
        let l = ColumnLayout::default();
        let ix: Vec<usize> = [Column::Image, Column::Name, Column::Description, Column::Branch, Column::Pieces]
            .into_iter()
            .map(|c| l.index(c))
            .collect();
        assert_eq!(ix, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn sentinel_is_case_and_space_insensitive() {
        let rule = SentinelHeader::new("Fotka");
        assert!(rule.is_header("  FOTKA "));
        assert!(rule.is_header("Fotka produktu"));
        assert!(!rule.is_header("Widget"));
        assert!(!rule.is_header(""));
    }

    #[test]
    fn closures_are_rules() {
        let never = |_: &str| false;
        assert!(!never.is_header("Fotka"));
    }
}
