// src/sheet/record.rs

/// One catalog entry, as read from a sheet row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub image: String,
    pub name: String,
    pub description: String,
    pub branch: String,
    /// Kept as text; the sheet isn't strict about numbers.
    pub pieces: String,
}

impl Record {
    /// Lowercased `"name description branch pieces"`, the text searches run against.
    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.name, self.description, self.branch, self.pieces).to_lowercase()
    }
}

/// The loaded records, in sheet order. Built once per load and never edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
    haystacks: Vec<String>,
}

impl RecordSet {
    /// Records without a name are dropped.
    pub fn new(records: Vec<Record>) -> Self {
        let records: Vec<Record> = records.into_iter().filter(|r| !r.name.is_empty()).collect();
        let haystacks = records.iter().map(Record::search_text).collect();
        Self { records, haystacks }
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&Record> { self.records.get(ix) }

    pub(crate) fn haystack(&self, ix: usize) -> Option<&str> {
        self.haystacks.get(ix).map(String::as_str)
    }
}
