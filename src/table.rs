use crate::errors::SourceError;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;

/// Header row plus data rows, every cell trimmed of surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Splits newline separated records into comma separated cells. The first
    /// record becomes the header. Rows may be shorter or longer than the header.
    pub fn parse(text: &str) -> Result<Self, SourceError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut records = records.into_iter();
        let header = records.next().ok_or(SourceError::Empty)?;
        Ok(Self {
            header,
            rows: records.collect(),
        })
    }

    /// Position of the first header cell equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|column| column == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn to_csv(&self) -> Result<String, SourceError> {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| SourceError::Write(err.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Cell at `index` in `row`, `None` for an unresolved column or a short row.
pub fn cell(row: &[String], index: Option<usize>) -> Option<&str> {
    index.and_then(|index| row.get(index)).map(String::as_str)
}
