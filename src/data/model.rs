use csv::StringRecord;

// ---------------------------------------------------------------------------
// Dataset – the cleaned missing-person table
// ---------------------------------------------------------------------------

/// The cleaned dataset, kept exactly as read.
///
/// Cells stay as raw CSV text: the application only previews the table and
/// re-exports it, so nothing here needs typed columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Column names from the header row.
    pub headers: StringRecord,
    /// Data rows in file order.
    pub rows: Vec<StringRecord>,
}

impl Dataset {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Dataset { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[StringRecord] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Serialise the whole table back to CSV bytes, header first.
    ///
    /// Re-encodes on every call; callers must not cache the result.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}
