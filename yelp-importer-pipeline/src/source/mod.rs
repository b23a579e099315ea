//! Newline-delimited JSON sources.
//!
//! Each dump carries one self-contained JSON object per line. Blank lines
//! are skipped. A line that fails to deserialize surfaces as an error
//! carrying the line number; the loaders let it abort the pass.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::LoaderError;

/// Record-by-record reader over one newline-delimited JSON file.
pub struct JsonSource<T> {
    lines: Lines<BufReader<File>>,
    line: u64,
    _record: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> JsonSource<T> {
    pub fn open(path: &Path) -> Result<Self, LoaderError> {
        let file = File::open(path).map_err(|source| LoaderError::OpenSource {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(JsonSource {
            lines: BufReader::new(file).lines(),
            line: 0,
            _record: PhantomData,
        })
    }
}

impl<T: DeserializeOwned> Iterator for JsonSource<T> {
    type Item = Result<T, LoaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line += 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(LoaderError::ReadLine {
                        line: self.line,
                        source,
                    }));
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            return Some(serde_json::from_str(&line).map_err(|source| {
                LoaderError::MalformedLine {
                    line: self.line,
                    source,
                }
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use yelp_importer_shared::types::CheckinRecord;

    fn fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_one_record_per_line() {
        let file = fixture(
            "{\"business_id\":\"b1\",\"date\":\"2021-01-01 10:00:00\"}\n\
             {\"business_id\":\"b2\"}\n",
        );
        let records: Vec<CheckinRecord> = JsonSource::open(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].business_id, "b1");
        assert!(records[1].date.is_none());
    }

    #[test]
    fn skips_blank_lines() {
        let file = fixture("{\"business_id\":\"b1\"}\n\n   \n{\"business_id\":\"b2\"}\n");
        let records: Vec<CheckinRecord> = JsonSource::open(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn malformed_line_reports_its_line_number() {
        let file = fixture("{\"business_id\":\"b1\"}\nnot json\n");
        let mut source = JsonSource::<CheckinRecord>::open(file.path()).unwrap();
        assert!(source.next().unwrap().is_ok());
        match source.next().unwrap() {
            Err(LoaderError::MalformedLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected a malformed line error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_its_path() {
        let missing = Path::new("/nonexistent/yelp_checkin.JSON");
        let error = JsonSource::<CheckinRecord>::open(missing)
            .err()
            .expect("open should fail");
        match error {
            LoaderError::OpenSource { path, .. } => assert_eq!(path, missing),
            other => panic!("expected an open error, got {other:?}"),
        }
    }
}
