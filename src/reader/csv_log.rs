use crate::core::{Sample, SampleLog};
use crate::error::{PlotError, PlotResult};
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lenient reader for `step,speed[,state]` CSV logs
pub struct CsvLogReader<R> {
    /// Underlying CSV reader
    reader: csv::Reader<R>,
    /// Source name used in error messages
    source: String,
}

impl CsvLogReader<File> {
    /// Open a log file
    pub fn from_path<P: AsRef<Path>>(path: P) -> PlotResult<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let file = File::open(path).map_err(|e| PlotError::ReadInput {
            path: source.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_reader(file, source))
    }
}

impl<R: Read> CsvLogReader<R> {
    /// Wrap any byte source; `source` names it in error messages
    pub fn from_reader(reader: R, source: impl Into<String>) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        CsvLogReader {
            reader,
            source: source.into(),
        }
    }

    /// Consume the input and collect every parseable row
    pub fn read_log(mut self) -> PlotResult<SampleLog> {
        let mut log = SampleLog::new();
        let mut rows = 0usize;

        for result in self.reader.records() {
            let record = result.map_err(|e| PlotError::ReadInput {
                path: self.source.clone(),
                reason: e.to_string(),
            })?;
            rows += 1;

            // csv never yields blank lines, so this is the first non-blank line
            if rows == 1 && !record.get(0).is_some_and(is_number) {
                debug!("{}: treating first row as header", self.source);
                continue;
            }

            match parse_row(&record) {
                Some(sample) => log.push(sample),
                None => {
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    debug!("{}: skipping row at line {}", self.source, line);
                }
            }
        }

        if rows == 0 {
            return Err(PlotError::EmptyInput(self.source));
        }
        if log.is_empty() {
            return Err(PlotError::NoNumericData(self.source));
        }

        debug!("{}: parsed {} samples from {} rows", self.source, log.len(), rows);
        Ok(log)
    }
}

/// Check whether a field parses as a real number
fn is_number(field: &str) -> bool {
    parse_number(field).is_some()
}

fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

/// Parse one record; `None` when it has fewer than two fields or a non-numeric step/speed
fn parse_row(record: &StringRecord) -> Option<Sample> {
    if record.len() < 2 {
        return None;
    }

    let step = parse_number(record.get(0)?)?;
    let speed = parse_number(record.get(1)?)?;
    let state = record.get(2).map(str::trim).unwrap_or("");

    Some(Sample::new(step, speed, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read(text: &str) -> PlotResult<SampleLog> {
        CsvLogReader::from_reader(text.as_bytes(), "test.csv").read_log()
    }

    #[test]
    fn test_header_row_is_dropped() {
        let log = read("step,speed,state\n1,10,Idle\n2,12,Idle\n").unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.steps(), &[1.0, 2.0]);
    }

    #[test]
    fn test_numeric_first_row_is_data() {
        let log = read("1,10,Idle\n2,12,Running\n").unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0), Some(Sample::new(1.0, 10.0, "Idle")));
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let text = "step,speed,state\n\
                    1,10,Idle\n\
                    2\n\
                    abc,12,Idle\n\
                    3,xyz,Idle\n\
                    \n\
                    4,14,Error\n";
        let log = read(text).unwrap();

        assert_eq!(log.steps(), &[1.0, 4.0]);
        assert_eq!(log.speeds(), &[10.0, 14.0]);
        assert_eq!(log.states(), &["Idle".to_string(), "Error".to_string()]);
    }

    #[test]
    fn test_state_is_trimmed_and_optional() {
        let log = read("1, 10 ,  Running  \n2,11\n3,12,Idle,EvTick\n").unwrap();

        assert_eq!(log.speeds(), &[10.0, 11.0, 12.0]);
        assert_eq!(
            log.states(),
            &["Running".to_string(), String::new(), "Idle".to_string()]
        );
    }

    #[test]
    fn test_leading_blank_lines_skipped_before_header_detection() {
        // Blank lines are not rows, so the header check sees the first non-blank line
        let log = read("\n\nstep,speed,state\n1,10,Idle\n").unwrap();
        assert_eq!(log.steps(), &[1.0]);

        let log = read("\n1,10,Idle\n2,12,Idle\n").unwrap();
        assert_eq!(log.steps(), &[1.0, 2.0]);

        let err = read("\n\n").unwrap_err();
        assert!(matches!(err, PlotError::EmptyInput(_)));
    }

    #[test]
    fn test_numeric_first_row_with_bad_speed_is_skipped() {
        let log = read("1,fast,Idle\n2,12,Idle\n").unwrap();
        assert_eq!(log.steps(), &[2.0]);
    }

    #[test]
    fn test_empty_input() {
        let err = read("").unwrap_err();
        assert!(matches!(err, PlotError::EmptyInput(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_header_only() {
        let err = read("step,speed,state\n").unwrap_err();
        assert!(matches!(err, PlotError::NoNumericData(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let bytes: &[u8] = b"1,10,Idle\n2,12,\xff\xfe\n";
        let err = CsvLogReader::from_reader(bytes, "bad.csv")
            .read_log()
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = CsvLogReader::from_path("/nonexistent/log.csv").err().unwrap();
        assert!(matches!(err, PlotError::ReadInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "step,speed,state,events").unwrap();
        writeln!(file, "0,0.000000,Idle,EvTick").unwrap();
        writeln!(file, "1,0.476190,Running,EvStart|EvTick").unwrap();

        let log = CsvLogReader::from_path(file.path())
            .unwrap()
            .read_log()
            .unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.states()[1], "Running");
    }
}
