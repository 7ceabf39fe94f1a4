//! CSV serialization for the generated dataset.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::record::{COLUMNS, WorkHistoryRecord};

/// Destination file, relative to the working directory.
pub const OUTPUT_FILE: &str = "employee_work_history.csv";

/// Write the header row and one row per record into `w`, in `COLUMNS` order.
/// Rows reach the writer as borrowed fields: pool strings as-is, integers
/// through reusable `itoa` buffers, so only the two date columns allocate.
///
/// The `csv` writer buffers internally and is flushed before returning, so
/// late I/O errors surface here rather than on drop.
pub fn write_csv<W: Write>(w: W, records: &[WorkHistoryRecord]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(w);
    writer.write_record(COLUMNS)?;
    // One buffer per integer column: each formatted &str stays borrowed
    // until the row is handed to the writer.
    let mut hours = itoa::Buffer::new();
    let mut sick = itoa::Buffer::new();
    let mut vacation = itoa::Buffer::new();
    for record in records {
        let start = record.start_date.to_string();
        let end = record.end_date.to_string();
        writer.write_record([
            record.employee_id.as_str(),
            record.employee_name,
            record.project_name,
            start.as_str(),
            end.as_str(),
            hours.format(record.hours_worked),
            sick.format(record.sick_days),
            vacation.format(record.vacation_days),
            record.department,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Create `path` (truncating any existing file) and write the dataset to it.
pub fn write_csv_file<P: AsRef<Path>>(path: P, records: &[WorkHistoryRecord]) -> csv::Result<()> {
    let file = File::create(path)?;
    write_csv(file, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn sample() -> WorkHistoryRecord {
        WorkHistoryRecord {
            employee_id: "EMP1001".to_string(),
            employee_name: "John Smith",
            project_name: "Website Redesign",
            start_date: date(2023, 1, 10),
            end_date: date(2023, 2, 24),
            hours_worked: 100,
            sick_days: 2,
            vacation_days: 5,
            department: "Engineering",
        }
    }

    fn render(records: &[WorkHistoryRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_dataset_writes_header_only() {
        assert_eq!(
            render(&[]),
            "employee_id,employee_name,project_name,start_date,end_date,\
             hours_worked,sick_days,vacation_days,department\n"
        );
    }

    #[test]
    fn one_line_per_record_in_column_order() {
        let text = render(&[sample()]);
        assert!(text.ends_with('\n'));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(COLUMNS.join(",").as_str()));
        assert_eq!(
            lines.next(),
            Some("EMP1001,John Smith,Website Redesign,2023-01-10,2023-02-24,100,2,5,Engineering")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn row_count_matches_record_count() {
        let records = vec![sample(); 4];
        let text = render(&records);
        assert_eq!(text.lines().count(), records.len() + 1);
    }

    #[test]
    fn integer_columns_render_bare_at_their_bounds() {
        let mut record = sample();
        record.hours_worked = 40;
        record.sick_days = 0;
        record.vacation_days = 15;
        let text = render(&[record]);
        assert_eq!(
            text.lines().nth(1),
            Some("EMP1001,John Smith,Website Redesign,2023-01-10,2023-02-24,40,0,15,Engineering")
        );
    }

    #[test]
    fn fields_containing_the_delimiter_are_quoted() {
        let mut record = sample();
        record.project_name = "Migration, phase two";
        let text = render(&[record]);
        assert!(
            text.contains("\"Migration, phase two\""),
            "delimiter not escaped: {text}"
        );
    }

    #[test]
    fn write_csv_file_truncates_on_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv_file(&path, &[sample(), sample()]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 3);

        write_csv_file(&path, &[]).unwrap();
        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert_eq!(rewritten.lines().count(), 1, "rewrite appended instead of truncating");
    }
}
