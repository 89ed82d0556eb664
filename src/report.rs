use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::course_scraper::CourseRecord;

pub const REPORT_HEADER: [&str; 5] =
    ["Title", "Language", "Upcoming Session", "Duration", "Average Score"];

// Written in place of fields the page never provided, so no persisted cell
// holds a raw null marker.
const FIELD_NOT_SPECIFIED: &str = "Not specified";

/// Writes one workbook: a header row, then one row per record in input order.
/// An existing file at `path` is overwritten.
pub fn write_report(records: &[CourseRecord], path: &Path) -> anyhow::Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in REPORT_HEADER.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row, cells) in record_rows(records).iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Flattens records into cell text, applying the absent-field marker.
pub fn record_rows(records: &[CourseRecord]) -> Vec<[String; 5]> {
    records
        .iter()
        .map(|record| {
            [
                record.title.clone(),
                record
                    .language
                    .clone()
                    .unwrap_or_else(|| FIELD_NOT_SPECIFIED.to_string()),
                record
                    .upcoming_session
                    .clone()
                    .unwrap_or_else(|| FIELD_NOT_SPECIFIED.to_string()),
                record.duration.clone(),
                record.average_score.clone(),
            ]
        })
        .collect()
}
