//! Semicolon-separated record files
//!
//! Header: `Name;Classification;File Number;Image Path` followed by
//! `Attributename i;Attribute i` for `i` in `0..n`. Every row has exactly
//! `4 + 2n` fields.

use crate::types::*;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use poster_render::{Attribute, Classification, FileNumber, PosterRecord};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const DELIMITER: u8 = b';';
pub const FIXED_COLUMNS: [&str; 4] = ["Name", "Classification", "File Number", "Image Path"];

pub fn attribute_label_column(index: usize) -> String {
    format!("Attributename {}", index)
}

pub fn attribute_value_column(index: usize) -> String {
    format!("Attribute {}", index)
}

/// Full header for `n_attributes` attribute pairs
pub fn header(n_attributes: usize) -> Vec<String> {
    let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
    for i in 0..n_attributes {
        columns.push(attribute_label_column(i));
        columns.push(attribute_value_column(i));
    }
    columns
}

/// Check a header row and return how many attribute pairs it declares
pub fn attribute_count(headers: &StringRecord) -> Result<usize> {
    let fixed = FIXED_COLUMNS.len();
    if headers.len() < fixed || (headers.len() - fixed) % 2 != 0 {
        return Err(RecordError::Schema(format!(
            "expected 4 + 2n columns, found {}",
            headers.len()
        )));
    }

    let n_attributes = (headers.len() - fixed) / 2;
    let expected = header(n_attributes);
    for (i, (found, wanted)) in headers.iter().zip(&expected).enumerate() {
        if found.trim() != wanted {
            return Err(RecordError::Schema(format!(
                "column {} should be {:?}, found {:?}",
                i + 1,
                wanted,
                found
            )));
        }
    }

    Ok(n_attributes)
}

fn parse_row(row: &StringRecord, n_attributes: usize, line: u64) -> Result<PosterRecord> {
    let field = |i: usize| row.get(i).unwrap_or("");

    let file_number = FileNumber::parse(field(2)).ok_or_else(|| {
        RecordError::Schema(format!(
            "line {}: file number {:?} is not up to {} digits",
            line,
            field(2),
            FileNumber::DIGITS
        ))
    })?;

    let attributes = (0..n_attributes)
        .map(|i| (field(4 + 2 * i).trim(), field(5 + 2 * i).trim()))
        .filter(|(label, value)| !(label.is_empty() && value.is_empty()))
        .map(|(label, value)| Attribute::new(label, value))
        .collect();

    Ok(PosterRecord {
        name: field(0).trim().to_string(),
        classification: Classification::parse(field(1)),
        file_number,
        image_path: PathBuf::from(field(3).trim()),
        attributes,
    })
}

/// Read records, validating the header before any row
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PosterRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .from_reader(reader);

    let n_attributes = attribute_count(reader.headers()?)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        records.push(parse_row(&row, n_attributes, line)?);
    }
    Ok(records)
}

/// Write records under a header with `n_attributes` pairs.
///
/// Records with fewer attributes get empty cells; more is a schema error.
pub fn write_records<W: Write>(
    writer: W,
    records: &[PosterRecord],
    n_attributes: usize,
) -> Result<()> {
    let mut writer = WriterBuilder::new().delimiter(DELIMITER).from_writer(writer);
    writer.write_record(header(n_attributes))?;

    for record in records {
        if record.attributes.len() > n_attributes {
            return Err(RecordError::Schema(format!(
                "{} has {} attributes but the header holds {}",
                record.name,
                record.attributes.len(),
                n_attributes
            )));
        }

        let mut row = vec![
            record.name.clone(),
            record.classification.text().to_string(),
            record.file_number.to_string(),
            record.image_path.to_string_lossy().into_owned(),
        ];
        for i in 0..n_attributes {
            match record.attributes.get(i) {
                Some(attr) => {
                    row.push(attr.label.clone());
                    row.push(attr.value.clone());
                }
                None => row.extend([String::new(), String::new()]),
            }
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

pub async fn load_from_csv(path: impl AsRef<Path>) -> Result<Vec<PosterRecord>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read(&path).await?;

    // CSV parsing is CPU-bound, spawn blocking
    let records =
        tokio::task::spawn_blocking(move || read_records(contents.as_slice())).await??;

    Ok(records)
}

pub async fn save_to_csv(
    path: impl AsRef<Path>,
    records: &[PosterRecord],
    n_attributes: usize,
) -> Result<()> {
    let records = records.to_vec();

    let bytes = tokio::task::spawn_blocking(move || {
        let mut bytes = Vec::new();
        write_records(&mut bytes, &records, n_attributes)?;
        Ok::<_, RecordError>(bytes)
    })
    .await??;

    tokio::fs::write(path, bytes).await?;
    Ok(())
}
