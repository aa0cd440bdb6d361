use poster_records::*;
use poster_render::{Attribute, Classification, FileNumber, PosterRecord};
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn sample_record() -> PosterRecord {
    PosterRecord {
        name: "Jane Doe".to_string(),
        classification: Classification::Labeled("Cold Case".to_string()),
        file_number: FileNumber::new(4711).unwrap(),
        image_path: PathBuf::from("photos/jane_doe.jpg"),
        attributes: vec![
            Attribute::new("Height", "Fun-sized"),
            Attribute::new("Mood", "Approachable in theory,dangerous in practice"),
        ],
    }
}

#[test]
fn test_header_layout() {
    assert_eq!(
        header(2),
        vec![
            "Name",
            "Classification",
            "File Number",
            "Image Path",
            "Attributename 0",
            "Attribute 0",
            "Attributename 1",
            "Attribute 1",
        ]
    );
}

#[test]
fn test_written_file_format() {
    let mut bytes = Vec::new();
    write_records(&mut bytes, &[sample_record()], 2).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let mut lines = text.lines();

    assert_eq!(
        lines.next().unwrap(),
        "Name;Classification;File Number;Image Path;Attributename 0;Attribute 0;Attributename 1;Attribute 1"
    );
    assert_eq!(
        lines.next().unwrap(),
        "Jane Doe;Cold Case;00004711;photos/jane_doe.jpg;Height;Fun-sized;Mood;Approachable in theory,dangerous in practice"
    );
}

#[test]
fn test_read_back_written_records() {
    let mut hidden = sample_record();
    hidden.name = "John Smith".to_string();
    hidden.classification = Classification::None;
    hidden.attributes.truncate(1);

    let records = vec![sample_record(), hidden];
    let mut bytes = Vec::new();
    write_records(&mut bytes, &records, 2).unwrap();

    // Missing attribute cells are padded and skipped on read
    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("John Smith;X;00004711;photos/jane_doe.jpg;Height;Fun-sized;;"));

    let read = read_records(bytes.as_slice()).unwrap();
    assert_eq!(read, records);
}

#[test]
fn test_write_rejects_too_many_attributes() {
    let mut bytes = Vec::new();
    let result = write_records(&mut bytes, &[sample_record()], 1);
    assert!(matches!(result, Err(RecordError::Schema(_))));
}

#[test]
fn test_read_handles_stripped_zeros_and_sentinels() {
    let data = "Name;Classification;File Number;Image Path;Attributename 0;Attribute 0\n\
                Ann;x;42;a.png;Age;Ageless\n\
                Bob;none;00000007;b.png;;\n\
                Cy;;123;c.png;Voice;Pure sarcasm\n";
    let records = read_records(data.as_bytes()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].file_number.as_str(), "00000042");
    assert_eq!(records[0].classification, Classification::None);
    assert_eq!(records[1].classification, Classification::None);
    assert!(records[1].attributes.is_empty());
    assert_eq!(records[2].classification, Classification::None);
    assert_eq!(records[2].attributes, vec![Attribute::new("Voice", "Pure sarcasm")]);
}

#[test]
fn test_header_with_odd_column_count() {
    let data = "Name;Classification;File Number;Image Path;Attributename 0\n";
    match read_records(data.as_bytes()) {
        Err(RecordError::Schema(msg)) => assert!(msg.contains("4 + 2n")),
        other => panic!("Expected Schema error, got {:?}", other),
    }
}

#[test]
fn test_header_with_wrong_names() {
    let data = "Name;File Number;Classification;Image Path\nAnn;1;X;a.png\n";
    match read_records(data.as_bytes()) {
        Err(RecordError::Schema(msg)) => assert!(msg.contains("Classification")),
        other => panic!("Expected Schema error, got {:?}", other),
    }

    let data = "Name;Classification;File Number;Image Path;Attribute 0;Attributename 0\n";
    assert!(matches!(
        read_records(data.as_bytes()),
        Err(RecordError::Schema(_))
    ));
}

#[test]
fn test_row_with_wrong_field_count() {
    let data = "Name;Classification;File Number;Image Path\nAnn;X;1\n";
    assert!(matches!(read_records(data.as_bytes()), Err(RecordError::Csv(_))));
}

#[test]
fn test_bad_file_number() {
    let data = "Name;Classification;File Number;Image Path\nAnn;X;12ab;a.png\n";
    match read_records(data.as_bytes()) {
        Err(RecordError::Schema(msg)) => assert!(msg.contains("line 2")),
        other => panic!("Expected Schema error, got {:?}", other),
    }
}

#[test]
fn test_empty_file() {
    assert!(matches!(read_records(&b""[..]), Err(RecordError::Schema(_))));
}

#[tokio::test]
async fn test_save_and_load_csv() {
    let file = NamedTempFile::new().unwrap();
    let records = vec![sample_record()];

    save_to_csv(file.path(), &records, 4).await.unwrap();
    let loaded = load_from_csv(file.path()).await.unwrap();

    assert_eq!(loaded, records);
}
