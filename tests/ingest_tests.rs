mod common;
use common::{HEADER, TEAM_CSV_ROWS, d, temp_out, write_csv};
use ravailability::core::calculator::aggregate_employees;
use ravailability::core::ingest::{load_records, read_csv};
use ravailability::errors::AppError;
use ravailability::models::raw_record::parse_lenient_f64;
use ravailability::models::{Category, RawAssignmentRecord};
use rust_xlsxwriter::Workbook;
use std::path::Path;

fn csv_bytes(rows: &[&str]) -> Vec<u8> {
    let mut s = String::from(HEADER);
    for r in rows {
        s.push('\n');
        s.push_str(r);
    }
    s.into_bytes()
}

#[test]
fn test_read_csv_maps_positional_columns() {
    let records = read_csv(csv_bytes(TEAM_CSV_ROWS).as_slice()).expect("valid csv");

    assert_eq!(records.len(), 3);

    let r = &records[0];
    assert_eq!(r.emp_id, "E001");
    assert_eq!(r.last_name.as_deref(), Some("Doe"));
    assert_eq!(r.first_name.as_deref(), Some("Jane"));
    assert_eq!(r.job_code.as_deref(), Some("20001"));
    assert_eq!(r.job_name.as_deref(), Some("Apollo"));
    assert_eq!(r.start_date.as_deref(), Some("06/02/25"));
    assert_eq!(r.end_date.as_deref(), Some("06/06/25"));
    assert_eq!(r.utilization, 100.0);
    assert_eq!(r.status.as_deref(), Some("C"));
    assert_eq!(r.hours, 40.0);
    assert_eq!(r.start_date_parsed, None);
    assert_eq!(r.end_date_parsed, None);
    assert_eq!(r.util_percent.as_deref(), Some("100%"));
    assert_eq!(r.working_days, 5.0);
    assert_eq!(r.hours_total, 40.0);
    assert_eq!(r.hours_per_day, 8.0);
    assert_eq!(r.display_name(), "Jane Doe");
}

#[test]
fn test_read_csv_skips_blank_rows_and_pads_short_rows() {
    let rows = [
        "E1,Doe,Jane,20001,Apollo,2025-06-02,2025-06-06,100,C",
        ",,,,,,,,,,,,,,,",
        "",
        "E2,Roe",
    ];

    let records = read_csv(csv_bytes(&rows).as_slice()).expect("valid csv");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].hours_per_day, 0.0);
    assert_eq!(records[1].emp_id, "E2");
    assert_eq!(records[1].first_name, None);
    assert_eq!(records[1].job_code, None);
}

#[test]
fn test_read_csv_keeps_rows_with_latin1_bytes() {
    let mut bytes = HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(b"\nE001,Dupont,H\xe9l\xe8ne,20001,Apollo,2025-06-02,2025-06-06,100,C,40,,,,5,40,8");
    bytes.extend_from_slice(b"\nE002,Roe,Rich,1234,Holiday,2025-06-04,2025-06-04,0,C,8,,,,1,8,8\n");

    let records = read_csv(bytes.as_slice()).expect("invalid bytes are replaced, not fatal");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].emp_id, "E001");
    assert_eq!(records[0].first_name.as_deref(), Some("H\u{FFFD}l\u{FFFD}ne"));
    assert_eq!(records[0].hours_per_day, 8.0);
    assert_eq!(records[1].emp_id, "E002");
}

#[test]
fn test_lenient_numbers() {
    assert_eq!(parse_lenient_f64("80%"), 80.0);
    assert_eq!(parse_lenient_f64(" 7.5 "), 7.5);
    assert_eq!(parse_lenient_f64("-2"), -2.0);
    assert_eq!(parse_lenient_f64("4h/day"), 4.0);
    assert_eq!(parse_lenient_f64(""), 0.0);
    assert_eq!(parse_lenient_f64("n/a"), 0.0);
    assert_eq!(parse_lenient_f64("."), 0.0);
}

#[test]
fn test_classification_of_loaded_codes() {
    assert_eq!(Category::classify(Some("20001")), Category::Chargeable);
    assert_eq!(Category::classify(Some("1234")), Category::Absence);
    assert_eq!(Category::classify(Some("ABCD")), Category::Absence);
    assert_eq!(Category::classify(Some("9999999996")), Category::Reservation);
    assert_eq!(Category::classify(Some("9999999980")), Category::Training);
    assert_eq!(Category::classify(Some("9999999910")), Category::Loa);
    assert_eq!(Category::classify(Some("9999999911")), Category::Loa);
    assert_eq!(Category::classify(Some("7777777777")), Category::Pending);
    assert_eq!(Category::classify(Some("30001")), Category::Other);
    assert_eq!(Category::classify(Some("123")), Category::Other);
    assert_eq!(Category::classify(Some("   ")), Category::Unknown);
    assert_eq!(Category::classify(None), Category::Unknown);
    // length rule comes first
    assert_eq!(Category::classify(Some("2001")), Category::Absence);
}

#[test]
fn test_load_records_from_csv_file() {
    let path = write_csv("ingest_file", TEAM_CSV_ROWS);

    let records = load_records(Path::new(&path)).expect("load csv");
    let employees = aggregate_employees(&records);

    assert_eq!(records.len(), 3);
    assert_eq!(employees.len(), 3);
    assert_eq!(employees[0].emp_id, "E001");
    assert_eq!(employees[0].assignments[0].start, d("2025-06-02"));
}

#[test]
fn test_load_records_rejects_unknown_extension() {
    let path = temp_out("ingest_unknown", "txt");
    std::fs::write(&path, "whatever").expect("write");

    match load_records(Path::new(&path)) {
        Err(AppError::UnsupportedFormat(ext)) => assert_eq!(ext, "txt"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn test_load_records_missing_file_is_io_error() {
    let path = temp_out("ingest_missing", "csv");
    assert!(matches!(load_records(Path::new(&path)), Err(AppError::Io(_))));
}

#[test]
fn test_load_records_from_xlsx_first_sheet() {
    let path = temp_out("ingest_workbook", "xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, h) in HEADER.split(',').enumerate() {
        sheet.write(0, col as u16, h).expect("header");
    }
    let row: [&str; 9] = [
        "E010", "Smith", "Ann", "20001", "Apollo", "2025-06-02", "2025-06-06", "", "C",
    ];
    for (col, v) in row.iter().enumerate() {
        sheet.write(1, col as u16, *v).expect("cell");
    }
    sheet.write(1, 7, 100.0).expect("utilization");
    sheet.write(1, 15, 8.0).expect("hours per day");
    workbook.save(&path).expect("save workbook");

    let records: Vec<RawAssignmentRecord> = load_records(Path::new(&path)).expect("load xlsx");

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.emp_id, "E010");
    assert_eq!(r.display_name(), "Ann Smith");
    assert_eq!(r.start_date.as_deref(), Some("2025-06-02"));
    assert_eq!(r.utilization, 100.0);
    assert_eq!(r.hours_per_day, 8.0);
}
