use std::fs;
use std::io::Cursor;
use std::path::Path;

use lottodb::lotto::parser::parse_year;
use lottodb::lotto::store::{verify_archive, write_archive};
use lottodb::{Archive, Draw, LottoError, Month, Wheel};

/// Two active wheels; 13 tokens per record line (2 + 5x2 + 1). The last
/// token of each record line and the repeated year in the header are
/// carried by the real archive files and never inspected.
const YEAR_1986: &str = "\
1986 BARI CAGLIARI 1986
04 GEN 10 20 30 40 50 61 62 63 64 65 1986
11 GEN -- -- -- -- -- 07 08 09 10 11 1986
18 GEN 90 01 -- -- -- -- -- -- -- -- 1986
END
";

/// Single wheel, no END terminator: EOF also ends a year cleanly.
const YEAR_1987: &str = "\
1987 NAPOLI
02 FEB 41 42 43 44 45 1987
";

fn parse_str(input: &str, year: u16) -> Result<Vec<Draw>, LottoError> {
    let mut draws = Vec::new();
    parse_year(Cursor::new(input), year, &mut draws)?;
    Ok(draws)
}

fn sample_sequence() -> Vec<Draw> {
    let mut draws = parse_str(YEAR_1986, 1986).expect("1986 fixture parses");
    draws.extend(parse_str(YEAR_1987, 1987).expect("1987 fixture parses"));
    draws
}

#[test]
fn year_file_parses_in_declared_order() {
    let draws = parse_str(YEAR_1986, 1986).expect("fixture parses");

    // Line 2 fills both wheels, line 3 only CAGLIARI, line 4 only BARI.
    assert_eq!(draws.len(), 4, "unexpected draw count");

    assert_eq!(draws[0].wheel, Wheel::Bari);
    assert_eq!(draws[0].day, 4);
    assert_eq!(draws[0].month, Month::Gen);
    assert_eq!(draws[0].year, 1986);
    assert_eq!(draws[0].numbers, [10, 20, 30, 40, 50]);

    assert_eq!(draws[1].wheel, Wheel::Cagliari);
    assert_eq!(draws[1].numbers, [61, 62, 63, 64, 65]);

    assert_eq!(draws[2].wheel, Wheel::Cagliari, "blank BARI group must be skipped");
    assert_eq!(draws[2].numbers, [7, 8, 9, 10, 11]);

    assert_eq!(draws[3].wheel, Wheel::Bari);
    assert_eq!(
        draws[3].numbers,
        [90, 1, 0, 0, 0],
        "blank slots after a drawn first number must persist as 0"
    );
}

#[test]
fn end_terminator_stops_the_year() {
    let input = "\
1986 BARI CAGLIARI 1986
04 GEN 10 20 30 40 50 61 62 63 64 65 1986
END
this line would be malformed if it were ever read
";
    let draws = parse_str(input, 1986).expect("END must end the year cleanly");
    assert_eq!(draws.len(), 2);
}

#[test]
fn header_year_mismatch_aborts_before_records() {
    let input = "\
1985 BARI CAGLIARI 1985
04 GEN 10 20 30 40 50 61 62 63 64 65 1985
";
    let mut draws = Vec::new();
    let result = parse_year(Cursor::new(input), 1986, &mut draws);
    assert!(
        matches!(
            result,
            Err(LottoError::YearMismatch {
                expected: 1986,
                found: 1985
            })
        ),
        "expected YearMismatch, got {:?}",
        result
    );
    assert!(draws.is_empty(), "no record may be parsed after a bad header");
}

#[test]
fn header_rejects_unknown_tokens() {
    let result = parse_str("1986 BARI PIPPO CAGLIARI\n", 1986);
    assert!(
        matches!(result, Err(LottoError::HeaderParse { year: 1986, .. })),
        "expected HeaderParse, got {:?}",
        result
    );

    // An empty file has no header at all.
    let result = parse_str("", 1986);
    assert!(matches!(result, Err(LottoError::HeaderParse { .. })));
}

#[test]
fn record_arity_is_exact() {
    // 2 active wheels: a valid line has 13 tokens.
    let twelve = "1986 BARI CAGLIARI 1986\n04 GEN 10 20 30 40 50 61 62 63 64 65\n";
    let result = parse_str(twelve, 1986);
    assert!(
        matches!(
            result,
            Err(LottoError::MalformedRecord {
                line: 1,
                found: 12,
                expected: 13
            })
        ),
        "expected MalformedRecord for 12 tokens, got {:?}",
        result
    );

    let fourteen = "1986 BARI CAGLIARI 1986\n04 GEN 10 20 30 40 50 61 62 63 64 65 1986 x\n";
    let result = parse_str(fourteen, 1986);
    assert!(
        matches!(
            result,
            Err(LottoError::MalformedRecord {
                line: 1,
                found: 14,
                expected: 13
            })
        ),
        "expected MalformedRecord for 14 tokens, got {:?}",
        result
    );
}

#[test]
fn record_field_validation() {
    let bad_day = "1987 NAPOLI\n32 FEB 41 42 43 44 45 1987\n";
    assert!(matches!(
        parse_str(bad_day, 1987),
        Err(LottoError::ValueOutOfRange { what: "day", value: 32, .. })
    ));

    let bad_month = "1987 NAPOLI\n02 FOO 41 42 43 44 45 1987\n";
    assert!(matches!(
        parse_str(bad_month, 1987),
        Err(LottoError::InvalidMonth { line: 1, .. })
    ));

    let bad_number = "1987 NAPOLI\n02 FEB 41 91 43 44 45 1987\n";
    assert!(matches!(
        parse_str(bad_number, 1987),
        Err(LottoError::ValueOutOfRange { what: "draw number", value: 91, .. })
    ));

    // "00" is never a valid drawn number; blanks are spelled "--".
    let double_zero = "1987 NAPOLI\n02 FEB 00 42 43 44 45 1987\n";
    assert!(matches!(
        parse_str(double_zero, 1987),
        Err(LottoError::MalformedNumber { line: 1, .. })
    ));
}

#[test]
fn serialized_size_is_eight_bytes_per_draw() {
    let draws = sample_sequence();
    let mut buf = Vec::new();
    write_archive(&mut buf, &draws).expect("in-memory write");
    assert_eq!(buf.len(), draws.len() * 8);

    verify_archive(&mut Cursor::new(&buf), &draws).expect("clean buffer verifies");
}

#[test]
fn corruption_is_detected_at_the_exact_record() {
    let draws = sample_sequence();
    let mut buf = Vec::new();
    write_archive(&mut buf, &draws).expect("in-memory write");

    // Flip one byte inside every record in turn: verification must fail
    // at that record's 1-based index, never at a neighbor.
    for i in 0..draws.len() {
        let mut corrupted = buf.clone();
        corrupted[i * 8 + (i % 8)] ^= 0xFF;
        let result = verify_archive(&mut Cursor::new(&corrupted), &draws);
        match result {
            Err(LottoError::RecordMismatch { index, .. }) => {
                assert_eq!(index, i + 1, "mismatch reported at the wrong record")
            }
            other => panic!("expected RecordMismatch for record {}, got {:?}", i + 1, other),
        }
    }
}

#[test]
fn short_read_is_a_truncated_file() {
    let draws = sample_sequence();
    let mut buf = Vec::new();
    write_archive(&mut buf, &draws).expect("in-memory write");

    buf.truncate(buf.len() - 3);
    let result = verify_archive(&mut Cursor::new(&buf), &draws);
    match result {
        Err(LottoError::TruncatedFile { index }) => assert_eq!(index, draws.len()),
        other => panic!("expected TruncatedFile, got {:?}", other),
    }
}

fn write_fixture(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("fixture write");
}

#[test]
fn import_save_verify_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path(), "1986.txt", YEAR_1986);
    write_fixture(dir.path(), "1987.txt", YEAR_1987);

    let archive = Archive::import(dir.path(), 1986, 1987).expect("import");
    assert_eq!(archive.draws().len(), 5);
    assert_eq!(archive.draws(), sample_sequence().as_slice());

    let db = dir.path().join("lotto.db");
    archive.save(&db).expect("save");
    let written = fs::metadata(&db).expect("output metadata").len();
    assert_eq!(written, 8 * archive.draws().len() as u64);

    archive.verify(&db).expect("verification of a fresh database");

    // A corrupted database must fail verification at the right record.
    let mut bytes = fs::read(&db).expect("read back");
    bytes[2 * 8] ^= 0x40;
    fs::write(&db, &bytes).expect("rewrite corrupted");
    let result = archive.verify(&db);
    assert!(
        matches!(result, Err(LottoError::RecordMismatch { index: 3, .. })),
        "expected RecordMismatch at record 3, got {:?}",
        result
    );
}

#[test]
fn missing_year_file_aborts_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path(), "1986.txt", YEAR_1986);

    // 1987.txt is absent: the run stops there.
    let result = Archive::import(dir.path(), 1986, 1987);
    assert!(
        matches!(result, Err(LottoError::MissingInput { .. })),
        "expected MissingInput, got {:?}",
        result
    );
}
