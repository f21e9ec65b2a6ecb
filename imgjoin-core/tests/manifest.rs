use imgjoin_core::manifest::{Manifest, FORMAT_TAG};

const SHA_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const SHA_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

fn sample(format: &str, parts: &str) -> String {
    format!(
        "FORMAT={format}\n\
         ORIGINAL_FILE=disk.img\n\
         ORIGINAL_SIZE=2048\n\
         ORIGINAL_SHA256={SHA_A}\n\
         PART_PREFIX=disk.img.part\n\
         PARTS_BEGIN\n\
         {parts}\
         PARTS_END\n"
    )
}

#[test]
fn parses_complete_manifest() {
    let text = sample(FORMAT_TAG, &format!("disk.img.part1 {SHA_A}\ndisk.img.part2 {SHA_B}\n"));
    let m = Manifest::parse(&text).unwrap();
    assert_eq!(m.format, FORMAT_TAG);
    assert_eq!(m.original_file, "disk.img");
    assert_eq!(m.original_size, Some(2048));
    assert_eq!(m.original_sha256, SHA_A);
    assert_eq!(m.part_prefix, "disk.img.part");
    assert_eq!(m.parts.len(), 2);
    assert_eq!(m.parts[0].file_name, "disk.img.part1");
    assert_eq!(m.parts[1].sha256_hex, SHA_B);
}

#[test]
fn rejects_unknown_format() {
    let text = sample("other-v2", &format!("p1 {SHA_A}\n"));
    let err = Manifest::parse(&text).unwrap_err();
    assert!(err.to_string().contains("unsupported manifest format"));
}

#[test]
fn rejects_missing_format() {
    let text = format!("ORIGINAL_SHA256={SHA_A}\nPARTS_BEGIN\np1 {SHA_A}\nPARTS_END\n");
    let err = Manifest::parse(&text).unwrap_err();
    assert!(err.to_string().contains("no FORMAT line"));
}

#[test]
fn rejects_empty_part_list() {
    let text = sample(FORMAT_TAG, "");
    let err = Manifest::parse(&text).unwrap_err();
    assert!(err.to_string().contains("no parts"));
}

#[test]
fn rejects_malformed_part_line() {
    let text = sample(FORMAT_TAG, &format!("p1 {SHA_A} extra-token\n"));
    let err = Manifest::parse(&text).unwrap_err();
    assert!(err.to_string().contains("malformed part line"));
}

#[test]
fn rejects_non_integer_size() {
    let text = sample(FORMAT_TAG, &format!("p1 {SHA_A}\n")).replace("ORIGINAL_SIZE=2048", "ORIGINAL_SIZE=lots");
    let err = Manifest::parse(&text).unwrap_err();
    assert!(err.to_string().contains("ORIGINAL_SIZE"));
}

#[test]
fn optional_size_may_be_absent() {
    let text = sample(FORMAT_TAG, &format!("p1 {SHA_A}\n")).replace("ORIGINAL_SIZE=2048\n", "");
    let m = Manifest::parse(&text).unwrap();
    assert_eq!(m.original_size, None);
}

#[test]
fn first_key_match_wins() {
    let text = format!(
        "{}ORIGINAL_FILE=shadow.img\n",
        sample(FORMAT_TAG, &format!("p1 {SHA_A}\n"))
    );
    let m = Manifest::parse(&text).unwrap();
    assert_eq!(m.original_file, "disk.img");
}

#[test]
fn part_lines_outside_markers_are_ignored() {
    let text = format!(
        "stray.part9 {SHA_B}\n{}trailing.part8 {SHA_B}\n",
        sample(FORMAT_TAG, &format!("p1 {SHA_A}\n"))
    );
    let m = Manifest::parse(&text).unwrap();
    assert_eq!(m.parts.len(), 1);
    assert_eq!(m.parts[0].file_name, "p1");
}

#[test]
fn blank_lines_inside_markers_are_skipped() {
    let text = sample(FORMAT_TAG, &format!("p1 {SHA_A}\n\n   \np2 {SHA_B}\n"));
    let m = Manifest::parse(&text).unwrap();
    assert_eq!(m.parts.len(), 2);
}

#[test]
fn load_rejects_missing_file() {
    let td = tempfile::tempdir().unwrap();
    let err = Manifest::load(&td.path().join("no-such.manifest")).unwrap_err();
    assert!(err.to_string().contains("manifest not found"));
}
