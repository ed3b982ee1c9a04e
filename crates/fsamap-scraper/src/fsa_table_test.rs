use fsamap_core::{Ldu, Province};

use super::*;

fn hotspots() -> HotspotList {
    HotspotList::from_codes(["K1V", "M5V"]).expect("valid hotspot codes")
}

/// Single-table layout, as used by letters without urban/rural sections.
const SINGLE_TABLE_PAGE: &str = r##"
<html><body>
<p>Intro text</p>
<table class="wikitable">
  <tbody>
    <tr>
      <td><b>K2P</b><br><a href="/wiki/Ottawa">Ottawa</a><br>(Centretown)</td>
      <td><b>K1A</b><br>Ottawa<br>(Parliament Hill)<sup class="reference"><a href="#cite_note-1">[1]</a></sup></td>
      <td><b>K1B</b><br>Not assigned</td>
    </tr>
    <tr>
      <td><b>K1V</b><br>Ottawa<br>(Riverside Park)</td>
      <td><b>K0A</b><br>Eastern Ontario<br>1A0: Almonte<br>1B0: Arnprior*</td>
      <td><b>K1C</b><br>Orl&eacute;ans</td>
    </tr>
  </tbody>
</table>
<table><tr><td><b>K9Z</b><br>Second table is ignored</td></tr></table>
</body></html>
"##;

/// Sectioned layout with the newer heading wrapper markup.
const SECTIONED_PAGE: &str = r#"
<html><body>
<div class="mw-heading mw-heading3"><h3 id="Urban">Urban</h3></div>
<table class="wikitable">
  <tr>
    <td><b>M5V</b><br>Downtown Toronto<br>(CN Tower / King and Spadina)</td>
    <td><b>M1B</b><br>Scarborough<br>(Malvern / Rouge)</td>
  </tr>
</table>
<div class="mw-heading mw-heading3"><h3 id="Rural">Rural</h3></div>
<table class="wikitable">
  <tr>
    <td><b>M0A</b><br>Toronto Islands<br>1A0: Ward's Island</td>
  </tr>
</table>
</body></html>
"#;

/// Sectioned layout with the older inline `[edit]` links.
const LEGACY_SECTIONED_PAGE: &str = r##"
<html><body>
<table><tr><td>Navigation box, not data</td></tr></table>
<h3><span class="mw-headline" id="Rural">Rural</span><span class="mw-editsection">[<a href="#">edit</a>]</span></h3>
<table>
  <tr><td><b>X0A</b><br>Qikiqtaaluk Region<br>0H0: Iqaluit</td></tr>
  <tr><td><b>X0E</b><br>Northwest Territories<br>0T0: Tuktoyaktuk*</td></tr>
</table>
<h3><span class="mw-headline" id="Urban">Urban</span><span class="mw-editsection">[<a href="#">edit</a>]</span></h3>
<table>
  <tr><td><b>X1A</b><br>Yellowknife</td></tr>
</table>
</body></html>
"##;

fn fsas(records: &[FsaRecord]) -> Vec<&str> {
    records.iter().map(|r| r.fsa.as_str()).collect()
}

#[test]
fn single_table_page_is_sorted_and_filtered() {
    let records = extract_fsa_records(SINGLE_TABLE_PAGE, "K", &hotspots()).unwrap();
    assert_eq!(fsas(&records), ["K0A", "K1A", "K1C", "K1V", "K2P"]);
}

#[test]
fn unassigned_fsa_never_appears() {
    let records = extract_fsa_records(SINGLE_TABLE_PAGE, "K", &hotspots()).unwrap();
    assert!(records.iter().all(|r| r.fsa != "K1B"));
    assert!(records.iter().all(|r| r.name != "Not assigned"));
}

#[test]
fn urban_record_has_unwrapped_detail_without_footnote() {
    let records = extract_fsa_records(SINGLE_TABLE_PAGE, "K", &hotspots()).unwrap();
    let k1a = records.iter().find(|r| r.fsa == "K1A").unwrap();
    assert_eq!(k1a.name, "Ottawa");
    assert_eq!(k1a.province, Province::On);
    assert!(!k1a.hotspot);
    assert_eq!(
        k1a.payload,
        FsaPayload::Urban {
            detail: Some("Parliament Hill".to_owned())
        }
    );
}

#[test]
fn urban_record_without_payload_has_no_detail() {
    let records = extract_fsa_records(SINGLE_TABLE_PAGE, "K", &hotspots()).unwrap();
    let k1c = records.iter().find(|r| r.fsa == "K1C").unwrap();
    assert_eq!(k1c.name, "Orléans");
    assert_eq!(k1c.payload, FsaPayload::Urban { detail: None });
}

#[test]
fn rural_record_lists_ldus_with_retired_flag() {
    let records = extract_fsa_records(SINGLE_TABLE_PAGE, "K", &hotspots()).unwrap();
    let k0a = records.iter().find(|r| r.fsa == "K0A").unwrap();
    assert_eq!(k0a.name, "Eastern Ontario");
    assert_eq!(
        k0a.payload,
        FsaPayload::Rural {
            ldus: vec![
                Ldu {
                    ldu: "1A0".to_owned(),
                    name: "Almonte".to_owned(),
                    retired: false,
                },
                Ldu {
                    ldu: "1B0".to_owned(),
                    name: "Arnprior".to_owned(),
                    retired: true,
                },
            ]
        }
    );
}

#[test]
fn hotspot_membership_is_flagged() {
    let records = extract_fsa_records(SINGLE_TABLE_PAGE, "K", &hotspots()).unwrap();
    let flagged: Vec<&str> = records
        .iter()
        .filter(|r| r.hotspot)
        .map(|r| r.fsa.as_str())
        .collect();
    assert_eq!(flagged, ["K1V"]);
}

#[test]
fn only_the_first_table_is_read_without_sections() {
    let records = extract_fsa_records(SINGLE_TABLE_PAGE, "K", &hotspots()).unwrap();
    assert!(records.iter().all(|r| r.fsa != "K9Z"));
}

#[test]
fn sectioned_page_reads_both_sections() {
    let records = extract_fsa_records(SECTIONED_PAGE, "M", &hotspots()).unwrap();
    assert_eq!(fsas(&records), ["M0A", "M1B", "M5V"]);
    let m0a = &records[0];
    assert_eq!(m0a.fsa_type(), FsaType::Rural);
    assert_eq!(m0a.ldus()[0].name, "Ward's Island");
    let m5v = &records[2];
    assert!(m5v.hotspot);
    assert_eq!(
        m5v.payload,
        FsaPayload::Urban {
            detail: Some("CN Tower / King and Spadina".to_owned())
        }
    );
}

#[test]
fn legacy_sectioned_page_skips_leading_non_data_table() {
    let records = extract_fsa_records(LEGACY_SECTIONED_PAGE, "X", &hotspots()).unwrap();
    assert_eq!(fsas(&records), ["X0A", "X0E", "X1A"]);
    assert_eq!(records[0].province, Province::Nu);
    assert_eq!(records[1].province, Province::Nt);
    assert_eq!(records[2].province, Province::Nt);
    assert!(records[1].ldus()[0].retired);
    assert_eq!(records[1].ldus()[0].name, "Tuktoyaktuk");
}

#[test]
fn one_section_alone_falls_back_to_first_table() {
    let page = r#"
        <h3>Urban</h3>
        <table><tr><td><b>A1A</b><br>St. John's</td></tr></table>
        <h3>Notes</h3>
        <table><tr><td><b>A1B</b><br>Elsewhere</td></tr></table>
    "#;
    let records = extract_fsa_records(page, "A", &hotspots()).unwrap();
    assert_eq!(fsas(&records), ["A1A"]);
}

#[test]
fn heading_must_be_immediately_followed_by_table() {
    let page = r#"
        <table><tr><td><b>B1A</b><br>Fallback</td></tr></table>
        <h3>Urban</h3>
        <p>Some prose between heading and table</p>
        <table><tr><td><b>B2A</b><br>Urban town</td></tr></table>
        <h3>Rural</h3>
        <table><tr><td><b>B0A</b><br>Rural place</td></tr></table>
    "#;
    let records = extract_fsa_records(page, "B", &hotspots()).unwrap();
    assert_eq!(fsas(&records), ["B1A"]);
}

#[test]
fn hyphenated_name_split_by_break_is_rejoined() {
    let page = "<table><tr><td>A1B<br>Some-<br>Town<br>Further detail</td></tr></table>";
    let records = extract_fsa_records(page, "A", &hotspots()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Some-Town");
    assert_eq!(
        records[0].payload,
        FsaPayload::Urban {
            detail: Some("Further detail".to_owned())
        }
    );
}

#[test]
fn content_after_horizontal_rule_is_ignored() {
    let page = "<table><tr><td>E1A<br>Moncton<br>(Northeast)<hr>E1B<br>Other</td></tr></table>";
    let records = extract_fsa_records(page, "E", &hotspots()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].payload,
        FsaPayload::Urban {
            detail: Some("Northeast".to_owned())
        }
    );
}

#[test]
fn malformed_cells_are_skipped() {
    let page = r#"<table><tr>
        <td></td>
        <td>Header text<br>Not an FSA</td>
        <td>C1A</td>
        <td>C1B<br>Charlottetown</td>
    </tr></table>"#;
    let records = extract_fsa_records(page, "C", &hotspots()).unwrap();
    assert_eq!(fsas(&records), ["C1B"]);
}

#[test]
fn page_without_table_is_an_error() {
    let err = extract_fsa_records("<html><body><p>Moved</p></body></html>", "G", &hotspots())
        .unwrap_err();
    assert!(matches!(err, ScraperError::MissingTable { ref context } if context == "G"));
}

#[test]
fn unknown_leading_letter_is_an_error() {
    let page = "<table><tr><td>D1A<br>Nowhere</td></tr></table>";
    let err = extract_fsa_records(page, "D", &hotspots()).unwrap_err();
    assert!(matches!(err, ScraperError::Core(_)));
}

#[test]
fn extraction_is_deterministic() {
    let first = extract_fsa_records(SECTIONED_PAGE, "M", &hotspots()).unwrap();
    let second = extract_fsa_records(SECTIONED_PAGE, "M", &hotspots()).unwrap();
    assert_eq!(
        serde_json::to_string_pretty(&first).unwrap(),
        serde_json::to_string_pretty(&second).unwrap()
    );
}

#[test]
fn every_record_matches_its_type() {
    for (page, ctx) in [
        (SINGLE_TABLE_PAGE, "K"),
        (SECTIONED_PAGE, "M"),
        (LEGACY_SECTIONED_PAGE, "X"),
    ] {
        let records = extract_fsa_records(page, ctx, &hotspots()).unwrap();
        assert!(records.windows(2).all(|w| w[0].fsa <= w[1].fsa));
        for record in &records {
            assert_eq!(record.fsa_type(), FsaType::of(&record.fsa), "{}", record.fsa);
            let json = serde_json::to_value(record).unwrap();
            match record.fsa_type() {
                FsaType::Urban => assert!(json.get("ldus").is_none()),
                FsaType::Rural => {
                    assert!(json.get("detail").is_none());
                    assert!(json.get("ldus").is_some());
                }
            }
        }
    }
}
