use std::io::Write;

use chrono::NaiveDate;
use sightings_lib::{
    DateLocale, Error, LoadError, ObservationId, ObservationTable, RenderConfig,
    load_observations,
};

const DATA: &str = r#"[
    {
        "id": 67868131,
        "photoUrl": "https://static.inaturalist.org/photos/109319291/square.jpg?1609877680",
        "uri": "https://www.inaturalist.org/observations/67868131",
        "date": "2020-09-18",
        "name": "Muskrat",
        "wikipediaUrl": "http://en.wikipedia.org/wiki/Muskrat",
        "isNative": true
    },
    {"id": "", "date": "2020-10-01", "name": "Unknown"},
    {"id": 67868200, "date": "2020-10-02", "name": "Coyote", "isIntroduced": true}
]"#;

fn table_with_data() -> ObservationTable {
    let observations = load_observations(DATA.as_bytes()).unwrap();
    let mut table = ObservationTable::default();
    table.render_observations(&observations);
    table
}

#[test]
fn test_render_skips_invalid_rows_and_keeps_order() {
    let observations = load_observations(DATA.as_bytes()).unwrap();
    let mut table = ObservationTable::default();

    assert_eq!(table.render_observations(&observations), 2);

    let ids: Vec<_> = table.rows().filter_map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["67868131", "67868200"]);
}

#[test]
fn test_records_missing_fields_do_not_block_the_batch() {
    let json = r#"[
        {"id": 1, "name": "Muskrat"},
        {"name": "Nameless", "date": "2020-09-19"},
        {"id": 2, "date": "2020-09-19", "name": "Coyote", "photoUrl": "/photos/2.jpg"}
    ]"#;
    let observations = load_observations(json.as_bytes()).unwrap();
    let mut table = ObservationTable::default();

    assert_eq!(table.render_observations(&observations), 2);

    let undated = table.row(&ObservationId::Int(1)).unwrap();
    assert_eq!(undated.child_elements().count(), 7);
    assert!(undated.child_elements().nth(1).unwrap().children.is_empty());

    let html = table.to_html();
    assert!(html.contains(r#"<img src="/photos/2.jpg" alt="Coyote">"#));
    assert!(!html.contains("Nameless"));
}

#[test]
fn test_render_replaces_previous_rows() {
    let mut table = table_with_data();
    let date = NaiveDate::from_ymd_opt(2022, 2, 2).unwrap();
    let again = vec![sightings_lib::Observation::new(7u64, "Heron", date)];

    assert_eq!(table.render_observations(&again), 1);
    assert_eq!(table.row_count(), 1);
    assert!(table.row(&ObservationId::Int(7)).is_some());
}

#[test]
fn test_lookup_and_remove_row() {
    let mut table = table_with_data();
    let id = ObservationId::Int(67868131);

    assert_eq!(table.row(&id).unwrap().child_elements().count(), 7);

    let removed = table.remove_row(&id).unwrap();
    assert_eq!(removed.id.as_deref(), Some("67868131"));
    assert!(table.row(&id).is_none());
    assert_eq!(table.row_count(), 1);
    assert!(table.remove_row(&id).is_none());
}

#[test]
fn test_clear_all_table_rows() {
    let mut table = table_with_data();
    assert_eq!(table.clear_all_table_rows(), 2);
    assert_eq!(table.row_count(), 0);
    assert!(table.to_html().contains(r#"<tbody id="rows"></tbody>"#));
}

#[test]
fn test_update_table_title() {
    let mut table = ObservationTable::default();
    table.update_table_title("Muskrats");
    table.update_table_title("Coyotes");

    let title = table.find("table-title").unwrap();
    assert_eq!(title.text_content(), "Coyotes");
    assert_eq!(title.child_elements().count(), 1);
    assert!(table.find("table-Coyotes").is_some());
    assert!(table.find("table-Muskrats").is_none());
}

#[test]
fn test_table_html_structure() {
    let mut table = ObservationTable::new(
        RenderConfig::default()
            .with_locale(DateLocale::EnGb)
            .with_table_id("sightings")
            .with_headers(["A", "B"]),
    );
    table.update_table_title("Mine");

    let expected = concat!(
        "<table id=\"sightings\">\n",
        "  <caption id=\"table-title\"><span id=\"table-Mine\">Mine</span></caption>\n",
        "  <thead>\n",
        "    <tr>\n",
        "      <th>A</th>\n",
        "      <th>B</th>\n",
        "    </tr>\n",
        "  </thead>\n",
        "  <tbody id=\"rows\"></tbody>\n",
        "</table>",
    );
    assert_eq!(table.to_html_pretty(2), expected);
}

#[test]
fn test_table_uses_configured_locale() {
    let observations = load_observations(DATA.as_bytes()).unwrap();
    let mut table = ObservationTable::new(RenderConfig::default().with_locale(DateLocale::De));
    table.render_observations(&observations);

    let html = table.to_html();
    assert!(html.contains(r#"<time datetime="2020-09-18">18.9.2020</time>"#));
    assert!(html.contains(r#"<time datetime="2020-10-02">2.10.2020</time>"#));
}

#[test]
fn test_from_path_renders_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATA.as_bytes()).unwrap();

    let table = ObservationTable::from_path(file.path(), RenderConfig::default()).unwrap();
    assert_eq!(table.row_count(), 2);
    assert!(table.row(&ObservationId::Int(67868200)).is_some());
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ObservationTable::from_path(dir.path().join("none.json"), RenderConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::Io { .. })));
}
