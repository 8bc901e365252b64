use graph2csv::literal::{parse_records, Value};
use graph2csv::table::{column_order, write_csv};
use graph2csv::types::PRIORITY_COLUMNS;

fn priority() -> Vec<String> {
    PRIORITY_COLUMNS.iter().map(|c| c.to_string()).collect()
}

#[test]
fn priority_names_keep_declared_order() {
    let records = parse_records(r#"[{"id": 1, "group": 2}, {"id": 2, "label": "x"}]"#).unwrap();
    let columns = column_order(&records, &priority());
    assert_eq!(columns, vec!["id", "label", "group"]);
}

#[test]
fn remaining_columns_are_alphabetical() {
    let records = parse_records(r#"[{"id": 1, "zeta": 1, "alpha": 2}]"#).unwrap();
    let columns = column_order(&records, &priority());
    assert_eq!(columns, vec!["id", "alpha", "zeta"]);
}

#[test]
fn all_priority_names_present() {
    let records = parse_records(
        r#"[{"type": "t", "amount": 1, "group": 2, "label": "l", "target": 3, "source": 4, "id": 5, "extra": 6}]"#,
    )
    .unwrap();
    let columns = column_order(&records, &priority());
    assert_eq!(
        columns,
        vec!["id", "source", "target", "label", "group", "amount", "type", "extra"]
    );
}

#[test]
fn heterogeneous_records_render_empty_cells() {
    let records = parse_records(r#"[{"id": 1, "x": "a"}, {"id": 2, "y": "b"}]"#).unwrap();
    let columns = column_order(&records, &priority());
    assert_eq!(columns, vec!["id", "x", "y"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let rows = write_csv(&path, &records, &columns).unwrap();
    assert_eq!(rows, 2);
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "id,x,y\n1,a,\n2,,b\n");
}

#[test]
fn fields_with_commas_and_quotes_are_escaped() {
    let records = parse_records(r#"[{"id": 1, "label": "a,b", "note": "say \"hi\""}]"#).unwrap();
    let columns = column_order(&records, &priority());
    assert_eq!(columns, vec!["id", "label", "note"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(&path, &records, &columns).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "id,label,note\n1,\"a,b\",\"say \"\"hi\"\"\"\n");
}

#[test]
fn scalar_and_nested_cell_rendering() {
    let records = parse_records(
        r#"[{"id": 1, "ok": true, "gone": null, "ratio": 1.5, "tags": [1, 2]}]"#,
    )
    .unwrap();
    let columns = column_order(&records, &priority());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(&path, &records, &columns).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "id,gone,ok,ratio,tags\n1,,true,1.5,\"[1,2]\"\n");
}

#[test]
fn duplicate_key_renders_last_value() {
    let records = vec![vec![
        ("id".to_string(), Value::NumberI64(1)),
        ("a".to_string(), Value::NumberI64(1)),
        ("a".to_string(), Value::NumberI64(2)),
    ]];
    let columns = column_order(&records, &priority());
    assert_eq!(columns, vec!["id", "a"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(&path, &records, &columns).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "id,a\n1,2\n");
}
