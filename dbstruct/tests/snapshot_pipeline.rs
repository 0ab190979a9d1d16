//! End-to-end generation from a schema snapshot

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use dbstruct::catalog::SnapshotCatalog;
use dbstruct::generate::run_with;
use dbstruct::{Dialect, Error, Filter, Options};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shop.json")
}

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

fn options(model_dir: &Path) -> Options {
    let mut options = Options::new(Dialect::MySql);
    options.gen_gorm_tag = true;
    options.gen_json_tag = true;
    options.model_dir = Some(model_dir.to_path_buf());
    options.filters = vec![Filter::new("t_", "t_.*").unwrap().unwrap()];
    options.exclude = vec!["logs".to_string()];
    options
}

#[tokio::test]
async fn test_per_table_generation() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model");
    let catalog = SnapshotCatalog::new(fixture(), Dialect::MySql);

    let summary = run_with(&options(&model_dir), &catalog, timestamp())
        .await
        .unwrap();
    assert_eq!(summary.tables, 2);

    let mut names: Vec<_> = fs::read_dir(&model_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["order.go", "order_item.go"]);

    let order = fs::read_to_string(model_dir.join("order.go")).unwrap();
    let expected = "\
// code generated by dbstruct @2024-06-01 12:30:00

package model

import \"time\"

// Order table: t_order
// customer orders
type Order struct {
\tId        uint64    `gorm:\"column:id;type:bigint(20) unsigned;not null;primary_key\" json:\"id\"`
\tUserId    int32     `gorm:\"column:user_id;type:int(11);not null\" json:\"userId\"`             // buyer
\tStatus    int8      `gorm:\"column:status;type:tinyint(4);default:0;not null\" json:\"status\"` // order status
\tNote      *string   `gorm:\"column:note;type:varchar(255)\" json:\"note\"`
\tCreatedAt time.Time `gorm:\"column:created_at;type:datetime;default:CURRENT_TIMESTAMP;not null\" json:\"createdAt\"`
}

// TableName set table of t_order, ref document see https://gorm.io/docs/conventions.html
func (Order) TableName() string {
\treturn \"t_order\"
}
";
    assert_eq!(order, expected);

    let item = fs::read_to_string(model_dir.join("order_item.go")).unwrap();
    assert!(!item.contains("import"));
    assert!(item.contains("type OrderItem struct {"));
    assert!(item.contains("\tPrice   float64"));
    assert!(item.contains("\tPayload *[]byte"));
}

#[tokio::test]
async fn test_single_file_generation_is_deterministic() {
    let catalog = SnapshotCatalog::new(fixture(), Dialect::MySql);
    let mut contents = Vec::new();

    for _ in 0..2 {
        let temp_dir = TempDir::new().unwrap();
        let model_dir = temp_dir.path().join("model");
        let mut options = options(&model_dir);
        options.single_file = true;

        run_with(&options, &catalog, timestamp()).await.unwrap();
        contents.push(fs::read_to_string(model_dir.join("model.go")).unwrap());
    }

    assert_eq!(contents[0], contents[1]);
    assert_eq!(contents[0].matches("package model").count(), 1);
    assert_eq!(contents[0].matches("import \"time\"").count(), 1);
    assert!(contents[0].contains("}\n\n// OrderItem table: t_order_item\n"));
}

#[tokio::test]
async fn test_unfiltered_tables_have_no_accessor() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model");
    let mut options = options(&model_dir);
    options.filters.clear();

    let catalog = SnapshotCatalog::new(fixture(), Dialect::MySql);
    let summary = run_with(&options, &catalog, timestamp()).await.unwrap();
    assert_eq!(summary.tables, 3);

    let user = fs::read_to_string(model_dir.join("user.go")).unwrap();
    assert!(!user.contains("TableName"));
    assert!(user.contains("`gorm:\"column:name;type:varchar(64);not null\" json:\"name\"`"));

    let order = fs::read_to_string(model_dir.join("t_order.go")).unwrap();
    assert!(order.contains("type TOrder struct {"));
    assert!(!order.contains("TableName"));
}

#[tokio::test]
async fn test_unmapped_type_aborts_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let model_dir = temp_dir.path().join("model");
    let mut options = options(&model_dir);
    options.exclude.clear();
    options.filters.clear();

    let catalog = SnapshotCatalog::new(fixture(), Dialect::MySql);
    let err = run_with(&options, &catalog, timestamp()).await.unwrap_err();

    match err {
        Error::TypeMapping { table, column, .. } => {
            assert_eq!(table, "logs");
            assert_eq!(column, "shape");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!model_dir.exists());
}

#[tokio::test]
async fn test_missing_snapshot_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = SnapshotCatalog::new(temp_dir.path().join("missing.json"), Dialect::MySql);
    let options = Options::new(Dialect::MySql);

    let err = run_with(&options, &catalog, timestamp()).await.unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
