mod common;

use common::seeded_store;
use jeep_orders_core::{
    DbError, JeepModel, JeepOrderRepository, OptionType, RepoError, SqliteJeepOrderRepository,
};
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

#[test]
fn fetch_customer_maps_every_column() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    let customer = repo.fetch_customer("MORISON_LINA").unwrap().unwrap();
    assert_eq!(customer.customer_pk, 2);
    assert_eq!(customer.customer_id, "MORISON_LINA");
    assert_eq!(customer.first_name, "Lina");
    assert_eq!(customer.last_name, "Morison");
    assert_eq!(customer.phone, "555-0102");
}

#[test]
fn unknown_identifiers_are_absent_not_errors() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    assert!(repo.fetch_customer("NOBODY").unwrap().is_none());
    assert!(repo.fetch_color("EXT_PLAID").unwrap().is_none());
    assert!(repo.fetch_engine("V12").unwrap().is_none());
    assert!(repo.fetch_tire("40_SLICK").unwrap().is_none());
    assert!(repo
        .fetch_model(JeepModel::Renegade, "Sport", 4)
        .unwrap()
        .is_none());
}

#[test]
fn fetch_model_filters_on_trim_and_door_count() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    let four_door = repo
        .fetch_model(JeepModel::Wrangler, "Sport", 4)
        .unwrap()
        .unwrap();
    assert_eq!(four_door.model_pk, 2);
    assert_eq!(four_door.model_id, JeepModel::Wrangler);
    assert_eq!(four_door.trim_level, "Sport");
    assert_eq!(four_door.num_doors, 4);

    assert!(repo
        .fetch_model(JeepModel::Wrangler, "Rubicon", 4)
        .unwrap()
        .is_none());
    assert!(repo
        .fetch_model(JeepModel::GrandCherokee, "Laredo", 2)
        .unwrap()
        .is_none());
}

#[test]
fn fetch_color_engine_and_tire_map_rows() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    let color = repo.fetch_color("EXT_FIRECRACKER_RED").unwrap().unwrap();
    assert_eq!(color.color_pk, 2);
    assert_eq!(color.color_id, "EXT_FIRECRACKER_RED");

    let engine = repo.fetch_engine("2_0_TURBO").unwrap().unwrap();
    assert_eq!(engine.engine_pk, 1);
    assert_eq!(engine.engine_id, "2_0_TURBO");

    let tire = repo.fetch_tire("35_TOYO").unwrap().unwrap();
    assert_eq!(tire.tire_pk, 1);
    assert_eq!(tire.tire_size, "35 inch");
    assert_eq!(tire.manufacturer, "Toyo");
    assert_eq!(tire.warranty_miles, 60_000);
    assert_eq!(tire.price, dec!(1295.50));
}

#[test]
fn lookup_values_are_bound_not_interpolated() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    assert!(repo
        .fetch_customer("x' OR '1' = '1")
        .unwrap()
        .is_none());
}

#[test]
fn fetch_options_returns_only_existing_ids() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    let requested = vec![
        "DOOR_QUAD_4".to_string(),
        "EXT_MISSING".to_string(),
        "STOR_ROLL".to_string(),
    ];
    let options = repo.fetch_options(&requested).unwrap();

    let ids: BTreeSet<&str> = options.iter().map(|o| o.option_id.as_str()).collect();
    assert_eq!(ids, BTreeSet::from(["DOOR_QUAD_4", "STOR_ROLL"]));

    let storage = options
        .iter()
        .find(|o| o.option_id == "STOR_ROLL")
        .unwrap();
    assert_eq!(storage.category, OptionType::Storage);
    assert_eq!(storage.manufacturer, "Tuffy");
    assert_eq!(storage.name, "Roll cage storage");
    assert_eq!(storage.price, dec!(215.45));
}

#[test]
fn fetch_options_with_empty_input_returns_empty() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    assert!(repo.fetch_options(&[]).unwrap().is_empty());
}

#[test]
fn fetch_options_with_repeated_id_returns_row_once() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    let requested = vec!["TOP_SKY_ONE".to_string(), "TOP_SKY_ONE".to_string()];
    let options = repo.fetch_options(&requested).unwrap();
    assert_eq!(options.len(), 1);
}

#[test]
fn corrupt_option_category_surfaces_as_invalid_data() {
    let conn = seeded_store();
    conn.execute(
        "UPDATE options SET category = 'SEATS' WHERE option_id = 'DOOR_QUAD_4';",
        [],
    )
    .unwrap();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();

    let err = repo
        .fetch_options(&["DOOR_QUAD_4".to_string()])
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn lookups_against_a_dropped_table_return_store_errors() {
    let conn = seeded_store();
    let repo = SqliteJeepOrderRepository::try_new(&conn).unwrap();
    conn.execute_batch("DROP TABLE customers; DROP TABLE options;")
        .unwrap();

    let err = repo.fetch_customer("ATTAWAY_HALEE").unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert!(err.to_string().contains("no such table: customers"));

    let err = repo
        .fetch_options(&["DOOR_QUAD_4".to_string()])
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));

    assert!(repo.fetch_color("EXT_SARGE_GREEN").unwrap().is_some());
}
