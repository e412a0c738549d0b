// tests/db_integration.rs

//! `get_last_sequence_id` against real SQLite files.

mod common;

use common::{config_for, config_from, env_for, seed_control_table};
use sequence_reporter::{
    config::ConfigError,
    db::{DbError, SequenceSource, SqliteSequenceSource},
    report::get_last_sequence_id,
};

#[test]
fn returns_the_maximum_sequence_value() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("control.db");
    seed_control_table(&db, &[3, 7, 2]);

    let cfg = config_for(&db, "localhost", 25);
    let source = SqliteSequenceSource::new(&cfg.database);

    assert_eq!(get_last_sequence_id(&source).unwrap(), Some(7));
}

#[test]
fn empty_table_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("control.db");
    seed_control_table(&db, &[]);

    let cfg = config_for(&db, "localhost", 25);
    let source = SqliteSequenceSource::new(&cfg.database);

    assert_eq!(source.last_sequence_id().unwrap(), None);
}

#[test]
fn each_call_sees_fresh_data() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("control.db");
    seed_control_table(&db, &[1]);

    let cfg = config_for(&db, "localhost", 25);
    let source = SqliteSequenceSource::new(&cfg.database);
    assert_eq!(source.last_sequence_id().unwrap(), Some(1));

    let conn = rusqlite::Connection::open(&db).unwrap();
    conn.execute("INSERT INTO CONTROLE_CARGA (ID_SEQUENCIA) VALUES (99)", [])
        .unwrap();
    drop(conn);

    assert_eq!(source.last_sequence_id().unwrap(), Some(99));
}

#[test]
fn missing_database_file_is_an_error_and_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("absent.db");

    let cfg = config_for(&db, "localhost", 25);
    let err = SqliteSequenceSource::new(&cfg.database)
        .last_sequence_id()
        .unwrap_err();

    assert!(matches!(err, DbError::Sql(_)));
    assert!(!db.exists(), "read-only open must not create the file");
}

#[test]
fn missing_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("control.db");
    rusqlite::Connection::open(&db)
        .unwrap()
        .execute_batch("CREATE TABLE outra (x INTEGER);")
        .unwrap();

    let cfg = config_for(&db, "localhost", 25);
    let err = SqliteSequenceSource::new(&cfg.database)
        .last_sequence_id()
        .unwrap_err();
    assert!(err.to_string().contains("no such table"), "{err}");
}

#[test]
fn database_credentials_are_refused_instead_of_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("control.db");
    seed_control_table(&db, &[3, 7, 2]);

    let mut vars = env_for(&db, "localhost", 25);
    vars.insert("DB_USER", "nobody".into());
    vars.insert("DB_PASS", "definitely-wrong".into());

    let err = config_from(&vars).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedCredentials(_)), "{err}");
}
