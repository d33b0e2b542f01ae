use pretty_assertions::assert_eq;
use tests::{sqlite, text_rows, LoggingConnection};
use triplifier::{Sheet, TableImporter};
use triplifier_core::{driver::Operation, Catalog, Connection};

#[test]
fn imports_every_table() {
    let mut db = sqlite();

    let tables = TableImporter::new()
        .table_name("occurrence")
        .import(
            &mut *db,
            &mut Sheet::new()
                .table(
                    "Occurrences",
                    ["occurrence ID", "basisOfRecord"],
                    [["a", "PreservedSpecimen"], ["b", "FossilSpecimen"]],
                )
                .table("Taxa list", ["scientificName"], [["Puma concolor"]])
                .table("", ["x"], [["1"]]),
        )
        .unwrap();

    assert_eq!(tables, ["occurrence", "Taxa_list", "table3"]);

    let catalog = Catalog::inspect(&mut *db).unwrap();
    assert_eq!(
        catalog
            .table("occurrence")
            .unwrap()
            .columns
            .iter()
            .collect::<Vec<_>>(),
        ["occurrence_ID", "basisOfRecord"]
    );

    assert_eq!(
        text_rows(&mut *db, "SELECT * FROM occurrence ORDER BY occurrence_ID"),
        [["a", "PreservedSpecimen"], ["b", "FossilSpecimen"]]
    );
    assert_eq!(
        text_rows(&mut *db, "SELECT scientificName FROM Taxa_list"),
        [["Puma concolor"]]
    );
}

#[test]
fn ragged_rows_are_fitted_to_the_header() {
    let mut db = sqlite();

    TableImporter::new()
        .import(
            &mut *db,
            &mut Sheet::new().table(
                "occurrence",
                ["occurrenceID", "sex", "lifeStage"],
                vec![
                    vec!["a"],
                    vec!["b", "female", "adult", "ignored"],
                    vec!["c", "male"],
                ],
            ),
        )
        .unwrap();

    assert_eq!(
        text_rows(&mut *db, "SELECT * FROM occurrence ORDER BY occurrenceID"),
        [
            ["a", "", ""],
            ["b", "female", "adult"],
            ["c", "male", ""],
        ]
    );
}

#[test]
fn reimport_replaces_table() {
    let mut db = sqlite();

    let import = |db: &mut dyn Connection, rows: Vec<Vec<&str>>| {
        TableImporter::new()
            .import(db, &mut Sheet::new().table("occurrence", ["occurrenceID"], rows))
            .unwrap()
    };

    import(&mut *db, vec![vec!["a"], vec!["b"]]);
    import(&mut *db, vec![vec!["c"]]);

    assert_eq!(text_rows(&mut *db, "SELECT * FROM occurrence"), [["c"]]);
}

#[test]
fn large_tables_are_inserted_in_batches() {
    let db = LoggingConnection::new(sqlite());
    let log = db.exec_log();
    let mut db: Box<dyn Connection> = Box::new(db);

    let rows: Vec<Vec<String>> = (0..1000)
        .map(|i| vec![format!("occ{i}"), "PreservedSpecimen".into(), i.to_string()])
        .collect();

    TableImporter::new()
        .import(
            &mut *db,
            &mut Sheet::new().table(
                "occurrence",
                ["occurrenceID", "basisOfRecord", "catalogNumber"],
                rows,
            ),
        )
        .unwrap();

    // 999 parameters fit 333 rows of three columns
    let inserts = log.count(|op| {
        matches!(op, Operation::Execute(sql) if sql.sql.starts_with("INSERT INTO \"occurrence\""))
    });
    assert_eq!(inserts, 4);

    assert_eq!(
        text_rows(&mut *db, "SELECT count(*), max(catalogNumber + 0) FROM occurrence"),
        [["1000", "999"]]
    );
}
