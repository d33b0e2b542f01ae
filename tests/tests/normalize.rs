use pretty_assertions::assert_eq;
use tests::{sqlite, sqlite_with, text_rows, LoggingConnection};
use triplifier::{Normalizer, Report, Sheet, TableImporter};
use triplifier_core::{
    driver::{Operation, Transaction},
    Catalog,
};

fn events() -> Sheet {
    Sheet::new().table(
        "",
        ["occurrenceID", "eventDate", "habitat", "basisOfRecord"],
        [
            ["urn:occ:1", "2010-05-01", "forest", "PreservedSpecimen"],
            ["urn:occ:2", "2010-05-01", "forest", "PreservedSpecimen"],
            ["urn:occ:3", "2011-06-02", "", "HumanObservation"],
            ["urn:occ:4", "", "", "HumanObservation"],
        ],
    )
}

#[test]
fn shared_concept_is_split_and_deduplicated() {
    let mut db = sqlite_with("occurrence", events());

    let report = Normalizer::darwin_core().run(&mut *db).unwrap();

    assert_eq!(
        report,
        Report {
            root_table: Some("occurrence".into()),
            fixed: vec!["eventID".into()],
            tables: vec!["event".into()],
            relocated: vec!["eventDate".into(), "habitat".into()],
            surrogate_key: false,
            renamed: false,
        }
    );

    let catalog = Catalog::inspect(&mut *db).unwrap();
    let tables: Vec<_> = catalog.tables().map(|t| t.name.as_str()).collect();
    assert_eq!(tables, ["event", "occurrence"]);

    let occurrence = catalog.table("occurrence").unwrap();
    assert_eq!(
        occurrence.columns.iter().collect::<Vec<_>>(),
        ["occurrenceID", "basisOfRecord", "eventID"]
    );

    let event = catalog.table("event").unwrap();
    assert_eq!(
        event.columns.iter().collect::<Vec<_>>(),
        ["id", "eventDate", "habitat"]
    );
    assert!(event.is_primary_key("id"));

    // Identical events collapse into one instance; the all-blank one is dropped
    assert_eq!(
        text_rows(&mut *db, "SELECT count(*) FROM event"),
        [["2"]]
    );

    assert_eq!(
        text_rows(
            &mut *db,
            "SELECT o.occurrenceID, e.eventDate, e.habitat \
             FROM occurrence o LEFT JOIN event e ON o.eventID = e.id \
             ORDER BY o.occurrenceID"
        ),
        [
            ["urn:occ:1", "2010-05-01", "forest"],
            ["urn:occ:2", "2010-05-01", "forest"],
            ["urn:occ:3", "2011-06-02", ""],
            ["urn:occ:4", "NULL", "NULL"],
        ]
    );

    let shared = text_rows(
        &mut *db,
        "SELECT DISTINCT eventID FROM occurrence WHERE occurrenceID IN ('urn:occ:1', 'urn:occ:2')",
    );
    assert_eq!(shared.len(), 1);
}

#[test]
fn rerunning_changes_nothing() {
    let mut db = sqlite_with("occurrence", events());

    Normalizer::darwin_core().run(&mut *db).unwrap();
    let before = Catalog::inspect(&mut *db).unwrap();

    let report = Normalizer::darwin_core().run(&mut *db).unwrap();
    assert!(report.is_noop());
    assert_eq!(Catalog::inspect(&mut *db).unwrap(), before);
}

#[test]
fn populated_identifiers_are_left_alone() {
    let mut db = sqlite_with(
        "occurrence",
        Sheet::new().table(
            "",
            ["occurrenceID", "eventID", "eventDate"],
            [["urn:occ:1", "ev1", "2010-05-01"], ["urn:occ:2", "", "2011-06-02"]],
        ),
    );
    let before = Catalog::inspect(&mut *db).unwrap();

    let report = Normalizer::darwin_core().run(&mut *db).unwrap();

    assert!(report.is_noop());
    assert_eq!(report.root_table.as_deref(), Some("occurrence"));
    assert_eq!(Catalog::inspect(&mut *db).unwrap(), before);
}

#[test]
fn identifications_are_numbered_per_row() {
    let mut db = sqlite_with(
        "occurrence",
        Sheet::new().table(
            "",
            ["occurrenceID", "identifiedBy", "dateIdentified"],
            [
                ["a", "Smith", "2001"],
                ["b", "", ""],
                ["c", "Jones", ""],
                ["d", "Smith", "2001"],
            ],
        ),
    );

    let report = Normalizer::darwin_core().run(&mut *db).unwrap();

    assert_eq!(report.fixed, ["identificationID"]);
    assert!(report.tables.is_empty());
    assert!(report.relocated.is_empty());

    // Identical identifications are not shared between occurrences
    assert_eq!(
        text_rows(
            &mut *db,
            "SELECT occurrenceID, identifiedBy, identificationID FROM occurrence ORDER BY occurrenceID"
        ),
        [
            ["a", "Smith", "1"],
            ["b", "", "NULL"],
            ["c", "Jones", "3"],
            ["d", "Smith", "4"],
        ]
    );
}

#[test]
fn missing_root_identifier_gets_surrogate_key() {
    let mut db = sqlite_with(
        "specimens",
        Sheet::new().table(
            "",
            ["catalogNumber", "scientificName", "kingdom"],
            [
                ["A1", "Puma concolor", "Animalia"],
                ["A2", "Puma concolor", "Animalia"],
                ["A3", "Quercus alba", "Plantae"],
            ],
        ),
    );

    let report = Normalizer::darwin_core()
        .root_table("occurrence")
        .run(&mut *db)
        .unwrap();

    assert!(report.surrogate_key);
    assert!(report.renamed);
    assert_eq!(report.root_table.as_deref(), Some("occurrence"));
    assert_eq!(report.tables, ["taxon"]);

    let catalog = Catalog::inspect(&mut *db).unwrap();
    assert!(catalog.table("specimens").is_none());

    let occurrence = catalog.table("occurrence").unwrap();
    assert_eq!(
        occurrence.columns.iter().collect::<Vec<_>>(),
        ["occurrenceID", "catalogNumber", "taxonID"]
    );
    assert!(occurrence.is_primary_key("occurrenceID"));

    assert_eq!(
        text_rows(
            &mut *db,
            "SELECT o.catalogNumber, t.scientificName, t.kingdom \
             FROM occurrence o JOIN taxon t ON o.taxonID = t.id \
             ORDER BY o.catalogNumber"
        ),
        [
            ["A1", "Puma concolor", "Animalia"],
            ["A2", "Puma concolor", "Animalia"],
            ["A3", "Quercus alba", "Plantae"],
        ]
    );
    assert_eq!(text_rows(&mut *db, "SELECT count(*) FROM taxon"), [["2"]]);

    let ids = text_rows(&mut *db, "SELECT occurrenceID FROM occurrence ORDER BY occurrenceID");
    assert_eq!(ids, [["1"], ["2"], ["3"]]);
}

#[test]
fn several_tables_are_not_normalized() {
    let mut db = sqlite();
    TableImporter::new()
        .import(
            &mut *db,
            &mut Sheet::new()
                .table("occurrence", ["occurrenceID", "eventDate"], [["a", "2010"]])
                .table("multimedia", ["occurrenceID", "format"], [["a", "jpg"]]),
        )
        .unwrap();
    let before = Catalog::inspect(&mut *db).unwrap();

    let report = Normalizer::darwin_core().run(&mut *db).unwrap();

    assert_eq!(report, Report::default());
    assert_eq!(Catalog::inspect(&mut *db).unwrap(), before);
}

#[test]
fn empty_database_is_not_normalized() {
    let mut db = sqlite();
    assert_eq!(Normalizer::darwin_core().run(&mut *db).unwrap(), Report::default());
}

#[test]
fn root_table_may_not_collide_with_a_concept_table() {
    let mut db = sqlite_with("occurrence", events());
    let before = Catalog::inspect(&mut *db).unwrap();

    let err = Normalizer::darwin_core()
        .root_table("event")
        .run(&mut *db)
        .unwrap_err();

    assert!(err.is_invalid_config());

    // Rejected before any concept is split
    assert_eq!(Catalog::inspect(&mut *db).unwrap(), before);
    assert_eq!(
        text_rows(&mut *db, "SELECT count(*) FROM occurrence"),
        [["4"]]
    );
}

#[test]
fn blank_identifications_are_not_refixed() {
    let mut db = sqlite_with(
        "occurrence",
        Sheet::new().table(
            "",
            ["occurrenceID", "identifiedBy"],
            [["a", ""], ["b", ""]],
        ),
    );

    let report = Normalizer::darwin_core().run(&mut *db).unwrap();
    assert_eq!(report.fixed, ["identificationID"]);

    let before = Catalog::inspect(&mut *db).unwrap();

    let report = Normalizer::darwin_core().run(&mut *db).unwrap();
    assert!(report.is_noop());
    assert_eq!(Catalog::inspect(&mut *db).unwrap(), before);
    assert_eq!(
        text_rows(&mut *db, "SELECT occurrenceID, identificationID FROM occurrence ORDER BY occurrenceID"),
        [["a", "NULL"], ["b", "NULL"]]
    );
}

#[test]
fn each_step_runs_in_its_own_transaction() {
    let db = LoggingConnection::new(sqlite_with("occurrence", events()));
    let log = db.exec_log();
    let mut db: Box<dyn triplifier_core::Connection> = Box::new(db);

    Normalizer::darwin_core().run(&mut *db).unwrap();

    let is = |tx: Transaction| move |op: &Operation| matches!(op, Operation::Transaction(t) if *t == tx);

    // One for the event concept, one for rebuilding the flat table
    assert_eq!(log.count(is(Transaction::Start)), 2);
    assert_eq!(log.count(is(Transaction::Commit)), 2);
    assert_eq!(log.count(is(Transaction::Rollback)), 0);

    let lines = log.lines();
    let position = |prefix: &str| {
        lines
            .iter()
            .position(|line| line.starts_with(prefix))
            .unwrap_or_else(|| panic!("no `{prefix}` in {lines:#?}"))
    };

    let begin = position("BEGIN");
    let create = position("CREATE TABLE \"event\"");
    let update = position("UPDATE \"occurrence\" SET \"eventID\"");
    let commit = position("COMMIT");
    assert!(begin < create && create < update && update < commit);

    let rename = position("ALTER TABLE \"occurrence_tmp\" RENAME TO \"occurrence\"");
    assert!(commit < rename);
}
