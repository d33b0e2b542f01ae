use pretty_assertions::assert_eq;
use tests::{init_tracing, sqlite_with};
use triplifier::{
    Config, ConnectionConfig, Document, EntityRule, NormalizeConfig, ProviderRules,
    RelationRule, Sheet, Triplifier,
};
use triplifier_core::{
    model::{ColumnRef, ConnectionInfo, DatasetBinding, DbSystem, Join},
    Connection,
};

fn flat_occurrences() -> Box<dyn Connection> {
    flat_table("occurrence")
}

fn flat_table(name: &str) -> Box<dyn Connection> {
    sqlite_with(
        name,
        Sheet::new().table(
            "",
            [
                "occurrenceID",
                "basisOfRecord",
                "eventDate",
                "habitat",
                "scientificName",
                "kingdom",
                "identifiedBy",
            ],
            [
                ["MVZ:1", "PreservedSpecimen", "2010-05-01", "forest", "Puma concolor", "Animalia", "Smith"],
                ["MVZ:2", "PreservedSpecimen", "2010-05-01", "forest", "Puma concolor", "Animalia", ""],
                ["MVZ:3", "HumanObservation", "2011-06-02", "", "Quercus alba", "Plantae", "Jones"],
            ],
        ),
    )
}

fn memory() -> ConnectionInfo {
    ConnectionInfo::new(DbSystem::Sqlite, "", ":memory:")
}

fn config() -> Config {
    Config::new()
        .url("sqlite::memory:")
        .dataset(DatasetBinding::new("ark:/21547/R2"))
}

fn block_names(document: &Document) -> Vec<&str> {
    document.blocks.iter().map(|block| block.name()).collect()
}

#[test]
fn darwin_core_end_to_end() {
    let session = Triplifier::with_connection(&config(), memory(), flat_occurrences()).unwrap();

    assert_eq!(session.report().tables, ["event", "taxon"]);
    assert_eq!(session.report().fixed, ["eventID", "identificationID", "taxonID"]);

    let mapping = session.mapping();
    let entities: Vec<_> = mapping.entities().map(|e| e.column()).collect();
    assert_eq!(
        entities,
        [
            "occurrence.occurrenceID",
            "event.id",
            "taxon.id",
            "occurrence.identificationID"
        ]
    );

    let joins: Vec<_> = mapping.joins().map(ToString::to_string).collect();
    assert_eq!(
        joins,
        ["occurrence.eventID => event.id", "occurrence.taxonID => taxon.id"]
    );

    let document = session.compile();

    let names: Vec<_> = document.class_maps().map(|class_map| class_map.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "occurrence_occurrenceID",
            "event_id",
            "taxon_id",
            "occurrence_identificationID",
            "DataSet"
        ]
    );

    // Relations touching the location and geological context concepts,
    // which this data does not have
    let skipped: Vec<_> = document.skipped.iter().map(ToString::to_string).collect();
    assert_eq!(
        skipped,
        [
            "occurrence.occurrenceID ro:depends_on location.id: object is not a mapped entity",
            "occurrence.occurrenceID ro:depends_on geologicalContext.id: object is not a mapped entity",
            "event.id ro:related_to location.id: object is not a mapped entity",
            "event.id ro:related_to geologicalContext.id: object is not a mapped entity",
        ]
    );

    let relations: Vec<_> = block_names(&document)
        .into_iter()
        .filter(|name| name.ends_with("_rel"))
        .collect();
    assert_eq!(
        relations,
        [
            "occurrence_occurrenceID_event_id_rel",
            "occurrence_occurrenceID_taxon_id_rel",
            "occurrence_identificationID_occurrence_occurrenceID_rel",
            "occurrence_identificationID_taxon_id_rel",
        ]
    );

    assert!(block_names(&document).contains(&"DataSet_occurrence_occurrenceID"));
    assert!(!block_names(&document).contains(&"occurrence_occurrenceID_eventDate"));
    assert!(block_names(&document).contains(&"event_id_eventDate"));
    assert!(block_names(&document).contains(&"occurrence_identificationID_identifiedBy"));

    let text = document.to_string();
    assert!(text.contains(
        "map:occurrence_occurrenceID_event_id_rel a d2rq:PropertyBridge;\n\
         \td2rq:belongsToClassMap map:occurrence_occurrenceID;\n\
         \td2rq:property ro:depends_on;\n\
         \td2rq:refersToClassMap map:event_id;\n\
         \td2rq:join \"occurrence.eventID => event.id\";\n\
         \t.\n"
    ));
    assert!(text.contains("\td2rq:uriPattern \"urn:x-biscicol:occurrence:@@occurrence.occurrenceID@@\";\n"));
    assert!(text.contains("\td2rq:constantValue <ark:/21547/R2>;\n"));
}

#[test]
fn builtin_rules_rename_the_flat_table() {
    let session = Triplifier::with_connection(&config(), memory(), flat_table("specimens")).unwrap();

    assert!(session.report().renamed);
    assert_eq!(session.report().root_table.as_deref(), Some("occurrence"));

    let entities: Vec<_> = session.mapping().entities().map(|e| e.column()).collect();
    assert_eq!(entities[0], "occurrence.occurrenceID");

    // An explicit name wins, leaving the occurrence rules nothing to match
    let config = config().normalize(NormalizeConfig::new().root_table("specimens"));
    let session = Triplifier::with_connection(&config, memory(), flat_table("specimens")).unwrap();

    assert!(!session.report().renamed);
    assert!(session
        .mapping()
        .find_entity(&ColumnRef::new("occurrence", "occurrenceID"))
        .is_none());
    assert!(session
        .mapping()
        .find_entity(&ColumnRef::new("event", "id"))
        .is_some());
}

#[test]
fn configured_dataset_wins_over_rules() {
    let rules = ProviderRules::new()
        .entity(EntityRule::new("occurrence", "occurrence", "occurrenceID", "dwc:Occurrence"))
        .dataset(DatasetBinding::new("urn:x:from-rules"));

    let config = config().rules(rules.clone());
    let session = Triplifier::with_connection(&config, memory(), flat_occurrences()).unwrap();
    assert_eq!(session.mapping().dataset.as_ref().unwrap().uri, "ark:/21547/R2");

    let config = Config::new().url("sqlite::memory:").rules(rules);
    let session = Triplifier::with_connection(&config, memory(), flat_occurrences()).unwrap();
    assert_eq!(session.mapping().dataset.as_ref().unwrap().uri, "urn:x:from-rules");
}

#[test]
fn inline_rules_without_normalization() {
    init_tracing();

    let config: Config = r#"
rules = "darwin-core"

[connection]
url = "sqlite::memory:"
username = "reader"
password = "secret"

[normalize]
enabled = false
"#
    .parse()
    .unwrap();
    let config = config.rules(
        ProviderRules::new()
            .entity(
                EntityRule::new("occurrence", "occurrence", "occurrenceID", "dwc:Occurrence")
                    .attribute("scientificName", "dwc:scientificName")
                    .attribute("eventDate", "dwc:eventDate")
                    .attribute("fieldNotes", "dwc:fieldNotes"),
            )
            .entity(
                EntityRule::new("identification", "occurrence", "identifiedBy", "dwc:Identification")
                    .id_prefix("urn:x-biscicol:identification:"),
            )
            .join(Join::new("occurrence", "taxonID", "taxon", "id"))
            .relation(RelationRule::new("identification", "ro:depends_on", "occurrence")),
    );

    let info = config.connection.connection_info(&triplifier::Sqlite::in_memory());
    let session = Triplifier::with_connection(&config, info, flat_occurrences()).unwrap();

    assert!(session.report().is_noop());
    assert_eq!(session.report().root_table, None);

    // The flat table is untouched and `fieldNotes` is not one of its columns
    let occurrence = session
        .mapping()
        .find_entity(&ColumnRef::new("occurrence", "occurrenceID"));
    let attributes: Vec<_> = occurrence
        .unwrap()
        .attributes
        .iter()
        .map(|a| a.column.as_str())
        .collect();
    assert_eq!(attributes, ["scientificName", "eventDate"]);
    assert_eq!(session.mapping().joins().len(), 0);

    let document = session.compile();
    assert!(document.skipped.is_empty());
    assert_eq!(document.database.username.as_deref(), Some("reader"));
    assert_eq!(document.database.password.as_deref(), Some("secret"));

    let text = document.to_string();
    assert!(text.contains("\td2rq:username \"reader\";\n"));
    assert!(text.contains("\td2rq:condition \"occurrence.identifiedBy <> ''\";\n"));
}

#[test]
fn open_empty_database() {
    let mut session = Triplifier::open(&config()).unwrap();

    assert_eq!(session.report().root_table, None);
    assert_eq!(session.mapping().entities().len(), 0);
    assert!(session.mapping().schema.is_empty());
    assert!(session.connection().list_tables().unwrap().is_empty());

    let document = session.compile();
    assert!(document.blocks.is_empty());
    assert_eq!(document.database.jdbc_dsn, "jdbc:sqlite::memory:");

    // Every relation of the built-in rules names a dropped entity
    assert_eq!(document.skipped.len(), 8);
}

#[test]
fn open_rejects_unknown_drivers() {
    let err = Triplifier::open(&Config::new().url("oracle://localhost/vertnet")).unwrap_err();
    assert!(err.is_unsupported_feature());

    let err = Triplifier::open(&Config::new().connection(ConnectionConfig::default())).unwrap_err();
    assert!(err.is_invalid_config());

    let err = Triplifier::open(
        &Config::new()
            .url("sqlite::memory:")
            .rules("vertnet")
            .normalize(NormalizeConfig::disabled()),
    )
    .unwrap_err();
    assert!(err.is_invalid_config());
}
