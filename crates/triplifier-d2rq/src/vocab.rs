//! D2RQ vocabulary constants
//!
//! Directives are stored as CURIEs in the `d2rq:` namespace, which is how they
//! appear in a generated mapping document. See
//! <http://d2rq.org/d2rq-language> for the language reference.

/// D2RQ vocabulary namespace and constants
pub struct D2RQ;

impl D2RQ {
    // ==========================================================================
    // Namespace
    // ==========================================================================

    /// D2RQ namespace IRI
    pub const NS: &'static str = "http://www.wiwiss.fu-berlin.de/suhl/bizer/D2RQ/0.1#";

    // ==========================================================================
    // Classes
    // ==========================================================================

    /// d2rq:Database - A JDBC connection to the source database
    pub const DATABASE: &'static str = "d2rq:Database";

    /// d2rq:ClassMap - Maps rows of a table to resources of a class
    pub const CLASS_MAP: &'static str = "d2rq:ClassMap";

    /// d2rq:PropertyBridge - Maps a column or join to one property
    pub const PROPERTY_BRIDGE: &'static str = "d2rq:PropertyBridge";

    // ==========================================================================
    // Database properties
    // ==========================================================================

    pub const JDBC_DRIVER: &'static str = "d2rq:jdbcDriver";

    pub const JDBC_DSN: &'static str = "d2rq:jdbcDSN";

    pub const USERNAME: &'static str = "d2rq:username";

    pub const PASSWORD: &'static str = "d2rq:password";

    /// d2rq:fetchSize - Rows retrieved per round trip
    pub const FETCH_SIZE: &'static str = "d2rq:fetchSize";

    // ==========================================================================
    // ClassMap properties
    // ==========================================================================

    /// d2rq:dataStorage - The database a class map reads from
    pub const DATA_STORAGE: &'static str = "d2rq:dataStorage";

    /// d2rq:class - The RDF class of generated resources
    pub const CLASS: &'static str = "d2rq:class";

    /// d2rq:constantValue - A single fixed resource instead of one per row
    pub const CONSTANT_VALUE: &'static str = "d2rq:constantValue";

    // ==========================================================================
    // Shared term map properties
    // ==========================================================================

    /// d2rq:uriColumn - A column holding complete URIs
    pub const URI_COLUMN: &'static str = "d2rq:uriColumn";

    /// d2rq:uriPattern - A template with `@@table.column@@` placeholders
    pub const URI_PATTERN: &'static str = "d2rq:uriPattern";

    /// d2rq:condition - A SQL `WHERE` fragment filtering rows
    pub const CONDITION: &'static str = "d2rq:condition";

    // ==========================================================================
    // PropertyBridge properties
    // ==========================================================================

    pub const BELONGS_TO_CLASS_MAP: &'static str = "d2rq:belongsToClassMap";

    pub const PROPERTY: &'static str = "d2rq:property";

    /// d2rq:column - A column holding literal values
    pub const COLUMN: &'static str = "d2rq:column";

    pub const REFERS_TO_CLASS_MAP: &'static str = "d2rq:refersToClassMap";

    /// d2rq:join - `foreignTable.column => primaryTable.column`
    pub const JOIN: &'static str = "d2rq:join";
}

/// Prefix under which generated blocks are named
pub const MAP: &str = "map";

/// Name of the generated database block
pub const DATABASE_BLOCK: &str = "database";

/// Name of the generated dataset class map
pub const DATASET_BLOCK: &str = "DataSet";

/// Prefixes declared at the top of every generated document, in order.
pub const PREFIXES: &[(&str, &str)] = &[
    (MAP, ""),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("d2rq", D2RQ::NS),
    ("jdbc", "http://d2rq.org/terms/jdbc/"),
    ("ro", "http://www.obofoundry.org/ro/ro.owl#"),
    ("bsc", "http://biscicol.org/terms/index.html#"),
    ("dwc", "http://rs.tdwg.org/dwc/terms/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("geo", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
];
