use triplifier_core::schema::sanitize;

/// A concept recognized by its member terms, and identified by `id_column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Identifier column in the flat table, e.g. `eventID`
    pub id_column: String,

    /// Member terms, in the order their columns are created
    pub terms: Vec<String>,

    pub kind: ConceptKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptKind {
    /// Split into its own table of distinct instances
    Shared,

    /// One instance per flat-table row, numbered by the row's `rowid`.
    /// Columns stay in the flat table.
    PerRow,
}

impl Concept {
    pub fn shared<I, S>(id_column: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id_column: id_column.into(),
            terms: terms.into_iter().map(Into::into).collect(),
            kind: ConceptKind::Shared,
        }
    }

    pub fn per_row<I, S>(id_column: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: ConceptKind::PerRow,
            ..Self::shared(id_column, terms)
        }
    }

    /// Name of the table a shared concept is split into: the identifier
    /// column without its `ID` suffix.
    pub fn table_name(&self) -> String {
        let name = self
            .id_column
            .strip_suffix("ID")
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id_column);
        sanitize(name).into_owned()
    }

    /// Member terms present in `columns`, in member order.
    pub fn included_terms<'a>(&'a self, columns: &[String]) -> Vec<&'a str> {
        self.terms
            .iter()
            .filter(|term| columns.contains(term))
            .map(String::as_str)
            .collect()
    }
}

pub(super) fn darwin_core() -> Vec<Concept> {
    vec![
        Concept::shared(
            "eventID",
            [
                "samplingProtocol",
                "samplingEffort",
                "eventDate",
                "eventTime",
                "startDayOfYear",
                "endDayOfYear",
                "year",
                "month",
                "day",
                "verbatimEventDate",
                "habitat",
                "fieldNumber",
                "fieldNotes",
                "eventRemarks",
            ],
        ),
        Concept::shared(
            "locationID",
            [
                "higherGeographyID",
                "higherGeography",
                "continent",
                "waterBody",
                "islandGroup",
                "island",
                "country",
                "countryCode",
                "stateProvince",
                "county",
                "municipality",
                "locality",
                "verbatimLocality",
                "verbatimElevation",
                "minimumElevationInMeters",
                "maximumElevationInMeters",
                "verbatimDepth",
                "minimumDepthInMeters",
                "maximumDepthInMeters",
                "minimumDistanceAboveSurfaceInMeters",
                "maximumDistanceAboveSurfaceInMeters",
                "locationAccordingTo",
                "locationRemarks",
                "verbatimCoordinates",
                "verbatimLatitude",
                "verbatimLongitude",
                "verbatimCoordinateSystem",
                "verbatimSRS",
                "decimalLatitude",
                "decimalLongitude",
                "geodeticDatum",
                "coordinateUncertaintyInMeters",
                "coordinatePrecision",
                "pointRadiusSpatialFit",
                "footprintWKT",
                "footprintSRS",
                "footprintSpatialFit",
                "georeferencedBy",
                "georeferencedDate",
                "georeferenceProtocol",
                "georeferenceSources",
                "georeferenceVerificationStatus",
                "georeferenceRemarks",
            ],
        ),
        Concept::shared(
            "geologicalContextID",
            [
                "earliestEonOrLowestEonothem",
                "latestEonOrHighestEonothem",
                "earliestEraOrLowestErathem",
                "latestEraOrHighestErathem",
                "earliestPeriodOrLowestSystem",
                "latestPeriodOrHighestSystem",
                "earliestEpochOrLowestSeries",
                "latestEpochOrHighestSeries",
                "earliestAgeOrLowestStage",
                "latestAgeOrHighestStage",
                "lowestBiostratigraphicZone",
                "highestBiostratigraphicZone",
                "lithostratigraphicTerms",
                "group",
                "formation",
                "member",
                "bed",
            ],
        ),
        Concept::per_row(
            "identificationID",
            [
                "identifiedBy",
                "dateIdentified",
                "identificationReferences",
                "identificationVerificationStatus",
                "identificationRemarks",
                "identificationQualifier",
                "typeStatus",
            ],
        ),
        Concept::shared(
            "taxonID",
            [
                "scientificNameID",
                "acceptedNameUsageID",
                "parentNameUsageID",
                "originalNameUsageID",
                "nameAccordingToID",
                "namePublishedInID",
                "taxonConceptID",
                "scientificName",
                "acceptedNameUsage",
                "parentNameUsage",
                "originalNameUsage",
                "nameAccordingTo",
                "namePublishedIn",
                "namePublishedInYear",
                "higherClassification",
                "kingdom",
                "phylum",
                "class",
                "order",
                "family",
                "genus",
                "subgenus",
                "specificEpithet",
                "infraspecificEpithet",
                "taxonRank",
                "verbatimTaxonRank",
                "scientificNameAuthorship",
                "vernacularName",
                "nomenclaturalCode",
                "taxonomicStatus",
                "nomenclaturalStatus",
                "taxonRemarks",
            ],
        ),
    ]
}
