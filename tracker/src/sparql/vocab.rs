//! RDF vocabulary used by the repository's triples.

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

pub const DC_IDENTIFIER: &str = "http://purl.org/dc/elements/1.1/identifier";
pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";

pub const DCTERMS: &str = "http://purl.org/dc/terms/";

pub const PREMIS: &str = "http://www.loc.gov/premis/rdf/v1#";

pub const LDP: &str = "http://www.w3.org/ns/ldp#";

pub const FCREPO: &str = "http://fedora.info/definitions/v4/repository#";
pub const FCREPO_RESOURCE: &str = "http://fedora.info/definitions/v4/repository#Resource";

/// Local preservation vocabulary.
pub const PRES: &str = "http://fedora.lib.virginia.edu/preservation#";
pub const PRES_PRESERVATION_PACKAGE: &str =
    "http://fedora.lib.virginia.edu/preservation#PreservationPackage";
pub const PRES_EXTERNAL_SYSTEM: &str = "http://fedora.lib.virginia.edu/preservation#externalSystem";
pub const PRES_HAS_VIRGO_VIEW: &str = "http://fedora.lib.virginia.edu/preservation#hasVirgoView";

/// Local relationships vocabulary.
pub const WSLS: &str = "http://fedora.lib.virginia.edu/wsls/relationships#";

/// Display prefixes applied to predicate labels, in order.
pub const NAMESPACE_PREFIXES: &[(&str, &str)] = &[
    (PREMIS, "premis:"),
    (LDP, "ldp:"),
    (FCREPO, "fcrepo:"),
    (DCTERMS, "dc:terms"),
    (PRES, "pres:"),
    (WSLS, "wsls:"),
];
