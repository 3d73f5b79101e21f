mod neighborhood;
mod properties;
mod resolver;
mod summary;
mod timeline;

pub use neighborhood::{best_label, compact_namespace, NeighborhoodBuilder};
pub use properties::{classify, Facet, FacetRule, PropertyAggregator, ResourceFacets, FACET_TABLE};
pub use resolver::IdentifierResolver;
pub use summary::SummaryService;
pub use timeline::TimelineBuilder;
