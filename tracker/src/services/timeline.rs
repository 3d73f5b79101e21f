use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::Result;
use crate::models::EventRecord;
use crate::sparql::{QueryBinding, QueryTemplate};
use crate::triplestore::Triplestore;

const EVENTS_QUERY: &str = "PREFIX premis: <http://www.loc.gov/premis/rdf/v1#>
PREFIX pres: <http://fedora.lib.virginia.edu/preservation#>

SELECT ?e ?type ?time ?bagSize ?bagPayloadSize ?outcome
WHERE {
    $uri premis:hasEvent ?e .
    ?e premis:hasEventType ?type .
    ?e premis:hasEventDateTime ?time .
  OPTIONAL {
    ?e pres:bagSize ?bagSize .
    ?e pres:bagPayloadSize ?bagPayloadSize
  }
  OPTIONAL {
    ?e premis:hasEventOutcomeInformation ?outcomeInfo .
    ?outcomeInfo premis:hasEventOutcome ?outcome
  }
} ORDER BY ?time";

/// Best-effort instant for an `xsd:dateTime`/`xsd:date` lexical form.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parseable timestamps by instant, unparseable ones after them. Ties are
/// left to the stable sort.
fn sort_key(raw: &str) -> (bool, Option<DateTime<Utc>>) {
    let instant = parse_instant(raw);
    (instant.is_none(), instant)
}

fn event_from_row(row: &QueryBinding) -> Option<EventRecord> {
    Some(EventRecord {
        event_type: row.get("type")?.to_string(),
        date: row.get("time")?.to_string(),
        bag_size: row.get("bagSize").map(str::to_string),
        bag_payload_size: row.get("bagPayloadSize").map(str::to_string),
        outcome: row.get("outcome").map(str::to_string),
    })
}

pub struct TimelineBuilder {
    triplestore: Arc<dyn Triplestore>,
}

impl TimelineBuilder {
    pub fn new(triplestore: Arc<dyn Triplestore>) -> Self {
        Self { triplestore }
    }

    /// Events attached to `address`, oldest first. Events sharing a
    /// timestamp keep the order the store returned them in.
    pub async fn timeline(&self, address: &str) -> Result<Vec<EventRecord>> {
        let query = QueryTemplate::new(EVENTS_QUERY)
            .bind_iri("uri", address)
            .render()?;

        let mut events: Vec<EventRecord> = self
            .triplestore
            .select(&query)
            .await?
            .iter()
            .filter_map(event_from_row)
            .collect();

        events.sort_by_key(|event| sort_key(&event.date));
        Ok(events)
    }
}
