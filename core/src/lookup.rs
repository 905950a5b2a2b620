use crate::airport::{AirportId, AirportRegistry};
use crate::error::{FlightNetError, Result};
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;

/// Cleaned airport name or IATA code -> matching airport ids (ascending).
pub type NameLookup = FxHashMap<String, Vec<AirportId>>;

pub fn build_name_lookup(registry: &AirportRegistry) -> NameLookup {
    let mut lookup = NameLookup::with_capacity_and_hasher(registry.len() * 2, Default::default());

    for airport in registry.iter() {
        for key in [clean_str(&airport.name), clean_str(&airport.iata_code)] {
            if key.is_empty() {
                continue;
            }
            let ids = lookup.entry(key).or_default();
            if !ids.contains(&airport.id) {
                ids.push(airport.id);
            }
        }
    }

    for ids in lookup.values_mut() {
        ids.sort_unstable();
    }

    lookup
}

/// Lowest id registered under the cleaned query, with no regard to any graph.
pub fn find_airport_id(query: &str, lookup: &NameLookup) -> Result<AirportId> {
    let clean_query = clean_str(query);
    lookup
        .get(&clean_query)
        .and_then(|ids| ids.first().copied())
        .ok_or_else(|| FlightNetError::AirportNotFound(query.to_string()))
}
