use std::collections::HashMap;

use mondex_api::{ApiError, Pokemon, PokemonStub};

/// Lifecycle of one keyed detail fetch.
#[derive(Debug)]
pub enum DetailRecord {
    Pending,
    Ready(Pokemon),
    Failed(ApiError),
}

/// Per-name cache of detail fetches, append-only within a session.
///
/// Deduplication by key is the central contract: a name is handed out for
/// fetching exactly once, a `Ready` record never regresses, and a failed
/// record stays failed until the session resets (no auto-retry, eviction is
/// out of scope).
#[derive(Debug, Default)]
pub struct DetailLedger {
    records: HashMap<String, DetailRecord>,
}

impl DetailLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a `Pending` record for every stub that has none yet and
    /// return those names; the caller starts exactly one fetch per returned
    /// name. A repeated pass over the same stub list yields nothing.
    pub fn begin_missing(&mut self, stubs: &[PokemonStub]) -> Vec<String> {
        let mut started = Vec::new();
        for stub in stubs {
            if !self.records.contains_key(&stub.name) {
                self.records
                    .insert(stub.name.clone(), DetailRecord::Pending);
                started.push(stub.name.clone());
            }
        }
        started
    }

    /// Resolve a pending record to `Ready` or `Failed`. Completions for
    /// unknown names or records that already resolved are discarded.
    pub fn complete(&mut self, name: &str, outcome: Result<Pokemon, ApiError>) {
        if let Some(record) = self.records.get_mut(name) {
            if matches!(record, DetailRecord::Pending) {
                *record = match outcome {
                    Ok(item) => DetailRecord::Ready(item),
                    Err(e) => {
                        log::debug!("detail fetch for '{name}' failed: {e}");
                        DetailRecord::Failed(e)
                    }
                };
            }
        }
    }

    pub fn record(&self, name: &str) -> Option<&DetailRecord> {
        self.records.get(name)
    }

    /// Project the display sequence: stubs mapped in catalog order to their
    /// resolved items, pending and failed entries omitted. The displayed
    /// order is always catalog rank restricted to the resolved subset,
    /// never fetch-completion order.
    pub fn resolved<'a>(&'a self, stubs: &[PokemonStub]) -> Vec<&'a Pokemon> {
        stubs
            .iter()
            .filter_map(|s| match self.records.get(&s.name) {
                Some(DetailRecord::Ready(item)) => Some(item),
                _ => None,
            })
            .collect()
    }

    /// Number of stub positions still awaiting their fetch, surfaced for
    /// placeholder rendering.
    pub fn pending_count(&self, stubs: &[PokemonStub]) -> usize {
        stubs
            .iter()
            .filter(|s| matches!(self.records.get(&s.name), Some(DetailRecord::Pending)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(name: &str) -> PokemonStub {
        PokemonStub {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn item(id: u32, name: &str) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            sprites: Default::default(),
            types: Vec::new(),
            stats: Vec::new(),
        }
    }

    fn error() -> ApiError {
        ApiError::Status {
            status: 500,
            url: "stub".to_string(),
        }
    }

    #[test]
    fn begin_missing_hands_out_each_name_once() {
        let mut ledger = DetailLedger::new();
        let stubs = vec![stub("a"), stub("b")];

        assert_eq!(ledger.begin_missing(&stubs), vec!["a", "b"]);
        // Second pass over the same list starts nothing.
        assert!(ledger.begin_missing(&stubs).is_empty());

        // A grown list only hands out the new names.
        let grown = vec![stub("a"), stub("b"), stub("c")];
        assert_eq!(ledger.begin_missing(&grown), vec!["c"]);
    }

    #[test]
    fn duplicate_stub_names_fetch_once_display_per_position() {
        let mut ledger = DetailLedger::new();
        let stubs = vec![stub("a"), stub("dup"), stub("dup")];

        assert_eq!(ledger.begin_missing(&stubs), vec!["a", "dup"]);

        ledger.complete("a", Ok(item(1, "a")));
        ledger.complete("dup", Ok(item(2, "dup")));

        let shown = ledger.resolved(&stubs);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[1].id, 2);
        assert_eq!(shown[2].id, 2);
    }

    #[test]
    fn ready_never_regresses() {
        let mut ledger = DetailLedger::new();
        ledger.begin_missing(&[stub("a")]);
        ledger.complete("a", Ok(item(1, "a")));

        // Late duplicate completions are discarded, whatever they carry.
        ledger.complete("a", Err(error()));
        ledger.complete("a", Ok(item(99, "impostor")));

        match ledger.record("a") {
            Some(DetailRecord::Ready(p)) => assert_eq!(p.id, 1),
            other => panic!("expected ready record, got {other:?}"),
        }
    }

    #[test]
    fn completion_for_unknown_name_is_discarded() {
        let mut ledger = DetailLedger::new();
        ledger.complete("ghost", Ok(item(1, "ghost")));
        assert!(ledger.record("ghost").is_none());
    }

    #[test]
    fn failed_records_are_omitted_and_not_retried() {
        let mut ledger = DetailLedger::new();
        let stubs = vec![stub("a"), stub("b"), stub("c")];
        ledger.begin_missing(&stubs);

        ledger.complete("a", Ok(item(1, "a")));
        ledger.complete("b", Err(error()));

        let shown = ledger.resolved(&stubs);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "a");
        assert_eq!(ledger.pending_count(&stubs), 1);

        // The failed name is never handed out again.
        assert!(ledger.begin_missing(&stubs).is_empty());
        assert!(matches!(ledger.record("b"), Some(DetailRecord::Failed(_))));
    }

    #[test]
    fn display_order_is_catalog_rank_not_completion_order() {
        let mut ledger = DetailLedger::new();
        let stubs = vec![stub("a"), stub("b"), stub("c")];
        ledger.begin_missing(&stubs);

        // Complete in reverse.
        ledger.complete("c", Ok(item(3, "c")));
        ledger.complete("b", Ok(item(2, "b")));
        ledger.complete("a", Ok(item(1, "a")));

        let ids: Vec<u32> = ledger.resolved(&stubs).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
