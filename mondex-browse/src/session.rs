use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use mondex_api::{ApiError, CatalogGateway, ListingPage, Pokemon, PokemonStub};

use crate::details::{DetailLedger, DetailRecord};
use crate::pager::{FetchState, Paginator};
use crate::trigger::ScrollTrigger;

/// Completion of one in-flight remote fetch.
enum Completion {
    Page(Result<ListingPage, ApiError>),
    Detail {
        name: String,
        outcome: Result<Pokemon, ApiError>,
    },
}

/// One browsing session: the pagination controller, the detail ledger, the
/// scroll trigger, and the in-flight fetches, owned together and mutated
/// only by this struct's methods.
///
/// Page fetches are serialized by the paginator's guard; detail fetches fan
/// out concurrently with no completion-order guarantee — the display
/// projection re-imposes catalog order. Dropping or [`reset`]ting the
/// session drops the in-flight futures, so a fetch can never apply its
/// result to a session that has moved on.
///
/// [`reset`]: BrowseSession::reset
pub struct BrowseSession<G> {
    gateway: Arc<G>,
    pager: Paginator,
    details: DetailLedger,
    trigger: ScrollTrigger,
    inflight: FuturesUnordered<BoxFuture<'static, Completion>>,
    page_size: u32,
}

impl<G: CatalogGateway + 'static> BrowseSession<G> {
    pub fn new(gateway: G, page_size: u32) -> Self {
        Self::with_shared(Arc::new(gateway), page_size)
    }

    pub fn with_shared(gateway: Arc<G>, page_size: u32) -> Self {
        Self {
            gateway,
            pager: Paginator::new(page_size),
            details: DetailLedger::new(),
            trigger: ScrollTrigger::new(),
            inflight: FuturesUnordered::new(),
            page_size,
        }
    }

    /// The sentinel became visible. Requests the next page unless a fetch
    /// is already in flight or the catalog is exhausted.
    pub fn sentinel_visible(&mut self) {
        if self.trigger.observe(true) {
            self.request_next();
        }
    }

    /// The sentinel scrolled out of view.
    pub fn sentinel_hidden(&mut self) {
        self.trigger.observe(false);
    }

    /// Request the next listing page. No-op while a page fetch is in flight
    /// or after exhaustion; after a failed page this is the caller-driven
    /// retry of the same offset.
    pub fn request_next(&mut self) {
        let Some(req) = self.pager.begin_fetch() else {
            return;
        };
        let gateway = Arc::clone(&self.gateway);
        self.inflight.push(Box::pin(async move {
            Completion::Page(gateway.fetch_page(req.limit, req.offset).await)
        }));
    }

    /// Start one detail fetch per stub the ledger has no record for.
    fn request_missing_details(&mut self) {
        for name in self.details.begin_missing(self.pager.stubs()) {
            let gateway = Arc::clone(&self.gateway);
            self.inflight.push(Box::pin(async move {
                let outcome = gateway.fetch_detail(&name).await;
                Completion::Detail { name, outcome }
            }));
        }
    }

    fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::Page(outcome) => {
                self.pager.complete(outcome);
                self.request_missing_details();
            }
            Completion::Detail { name, outcome } => self.details.complete(&name, outcome),
        }
    }

    /// Apply the next fetch completion. Returns false once nothing is in
    /// flight.
    pub async fn step(&mut self) -> bool {
        match self.inflight.next().await {
            Some(completion) => {
                self.apply(completion);
                true
            }
            None => false,
        }
    }

    /// Drain in-flight fetches until the session is quiescent.
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    /// Discard all session state. In-flight fetches are dropped; their
    /// results are never applied.
    pub fn reset(&mut self) {
        self.pager = Paginator::new(self.page_size);
        self.details = DetailLedger::new();
        self.trigger = ScrollTrigger::new();
        self.inflight = FuturesUnordered::new();
    }

    // Read surface for rendering code.

    /// Catalog-rank-ordered sequence of fully resolved items.
    pub fn display(&self) -> Vec<&Pokemon> {
        self.details.resolved(self.pager.stubs())
    }

    /// Number of placeholders to render for still-pending details.
    pub fn pending_count(&self) -> usize {
        self.details.pending_count(self.pager.stubs())
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    pub fn state(&self) -> &FetchState {
        self.pager.state()
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        self.pager.last_error()
    }

    pub fn stubs(&self) -> &[PokemonStub] {
        self.pager.stubs()
    }

    pub fn pages_loaded(&self) -> usize {
        self.pager.pages_loaded()
    }

    pub fn next_offset(&self) -> u32 {
        self.pager.next_offset()
    }

    pub fn detail(&self, name: &str) -> Option<&DetailRecord> {
        self.details.record(name)
    }
}
