use mondex_api::{ApiError, ListingPage, PokemonStub};

/// Pagination lifecycle. `Exhausted` is terminal for the session; `Failed`
/// is left by a fetch error and cleared only by a caller-driven retry.
#[derive(Debug)]
pub enum FetchState {
    Idle,
    Fetching,
    Exhausted,
    Failed(ApiError),
}

/// Parameters for one listing-page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

/// Drives successive page fetches against the catalog listing and owns the
/// append-only stub sequence.
///
/// At most one page fetch is ever in flight: [`Paginator::begin_fetch`] is
/// the re-entrancy guard, so pages can never interleave out of catalog
/// order however often the triggering signal fires.
#[derive(Debug)]
pub struct Paginator {
    page_size: u32,
    next_offset: u32,
    pages_loaded: usize,
    stubs: Vec<PokemonStub>,
    state: FetchState,
}

impl Paginator {
    pub fn new(page_size: u32) -> Self {
        Self {
            // A zero page size would never advance the cursor.
            page_size: page_size.max(1),
            next_offset: 0,
            pages_loaded: 0,
            stubs: Vec::new(),
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The stub sequence in catalog rank order, across all loaded pages.
    pub fn stubs(&self) -> &[PokemonStub] {
        &self.stubs
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn next_offset(&self) -> u32 {
        self.next_offset
    }

    pub fn has_more(&self) -> bool {
        !matches!(self.state, FetchState::Exhausted)
    }

    pub fn last_error(&self) -> Option<&ApiError> {
        match &self.state {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Begin the next page fetch, entering `Fetching`. Returns `None` while
    /// a fetch is already in flight or the catalog is exhausted; after a
    /// failure the same offset is re-attempted.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        match self.state {
            FetchState::Fetching | FetchState::Exhausted => None,
            FetchState::Idle | FetchState::Failed(_) => {
                self.state = FetchState::Fetching;
                Some(PageRequest {
                    limit: self.page_size,
                    offset: self.next_offset,
                })
            }
        }
    }

    /// Apply the outcome of the in-flight fetch. A completion arriving in
    /// any other state is stale and discarded.
    pub fn complete(&mut self, outcome: Result<ListingPage, ApiError>) {
        if !matches!(self.state, FetchState::Fetching) {
            return;
        }
        match outcome {
            Ok(page) => {
                let more = page.has_next();
                self.stubs.extend(page.results);
                // The remote cursor advances by the requested page size even
                // when a page returns fewer entries.
                self.next_offset += self.page_size;
                self.pages_loaded += 1;
                self.state = if more {
                    FetchState::Idle
                } else {
                    FetchState::Exhausted
                };
            }
            Err(e) => {
                log::debug!("page fetch at offset {} failed: {e}", self.next_offset);
                self.state = FetchState::Failed(e);
            }
        }
    }
}
