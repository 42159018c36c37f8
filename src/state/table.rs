//! Paginated table controller.
//!
//! DESIGN
//! ======
//! The controller is split in two layers:
//!
//! * [`Pager`] — a pure state machine owning limit/offset/page arithmetic and
//!   the fetch lifecycle (`Idle -> Loading -> Loaded | Errored`). Every issued
//!   fetch gets a generation number; a result is applied only when it belongs
//!   to the most recently issued fetch, so a slow early request can never
//!   overwrite the data of a later one.
//! * [`TableHandle`] — a `Copy` reactive wrapper that stores the pager in a
//!   signal, owns the query closure, and drives fetches via `spawn_local`.
//!
//! Views obtain a handle through [`use_table`], which also resets pagination
//! to page 0 whenever the dependency key changes.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::api::ApiResult;
use crate::api::models::Page;

/// Page size used by the workspace tables.
pub const DEFAULT_LIMIT: u64 = 50;

/// Where the controller is in its fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch resolved and its page is displayed.
    Loaded,
    /// The latest fetch failed; previous items are still displayed.
    Errored(String),
}

/// Parameters of one paginated fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

/// Pure pagination state machine.
#[derive(Debug)]
pub struct Pager<T> {
    limit: u64,
    page: u64,
    max_page: u64,
    generation: u64,
    items: Vec<T>,
    phase: FetchPhase,
}

impl<T> Pager<T> {
    /// Create a pager with the given page size. A zero limit is bumped to 1.
    pub fn new(limit: u64) -> Self {
        Self {
            limit: limit.max(1),
            page: 0,
            max_page: 0,
            generation: 0,
            items: Vec::new(),
            phase: FetchPhase::Idle,
        }
    }

    /// Issue a fetch for `page`, clamped to `[0, max_page]`.
    ///
    /// Returns the new generation and the request to run. Issuing a fetch
    /// while another is in flight is allowed; the newer generation supersedes
    /// the older one.
    pub fn request(&mut self, page: u64) -> (u64, PageRequest) {
        self.page = page.min(self.max_page);
        self.generation += 1;
        self.phase = FetchPhase::Loading;
        (
            self.generation,
            PageRequest {
                limit: self.limit,
                offset: self.page * self.limit,
            },
        )
    }

    /// Apply a resolved fetch.
    ///
    /// Returns `false` (and changes nothing) when `generation` is not the most
    /// recently issued one, i.e. the result is stale.
    pub fn resolve(&mut self, generation: u64, page: Page<T>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.max_page = max_page(page.total, self.limit);
        self.items = page.items;
        self.page = self.page.min(self.max_page);
        self.phase = FetchPhase::Loaded;
        true
    }

    /// Apply a failed fetch. Prior items stay in place; the phase surfaces the
    /// error so the controller is never stuck in `Loading`.
    ///
    /// Generation-checked like [`Pager::resolve`]: a stale failure must not
    /// clobber the state of a newer in-flight fetch.
    pub fn reject(&mut self, generation: u64, error: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = FetchPhase::Errored(error);
        true
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn max_page(&self) -> u64 {
        self.max_page
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn error(&self) -> Option<String> {
        match &self.phase {
            FetchPhase::Errored(error) => Some(error.clone()),
            _ => None,
        }
    }
}

/// Highest zero-based page index for `total` items at `limit` per page.
fn max_page(total: u64, limit: u64) -> u64 {
    if total == 0 {
        0
    } else {
        total.div_ceil(limit) - 1
    }
}

type Query<T> = Arc<dyn Fn(u64, u64) -> LocalBoxFuture<'static, ApiResult<Page<T>>> + Send + Sync>;

/// Reactive handle over a [`Pager`] plus the query that feeds it.
///
/// `Copy`, so it can move freely into view closures like any signal.
pub struct TableHandle<T: Send + Sync + 'static> {
    pager: RwSignal<Pager<T>>,
    query: StoredValue<Query<T>>,
}

impl<T: Send + Sync + 'static> Clone for TableHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableHandle<T> {}

impl<T: Send + Sync + 'static> TableHandle<T> {
    /// Create a handle without issuing a fetch yet; [`use_table`] triggers the
    /// mount fetch through its dependency effect.
    pub fn new<Q, Fut>(limit: u64, query: Q) -> Self
    where
        Q: Fn(u64, u64) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ApiResult<Page<T>>> + 'static,
    {
        let query: Query<T> = Arc::new(move |limit, offset| query(limit, offset).boxed_local());
        Self {
            pager: RwSignal::new(Pager::new(limit)),
            query: StoredValue::new(query),
        }
    }

    /// Request a different page, clamped to the known page range.
    pub fn set_page(&self, page: u64) {
        self.load(page);
    }

    /// Back to page 0 and re-fetch. Used on mount and dependency change.
    pub fn reset(&self) {
        self.load(0);
    }

    fn load(&self, page: u64) {
        let Some((generation, request)) = self.pager.try_update(|p| p.request(page)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let pager = self.pager;
            let fetch = self.query.with_value(|q| q(request.limit, request.offset));
            leptos::task::spawn_local(async move {
                match fetch.await {
                    Ok(page) => {
                        let _ = pager.try_update(|p| p.resolve(generation, page));
                    }
                    Err(error) => {
                        let _ = pager.try_update(|p| p.reject(generation, error.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (generation, request);
        }
    }

    /// Current page of items. Reactive when read inside a view closure.
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.pager.with(|p| p.items().to_vec())
    }

    pub fn page(&self) -> Signal<u64> {
        let pager = self.pager;
        Signal::derive(move || pager.with(Pager::page))
    }

    pub fn max_page(&self) -> Signal<u64> {
        let pager = self.pager;
        Signal::derive(move || pager.with(Pager::max_page))
    }

    pub fn loading(&self) -> Signal<bool> {
        let pager = self.pager;
        Signal::derive(move || pager.with(Pager::loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let pager = self.pager;
        Signal::derive(move || pager.with(Pager::error))
    }
}

/// Hook wiring a query to a table, the replacement for the old `useTable`.
///
/// `query` receives `(limit, offset)` and must read its inputs untracked;
/// `deps` is the reactive dependency key. On mount and whenever the key
/// changes, pagination resets to page 0 and a fresh fetch is issued.
pub fn use_table<T, D, Q, Fut>(
    query: Q,
    deps: impl Fn() -> D + Send + Sync + 'static,
) -> TableHandle<T>
where
    T: Send + Sync + 'static,
    D: PartialEq + Send + Sync + 'static,
    Q: Fn(u64, u64) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<Page<T>>> + 'static,
{
    let table = TableHandle::new(DEFAULT_LIMIT, query);

    Effect::new(move |prev: Option<D>| {
        let key = deps();
        if prev.as_ref() != Some(&key) {
            table.reset();
        }
        key
    });

    table
}
