//! Keyed query cache shared by every list module.
//!
//! Each module declares a query as `(scope, params)`; the client keeps the
//! last successful payload per key, an invalidation epoch per scope, and a
//! monotonic request sequence per query instance so a stale in-flight
//! response can never overwrite a newer one. Mutations call
//! [`QueryClient::invalidate`] on success, which bumps the scope epoch
//! exactly once and makes every mounted query on that scope refetch.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::http::ApiError;

/// Query scope per entity family. Invalidation is scope-wide: every cached
/// params variation of the scope refetches.
pub mod scopes {
    pub const CATEGORIES: &str = "categories";
    pub const PROPERTIES: &str = "properties";
    pub const PRODUCTS: &str = "products";
    pub const LOCATIONS: &str = "locations";
    pub const REGIONS: &str = "regions";
    pub const USERS: &str = "users";
    pub const PROFILES: &str = "profiles";
    pub const BANNERS: &str = "banners";
}

/// Cache key: scope plus the serialized filter/pagination params.
pub type QueryKey = (String, String);

/// One mounted `use_query` call. Sequencing is tracked per instance so two
/// views sharing a cache key cannot cancel each other's fetches.
pub type InstanceKey = (u64, String);

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Per-scope invalidation counters. Reactive via the signal wrapping it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochMap {
    epochs: HashMap<String, u64>,
}

impl EpochMap {
    pub fn get(&self, scope: &str) -> u64 {
        self.epochs.get(scope).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, scope: &str) {
        *self.epochs.entry(scope.to_string()).or_insert(0) += 1;
    }
}

/// Non-reactive bookkeeping: request sequencing plus the payload cache.
#[derive(Debug, Clone, Default)]
pub struct SeqCache {
    next_seq: u64,
    latest: HashMap<InstanceKey, u64>,
    cache: HashMap<QueryKey, serde_json::Value>,
}

impl SeqCache {
    /// Register a new fetch and return its sequence number. Any earlier
    /// fetch of the same instance+params is superseded from this point on.
    pub fn begin_fetch(&mut self, instance: &InstanceKey) -> u64 {
        self.next_seq += 1;
        self.latest.insert(instance.clone(), self.next_seq);
        self.next_seq
    }

    /// A response may be applied only if no newer fetch was issued since.
    pub fn should_apply(&self, instance: &InstanceKey, seq: u64) -> bool {
        self.latest.get(instance).copied() == Some(seq)
    }

    pub fn store(&mut self, key: &QueryKey, value: serde_json::Value) {
        self.cache.insert(key.clone(), value);
    }

    pub fn cached(&self, key: &QueryKey) -> Option<&serde_json::Value> {
        self.cache.get(key)
    }
}

/// Fetch policy for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// Bounded retry for list fetches; mutations never go through this path.
    pub retry: u32,
    pub retry_delay_ms: u32,
    pub refetch_on_focus: bool,
    pub refetch_on_reconnect: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            retry: 2,
            retry_delay_ms: 1000,
            refetch_on_focus: true,
            refetch_on_reconnect: true,
        }
    }
}

impl QueryOptions {
    /// The policy the busier modules use: refresh only on explicit action
    /// or invalidation, never behind the operator's back.
    pub fn manual_refresh_only() -> Self {
        Self {
            refetch_on_focus: false,
            refetch_on_reconnect: false,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy)]
pub struct QueryClient {
    epochs: RwSignal<EpochMap>,
    seq_cache: RwSignal<SeqCache>,
    focus_epoch: RwSignal<u64>,
    online_epoch: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            epochs: RwSignal::new(EpochMap::default()),
            seq_cache: RwSignal::new(SeqCache::default()),
            focus_epoch: RwSignal::new(0),
            online_epoch: RwSignal::new(0),
        }
    }

    /// Mark every query of `scope` stale; mounted ones refetch immediately.
    pub fn invalidate(&self, scope: &str) {
        self.epochs.update(|m| m.bump(scope));
    }

    /// Reactive read of the scope epoch.
    pub fn scope_epoch(&self, scope: &str) -> u64 {
        self.epochs.with(|m| m.get(scope))
    }

    fn begin_fetch(&self, instance: &InstanceKey) -> u64 {
        self.seq_cache
            .try_update(|c| c.begin_fetch(instance))
            .unwrap_or(0)
    }

    fn should_apply(&self, instance: &InstanceKey, seq: u64) -> bool {
        self.seq_cache
            .with_untracked(|c| c.should_apply(instance, seq))
    }

    fn store(&self, key: &QueryKey, value: serde_json::Value) {
        self.seq_cache.update(|c| c.store(key, value));
    }

    fn cached(&self, key: &QueryKey) -> Option<serde_json::Value> {
        self.seq_cache.with_untracked(|c| c.cached(key).cloned())
    }

    /// Bump the focus/reconnect epochs from the browser events. Queries opt
    /// in per [`QueryOptions`].
    pub fn install_window_listeners(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let focus_epoch = self.focus_epoch;
        let on_focus = Closure::wrap(Box::new(move |_: web_sys::Event| {
            focus_epoch.update(|v| *v += 1);
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref());
        on_focus.forget();

        let online_epoch = self.online_epoch;
        let on_online = Closure::wrap(Box::new(move |_: web_sys::Event| {
            online_epoch.update(|v| *v += 1);
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref());
        on_online.forget();
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided")
}

/// Reactive handles of one declared query.
pub struct QueryState<T: 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: 'static> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for QueryState<T> {}

/// Declare a query: refetches whenever `params` changes, the scope is
/// invalidated, or (per options) the window regains focus / connectivity.
///
/// On failure the previously shown payload stays in place and only the
/// error indicator is set. A response superseded by a newer fetch of the
/// same query is dropped.
pub fn use_query<T, F, Fut>(
    client: QueryClient,
    scope: &'static str,
    params: Signal<String>,
    fetch: F,
    options: QueryOptions,
) -> QueryState<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    F: Fn(String) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = RwSignal::new(None::<T>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let instance_id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
    let epoch = Memo::new(move |_| client.scope_epoch(scope));

    Effect::new(move |_| {
        let params_now = params.get();
        epoch.track();
        if options.refetch_on_focus {
            client.focus_epoch.track();
        }
        if options.refetch_on_reconnect {
            client.online_epoch.track();
        }

        let key = (scope.to_string(), params_now.clone());
        let instance = (instance_id, params_now.clone());

        // Show the cached page for this key right away, if there is one.
        if let Some(cached) = client.cached(&key) {
            if let Ok(value) = serde_json::from_value::<T>(cached) {
                data.set(Some(value));
            }
        }

        let seq = client.begin_fetch(&instance);
        loading.set(true);

        spawn_local(async move {
            let mut attempt = 0u32;
            let outcome = loop {
                match fetch(params_now.clone()).await {
                    Ok(value) => break Ok(value),
                    Err(err) => {
                        if attempt >= options.retry {
                            break Err(err);
                        }
                        attempt += 1;
                        TimeoutFuture::new(options.retry_delay_ms).await;
                    }
                }
            };

            if !client.should_apply(&instance, seq) {
                return;
            }
            loading.set(false);
            match outcome {
                Ok(value) => {
                    if let Ok(json) = serde_json::to_value(&value) {
                        client.store(&key, json);
                    }
                    error.set(None);
                    data.set(Some(value));
                }
                Err(err) => {
                    log::error!("query {}/{} failed: {}", key.0, key.1, err);
                    error.set(Some(err.to_string()));
                }
            }
        });
    });

    QueryState {
        data,
        loading,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: u64, params: &str) -> InstanceKey {
        (id, params.to_string())
    }

    fn key(scope: &str, params: &str) -> QueryKey {
        (scope.to_string(), params.to_string())
    }

    #[test]
    fn invalidate_bumps_scope_epoch_exactly_once() {
        let mut epochs = EpochMap::default();
        assert_eq!(epochs.get("categories"), 0);
        epochs.bump("categories");
        assert_eq!(epochs.get("categories"), 1);
        assert_eq!(epochs.get("banners"), 0);
    }

    #[test]
    fn stale_response_is_not_applied() {
        let mut cache = SeqCache::default();
        let i = instance(1, "page=1");
        let first = cache.begin_fetch(&i);
        let second = cache.begin_fetch(&i);
        assert!(!cache.should_apply(&i, first));
        assert!(cache.should_apply(&i, second));
    }

    #[test]
    fn instances_do_not_supersede_each_other() {
        // Two mounted queries may share a cache key; each keeps its own
        // fetch sequence.
        let mut cache = SeqCache::default();
        let a = instance(1, "");
        let b = instance(2, "");
        let seq_a = cache.begin_fetch(&a);
        let seq_b = cache.begin_fetch(&b);
        assert!(cache.should_apply(&a, seq_a));
        assert!(cache.should_apply(&b, seq_b));
    }

    #[test]
    fn cache_keeps_last_payload_per_key() {
        let mut cache = SeqCache::default();
        let k = key("categories", "");
        assert!(cache.cached(&k).is_none());
        cache.store(&k, serde_json::json!([1, 2]));
        cache.store(&k, serde_json::json!([3]));
        assert_eq!(cache.cached(&k), Some(&serde_json::json!([3])));
    }

    #[test]
    fn default_policy_is_two_retries_with_fixed_backoff() {
        let options = QueryOptions::default();
        assert_eq!(options.retry, 2);
        assert_eq!(options.retry_delay_ms, 1000);
        assert!(options.refetch_on_focus);
        let manual = QueryOptions::manual_refresh_only();
        assert!(!manual.refetch_on_focus);
        assert!(!manual.refetch_on_reconnect);
        assert_eq!(manual.retry, 2);
    }
}
