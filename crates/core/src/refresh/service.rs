//! Refresh job service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};

use stockscope_market_data::{MarketDataError, QuoteProvider};

use crate::constants::DEFAULT_REFRESH_TIMEOUT_SECS;
use crate::errors::Result;
use crate::refresh::export::export_snapshots;
use crate::snapshots::{Snapshot, SnapshotStore};

/// Outcome of a refresh run.
///
/// A refresh never fails as a whole because of individual symbols; callers
/// detect partial success by inspecting `failures`.
#[derive(Debug, Default)]
pub struct RefreshSummary {
    /// Snapshots fetched this run, in watchlist order.
    pub snapshots: Vec<Snapshot>,
    /// Per-symbol failures as (symbol, error message) pairs.
    pub failures: Vec<(String, String)>,
}

impl RefreshSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_success() {
            format!("Refreshed {} symbols", self.snapshots.len())
        } else {
            format!(
                "Refreshed {} symbols, {} failed: {}",
                self.snapshots.len(),
                self.failures.len(),
                self.failures
                    .iter()
                    .map(|(symbol, message)| format!("{} ({})", symbol, message))
                    .collect::<Vec<_>>()
                    .join("; ")
            )
        }
    }
}

/// Fetches profiles for a watchlist, upserts them into the store, and
/// writes the CSV export artifact.
///
/// The loop is sequential and failure-isolated: one symbol's fetch error,
/// timeout, or store-write error is logged and recorded, then the loop
/// moves on. A fetched snapshot joins the export artifact even when its
/// store write failed.
pub struct RefreshService<S: SnapshotStore> {
    provider: Arc<dyn QuoteProvider>,
    store: Arc<S>,
    export_path: PathBuf,
    timeout: Duration,
}

impl<S: SnapshotStore> RefreshService<S> {
    pub fn new(provider: Arc<dyn QuoteProvider>, store: Arc<S>, export_path: PathBuf) -> Self {
        Self {
            provider,
            store,
            export_path,
            timeout: Duration::from_secs(DEFAULT_REFRESH_TIMEOUT_SECS),
        }
    }

    /// Override the per-symbol fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one refresh over `watchlist`.
    ///
    /// Returns `Err` only for failures outside the per-symbol loop, such
    /// as writing the export artifact.
    pub async fn refresh(&self, watchlist: &[String]) -> Result<RefreshSummary> {
        info!(
            "Starting refresh of {} symbols via {}",
            watchlist.len(),
            self.provider.id()
        );

        let mut summary = RefreshSummary::default();

        for symbol in watchlist {
            let profile = match tokio::time::timeout(
                self.timeout,
                self.provider.get_company_profile(symbol),
            )
            .await
            {
                Ok(Ok(profile)) => profile,
                Ok(Err(e)) => {
                    warn!("Failed to fetch {}: {}", symbol, e);
                    summary.failures.push((symbol.clone(), e.to_string()));
                    continue;
                }
                Err(_) => {
                    let e = MarketDataError::Timeout {
                        provider: self.provider.id().to_string(),
                    };
                    warn!("Fetch timed out for {}", symbol);
                    summary.failures.push((symbol.clone(), e.to_string()));
                    continue;
                }
            };

            let snapshot = Snapshot::from_profile(profile);

            if let Err(e) = self.store.upsert(&snapshot).await {
                error!("Failed to store {}: {}", symbol, e);
                summary.failures.push((symbol.clone(), e.to_string()));
            } else {
                debug!("Stored snapshot for {}", symbol);
            }

            // Fetched rows are exported regardless of store outcome.
            summary.snapshots.push(snapshot);
        }

        export_snapshots(&self.export_path, &summary.snapshots)?;

        info!("{}", summary.summary());

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use stockscope_market_data::{CompanyProfile, HistoryPeriod, PricePoint};

    use crate::errors::{DatabaseError, Error};

    /// Scripted provider: each symbol maps to a canned outcome.
    struct MockProvider {
        profiles: HashMap<String, std::result::Result<CompanyProfile, String>>,
        slow_symbols: Vec<String>,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                profiles: HashMap::new(),
                slow_symbols: Vec::new(),
            }
        }

        fn with_profile(mut self, symbol: &str, price: f64) -> Self {
            self.profiles.insert(
                symbol.to_string(),
                Ok(CompanyProfile {
                    symbol: symbol.to_string(),
                    short_name: Some(format!("{} Corp", symbol)),
                    sector: Some("Technology".to_string()),
                    trailing_pe: Some(25.0),
                    market_cap: Some(1.0e12),
                    dividend_yield: Some(0.005),
                    price: Some(price),
                }),
            );
            self
        }

        fn with_failure(mut self, symbol: &str, message: &str) -> Self {
            self.profiles
                .insert(symbol.to_string(), Err(message.to_string()));
            self
        }

        fn with_slow_symbol(mut self, symbol: &str) -> Self {
            self.slow_symbols.push(symbol.to_string());
            self
        }
    }

    #[async_trait]
    impl QuoteProvider for MockProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_company_profile(
            &self,
            symbol: &str,
        ) -> std::result::Result<CompanyProfile, MarketDataError> {
            if self.slow_symbols.iter().any(|s| s == symbol) {
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }
            match self.profiles.get(symbol) {
                Some(Ok(profile)) => Ok(profile.clone()),
                Some(Err(message)) => Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: message.clone(),
                }),
                None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            }
        }

        async fn get_price_history(
            &self,
            _symbol: &str,
            _period: HistoryPeriod,
        ) -> std::result::Result<Vec<PricePoint>, MarketDataError> {
            Ok(Vec::new())
        }
    }

    /// In-memory store keyed by symbol, with an optional poison symbol
    /// whose writes fail.
    struct MockStore {
        rows: Mutex<HashMap<String, Snapshot>>,
        failing_symbol: Option<String>,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
                failing_symbol: None,
            }
        }

        fn failing_on(symbol: &str) -> Self {
            Self {
                rows: Mutex::new(HashMap::new()),
                failing_symbol: Some(symbol.to_string()),
            }
        }
    }

    #[async_trait]
    impl SnapshotStore for MockStore {
        async fn upsert(&self, snapshot: &Snapshot) -> Result<()> {
            if self.failing_symbol.as_deref() == Some(snapshot.symbol.as_str()) {
                return Err(Error::Database(DatabaseError::QueryFailed(
                    "disk I/O error".to_string(),
                )));
            }
            self.rows
                .lock()
                .unwrap()
                .insert(snapshot.symbol.clone(), snapshot.clone());
            Ok(())
        }

        fn read_all(&self) -> Result<Vec<Snapshot>> {
            let rows = self.rows.lock().unwrap();
            let mut all: Vec<Snapshot> = rows.values().cloned().collect();
            all.sort_by(|a, b| a.symbol.cmp(&b.symbol));
            Ok(all)
        }

        fn get(&self, symbol: &str) -> Result<Option<Snapshot>> {
            Ok(self.rows.lock().unwrap().get(symbol).cloned())
        }
    }

    fn watchlist(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    fn service(
        provider: MockProvider,
        store: Arc<MockStore>,
        dir: &tempfile::TempDir,
    ) -> RefreshService<MockStore> {
        RefreshService::new(Arc::new(provider), store, dir.path().join("snapshots.csv"))
    }

    #[tokio::test]
    async fn test_refresh_stores_all_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let provider = MockProvider::new()
            .with_profile("AAPL", 150.0)
            .with_profile("MSFT", 300.0);
        let store = Arc::new(MockStore::new());

        let summary = service(provider, store.clone(), &dir)
            .refresh(&watchlist(&["AAPL", "MSFT"]))
            .await
            .unwrap();

        assert!(summary.is_success());
        assert_eq!(summary.snapshots.len(), 2);
        assert_eq!(store.read_all().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_one_failing_symbol_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let provider = MockProvider::new()
            .with_profile("AAPL", 150.0)
            .with_failure("FAIL", "connection reset")
            .with_profile("MSFT", 300.0);
        let store = Arc::new(MockStore::new());

        let summary = service(provider, store.clone(), &dir)
            .refresh(&watchlist(&["AAPL", "FAIL", "MSFT"]))
            .await
            .unwrap();

        assert!(!summary.is_success());
        assert_eq!(summary.snapshots.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "FAIL");
        assert_eq!(store.read_all().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_upserts_by_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(MockStore::new());

        service(
            MockProvider::new().with_profile("AAPL", 150.0),
            store.clone(),
            &dir,
        )
        .refresh(&watchlist(&["AAPL"]))
        .await
        .unwrap();

        service(
            MockProvider::new().with_profile("AAPL", 175.0),
            store.clone(),
            &dir,
        )
        .refresh(&watchlist(&["AAPL"]))
        .await
        .unwrap();

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price, Some(175.0));
    }

    #[tokio::test]
    async fn test_repeated_refresh_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(MockStore::new());

        for _ in 0..2 {
            service(
                MockProvider::new()
                    .with_profile("AAPL", 150.0)
                    .with_profile("MSFT", 300.0),
                store.clone(),
                &dir,
            )
            .refresh(&watchlist(&["AAPL", "MSFT"]))
            .await
            .unwrap();
        }

        let first = store.read_all().unwrap();

        service(
            MockProvider::new()
                .with_profile("AAPL", 150.0)
                .with_profile("MSFT", 300.0),
            store.clone(),
            &dir,
        )
        .refresh(&watchlist(&["AAPL", "MSFT"]))
        .await
        .unwrap();

        assert_eq!(store.read_all().unwrap(), first);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_symbol_times_out_and_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let provider = MockProvider::new()
            .with_profile("AAPL", 150.0)
            .with_profile("SLOW", 1.0)
            .with_slow_symbol("SLOW");
        let store = Arc::new(MockStore::new());

        let summary = service(provider, store.clone(), &dir)
            .refresh(&watchlist(&["SLOW", "AAPL"]))
            .await
            .unwrap();

        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "SLOW");
        assert!(summary.failures[0].1.contains("Timeout"));
        assert_eq!(store.read_all().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_is_recorded_but_row_still_exported() {
        let dir = tempfile::tempdir().unwrap();
        let provider = MockProvider::new()
            .with_profile("AAPL", 150.0)
            .with_profile("MSFT", 300.0);
        let store = Arc::new(MockStore::failing_on("MSFT"));

        let summary = service(provider, store.clone(), &dir)
            .refresh(&watchlist(&["AAPL", "MSFT"]))
            .await
            .unwrap();

        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "MSFT");
        // The fetched row still made it into the export set.
        assert_eq!(summary.snapshots.len(), 2);
        assert_eq!(store.read_all().unwrap().len(), 1);

        let csv = std::fs::read_to_string(dir.path().join("snapshots.csv")).unwrap();
        assert!(csv.contains("MSFT"));
    }

    #[tokio::test]
    async fn test_refresh_writes_export_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let provider = MockProvider::new().with_profile("AAPL", 150.0);
        let store = Arc::new(MockStore::new());

        service(provider, store, &dir)
            .refresh(&watchlist(&["AAPL"]))
            .await
            .unwrap();

        let csv = std::fs::read_to_string(dir.path().join("snapshots.csv")).unwrap();
        assert!(csv.starts_with("symbol,company,sector"));
        assert!(csv.contains("AAPL"));
    }

    #[test]
    fn test_summary_formats_failures() {
        let summary = RefreshSummary {
            snapshots: Vec::new(),
            failures: vec![("FAIL".to_string(), "connection reset".to_string())],
        };
        assert_eq!(
            summary.summary(),
            "Refreshed 0 symbols, 1 failed: FAIL (connection reset)"
        );
    }
}
