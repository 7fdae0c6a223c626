//! Common test utilities and a shared set of scope stores

#![allow(dead_code)]

use settings_repository::{InMemoryScopeStores, SettingScope, SettingsRepository};

/// Stores for one rendered page: a component placed on a page of a site
#[derive(Debug, Clone)]
pub struct TestContext {
    pub stores: InMemoryScopeStores,
    pub repo: SettingsRepository,
}

impl TestContext {
    /// Create a context where every scope has an empty store
    pub fn new() -> Self {
        let stores = InMemoryScopeStores::new();
        let repo = SettingsRepository::new(stores.scope_stores());
        Self { stores, repo }
    }

    /// Raw string stored for `key` in the store of `scope`
    pub fn raw(&self, scope: SettingScope, key: &str) -> Option<String> {
        self.stores.store(scope).snapshot().get(key).cloned()
    }

    /// Print the content of every store
    pub fn print_state(&self, context: &str) {
        println!("\n========== Scope Stores: {} ==========", context);
        for scope in SettingScope::ALL {
            let snapshot = self.stores.store(scope).snapshot();
            if snapshot.is_empty() {
                println!("  {}: (empty)", scope);
            } else {
                let mut keys: Vec<_> = snapshot.into_iter().collect();
                keys.sort();
                for (key, value) in keys {
                    println!("  {}: {} = {:?}", scope, key, value);
                }
            }
        }
        println!("==========================================\n");
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Route repository traces to the test output when RUST_LOG is set
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
