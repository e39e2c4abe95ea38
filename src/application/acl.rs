//! # Package ACL Cache
//!
//! Keeps the pkgdb bugzilla dump in memory. `what` and `whoowns` answer from here
//! instead of hitting pkgdb on every request.

use crate::domain::error::ServiceResult;
use crate::domain::types::BugzillaAcls;
use crate::infrastructure::pkgdb::PkgdbClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const MAIN_PRODUCT: &str = "Fedora";

/// Owner of a package in the main product, plus differing owners elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Ownership {
    pub owner: String,
    /// `(owner, product)` pairs, products in sorted order.
    pub others: Vec<(String, String)>,
}

#[derive(Clone, Default)]
pub struct AclCache {
    acls: Arc<RwLock<BugzillaAcls>>,
}

impl AclCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_acls(acls: BugzillaAcls) -> Self {
        Self {
            acls: Arc::new(RwLock::new(acls)),
        }
    }

    pub async fn replace(&self, acls: BugzillaAcls) {
        *self.acls.write().await = acls;
    }

    /// Downloads a fresh dump. On failure the previous contents are kept.
    pub async fn refresh(&self, pkgdb: &PkgdbClient) -> ServiceResult<usize> {
        let acls = pkgdb.bugzilla_acls().await?;
        let count = acls.get(MAIN_PRODUCT).map(|p| p.len()).unwrap_or(0);
        self.replace(acls).await;
        Ok(count)
    }

    pub async fn is_empty(&self) -> bool {
        self.acls.read().await.is_empty()
    }

    pub async fn summary(&self, package: &str) -> Option<String> {
        let acls = self.acls.read().await;
        acls.get(MAIN_PRODUCT)?
            .get(package)
            .map(|entry| {
                entry
                    .summary
                    .clone()
                    .unwrap_or_else(|| crate::strings::messages::NONE.to_string())
            })
    }

    pub async fn owners(&self, package: &str) -> Option<Ownership> {
        let acls = self.acls.read().await;
        let owner = acls.get(MAIN_PRODUCT)?.get(package)?.owner.clone();

        let others = acls
            .iter()
            .filter(|(product, _)| product.as_str() != MAIN_PRODUCT)
            .filter_map(|(product, packages)| {
                let entry = packages.get(package)?;
                (entry.owner != owner).then(|| (entry.owner.clone(), product.clone()))
            })
            .collect();

        Some(Ownership { owner, others })
    }

    /// Spawns a background task that reloads the dump every `every`.
    pub fn spawn_refresh(&self, pkgdb: PkgdbClient, every: Duration) -> tokio::task::JoinHandle<()> {
        let cache = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            // The first tick fires immediately and start-up already loaded the dump.
            interval.tick().await;
            loop {
                interval.tick().await;
                match cache.refresh(&pkgdb).await {
                    Ok(count) => tracing::info!("{}", crate::strings::logs::acl_loaded(count)),
                    Err(e) => tracing::warn!("{}", crate::strings::logs::acl_failed(&e.to_string())),
                }
            }
        })
    }
}
