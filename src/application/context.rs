//! # Bot Context
//!
//! Everything a command handler needs: configuration, one client per remote
//! service (sharing a single HTTP connection pool) and the package ACL cache.

use crate::application::acl::AclCache;
use crate::application::stats::SymbolTable;
use crate::domain::config::AppConfig;
use crate::domain::error::ServiceResult;
use crate::infrastructure::badges::BadgesClient;
use crate::infrastructure::datagrepper::DatagrepperClient;
use crate::infrastructure::fas::FasClient;
use crate::infrastructure::fedocal::FedocalClient;
use crate::infrastructure::http;
use crate::infrastructure::pkgdb::PkgdbClient;

pub struct BotContext {
    pub config: AppConfig,
    pub fas: FasClient,
    pub pkgdb: PkgdbClient,
    pub fedocal: FedocalClient,
    pub badges: BadgesClient,
    pub datagrepper: DatagrepperClient,
    pub acls: AclCache,
    pub symbols: SymbolTable,
}

impl BotContext {
    /// Builds the clients. The ACL cache starts empty; see [`BotContext::load_acls`].
    pub fn new(config: AppConfig) -> ServiceResult<Self> {
        let client = http::build_client(config.commands.timeout_secs)?;
        let services = &config.services;

        Ok(Self {
            fas: FasClient::new(client.clone(), &services.fas),
            pkgdb: PkgdbClient::new(client.clone(), &services.pkgdb),
            fedocal: FedocalClient::new(client.clone(), &services.calendar),
            badges: BadgesClient::new(client.clone(), &services.badges),
            datagrepper: DatagrepperClient::new(client, &services.datagrepper),
            acls: AclCache::new(),
            symbols: SymbolTable::standard(),
            config,
        })
    }

    /// Downloads the package owners dump. A failure is logged and leaves the cache empty,
    /// so `what`/`whoowns` answer "No such package exists." until the next refresh.
    pub async fn load_acls(&self) {
        tracing::info!("{}", crate::strings::logs::ACL_DOWNLOADING);
        match self.acls.refresh(&self.pkgdb).await {
            Ok(count) => tracing::info!("{}", crate::strings::logs::acl_loaded(count)),
            Err(e) => tracing::warn!("{}", crate::strings::logs::acl_failed(&e.to_string())),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.config.commands.prefix
    }
}
