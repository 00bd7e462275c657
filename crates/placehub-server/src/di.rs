//! Dependency injection module using Shaku.
//!
//! A single [`PlacehubModule`] wires the whole stack: the lazily
//! connecting database manager, the PostgreSQL stores, the cache store,
//! password hashing, and the business services. When Redis is disabled
//! the cache component is overridden with an in-process store.

use deadpool_redis::Runtime;
use placehub_cache::{CacheStore, MemoryStore, RedisStore, RedisStoreParameters};
use placehub_config::AppConfig;
use placehub_core::{PlacehubError, PlacehubResult};
use placehub_db::{
    Database, DatabaseParameters, PgCompanyStore, PgJobStore, PgNoticeStore, PgPermissionStore,
    PgRolePermissionStore, PgRoleStore, PgSessionStore, PgUserStore,
};
use placehub_security::{PasswordHasher, PasswordHasherParameters};
use placehub_service::{
    AuthServiceImpl, AuthServiceImplParameters, CacheWarmerImpl, CompanyServiceImpl,
    JobServiceImpl, NoticeServiceImpl, PermissionServiceImpl, RolePermissionServiceImpl,
    RoleServiceImpl, UserServiceImpl,
};
use shaku::module;
use std::sync::Arc;
use tracing::info;

module! {
    pub PlacehubModule {
        components = [
            Database,
            RedisStore,
            PasswordHasher,
            PgUserStore,
            PgSessionStore,
            PgRoleStore,
            PgPermissionStore,
            PgRolePermissionStore,
            PgCompanyStore,
            PgJobStore,
            PgNoticeStore,
            AuthServiceImpl,
            UserServiceImpl,
            RoleServiceImpl,
            PermissionServiceImpl,
            RolePermissionServiceImpl,
            CompanyServiceImpl,
            JobServiceImpl,
            NoticeServiceImpl,
            CacheWarmerImpl,
        ],
        providers = [],
    }
}

/// Builds the application module from configuration.
///
/// No connection is made here. The database pool connects on first use
/// and the Redis pool hands out connections lazily.
pub fn build_module(config: &AppConfig) -> PlacehubResult<Arc<PlacehubModule>> {
    let mut builder = PlacehubModule::builder()
        .with_component_parameters::<Database>(DatabaseParameters {
            config: config.database.clone(),
        })
        .with_component_parameters::<PasswordHasher>(PasswordHasherParameters {
            argon2: PasswordHasher::with_cost(config.security.password_hash_cost).argon2_arc(),
        })
        .with_component_parameters::<AuthServiceImpl>(AuthServiceImplParameters {
            session_ttl_secs: config.security.session_ttl_secs,
        });

    if config.redis.enabled {
        let pool = deadpool_redis::Config::from_url(&config.redis.url)
            .builder()
            .map_err(|e| PlacehubError::cache(format!("Failed to configure Redis pool: {}", e)))?
            .max_size(config.redis.pool_size as usize)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| PlacehubError::cache(format!("Failed to create Redis pool: {}", e)))?;

        builder = builder
            .with_component_parameters::<RedisStore>(RedisStoreParameters { pool: Some(pool) });
    } else {
        info!("Redis disabled, caching in process memory");
        builder = builder.with_component_override::<dyn CacheStore>(Box::new(MemoryStore::new()));
    }

    Ok(Arc::new(builder.build()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use placehub_db::{
        CompanyStore, DatabaseInterface, JobStore, NoticeStore, PermissionStore,
        RolePermissionStore, RoleStore, SessionStore, UserStore,
    };
    use placehub_security::PasswordHasherInterface;
    use placehub_service::{
        AuthService, CacheWarmer, CompanyService, JobService, NoticeService, PermissionService,
        RolePermissionService, RoleService, UserService,
    };
    use shaku::HasComponent;

    #[test]
    fn test_module_provides_every_interface() {
        fn _assert_has_database<T: HasComponent<dyn DatabaseInterface>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheStore>>() {}
        fn _assert_has_password_hasher<T: HasComponent<dyn PasswordHasherInterface>>() {}
        fn _assert_has_user_store<T: HasComponent<dyn UserStore>>() {}
        fn _assert_has_session_store<T: HasComponent<dyn SessionStore>>() {}
        fn _assert_has_role_store<T: HasComponent<dyn RoleStore>>() {}
        fn _assert_has_permission_store<T: HasComponent<dyn PermissionStore>>() {}
        fn _assert_has_role_permission_store<T: HasComponent<dyn RolePermissionStore>>() {}
        fn _assert_has_company_store<T: HasComponent<dyn CompanyStore>>() {}
        fn _assert_has_job_store<T: HasComponent<dyn JobStore>>() {}
        fn _assert_has_notice_store<T: HasComponent<dyn NoticeStore>>() {}
        fn _assert_has_auth_service<T: HasComponent<dyn AuthService>>() {}
        fn _assert_has_user_service<T: HasComponent<dyn UserService>>() {}
        fn _assert_has_role_service<T: HasComponent<dyn RoleService>>() {}
        fn _assert_has_permission_service<T: HasComponent<dyn PermissionService>>() {}
        fn _assert_has_role_permission_service<T: HasComponent<dyn RolePermissionService>>() {}
        fn _assert_has_company_service<T: HasComponent<dyn CompanyService>>() {}
        fn _assert_has_job_service<T: HasComponent<dyn JobService>>() {}
        fn _assert_has_notice_service<T: HasComponent<dyn NoticeService>>() {}
        fn _assert_has_cache_warmer<T: HasComponent<dyn CacheWarmer>>() {}

        _assert_has_database::<PlacehubModule>();
        _assert_has_cache::<PlacehubModule>();
        _assert_has_password_hasher::<PlacehubModule>();
        _assert_has_user_store::<PlacehubModule>();
        _assert_has_session_store::<PlacehubModule>();
        _assert_has_role_store::<PlacehubModule>();
        _assert_has_permission_store::<PlacehubModule>();
        _assert_has_role_permission_store::<PlacehubModule>();
        _assert_has_company_store::<PlacehubModule>();
        _assert_has_job_store::<PlacehubModule>();
        _assert_has_notice_store::<PlacehubModule>();
        _assert_has_auth_service::<PlacehubModule>();
        _assert_has_user_service::<PlacehubModule>();
        _assert_has_role_service::<PlacehubModule>();
        _assert_has_permission_service::<PlacehubModule>();
        _assert_has_role_permission_service::<PlacehubModule>();
        _assert_has_company_service::<PlacehubModule>();
        _assert_has_job_service::<PlacehubModule>();
        _assert_has_notice_service::<PlacehubModule>();
        _assert_has_cache_warmer::<PlacehubModule>();
    }

    #[test]
    fn test_build_module_with_memory_cache() {
        let mut config = AppConfig::default();
        config.redis.enabled = false;

        let module = build_module(&config).expect("Failed to build module");
        let auth: Arc<dyn AuthService> = module.resolve();
        let warmer: Arc<dyn CacheWarmer> = module.resolve();
        drop((auth, warmer));
    }

    #[test]
    fn test_build_module_with_redis_pool() {
        // Pool creation is lazy; no Redis server is needed here.
        let config = AppConfig::default();

        let module = build_module(&config).expect("Failed to build module");
        let cache: Arc<dyn CacheStore> = module.resolve();
        drop(cache);
    }
}
