use std::sync::Arc;

use crate::account::application::ports::incoming::AccountService;
use crate::account::application::services::AccountLifecycleService;
use crate::gender::application::ports::incoming::GenderService;
use crate::gender::application::services::GenderReferenceService;
use crate::tests::support::{fake_hasher::FakeHasher, in_memory::InMemoryStore};
use crate::AppState;
use actix_web::web;

/// Builds an [`AppState`] whose services share one in-memory store unless
/// a test swaps one out.
pub struct TestAppStateBuilder {
    store: InMemoryStore,
    account_service: Option<Arc<dyn AccountService + Send + Sync>>,
    gender_service: Option<Arc<dyn GenderService + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: InMemoryStore::new(),
            account_service: None,
            gender_service: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_account_service(
        mut self,
        service: impl AccountService + Send + Sync + 'static,
    ) -> Self {
        self.account_service = Some(Arc::new(service));
        self
    }

    pub fn with_gender_service(
        mut self,
        service: impl GenderService + Send + Sync + 'static,
    ) -> Self {
        self.gender_service = Some(Arc::new(service));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store = self.store;
        let account_service = self.account_service.unwrap_or_else(|| {
            Arc::new(AccountLifecycleService::new(
                store.clone(),
                Arc::new(FakeHasher),
            ))
        });
        let gender_service = self
            .gender_service
            .unwrap_or_else(|| Arc::new(GenderReferenceService::new(store.clone())));

        web::Data::new(AppState {
            account_service,
            gender_service,
        })
    }
}
