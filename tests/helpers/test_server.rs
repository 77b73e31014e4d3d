// Test Application Helpers
//
// Wires the real services and controllers over the in-memory store with a
// fixed clock. Use with actix_web::test::init_service.

use std::sync::Arc;

use credit_system::app::AppServices;
use credit_system::core::FixedClock;
use credit_system::credits::CreditService;
use credit_system::customers::CustomerService;

use super::in_memory::InMemoryStore;
use super::test_data::TestDataFactory;

/// Services over `store`, with "today" pinned to `TestDataFactory::today()`
pub fn test_services(store: &Arc<InMemoryStore>) -> AppServices {
    let customers = Arc::new(CustomerService::new(store.clone()));
    let credits = Arc::new(
        CreditService::new(store.clone(), customers.clone())
            .with_clock(Arc::new(FixedClock(TestDataFactory::today()))),
    );

    AppServices { customers, credits }
}
