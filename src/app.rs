// Application wiring
//
// Repositories are built once and handed to the services by constructor; the
// services are shared with the handlers through `web::Data`.

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::middleware::{json_error_handler, path_error_handler, query_error_handler};
use crate::modules::credits::{self, CreditRepository, CreditService, MySqlCreditRepository};
use crate::modules::customers::{self, CustomerRepository, CustomerService, MySqlCustomerRepository};
use crate::modules::health;

/// Services shared by every worker
#[derive(Clone)]
pub struct AppServices {
    pub customers: Arc<CustomerService>,
    pub credits: Arc<CreditService>,
}

impl AppServices {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        credit_repo: Arc<dyn CreditRepository>,
    ) -> Self {
        let customers = Arc::new(CustomerService::new(customer_repo));
        let credits = Arc::new(CreditService::new(credit_repo, customers.clone()));

        Self { customers, credits }
    }

    /// Services backed by the MySQL repositories
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlCustomerRepository::new(pool.clone())),
            Arc::new(MySqlCreditRepository::new(pool)),
        )
    }
}

/// Register services, extractor error handlers and the `/api` routes
pub fn configure_api(cfg: &mut web::ServiceConfig, services: &AppServices) {
    cfg.app_data(web::Data::new(services.customers.clone()))
        .app_data(web::Data::new(services.credits.clone()))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .configure(customers::controllers::configure)
                .configure(credits::controllers::configure),
        );
}

/// Full route table: API plus health probes
pub fn configure(cfg: &mut web::ServiceConfig, services: &AppServices) {
    configure_api(cfg, services);
    health::configure(cfg);
}
