// CreditController
//
// Endpoints:
// - POST /api/credits                              - Apply for a credit
// - GET  /api/credits?customerId=ID                - List credits of a customer
// - GET  /api/credits/{creditCode}?customerId=ID   - Credit detail, owner only

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::credits::models::{CreditRequest, CreditView, CreditViewList};
use crate::modules::credits::services::CreditService;

/// Query string identifying the requesting customer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerQuery {
    pub customer_id: i64,
}

/// POST /api/credits
pub async fn save_credit(
    service: web::Data<Arc<CreditService>>,
    request: web::Json<CreditRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate(service.today())?;

    let (credit, customer) = service.create_with_owner(request.into_new_credit()).await?;

    Ok(HttpResponse::Created().json(CreditView::new(&credit, &customer)))
}

/// GET /api/credits?customerId=ID
pub async fn find_all_by_customer_id(
    service: web::Data<Arc<CreditService>>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse> {
    let credits: Vec<CreditViewList> = service
        .find_all_by_customer(query.customer_id)
        .await?
        .into_iter()
        .map(CreditViewList::from)
        .collect();

    Ok(HttpResponse::Ok().json(credits))
}

/// GET /api/credits/{creditCode}?customerId=ID
pub async fn find_by_credit_code(
    service: web::Data<Arc<CreditService>>,
    path: web::Path<Uuid>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse> {
    let credit = service
        .find_by_credit_code(query.customer_id, path.into_inner())
        .await?;
    let customer = service.owner_of(&credit).await?;

    Ok(HttpResponse::Ok().json(CreditView::new(&credit, &customer)))
}

/// Configure credit routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/credits")
            .route("", web::post().to(save_credit))
            .route("", web::get().to(find_all_by_customer_id))
            .route("/{credit_code}", web::get().to(find_by_credit_code)),
    );
}
