// CustomerController
//
// Endpoints:
// - POST   /api/customers                  - Register a customer
// - GET    /api/customers/{id}             - Get a customer
// - PATCH  /api/customers?customerId=ID    - Update profile fields
// - DELETE /api/customers/{id}             - Delete a customer and its credits

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::Result;
use crate::modules::customers::models::{CustomerRequest, CustomerUpdateRequest, CustomerView};
use crate::modules::customers::services::CustomerService;

/// Query string carrying the customer id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdQuery {
    pub customer_id: i64,
}

/// POST /api/customers
pub async fn save_customer(
    service: web::Data<Arc<CustomerService>>,
    request: web::Json<CustomerRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let customer = service.save(request.into_new_customer()).await?;

    Ok(HttpResponse::Created().json(CustomerView::from(customer)))
}

/// GET /api/customers/{id}
pub async fn find_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let customer = service.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CustomerView::from(customer)))
}

/// PATCH /api/customers?customerId=ID
pub async fn update_customer(
    service: web::Data<Arc<CustomerService>>,
    query: web::Query<CustomerIdQuery>,
    request: web::Json<CustomerUpdateRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let customer = service
        .update(query.customer_id, request.into_update())
        .await?;

    Ok(HttpResponse::Ok().json(CustomerView::from(customer)))
}

/// DELETE /api/customers/{id}
pub async fn delete_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    service.delete(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::post().to(save_customer))
            .route("", web::patch().to(update_customer))
            .route("/{id}", web::get().to(find_customer))
            .route("/{id}", web::delete().to(delete_customer)),
    );
}
