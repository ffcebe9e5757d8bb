//! OpenAPI documentation configuration.
//!
//! Aggregates every annotated handler into one document, rendered at
//! `/docs` when the server is running.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers;
use crate::api::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::register,
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,
        handlers::employees::list_employees,
        handlers::employees::create_employee,
        handlers::employees::get_employee,
        handlers::employees::update_employee,
        handlers::employees::delete_employee,
        handlers::roles::list_roles,
        handlers::roles::create_role,
        handlers::roles::get_role,
        handlers::roles::update_role,
        handlers::roles::delete_role,
        handlers::products::list_products,
        handlers::products::create_product,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::products::list_product_types,
        handlers::reports::purchase_report,
        handlers::reports::stock_report,
        handlers::reports::stock_overview,
        handlers::reports::purchase_statistics,
    ),
    components(schemas(
        models::auth::LoginRequest,
        models::auth::RefreshRequest,
        models::auth::TokenResponse,
        models::auth::RegisterRequest,
        models::clients::ClientCreate,
        models::clients::ClientUpdate,
        models::clients::ClientResponse,
        models::employees::EmployeeCreate,
        models::employees::EmployeeUpdate,
        models::employees::EmployeeResponse,
        models::roles::RoleCreate,
        models::roles::RoleUpdate,
        models::roles::RoleResponse,
        models::products::ProductCreate,
        models::products::ProductUpdate,
        models::products::ProductResponse,
        models::products::ProductInfoResponse,
        models::products::ProductTypeResponse,
        models::reports::PurchaseInfo,
        models::reports::StockInfo,
        models::reports::PurchaseStatistics,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "authentication", description = "Token issuance, refresh, and client registration"),
        (name = "clients", description = "Client record management"),
        (name = "employees", description = "Employee record management"),
        (name = "roles", description = "Employee role management"),
        (name = "products", description = "Product catalog management"),
        (name = "reports", description = "Purchase and stock reporting"),
    ),
    info(
        title = "apotheca",
        description = "Pharmacy management backend API",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}
