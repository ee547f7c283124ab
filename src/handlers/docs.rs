//! API documentation.
//!
//! The OpenAPI document is generated from the handler and model types.
//! It is served at `/swagger/doc.json` next to the Swagger UI under `/swagger/`.

use crate::handlers::{health, sign_in, transactions, virtual_cards};
use crate::models::{
    sign_in::{SignInRequest, SignInResponse},
    transaction::Transaction,
    virtual_card::VirtualCard,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/swagger/doc.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Extend API relay",
        description = "Relays authenticated requests to the Extend card-management API"
    ),
    paths(
        sign_in::sign_in,
        virtual_cards::list_virtual_cards,
        virtual_cards::list_virtual_card_transactions,
        transactions::get_transaction,
        health::health_check,
    ),
    components(schemas(
        SignInRequest,
        SignInResponse,
        VirtualCard,
        Transaction,
        health::HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Swagger UI under `/swagger/`, backed by [`ApiDoc`].
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger").url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for route in [
            "/signin",
            "/virtualcards",
            "/virtualcards/{id}/transactions",
            "/transactions/{id}",
            "/api/health",
        ] {
            assert!(paths.contains_key(route), "missing {}", route);
        }
        assert!(doc["paths"]["/signin"]["post"].is_object());
    }

    #[test]
    fn schemas_use_wire_field_names() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let schemas = &doc["components"]["schemas"];
        assert!(schemas["VirtualCard"]["properties"]["displayName"].is_object());
        assert!(schemas["Transaction"]["properties"]["merchantName"].is_object());
        assert!(schemas["SignInResponse"]["properties"]["token"].is_object());
    }
}
