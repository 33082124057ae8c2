use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory Management API",
        version = "1.0.0",
        description = r#"
# Inventory Management API

Manage products, raw materials and the bill of materials that links them,
and ask which products current stock can produce.

## Production suggestions

`GET /production/suggested` lists every product that can be made at least
once from the raw materials in stock, with the number of whole units and the
total value of that production, highest value first. Stock is read, never
reserved or consumed.

## Error Handling

Failures return a JSON body with `error`, `message`, `timestamp` and, when the
request carried one, the `request_id` echoed from `x-request-id`.
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "products", description = "Finished product catalog"),
        (name = "raw-materials", description = "Raw materials and stock levels"),
        (name = "product-raw-materials", description = "Raw materials each product needs"),
        (name = "production", description = "Production planning"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,

        crate::handlers::raw_materials::list_raw_materials,
        crate::handlers::raw_materials::get_raw_material,
        crate::handlers::raw_materials::create_raw_material,
        crate::handlers::raw_materials::update_raw_material,
        crate::handlers::raw_materials::delete_raw_material,

        crate::handlers::product_raw_materials::list_product_raw_materials,
        crate::handlers::product_raw_materials::get_product_raw_material,
        crate::handlers::product_raw_materials::list_by_product,
        crate::handlers::product_raw_materials::create_product_raw_material,
        crate::handlers::product_raw_materials::update_product_raw_material,
        crate::handlers::product_raw_materials::delete_product_raw_material,

        crate::handlers::production::suggested_production,

        crate::handlers::health::liveness_check,
        crate::handlers::health::readiness_check,
    ),
    components(
        schemas(
            crate::entities::product::Model,
            crate::entities::raw_material::Model,
            crate::services::product_raw_materials::ProductRawMaterialDetails,
            crate::services::production::ProductionSuggestion,
            crate::handlers::products::ProductRequest,
            crate::handlers::raw_materials::RawMaterialRequest,
            crate::handlers::product_raw_materials::ProductRawMaterialRequest,
            crate::handlers::product_raw_materials::EntityReference,
            crate::errors::ErrorResponse,
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_every_route() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("Inventory Management API"));
        for path in [
            "/products/{id}",
            "/rawmaterials/{id}",
            "/productrawmaterials/byProduct/{product_id}",
            "/production/suggested",
            "/health/ready",
        ] {
            assert!(json.contains(path), "missing {}", path);
        }
        assert!(json.contains("ProductionSuggestion"));
    }
}
