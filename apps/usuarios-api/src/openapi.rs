use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)
    ),
    info(
        title = "Usuarios API",
        version = "0.1.0",
        description = "User accounts with role assignment"
    )
)]
struct BaseApiDoc;

/// Base document plus every domain's paths
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        BaseApiDoc::openapi().merge_from(domain_usuarios::handlers::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_contains_usuarios_paths() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Usuarios API");
        for path in ["/usuarios/", "/usuarios/{username}", "/usuarios/hola/"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
