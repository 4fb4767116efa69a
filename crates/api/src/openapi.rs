//! OpenAPI document served at `/api-docs/openapi.json` and browsed at `/swagger/`.

use folio_db::models::client::{Client, CreateClient, UpdateClient};
use folio_db::models::package::{CreatePackage, Package, UpdatePackage};
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::{client, package, project};
use crate::response::MessageResponse;
use crate::routes::health::{self, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        description = "Portfolio backend: projects, packages and clients."
    ),
    paths(
        health::health_check,
        project::create,
        project::list,
        project::get_by_id,
        project::update,
        project::delete,
        package::create,
        package::list,
        package::get_by_id,
        package::update,
        package::delete,
        client::create,
        client::list,
        client::get_by_id,
        client::update,
        client::delete,
    ),
    components(schemas(
        Project,
        CreateProject,
        UpdateProject,
        Package,
        CreatePackage,
        UpdatePackage,
        Client,
        CreateClient,
        UpdateClient,
        MessageResponse,
        ErrorBody,
        HealthResponse,
    )),
    tags(
        (name = "projects", description = "Portfolio projects"),
        (name = "packages", description = "Published packages"),
        (name = "clients", description = "Clients worked with"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/api/projects",
            "/api/projects/new",
            "/api/projects/{id}",
            "/api/packages",
            "/api/packages/new",
            "/api/packages/{id}",
            "/api/clients",
            "/api/clients/new",
            "/api/clients/{id}",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }

    #[test]
    fn document_registers_record_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        for name in ["Project", "Package", "Client", "ErrorBody"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
