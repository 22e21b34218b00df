//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::auth_handler;
use crate::domain::{SignUpRequest, UserResponse};
use crate::types::ErrorDetail;

/// OpenAPI documentation for the GlobalSource Connect API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GlobalSource Connect API",
        version = "0.1.0",
        description = "Sign-up API behind the GlobalSource Connect landing page",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::sign_up,
    ),
    components(
        schemas(
            SignUpRequest,
            UserResponse,
            ErrorDetail,
        )
    ),
    tags(
        (name = "Authentication", description = "Account sign-up endpoints")
    )
)]
pub struct ApiDoc;
