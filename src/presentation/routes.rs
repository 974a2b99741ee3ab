//! Route definitions and request handling.
//!
//! The route layer owns upload validation and HTTP status mapping; all scan
//! and aggregation semantics live in the application layer.

use crate::application::use_cases::{ApplicationQueries, CreateApplicationUseCase};
use crate::ports::outbound::VulnerabilityRepository;
use crate::presentation::models::*;
use crate::shared::ScanServiceError;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// The repository the live router is wired with. Tests swap in mocks
/// through the same object-safe port.
pub type DynVulnerabilityRepository = Arc<dyn VulnerabilityRepository>;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub create_application: Arc<CreateApplicationUseCase<DynVulnerabilityRepository>>,
    pub queries: Arc<ApplicationQueries>,
    pub project_name: String,
}

/// HTTP-facing error: status code plus a `{"detail": ...}` body.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl From<ScanServiceError> for ApiError {
    fn from(error: ScanServiceError) -> Self {
        let status = match &error {
            ScanServiceError::DuplicateApplication { .. } => StatusCode::CONFLICT,
            ScanServiceError::ApplicationNotFound { .. }
            | ScanServiceError::DependencyNotFound { .. } => StatusCode::NOT_FOUND,
            ScanServiceError::ManifestUnreadable { .. }
            | ScanServiceError::InvalidUpload { .. } => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            detail: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(DetailResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(readiness_check))
        .route("/v1/applications", post(create_application))
        .route("/v1/applications", get(list_applications))
        .route(
            "/v1/applications/{name}/dependencies",
            get(get_application_dependencies),
        )
        .route("/v1/dependencies", get(list_dependencies))
        .route("/v1/dependencies/{name}/{version}", get(get_dependency))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        ready: state.project_name.clone(),
    })
}

/// Fields expected in the create-application multipart form.
struct CreateApplicationForm {
    name: String,
    description: Option<String>,
    manifest_text: String,
}

/// Extracts and validates the multipart form: `name`, optional
/// `description`, and a `requirements_file` whose declared content type
/// must be text/plain and whose bytes must decode as UTF-8.
async fn read_create_form(mut multipart: Multipart) -> Result<CreateApplicationForm, ApiError> {
    let mut name = None;
    let mut description = None;
    let mut manifest_text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart request: {}", e)))?
    {
        match field.name() {
            Some("name") => {
                name = Some(field.text().await.map_err(|e| {
                    ApiError::bad_request(format!("Unreadable form field 'name': {}", e))
                })?);
            }
            Some("description") => {
                description = Some(field.text().await.map_err(|e| {
                    ApiError::bad_request(format!("Unreadable form field 'description': {}", e))
                })?);
            }
            Some("requirements_file") => {
                if field.content_type() != Some("text/plain") {
                    return Err(ScanServiceError::InvalidUpload {
                        reason: "Invalid file type. Only text files are allowed.".to_string(),
                    }
                    .into());
                }
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::bad_request(format!("Unreadable requirements file: {}", e))
                })?;
                let text = String::from_utf8(bytes.to_vec()).map_err(|e| {
                    ApiError::from(ScanServiceError::ManifestUnreadable {
                        details: e.to_string(),
                    })
                })?;
                manifest_text = Some(text);
            }
            // Unknown fields are ignored, matching lenient form handling.
            _ => {}
        }
    }

    let name = name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing form field 'name'."))?;
    let manifest_text = manifest_text
        .ok_or_else(|| ApiError::bad_request("Missing form field 'requirements_file'."))?;

    Ok(CreateApplicationForm {
        name,
        description,
        manifest_text,
    })
}

async fn create_application(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CreateApplicationResponse>), ApiError> {
    let form = read_create_form(multipart).await?;
    tracing::info!(application = %form.name, "received request to create application");

    let application = state
        .create_application
        .execute(form.name, form.description, &form.manifest_text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateApplicationResponse {
            message: "Application created successfully.".to_string(),
            name: application.name().to_string(),
            description: application.description().map(str::to_string),
        }),
    ))
}

async fn list_applications(State(state): State<AppState>) -> Json<ApplicationListResponse> {
    let applications: Vec<ApplicationSummaryDto> = state
        .queries
        .list_applications()
        .into_iter()
        .map(ApplicationSummaryDto::from)
        .collect();

    Json(ApplicationListResponse {
        total_applications: applications.len(),
        applications,
    })
}

async fn get_application_dependencies(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApplicationDependenciesResponse>, ApiError> {
    let dependencies = state.queries.application_dependencies(&name)?;

    // Summary view: only packages that actually carry vulnerabilities.
    let vulnerable_packages = dependencies
        .packages
        .into_iter()
        .filter(|package| package.is_vulnerable)
        .map(PackageSummaryDto::from)
        .collect();

    Ok(Json(ApplicationDependenciesResponse {
        application_name: dependencies.application_name,
        description: dependencies.description,
        vulnerable_packages,
    }))
}

async fn list_dependencies(State(state): State<AppState>) -> Json<DependencyListResponse> {
    let dependencies: Vec<DependencyEntryDto> = state
        .queries
        .list_dependencies()
        .into_iter()
        .map(DependencyEntryDto::from)
        .collect();

    Json(DependencyListResponse {
        total_dependencies: dependencies.len(),
        dependencies,
    })
}

async fn get_dependency(
    State(state): State<AppState>,
    Path((name, version)): Path<(String, String)>,
) -> Result<Json<DependencyDetailResponse>, ApiError> {
    let detail = state.queries.get_dependency(&name, &version)?;
    Ok(Json(DependencyDetailResponse::from(detail)))
}
