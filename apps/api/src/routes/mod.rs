pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sections
        .route(
            "/api/v1/profile",
            get(handlers::handle_get_profile).patch(handlers::handle_update_profile),
        )
        .route(
            "/api/v1/jobs",
            get(handlers::handle_list_jobs).post(handlers::handle_add_job),
        )
        .route(
            "/api/v1/jobs/:id",
            patch(handlers::handle_update_job).delete(handlers::handle_remove_job),
        )
        .route(
            "/api/v1/education",
            get(handlers::handle_list_education).post(handlers::handle_add_education),
        )
        .route(
            "/api/v1/education/:id",
            patch(handlers::handle_update_education).delete(handlers::handle_remove_education),
        )
        .route(
            "/api/v1/skills",
            get(handlers::handle_list_skills)
                .post(handlers::handle_add_skill)
                .delete(handlers::handle_remove_skill),
        )
        .route(
            "/api/v1/qas",
            get(handlers::handle_list_qas).post(handlers::handle_add_qa),
        )
        .route(
            "/api/v1/qas/:id",
            patch(handlers::handle_update_qa).delete(handlers::handle_remove_qa),
        )
        .route(
            "/api/v1/suggestions/questions",
            get(handlers::handle_list_suggestions).post(handlers::handle_add_suggestion),
        )
        // Copy text
        .route("/api/v1/copy/profile", get(handlers::handle_copy_profile))
        .route("/api/v1/copy/jobs", get(handlers::handle_copy_jobs))
        .route("/api/v1/copy/jobs/:id", get(handlers::handle_copy_job))
        .route("/api/v1/copy/education", get(handlers::handle_copy_education))
        .route(
            "/api/v1/copy/education/:id",
            get(handlers::handle_copy_education_entry),
        )
        .route("/api/v1/copy/skills", get(handlers::handle_copy_skills))
        .route("/api/v1/copy/qas", get(handlers::handle_copy_qas))
        .route(
            "/api/v1/copy/qas/:id/answer",
            get(handlers::handle_copy_answer),
        )
        // Derived views
        .route("/api/v1/completion", get(handlers::handle_completion))
        .route("/api/v1/search", get(handlers::handle_search))
        // Export / import
        .route("/api/v1/export", get(handlers::handle_export))
        .route("/api/v1/import", post(handlers::handle_import))
        .with_state(state)
}
