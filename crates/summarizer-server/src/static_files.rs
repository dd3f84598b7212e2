use axum::Router;
use summarizer_config::StaticFilesConfig;
use tower_http::services::{ServeDir, ServeFile};

/// Serve the browser frontend
///
/// Assets are available under the configured mount and at the root. Each
/// configured page gets its own route. Any GET path that matches no route
/// and no file gets the index page, so the frontend can handle its own
/// routing.
pub fn static_router(config: &StaticFilesConfig) -> Router {
    let index = ServeFile::new(config.index_path());

    let router = config
        .page_paths()
        .fold(Router::new(), |router, (route, file)| router.route_service(route, ServeFile::new(file)));

    router
        .nest_service(&config.mount, ServeDir::new(&config.dir))
        .fallback_service(ServeDir::new(&config.dir).fallback(index))
}
