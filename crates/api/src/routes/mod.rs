pub mod canva;
pub mod companies;
pub mod health;
pub mod sponsorships;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET    /health                    service + db health
///
/// GET    /api/companies             list
/// POST   /api/companies             create
/// PUT    /api/companies/{id}        update (full replace)
/// DELETE /api/companies/{id}        delete (cascades sponsorships)
///
/// GET    /api/sponsorships          list
/// POST   /api/sponsorships          create
/// DELETE /api/sponsorships/{id}     delete
///
/// GET    /auth/canva                redirect to provider authorization
/// GET    /auth/canva/callback       token exchange + front-end redirect
/// GET    /api/canva/assets          authenticated asset passthrough
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/companies", companies::router())
        .nest("/api/sponsorships", sponsorships::router())
        .merge(canva::router())
}
