//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod state;
pub mod summaries;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

/// Register every endpoint and the JSON extractor configuration.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use loginapp::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .service(health::root)
        .service(health::live)
        .service(health::ready)
        .service(users::signup)
        .service(users::login)
        .service(users::profile)
        .service(summaries::summarize_commits);
}
