//! HTTP server setup module

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, model::app_state::AppState};

/// Creates and binds the API HTTP server.
///
/// All routes live under the `/api` scope; the shared state is injected into
/// every worker.
pub fn api_server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(api::route::routes())
    })
    .bind((address, port))?
    .run())
}
