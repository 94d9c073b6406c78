use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::components::error_page;
use astra::Response;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::DataError(msg) => render_error(500, &format!("Data Error: {msg}")),

        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

fn render_error(status: u16, message: &str) -> Response {
    html_with_status(status, error_page(status, message))
}
