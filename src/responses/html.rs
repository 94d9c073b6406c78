use crate::errors::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    Ok(html_with_status(200, markup))
}

pub fn html_with_status(status: u16, markup: Markup) -> Response {
    let body = markup.into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}
