use crate::catalog::Catalog;
use crate::discovery::{self, BrowseQuery, SortKey};
use crate::errors::{ResultResp, ServerError};
use crate::onboarding;
use crate::responses::html_response;
use crate::templates::pages;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

pub fn handle(mut req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(&catalog.categories)),

        ("GET", "/artists") => {
            let params = parse_query(&req);
            let query = browse_query(&params);
            let result = discovery::evaluate(&catalog.artists, &query);
            html_response(pages::artists_page(&query, &result, &catalog.categories))
        }

        ("GET", "/onboarding") => {
            html_response(pages::onboarding_page(&Default::default(), &[]))
        }

        ("POST", "/onboarding") => {
            let body = read_body(&mut req)?;
            let form = onboarding::parse_form(&body);
            let errors = onboarding::validate(&form);

            if errors.is_empty() {
                // No persistence here; submissions go to the review log.
                println!(
                    "Artist submitted: {} [{}] from {}",
                    form.name,
                    form.categories.join(", "),
                    form.location
                );
                html_response(pages::onboarding_success_page(&form.name))
            } else {
                html_response(pages::onboarding_page(&form, &errors))
            }
        }

        ("GET", "/dashboard") => html_response(pages::dashboard_page(&catalog.submissions)),

        _ => Err(ServerError::NotFound),
    }
}

/// Builds the browse query from the request's query parameters.
/// Everything is optional and everything bad falls back to the
/// default — a mangled URL still renders a page.
fn browse_query(params: &HashMap<String, String>) -> BrowseQuery {
    let mut query = BrowseQuery::default();

    if let Some(v) = params.get("search") {
        query.search = v.clone();
    }
    if let Some(v) = params.get("category") {
        query.category = v.clone();
    }
    if let Some(v) = params.get("location") {
        query.location = v.clone();
    }
    if let Some(v) = params.get("sort") {
        query.sort = SortKey::from_param(v);
    }

    let (default_min, default_max) = query.price_range();
    let min = params
        .get("min_price")
        .and_then(|v| v.parse().ok())
        .unwrap_or(default_min);
    let max = params
        .get("max_price")
        .and_then(|v| v.parse().ok())
        .unwrap_or(default_max);
    query.set_price_range(min, max);

    query
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (key, value) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(key.into_owned(), value.into_owned());
        }
    }

    map
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable request body: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|_| ServerError::BadRequest("Request body is not valid UTF-8".into()))
}
