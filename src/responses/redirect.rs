use crate::errors::ResultResp;
use astra::{Body, ResponseBuilder};

/// 303 so a redirected POST re-fetches with GET.
pub fn redirect_response(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}

/// Redirect that also sets (or clears) the session cookie.
pub fn redirect_with_cookie(location: &str, cookie: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .header("Set-Cookie", cookie)
        .body(Body::empty())
        .unwrap();

    Ok(resp)
}
