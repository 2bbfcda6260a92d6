//! Incoming HTTP request type.

/// An incoming HTTP request as seen by a handler.
///
/// Every route is a `GET` without path parameters, so the query string is
/// all a handler gets.
pub struct Request {
    query: Option<String>,
}

impl Request {
    pub(crate) fn from_parts(parts: &http::request::Parts) -> Self {
        Self { query: parts.uri.query().map(str::to_owned) }
    }

    /// First value of a query parameter, percent-decoded.
    ///
    /// For `/people?page=2&page=3`, `req.query("page")` returns `Some("2")`.
    pub fn query(&self, key: &str) -> Option<String> {
        let raw = self.query.as_deref()?;
        url::form_urlencoded::parse(raw.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

#[cfg(test)]
pub(crate) fn request(uri: &str) -> Request {
    let (parts, ()) = http::Request::get(uri).body(()).unwrap().into_parts();
    Request::from_parts(&parts)
}
