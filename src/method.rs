//! HTTP method as a typed enum.
//!
//! Covers the RFC 9110 methods. Anything else (WebDAV verbs, custom tokens)
//! is answered with `405 Method Not Allowed` before routing.

/// A known HTTP method.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

/// Maps hyper's open-ended method type onto the closed set above.
impl TryFrom<&http::Method> for Method {
    type Error = ();

    fn try_from(m: &http::Method) -> Result<Self, Self::Error> {
        match *m {
            http::Method::CONNECT => Ok(Self::Connect),
            http::Method::DELETE => Ok(Self::Delete),
            http::Method::GET => Ok(Self::Get),
            http::Method::HEAD => Ok(Self::Head),
            http::Method::OPTIONS => Ok(Self::Options),
            http::Method::PATCH => Ok(Self::Patch),
            http::Method::POST => Ok(Self::Post),
            http::Method::PUT => Ok(Self::Put),
            http::Method::TRACE => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}
