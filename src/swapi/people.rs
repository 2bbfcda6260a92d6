use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ProxyError;

/// One page of `GET {SWAPI_URL}/people` as far as the proxy cares.
///
/// People stay raw JSON so every field passes through untouched.
#[derive(Debug, Deserialize)]
pub struct PeoplePage {
    pub results: Vec<Value>,
}

/// The envelope returned by `GET /people`.
#[derive(Debug, Serialize)]
pub struct PeopleSortedByName {
    pub people_sorted_by_name: Vec<Value>,
}

/// Parses the optional `page` query parameter. Absent means page 1.
pub fn parse_page(raw: Option<&str>) -> Result<u64, ProxyError> {
    let Some(raw) = raw else { return Ok(1) };
    match raw.parse::<u64>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(ProxyError::InvalidPage(raw.to_owned())),
    }
}

/// Sorts people by their `name`, ascending by code point.
///
/// The sort is stable, so people sharing a name keep their upstream order.
/// Every element must carry a string `name`.
pub fn sort_by_name(people: Vec<Value>) -> Result<Vec<Value>, ProxyError> {
    let mut keyed = people
        .into_iter()
        .enumerate()
        .map(|(index, person)| -> Result<(String, Value), ProxyError> {
            let name = person
                .get("name")
                .and_then(Value::as_str)
                .ok_or(ProxyError::MissingName { index })?
                .to_owned();
            Ok((name, person))
        })
        .collect::<Result<Vec<_>, ProxyError>>()?;

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    Ok(keyed.into_iter().map(|(_, person)| person).collect())
}
