use crate::digest::classify::END_MARKER;
use crate::digest::types::{CorrelationId, PendingRequest, RequestDate, ResponseEnd};

// Token positions after splitting on single spaces:
//   [id] Started GET "/path?q" for 1.2.3.4 at 2020-01-01 00:00:00 +0000
//   [id] Completed 200 OK in 5ms
const METHOD_TOKEN: usize = 2;
const URL_TOKEN: usize = 3;
const ORIGIN_TOKEN: usize = 5;
const DATE_TOKEN: usize = 7;
const TIME_TOKEN: usize = 8;
const ZONE_TOKEN: usize = 9;
const STATUS_TOKEN: usize = 2;

/// Parses the fixed-position fields of a start line.
///
/// Returns `None` when the method or URL token is missing. Origin and date are
/// optional. The date is kept as written, whatever its zone notation.
pub fn parse_request_start(id: &str, line: &str) -> Option<PendingRequest> {
    let tokens: Vec<&str> = line.split(' ').collect();

    let request_type = tokens.get(METHOD_TOKEN).filter(|t| !t.is_empty())?;
    let raw_url = tokens.get(URL_TOKEN)?.replace('"', "");
    if raw_url.is_empty() {
        return None;
    }

    let (request_resource, request_resource_query) = normalize_resource(&raw_url);

    let request_date = match (
        tokens.get(DATE_TOKEN),
        tokens.get(TIME_TOKEN),
        tokens.get(ZONE_TOKEN),
    ) {
        (Some(date), Some(time), Some(zone)) => Some(join_request_date(date, time, zone)),
        _ => None,
    };

    Some(PendingRequest {
        id: CorrelationId::from(id),
        request_date,
        request_type: (*request_type).to_string(),
        request_origin: tokens
            .get(ORIGIN_TOKEN)
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string()),
        request_resource,
        request_resource_query,
    })
}

fn join_request_date(date: &str, time: &str, zone: &str) -> RequestDate {
    let request_date = RequestDate::new(date, time, zone);
    if request_date.to_datetime().is_none() {
        tracing::trace!(%request_date, "request date has no numeric offset");
    }
    request_date
}

/// Parses the status and duration of a completion line.
///
/// Returns `None` when the status token is missing.
pub fn parse_request_end(line: &str) -> Option<ResponseEnd> {
    let response_status = line
        .split(' ')
        .nth(STATUS_TOKEN)
        .filter(|t| !t.is_empty())?
        .to_string();

    let response_success = response_status.starts_with('2');

    // Only look past the marker so the correlation ID cannot match "in".
    let tail = line
        .split_once(END_MARKER)
        .map_or(line, |(_, rest)| rest);

    Some(ResponseEnd {
        response_status,
        response_success,
        response_duration: extract_duration_ms(tail),
    })
}

/// Finds the first `in <N>ms` in `text` and returns `N`.
///
/// Whatever sits between the first `in` and the next `ms` must start (after
/// whitespace) with digits; anything after the digits is ignored.
pub fn extract_duration_ms(text: &str) -> Option<u64> {
    let (_, after_in) = text.split_once("in")?;
    let (between, _) = after_in.split_once("ms")?;

    let digits: String = between
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse().ok()
}

/// Splits a request URL into its resource identifier and query.
///
/// Both halves are lower-cased. An empty query is treated as absent.
pub fn normalize_resource(url: &str) -> (String, Option<String>) {
    match url.split_once('?') {
        Some((path, query)) => {
            let query = (!query.is_empty()).then(|| query.to_lowercase());
            (path.to_lowercase(), query)
        }
        None => (url.to_lowercase(), None),
    }
}
