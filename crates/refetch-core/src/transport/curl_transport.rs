//! Production transport on top of the curl crate (libcurl easy interface).

use curl::easy::{Easy, List};

use super::{split_header_line, Method, RequestOptions, Response, Transport, TransportError};

/// Blocking libcurl transport. A fresh easy handle is used per request, so
/// no connection state survives between attempts.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurlTransport;

impl CurlTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for CurlTransport {
    fn execute(&mut self, url: &str, options: &RequestOptions) -> Result<Response, TransportError> {
        let mut easy = Easy::new();
        configure(&mut easy, url, options).map_err(map_curl_error)?;

        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    let line = String::from_utf8_lossy(data);
                    let line = line.trim_end();
                    // Each redirect hop starts a new header block.
                    if line.starts_with("HTTP/") {
                        header_lines.clear();
                    }
                    header_lines.push(line.to_string());
                    true
                })
                .map_err(map_curl_error)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(map_curl_error)?;
            transfer.perform().map_err(map_curl_error)?;
        }

        let status = easy.response_code().map_err(map_curl_error)?;
        let headers = header_lines
            .iter()
            .filter_map(|l| split_header_line(l))
            .collect();
        let response = Response::new(status, headers, body);

        if status >= 400 && !options.mute_http_exceptions {
            return Err(TransportError::from_response(url, &response));
        }
        Ok(response)
    }
}

fn configure(easy: &mut Easy, url: &str, options: &RequestOptions) -> Result<(), curl::Error> {
    easy.url(url)?;

    match options.method {
        Method::Get => easy.get(true)?,
        Method::Head => easy.nobody(true)?,
        Method::Post => easy.post(true)?,
        other => easy.custom_request(other.as_str())?,
    }
    if !matches!(options.method, Method::Get | Method::Head) {
        let payload = options.payload.as_deref().unwrap_or_default();
        easy.post_fields_copy(payload)?;
        if options.method != Method::Post {
            // post_fields_copy switches libcurl to POST; restore the verb.
            easy.custom_request(options.method.as_str())?;
        }
    }

    easy.follow_location(options.follow_redirects)?;
    easy.max_redirections(10)?;
    easy.ssl_verify_peer(options.validate_https_certificates)?;
    easy.ssl_verify_host(options.validate_https_certificates)?;
    easy.connect_timeout(options.connect_timeout)?;
    easy.timeout(options.timeout)?;

    let mut list = List::new();
    for (k, v) in &options.headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if let Some(ct) = &options.content_type {
        if !options.has_header("content-type") {
            list.append(&format!("Content-Type: {}", ct.trim()))?;
        }
    }
    easy.http_headers(list)?;
    Ok(())
}

/// Map a curl error onto the transport error kinds.
fn map_curl_error(e: curl::Error) -> TransportError {
    let msg = e.to_string();
    if e.is_operation_timedout() {
        return TransportError::Timeout(msg);
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportError::Connection(msg);
    }
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return TransportError::InvalidRequest(msg);
    }
    TransportError::Other(msg)
}
