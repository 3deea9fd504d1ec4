use tauri::http::HeaderMap;

const FRAMING_HEADERS: [&str; 2] = ["x-frame-options", "content-security-policy"];

/// Mutable view over the headers of an in-flight response.
pub(crate) trait ResponseHeaderSet {
    fn header_names(&self) -> Vec<String>;
    fn remove_header(&mut self, name: &str);
}

impl ResponseHeaderSet for HeaderMap {
    fn header_names(&self) -> Vec<String> {
        self.keys().map(|name| name.as_str().to_string()).collect()
    }

    fn remove_header(&mut self, name: &str) {
        self.remove(name);
    }
}

fn is_framing_header(name: &str) -> bool {
    FRAMING_HEADERS
        .iter()
        .any(|blocked| name.eq_ignore_ascii_case(blocked))
}

/// Strips `X-Frame-Options` and `Content-Security-Policy` in any casing. Everything else is
/// left untouched and the response is never cancelled.
pub(crate) fn sanitize_response_headers(headers: &mut dyn ResponseHeaderSet) {
    for name in headers.header_names() {
        if is_framing_header(&name) {
            headers.remove_header(&name);
        }
    }
}
