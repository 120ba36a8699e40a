//! multipart/form-data parsing module
//!
//! Minimal parser for file upload bodies, compliant with RFC 7578 as far as
//! the upload endpoint needs: single-level parts, `Content-Disposition`
//! name/filename parameters, binary-safe data extraction.

/// A single body part of a multipart/form-data request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// Form field name from Content-Disposition
    pub name: String,
    /// Original client filename, if the part is a file
    pub filename: Option<String>,
    /// Raw part payload
    pub data: Vec<u8>,
}

/// Extract the boundary parameter from a Content-Type header value
///
/// Returns None unless the media type is `multipart/form-data` with a
/// non-empty `boundary` parameter (quoted or bare).
pub fn parse_boundary(content_type: &str) -> Option<String> {
    let mut pieces = content_type.split(';');
    if !pieces
        .next()?
        .trim()
        .eq_ignore_ascii_case("multipart/form-data")
    {
        return None;
    }

    for param in pieces {
        if let Some(value) = param.trim().strip_prefix("boundary=") {
            let value = value.trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Parse a multipart/form-data body into its parts
///
/// Malformed segments are skipped rather than failing the whole body; an
/// unparseable body simply yields no parts.
pub fn parse_form_data(body: &[u8], boundary: &str) -> Vec<Part> {
    let delimiter = format!("--{boundary}");
    let delim = delimiter.as_bytes();
    let mut parts = Vec::new();

    let Some(first) = find(body, delim, 0) else {
        return parts;
    };
    let mut pos = first + delim.len();

    loop {
        // "--" after the delimiter marks the closing boundary
        if body[pos..].starts_with(b"--") {
            break;
        }
        let segment_start = if body[pos..].starts_with(b"\r\n") {
            pos + 2
        } else {
            pos
        };
        let Some(next) = find(body, delim, segment_start) else {
            break;
        };
        if let Some(part) = parse_part(&body[segment_start..next]) {
            parts.push(part);
        }
        pos = next + delim.len();
    }

    parts
}

/// Parse one segment between boundaries into headers and payload
fn parse_part(segment: &[u8]) -> Option<Part> {
    let header_end = find(segment, b"\r\n\r\n", 0)?;
    let headers = std::str::from_utf8(&segment[..header_end]).ok()?;

    let mut data = &segment[header_end + 4..];
    // The CRLF before the next delimiter belongs to the framing, not the data
    if data.ends_with(b"\r\n") {
        data = &data[..data.len() - 2];
    }

    let disposition = headers
        .lines()
        .find(|line| {
            line.to_ascii_lowercase()
                .starts_with("content-disposition:")
        })?;
    let name = param_value(disposition, "name")?;
    let filename = param_value(disposition, "filename");

    Some(Part {
        name,
        filename,
        data: data.to_vec(),
    })
}

/// Extract a `key=value` or `key="value"` parameter from a header line
fn param_value(header: &str, param: &str) -> Option<String> {
    for piece in header.split(';') {
        if let Some(rest) = piece.trim().strip_prefix(param) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(value.trim_matches('"').to_string());
            }
        }
    }
    None
}

/// Find a byte subsequence starting from an offset
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|p| p + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "----TestBoundary42";

    fn file_body(filename: &str, data: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    #[test]
    fn test_boundary_extraction() {
        assert_eq!(
            parse_boundary("multipart/form-data; boundary=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            parse_boundary("multipart/form-data; boundary=\"quoted\""),
            Some("quoted".to_string())
        );
        assert_eq!(parse_boundary("application/json"), None);
        assert_eq!(parse_boundary("multipart/form-data"), None);
        assert_eq!(parse_boundary("multipart/form-data; boundary="), None);
    }

    #[test]
    fn test_single_file_part() {
        let body = file_body("photo.png", b"PNGDATA");
        let parts = parse_form_data(&body, BOUNDARY);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "file");
        assert_eq!(parts[0].filename.as_deref(), Some("photo.png"));
        assert_eq!(parts[0].data, b"PNGDATA");
    }

    #[test]
    fn test_binary_data_with_crlf() {
        // Payload containing CRLF bytes must come back untouched
        let data = b"line1\r\nline2\r\n\x00\xff";
        let body = file_body("blob.gif", data);
        let parts = parse_form_data(&body, BOUNDARY);
        assert_eq!(parts[0].data, data);
    }

    #[test]
    fn test_field_without_filename() {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"note\"\r\n\r\n");
        body.extend_from_slice(b"hello");
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let parts = parse_form_data(&body, BOUNDARY);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, "note");
        assert_eq!(parts[0].filename, None);
        assert_eq!(parts[0].data, b"hello");
    }

    #[test]
    fn test_empty_filename_preserved() {
        let body = file_body("", b"x");
        let parts = parse_form_data(&body, BOUNDARY);
        assert_eq!(parts[0].filename.as_deref(), Some(""));
    }

    #[test]
    fn test_multiple_parts() {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"a\"\r\n\r\n1");
        body.extend_from_slice(format!("\r\n--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"b\"\r\n\r\n2");
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let parts = parse_form_data(&body, BOUNDARY);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].name, "a");
        assert_eq!(parts[1].name, "b");
    }

    #[test]
    fn test_garbage_body_yields_no_parts() {
        assert!(parse_form_data(b"not multipart at all", BOUNDARY).is_empty());
        assert!(parse_form_data(b"", BOUNDARY).is_empty());
    }
}
