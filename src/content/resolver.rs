//! The request → response decision tree.

use std::path::Path;

use tracing::warn;

use crate::fs::FileSystem;
use crate::http::headers::HeaderBlock;
use crate::http::mime;
use crate::http::request::{Request, Version};
use crate::http::response::{Response, StatusCode};

/// Maps a GET request onto a response.
///
/// The URI path is translated to the platform separator and appended to
/// the filesystem root as-is (no traversal sanitization; serving untrusted
/// networks is out of scope). The tree:
///
/// - path resolution fails        → 500, empty
/// - nothing exists there          → 404, empty
/// - directory, path ends in `/`  → 200, generated listing
/// - directory, no trailing `/`   → 302, `Location: <path>/`
/// - file, no trailing `/`        → 200, file bytes
/// - file, path ends in `/`       → 404, empty
///
/// A directory enumeration failure propagates; the connection handler
/// reports it as a processing error and closes without a response.
pub fn resolve(request: &Request, fs: &dyn FileSystem) -> anyhow::Result<Response> {
    let version = request.line.version;
    let uri_path = request.line.uri.path.as_str();

    let prepared = uri_path.replace('/', std::path::MAIN_SEPARATOR_STR);

    let complete = match fs.resolve_absolute(&prepared) {
        Ok(path) => path,
        Err(e) => {
            warn!("Path resolution failed for {}: {}", uri_path, e);
            return Ok(Response::empty(StatusCode::InternalServerError, version));
        }
    };

    let directory_requested = uri_path.ends_with('/');

    if !fs.path_exists(&complete) {
        return Ok(Response::empty(StatusCode::NotFound, version));
    }

    if fs.is_directory(&complete) {
        if directory_requested {
            let mut headers = HeaderBlock::new();
            let body = folder_listing(&complete, fs, &mut headers)?;
            Ok(Response::new(
                StatusCode::Ok.status_line(version),
                headers,
                body.as_bytes(),
            ))
        } else {
            // Redirect to the slash-terminated path. The query string is
            // dropped here, a known limitation.
            let mut headers = HeaderBlock::new();
            headers.insert("Location", &format!("{}/", uri_path));
            Ok(Response::new(
                StatusCode::Found.status_line(version),
                headers,
                &[],
            ))
        }
    } else if directory_requested {
        // A trailing slash on a file path never resolves.
        Ok(Response::empty(StatusCode::NotFound, version))
    } else {
        let mut headers = HeaderBlock::new();
        let body = file_contents(&complete, fs, &mut headers);
        Ok(Response::new(
            StatusCode::Ok.status_line(version),
            headers,
            &body,
        ))
    }
}

/// 400 Bad Request for any non-GET method, bypassing the decision tree.
pub fn unsupported_response(version: Version) -> Response {
    Response::empty(StatusCode::BadRequest, version)
}

/// Reads the file and fills in `Content-Type` and `Content-Length`.
///
/// A read failure degrades to an empty body with a warning; the 200 status
/// is not revisited (known limitation carried over deliberately).
fn file_contents(
    path: &Path,
    fs: &dyn FileSystem,
    headers: &mut HeaderBlock,
) -> Vec<u8> {
    let contents = match fs.read_all_bytes(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("File read error: {}: {}", path.display(), e);
            Vec::new()
        }
    };

    // Extension = everything after the first dot of the base name, so
    // "archive.tar.gz" looks up "tar.gz" and falls back to html.
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = file_name
        .split_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or(mime::FALLBACK_EXTENSION);

    headers.insert("Content-Type", mime::content_type_for(extension));
    headers.insert("Content-Length", &contents.len().to_string());

    contents
}

/// Builds the HTML listing page for a directory.
///
/// Immediate children only, directories first, each entry a relative
/// self-link; an empty directory yields the literal text "Empty folder".
/// Index files are deliberately not special-cased.
fn folder_listing(
    path: &Path,
    fs: &dyn FileSystem,
    headers: &mut HeaderBlock,
) -> anyhow::Result<String> {
    let (directories, files) = fs.list_directory(path)?;

    let mut listing = String::new();

    if directories.is_empty() && files.is_empty() {
        listing.push_str("Empty folder");
    } else {
        for name in &directories {
            listing.push_str(&entry_link(&format!("{}/", name)));
        }
        for name in &files {
            listing.push_str(&entry_link(name));
        }
    }

    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    headers.insert("Content-Type", mime::content_type_for(mime::FALLBACK_EXTENSION));

    Ok(format!(
        "<html><head><title>{0}</title></head><body><h1>{0}</h1>{1}</body></html>",
        title, listing
    ))
}

fn entry_link(label: &str) -> String {
    format!("<a href=\"{0}\">{0}</a><br />\r\n", label)
}
