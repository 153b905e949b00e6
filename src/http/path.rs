//! Endpoint path construction

use crate::error::{Error, Result};
use url::Url;

const SEGMENT_BASE: &str = "http://segments.invalid/";

/// Join path segments into a relative endpoint path
///
/// Each segment is percent-encoded on its own, so a `/`, `?` or `#` inside
/// an id (CRNs carry `/`) stays within that segment.
pub fn encode_path(segments: &[&str]) -> Result<String> {
    let mut url = Url::parse(SEGMENT_BASE)?;
    url.path_segments_mut()
        .map_err(|()| Error::Other(format!("{SEGMENT_BASE} cannot carry path segments")))?
        .clear()
        .extend(segments);
    Ok(url.path().trim_start_matches('/').to_string())
}
