//! Query string merging

use url::Url;

/// Add `extra` to the query already on `url` and re-encode it
///
/// Keys are sorted; values under one key keep their order, existing ones
/// first. Spaces encode as `+`. An empty result removes the `?`.
///
/// # Errors
///
/// Returns the serializer error from `serde_urlencoded`.
pub fn merge_query(url: &mut Url, extra: &[(String, String)]) -> Result<(), serde_urlencoded::ser::Error> {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    pairs.extend(extra.iter().cloned());
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let encoded = serde_urlencoded::to_string(&pairs)?;
    if encoded.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&encoded));
    }
    Ok(())
}
