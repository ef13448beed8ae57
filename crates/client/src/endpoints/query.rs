//! Query string construction.

/// Keep only parameters with a non-empty value.
///
/// An empty result means the request carries no query string at all.
pub fn build_query<K, V>(params: &[(K, V)]) -> Vec<(String, String)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .filter(|(_, v)| !v.as_ref().is_empty())
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}
