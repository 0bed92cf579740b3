//! Outbound HTML filtering for user-supplied text.
//!
//! Stored values are kept as submitted; filtering happens when a row is
//! serialized so that markup saved by one client never executes in another.

/// Strip scripts, event handlers and non-whitelisted markup from `input`.
///
/// Text without `<` cannot open a tag and is returned untouched. Otherwise
/// ammonia's output is kept, except that `&amp;` is turned back into `&`:
/// a bare ampersand cannot start markup, and `<` stays escaped as `&lt;`.
pub fn clean(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }
    ammonia::clean(input).replace("&amp;", "&")
}
