/// Escapes user-supplied text for insertion into an HTML body
///
/// Every character with a meaning in HTML (and whitespace) becomes an entity,
/// so the result can be placed between tags without opening new markup.
///
/// # Examples
/// ```
/// use formrelay_core::utils::sanitization::escape_html;
///
/// assert_eq!(escape_html("<b>"), "&lt;b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    ammonia::clean_text(text)
}
