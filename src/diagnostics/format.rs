/// Format a message by replacing `{}` placeholders with values, in order.
///
/// # Example
/// ```
/// use typedomain::diagnostics::format_message;
/// let msg = format_message("Define `{}` before `{}`.", &["base", "derived"]);
/// assert_eq!(msg, "Define `base` before `derived`.");
/// ```
pub fn format_message(template: &str, values: &[&str]) -> String {
    let mut result = template.to_string();
    for value in values {
        result = result.replacen("{}", value, 1);
    }
    result
}
