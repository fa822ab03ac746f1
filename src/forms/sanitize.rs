/// Trim surrounding whitespace and strip angle brackets before a value is
/// handed to the store.
pub fn sanitize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect()
}
