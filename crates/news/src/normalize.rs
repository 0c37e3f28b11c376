//! Headline text normalization.

/// Normalize headline text for tokenization.
///
/// Lowercases the input and replaces every character that is not
/// alphanumeric or whitespace with a single space. Substituting a
/// space (rather than deleting the character) keeps words on either
/// side of punctuation from merging: `"profit,loss"` becomes
/// `"profit loss"`, not `"profitloss"`.
///
/// # Example
/// ```
/// use news::normalize;
///
/// assert_eq!(normalize("Stocks Rally: Up 5%!"), "stocks rally  up 5  ");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .flat_map(char::to_lowercase)
        .collect()
}
