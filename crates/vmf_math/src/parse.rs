//! Text parsing for the vector family.
//!
//! Components are separated by whitespace, commas, or both: `"1 2 3"`,
//! `"1,2,3"` and `"1, 2, 3"` all parse.

/// Errors returned when parsing a vector from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVectorError {
    /// A component was not a valid float.
    #[error("invalid component {0:?}")]
    Component(String),

    /// The number of components did not match the vector dimension.
    #[error("expected {expected} components, found {found}")]
    Arity { expected: usize, found: usize },

    /// The number of components is outside the accepted range.
    #[error("expected {min} to {max} components, found {found}")]
    ArityRange { min: usize, max: usize, found: usize },
}

/// Split `s` into float components.
pub(crate) fn parse_components(s: &str) -> Result<Vec<f64>, ParseVectorError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| ParseVectorError::Component(token.to_string()))
        })
        .collect()
}
