use popmusic::core::models::record::ResidueKey;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid residue '{0}'. Expected 'CHAIN:POSITION' (e.g., 'A:12') or ':POSITION.CHAIN' (e.g., ':12.A').")]
    InvalidResidueFormat(String),

    #[error("Invalid residue position '{position}' in '{residue}'.")]
    InvalidPosition { residue: String, position: String },

    #[error("Chain identifier cannot be empty in residue '{0}'.")]
    EmptyChain(String),
}

/// Parses a residue reference given either as `A:12` or in the summary-table form `:12.A`,
/// optionally followed by the residue type (`:12.A ALA`).
pub fn parse_residue_key(s: &str) -> Result<ResidueKey, ParseError> {
    let trimmed = s.trim();
    let reference = trimmed
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::InvalidResidueFormat(s.to_string()))?;

    let (chain, position) = if let Some(rest) = reference.strip_prefix(':') {
        rest.split_once('.')
            .map(|(position, chain)| (chain, position))
            .ok_or_else(|| ParseError::InvalidResidueFormat(s.to_string()))?
    } else {
        reference
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidResidueFormat(s.to_string()))?
    };

    if chain.is_empty() {
        return Err(ParseError::EmptyChain(s.to_string()));
    }
    let position = position
        .parse::<isize>()
        .map_err(|_| ParseError::InvalidPosition {
            residue: s.to_string(),
            position: position.to_string(),
        })?;

    Ok(ResidueKey::new(chain, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chain_colon_position() {
        assert_eq!(parse_residue_key("A:12"), Ok(ResidueKey::new("A", 12)));
        assert_eq!(parse_residue_key(" B:-3 "), Ok(ResidueKey::new("B", -3)));
    }

    #[test]
    fn parses_table_label_form() {
        assert_eq!(parse_residue_key(":12.A"), Ok(ResidueKey::new("A", 12)));
        assert_eq!(parse_residue_key(":7.B GLY"), Ok(ResidueKey::new("B", 7)));
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        for input in ["", "A12", ":12A"] {
            assert!(matches!(
                parse_residue_key(input),
                Err(ParseError::InvalidResidueFormat(_))
            ));
        }
    }

    #[test]
    fn rejects_non_numeric_positions() {
        assert_eq!(
            parse_residue_key("A:x1"),
            Err(ParseError::InvalidPosition {
                residue: "A:x1".to_string(),
                position: "x1".to_string(),
            })
        );
    }

    #[test]
    fn rejects_empty_chain() {
        assert_eq!(
            parse_residue_key(":12."),
            Err(ParseError::EmptyChain(":12.".to_string()))
        );
        assert_eq!(
            parse_residue_key(":5"),
            Err(ParseError::InvalidResidueFormat(":5".to_string()))
        );
    }
}
