//! Input parsing and validation for seek problems.
//!
//! The algorithms accept any input; these checks run on the caller's side
//! before scheduling. Detects:
//! - Too few request positions
//! - Positions outside the disk
//! - A head outside the disk
//! - A non-positive disk size
//!
//! Bounds are inclusive at the top (`0..=disk_size`), matching what the
//! input form accepts.

use tracing::debug;

use crate::models::Position;

/// Fewest request positions accepted from user input.
pub const MIN_POSITIONS: usize = 2;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than [`MIN_POSITIONS`] positions.
    TooFewPositions,
    /// A request position lies outside `0..=disk_size`.
    PositionOutOfRange,
    /// The head lies outside `0..=disk_size`.
    HeadOutOfRange,
    /// Disk size is below 1.
    InvalidDiskSize,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Parses a comma-separated list of positions.
///
/// Each item is read as a leading integer: an optional sign followed by
/// digits, ignoring whatever comes after. `"3.5"` reads as 3 and `"12abc"`
/// as 12. Items with no leading digits, or too large for a [`Position`],
/// are skipped, so `"10, x, 20,"` yields `[10, 20]`.
pub fn parse_positions(text: &str) -> Vec<Position> {
    text.split(',').filter_map(parse_leading_int).collect()
}

fn parse_leading_int(item: &str) -> Option<Position> {
    let item = item.trim();
    let sign_len = usize::from(item.starts_with(['+', '-']));
    let digits = item[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    item[..sign_len + digits].parse().ok()
}

/// Validates the input for a seek problem.
///
/// Checks:
/// 1. Disk size is at least 1
/// 2. At least [`MIN_POSITIONS`] positions
/// 3. Every position lies in `0..=disk_size`
/// 4. The head lies in `0..=disk_size`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    positions: &[Position],
    head: Position,
    disk_size: Position,
) -> ValidationResult {
    let mut errors = Vec::new();

    if disk_size < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDiskSize,
            format!("Disk size must be at least 1, got {disk_size}"),
        ));
    }

    if positions.len() < MIN_POSITIONS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewPositions,
            format!(
                "Enter at least {MIN_POSITIONS} disk positions, got {}",
                positions.len()
            ),
        ));
    }

    let in_range = |p: Position| (0..=disk_size).contains(&p);

    if let Some(&bad) = positions.iter().find(|&&p| !in_range(p)) {
        errors.push(ValidationError::new(
            ValidationErrorKind::PositionOutOfRange,
            format!("All positions must be between 0 and {disk_size} (found {bad})"),
        ));
    }

    if !in_range(head) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!("Head position must be between 0 and {disk_size} (found {head})"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!(count = errors.len(), "input rejected");
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions() {
        assert_eq!(parse_positions("100, 50,25 ,75"), vec![100, 50, 25, 75]);
        assert_eq!(parse_positions("10, x, 20,"), vec![10, 20]);
        assert_eq!(parse_positions("-5, 3"), vec![-5, 3]);
        assert!(parse_positions("").is_empty());
        assert!(parse_positions(" , ,").is_empty());
    }

    #[test]
    fn test_parse_positions_leading_integer() {
        assert_eq!(parse_positions("3.5, 12abc, +7"), vec![3, 12, 7]);
        assert_eq!(parse_positions("- 3, abc12, .5"), Vec::<Position>::new());
        assert_eq!(parse_positions("99999999999999999999, 4"), vec![4]);
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&[0, 100, 50, 25, 75], 50, 200).is_ok());
    }

    #[test]
    fn test_upper_bound_inclusive() {
        assert!(validate_input(&[0, 200], 200, 200).is_ok());
    }

    #[test]
    fn test_too_few_positions() {
        let errors = validate_input(&[10], 5, 200).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooFewPositions));
    }

    #[test]
    fn test_position_out_of_range() {
        let errors = validate_input(&[10, 201], 5, 200).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::PositionOutOfRange);
        assert!(errors[0].message.contains("201"));

        let errors = validate_input(&[-1, 10], 5, 200).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::PositionOutOfRange);
    }

    #[test]
    fn test_head_out_of_range() {
        let errors = validate_input(&[10, 20], -3, 200).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HeadOutOfRange));
    }

    #[test]
    fn test_invalid_disk_size() {
        let errors = validate_input(&[0, 0], 0, 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidDiskSize));
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_input(&[500], 900, 200).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
