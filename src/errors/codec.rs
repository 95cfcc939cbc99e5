// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decimal/hex amount conversion.

/// Errors raised by the amount codec.
///
/// Both variants describe bad input and are never retried.
///
/// # Examples
///
/// ```rust
/// use txverify::{to_scaled_hex, CodecError};
///
/// let err = to_scaled_hex("1.123", 2).unwrap_err();
/// assert!(matches!(err, CodecError::FractionOverflow { fraction_digits: 3, decimals: 2 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The value is not one of the supported numeric forms.
    #[error("'{value}' is not a supported numeric form: {reason}")]
    NumericFormat {
        /// The offending input, as text
        value: String,
        /// Short description of what was wrong
        reason: &'static str,
    },

    /// The fractional part has more digits than the requested scale.
    ///
    /// Silently truncating would drop meaningful digits, so the conversion
    /// is rejected instead.
    #[error("fraction part is out of limit: {fraction_digits} digits for {decimals} decimals")]
    FractionOverflow {
        /// Number of digits after the decimal point in the input
        fraction_digits: u32,
        /// Requested scale
        decimals: u32,
    },
}

impl CodecError {
    /// Create a `NumericFormat` error for the given input.
    pub fn numeric_format(value: impl Into<String>, reason: &'static str) -> Self {
        CodecError::NumericFormat {
            value: value.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_numeric_format() {
        let err = CodecError::numeric_format("1.2.3", "more than one decimal point");
        assert_eq!(
            err.to_string(),
            "'1.2.3' is not a supported numeric form: more than one decimal point"
        );
    }

    #[test]
    fn display_fraction_overflow() {
        let err = CodecError::FractionOverflow {
            fraction_digits: 3,
            decimals: 2,
        };
        assert_eq!(
            err.to_string(),
            "fraction part is out of limit: 3 digits for 2 decimals"
        );
    }
}
