//! Conversion between typed parameter values and their text form.
//!
//! Every value that enters or leaves a [`ParameterList`](crate::ParameterList)
//! passes through this module, so numeric, boolean and enumeration values
//! all normalize along one path. Renderers that print configuration in
//! aligned columns control the field layout through [`TextFormat`].

use std::any;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseValueError;

/// Field layout applied when rendering a value as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFormat {
    /// Minimum field width in characters; `0` disables padding.
    pub width: usize,
    /// Character used to pad values narrower than `width`.
    pub pad: char,
    /// Whether the value is left aligned within the field.
    pub left_align: bool,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            width: 0,
            pad: ' ',
            left_align: false,
        }
    }
}

/// Renders a value as text, padded to the field described by `format`.
///
/// Values at least `format.width` characters wide are returned unpadded.
pub fn to_text<T: fmt::Display>(value: &T, format: &TextFormat) -> String {
    let text = value.to_string();
    let len = text.chars().count();
    if len >= format.width {
        return text;
    }
    let padding: String = std::iter::repeat(format.pad)
        .take(format.width - len)
        .collect();
    if format.left_align {
        text + &padding
    } else {
        padding + &text
    }
}

/// Parses a value from its text form.
///
/// The input is taken verbatim; callers that tolerate surrounding
/// whitespace trim before calling.
pub fn from_text<T: FromStr>(text: &str) -> Result<T, ParseValueError> {
    text.parse().map_err(|_| ParseValueError {
        text: text.to_string(),
        target: any::type_name::<T>(),
    })
}
