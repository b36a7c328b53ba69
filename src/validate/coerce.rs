//! Text → number coercion.
//!
//! The grammar is the same for every field, whatever the value means:
//! optional sign, digits, optional fractional part. Surrounding whitespace is
//! ignored. Exponents, `nan`/`inf`, underscores and thousands separators are
//! rejected, so `f64::from_str` is only reached for tokens it cannot misread.

use crate::domain::{CoercedInput, FieldSpec, RawInput};
use crate::error::ParseError;

/// Parse one raw token for `field`.
pub fn coerce(field: &str, raw: &str) -> Result<f64, ParseError> {
    let err = || ParseError {
        field: field.to_string(),
        raw: raw.to_string(),
    };

    let token = raw.trim();
    if !is_plain_decimal(token) {
        return Err(err());
    }
    let value = token.parse::<f64>().map_err(|_| err())?;
    if value.is_finite() { Ok(value) } else { Err(err()) }
}

/// Coerce every profile field, in order.
///
/// A field missing from `raw` is treated as an empty token. The first
/// unparseable field aborts the whole input.
pub fn coerce_all(raw: &RawInput, fields: &[FieldSpec]) -> Result<CoercedInput, ParseError> {
    let mut values = Vec::with_capacity(fields.len());
    for spec in fields {
        let token = raw.get(&spec.name).unwrap_or("");
        values.push((spec.name.clone(), coerce(&spec.name, token)?));
    }
    Ok(CoercedInput::from_ordered(values))
}

fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) {
        return false;
    }
    match frac_part {
        Some(frac) => all_digits(frac) && !(int_part.is_empty() && frac.is_empty()),
        None => !int_part.is_empty(),
    }
}
