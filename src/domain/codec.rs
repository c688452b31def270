//! Vector ↔ hash-field codec.
//!
//! A vector of length D is stored as D hash fields named `dim0..dim(D-1)`,
//! each holding the decimal string form of one component. `{}` formatting of
//! f64 produces the shortest string that parses back to the identical value,
//! so encode→decode is lossless for finite components.

use crate::domain::error::DomainError;
use std::collections::HashMap;

/// Encode a vector as one `("dim{i}", value)` pair per component, in index
/// order.
pub fn encode(vector: &[f64]) -> Vec<(String, String)> {
    vector
        .iter()
        .enumerate()
        .map(|(i, component)| (format!("dim{i}"), component.to_string()))
        .collect()
}

/// Decode a field map back into a vector. The map must contain exactly
/// `dim0..dim(n-1)` where n is its size; a gap fails with `MissingDimension`,
/// and a value that is unparsable or non-finite fails with `MalformedValue`
/// ("NaN" and "inf" parse as f64, but a stored component must be finite). The
/// expected dimensionality is not validated here; that is the caller's check.
pub fn decode(fields: &HashMap<String, String>) -> Result<Vec<f64>, DomainError> {
    let mut vector = Vec::with_capacity(fields.len());
    for i in 0..fields.len() {
        let field = format!("dim{i}");
        let raw = fields.get(&field).ok_or(DomainError::MissingDimension(i))?;
        let component = match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                return Err(DomainError::MalformedValue {
                    field,
                    value: raw.clone(),
                })
            }
        };
        vector.push(component);
    }
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_names_fields_in_order() {
        let fields = encode(&[1.5, -2.0, 0.0]);
        assert_eq!(
            fields,
            vec![
                ("dim0".to_string(), "1.5".to_string()),
                ("dim1".to_string(), "-2".to_string()),
                ("dim2".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_round_trip_is_exact() {
        let vector = vec![
            0.1,
            -3.75,
            1.0e-12,
            std::f64::consts::PI,
            f64::MIN_POSITIVE,
            123456789.987654321,
        ];
        let fields: HashMap<String, String> = encode(&vector).into_iter().collect();
        let decoded = decode(&fields).unwrap();
        assert_eq!(decoded, vector);
    }

    #[test]
    fn test_decode_empty_map_is_empty_vector() {
        let decoded = decode(&HashMap::new()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_gap_reports_missing_dimension() {
        // dim1 absent: two entries, so dim0..dim1 are expected
        let fields = field_map(&[("dim0", "1.0"), ("dim2", "3.0")]);
        match decode(&fields) {
            Err(DomainError::MissingDimension(1)) => {}
            other => panic!("expected MissingDimension(1), got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_unparsable_component() {
        let fields = field_map(&[("dim0", "1.0"), ("dim1", "not-a-number")]);
        match decode(&fields) {
            Err(DomainError::MalformedValue { field, value }) => {
                assert_eq!(field, "dim1");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected MalformedValue, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_non_finite_components() {
        // All three parse as f64; none is a valid stored component.
        for bad in ["NaN", "inf", "-inf"] {
            let fields = field_map(&[("dim0", bad)]);
            match decode(&fields) {
                Err(DomainError::MalformedValue { field, value }) => {
                    assert_eq!(field, "dim0");
                    assert_eq!(value, bad);
                }
                other => panic!("expected MalformedValue for {bad}, got {other:?}"),
            }
        }
    }
}
