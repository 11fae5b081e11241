//! Timestamp input handling: record parsing and gap derivation.
//!
//! A record is one line of whitespace-separated floating-point arrival
//! times, already sorted. Decoding operates on the derived gaps, so all
//! malformed-input detection happens here, before any table is built.

use bd_common::{Error, Result};

/// Parse one record line of whitespace-separated timestamps.
pub fn parse_record(line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| Error::MalformedInput {
                index,
                detail: format!("not a floating-point timestamp: {token:?}"),
            })
        })
        .collect()
}

/// Derive the inter-event gaps from a timestamp sequence.
///
/// Requires at least two time points and strictly increasing values; a zero
/// or negative gap (including NaN timestamps) is rejected with the index of
/// the offending point.
pub fn gaps_from_timestamps(timestamps: &[f64]) -> Result<Vec<f64>> {
    if timestamps.len() < 2 {
        return Err(Error::MalformedInput {
            index: timestamps.len(),
            detail: format!("need at least 2 time points, got {}", timestamps.len()),
        });
    }
    let mut gaps = Vec::with_capacity(timestamps.len() - 1);
    for (i, pair) in timestamps.windows(2).enumerate() {
        let gap = pair[1] - pair[0];
        if !(gap > 0.0) {
            return Err(Error::MalformedInput {
                index: i + 1,
                detail: format!(
                    "non-increasing time points: {} followed by {}",
                    pair[0], pair[1]
                ),
            });
        }
        gaps.push(gap);
    }
    Ok(gaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_separated_floats() {
        let record = parse_record("0 1.5\t3e1  42").unwrap();
        assert_eq!(record, vec![0.0, 1.5, 30.0, 42.0]);
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_record("0 1 x 3").unwrap_err();
        match err {
            Error::MalformedInput { index, detail } => {
                assert_eq!(index, 2);
                assert!(detail.contains('x'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn derives_gaps() {
        let gaps = gaps_from_timestamps(&[0.0, 1.0, 3.0, 3.5]).unwrap();
        assert_eq!(gaps, vec![1.0, 2.0, 0.5]);
    }

    #[test]
    fn rejects_single_time_point() {
        let err = gaps_from_timestamps(&[5.0]).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }

    #[test]
    fn rejects_zero_gap() {
        let err = gaps_from_timestamps(&[0.0, 0.0, 1.0]).unwrap_err();
        match err {
            Error::MalformedInput { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_decreasing_time_points() {
        let err = gaps_from_timestamps(&[0.0, 2.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { index: 2, .. }));
    }

    #[test]
    fn rejects_nan_time_point() {
        assert!(gaps_from_timestamps(&[0.0, f64::NAN, 2.0]).is_err());
    }
}
