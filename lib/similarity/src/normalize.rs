//! Joint min-max scaling of a query/match pair
//!
//! Each dimension is scaled over the two values being compared only, so
//! the pair is comparable regardless of the rest of the dataset. A
//! dimension where both values are equal scales to 0.0 for both.

use serde::Serialize;
use songsim_core::{Error, Result, Vector};

/// Query and match vectors scaled into [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPair {
    pub query: Vector,
    pub matched: Vector,
}

/// Min-max scale `query` and `matched` per dimension over the pair
pub fn normalize_pair(query: &Vector, matched: &Vector) -> Result<NormalizedPair> {
    if query.dim() != matched.dim() {
        return Err(Error::InvalidDimension {
            expected: query.dim(),
            actual: matched.dim(),
        });
    }

    let (query, matched): (Vec<f64>, Vec<f64>) = query
        .iter()
        .zip(matched.iter())
        .map(|(&q, &m)| scale(q, m))
        .unzip();

    Ok(NormalizedPair {
        query: Vector::new(query),
        matched: Vector::new(matched),
    })
}

/// Two values per dimension: the larger maps to 1.0, the smaller to 0.0
#[inline]
fn scale(q: f64, m: f64) -> (f64, f64) {
    if q > m {
        (1.0, 0.0)
    } else if q < m {
        (0.0, 1.0)
    } else {
        (0.0, 0.0)
    }
}
