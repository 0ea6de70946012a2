use crate::error::TourError;

/// Checks that `indices` is a permutation of `0..point_count`.
pub(super) fn validate_permutation(indices: &[usize], point_count: usize) -> Result<(), TourError> {
    if indices.len() != point_count {
        return Err(TourError::LengthMismatch {
            expected: point_count,
            actual: indices.len(),
        });
    }

    let mut seen = vec![false; point_count];
    for &index in indices {
        let Some(slot) = seen.get_mut(index) else {
            return Err(TourError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                point_count,
            });
        };
        if *slot {
            return Err(TourError::DuplicateIndex { index });
        }
        *slot = true;
    }

    Ok(())
}

/// Converts the solver's signed route into point indices.
pub fn indices_from_route(route: &[i64], point_count: usize) -> Result<Vec<usize>, TourError> {
    route
        .iter()
        .map(|&index| {
            usize::try_from(index).map_err(|_| TourError::IndexOutOfRange { index, point_count })
        })
        .collect()
}
