use crate::Bearing;

/// Builds the bearing sequence of a realigned route request.
///
/// The synthetic new origin always carries the traveler's live heading,
/// overriding whatever the original request asked for there. Bearings past
/// the leg already underway are preserved positionally, with the retained
/// window clamped to the original coordinate count. The result holds one
/// entry per new coordinate; coordinates without a constraint hold `None`.
///
/// Returns `None` when the retained window starts past the end of the
/// original sequence.
pub(crate) fn rebuild_bearings(
    leg_index: usize,
    coordinate_count: usize,
    target_count: usize,
    heading: f64,
    original: Option<&[Option<Bearing>]>,
    default_tolerance: f64,
) -> Option<Vec<Option<Bearing>>> {
    let tolerance = original
        .and_then(|bearings| bearings.first())
        .and_then(|bearing| *bearing)
        .map(|bearing| bearing.tolerance)
        .unwrap_or(default_tolerance);

    let mut rebuilt = Vec::with_capacity(target_count);
    rebuilt.push(Some(Bearing::from_degrees(heading, tolerance)));

    if let Some(original) = original {
        let end = original.len().min(coordinate_count);
        rebuilt.extend_from_slice(original.get(leg_index + 1..end)?);
    }

    while rebuilt.len() < target_count {
        rebuilt.push(None);
    }

    Some(rebuilt)
}
