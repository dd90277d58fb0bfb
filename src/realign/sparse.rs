/// Re-bases a sequence aligned with the sparse waypoint-index sequence onto
/// the realigned coordinate numbering.
///
/// The waypoint currently being approached has not been passed yet, so its
/// entry is re-included as the first element, followed by all later entries
/// unchanged.
///
/// Returns `None` when the cut position falls outside `values`, i.e. the
/// sequence is shorter than the waypoint-index sequence claims.
pub(crate) fn realign_sparse_list<T: Clone>(
    values: &[T],
    waypoint_indices: Option<&[usize]>,
    last_passed_waypoint: isize,
) -> Option<Vec<T>> {
    if values.is_empty() {
        return Some(Vec::new());
    }

    let cut = last_passed_position(waypoint_indices, last_passed_waypoint);
    values.get(cut..).map(<[T]>::to_vec)
}

/// Re-bases the waypoint-index sequence itself: retained indices are shifted
/// down by the last passed waypoint and a leading 0 marks the synthetic new
/// origin, which is always a routable waypoint.
pub(crate) fn realign_waypoint_indices(
    waypoint_indices: &[usize],
    last_passed_waypoint: isize,
) -> Vec<usize> {
    if waypoint_indices.is_empty() {
        return Vec::new();
    }

    let cut = last_passed_position(Some(waypoint_indices), last_passed_waypoint);

    let mut rebased = Vec::with_capacity(waypoint_indices.len() - cut);
    rebased.push(0);
    rebased.extend(
        waypoint_indices[cut + 1..]
            .iter()
            .map(|&index| (index as isize - last_passed_waypoint) as usize),
    );

    rebased
}

/// Position within the waypoint-index sequence of the last waypoint already
/// passed, scanning in ascending order; 0 when no waypoint qualifies.
///
/// `last_passed_waypoint` is -1 when the traveler is still between the
/// original origin and the first waypoint, in which case no index qualifies.
fn last_passed_position(waypoint_indices: Option<&[usize]>, last_passed_waypoint: isize) -> usize {
    let mut position = 0;
    for (i, &index) in waypoint_indices.into_iter().flatten().enumerate() {
        if index as isize <= last_passed_waypoint {
            position = i;
        }
    }
    position
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn realign_sparse_list_001() {
        let names = ["home", "fuel", "office", "gym"].map(String::from);
        let indices = [0, 1, 2, 3];

        assert_eq!(
            realign_sparse_list(&names, Some(&indices), 1),
            Some(vec!["fuel".to_string(), "office".to_string(), "gym".to_string()])
        );
    }

    #[test]
    fn realign_sparse_list_002() {
        // named waypoints only at coordinates 0 and 3
        let names = ["home", "gym"].map(String::from);
        let indices = [0, 3];

        assert_eq!(
            realign_sparse_list(&names, Some(&indices), 1),
            Some(vec!["home".to_string(), "gym".to_string()])
        );
    }

    #[test]
    fn realign_sparse_list_003() {
        // no waypoint passed yet, the whole list is retained
        let names = ["home", "gym"].map(String::from);
        let indices = [0, 3];

        assert_eq!(
            realign_sparse_list(&names, Some(&indices), -1),
            Some(names.to_vec())
        );
    }

    #[test]
    fn realign_sparse_list_004() {
        assert_eq!(
            realign_sparse_list::<String>(&[], Some(&[0, 3]), 1),
            Some(vec![])
        );
    }

    #[test]
    fn realign_sparse_list_005() {
        // without a waypoint-index sequence the cut stays at the front
        let names = ["home", "gym"].map(String::from);

        assert_eq!(realign_sparse_list(&names, None, 2), Some(names.to_vec()));
    }

    #[test]
    fn realign_sparse_list_006() {
        // index sequence claims more waypoints than there are values
        let names = ["home"].map(String::from);
        let indices = [0, 1, 2];

        assert_eq!(realign_sparse_list(&names, Some(&indices), 1), None);
    }

    #[test]
    fn realign_waypoint_indices_001() {
        assert_eq!(realign_waypoint_indices(&[0, 3], 1), vec![0, 2]);
    }

    #[test]
    fn realign_waypoint_indices_002() {
        assert_eq!(realign_waypoint_indices(&[0, 1, 2, 3], 2), vec![0, 1]);
    }

    #[test]
    fn realign_waypoint_indices_003() {
        // nothing passed yet, retained indices shift up for the new origin
        assert_eq!(realign_waypoint_indices(&[0, 3], -1), vec![0, 4]);
    }

    #[test]
    fn realign_waypoint_indices_004() {
        assert_eq!(realign_waypoint_indices(&[], 1), Vec::<usize>::new());
    }

    #[test]
    fn realign_waypoint_indices_005() {
        // only the destination remains
        assert_eq!(realign_waypoint_indices(&[0, 2, 4], 3), vec![0, 1]);
    }
}
