//! Tablemate lookup.

use table_finder_core::Guest;

/// Returns everyone seated at `guest`'s table except `guest`, in
/// seating-list order.
///
/// Tables compare by exact identifier. An empty result means the guest is
/// the only one listed at the table, or has no table.
#[must_use]
pub fn tablemates(guest: &Guest, guests: &[Guest]) -> Vec<Guest> {
    guests
        .iter()
        .filter(|other| other.shares_table_with(guest) && !other.is_same_person(guest))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_finder_core::TableLabel;

    fn guests() -> Vec<Guest> {
        vec![
            Guest::new("Jed", "Lee", "T1"),
            Guest::new("Clarisa", "Lee", "T1"),
            Guest::new("Anna", "Soliman", "T2"),
            Guest::new("Mara", "Cruz", "T1"),
            Guest::new("Paolo", "Reyes", "1"),
        ]
    }

    #[test]
    fn lists_others_at_same_table() {
        let mates = tablemates(&Guest::new("Jed", "Lee", "T1"), &guests());
        assert_eq!(
            mates,
            vec![Guest::new("Clarisa", "Lee", "T1"), Guest::new("Mara", "Cruz", "T1")]
        );
    }

    #[test]
    fn never_includes_the_guest() {
        let all = guests();
        for guest in &all {
            let mates = tablemates(guest, &all);
            assert!(mates.iter().all(|m| !m.is_same_person(guest)));
        }
    }

    #[test]
    fn alone_at_table_is_empty() {
        assert!(tablemates(&Guest::new("Anna", "Soliman", "T2"), &guests()).is_empty());
    }

    #[test]
    fn table_identifiers_are_not_numeric() {
        let mates = tablemates(&Guest::new("Paolo", "Reyes", "1"), &guests());
        assert!(mates.is_empty());
    }

    #[test]
    fn unassigned_guest_has_no_tablemates() {
        let rows = vec![
            Guest::new("Jed", "Lee", TableLabel::Unassigned),
            Guest::new("Anna", "Soliman", TableLabel::Unassigned),
            Guest::new("Mara", "Cruz", "T1"),
        ];
        assert!(tablemates(&rows[0], &rows).is_empty());
        assert!(tablemates(&rows[1], &rows).is_empty());
        assert!(tablemates(&rows[2], &rows).is_empty());
    }
}
