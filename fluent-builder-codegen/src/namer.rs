//! Stable names for builder states.
//!
//! A state is named after the required fields it is still missing, encoded by their
//! positions rather than their text: `Missing0_2` waits for the first and third
//! required field. The names depend only on the subset, never on the order the
//! fields were supplied in.

use proc_macro2::{Ident, Span};

use crate::lattice::Subset;

pub const INITIAL_STATE: &str = "Initial";
pub const FINAL_STATE: &str = "Final";
const INTERMEDIATE_PREFIX: &str = "Missing";

/// Name of the state that has supplied `provided` out of `width` required fields.
///
/// With no required fields the only state is both initial and final; it is named
/// `Initial` because the factory hands it out.
pub fn state_name(provided: Subset, width: usize) -> String {
    if provided.is_empty() {
        return INITIAL_STATE.to_string();
    }
    let missing = provided.complement(width);
    if missing.is_empty() {
        return FINAL_STATE.to_string();
    }
    let positions: Vec<String> = missing.positions().map(|position| position.to_string()).collect();
    format!("{INTERMEDIATE_PREFIX}{}", positions.join("_"))
}

pub fn state_ident(provided: Subset, width: usize) -> Ident {
    Ident::new(&state_name(provided, width), Span::call_site())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Lattice;
    use std::collections::HashSet;

    #[test]
    fn reserved_names_for_the_extremes() {
        assert_eq!(state_name(Subset::EMPTY, 3), "Initial");
        assert_eq!(state_name(Subset::full(3), 3), "Final");
        assert_eq!(state_name(Subset::EMPTY, 0), "Initial");
    }

    #[test]
    fn intermediate_names_list_missing_positions() {
        let provided: Subset = [0].into_iter().collect();
        assert_eq!(state_name(provided, 3), "Missing1_2");
        let provided: Subset = [1, 2].into_iter().collect();
        assert_eq!(state_name(provided, 3), "Missing0");
    }

    #[test]
    fn separators_keep_two_digit_positions_apart() {
        let width = 13;
        let a: Subset = (0..width).filter(|&p| p != 1 && p != 12).collect();
        let b: Subset = (0..width).filter(|&p| p != 11 && p != 2).collect();
        assert_eq!(state_name(a, width), "Missing1_12");
        assert_eq!(state_name(b, width), "Missing2_11");
        assert_ne!(state_name(a, width), state_name(b, width));
    }

    #[test]
    fn names_are_unique_across_the_lattice() {
        for width in 0..=8 {
            let lattice = Lattice::enumerate(width);
            let names: HashSet<_> = lattice
                .nodes()
                .iter()
                .map(|node| state_name(node.provided, width))
                .collect();
            assert_eq!(names.len(), lattice.len());
        }
    }

    #[test]
    fn names_ignore_acquisition_order() {
        let orders = [[2, 0], [0, 2]];
        let names: HashSet<_> = orders
            .iter()
            .map(|order| state_name(order.iter().copied().collect(), 4))
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names.contains("Missing1_3"));
    }

    #[test]
    fn names_are_valid_identifiers() {
        let lattice = Lattice::enumerate(5);
        for node in lattice.nodes() {
            let name = state_name(node.provided, 5);
            assert!(syn::parse_str::<syn::Ident>(&name).is_ok(), "{name} is not an identifier");
        }
    }
}
