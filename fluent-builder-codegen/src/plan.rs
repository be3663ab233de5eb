//! A data description of the builder a schema produces, for tooling and tests.

use crate::classify::Classified;
use crate::error::SchemaError;
use crate::lattice::{Lattice, Subset};
use crate::namer::state_name;
use crate::schema::{Field, Schema};
use crate::unit::module_name;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderPlan {
    pub record: String,
    pub unit: String,
    pub module: String,
    pub required: Vec<String>,
    pub optional: Vec<String>,
    pub excluded: Vec<String>,
    pub states: Vec<StatePlan>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatePlan {
    pub name: String,
    pub provided: Vec<String>,
    pub missing: Vec<String>,
    pub transitions: Vec<TransitionPlan>,
    /// Whether `build` is available on this state.
    pub builds: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPlan {
    pub field: String,
    pub target: String,
}

impl BuilderPlan {
    pub fn state(&self, name: &str) -> Option<&StatePlan> {
        self.states.iter().find(|state| state.name == name)
    }

    /// Follow `fields` from the initial state, returning the state reached, or
    /// `None` when some field has no transition along the way.
    pub fn walk<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Option<&StatePlan> {
        let mut current = self.states.first()?;
        for field in fields {
            let transition = current.transitions.iter().find(|t| t.field == field)?;
            current = self.state(&transition.target)?;
        }
        Some(current)
    }
}

pub fn plan(schema: &Schema) -> Result<BuilderPlan, SchemaError> {
    schema.validate()?;
    let classified = Classified::new(&schema.fields);
    let width = classified.width();
    let lattice = Lattice::enumerate(width);

    let names_in = |subset: Subset| -> Vec<String> {
        subset
            .positions()
            .map(|position| classified.required[position].name())
            .collect()
    };

    let states = lattice
        .nodes()
        .iter()
        .map(|node| StatePlan {
            name: state_name(node.provided, width),
            provided: names_in(node.provided),
            missing: names_in(node.missing),
            transitions: node
                .transitions()
                .map(|(position, successor)| TransitionPlan {
                    field: classified.required[position].name(),
                    target: state_name(successor, width),
                })
                .collect(),
            builds: node.is_final(),
        })
        .collect();

    Ok(BuilderPlan {
        record: schema.name.to_string(),
        unit: schema.unit_name(),
        module: module_name(schema),
        required: names(&classified.required),
        optional: names(&classified.optional),
        excluded: names(&classified.excluded),
        states,
    })
}

fn names(fields: &[&Field]) -> Vec<String> {
    fields.iter().map(|field| field.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Role;
    use syn::parse_quote;

    #[test]
    fn two_required_fields_give_four_states() {
        let schema = Schema::new(
            parse_quote!(Pair),
            vec![
                (parse_quote!(a), parse_quote!(u32), Role::Required),
                (parse_quote!(b), parse_quote!(u32), Role::Required),
            ],
        );
        let plan = plan(&schema).unwrap();
        let names: Vec<&str> = plan.states.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Initial", "Missing1", "Missing0", "Final"]);

        assert_eq!(plan.walk(["a"]).unwrap().name, "Missing1");
        assert_eq!(plan.walk(["b"]).unwrap().name, "Missing0");
        assert_eq!(plan.walk(["a", "b"]).unwrap().name, "Final");
        assert_eq!(plan.walk(["b", "a"]).unwrap().name, "Final");
        assert!(plan.walk(["a", "a"]).is_none());

        let builders: Vec<&str> = plan.states.iter().filter(|s| s.builds).map(|s| s.name.as_str()).collect();
        assert_eq!(builders, vec!["Final"]);
    }

    #[test]
    fn excluded_fields_have_no_transition_anywhere() {
        let schema = Schema::new(
            parse_quote!(Account),
            vec![
                (parse_quote!(id), parse_quote!(u64), Role::Required),
                (parse_quote!(note), parse_quote!(String), Role::Optional),
                (parse_quote!(secret), parse_quote!(String), Role::Excluded),
            ],
        );
        let plan = plan(&schema).unwrap();
        assert_eq!(plan.states.len(), 2);
        assert_eq!(plan.unit, "AccountBuilder");
        assert_eq!(plan.module, "account_builder");
        assert_eq!(plan.excluded, vec!["secret"]);
        for state in &plan.states {
            assert!(state.transitions.iter().all(|t| t.field != "secret" && t.field != "note"));
        }
        let done = plan.walk(["id"]).unwrap();
        assert!(done.builds);
        assert_eq!(done.provided, vec!["id"]);
    }

    #[test]
    fn no_required_fields_give_a_single_building_state() {
        for fields in [
            vec![],
            vec![
                (parse_quote!(note), parse_quote!(String), Role::Optional),
                (parse_quote!(secret), parse_quote!(u8), Role::Excluded),
            ],
        ] {
            let schema = Schema::new(parse_quote!(Loose), fields);
            let plan = plan(&schema).unwrap();
            assert_eq!(plan.states.len(), 1);
            let only = &plan.states[0];
            assert_eq!(only.name, "Initial");
            assert!(only.builds);
            assert!(only.transitions.is_empty());
        }
    }

    #[test]
    fn every_permutation_of_three_fields_finishes() {
        let schema = Schema::new(
            parse_quote!(Order),
            vec![
                (parse_quote!(first), parse_quote!(String), Role::Required),
                (parse_quote!(second), parse_quote!(String), Role::Required),
                (parse_quote!(third), parse_quote!(String), Role::Required),
            ],
        );
        let plan = plan(&schema).unwrap();
        assert_eq!(plan.states.len(), 8);
        let orders = [
            ["first", "second", "third"],
            ["first", "third", "second"],
            ["second", "first", "third"],
            ["second", "third", "first"],
            ["third", "first", "second"],
            ["third", "second", "first"],
        ];
        for order in orders {
            assert_eq!(plan.walk(order).unwrap().name, "Final", "{order:?}");
        }
        // two acquisition orders of the same pair meet in one state
        assert_eq!(
            plan.walk(["third", "first"]).unwrap().name,
            plan.walk(["first", "third"]).unwrap().name
        );
        assert_eq!(plan.walk(["first", "third"]).unwrap().name, "Missing1");
    }
}
