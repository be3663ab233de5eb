use crate::schema::{Field, Role};

/// A schema's fields partitioned by role, each partition keeping declaration order.
#[derive(Debug)]
pub struct Classified<'a> {
    pub required: Vec<&'a Field>,
    pub optional: Vec<&'a Field>,
    pub excluded: Vec<&'a Field>,
    /// Every field, as declared. The record is rebuilt in this order.
    pub full_order: Vec<&'a Field>,
}

impl<'a> Classified<'a> {
    pub fn new(fields: &'a [Field]) -> Self {
        let mut classified = Self {
            required: Vec::new(),
            optional: Vec::new(),
            excluded: Vec::new(),
            full_order: Vec::with_capacity(fields.len()),
        };
        for field in fields {
            classified.full_order.push(field);
            match field.role {
                Role::Required => classified.required.push(field),
                Role::Optional => classified.optional.push(field),
                Role::Excluded => classified.excluded.push(field),
            }
        }
        classified
    }

    /// Number of required fields, i.e. the lattice width.
    pub fn width(&self) -> usize {
        self.required.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use syn::parse_quote;

    fn names(fields: &[&Field]) -> Vec<String> {
        fields.iter().map(|f| f.name()).collect()
    }

    #[test]
    fn partitions_keep_declaration_order() {
        let schema = Schema::new(
            parse_quote!(Person),
            vec![
                (parse_quote!(email), parse_quote!(String), Role::Optional),
                (parse_quote!(last_name), parse_quote!(String), Role::Required),
                (parse_quote!(internal_id), parse_quote!(u64), Role::Excluded),
                (parse_quote!(first_name), parse_quote!(String), Role::Required),
                (parse_quote!(phone), parse_quote!(String), Role::Optional),
            ],
        );
        let classified = Classified::new(&schema.fields);
        assert_eq!(names(&classified.required), vec!["last_name", "first_name"]);
        assert_eq!(names(&classified.optional), vec!["email", "phone"]);
        assert_eq!(names(&classified.excluded), vec!["internal_id"]);
        assert_eq!(
            names(&classified.full_order),
            vec!["email", "last_name", "internal_id", "first_name", "phone"]
        );
        assert_eq!(classified.width(), 2);
    }

    #[test]
    fn empty_schema_classifies_to_nothing() {
        let classified = Classified::new(&[]);
        assert_eq!(classified.width(), 0);
        assert!(classified.optional.is_empty());
        assert!(classified.full_order.is_empty());
    }
}
