//! Canonical document names
//!
//! Only the leading definition of the embedded document matters: its
//! kind and name select the precompiled artifact that replaces the
//! call.

use graphql_parser::query::{Definition, OperationDefinition};

/// Derive the canonical artifact name from the document's first
/// definition: `<Name>Document` for operations, `<Name>FragmentDoc` for
/// fragments
///
/// Returns None when the text does not parse as a document, or the
/// first definition is anonymous.
pub fn canonical_document_name(text: &str) -> Option<String> {
    let document = graphql_parser::parse_query::<&str>(text).ok()?;

    match document.definitions.first()? {
        Definition::Operation(operation) => {
            let name = match operation {
                OperationDefinition::Query(query) => query.name.as_ref(),
                OperationDefinition::Mutation(mutation) => mutation.name.as_ref(),
                OperationDefinition::Subscription(subscription) => subscription.name.as_ref(),
                OperationDefinition::SelectionSet(_) => None,
            }?;
            Some(format!("{name}Document"))
        }
        Definition::Fragment(fragment) => Some(format!("{}FragmentDoc", fragment.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kinds() {
        assert_eq!(
            canonical_document_name("query Users { users { id } }").as_deref(),
            Some("UsersDocument")
        );
        assert_eq!(
            canonical_document_name("mutation AddUser { addUser { id } }").as_deref(),
            Some("AddUserDocument")
        );
        assert_eq!(
            canonical_document_name("subscription OnUser { user { id } }").as_deref(),
            Some("OnUserDocument")
        );
    }

    #[test]
    fn test_fragment() {
        assert_eq!(
            canonical_document_name("fragment UserFields on User { id }").as_deref(),
            Some("UserFieldsFragmentDoc")
        );
    }

    #[test]
    fn test_only_first_definition_counts() {
        let text = "fragment A on T { f }\nquery B { g }";
        assert_eq!(canonical_document_name(text).as_deref(), Some("AFragmentDoc"));
    }

    #[test]
    fn test_anonymous_and_invalid() {
        assert_eq!(canonical_document_name("{ users { id } }"), None);
        assert_eq!(canonical_document_name("query { users { id } }"), None);
        assert_eq!(canonical_document_name("not graphql"), None);
        assert_eq!(canonical_document_name(""), None);
    }
}
