//! Property-based tests for the statement splitter.
//!
//! Invariants checked:
//! - one `;`-terminated line group becomes exactly one statement
//! - non-whitespace content is preserved in order
//! - comment lines never leak into any statement
//! - an unterminated trailing statement is still emitted

use proptest::prelude::*;

use portal_db_setup::splitter::split_statements;

/// A single-line statement body: no semicolons, no newlines, never
/// comment-like, trimmed form always non-empty.
fn arb_statement_body() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_ ]{0,30}".prop_map(|s| format!("SELECT '{}'", s.trim()))
}

proptest! {
    #[test]
    fn terminated_bodies_split_one_to_one(
        bodies in prop::collection::vec(arb_statement_body(), 1..10)
    ) {
        let input: String = bodies.iter().map(|b| format!("{b};\n")).collect();
        let statements = split_statements(&input);

        prop_assert_eq!(statements.len(), bodies.len());

        let emitted: String = statements
            .concat()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let original: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(emitted, original);
    }

    #[test]
    fn comment_lines_are_invisible_to_the_splitter(
        bodies in prop::collection::vec(arb_statement_body(), 1..10)
    ) {
        let mut input = String::new();
        for (i, body) in bodies.iter().enumerate() {
            input.push_str(&format!("-- noise {i}\n"));
            input.push('\n');
            input.push_str(&format!("{body};\n"));
        }

        let statements = split_statements(&input);

        prop_assert_eq!(statements.len(), bodies.len());
        for statement in &statements {
            prop_assert!(!statement.contains("noise"));
        }
    }

    #[test]
    fn unterminated_tail_is_still_emitted(
        bodies in prop::collection::vec(arb_statement_body(), 2..8)
    ) {
        let mut input: String = bodies[..bodies.len() - 1]
            .iter()
            .map(|b| format!("{b};\n"))
            .collect();
        input.push_str(bodies.last().unwrap());

        let statements = split_statements(&input);

        prop_assert_eq!(statements.len(), bodies.len());
        prop_assert_eq!(statements.last().unwrap(), bodies.last().unwrap());
    }
}
