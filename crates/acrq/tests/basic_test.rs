//! Integration tests for the structural tableau calculus (no oracle).

use acrq::{construct, Formula, SignedFormula, Term};

fn atom(name: &str, arg: &str) -> Formula {
    Formula::predicate(name, vec![Term::new(arg).unwrap()]).unwrap()
}

#[test]
fn test_conjunction_satisfiable() {
    let formula = atom("P", "a").and(atom("Q", "b"));
    let result = construct(vec![SignedFormula::asserted(formula)], None).unwrap();

    assert!(result.satisfiable);
    assert_eq!(result.open_branches, 1);
    let model = &result.models[0];
    assert_eq!(model.valuations.get("P(a)").unwrap(), "t");
    assert_eq!(model.valuations.get("Q(b)").unwrap(), "t");
}

#[test]
fn test_modus_ponens_closure() {
    // t:P(a), t:P(a)->Q(a), f:Q(a) has no model.
    let initial = vec![
        SignedFormula::asserted(atom("P", "a")),
        SignedFormula::asserted(atom("P", "a").implies(atom("Q", "a"))),
        SignedFormula::denied(atom("Q", "a")),
    ];
    let result = construct(initial, None).unwrap();

    assert!(!result.satisfiable);
    assert_eq!(result.open_branches, 0);
    assert_eq!(result.closed_branches, 2);
}

#[test]
fn test_disjunction_forks_into_two_models() {
    let formula = atom("P", "a").or(atom("Q", "a"));
    let result = construct(vec![SignedFormula::asserted(formula)], None).unwrap();

    assert!(result.satisfiable);
    assert_eq!(result.open_branches, 2);
    assert_eq!(result.models[0].valuations.get("P(a)").unwrap(), "t");
    assert_eq!(result.models[1].valuations.get("Q(a)").unwrap(), "t");
}

#[test]
fn test_denied_disjunction_extends() {
    let formula = atom("P", "a").or(atom("Q", "a"));
    let result = construct(vec![SignedFormula::denied(formula)], None).unwrap();

    assert!(result.satisfiable);
    assert_eq!(result.open_branches, 1);
    let model = &result.models[0];
    assert_eq!(model.valuations.get("P(a)").unwrap(), "f");
    assert_eq!(model.valuations.get("Q(a)").unwrap(), "f");
}

#[test]
fn test_double_negation() {
    let formula = atom("P", "a").negate().negate();
    let result = construct(vec![SignedFormula::asserted(formula)], None).unwrap();

    assert!(result.satisfiable);
    assert_eq!(result.models[0].valuations.get("P(a)").unwrap(), "t");
}

#[test]
fn test_negation_contradiction_closes() {
    let initial = vec![
        SignedFormula::asserted(atom("P", "a")),
        SignedFormula::asserted(atom("P", "a").negate()),
    ];
    let result = construct(initial, None).unwrap();
    assert!(!result.satisfiable);
}

#[test]
fn test_biconditional_forks() {
    let formula = atom("P", "a").iff(atom("Q", "a"));
    let result = construct(vec![SignedFormula::asserted(formula)], None).unwrap();

    assert!(result.satisfiable);
    assert_eq!(result.open_branches, 2);
    // Branch 1: both true. Branch 2: both false.
    assert_eq!(result.models[0].valuations.get("P(a)").unwrap(), "t");
    assert_eq!(result.models[0].valuations.get("Q(a)").unwrap(), "t");
    assert_eq!(result.models[1].valuations.get("P(a)").unwrap(), "f");
    assert_eq!(result.models[1].valuations.get("Q(a)").unwrap(), "f");
}

#[test]
fn test_denied_implication_extends() {
    // f:(P -> Q) forces t:P, f:Q on one branch.
    let formula = atom("P", "a").implies(atom("Q", "a"));
    let result = construct(vec![SignedFormula::denied(formula)], None).unwrap();

    assert!(result.satisfiable);
    assert_eq!(result.open_branches, 1);
    let model = &result.models[0];
    assert_eq!(model.valuations.get("P(a)").unwrap(), "t");
    assert_eq!(model.valuations.get("Q(a)").unwrap(), "f");
}

#[test]
fn test_starred_atom_is_distinct_from_base() {
    // A glut placed directly in the input stays open: P* is its own atom.
    let initial = vec![
        SignedFormula::asserted(atom("P", "a")),
        SignedFormula::asserted(Formula::star("P", vec![Term::new("a").unwrap()]).unwrap()),
    ];
    let result = construct(initial, None).unwrap();

    assert!(result.satisfiable);
    let model = &result.models[0];
    assert_eq!(model.valuations.get("P(a)").unwrap(), "t");
    assert_eq!(model.valuations.get("P*(a)").unwrap(), "t");
}
