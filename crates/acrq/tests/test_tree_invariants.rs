//! Integration tests for engine-level invariants: tree connectivity,
//! deterministic construction, budgets, and the trace/serde surface.

use acrq::{
    BilateralTruthValue, Formula, LookupOracle, SignedFormula, Tableau, TableauConfig,
    TableauError, TableauResult, Term,
};
use std::collections::HashSet;

fn atom(name: &str, arg: &str) -> Formula {
    Formula::predicate(name, vec![Term::new(arg).unwrap()]).unwrap()
}

fn sample_initial() -> Vec<SignedFormula> {
    vec![
        SignedFormula::asserted(atom("P", "a").and(atom("Q", "b").or(atom("R", "c")))),
        SignedFormula::denied(atom("S", "d").implies(atom("T", "e"))),
    ]
}

fn sample_oracle() -> LookupOracle {
    LookupOracle::new()
        .with_entry("P(a)", BilateralTruthValue::confirmation())
        .with_entry("Q(b)", BilateralTruthValue::refutation())
        .with_entry("R(c)", BilateralTruthValue::glut())
        .with_entry("S(d)", BilateralTruthValue::confirmation())
}

#[test]
fn test_tree_connectivity() {
    let mut tableau = Tableau::new(sample_initial(), TableauConfig::default());
    let mut oracle = sample_oracle();
    tableau.construct(Some(&mut oracle)).unwrap();

    let mut reachable = HashSet::new();
    let mut stack = vec![0usize];
    while let Some(id) = stack.pop() {
        if reachable.insert(id) {
            stack.extend(tableau.node(id).unwrap().children.iter().copied());
        }
    }
    assert_eq!(reachable.len(), tableau.node_count(), "orphaned nodes");

    // Parent/child links agree.
    for node in tableau.nodes() {
        if let Some(parent) = node.parent {
            assert!(tableau.node(parent).unwrap().children.contains(&node.id));
        } else {
            assert_eq!(node.id, 0);
        }
        for &child in &node.children {
            assert_eq!(tableau.node(child).unwrap().parent, Some(node.id));
        }
    }
}

#[test]
fn test_deterministic_construction() {
    let mut config = TableauConfig::default();
    config.enable_trace = true;

    let mut first = Tableau::new(sample_initial(), config.clone());
    let mut second = Tableau::new(sample_initial(), config);
    let first_result = first.construct(Some(&mut sample_oracle())).unwrap();
    let second_result = second.construct(Some(&mut sample_oracle())).unwrap();

    assert_eq!(first_result, second_result);
    assert_eq!(first.node_count(), second.node_count());
    assert_eq!(first.trace(), second.trace());
}

#[test]
fn test_trace_is_off_by_default() {
    let mut tableau = Tableau::new(sample_initial(), TableauConfig::default());
    tableau.construct(Some(&mut sample_oracle())).unwrap();
    assert!(tableau.trace().is_empty());
}

#[test]
fn test_trace_records_rule_applications() {
    let mut config = TableauConfig::default();
    config.enable_trace = true;
    let mut tableau = Tableau::new(
        vec![SignedFormula::asserted(atom("P", "a").and(atom("Q", "b")))],
        config,
    );
    let mut oracle = LookupOracle::new().with_default(BilateralTruthValue::confirmation());
    tableau.construct(Some(&mut oracle)).unwrap();

    let trace = tableau.trace();
    assert_eq!(trace[0].rule, "Conjunction");
    assert_eq!(trace[0].formula, "t: (P(a) & Q(b))");
    assert!(trace.iter().any(|e| e.rule == "Oracle"));
    // Structural work finishes before the first oracle event.
    let first_oracle = trace.iter().position(|e| e.rule == "Oracle").unwrap();
    assert!(trace[..first_oracle].iter().all(|e| e.rule != "Oracle"));

    // The trace serializes like any other engine output.
    let json = serde_json::to_string(trace).unwrap();
    assert!(json.contains("Conjunction"));
}

#[test]
fn test_node_budget() {
    let mut config = TableauConfig::default();
    config.max_nodes = 3;
    let formula = atom("P", "a")
        .and(atom("Q", "b"))
        .and(atom("R", "c").and(atom("S", "d")));
    let mut tableau = Tableau::new(vec![SignedFormula::asserted(formula)], config);
    let err = tableau.construct(None).unwrap_err();

    match err {
        TableauError::ResourceExhausted { nodes, .. } => assert!(nodes > 3),
        other => panic!("expected resource exhaustion, got {}", other),
    }
}

#[test]
fn test_budget_error_is_not_a_verdict() {
    let mut config = TableauConfig::default();
    config.max_steps = 1;
    let formula = atom("P", "a").and(atom("Q", "b")).or(atom("R", "c"));
    let mut tableau = Tableau::new(vec![SignedFormula::asserted(formula)], config);

    // An error result carries no satisfiability claim at all.
    assert!(tableau.construct(None).is_err());
}

#[test]
fn test_result_serialization_round_trip() {
    let mut tableau = Tableau::new(sample_initial(), TableauConfig::default());
    let mut oracle = sample_oracle();
    let result = tableau.construct(Some(&mut oracle)).unwrap();

    let json = result.to_json().unwrap();
    let parsed: TableauResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}
