use prodplan::model::Order;
use prodplan::plan::{PlanError, plan_production};
use prodplan_test_utils::builders::{OrderBuilder, orders};
use prodplan_test_utils::init_tracing;

fn planned(orders: &[Order]) -> Vec<String> {
    plan_production(orders).expect("plan should succeed")
}

#[test]
fn no_dependencies_returns_input_order() {
    init_tracing();

    let input = orders(&[("P3", None), ("P1", None), ("P2", None)]);

    assert_eq!(planned(&input), ["P3", "P1", "P2"]);
}

#[test]
fn linear_chain_is_ordered_front_to_back() {
    init_tracing();

    let input = orders(&[
        ("A", None),
        ("B", Some("A")),
        ("C", Some("B")),
        ("D", Some("C")),
    ]);

    assert_eq!(planned(&input), ["A", "B", "C", "D"]);
}

#[test]
fn siblings_follow_input_order_after_shared_prerequisite() {
    init_tracing();

    let input = orders(&[("A", None), ("B", Some("A")), ("C", Some("A"))]);

    assert_eq!(planned(&input), ["A", "B", "C"]);

    // Reversing the siblings in the input reverses them in the plan.
    let input = orders(&[("A", None), ("C", Some("A")), ("B", Some("A"))]);

    assert_eq!(planned(&input), ["A", "C", "B"]);
}

#[test]
fn empty_input_is_not_an_error() {
    init_tracing();

    assert!(planned(&[]).is_empty());
}

#[test]
fn dangling_reference_names_both_orders() {
    init_tracing();

    let input = orders(&[("A", None), ("X", Some("Y"))]);

    let err = plan_production(&input).unwrap_err();

    assert_eq!(
        err,
        PlanError::MissingDependency {
            order: "X".to_string(),
            dependency: "Y".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Dependency 'Y' for order 'X' does not exist.");
}

#[test]
fn two_cycle_fails_without_partial_plan() {
    init_tracing();

    let input = orders(&[("A", Some("B")), ("B", Some("A"))]);

    match plan_production(&input) {
        Err(PlanError::CircularDependency { unresolved, cycles }) => {
            assert_eq!(unresolved, ["A", "B"]);
            assert_eq!(cycles, vec![vec!["A".to_string(), "B".to_string()]]);
        }
        other => panic!("expected CircularDependency, got {other:?}"),
    }
}

#[test]
fn cycle_elsewhere_rejects_whole_plan() {
    init_tracing();

    // "ok" and "next" are fine on their own; the loop in X/Y/Z still fails
    // the entire call.
    let input = orders(&[
        ("ok", None),
        ("next", Some("ok")),
        ("X", Some("Z")),
        ("Y", Some("X")),
        ("Z", Some("Y")),
    ]);

    let err = plan_production(&input).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Circular dependency detected. Cannot generate a valid production plan."
    );
}

#[test]
fn self_dependency_is_a_cycle() {
    init_tracing();

    let input = orders(&[("A", Some("A"))]);

    assert!(matches!(
        plan_production(&input),
        Err(PlanError::CircularDependency { .. })
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    init_tracing();

    let input = orders(&[("A", None), ("B", Some("A")), ("A", None)]);

    let err = plan_production(&input).unwrap_err();

    assert_eq!(err.to_string(), "Order 'A' is declared more than once.");
}

#[test]
fn durations_do_not_influence_order() {
    init_tracing();

    let input = vec![
        OrderBuilder::new("slow").duration(100.0).build(),
        OrderBuilder::new("fast").duration(0.5).build(),
        OrderBuilder::new("mid").duration(10.0).after("fast").build(),
    ];

    assert_eq!(planned(&input), ["slow", "fast", "mid"]);
}

#[test]
fn repeated_calls_are_identical() {
    init_tracing();

    let input = orders(&[
        ("pack", Some("paint")),
        ("cut", None),
        ("paint", Some("weld")),
        ("weld", Some("cut")),
        ("label", Some("cut")),
        ("ship", Some("pack")),
    ]);

    let first = planned(&input);
    let second = planned(&input);

    assert_eq!(first, second);
    assert_eq!(first, ["cut", "weld", "label", "paint", "pack", "ship"]);
}

#[test]
fn empty_dependency_string_means_no_dependency() {
    init_tracing();

    let input = orders(&[("B", Some("")), ("A", None)]);

    assert_eq!(planned(&input), ["B", "A"]);

    let input = orders(&[("A", None), ("B", Some(""))]);

    assert_eq!(planned(&input), ["A", "B"]);
}
