use approx::assert_abs_diff_eq;
use glam::DVec2;
use gsharp_eval::{interpret, interpret_with_seed, run, Color, Environment, Value};
use gsharp_geometry::FigureKind;

fn value_of(source: &str) -> Value {
    let mut env = Environment::with_seed(0);
    run(source, &mut env).unwrap().value.unwrap()
}

#[test]
fn test_named_point_draws_once() {
    let drawings = interpret("point p(1,2); draw p;").unwrap();
    assert_eq!(drawings.len(), 1);
    assert_eq!(drawings[0].kind, FigureKind::Point);
    assert_eq!(drawings[0].points, vec![DVec2::new(1.0, 2.0)]);
}

#[test]
fn test_arithmetic_matches_floating_point() {
    let cases = [
        ("7 + 2", 9.0),
        ("7 - 2", 5.0),
        ("7 * 2", 14.0),
        ("7 / 2", 3.5),
        ("7 ^ 2", 49.0),
        ("2 ^ 0.5", 2f64.powf(0.5)),
        ("1.5 - -2", 3.5),
    ];
    for (source, expected) in cases {
        assert_eq!(value_of(source), Value::Number(expected), "{}", source);
    }
}

#[test]
fn test_overlapping_circles_meet_twice() {
    let mut env = Environment::with_seed(0);
    run(
        "circle a(point(0, 0), 5); circle b(point(8, 0), 5); p, q = intersect(a, b);",
        &mut env,
    )
    .unwrap();

    let centers = [DVec2::ZERO, DVec2::new(8.0, 0.0)];
    let p = env.lookup("p").unwrap().as_point().unwrap();
    let q = env.lookup("q").unwrap().as_point().unwrap();
    for point in [p, q] {
        assert_abs_diff_eq!(point.x, 4.0, epsilon = 1e-9);
        for center in centers {
            assert_abs_diff_eq!(point.distance(center), 5.0, epsilon = 1e-9);
        }
    }
    assert_abs_diff_eq!(p.y, -q.y, epsilon = 1e-9);
    assert_abs_diff_eq!(p.y.abs(), 3.0, epsilon = 1e-9);
}

#[test]
fn test_concentric_circles_do_not_meet() {
    let drawings = interpret(
        "circle a(point(1, 1), 2); circle b(point(1, 1), 4); draw intersect(a, b);",
    )
    .unwrap();
    assert!(drawings.is_empty());
}

#[test]
fn test_parallel_lines_do_not_meet() {
    let source = "line a(point(0, 0), point(4, 2)); line b(point(0, 1), point(4, 3)); intersect(a, b)";
    assert_eq!(value_of(source).to_string(), "{}");
}

#[test]
fn test_const_destructures_sequence() {
    let mut env = Environment::with_seed(0);
    run("const a, b = {1,2,3};", &mut env).unwrap();
    assert_eq!(env.lookup("a"), Some(Value::Number(1.0)));
    assert_eq!(env.lookup("b").unwrap().to_string(), "{2, 3}");
}

#[test]
fn test_self_intersection_aborts() {
    let err = interpret("segment s(point(0, 0), point(1, 1));\nintersect(s, s);\ndraw s;")
        .unwrap_err();
    assert_eq!(
        err,
        "line 2: infinite intersections: both figures are identical"
    );
}

#[test]
fn test_restore_returns_to_previous_color() {
    let drawings =
        interpret("color Red; draw point p(0,0); restore; draw point q(1,1);").unwrap();
    assert_eq!(drawings.len(), 2);
    assert_eq!(drawings[0].color, Color::Red);
    assert_eq!(drawings[1].color, Color::Black);
}

#[test]
fn test_restore_on_default_color_is_noop() {
    let drawings = interpret("restore; restore; draw point p(0, 0);").unwrap();
    assert_eq!(drawings[0].color, Color::Black);
}

#[test]
fn test_runs_do_not_leak_state() {
    interpret("point p(1, 1); x = 3; function f(a) => a;").unwrap();

    let err = interpret("draw p;").unwrap_err();
    assert_eq!(err, "line 1: unknown figure 'p'");
    let err = interpret("y = x;").unwrap_err();
    assert_eq!(err, "line 1: undefined identifier 'x'");
    let err = interpret("f(1);").unwrap_err();
    assert_eq!(err, "line 1: unknown function 'f'");
    assert!(interpret("x = 4;").is_ok());
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let source = "point p; circle c; segment s; arc a; draw p; draw c; draw s; draw a;";
    let first = interpret_with_seed(source, 2024).unwrap();
    let second = interpret_with_seed(source, 2024).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert_ne!(first, interpret_with_seed(source, 2025).unwrap());
}
