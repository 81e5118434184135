use proptest::prelude::*;
use turtle::{
    ast::{Expression, Program, Statement},
    interpreter::{
        context::BufferedContext, turtle::Turtle, InterpreterConfig, TreeWalkInterpreter,
    },
};

fn heading_strategy() -> impl Strategy<Value = f64> {
    0.0..360.0f64
}

fn turn_strategy() -> impl Strategy<Value = f64> {
    -360.0..360.0f64
}

proptest! {
    #[test]
    fn turn_then_inverse_turn_restores_heading(start in heading_strategy(), delta in turn_strategy()) {
        let mut turtle = Turtle::new();
        turtle.heading = start;
        turtle.turn(delta);
        prop_assert!((0.0..360.0).contains(&turtle.heading));
        turtle.turn(-delta);
        let difference = (turtle.heading - start).abs();
        // Equal up to rounding, or a full turn apart when the rounding crossed the wrap.
        prop_assert!(difference < 1e-9 || (difference - 360.0).abs() < 1e-9);
    }

    #[test]
    fn movement_preserves_distance(heading in heading_strategy(), distance in -100.0..100.0f64) {
        let mut turtle = Turtle::new();
        turtle.heading = heading;
        turtle.move_by(distance);
        let travelled = (turtle.x * turtle.x + turtle.y * turtle.y).sqrt();
        prop_assert!((travelled - distance.abs()).abs() < 1e-9);
    }

    #[test]
    fn only_the_latest_binding_is_visible(values in prop::collection::vec(-1e6..1e6f64, 1..20)) {
        let mut statements: Vec<Statement> = values
            .iter()
            .map(|v| Statement::set("x", *v))
            .collect();
        statements.push(Statement::print(Expression::name("x")));
        let program = Program::new(statements);

        let mut interpreter = TreeWalkInterpreter::new(BufferedContext::new(), InterpreterConfig::default());
        prop_assert!(interpreter.run(&program).is_ok());
        let expected = format!("{}\n", values.last().unwrap());
        prop_assert_eq!(interpreter.get_context().get_diagnostics(), expected.as_str());
    }

    #[test]
    fn random_stays_in_interval(lower in -1e3..1e3f64, width in 0.0..1e3f64, seed in any::<u64>()) {
        let upper = lower + width;
        let program = Program::new(vec![Statement::set(
            "r",
            Expression::random(lower.into(), upper.into()),
        )]);
        let mut interpreter = TreeWalkInterpreter::new(
            BufferedContext::new(),
            InterpreterConfig::default().with_seed(seed),
        );
        prop_assert!(interpreter.run(&program).is_ok());
        let value = interpreter.get_environment().variables.lookup("r").unwrap();
        prop_assert!(lower <= value && value <= upper);
    }
}
