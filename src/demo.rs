//! Small programs bundled with the binary, built directly as syntax trees.

use crate::ast::{Expression, Program, Statement};

pub const DEMO_NAMES: [&str; 7] = [
    "square",
    "star",
    "spiral",
    "random-walk",
    "palette",
    "broken-color",
    "runaway",
];

pub fn get_demo(name: &str) -> Option<Program> {
    let program = match name {
        "square" => square(),
        "star" => star(),
        "spiral" => spiral(),
        "random-walk" => random_walk(),
        "palette" => palette(),
        "broken-color" => broken_color(),
        "runaway" => runaway(),
        _ => return None,
    };
    Some(program)
}

fn square() -> Program {
    Program::new(vec![
        Statement::up(),
        Statement::position(-50.0, -50.0),
        Statement::down(),
        Statement::repeat(
            4.0,
            Statement::block(vec![Statement::forward(100.0), Statement::right(90.0)]),
        ),
    ])
}

fn star() -> Program {
    Program::new(vec![
        Statement::procedure(
            "branch",
            Statement::block(vec![Statement::forward(80.0), Statement::right(144.0)]),
        ),
        Statement::color(0.8, 0.1, 0.1),
        Statement::repeat(5.0, Statement::call("branch")),
    ])
}

fn spiral() -> Program {
    let step = || Expression::name("step");
    Program::new(vec![
        Statement::set("step", 5.0),
        Statement::repeat(
            36.0,
            Statement::block(vec![
                Statement::forward(step()),
                Statement::right(Expression::divide(
                    Expression::value(360.0),
                    Expression::value(12.0),
                )),
                Statement::set("step", Expression::add(step(), Expression::value(2.5))),
            ]),
        ),
        Statement::print(step()),
    ])
}

fn random_walk() -> Program {
    Program::new(vec![
        Statement::procedure(
            "stagger",
            Statement::block(vec![
                Statement::right(Expression::random(
                    Expression::value(-90.0),
                    Expression::value(90.0),
                )),
                Statement::forward(Expression::random(
                    Expression::value(5.0),
                    Expression::value(20.0),
                )),
            ]),
        ),
        Statement::repeat(50.0, Statement::call("stagger")),
    ])
}

fn palette() -> Program {
    let shade = || Expression::name("shade");
    Program::new(vec![
        Statement::set("shade", 0.0),
        Statement::repeat(
            5.0,
            Statement::block(vec![
                Statement::color(shade(), Expression::sqrt(shade()), 0.5),
                Statement::forward(Expression::multiply(
                    Expression::name("SQRT2"),
                    Expression::value(10.0),
                )),
                Statement::set("shade", Expression::add(shade(), Expression::value(0.25))),
            ]),
        ),
    ])
}

fn broken_color() -> Program {
    Program::new(vec![
        Statement::forward(10.0),
        Statement::color(1.5, 0.0, 0.0),
        Statement::forward(10.0),
    ])
}

fn runaway() -> Program {
    Program::new(vec![
        Statement::procedure(
            "again",
            Statement::block(vec![Statement::forward(1.0), Statement::call("again")]),
        ),
        Statement::call("again"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_demo_exists() {
        for name in DEMO_NAMES {
            assert!(get_demo(name).is_some(), "Missing demo {name}");
        }
        assert!(get_demo("nonexistent").is_none());
    }
}
