use super::{Command, Expression, Program, Statement};
use std::fmt::Write;

const WRITE_FMT_MSG: &str =
    "Encountered an error while attempting to write format string to buffer.";
const INDENT: &str = "  ";

pub trait ProgramFormatter {
    fn format(&self, program: &Program) -> String;
}

pub struct DebugFormatter;

impl ProgramFormatter for DebugFormatter {
    fn format(&self, program: &Program) -> String {
        format!("{program:#?}")
    }
}

/// Renders a program back into turtle source, one statement per line.
pub struct TurtleFormatter;

impl ProgramFormatter for TurtleFormatter {
    fn format(&self, program: &Program) -> String {
        let mut buffer = String::new();
        for statement in program.iter() {
            Self::format_statement(&mut buffer, statement, 0);
        }
        buffer
    }
}

impl TurtleFormatter {
    pub fn format_expression(expr: &Expression) -> String {
        match expr {
            Expression::Value(v) => format!("{v}"),
            Expression::Name(name) => format!("{name}"),
            Expression::Prefix { operator, rhs } => {
                format!("{}{}", operator.symbol(), Self::format_expression(rhs))
            }
            Expression::Infix { operator, lhs, rhs } => format!(
                "({} {} {})",
                Self::format_expression(lhs),
                operator.symbol(),
                Self::format_expression(rhs)
            ),
            Expression::Call {
                function,
                arguments,
            } => {
                let arguments: Vec<String> =
                    arguments.iter().map(Self::format_expression).collect();
                match arguments.as_slice() {
                    [argument] => format!("{} {argument}", function.get_name()),
                    _ => format!("{} ({})", function.get_name(), arguments.join(", ")),
                }
            }
        }
    }

    fn format_arguments(arguments: &[&Expression]) -> String {
        let arguments: Vec<String> = arguments
            .iter()
            .map(|expr| Self::format_expression(expr))
            .collect();
        arguments.join(", ")
    }

    fn format_command(command: &Command) -> String {
        let keyword = command.keyword();
        let arguments = match command {
            Command::Up | Command::Down | Command::Home => return keyword.into(),
            Command::Forward(v)
            | Command::Backward(v)
            | Command::Right(v)
            | Command::Left(v)
            | Command::Heading(v)
            | Command::Print(v) => Self::format_arguments(&[v]),
            Command::Position(x, y) => Self::format_arguments(&[x, y]),
            Command::Color(r, g, b) => Self::format_arguments(&[r, g, b]),
        };
        format!("{keyword} {arguments}")
    }

    fn format_statement(buffer: &mut String, statement: &Statement, depth: usize) {
        let indent = INDENT.repeat(depth);
        match statement {
            Statement::Command(command) => {
                writeln!(buffer, "{indent}{}", Self::format_command(command))
                    .expect(WRITE_FMT_MSG);
            }
            Statement::Repeat { count, body } => {
                write!(buffer, "{indent}repeat {} ", Self::format_expression(count))
                    .expect(WRITE_FMT_MSG);
                Self::format_body(buffer, body, depth);
            }
            Statement::Block(_) => {
                buffer.push_str(&indent);
                Self::format_body(buffer, statement, depth);
            }
            Statement::ProcedureDecl { name, body } => {
                write!(buffer, "{indent}proc {name} ").expect(WRITE_FMT_MSG);
                Self::format_body(buffer, body, depth);
            }
            Statement::Call { name } => {
                writeln!(buffer, "{indent}call {name}").expect(WRITE_FMT_MSG);
            }
            Statement::Set { name, value } => {
                writeln!(buffer, "{indent}set {name} {}", Self::format_expression(value))
                    .expect(WRITE_FMT_MSG);
            }
        }
    }

    // Bodies are always rendered braced, whether or not the tree holds a block.
    fn format_body(buffer: &mut String, body: &Statement, depth: usize) {
        buffer.push_str("{\n");
        match body {
            Statement::Block(statements) => {
                for statement in statements.iter() {
                    Self::format_statement(buffer, statement, depth + 1);
                }
            }
            statement => Self::format_statement(buffer, statement, depth + 1),
        }
        writeln!(buffer, "{}}}", INDENT.repeat(depth)).expect(WRITE_FMT_MSG);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_nested_bodies_with_indentation() {
        let program = Program::new(vec![
            Statement::set("size", 10.0),
            Statement::repeat(
                4.0,
                Statement::block(vec![
                    Statement::forward(Expression::name("size")),
                    Statement::right(90.0),
                ]),
            ),
        ]);
        let expected = "set size 10\nrepeat 4 {\n  fw size\n  rt 90\n}\n";
        assert_eq!(TurtleFormatter.format(&program), expected);
    }

    #[test]
    fn formats_expressions_fully_parenthesized() {
        let expr = Expression::add(
            Expression::value(1.0),
            Expression::multiply(
                Expression::negate(Expression::name("x")),
                Expression::random(1.0.into(), 5.0.into()),
            ),
        );
        assert_eq!(
            TurtleFormatter::format_expression(&expr),
            "(1 + (-x * random (1, 5)))"
        );
    }

    #[test]
    fn formats_unary_function_calls_without_parentheses() {
        let expr = Expression::sqrt(Expression::sin(Expression::value(3.0)));
        assert_eq!(TurtleFormatter::format_expression(&expr), "sqrt sin 3");
    }

    #[test]
    fn formats_procedures_and_calls() {
        let program = Program::new(vec![
            Statement::procedure("dot", Statement::color(1.0, 0.5, 0.0)),
            Statement::call("dot"),
        ]);
        let expected = "proc dot {\n  color 1, 0.5, 0\n}\ncall dot\n";
        assert_eq!(TurtleFormatter.format(&program), expected);
    }
}
