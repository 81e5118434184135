pub mod expression;
pub mod formatter;

use compact_str::CompactString;
pub use expression::{Expression, Function, InfixOperator, PrefixOperator};

/// Commands acting directly on the turtle.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Up,
    Down,
    Forward(Expression),
    Backward(Expression),
    Position(Expression, Expression),
    Right(Expression),
    Left(Expression),
    Heading(Expression),
    Home,
    Color(Expression, Expression, Expression),
    Print(Expression),
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Forward(_) => "fw",
            Command::Backward(_) => "bw",
            Command::Position(_, _) => "pos",
            Command::Right(_) => "rt",
            Command::Left(_) => "lt",
            Command::Heading(_) => "hd",
            Command::Home => "home",
            Command::Color(_, _, _) => "color",
            Command::Print(_) => "print",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Command(Command),
    Repeat {
        count: Expression,
        body: Box<Statement>,
    },
    Block(Vec<Statement>),
    ProcedureDecl {
        name: CompactString,
        body: Box<Statement>,
    },
    Call {
        name: CompactString,
    },
    Set {
        name: CompactString,
        value: Expression,
    },
}

impl Statement {
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Command(command) => command.keyword(),
            Statement::Repeat { .. } => "repeat",
            Statement::Block(_) => "block",
            Statement::ProcedureDecl { .. } => "proc",
            Statement::Call { .. } => "call",
            Statement::Set { .. } => "set",
        }
    }
}

// Constructors used by the parser and by tests.
impl Statement {
    pub fn up() -> Self {
        Self::Command(Command::Up)
    }

    pub fn down() -> Self {
        Self::Command(Command::Down)
    }

    pub fn forward(distance: impl Into<Expression>) -> Self {
        Self::Command(Command::Forward(distance.into()))
    }

    pub fn backward(distance: impl Into<Expression>) -> Self {
        Self::Command(Command::Backward(distance.into()))
    }

    pub fn position(x: impl Into<Expression>, y: impl Into<Expression>) -> Self {
        Self::Command(Command::Position(x.into(), y.into()))
    }

    pub fn right(angle: impl Into<Expression>) -> Self {
        Self::Command(Command::Right(angle.into()))
    }

    pub fn left(angle: impl Into<Expression>) -> Self {
        Self::Command(Command::Left(angle.into()))
    }

    pub fn heading(angle: impl Into<Expression>) -> Self {
        Self::Command(Command::Heading(angle.into()))
    }

    pub fn home() -> Self {
        Self::Command(Command::Home)
    }

    pub fn color(
        red: impl Into<Expression>,
        green: impl Into<Expression>,
        blue: impl Into<Expression>,
    ) -> Self {
        Self::Command(Command::Color(red.into(), green.into(), blue.into()))
    }

    pub fn print(value: impl Into<Expression>) -> Self {
        Self::Command(Command::Print(value.into()))
    }

    pub fn repeat(count: impl Into<Expression>, body: Statement) -> Self {
        Self::Repeat {
            count: count.into(),
            body: Box::new(body),
        }
    }

    pub fn block(body: Vec<Statement>) -> Self {
        Self::Block(body)
    }

    pub fn procedure(name: &str, body: Statement) -> Self {
        Self::ProcedureDecl {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn call(name: &str) -> Self {
        Self::Call { name: name.into() }
    }

    pub fn set(name: &str, value: impl Into<Expression>) -> Self {
        Self::Set {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A whole turtle program: its top-level statements in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
