use compact_str::CompactString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Plus,
    Minus,
}

impl PrefixOperator {
    pub fn symbol(&self) -> char {
        match self {
            PrefixOperator::Plus => '+',
            PrefixOperator::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl InfixOperator {
    pub fn symbol(&self) -> char {
        match self {
            InfixOperator::Add => '+',
            InfixOperator::Subtract => '-',
            InfixOperator::Multiply => '*',
            InfixOperator::Divide => '/',
            InfixOperator::Power => '^',
        }
    }
}

/// Built-in math functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Random,
}

impl Function {
    pub fn get_name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Sqrt => "sqrt",
            Function::Random => "random",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Function::Random => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Value(f64),
    Name(CompactString),
    Prefix {
        operator: PrefixOperator,
        rhs: Box<Expression>,
    },
    Infix {
        operator: InfixOperator,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Call {
        function: Function,
        arguments: Vec<Expression>,
    },
}

// Constructors used by the parser and by tests.
impl Expression {
    pub fn value(value: f64) -> Self {
        Self::Value(value)
    }

    pub fn name(name: &str) -> Self {
        Self::Name(name.into())
    }

    pub fn prefix(operator: PrefixOperator, rhs: Expression) -> Self {
        Self::Prefix {
            operator,
            rhs: Box::new(rhs),
        }
    }

    pub fn negate(rhs: Expression) -> Self {
        Self::prefix(PrefixOperator::Minus, rhs)
    }

    pub fn infix(lhs: Expression, operator: InfixOperator, rhs: Expression) -> Self {
        Self::Infix {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn add(lhs: Expression, rhs: Expression) -> Self {
        Self::infix(lhs, InfixOperator::Add, rhs)
    }

    pub fn subtract(lhs: Expression, rhs: Expression) -> Self {
        Self::infix(lhs, InfixOperator::Subtract, rhs)
    }

    pub fn multiply(lhs: Expression, rhs: Expression) -> Self {
        Self::infix(lhs, InfixOperator::Multiply, rhs)
    }

    pub fn divide(lhs: Expression, rhs: Expression) -> Self {
        Self::infix(lhs, InfixOperator::Divide, rhs)
    }

    pub fn power(lhs: Expression, rhs: Expression) -> Self {
        Self::infix(lhs, InfixOperator::Power, rhs)
    }

    pub fn call(function: Function, arguments: Vec<Expression>) -> Self {
        Self::Call {
            function,
            arguments,
        }
    }

    pub fn sin(argument: Expression) -> Self {
        Self::call(Function::Sin, vec![argument])
    }

    pub fn cos(argument: Expression) -> Self {
        Self::call(Function::Cos, vec![argument])
    }

    pub fn tan(argument: Expression) -> Self {
        Self::call(Function::Tan, vec![argument])
    }

    pub fn sqrt(argument: Expression) -> Self {
        Self::call(Function::Sqrt, vec![argument])
    }

    pub fn random(lower: Expression, upper: Expression) -> Self {
        Self::call(Function::Random, vec![lower, upper])
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}
