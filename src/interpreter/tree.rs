use super::environment::Environment;
use super::error::{RangeError, RuntimeError, RuntimeErrorKind};
use super::formatter::{BasicFormatter, ErrorFormatter};
use super::native::Natives;
use super::stack::ensure_sufficient_stack;
use super::turtle::{Pen, Primitive, Turtle};
use super::{InterpreterConfig, ProgramState, SystemContext};
use crate::ast::{Command, Expression, InfixOperator, PrefixOperator, Program, Statement};

/// Exponents at or above this bound are rejected by `^`.
const MAX_EXPONENT: f64 = 32.0;

/// Everything a single run mutates.
#[derive(Debug)]
pub struct ExecutionState {
    pub turtle: Turtle,
    pub environment: Environment,
    natives: Natives,
    call_depth: usize,
}

impl ExecutionState {
    fn new(config: &InterpreterConfig) -> Self {
        Self {
            turtle: Turtle::new(),
            environment: Environment::new(),
            natives: Natives::new(config.seed),
            call_depth: 0,
        }
    }
}

pub struct TreeWalkInterpreter<C: SystemContext> {
    config: InterpreterConfig,
    state: ExecutionState,
    context: C,
    interpreter: TreeWalkStatementInterpreter,
    formatter: Box<dyn ErrorFormatter>,
}

impl<C> TreeWalkInterpreter<C>
where
    C: SystemContext,
{
    pub fn new(context: C, config: InterpreterConfig) -> Self {
        Self {
            state: ExecutionState::new(&config),
            context,
            interpreter: TreeWalkStatementInterpreter::create(&config),
            formatter: Box::new(BasicFormatter),
            config,
        }
    }

    pub fn with_error_formatter(mut self, formatter: Box<dyn ErrorFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Runs the program on a fresh turtle and fresh symbol tables until it ends or the
    /// first error halts it.
    ///
    /// The failure is reported once through the context's diagnostic channel. Primitives
    /// emitted before the failure stay emitted. The final state stays inspectable until
    /// the next run replaces it.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
    pub fn run(&mut self, program: &Program) -> Result<ProgramState, RuntimeError> {
        self.state = ExecutionState::new(&self.config);
        for stmt in program.iter() {
            if let Err(error) =
                self.interpreter
                    .interpret_statement(&mut self.state, &mut self.context, stmt)
            {
                tracing::warn!(code = error.code(), %error, "evaluation halted");
                self.state.turtle.halted = true;
                self.context.ewriteln(&self.formatter.format_error(&error));
                return Err(error);
            }
        }
        Ok(ProgramState::Finished)
    }

    pub fn is_halted(&self) -> bool {
        self.state.turtle.halted
    }

    pub fn get_turtle(&self) -> &Turtle {
        &self.state.turtle
    }

    pub fn get_environment(&self) -> &Environment {
        &self.state.environment
    }

    pub fn get_context(&self) -> &C {
        &self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }
}

pub struct TreeWalkStatementInterpreter {
    max_call_depth: usize,
}

impl TreeWalkStatementInterpreter {
    fn create(config: &InterpreterConfig) -> Self {
        Self {
            max_call_depth: config.max_call_depth,
        }
    }

    fn interpret_statement<C: SystemContext>(
        &self,
        state: &mut ExecutionState,
        context: &mut C,
        statement: &Statement,
    ) -> Result<(), RuntimeError> {
        if state.turtle.halted {
            return Ok(());
        }
        let keyword = statement.keyword();
        ensure_sufficient_stack(|| match statement {
            Statement::Command(command) => self.interpret_command(state, context, command),
            Statement::Repeat { count, body } => {
                self.interpret_repeat(state, context, count, body)
            }
            Statement::Block(body) => self.interpret_block(state, context, body),
            Statement::ProcedureDecl { name, body } => state
                .environment
                .procedures
                .define(name, body)
                .map_err(|kind| RuntimeError::new(kind, keyword)),
            Statement::Call { name } => self.interpret_call(state, context, name),
            Statement::Set { name, value } => {
                let value = self
                    .evaluate(state, value)
                    .map_err(|kind| RuntimeError::new(kind, keyword))?;
                state.environment.variables.define(name, value);
                Ok(())
            }
        })
    }

    fn evaluate(
        &self,
        state: &mut ExecutionState,
        expr: &Expression,
    ) -> Result<f64, RuntimeErrorKind> {
        ensure_sufficient_stack(|| self.evaluate_expression_node(state, expr))
    }
}

// Expression evaluator
impl TreeWalkStatementInterpreter {
    fn evaluate_expression_node(
        &self,
        state: &mut ExecutionState,
        expr: &Expression,
    ) -> Result<f64, RuntimeErrorKind> {
        let result = match expr {
            Expression::Value(v) => *v,
            Expression::Name(name) => state.environment.variables.lookup(name)?,
            Expression::Prefix { operator, rhs } => {
                let rhs = self.evaluate(state, rhs)?;
                match operator {
                    PrefixOperator::Plus => rhs,
                    PrefixOperator::Minus => -rhs,
                }
            }
            Expression::Infix { operator, lhs, rhs } => {
                let lhs = self.evaluate(state, lhs)?;
                let rhs = self.evaluate(state, rhs)?;
                self.evaluate_infix(*operator, lhs, rhs)?
            }
            Expression::Call {
                function,
                arguments,
            } => {
                let arguments = arguments
                    .iter()
                    .map(|argument| self.evaluate(state, argument))
                    .collect::<Result<Vec<f64>, _>>()?;
                state.natives.call(*function, &arguments)?
            }
        };
        Ok(result)
    }

    fn evaluate_infix(
        &self,
        operator: InfixOperator,
        lhs: f64,
        rhs: f64,
    ) -> Result<f64, RuntimeErrorKind> {
        type Operator = InfixOperator;
        let result = match operator {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(RangeError::DivisionByZero.into());
                }
                lhs / rhs
            }
            Operator::Power => {
                if rhs >= MAX_EXPONENT {
                    return Err(RangeError::ExponentTooLarge(rhs).into());
                }
                lhs.powf(rhs)
            }
        };
        Ok(result)
    }
}

// Statement interpreter
impl TreeWalkStatementInterpreter {
    fn interpret_command<C: SystemContext>(
        &self,
        state: &mut ExecutionState,
        context: &mut C,
        command: &Command,
    ) -> Result<(), RuntimeError> {
        let keyword = command.keyword();
        let fail = |kind: RuntimeErrorKind| RuntimeError::new(kind, keyword);
        match command {
            Command::Up => state.turtle.pen = Pen::Up,
            Command::Down => state.turtle.pen = Pen::Down,
            Command::Forward(distance) => {
                let distance = self.evaluate(state, distance).map_err(fail)?;
                emit(context, state.turtle.move_by(distance));
            }
            Command::Backward(distance) => {
                let distance = self.evaluate(state, distance).map_err(fail)?;
                emit(context, state.turtle.move_by(-distance));
            }
            Command::Position(x, y) => {
                let x = self.evaluate(state, x).map_err(fail)?;
                let y = self.evaluate(state, y).map_err(fail)?;
                emit(context, state.turtle.set_position(x, y));
            }
            Command::Right(angle) => {
                let angle = self.evaluate(state, angle).map_err(fail)?;
                state.turtle.turn(angle);
            }
            Command::Left(angle) => {
                let angle = self.evaluate(state, angle).map_err(fail)?;
                state.turtle.turn(-angle);
            }
            Command::Heading(angle) => {
                // The argument only matters for its failures.
                let _ = self.evaluate(state, angle).map_err(fail)?;
                state.turtle.reset_heading();
            }
            Command::Home => {
                for primitive in state.turtle.home() {
                    emit(context, primitive);
                }
            }
            Command::Color(r, g, b) => {
                let r = self.evaluate(state, r).map_err(fail)?;
                let g = self.evaluate(state, g).map_err(fail)?;
                let b = self.evaluate(state, b).map_err(fail)?;
                let primitive = state
                    .turtle
                    .set_color(r, g, b)
                    .map_err(|e| fail(e.into()))?;
                emit(context, primitive);
            }
            Command::Print(value) => {
                let value = self.evaluate(state, value).map_err(fail)?;
                context.ewriteln(&format!("{value}"));
            }
        }
        Ok(())
    }

    fn interpret_repeat<C: SystemContext>(
        &self,
        state: &mut ExecutionState,
        context: &mut C,
        count: &Expression,
        body: &Statement,
    ) -> Result<(), RuntimeError> {
        let count = self
            .evaluate(state, count)
            .map_err(|kind| RuntimeError::new(kind, "repeat"))?;
        // Saturating cast: negative and NaN counts run zero times.
        let iterations = count.floor() as u64;
        for _ in 0..iterations {
            self.interpret_statement(state, context, body)?;
        }
        Ok(())
    }

    fn interpret_block<C: SystemContext>(
        &self,
        state: &mut ExecutionState,
        context: &mut C,
        body: &[Statement],
    ) -> Result<(), RuntimeError> {
        for stmt in body.iter() {
            self.interpret_statement(state, context, stmt)?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, state, context), fields(depth = state.call_depth))]
    fn interpret_call<C: SystemContext>(
        &self,
        state: &mut ExecutionState,
        context: &mut C,
        name: &str,
    ) -> Result<(), RuntimeError> {
        let fail = |kind: RuntimeErrorKind| RuntimeError::new(kind, "call");
        let body = state.environment.procedures.lookup(name).map_err(fail)?;
        if state.call_depth >= self.max_call_depth {
            return Err(fail(RangeError::RecursionLimit(self.max_call_depth).into()));
        }

        state.call_depth += 1;
        let result = self.interpret_statement(state, context, &body);
        state.call_depth -= 1;
        result
    }
}

fn emit<C: SystemContext>(context: &mut C, primitive: Primitive) {
    tracing::trace!(%primitive, "emit");
    context.writeln(&primitive.to_string());
}
