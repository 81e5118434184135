use super::error::RuntimeErrorKind;
use crate::ast::Statement;
use compact_str::{CompactString, ToCompactString};
use std::collections::{hash_map::Entry, HashMap};
use std::rc::Rc;

const CONSTANTS: [(&str, f64); 3] = [
    ("PI", std::f64::consts::PI),
    ("SQRT2", std::f64::consts::SQRT_2),
    ("SQRT3", 1.732_050_807_568_877_2),
];

/// Variable bindings. Redefinition overwrites, so only the latest binding is reachable.
#[derive(Debug, Clone)]
pub struct Variables {
    values: HashMap<CompactString, f64>,
}

impl Variables {
    pub fn new() -> Self {
        let mut values = HashMap::new();

        // Inject constants here
        for (name, value) in CONSTANTS {
            values.insert(name.to_compact_string(), value);
        }

        Self { values }
    }

    pub fn define(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_compact_string(), value);
    }

    pub fn lookup(&self, name: &str) -> Result<f64, RuntimeErrorKind> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeErrorKind::UndefinedName(name.to_compact_string()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Variables {
    fn default() -> Self {
        Self::new()
    }
}

/// Procedure bindings. A name can be bound once per run.
#[derive(Debug, Clone, Default)]
pub struct Procedures {
    bodies: HashMap<CompactString, Rc<Statement>>,
}

impl Procedures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: &str, body: &Statement) -> Result<(), RuntimeErrorKind> {
        match self.bodies.entry(name.to_compact_string()) {
            Entry::Occupied(_) => Err(RuntimeErrorKind::DuplicateProcedure(
                name.to_compact_string(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(Rc::new(body.clone()));
                Ok(())
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Rc<Statement>, RuntimeErrorKind> {
        self.bodies
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeErrorKind::UndefinedProcedure(name.to_compact_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }
}

/// Both symbol tables of a single run. There are no nested scopes.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub variables: Variables,
    pub procedures: Procedures,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_preloaded() {
        let variables = Variables::new();
        assert_eq!(variables.lookup("PI"), Ok(std::f64::consts::PI));
        assert_eq!(variables.lookup("SQRT2"), Ok(std::f64::consts::SQRT_2));
        assert!((variables.lookup("SQRT3").unwrap() - 3f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn redefinition_overwrites_binding() {
        let mut variables = Variables::new();
        let initial = variables.len();
        variables.define("x", 5.0);
        variables.define("x", 10.0);
        assert_eq!(variables.lookup("x"), Ok(10.0));
        assert_eq!(variables.len(), initial + 1);
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let variables = Variables::new();
        assert_eq!(
            variables.lookup("missing"),
            Err(RuntimeErrorKind::UndefinedName("missing".into()))
        );
    }

    #[test]
    fn procedures_cannot_be_redefined() {
        let mut procedures = Procedures::new();
        assert!(procedures.define("f", &Statement::up()).is_ok());
        assert_eq!(
            procedures.define("f", &Statement::down()),
            Err(RuntimeErrorKind::DuplicateProcedure("f".into()))
        );
        assert_eq!(*procedures.lookup("f").unwrap(), Statement::up());
    }

    #[test]
    fn undefined_procedure_is_an_error() {
        let procedures = Procedures::new();
        assert!(!procedures.contains("f"));
        assert_eq!(
            procedures.lookup("f"),
            Err(RuntimeErrorKind::UndefinedProcedure("f".into()))
        );
    }
}
