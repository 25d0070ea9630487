use std::fmt;

use super::parameters::ParameterValues;

/// A named parameter set under evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub parameters: ParameterValues,
}

impl Preset {
    pub fn new(name: impl Into<String>, parameters: ParameterValues) -> Self {
        Self { name: name.into(), parameters }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.parameters)
    }
}
