use pyo3::prelude::*;
use std::fmt;

#[pyclass(eq, eq_int, frozen, hash)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    NonNegative,
    Negative,
}

impl Sign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::NonNegative => "+",
            Sign::Negative => "-",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[pymethods]
impl Sign {
    #[getter]
    pub fn value(&self) -> &'static str {
        self.as_str()
    }

    pub fn __str__(&self) -> &'static str {
        self.as_str()
    }
}
