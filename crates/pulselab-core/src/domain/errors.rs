use std::fmt::{Display, Formatter};

/// Coarse error taxonomy shared by every calculation module.
///
/// Categories map to stable process exit codes so the CLI can surface them
/// without inspecting individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreErrorCategory {
    InputValidationError,
    ComputationError,
}

impl CoreErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::ComputationError => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "INPUT",
            Self::ComputationError => "COMPUTATION",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CoreError {
    category: CoreErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl CoreError {
    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self {
            category: CoreErrorCategory::InputValidationError,
            placeholder,
            message: message.into(),
        }
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self {
            category: CoreErrorCategory::ComputationError,
            placeholder,
            message: message.into(),
        }
    }

    pub fn category(&self) -> CoreErrorCategory {
        self.category
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!(
            "ERROR [{}] {}: {}",
            self.category.as_str(),
            self.placeholder,
            self.message
        )
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

impl Display for CoreErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
