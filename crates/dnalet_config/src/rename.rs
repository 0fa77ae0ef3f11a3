//! Rename directives for generated container units.

use dnalet_unit::CONTAINER_EXTENSION;

/// Config value asking for a name derived from the service name.
pub const AUTO_MARKER: &str = "<auto>";

/// How a generated container unit should be renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDirective {
    /// Name the unit `<service>-<original>.container`.
    Auto,
    /// Use the given name, with `.container` appended when missing.
    Explicit(String),
}

impl RenameDirective {
    /// Interpret a raw `container.<unit>.name` value.
    pub fn from_value(value: &str) -> Self {
        if value == AUTO_MARKER {
            Self::Auto
        } else {
            Self::Explicit(value.to_string())
        }
    }

    /// File name of the renamed unit, always ending in `.container`.
    pub fn target_file_name(&self, service_name: &str, original_stem: &str) -> String {
        let name = match self {
            Self::Auto => format!("{}-{}", service_name, original_stem),
            Self::Explicit(name) => name.clone(),
        };

        let suffix = format!(".{}", CONTAINER_EXTENSION);
        if name.ends_with(&suffix) {
            name
        } else {
            name + &suffix
        }
    }
}

impl std::fmt::Display for RenameDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "{}", AUTO_MARKER),
            Self::Explicit(name) => write!(f, "{}", name),
        }
    }
}
