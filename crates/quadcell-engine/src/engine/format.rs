use super::{CellError, Resolved};

/// Markers used when a value has no number to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub empty: String,
    pub invalid: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            empty: String::new(),
            invalid: "invalid input".to_string(),
        }
    }
}

/// Format a resolved value for display.
pub fn format_value(value: &Resolved, options: &DisplayOptions) -> String {
    match value {
        Resolved::Blank => options.empty.clone(),
        Resolved::Number(n) => n.to_string(),
        Resolved::Unresolved(_) => options.invalid.clone(),
    }
}

/// Short description of an error, for status lines.
pub fn describe_error(err: &CellError) -> String {
    match err {
        CellError::InvalidSyntax => "not a number or a formula".to_string(),
        CellError::UnresolvedCycle => "circular reference".to_string(),
        CellError::UnresolvedDependency(id) => format!("{} is invalid", id),
        CellError::Overflow => "sum out of range".to_string(),
    }
}
