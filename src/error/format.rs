use crate::error::{ErrorContext, SemvError};

/// Render an error for the terminal.
///
/// Version errors get an extra block pointing at the offending part: the
/// whitespace-stripped input for a malformed version, or the component and its
/// rejected text for a bad number.
pub fn format_error_with_color(error: &SemvError, use_color: bool) -> String {
    let red = if use_color { "\x1b[31m" } else { "" };
    let yellow = if use_color { "\x1b[33m" } else { "" };
    let cyan = if use_color { "\x1b[36m" } else { "" };
    let reset = if use_color { "\x1b[0m" } else { "" };
    let bold = if use_color { "\x1b[1m" } else { "" };

    let context = ErrorContext::new(error);
    let mut output = String::new();

    output.push_str(&format!("{red}{bold}Error:{reset} {error}\n"));

    let emphasis = format!("{red}{bold}");
    if let Some(highlight) = highlight_offending_part(error, &emphasis, reset) {
        output.push_str(&format!("\n{highlight}\n"));
    }

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{yellow}{bold}Suggestion:{reset}\n"));
        for line in suggestion.lines().filter(|line| !line.trim().is_empty()) {
            output.push_str(&format!("{cyan}• {line}{reset}\n"));
        }
    }

    if use_color {
        output.push_str(reset);
    }

    output
}

fn highlight_offending_part(error: &SemvError, emphasis: &str, reset: &str) -> Option<String> {
    match error {
        SemvError::MalformedVersion(input) if !input.is_empty() => {
            let version_part = input.split('-').next().unwrap_or_default();
            let found = version_part.split('.').count();
            Some(format!(
                "  input: {emphasis}{input}{reset}\n  components before '-': {found} (expected 3)"
            ))
        }
        SemvError::InvalidVersionNumber { component, value } => {
            let shown = if value.is_empty() { "(empty)" } else { value };
            Some(format!("  {component}: {emphasis}{shown}{reset}"))
        }
        _ => None,
    }
}
