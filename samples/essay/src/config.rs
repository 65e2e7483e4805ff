//! Render settings read from the environment.

use monoview::html::RenderOptions;

/// Indent width for pretty output. Unset means compact output.
pub const PRETTY_VARIABLE: &str = "MONOVIEW_PRETTY";

/// Widest accepted indent. Wider values fall back to compact output.
pub const MAX_INDENT: usize = 16;

/// Reads [`PRETTY_VARIABLE`] from the process environment.
pub fn render_options_from_env() -> RenderOptions {
    render_options_from(std::env::var(PRETTY_VARIABLE).ok().as_deref())
}

/// Interprets the value of [`PRETTY_VARIABLE`].
///
/// A value that is not an integer between 0 and [`MAX_INDENT`] is logged
/// and ignored.
pub fn render_options_from(value: Option<&str>) -> RenderOptions {
    match value.map(str::trim) {
        None | Some("") => RenderOptions::compact(),
        Some(raw) => raw.parse::<usize>().map_or_else(
            |error| {
                tracing::warn!(
                    variable = PRETTY_VARIABLE,
                    value = raw,
                    %error,
                    "ignoring unparsable indent width, rendering compactly"
                );
                RenderOptions::compact()
            },
            |indent| {
                if indent > MAX_INDENT {
                    tracing::warn!(
                        variable = PRETTY_VARIABLE,
                        indent,
                        max = MAX_INDENT,
                        "indent width too large, rendering compactly"
                    );
                    return RenderOptions::compact();
                }
                RenderOptions::pretty(indent)
            },
        ),
    }
}
