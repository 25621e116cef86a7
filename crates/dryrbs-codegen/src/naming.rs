//! Naming convention utilities for output paths.
//!
//! Ruby constants are `PascalCase`; signature files and directories follow the
//! Ruby convention of `snake_case` file names.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `TestDto1` | [`to_snake_case`] | `test_dto1` |
//! | `ModuleAgain` | [`to_snake_case`] | `module_again` |
//! | `spec/fixtures` | [`path_segments`] | `["spec", "fixtures"]` |

/// Convert a constant name to snake_case.
///
/// An underscore is inserted between a lowercase letter or digit and a
/// following uppercase letter, then the whole string is lowercased. Runs of
/// capitals are not split.
///
/// # Examples
///
/// ```
/// use dryrbs_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("TestDto1"), "test_dto1");
/// assert_eq!(to_snake_case("ModuleAgain"), "module_again");
/// assert_eq!(to_snake_case("HTTPClient"), "httpclient");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut previous: Option<char> = None;

    for c in s.chars() {
        if c.is_ascii_uppercase()
            && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
        previous = Some(c);
    }

    result
}

/// Split a `/`-separated path into its segments.
///
/// Empty segments and `.` are dropped, so `./app//models/` yields
/// `["app", "models"]`. Backslashes are treated as separators too.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}
