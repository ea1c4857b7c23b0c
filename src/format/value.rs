use std::{
    fmt::{Debug, Write},
    panic::{self, AssertUnwindSafe},
};

/// Shown in place of a value whose `Debug` implementation failed.
pub const PLACEHOLDER: &str = "<could not convert to string>";

/// Renders a value with its `Debug` implementation (`{:?}`).
///
/// A `Debug` implementation that returns an error, or panics, yields
/// [`PLACEHOLDER`] instead. Panics are only caught when the program unwinds
/// on panic.
///
/// # Example
/// ```
/// use dprint::format::format_value;
///
/// assert_eq!(format_value("string"), "\"string\"");
/// assert_eq!(format_value(&1), "1");
/// assert_eq!(format_value(&1.2), "1.2");
/// ```
#[must_use]
pub fn format_value<T: ?Sized + Debug>(value: &T) -> String {
    render(value, false)
}

/// Renders a value with the alternate `Debug` form (`{:#?}`), under the same
/// failure rules as [`format_value`].
#[must_use]
pub fn format_value_pretty<T: ?Sized + Debug>(value: &T) -> String {
    render(value, true)
}

fn render<T: ?Sized + Debug>(value: &T, pretty: bool) -> String {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
                      let mut text = String::new();
                      let written = if pretty {
                          write!(text, "{value:#?}")
                      } else {
                          write!(text, "{value:?}")
                      };
                      written.map(|()| text)
                  }));

    match attempt {
        Ok(Ok(text)) => text,
        Ok(Err(_)) | Err(_) => {
            log::debug!("value could not be rendered with Debug");
            PLACEHOLDER.to_string()
        },
    }
}
