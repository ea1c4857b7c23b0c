//! Exports the macro forms of the helper: [`dprint!`], [`capture_caller_frame!`]
//! and [`enclosing_function!`].

/// Prints an expression's call site, source text and value to standard
/// output, then returns the value.
///
/// Unlike the [`dprint`](fn@crate::dprint) function, the macro also reports
/// the enclosing function, and finds the source file even when the program
/// runs from outside its workspace.
///
/// # Example
/// ```
/// use dprint::dprint;
///
/// let x = 5;
/// let y = dprint!(x * 2) + 1;
/// // <file>:<line> (top level stmt)
/// //   x * 2 -> 10
///
/// assert_eq!(y, 11);
/// ```
#[macro_export]
macro_rules! dprint {
    ($val:expr $(,)?) => {
        // `match` keeps temporaries in `$val` alive as long as they would be
        // without the macro.
        match $val {
            tmp => {
                $crate::emit(&tmp, &$crate::capture_caller_frame!());
                tmp
            }
        }
    };
}

/// Captures the call site this macro is expanded at, including the enclosing
/// function.
///
/// # Example
/// ```
/// use dprint::capture_caller_frame;
///
/// fn parse() -> dprint::CallSite {
///     capture_caller_frame!()
/// }
///
/// let site = parse();
///
/// assert!(site.function.unwrap().ends_with("parse"));
/// assert!(site.line.is_some());
/// ```
#[macro_export]
macro_rules! capture_caller_frame {
    () => {
        $crate::locator::CallSite::resolve(
            ::core::file!(),
            ::core::line!(),
            ::core::option::Option::Some($crate::enclosing_function!()),
            ::core::option_env!("CARGO_MANIFEST_DIR"),
        )
    };
}

/// Evaluates to the path of the function this macro is expanded in, without
/// the crate name.
///
/// Inside the crate-root `main`, this is [`TOP_LEVEL`](crate::locator::TOP_LEVEL).
#[macro_export]
macro_rules! enclosing_function {
    () => {{
        // Spelled as `locator::HERE_MARKER`.
        fn __dprint_here() {}
        $crate::locator::normalize_function_path(::core::any::type_name_of_val(&__dprint_here))
    }};
}
