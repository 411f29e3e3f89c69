//! Caller frame capture.
//!
//! Rust has no runtime stack lookup that is both cheap and reliable, so the
//! caller's frame is resolved at compile time instead: the leveled macros
//! expand [`call_site!`](crate::call_site) where they are written, which
//! records `file!()`, `line!()` and the enclosing function path.

const CLOSURE_SEGMENT: &str = "{{closure}}";

/// Source location of the code that invoked a logging entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Placeholder used when no caller information is available.
    pub const fn unknown() -> Self {
        Self::new("unknown", 0, "")
    }

    pub fn short_file(&self) -> &'static str {
        let file = self.file;
        match file.rfind(['/', '\\']) {
            Some(idx) => &file[idx + 1..],
            None => file,
        }
    }

    pub fn short_function(&self) -> &'static str {
        self.function
            .split("::")
            .filter(|segment| *segment != CLOSURE_SEGMENT)
            .last()
            .unwrap_or("")
    }
}

impl Default for CallSite {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Full path of the enclosing function, e.g. `my_crate::server::run`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}

/// [`CallSite`] of the place this macro is expanded.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!(), $crate::function_name!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_file_strips_directories() {
        let site = CallSite::new("src/net/server.rs", 10, "app::net::serve");
        assert_eq!(site.short_file(), "server.rs");

        let site = CallSite::new("C:\\work\\app\\src\\main.rs", 1, "app::main");
        assert_eq!(site.short_file(), "main.rs");

        let site = CallSite::new("main.rs", 1, "app::main");
        assert_eq!(site.short_file(), "main.rs");
    }

    #[test]
    fn test_short_function_strips_qualifiers() {
        let site = CallSite::new("lib.rs", 1, "app::store::Store::flush");
        assert_eq!(site.short_function(), "flush");

        let site = CallSite::new("lib.rs", 1, "main");
        assert_eq!(site.short_function(), "main");
    }

    #[test]
    fn test_short_function_skips_closures() {
        let site = CallSite::new("lib.rs", 1, "app::worker::spawn::{{closure}}::{{closure}}");
        assert_eq!(site.short_function(), "spawn");
    }

    #[test]
    fn test_unknown_site() {
        let site = CallSite::unknown();
        assert_eq!(site.short_file(), "unknown");
        assert_eq!(site.line, 0);
        assert_eq!(site.short_function(), "");
        assert_eq!(CallSite::default(), site);
    }

    #[test]
    fn test_function_name_macro() {
        let name = crate::function_name!();
        assert!(name.ends_with("caller::tests::test_function_name_macro"));
    }

    #[test]
    fn test_call_site_macro_points_here() {
        let site = crate::call_site!();
        let line = line!() - 1;
        assert_eq!(site.short_file(), "caller.rs");
        assert_eq!(site.line, line);
        assert_eq!(site.short_function(), "test_call_site_macro_points_here");
    }
}
