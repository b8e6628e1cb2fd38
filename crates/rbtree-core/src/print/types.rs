/// Types that render themselves as an indented, multi-line tree dump.
pub trait Printable {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String;
}

/// Child printer callback used by [`print_binary`](super::print_binary).
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
