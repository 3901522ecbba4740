//! Console rendering for menus and method lists
//!
//! All functions write to any `WriteColor`, so sessions can render to a
//! colored terminal or to an in-memory buffer in tests.

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::extract::{Catalogue, MethodHandle};

pub const DIVIDER: &str = "-------------------------------";
pub const CATALOGUE_TITLE: &str = "MODULE TYPES";

/// `---title---` in bold.
pub fn print_header<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    out.set_color(&bold)?;
    write!(out, "---{}---", title)?;
    out.reset()?;
    writeln!(out)
}

pub fn print_divider<W: WriteColor>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", DIVIDER)
}

/// The numbered type menu followed by the "print all" entry.
pub fn print_catalogue<W: WriteColor>(out: &mut W, catalogue: &Catalogue<'_>) -> io::Result<()> {
    print_header(out, CATALOGUE_TITLE)?;

    let mut type_color = ColorSpec::new();
    type_color.set_fg(Some(Color::Yellow));

    for (index, ty) in catalogue.iter() {
        write!(out, "{}.) ", index)?;
        out.set_color(&type_color)?;
        write!(out, "{}", ty.name)?;
        out.reset()?;
        writeln!(out)?;
    }
    writeln!(out, "{}.) Print all methods", catalogue.print_all_option())?;
    print_divider(out)
}

fn visibility_label(method: &MethodHandle<'_>) -> (&'static str, Color) {
    if method.is_public() {
        ("Public", Color::Green)
    } else {
        ("Non-Public", Color::Cyan)
    }
}

/// One line per method with its visibility, then a divider.
///
/// With `details`, the parameter list replaces the bare name and the
/// method's properties follow on indented lines.
pub fn print_method_list<W: WriteColor>(
    out: &mut W,
    methods: &[MethodHandle<'_>],
    details: bool,
) -> io::Result<()> {
    for method in methods {
        let (label, color) = visibility_label(method);
        if details {
            write!(out, "{} - ", method.full_name())?;
        } else {
            write!(out, "{} - ", method.name())?;
        }
        out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(out, "{}", label)?;
        out.reset()?;
        writeln!(out)?;

        if details {
            for line in method.property_lines() {
                writeln!(out, "    {}", line)?;
            }
        }
    }
    print_divider(out)
}
