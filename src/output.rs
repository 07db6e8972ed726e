//! Output formatting for query and cross-search results

use crate::search::CommonSubstring;
use crate::tree::{EdgeInfo, TreeStats};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a containment verdict: green "present" or red "absent"
pub fn print_contains(probe: &str, present: bool, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    write!(stdout, "{}: ", probe)?;
    if present {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        writeln!(stdout, "present")?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(stdout, "absent")?;
    }
    stdout.reset()
}

/// Print cross-search matches, one per line, with the probe span alongside
pub fn print_common_substrings(matches: &[CommonSubstring], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    if matches.is_empty() {
        writeln!(stdout, "no common substrings")?;
        return Ok(());
    }
    for m in matches {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", m.rendered())?;
        stdout.reset()?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "  [{}..={}, len {}]", m.start, m.end, m.len())?;
        stdout.reset()?;
    }
    Ok(())
}

/// Print the breadth-first edge table of a tree
pub fn print_edges(edges: &[EdgeInfo]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Never);
    writeln!(stdout, "{:>8} {:>8}  {:<24} parent", "start", "end", "label")?;
    for edge in edges {
        writeln!(
            stdout,
            "{:>8} {:>8}  {:<24} {}",
            edge.start, edge.end, edge.label, edge.parent
        )?;
    }
    Ok(())
}

/// Print tree shape statistics
pub fn print_stats(stats: &TreeStats) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Never);
    writeln!(stdout, "Tree Statistics")?;
    writeln!(stdout, "===============")?;
    writeln!(stdout, "Symbols (with terminator): {}", stats.text_len)?;
    writeln!(stdout, "Nodes:                     {}", stats.node_count)?;
    writeln!(stdout, "Leaves:                    {}", stats.leaf_count)?;
    writeln!(stdout, "Internal nodes:            {}", stats.internal_count)?;
    Ok(())
}
