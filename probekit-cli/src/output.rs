//! Terminal output helpers.
//!
//! Everything here writes to stdout; logs go to stderr or a file.

use console::style;
use probekit_core::{ProbeResult, Section};
use std::fmt::Display;

/// Print a heading with styling and clear separation
pub fn print_heading(text: &str) {
    let line = style("=".repeat(50)).blue();
    println!("{line}");
    println!("{}", style(format!(" {text} ")).bold());
    println!("{line}");
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    println!();
    println!("{}", style(format!("[{text}]")).cyan().bold());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("  {}={}", style(label).cyan(), value);
}

pub fn print_success(message: &str) {
    println!("{} {}", style("[OK]").green().bold(), message);
}

fn print_options(section: &Section) {
    if section.is_empty() {
        println!("  {}", style("(no options)").dim());
    }
    for (option, value) in section {
        print_info(option, value);
    }
}

/// Prints every section of a probe result, options sorted by name.
pub fn print_probe_result(title: &str, result: &ProbeResult) {
    print_heading(title);

    print_section("FORMAT");
    print_options(&result.format);

    for (index, stream) in result.streams.iter().enumerate() {
        print_section(&format!("STREAM {index}"));
        print_options(stream);
    }

    println!();
    println!("{} stream(s)", result.stream_count());
}
