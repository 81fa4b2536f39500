use owo_colors::OwoColorize;

use crate::report::render::region_from_arn;
use crate::report::section::SectionSpec;

/// Print the configured sections as an overview for the operator
pub fn print_sections(sections: &[SectionSpec]) {
    println!();
    println!("{}", "Weekly Security Hub Report: configured sections".bold());
    println!("{}", "━".repeat(60));
    println!();

    if sections.is_empty() {
        println!("  No sections configured.");
        println!();
        return;
    }

    for (i, section) in sections.iter().enumerate() {
        let mut flags = Vec::new();
        if section.is_summary {
            flags.push("summary".green().to_string());
        }
        if section.reverse_sort {
            flags.push("reversed".yellow().to_string());
        }

        println!("  {:>2}. {}", i + 1, section.label.bold());
        println!("      {}", section.source_arn.dimmed());
        if !flags.is_empty() {
            println!("      [{}]", flags.join(", "));
        }
        println!();
    }

    println!("{}", "━".repeat(60));
    match region_from_arn(&sections[0].source_arn) {
        Ok(region) => println!("  {} sections, console links use region {}", sections.len(), region.bold()),
        Err(e) => println!("  {} sections, {}", sections.len(), e.to_string().red()),
    }
    println!();
}
