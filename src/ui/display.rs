//! Display functions for bundling units and build results

use console::Style;

use crate::bundler::BuildReport;
use crate::domain::BundleDescriptor;
use crate::domain::module::is_component_path;
use crate::pipeline::RewriteSummary;
use crate::rewriter::RewriteOutcome;

/// Display discovered bundling units
pub fn display_descriptors(descriptors: &[BundleDescriptor]) {
    if descriptors.is_empty() {
        println!("No pages declare components.");
        return;
    }

    for descriptor in descriptors {
        println!("{}", Style::new().bold().yellow().apply_to(&descriptor.name));
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Excludes:"),
            descriptor.exclude.join(", ")
        );
        println!("  {}", Style::new().bold().apply_to("Modules:"));
        for module in &descriptor.include {
            let marker = if is_component_path(module) {
                Style::new().green().apply_to("init")
            } else {
                Style::new().dim().apply_to("load")
            };
            println!("    {marker} {module}");
        }
    }
}

/// Display the outcome of rewriting and cleanup
pub fn display_rewrite_summary(summary: &RewriteSummary) {
    for (unit, outcome) in &summary.outcomes {
        match outcome {
            RewriteOutcome::Rewritten { initialised } => println!(
                "  {} {unit} ({initialised} component(s) initialised)",
                Style::new().green().apply_to("✔")
            ),
            RewriteOutcome::NoLoadCall => println!(
                "  {} {unit} (no entry call, left unchanged)",
                Style::new().yellow().apply_to("!")
            ),
        }
    }

    for path in &summary.removed {
        println!(
            "  {} {}",
            Style::new().dim().apply_to("removed"),
            path.display()
        );
    }
}

/// Display the bundler report followed by the rewrite summary
pub fn display_build_summary(report: &BuildReport, summary: &RewriteSummary) {
    println!(
        "{} {} unit(s), {} file(s) copied",
        Style::new().bold().green().apply_to("Bundled"),
        report.units.len(),
        report.copied
    );
    for unit in &report.units {
        println!(
            "  {} {}",
            Style::new().bold().apply_to(&unit.name),
            unit.output.display()
        );
    }
    display_rewrite_summary(summary);
}
