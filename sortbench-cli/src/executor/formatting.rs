//! Human-Readable Output Formatting

use sortbench_core::Algorithm;
use sortbench_report::{AlgorithmResult, Report, RunStatus, format_duration};

/// Format the report as per-size tables followed by a summary line
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SortBench Results\n");
    output.push_str(&format!(
        "seed: {}  upper bound: {}  repeat: {}\n",
        report.meta.seed, report.meta.upper_bound, report.meta.repeat
    ));

    for size in report.sizes() {
        output.push('\n');
        output.push_str(&format!("Dataset size: {}\n", size));
        output.push_str(&format!(
            "  {:<16} {:>14} {:>16} {:>16}  {}\n",
            "Algorithm", "Time", "Compares", "Moves", "Status"
        ));
        output.push_str(&format!("  {}\n", "-".repeat(72)));

        for result in report.results.iter().filter(|r| r.size == size) {
            output.push_str(&format_row(result));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Summary: {} runs, {} sorted, {} incorrect ({})\n",
        report.summary.total_runs,
        report.summary.sorted,
        report.summary.incorrect,
        format_duration(report.summary.total_duration_ms)
    ));

    output
}

fn format_row(result: &AlgorithmResult) -> String {
    let time = if result.timing.samples > 1 {
        format!(
            "{} ±{:.1}%",
            format_duration(result.timing.mean_ms),
            result.timing.coefficient_of_variation()
        )
    } else {
        format_duration(result.timing.mean_ms)
    };

    let status = match (&result.status, &result.failure) {
        (RunStatus::Sorted, _) => "ok".to_string(),
        (RunStatus::Incorrect, Some(failure)) => format!("INCORRECT: {}", failure.message),
        (RunStatus::Incorrect, None) => "INCORRECT".to_string(),
    };

    format!(
        "  {:<16} {:>14} {:>16} {:>16}  {}\n",
        result.name, time, result.compare_count, result.move_count, status
    )
}

/// Format the algorithm registry for `sortbench list`
pub fn format_algorithm_list() -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  {:<3} {:<10} {:<16} {:<14} {}\n",
        "#", "Id", "Name", "Complexity", "Stable"
    ));
    for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
        let entry = algorithm.entry();
        output.push_str(&format!(
            "  {:<3} {:<10} {:<16} {:<14} {}\n",
            i + 1,
            algorithm.id(),
            entry.name,
            entry.complexity.to_string(),
            if entry.stable { "yes" } else { "no" }
        ));
    }
    output.push_str(&format!("\n{} algorithms\n", Algorithm::ALL.len()));
    output
}
