//! CSV Output

use crate::report::{Report, RunStatus};

const HEADER: &str = "size,algorithm,name,status,compares,moves,samples,mean_ms,median_ms,std_dev_ms,min_ms,max_ms,p95_ms";

/// Generate a CSV report with one row per algorithm and dataset size
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::from(HEADER);
    output.push('\n');

    for result in &report.results {
        let status = match result.status {
            RunStatus::Sorted => "sorted",
            RunStatus::Incorrect => "incorrect",
        };
        let t = &result.timing;
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}\n",
            result.size,
            result.algorithm,
            escape(&result.name),
            status,
            result.compare_count,
            result.move_count,
            t.samples,
            t.mean_ms,
            t.median_ms,
            t.std_dev_ms,
            t.min_ms,
            t.max_ms,
            t.p95_ms,
        ));
    }

    output
}

/// Quote a field when it contains a delimiter, quote or newline
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::SCHEMA_VERSION;
    use crate::report::{AlgorithmResult, ReportMeta, ReportSummary};
    use chrono::Utc;
    use sortbench_core::Algorithm;
    use sortbench_stats::summarize;

    fn sample_report() -> Report {
        Report {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: "test".to_string(),
                timestamp: Utc::now(),
                seed: 1,
                upper_bound: 10,
                repeat: 2,
                sizes: vec![4],
            },
            results: vec![AlgorithmResult {
                algorithm: Algorithm::Bubble,
                name: "Bubble Sort".to_string(),
                size: 4,
                status: RunStatus::Sorted,
                compare_count: 6,
                move_count: 5,
                timing: summarize(&[0.5, 1.5]),
                failure: None,
            }],
            summary: ReportSummary {
                total_runs: 2,
                sorted: 2,
                incorrect: 0,
                total_duration_ms: 3.0,
            },
        }
    }

    #[test]
    fn test_csv_rows() {
        let csv = generate_csv_report(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("4,bubble,Bubble Sort,sorted,6,5,2,1.000000,1.000000,"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_one_row_per_algorithm_in_a_size() {
        let mut report = sample_report();
        let mut heap = report.results[0].clone();
        heap.algorithm = Algorithm::Heapsort;
        heap.name = "Heap Sort".to_string();
        heap.compare_count = 6;
        heap.move_count = 4;
        report.results.push(heap);

        let csv = generate_csv_report(&report);
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("4,bubble,Bubble Sort,"));
        assert!(rows[1].starts_with("4,heapsort,Heap Sort,sorted,6,4,"));
    }
}
