//! Printing of results and the closing summary

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::{Duration, Instant};

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Answers go to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{answer}"),
            (Ok(answer), false) => println!("{}", format_line(result, answer)),
            (Err(e), true) => eprintln!("Error: {e}"),
            (Err(e), false) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// Totals over every printed result plus the wall-clock time since
    /// the formatter was created
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        let summary = Summary::new(results, self.start_time.elapsed());

        println!();
        for line in summary.lines() {
            println!("{line}");
        }
    }
}

/// Aggregate figures for the summary block
#[derive(Debug, PartialEq)]
struct Summary {
    solved: usize,
    failed: usize,
    /// Only successful parts count toward the time totals
    parse_time: TimeDelta,
    solve_time: TimeDelta,
    elapsed: Duration,
}

impl Summary {
    fn new(results: &[SolverResult], elapsed: Duration) -> Self {
        let solved: Vec<_> = results.iter().filter(|r| r.answer.is_ok()).collect();
        Self {
            failed: results.len() - solved.len(),
            parse_time: solved.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved.iter().map(|r| r.solve_duration).sum(),
            solved: solved.len(),
            elapsed,
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "--- Summary ---".to_string(),
            format!("Parts: {} solved, {} failed", self.solved, self.failed),
            format!("Total parse time: {}", format_duration(self.parse_time)),
            format!("Total solve time: {}", format_duration(self.solve_time)),
            format!(
                "Elapsed wall-clock time: {}",
                format_std_duration(self.elapsed)
            ),
        ];
        if let Some(speedup) = self.speedup() {
            lines.push(format!("Speedup factor: {speedup:.2}x"));
        }
        lines
    }

    /// Compute time over wall-clock time
    fn speedup(&self) -> Option<f64> {
        if self.elapsed.is_zero() {
            return None;
        }
        let compute = self.parse_time + self.solve_time;
        let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
        Some(compute_secs / self.elapsed.as_secs_f64())
    }
}

/// `YYYY/DD Part N`
fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// One line for a solved part, with its timings
fn format_line(result: &SolverResult, answer: &str) -> String {
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {} ({}solve: {})",
        prefix(result),
        answer,
        parse_timing,
        format_duration(result.solve_duration)
    )
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros.unsigned_abs().into())
}

fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
