use std::env;
use std::time::Instant;

use four_russians_lcs::baseline::naive_lcs_length;
use four_russians_lcs::{FourRussians, LcsSolver, Schedule};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Four Russians LCS Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the block engine on DNA pairs of doubling length and reports:");
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!(
        "  • status: 'passed' = matches the quadratic baseline (checked up to length {}), 'not_checked' = skipped",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    let schedules = [
        ("row_major", Schedule::RowMajor),
        ("wavefront", Schedule::Wavefront),
    ];
    for (idx, (label, schedule)) in schedules.into_iter().enumerate() {
        eprintln!("[{}/{}] Schedule {label}...", idx + 1, schedules.len());
        let engine = FourRussians::builder().with_schedule(schedule).build();
        measurements.extend(run_schedule(label, &engine, &options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_len: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 1024usize;
        let mut max_len = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = next_value(&mut args, "--format")?;
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_len(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                let value = next_value(&mut args, "--verify-limit")?;
                verify_limit = parse_len(&value, "verify limit")?;
            } else if let Some(value) = arg.strip_prefix("--max-len=") {
                max_len = parse_len(value, "max length")?;
            } else if arg == "--max-len" {
                let value = next_value(&mut args, "--max-len")?;
                max_len = parse_len(&value, "max length")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            max_len,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum sequence length to verify via baseline (default: 1024)
  --max-len <N>                 Largest sequence length to run (default: 4096)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --features parallel --bin scale_probe -- --format table --max-len 8192
"
        );
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

fn parse_len(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a positive integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    len: usize,
    score: Option<u32>,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_schedule(
    scenario: &'static str,
    engine: &FourRussians,
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let sizes: Vec<usize> = std::iter::successors(Some(64usize), |&len| len.checked_mul(2))
        .take_while(|&len| len <= options.max_len)
        .collect();
    let total = sizes.len();

    sizes
        .into_iter()
        .enumerate()
        .map(|(idx, len)| {
            eprint!("      [{}/{}] length {}... ", idx + 1, total, len);
            let seq_a = mixed_dna(len, 7);
            let seq_b = mixed_dna(len, 11);

            let before = rss_kib(sys);
            let start = Instant::now();
            let result = engine.lcs_length(&seq_a, &seq_b);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let (score, status, detail) = match result {
                Err(err) => (None, VerificationStatus::Failed, Some(err.to_string())),
                Ok(score) if len <= options.verify_limit => {
                    let baseline = naive_lcs_length(&seq_a, &seq_b);
                    if baseline == score {
                        (Some(score), VerificationStatus::Passed, None)
                    } else {
                        (
                            Some(score),
                            VerificationStatus::Failed,
                            Some(format!("expected {baseline}, got {score}")),
                        )
                    }
                }
                Ok(score) => (Some(score), VerificationStatus::NotChecked, None),
            };

            eprintln!(
                "{} {} lcs={}, time={:.3}s, status={}",
                status.icon(),
                engine.name(),
                score.map_or_else(|| "-".to_string(), |s| s.to_string()),
                wall_s,
                status.label()
            );

            Measurement {
                scenario,
                len,
                score,
                wall_s,
                rss_delta_kib,
                status,
                detail,
            }
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    let count = |status: VerificationStatus| measurements.iter().filter(|m| m.status == status).count();
    let passed = count(VerificationStatus::Passed);
    let failed = count(VerificationStatus::Failed);
    let not_checked = count(VerificationStatus::NotChecked);
    let total = measurements.len().max(1);

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total as f64);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total as f64);
    eprintln!(
        "  ○ Not checked (length > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total as f64
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failures:");
        for m in measurements.iter().filter(|m| m.status == VerificationStatus::Failed) {
            eprintln!(
                "  ✗ {} (len={}): {}",
                m.scenario,
                m.len,
                m.detail.as_deref().unwrap_or("")
            );
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,len,lcs,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.len,
            m.score.map(|s| s.to_string()).unwrap_or_default(),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);

    println!(
        "{:<col1$}  {:>8}  {:>8}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "len", "lcs", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<col1$}  {:-<8}  {:-<8}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>8}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.len,
            m.score.map(|s| s.to_string()).unwrap_or_default(),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"len\":{},\"lcs\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.len,
            m.score.map_or_else(|| "null".to_string(), |s| s.to_string()),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Deterministic pseudo-random DNA from a small linear congruential stream.
fn mixed_dna(len: usize, seed: u64) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ALPHABET[(state >> 62) as usize]
        })
        .collect()
}
