// scripts/benchmark.rs
use anyhow::{Context, Result};
use bsm_greeks::math_utils::Timer;
use bsm_greeks::models::{OptionField, OptionParameters, OptionType};
use bsm_greeks::sweep::{par_sweep, sweep, SweepAxis, SweepResult};
use bsm_greeks::Metric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;
use tracing::info;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    points: usize,
    serial_ms: f64,
    parallel_ms: f64,
    max_abs_diff: f64,
}

impl BenchmarkResult {
    fn speedup(&self) -> f64 {
        self.serial_ms / self.parallel_ms
    }

    fn points_per_sec(&self) -> f64 {
        self.points as f64 / (self.parallel_ms / 1000.0)
    }
}

fn random_scenario(rng: &mut StdRng) -> OptionParameters {
    let option_type = if rng.gen_bool(0.5) {
        OptionType::Call
    } else {
        OptionType::Put
    };
    OptionParameters {
        spot_price: rng.gen_range(10.0..200.0),
        strike_price: rng.gen_range(10.0..200.0),
        risk_free_rate: rng.gen_range(0.0..0.1),
        time_to_expiry: rng.gen_range(0.01..3.0),
        volatility: rng.gen_range(0.05..0.8),
        option_type,
    }
}

fn bench_axis(rng: &mut StdRng, field: OptionField, start: f64, end: f64, points: usize) -> Result<BenchmarkResult> {
    let base = random_scenario(rng);
    let axis = SweepAxis::linspace(field, start, end, points)?;

    let mut timer = Timer::new();
    timer.start();
    let serial = sweep(&base, &axis)?;
    let serial_ms = timer.elapsed_ms();

    timer.start();
    let parallel = par_sweep(&base, &axis)?;
    let parallel_ms = timer.elapsed_ms();

    Ok(BenchmarkResult {
        name: format!("{} sweep ({}k points)", field, points / 1000),
        points,
        serial_ms,
        parallel_ms,
        max_abs_diff: max_abs_diff(&serial, &parallel),
    })
}

fn max_abs_diff(a: &SweepResult, b: &SweepResult) -> f64 {
    Metric::ALL
        .iter()
        .flat_map(|m| a.series(*m).iter().zip(b.series(*m)).map(|(x, y)| (x - y).abs()))
        .fold(0.0, f64::max)
}

fn run_sweep_benchmarks() -> Result<Vec<BenchmarkResult>> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &points in &[10_000, 100_000, 1_000_000] {
        println!("Running benchmarks with {} points...", points);
        results.push(bench_axis(&mut rng, OptionField::SpotPrice, 1.0, 300.0, points)?);
        results.push(bench_axis(&mut rng, OptionField::TimeToExpiry, 3.0, 1.0 / 365.0, points)?);
        results.push(bench_axis(&mut rng, OptionField::Volatility, 0.01, 1.5, points)?);
    }

    Ok(results)
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) -> Result<()> {
    let mut file = File::create(filename).with_context(|| format!("creating {}", filename))?;

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU: {}", system_info.cpu_model)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record([
        "benchmark",
        "points",
        "serial_ms",
        "parallel_ms",
        "speedup",
        "points_per_sec",
        "max_abs_diff",
    ])?;
    for r in results {
        wtr.write_record([
            r.name.clone(),
            r.points.to_string(),
            format!("{:.3}", r.serial_ms),
            format!("{:.3}", r.parallel_ms),
            format!("{:.2}", r.speedup()),
            format!("{:.0}", r.points_per_sec()),
            format!("{:e}", r.max_abs_diff),
        ])?;
    }
    wtr.flush()?;

    info!("Results written to {}", filename);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("bsm-greeks Sweep Benchmark");
    println!("==========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_sweep_benchmarks()?;

    println!("\n{:=<96}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<96}", "");
    println!(
        "{:<36} {:>10} {:>12} {:>12} {:>8} {:>14}",
        "Benchmark", "Points", "Serial (ms)", "Par (ms)", "Speedup", "Max |diff|"
    );
    println!("{:-<96}", "");
    for r in &results {
        println!(
            "{:<36} {:>10} {:>12.2} {:>12.2} {:>8.2} {:>14e}",
            r.name,
            r.points,
            r.serial_ms,
            r.parallel_ms,
            r.speedup(),
            r.max_abs_diff
        );
    }
    println!("{:=<96}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename)?;

    println!("\nTo reproduce: cargo run --bin benchmark --release");
    Ok(())
}
