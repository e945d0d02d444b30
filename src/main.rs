//! boxcut - CLI tool to plan box panels on cutting sheets.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use boxcut_rs::generator::{render_packing_summary, render_panel_list};
use boxcut_rs::{generate_all_sheets_svg, parse_job_file, plan_job, quick_validate, BoxcutError, Job};

/// Calculate box panels and pack them onto cutting sheets.
#[derive(Parser, Debug)]
#[command(name = "boxcut")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Directory for one SVG drawing per sheet
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Sheet width in mm (overrides the job file)
    #[arg(long)]
    sheet_width: Option<f64>,

    /// Sheet height in mm (overrides the job file)
    #[arg(long)]
    sheet_height: Option<f64>,

    /// Edge margin in mm (overrides the job file)
    #[arg(long)]
    margin: Option<f64>,

    /// Kerf in mm (overrides the job file)
    #[arg(long)]
    kerf: Option<f64>,

    /// Material thickness in mm (overrides the job file)
    #[arg(long)]
    thickness: Option<f64>,

    /// Print the plan as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Validate only, don't pack
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Apply command-line sheet settings on top of the job file.
    fn apply_overrides(&self, job: &mut Job) {
        let sheet = &mut job.sheet;
        if let Some(width) = self.sheet_width {
            sheet.width = width;
        }
        if let Some(height) = self.sheet_height {
            sheet.height = height;
        }
        if let Some(margin) = self.margin {
            sheet.margin = margin;
        }
        if let Some(kerf) = self.kerf {
            sheet.kerf = kerf;
        }
        if let Some(thickness) = self.thickness {
            sheet.thickness = thickness;
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<BoxcutError>()
                .map_or(1, |e| e.code_value());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(args: &Args) -> Result<()> {
    info!("Processing: {}", args.input.display());

    let mut job = parse_job_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    args.apply_overrides(&mut job);

    info!("Parsed {} box(es)", job.boxes.len());

    // Validate-only mode
    if args.validate {
        let validation = quick_validate(&job)?;
        info!(
            "Validation passed with {} warning(s)",
            validation.warnings.len()
        );
        return Ok(());
    }

    let plan = plan_job(&job)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_panel_list(&plan.panels, job.sheet.thickness));
        println!();
        print!("{}", render_packing_summary(&plan.packing));
    }

    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        for (sheet, svg) in plan
            .packing
            .sheets
            .iter()
            .zip(generate_all_sheets_svg(&plan.packing))
        {
            let path = dir.join(format!("sheet-{}.svg", sheet.id));
            std::fs::write(&path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
    }

    Ok(())
}
