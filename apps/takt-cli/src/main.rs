use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use takt_app::{
    AppResult, build_plan_preview, build_takt_grid, effective_trades, load_plan, locations_payload,
    plan_workweek, setup_payload,
};
use takt_core::Workweek;
use takt_engine::{detect_trade_stacking, estimate_duration};

#[derive(Parser)]
#[command(name = "takt-cli")]
#[command(about = "TaktFlow CLI - Takt planning and location breakdown tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate plan file syntax and structure
    Validate {
        /// Path to the plan YAML file
        plan_path: PathBuf,
    },
    /// Generate and list the location breakdown
    Locations {
        /// Path to the plan YAML file
        plan_path: PathBuf,
        /// Emit the bulk-create JSON payload instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Show the takt time and buffer recommendation
    Recommend {
        /// Path to the plan YAML file
        plan_path: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Estimate the flow-line duration
    Estimate {
        /// Path to the plan YAML file
        plan_path: PathBuf,
        /// Override the zone count
        #[arg(long)]
        zones: Option<u32>,
        /// Override the trade count
        #[arg(long)]
        trades: Option<u32>,
        /// Override the takt time in days
        #[arg(long)]
        takt: Option<u32>,
        /// Override the buffer size in takt periods
        #[arg(long)]
        buffer: Option<u32>,
    },
    /// Compute the zone x wagon assignment grid
    Grid {
        /// Path to the plan YAML file
        plan_path: PathBuf,
        /// Only report trade-stacking conflicts
        #[arg(long)]
        conflicts: bool,
    },
    /// List the plan's trade sequence
    Trades {
        /// Path to the plan YAML file
        plan_path: PathBuf,
    },
    /// List the takt adjustment factor tables
    Factors,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { plan_path } => cmd_validate(&plan_path),
        Commands::Locations { plan_path, json } => cmd_locations(&plan_path, json),
        Commands::Recommend { plan_path, json } => cmd_recommend(&plan_path, json),
        Commands::Estimate {
            plan_path,
            zones,
            trades,
            takt,
            buffer,
        } => cmd_estimate(&plan_path, zones, trades, takt, buffer),
        Commands::Grid {
            plan_path,
            conflicts,
        } => cmd_grid(&plan_path, conflicts),
        Commands::Trades { plan_path } => cmd_trades(&plan_path),
        Commands::Factors => cmd_factors(),
    }
}

fn cmd_validate(plan_path: &Path) -> AppResult<()> {
    let plan = load_plan(plan_path)?;
    let preview = build_plan_preview(&plan);

    println!("Plan '{}' is valid", plan.name);
    match &preview.building_label {
        Some(label) => println!("  building type: {label}"),
        None => println!(
            "  building type: {} (no template available)",
            plan.building.building_type
        ),
    }
    println!("  locations:     {}", preview.counts.total);
    println!("  zones:         {}", preview.counts.zones);
    println!("  trades:        {}", preview.trade_count);
    Ok(())
}

fn cmd_locations(plan_path: &Path, json: bool) -> AppResult<()> {
    let plan = load_plan(plan_path)?;
    let preview = build_plan_preview(&plan);

    if json {
        let payload = locations_payload(&preview);
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        return Ok(());
    }

    if preview.locations.is_empty() {
        println!(
            "No template available for building type '{}'",
            plan.building.building_type
        );
        return Ok(());
    }

    println!(
        "{:<5} {:<28} {:<10} {:<14} {}",
        "#", "name", "type", "phase", "parent"
    );
    for row in &preview.locations {
        println!(
            "{:<5} {:<28} {:<10} {:<14} {}",
            row.sort_order,
            row.name,
            format!("{:?}", row.location_type).to_lowercase(),
            row.phase
                .map(|p| format!("{p:?}").to_lowercase())
                .unwrap_or_default(),
            row.parent_name.as_deref().unwrap_or("-"),
        );
    }
    println!(
        "\n{} rows ({} zones: {} substructure, {} structural, {} fit-out)",
        preview.counts.total,
        preview.counts.zones,
        preview.counts.substructure_zones,
        preview.counts.structural_zones,
        preview.counts.finishing_zones,
    );
    Ok(())
}

fn cmd_recommend(plan_path: &Path, json: bool) -> AppResult<()> {
    let plan = load_plan(plan_path)?;
    let preview = build_plan_preview(&plan);

    if json {
        let setup = setup_payload(&plan, &preview);
        let body = serde_json::json!({
            "recommendation": preview.recommendation,
            "recommended_buffer": preview.recommended_buffer,
            "setup": setup,
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
        return Ok(());
    }

    let rec = &preview.recommendation;
    println!(
        "Recommended takt time: {} days (range {}-{})",
        rec.recommended_days, rec.range_low_days, rec.range_high_days
    );
    println!("Recommended buffer:    {} takt periods", preview.recommended_buffer);
    println!("Reasoning:             {}", rec.reasoning);
    Ok(())
}

fn cmd_estimate(
    plan_path: &Path,
    zones: Option<u32>,
    trades: Option<u32>,
    takt: Option<u32>,
    buffer: Option<u32>,
) -> AppResult<()> {
    let plan = load_plan(plan_path)?;
    let preview = build_plan_preview(&plan);

    let estimate = estimate_duration(
        zones.unwrap_or(preview.estimate.zone_count),
        trades.unwrap_or(preview.trade_count),
        buffer.unwrap_or(preview.buffer_size),
        takt.unwrap_or(preview.takt_time_days),
        plan_workweek(&plan),
    );

    if !estimate.is_estimable() {
        println!("Not estimable yet: needs at least one zone and one trade");
        return Ok(());
    }

    println!("Flow-line duration for '{}'", plan.name);
    println!("  zones:         {}", estimate.zone_count);
    println!("  trades:        {}", estimate.trade_count);
    println!("  takt time:     {} days", estimate.takt_time_days);
    println!("  buffer:        {} periods", estimate.buffer_size);
    println!("  total takts:   {}", estimate.total_takts);
    println!("  working days:  {}", estimate.total_working_days);
    println!("  calendar days: {}", estimate.calendar_days);
    Ok(())
}

fn cmd_grid(plan_path: &Path, conflicts_only: bool) -> AppResult<()> {
    let plan = load_plan(plan_path)?;
    let grid = build_takt_grid(&plan)?;
    tracing::debug!(assignments = grid.len(), "takt grid computed");

    let conflicts = detect_trade_stacking(&grid);
    if conflicts_only {
        if conflicts.is_empty() {
            println!("No trade stacking detected");
            return Ok(());
        }
        for conflict in &conflicts {
            println!(
                "{}: {} and {} overlap {} to {} (periods {} / {})",
                conflict.zone,
                conflict.wagon_a,
                conflict.wagon_b,
                conflict.overlap_start,
                conflict.overlap_end,
                conflict.period_a,
                conflict.period_b,
            );
        }
        return Ok(());
    }

    println!(
        "{:<8} {:<34} {:<8} {:<12} {}",
        "period", "zone", "wagon", "start", "end"
    );
    for assignment in &grid {
        println!(
            "{:<8} {:<34} {:<8} {:<12} {}",
            assignment.period,
            assignment.zone,
            assignment.wagon,
            assignment.planned_start,
            assignment.planned_end,
        );
    }
    println!(
        "\n{} assignments, {} trade-stacking conflicts",
        grid.len(),
        conflicts.len()
    );
    Ok(())
}

fn cmd_trades(plan_path: &Path) -> AppResult<()> {
    let plan = load_plan(plan_path)?;
    let trades = effective_trades(&plan);
    let workweek = plan_workweek(&plan);

    println!(
        "{} trades, working week: {}",
        trades.len(),
        workweek_label(workweek)
    );
    for (i, trade) in trades.iter().enumerate() {
        println!(
            "{:>3}. {:<6} {:<28} {} days, crew {}",
            i + 1,
            trade.code,
            trade.name,
            trade.duration_days,
            trade.crew_size,
        );
    }
    Ok(())
}

fn cmd_factors() -> AppResult<()> {
    for table in takt_factors::all_tables() {
        println!("{}", table.name());
        for item in table.items() {
            println!(
                "  {:<18} {:<24} x{:<5} {}",
                item.code, item.label, item.takt_multiplier, item.description
            );
        }
        println!();
    }
    Ok(())
}

fn workweek_label(workweek: Workweek) -> String {
    workweek.day_names().join(", ")
}
