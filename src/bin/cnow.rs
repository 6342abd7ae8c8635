use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cnow_rs::{Client, SortKey};
use cnow_rs::{query, render, stats, storage, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cnow",
    version,
    about = "Fetch, merge, visualize & summarize country population, capital, and flag data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Card view of the merged country list (search + 2-way sort).
    Grid(GridArgs),
    /// Table view of the merged country list (search + 4-way sort).
    Table(TableArgs),
    /// Population totals and the top-10 pie breakdown.
    Stats(StatsArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum GridSort {
    Alphabetical,
    Population,
}

#[derive(ValueEnum, Clone, Debug)]
enum TableSort {
    Alphabetical,
    Iso,
    Capital,
    Population,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Filter by country name or ISO code (case-insensitive substring).
    #[arg(short, long, default_value = "")]
    search: String,
    /// Sort order.
    #[arg(long, value_enum, default_value_t = GridSort::Alphabetical)]
    sort: GridSort,
    /// Save the displayed rows to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Filter by country name or ISO code (case-insensitive substring).
    #[arg(short, long, default_value = "")]
    search: String,
    /// Sort order.
    #[arg(long, value_enum, default_value_t = TableSort::Alphabetical)]
    sort: TableSort,
    /// Save the displayed rows to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Create a pie chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 700).
    #[arg(long, default_value_t = 700)]
    height: u32,
    /// Chart title.
    #[arg(long, default_value = "Top 10 Countries by Population")]
    title: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Grid(args) => cmd_grid(args),
        Command::Table(args) => cmd_table(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn save(countries: &[cnow_rs::Country], path: &PathBuf, format: Option<OutFormat>) -> Result<()> {
    let fmt = match format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(countries, path)?,
        "json" => storage::save_json(countries, path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", countries.len(), path.display());
    Ok(())
}

fn cmd_grid(args: GridArgs) -> Result<()> {
    let client = Client::default();
    let countries = client.fetch_countries()?;
    let sort = match args.sort {
        GridSort::Alphabetical => SortKey::Name,
        GridSort::Population => SortKey::Population,
    };
    let visible = query::filter_and_sort(&countries, &args.search, sort);

    println!("{}", render::results_summary(visible.len(), &args.search));
    println!();
    print!("{}", render::card_grid(&visible));

    if let Some(path) = args.out.as_ref() {
        save(&visible, path, args.format)?;
    }
    Ok(())
}

fn cmd_table(args: TableArgs) -> Result<()> {
    let client = Client::default();
    let countries = client.fetch_countries()?;
    let sort = match args.sort {
        TableSort::Alphabetical => SortKey::Name,
        TableSort::Iso => SortKey::Iso,
        TableSort::Capital => SortKey::Capital,
        TableSort::Population => SortKey::Population,
    };
    let visible = query::filter_and_sort(&countries, &args.search, sort);

    println!("{}", render::results_summary(visible.len(), &args.search));
    println!();
    print!("{}", render::table(&visible));

    if let Some(path) = args.out.as_ref() {
        save(&visible, path, args.format)?;
    }
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let client = Client::default();
    let countries = client.fetch_countries()?;

    let overview = stats::population_overview(&countries);
    print!("{}", render::overview(&overview));

    let slices = stats::top_slices(&countries);
    println!();
    println!("{}", args.title);
    for (i, slice) in slices.iter().enumerate() {
        let share = if overview.total > 0 {
            slice.value as f64 / overview.total as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "  {:>2}. {:<24} {:>16}  ({:.1}%)",
            i + 1,
            slice.name,
            render::format_population(&cnow_rs::Population::Count(slice.value)),
            share
        );
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_population_pie(&slices, plot_path, args.width, args.height, &args.title)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }
    Ok(())
}
