use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use squad_stats::aggregate;
use squad_stats::delimited::{self, LoadOptions};
use squad_stats::describe;
use squad_stats::lookup;
use squad_stats::matches;
use squad_stats::model::columns::{ATTRIBUTES, CLUB, NAME, OVERALL, POSITION};
use squad_stats::radar::{self, AttributeProfile};
use squad_stats::ranking;
use squad_stats::xlsx;
use squad_stats::{PositionCategory, StatsError, Table};

#[derive(Parser)]
#[command(name = "squad-stats")]
#[command(about = "Leaderboards and summaries for player rating tables", long_about = None)]
struct Cli {
    /// Field delimiter of input files
    #[arg(long, global = true, env = "SQUAD_STATS_DELIMITER", default_value = ",")]
    delimiter: char,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the club summary (CSV) or club/nation/position summaries (XLSX)
    Report {
        /// Player table
        input: PathBuf,

        /// Output file (.csv or .xlsx)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show one player's full record (name match ignores case)
    Player {
        input: PathBuf,
        name: String,
    },

    /// List every player of a club (name match ignores case)
    Team {
        input: PathBuf,
        club: String,
    },

    /// Top players by a rating column, optionally within a position category
    Top {
        input: PathBuf,

        /// Number of rows (default 5, or 10 with --category)
        #[arg(short)]
        n: Option<usize>,

        /// attackers, midfielders, defenders, left-defenders, center-defenders,
        /// right-defenders or goalkeepers
        #[arg(long)]
        category: Option<PositionCategory>,

        /// Show every category leaderboard
        #[arg(long, conflicts_with = "category")]
        all_categories: bool,

        /// Column to rank by (ignored with a category)
        #[arg(long, default_value = OVERALL)]
        column: String,

        /// Lowest first
        #[arg(long)]
        ascending: bool,
    },

    /// Groups ranked by the mean of a column
    TopGroups {
        input: PathBuf,

        #[arg(long, default_value = CLUB)]
        group: String,

        #[arg(long, default_value = OVERALL)]
        metric: String,

        #[arg(short, default_value_t = ranking::DEFAULT_TOP_N)]
        n: usize,
    },

    /// Descriptive statistics of every numeric column
    Describe {
        input: PathBuf,

        /// Also write the statistics (.csv or .xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Radar attributes of a player, or the club average
    Radar {
        input: PathBuf,

        /// Club name (exact)
        club: String,

        /// Player name (exact); club average when omitted
        #[arg(long)]
        player: Option<String>,
    },

    /// Text histogram of a numeric column
    Distribution {
        input: PathBuf,

        #[arg(long, default_value = OVERALL)]
        column: String,

        #[arg(long, default_value_t = 20)]
        bins: usize,
    },

    /// Match records: teams, outcome counts and the one-hot encoding
    Matches {
        input: PathBuf,

        /// Write the encoded table (.csv or .xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Home team of a fixture to encode
        #[arg(long, requires = "away")]
        home: Option<String>,

        /// Away team of a fixture to encode
        #[arg(long, requires = "home")]
        away: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if !cli.delimiter.is_ascii() {
        anyhow::bail!("Delimiter must be a single ASCII character: {:?}", cli.delimiter);
    }
    let options = LoadOptions {
        delimiter: cli.delimiter as u8,
    };

    match cli.command {
        Commands::Report { input, output } => {
            report(&input, &output, &options)?;
        }
        Commands::Player { input, name } => {
            player(&input, &name, &options)?;
        }
        Commands::Team { input, club } => {
            team(&input, &club, &options)?;
        }
        Commands::Top { input, n, category, all_categories, column, ascending } => {
            top(&input, n, category, all_categories, &column, ascending, &options)?;
        }
        Commands::TopGroups { input, group, metric, n } => {
            let table = load(&input, &options)?;
            let groups = ranking::top_n_groups_by_mean(&table, &group, &metric, n)
                .context("Failed to rank groups")?;
            print!("{}", groups);
        }
        Commands::Describe { input, output } => {
            describe_table(&input, output.as_deref(), &options)?;
        }
        Commands::Radar { input, club, player } => {
            radar_profile(&input, &club, player.as_deref(), &options)?;
        }
        Commands::Distribution { input, column, bins } => {
            distribution(&input, &column, bins, &options)?;
        }
        Commands::Matches { input, output, home, away } => {
            match_records(&input, output.as_deref(), home.zip(away), &options)?;
        }
    }

    Ok(())
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn load(input: &Path, options: &LoadOptions) -> Result<Table> {
    println!("Reading CSV file: {}", input.display());
    let table = delimited::read_table(input, options).context("Failed to read CSV file")?;
    println!("Found {} rows, {} columns", table.len(), table.width());
    Ok(table)
}

/// Write a table as CSV or XLSX depending on the output extension
fn export(table: &Table, sheet: &str, output: &Path) -> Result<()> {
    match extension(output).as_str() {
        "csv" => {
            println!("Writing CSV file: {}", output.display());
            delimited::write_table_csv(table, output).context("Failed to write CSV file")?;
        }
        "xlsx" => {
            println!("Writing Excel file: {}", output.display());
            xlsx::write_table_to_xlsx(table, sheet, output).context("Failed to write Excel file")?;
        }
        other => {
            anyhow::bail!("Unsupported output format: {}", other);
        }
    }
    Ok(())
}

/// Summaries that only need optional columns are skipped when those are absent
fn optional_summary(result: squad_stats::Result<Table>, what: &str) -> Result<Option<Table>> {
    match result {
        Ok(table) => Ok(Some(table)),
        Err(StatsError::MissingColumn(e)) => {
            println!("Skipping {} sheet: {}", what, e);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn report(input: &Path, output: &Path, options: &LoadOptions) -> Result<()> {
    let table = load(input, options)?;
    let clubs = aggregate::club_summary(&table).context("Failed to summarize clubs")?;
    println!("Found {} clubs", clubs.len());

    match extension(output).as_str() {
        "csv" => {
            println!("Writing CSV file: {}", output.display());
            delimited::write_club_summary_csv(&clubs, output).context("Failed to write CSV file")?;
        }
        "xlsx" => {
            let nations = optional_summary(aggregate::nation_summary(&table), "Nations")?;
            let positions = optional_summary(aggregate::position_count(&table), "Positions")?;

            let mut sheets: Vec<(&str, &Table)> = vec![("Clubs", &clubs)];
            if let Some(ref n) = nations {
                sheets.push(("Nations", n));
            }
            if let Some(ref p) = positions {
                sheets.push(("Positions", p));
            }

            println!("Writing Excel file: {}", output.display());
            xlsx::write_tables_to_xlsx(&sheets, output).context("Failed to write Excel file")?;
        }
        other => {
            anyhow::bail!("Unsupported output format: {}", other);
        }
    }

    println!("Done!");
    Ok(())
}

fn player(input: &Path, name: &str, options: &LoadOptions) -> Result<()> {
    let table = load(input, options)?;
    match lookup::find_entity_by_name(&table, NAME, name)? {
        Some(row) => {
            for (column, value) in table.record(&row) {
                println!("  {:<16} {}", column, value);
            }
        }
        None => println!("Player not found: {}", name),
    }
    Ok(())
}

fn team(input: &Path, club: &str, options: &LoadOptions) -> Result<()> {
    let table = load(input, options)?;
    let players = lookup::find_group_by_key(&table, CLUB, club)?;
    if players.is_empty() {
        println!("Club not found: {}", club);
    } else {
        println!("{} players", players.len());
        print!("{}", players);
    }
    Ok(())
}

fn top(
    input: &Path,
    n: Option<usize>,
    category: Option<PositionCategory>,
    all_categories: bool,
    column: &str,
    ascending: bool,
    options: &LoadOptions,
) -> Result<()> {
    let table = load(input, options)?;

    if all_categories {
        let n = n.unwrap_or(ranking::DEFAULT_CATEGORY_TOP_N);
        for (category, board) in ranking::category_leaderboards(&table, n)? {
            println!();
            println!("Top {} {}", n, category);
            print!("{}", board);
        }
        return Ok(());
    }

    let board = match category {
        Some(category) => {
            let n = n.unwrap_or(ranking::DEFAULT_CATEGORY_TOP_N);
            println!("Top {} {}", n, category);
            ranking::top_n_by_position_category(&table, category, n)?
        }
        None => {
            let n = n.unwrap_or(ranking::DEFAULT_TOP_N);
            println!("Top {} by {}", n, column);
            ranking::top_n(&table, column, n, !ascending)?
        }
    };
    print!("{}", board);
    Ok(())
}

fn describe_table(input: &Path, output: Option<&Path>, options: &LoadOptions) -> Result<()> {
    let table = load(input, options)?;
    let stats = describe::summary(&table)?;
    if stats.width() == 0 {
        println!("No numeric columns");
        return Ok(());
    }
    print!("{}", stats);

    if let Some(output) = output {
        export(&stats, "Summary", output)?;
    }
    Ok(())
}

fn print_profile(profile: &AttributeProfile) {
    println!("{}", profile.label);
    for (attribute, value) in profile.pairs() {
        match value {
            Some(v) => println!("  {:<12} {}", attribute, v),
            None => println!("  {:<12} -", attribute),
        }
    }
}

fn radar_profile(input: &Path, club: &str, player: Option<&str>, options: &LoadOptions) -> Result<()> {
    let table = load(input, options)?;

    match player {
        Some(player) => {
            match radar::entity_attributes(&table, CLUB, club, NAME, player, &ATTRIBUTES)? {
                Some(profile) => print_profile(&profile),
                None => {
                    println!("Player {} not found in {}", player, club);
                    let roster = radar::group_roster(&table, CLUB, club, NAME, POSITION)?;
                    if !roster.is_empty() {
                        println!("Players in {}:", club);
                        for (name, position) in roster {
                            println!("  {:<4} {}", position, name);
                        }
                    }
                }
            }
        }
        None => match radar::group_mean_attributes(&table, CLUB, club, &ATTRIBUTES)? {
            Some(profile) => print_profile(&profile),
            None => println!("Club not found: {}", club),
        },
    }
    Ok(())
}

fn distribution(input: &Path, column: &str, bins: usize, options: &LoadOptions) -> Result<()> {
    if bins == 0 {
        anyhow::bail!("--bins must be at least 1");
    }
    let table = load(input, options)?;
    let values = describe::column_values(&table, column)?;
    let counts = describe::histogram(&values, bins)?;
    if counts.is_empty() {
        println!("No values in {}", column);
        return Ok(());
    }

    let peak = counts.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    for (lo, count) in counts {
        let bar = "#".repeat(count * 50 / peak);
        println!("{:>8.2} | {:<50} {}", lo, bar, count);
    }
    Ok(())
}

fn match_records(
    input: &Path,
    output: Option<&Path>,
    fixture: Option<(String, String)>,
    options: &LoadOptions,
) -> Result<()> {
    println!("Reading CSV file: {}", input.display());
    let records = delimited::read_matches(input, options).context("Failed to read match file")?;
    println!("Found {} matches", records.len());

    let teams = matches::teams(&records);
    println!("Teams: {}", teams.len());
    for team in teams.iter().take(10) {
        println!("  {}", team);
    }
    if teams.len() > 10 {
        println!("  ... and {} more", teams.len() - 10);
    }

    let counts = matches::outcome_counts(&records);
    println!(
        "Home wins: {}  Draws: {}  Away wins: {}",
        counts.home_wins, counts.draws, counts.away_wins
    );

    let encoded = matches::encode(&records)?;
    if let Some((home, away)) = fixture {
        let columns = matches::feature_columns(&encoded);
        let row = matches::encode_fixture(&home, &away, &columns)?;
        let active: Vec<&str> = columns
            .iter()
            .zip(&row)
            .filter(|(_, v)| **v == 1)
            .map(|(c, _)| c.as_str())
            .collect();
        println!("Fixture {} vs {}: {} features, active {:?}", home, away, row.len(), active);
    }

    if let Some(output) = output {
        export(&encoded, "Matches", output)?;
    }

    println!("Done!");
    Ok(())
}
