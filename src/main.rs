use agecalc::age;
use agecalc::form::{self, RawInput};
use anyhow::bail;
use chrono::{NaiveDate, Utc};
use clap::Parser;

/// Work out an age in years, months and days from a date of birth.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Day of birth (DD)
    day: String,

    /// Month of birth (MM)
    month: String,

    /// Year of birth (YYYY)
    year: String,

    /// Reference date to measure against (YYYY-MM-DD); defaults to today
    #[arg(long, value_name = "DATE")]
    on: Option<NaiveDate>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Single clock read; validation and calculation both see this snapshot.
    let today = cli.on.unwrap_or_else(|| Utc::now().date_naive());

    // Validate the raw fields
    let input = RawInput {
        day: cli.day,
        month: cli.month,
        year: cli.year,
    };
    let report = form::check_form(&input, today);
    if !report.is_clean() {
        for (field, problem) in report.problems() {
            eprintln!("{field}: {problem}");
        }
        bail!("birth date is not valid");
    }

    // Calculate age
    let day: i32 = input.day.trim().parse()?;
    let month: i32 = input.month.trim().parse()?;
    let year: i32 = input.year.trim().parse()?;
    let result = age::calculate_age(day, month, year, today)?;

    if cli.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", age::format_age(&result));
    }

    Ok(())
}
