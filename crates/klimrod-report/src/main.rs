//! klimrod-report: close event sheets, build period reports, cost recipes,
//! and run payroll from the command line.
//!
//! Usage:
//!   klimrod-report close <sheet.json> [--restaurant ID] [--json]
//!   klimrod-report period <closed.json> --from YYYY-MM-DD --to YYYY-MM-DD [--shift SHIFT] [--restaurant ID|ALL] [--json]
//!   klimrod-report cost <recipe.json> --ingredients <catalog.json> [--rate HOURLY] [--json]
//!   klimrod-report payroll <timecards.json> --employees <employees.json> --month YYYY-MM [--tax PCT] [--json]
//!
//! `close` reads one event sheet and prints the closed event. `period` reads
//! a JSON array of closed events and reports on one restaurant, the
//! configured one unless `--restaurant` says otherwise. With `--json` the
//! result is written to stdout as JSON instead of a text table. Logs go to
//! stderr.

mod config;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::{NaiveDate, Utc};
use klimrod_types::{
    ClosedEvent, Employee, EventSheet, Ingredient, PeriodFilter, Recipe, Shift, Timecard,
};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::ReportConfig;

#[derive(Debug, PartialEq)]
enum Command {
    Close {
        sheet: PathBuf,
        restaurant: Option<String>,
        json: bool,
    },
    Period {
        events: PathBuf,
        filter: PeriodFilter,
        /// `None` means the configured restaurant.
        restaurant: Option<String>,
        json: bool,
    },
    Cost {
        recipe: PathBuf,
        ingredients: PathBuf,
        rate: Option<f64>,
        json: bool,
    },
    Payroll {
        timecards: PathBuf,
        employees: PathBuf,
        month: NaiveDate,
        tax: Option<f64>,
        json: bool,
    },
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> anyhow::Result<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(i) => match args.get(i + 1) {
            Some(value) => Ok(Some(value.as_str())),
            None => bail!("{flag} requires a value"),
        },
    }
}

fn number_flag(args: &[String], flag: &str) -> anyhow::Result<Option<f64>> {
    flag_value(args, flag)?
        .map(|v| {
            v.parse::<f64>()
                .with_context(|| format!("{flag} expects a number, got {v:?}"))
        })
        .transpose()
}

fn parse_date(value: &str, flag: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("{flag} expects YYYY-MM-DD, got {value:?}"))
}

/// First day of a `YYYY-MM` month.
fn parse_month(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .with_context(|| format!("--month expects YYYY-MM, got {value:?}"))
}

/// Parse arguments after the program name.
fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let json = args.iter().any(|a| a == "--json");
    let (command, path) = match args {
        [command, path, ..] => (command.as_str(), PathBuf::from(path)),
        _ => bail!("usage: klimrod-report <close|period|cost|payroll> <file> [options]"),
    };
    let restaurant = flag_value(args, "--restaurant")?.map(str::to_string);

    match command {
        "close" => Ok(Command::Close {
            sheet: path,
            restaurant,
            json,
        }),
        "period" => {
            let start = flag_value(args, "--from")?.context("period requires --from")?;
            let end = flag_value(args, "--to")?.context("period requires --to")?;
            let shift = match flag_value(args, "--shift")? {
                None => None,
                Some(s) if s.eq_ignore_ascii_case("ALL") => None,
                Some(s) => Some(s.parse::<Shift>()?),
            };
            Ok(Command::Period {
                events: path,
                filter: PeriodFilter {
                    restaurant_id: None,
                    start: parse_date(start, "--from")?,
                    end: parse_date(end, "--to")?,
                    shift,
                },
                restaurant,
                json,
            })
        }
        "cost" => Ok(Command::Cost {
            recipe: path,
            ingredients: flag_value(args, "--ingredients")?
                .context("cost requires --ingredients")?
                .into(),
            rate: number_flag(args, "--rate")?,
            json,
        }),
        "payroll" => Ok(Command::Payroll {
            timecards: path,
            employees: flag_value(args, "--employees")?
                .context("payroll requires --employees")?
                .into(),
            month: parse_month(flag_value(args, "--month")?.context("payroll requires --month")?)?,
            tax: number_flag(args, "--tax")?,
            json,
        }),
        other => bail!("unknown command {other:?}"),
    }
}

/// Restaurant a period report covers: the one asked for, every restaurant
/// for `ALL`, otherwise the configured default.
fn period_restaurant(requested: Option<&str>, configured: &str) -> Option<String> {
    match requested {
        None => Some(configured.to_string()),
        Some(id) if id.eq_ignore_ascii_case("ALL") => None,
        Some(id) => Some(id.to_string()),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn run_close(
    config: &ReportConfig,
    sheet_path: &Path,
    restaurant: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let mut sheet: EventSheet = read_json(sheet_path)?;

    if sheet.distribution_policy.is_none() {
        sheet.distribution_policy = Some(config.report.default_policy);
    }
    if let Some(pool) = sheet.gratuity_pool.as_mut() {
        pool.label.get_or_insert_with(|| config.report.pool_label.clone());
    }

    let restaurant = restaurant.unwrap_or(config.report.restaurant_id.as_str());
    let closed = klimrod_tips::close_event(&sheet, restaurant, Utc::now())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&closed)?);
    } else {
        print!("{}", render::closed_event(&closed)?);
    }
    Ok(())
}

fn run_period(events_path: &Path, filter: &PeriodFilter, json: bool) -> anyhow::Result<()> {
    let events: Vec<ClosedEvent> = read_json(events_path)?;
    let report = klimrod_tips::period_report(&events, filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::period_report(&report)?);
    }
    Ok(())
}

fn run_cost(recipe_path: &Path, catalog_path: &Path, rate: f64, json: bool) -> anyhow::Result<()> {
    let recipe: Recipe = read_json(recipe_path)?;
    let catalog: Vec<Ingredient> = read_json(catalog_path)?;
    let cost = klimrod_tips::cost_recipe(&recipe, &catalog, rate);

    if json {
        println!("{}", serde_json::to_string_pretty(&cost)?);
    } else {
        print!("{}", render::recipe_cost(&recipe, &cost)?);
    }
    Ok(())
}

fn run_payroll(
    timecards_path: &Path,
    employees_path: &Path,
    month: NaiveDate,
    tax_percentage: f64,
    json: bool,
) -> anyhow::Result<()> {
    let timecards: Vec<Timecard> = read_json(timecards_path)?;
    let employees: Vec<Employee> = read_json(employees_path)?;
    let entries = klimrod_tips::generate_payroll(&employees, &timecards, month, tax_percentage)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render::payroll(&entries)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = ReportConfig::load()?;

    // Initialize tracing
    let level = &config.logging.log_level;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("klimrod_tips={level}").parse()?)
                .add_directive(format!("klimrod_report={level}").parse()?),
        )
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let command = parse_args(&args)?;
    info!(?command, "klimrod-report starting");

    match command {
        Command::Close {
            sheet,
            restaurant,
            json,
        } => run_close(&config, &sheet, restaurant.as_deref(), json),
        Command::Period {
            events,
            mut filter,
            restaurant,
            json,
        } => {
            filter.restaurant_id =
                period_restaurant(restaurant.as_deref(), &config.report.restaurant_id);
            run_period(&events, &filter, json)
        }
        Command::Cost {
            recipe,
            ingredients,
            rate,
            json,
        } => run_cost(
            &recipe,
            &ingredients,
            rate.unwrap_or(config.costing.hourly_labor_rate),
            json,
        ),
        Command::Payroll {
            timecards,
            employees,
            month,
            tax,
            json,
        } => run_payroll(
            &timecards,
            &employees,
            month,
            tax.unwrap_or(config.payroll.tax_percentage),
            json,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_close() {
        let command = parse_args(&args(&["close", "sheet.json", "--restaurant", "REST2"]))
            .expect("parse");
        assert_eq!(
            command,
            Command::Close {
                sheet: PathBuf::from("sheet.json"),
                restaurant: Some("REST2".to_string()),
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_period() {
        let command = parse_args(&args(&[
            "period",
            "closed.json",
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-31",
            "--shift",
            "dinner",
            "--json",
        ]))
        .expect("parse");
        match command {
            Command::Period { filter, json, .. } => {
                assert!(json);
                assert_eq!(filter.shift, Some(Shift::Dinner));
                assert_eq!(
                    filter.start,
                    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
                );
            }
            other => unreachable!("expected period command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_period_all_shifts() {
        let command = parse_args(&args(&[
            "period", "closed.json", "--from", "2024-03-01", "--to", "2024-03-31", "--shift", "ALL",
        ]))
        .expect("parse");
        assert!(matches!(command, Command::Period { filter: PeriodFilter { shift: None, .. }, .. }));
    }

    #[test]
    fn test_parse_period_restaurant() {
        let command = parse_args(&args(&[
            "period", "closed.json", "--from", "2024-03-01", "--to", "2024-03-31", "--restaurant", "REST2",
        ]))
        .expect("parse");
        match command {
            Command::Period { restaurant, .. } => {
                assert_eq!(restaurant.as_deref(), Some("REST2"));
            }
            other => unreachable!("expected period command, got {other:?}"),
        }
    }

    #[test]
    fn test_period_restaurant_defaults_to_config() {
        assert_eq!(period_restaurant(None, "REST1"), Some("REST1".to_string()));
        assert_eq!(period_restaurant(Some("REST2"), "REST1"), Some("REST2".to_string()));
        assert_eq!(period_restaurant(Some("all"), "REST1"), None);
    }

    #[test]
    fn test_parse_cost_and_payroll() {
        let command = parse_args(&args(&[
            "cost", "risotto.json", "--ingredients", "catalog.json", "--rate", "22.5",
        ]))
        .expect("parse");
        assert_eq!(
            command,
            Command::Cost {
                recipe: PathBuf::from("risotto.json"),
                ingredients: PathBuf::from("catalog.json"),
                rate: Some(22.5),
                json: false,
            }
        );

        let command = parse_args(&args(&[
            "payroll", "cards.json", "--employees", "staff.json", "--month", "2024-03",
        ]))
        .expect("parse");
        assert_eq!(
            command,
            Command::Payroll {
                timecards: PathBuf::from("cards.json"),
                employees: PathBuf::from("staff.json"),
                month: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
                tax: None,
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["refund", "x.json"])).is_err());
        assert!(parse_args(&args(&["period", "x.json", "--from", "2024-03-01"])).is_err());
        assert!(parse_args(&args(&["period", "x.json", "--from", "03/01/2024", "--to", "2024-03-31"])).is_err());
        assert!(parse_args(&args(&["close", "x.json", "--restaurant"])).is_err());
        assert!(parse_args(&args(&["cost", "x.json"])).is_err());
        assert!(parse_args(&args(&["cost", "x.json", "--ingredients", "c.json", "--rate", "lots"])).is_err());
        assert!(parse_args(&args(&["payroll", "x.json", "--employees", "e.json", "--month", "March"])).is_err());
        assert!(parse_args(&args(&["period", "x.json", "--from", "2024-03-01", "--to", "2024-03-31", "--shift", "BREAKFAST"])).is_err());
    }
}
