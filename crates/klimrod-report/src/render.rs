//! Plain-text rendering of reports.

use std::fmt::{self, Write};

use klimrod_tips::format::{
    format_currency, format_optional_percentage, format_percentage, format_points,
};
use klimrod_types::{ClosedEvent, PayrollEntry, PeriodReport, Recipe, RecipeCost, TipReport};

/// Write a tip distribution table.
///
/// Pooled reports show only the pool total; pass-through reports also show
/// the card and cash split.
fn write_tip_report(out: &mut String, report: &TipReport) -> fmt::Result {
    let label = report.pool_label.to_uppercase();

    writeln!(out, "METHOD: {}", report.policy.display_name())?;
    if !report.pooled {
        writeln!(
            out,
            "CARD GRATUITY: {}",
            format_currency(report.totals.total_cc_gratuity)
        )?;
        writeln!(
            out,
            "CASH GRATUITY: {}",
            format_currency(report.totals.total_cash_gratuity)
        )?;
    }
    writeln!(
        out,
        "TOTAL {label}: {}",
        format_currency(report.totals.total_gratuity)
    )?;
    writeln!(out)?;

    if report.rows.is_empty() {
        return writeln!(out, "NO SALES OR GRATUITY DATA YET");
    }

    writeln!(
        out,
        "{:<24} {:>14} {:>14} {:>14} {:>10} {:>8}",
        "EMPLOYEE", "CC GRATUITY", "CASH GRATUITY", "TOTAL", "POINTS", "% TOTAL"
    )?;
    for row in &report.rows {
        writeln!(
            out,
            "{:<24} {:>14} {:>14} {:>14} {:>10} {:>8}",
            row.employee.to_uppercase(),
            format_currency(row.cc_gratuity),
            format_currency(row.cash_gratuity),
            format_currency(row.tips),
            format_points(row.points),
            format_percentage(row.percentage_of_pool),
        )?;
    }
    Ok(())
}

/// Render a closed event summary followed by its distributions.
pub fn closed_event(event: &ClosedEvent) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let info = &event.info;

    writeln!(
        out,
        "{} {} {} {} ({})",
        info.date, info.event_name, info.shift, info.manager, event.restaurant_id
    )?;
    writeln!(out, "NET SALES: {}", format_currency(event.totals.total_net_sales))?;
    writeln!(
        out,
        "TOTAL EXPENSES: {}",
        format_currency(event.expense_totals.total_expenses)
    )?;
    writeln!(out, "CASH ON HAND: {}", format_currency(event.cash_on_hand))?;
    writeln!(out)?;

    write_tip_report(&mut out, &event.tip_report())?;

    if let Some(fee) = &event.other_fee_distribution {
        writeln!(out)?;
        write_tip_report(&mut out, fee)?;
    }
    Ok(out)
}

/// Render a period report.
pub fn period_report(report: &PeriodReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let filter = &report.filter;
    let shift = filter
        .shift
        .map_or_else(|| "ALL SHIFTS".to_string(), |s| s.to_string());
    let restaurant = filter.restaurant_id.as_deref().unwrap_or("ALL RESTAURANTS");

    writeln!(
        out,
        "{restaurant} PERIOD {} .. {} ({shift}): {} EVENTS",
        filter.start,
        filter.end,
        report.events.len()
    )?;
    writeln!(out, "NET SALES: {}", format_currency(report.totals.net_sales))?;
    writeln!(out, "CC GRATUITY: {}", format_currency(report.totals.cc_gratuity))?;
    writeln!(
        out,
        "CASH GRATUITY: {}",
        format_currency(report.totals.cash_gratuity)
    )?;
    writeln!(
        out,
        "TOTAL GRATUITY: {}",
        format_currency(report.totals.total_gratuity)
    )?;
    writeln!(out)?;

    for total in &report.employee_totals {
        writeln!(
            out,
            "{:<24} {:>14} {:>14} {:>14}",
            total.employee.to_uppercase(),
            format_currency(total.cc_gratuity),
            format_currency(total.cash_gratuity),
            format_currency(total.total),
        )?;
    }
    Ok(out)
}

/// Render a recipe's cost breakdown.
pub fn recipe_cost(recipe: &Recipe, cost: &RecipeCost) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{} ({})", recipe.name.to_uppercase(), recipe.category)?;
    writeln!(out, "SELLING PRICE: {}", format_currency(recipe.selling_price))?;
    writeln!(
        out,
        "INGREDIENTS: {:>12}   FOOD COST %: {}",
        format_currency(cost.ingredients_cost),
        format_optional_percentage(cost.food_cost_percentage)
    )?;
    writeln!(
        out,
        "LABOR:       {:>12}   LABOR COST %: {}",
        format_currency(cost.labor_cost),
        format_optional_percentage(cost.labor_cost_percentage)
    )?;
    writeln!(
        out,
        "TOTAL COST:  {:>12}   RECIPE COST %: {}",
        format_currency(cost.total_cost),
        format_optional_percentage(cost.cost_percentage)
    )?;
    if !cost.unmatched.is_empty() {
        writeln!(out, "NOT IN CATALOG: {}", cost.unmatched.join(", "))?;
    }
    Ok(out)
}

/// Render a payroll summary.
pub fn payroll(entries: &[PayrollEntry]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let Some(first) = entries.first() else {
        writeln!(out, "NO EMPLOYEES")?;
        return Ok(out);
    };

    writeln!(out, "PAYROLL {}", first.period)?;
    writeln!(
        out,
        "{:<24} {:>8} {:>14} {:>14} {:>14}",
        "EMPLOYEE", "HOURS", "GROSS", "TAXES", "NET"
    )?;
    for entry in entries {
        writeln!(
            out,
            "{:<24} {:>8} {:>14} {:>14} {:>14}",
            entry.employee_name.to_uppercase(),
            format_points(entry.total_hours),
            format_currency(entry.gross_salary),
            format_currency(entry.taxes_deductions),
            format_currency(entry.net_salary),
        )?;
    }
    let net = entries.iter().map(|e| e.net_salary).sum::<f64>();
    writeln!(out, "TOTAL NET: {}", format_currency(net))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use klimrod_tips::{close_event, distribute};
    use klimrod_types::{
        DistributionPolicy, EventInfo, EventSheet, Pool, RawSalesRecord, SalesRecord, Shift,
    };

    use super::*;

    fn tip_report(report: &TipReport) -> String {
        let mut out = String::new();
        write_tip_report(&mut out, report).expect("render");
        out
    }

    #[test]
    fn test_empty_report_message() {
        let report = distribute(&[], DistributionPolicy::Equal, None);
        let text = tip_report(&report);
        assert!(text.contains("METHOD: EQUAL PARTS"));
        assert!(text.contains("CARD GRATUITY:"));
        assert!(text.contains("NO SALES OR GRATUITY DATA YET"));
    }

    #[test]
    fn test_pooled_report_hides_card_split() {
        let records = vec![SalesRecord {
            employee: "ana".to_string(),
            points: 2.0,
            ..Default::default()
        }];
        let report = distribute(
            &records,
            DistributionPolicy::Percentage,
            Some(&Pool::labeled(1500.0, "Service Charge")),
        );
        let text = tip_report(&report);
        assert!(!text.contains("CARD GRATUITY:"));
        assert!(text.contains("TOTAL SERVICE CHARGE: $1,500.00"));
        assert!(text.contains("ANA"));
        assert!(text.contains("100.0%"));
    }

    #[test]
    fn test_closed_event_shows_pool_label() {
        let sheet = EventSheet {
            info: EventInfo::new(
                NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"),
                "EVENT 1",
                Shift::Dinner,
                "MARTA",
            ),
            sales: vec![RawSalesRecord {
                employee: "ANA".to_string(),
                points: Some(1.0),
                ..Default::default()
            }],
            expenses: Vec::new(),
            other_fee: None,
            distribution_policy: None,
            gratuity_pool: Some(Pool::labeled(100.0, "Service Charge")),
        };
        let closed_at = Utc
            .with_ymd_and_hms(2024, 3, 16, 0, 30, 0)
            .single()
            .expect("valid timestamp");
        let closed = close_event(&sheet, "REST1", closed_at).expect("close");
        let text = closed_event(&closed).expect("render");
        assert!(text.contains("TOTAL SERVICE CHARGE: $100.00"));
        assert!(!text.contains("CARD GRATUITY:"));
    }

    #[test]
    fn test_recipe_cost_dashes_without_price() {
        let recipe = Recipe {
            name: "soup".to_string(),
            ..Default::default()
        };
        let cost = RecipeCost {
            ingredients_cost: 2.0,
            total_cost: 2.0,
            unmatched: vec!["Leek".to_string()],
            ..Default::default()
        };
        let text = recipe_cost(&recipe, &cost).expect("render");
        assert!(text.contains("FOOD COST %: -"));
        assert!(text.contains("NOT IN CATALOG: Leek"));
    }

    #[test]
    fn test_payroll_totals() {
        let entries = vec![
            PayrollEntry {
                employee_name: "ana".to_string(),
                period: "2024-03".to_string(),
                total_hours: 8.0,
                gross_salary: 180.0,
                taxes_deductions: 27.0,
                net_salary: 153.0,
                ..Default::default()
            },
            PayrollEntry {
                employee_name: "luis".to_string(),
                period: "2024-03".to_string(),
                ..Default::default()
            },
        ];
        let text = payroll(&entries).expect("render");
        assert!(text.starts_with("PAYROLL 2024-03"));
        assert!(text.contains("$153.00"));
        assert!(text.contains("TOTAL NET: $153.00"));
        assert_eq!(payroll(&[]).expect("render"), "NO EMPLOYEES\n");
    }
}
