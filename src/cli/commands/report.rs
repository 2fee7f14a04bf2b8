use pocketbook_core::{ChartService, SeriesPoint, SummaryService};
use pocketbook_domain::{Category, Division, TimePeriod};

use crate::cli::args::{parse_enum, ParsedArgs};
use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::{line, section};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

const BAR_WIDTH: usize = 20;
const BAR_GLYPH: char = '█';

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "stats",
            "Income, expense and balance for the current period, plus totals per category",
            cmd_stats,
        )
        .usage("stats [daily|weekly|monthly|yearly]")
        .options(&["period"]),
        CommandEntry::new(
            "categories",
            "Show the category and division catalogue",
            cmd_categories,
        ),
        CommandEntry::new(
            "chart",
            "Income versus expense over recent periods",
            cmd_chart,
        )
        .usage("chart [daily|weekly|monthly|yearly]")
        .options(&["period"]),
    ]
}

fn period_arg(parsed: &ParsedArgs<'_>) -> Result<TimePeriod, CommandError> {
    match parsed.option("period").or(parsed.positional(0)) {
        Some(raw) => parse_enum(raw).map_err(|err| {
            let choices: Vec<_> = TimePeriod::ALL.iter().map(|period| period.label()).collect();
            CommandError::InvalidArguments(format!(
                "{err} (expected one of: {})",
                choices.join(", ")
            ))
        }),
        None => Ok(TimePeriod::default()),
    }
}

fn cmd_stats(context: &mut ShellContext, args: &ParsedArgs<'_>) -> CommandResult {
    let period = period_arg(args)?;
    let now = context.store.now();
    let transactions = context.store.transactions();
    let totals = SummaryService::period_totals(transactions, period, now);

    section(format!("Summary ({period})"));
    line(format!("  Income   {:>14}", context.format_amount(totals.income)));
    line(format!("  Expense  {:>14}", context.format_amount(totals.expense)));
    line(format!("  Balance  {:>14}", context.format_amount(totals.balance)));

    section("By category");
    let summary = SummaryService::category_summary(transactions);
    if summary.is_empty() {
        io::print_info("No income or expense recorded yet.");
        return Ok(());
    }
    for entry in summary {
        line(format!(
            "  {} {:<14} +{:<14} -{}",
            entry.category.icon(),
            entry.category.as_str(),
            context.format_amount(entry.income),
            context.format_amount(entry.expense)
        ));
    }
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &ParsedArgs<'_>) -> CommandResult {
    section("Categories");
    for category in Category::ALL {
        line(format!("  {} {}", category.icon(), category));
    }
    section("Divisions");
    for division in Division::ALL {
        line(format!("  {} {}", division.icon(), division));
    }
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, args: &ParsedArgs<'_>) -> CommandResult {
    let period = period_arg(args)?;
    let series =
        ChartService::income_vs_expense(context.store.transactions(), period, context.store.now());

    section(format!("Income vs expense ({period})"));
    let peak = series
        .iter()
        .map(|point| point.income.max(point.expense))
        .fold(0.0_f64, f64::max);
    for point in &series {
        line(chart_row(context, point, peak));
    }
    Ok(())
}

fn chart_row(context: &ShellContext, point: &SeriesPoint, peak: f64) -> String {
    format!(
        "  {:<7} in  {:>12} {:<width$}  out {:>12} {}",
        point.label,
        context.format_amount(point.income),
        bar(point.income, peak),
        context.format_amount(point.expense),
        bar(point.expense, peak),
        width = BAR_WIDTH
    )
}

/// Bar proportional to `value / peak`; non-zero values get at least one cell.
fn bar(value: f64, peak: f64) -> String {
    if peak <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / peak) * BAR_WIDTH as f64).round() as usize;
    std::iter::repeat(BAR_GLYPH)
        .take(cells.clamp(1, BAR_WIDTH))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_peak() {
        assert_eq!(bar(0.0, 100.0), "");
        assert_eq!(bar(5.0, 0.0), "");
        assert_eq!(bar(100.0, 100.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(50.0, 100.0).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0.1, 100.0).chars().count(), 1);
    }

    fn period_of(args: &[&str]) -> Result<TimePeriod, CommandError> {
        period_arg(&ParsedArgs::parse(args))
    }

    #[test]
    fn period_defaults_to_monthly() {
        assert_eq!(period_of(&[]).unwrap(), TimePeriod::Monthly);
        assert_eq!(period_of(&["weekly"]).unwrap(), TimePeriod::Weekly);
        assert_eq!(period_of(&["period=y"]).unwrap(), TimePeriod::Yearly);
    }

    #[test]
    fn unknown_period_lists_the_choices() {
        let err = period_of(&["hourly"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown period `hourly` (expected one of: daily, weekly, monthly, yearly)"
        );
    }
}
