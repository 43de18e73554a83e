//! Plain-text rendering of projection reports.

use std::fmt::Write as _;

use crate::projection::{IncomeSummary, MonthSnapshot, ProjectionReport};

use super::style::UiStyle;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: &'static str,
    pub width: usize,
}

impl TableColumn {
    pub const fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

const GOAL_COLUMNS: [TableColumn; 5] = [
    TableColumn::new("Goal", 24),
    TableColumn::new("Balance", 14),
    TableColumn::new("This month", 12),
    TableColumn::new("Progress", 9),
    TableColumn::new("Status", 20),
];

pub fn render_report(report: &ProjectionReport, currency: &str, style: &UiStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style.header(&format!(
            "Goal projection: {} active goal(s), months {}-{}",
            report.total_active_goals,
            report.start_offset,
            report.start_offset as usize + report.months.len().saturating_sub(1)
        ))
    );
    for month in &report.months {
        out.push('\n');
        render_month(&mut out, month, currency, style);
    }
    out
}

fn render_month(out: &mut String, month: &MonthSnapshot, currency: &str, style: &UiStyle) {
    let _ = writeln!(out, "{}", style.emphasis(&format!("=== {} ===", month.label)));
    let financials = &month.financials;
    let _ = writeln!(
        out,
        "Income {}  Expenses {}  Surplus {}  Savings rate {:.1}%  Allocated {}",
        format_amount(financials.income, currency),
        format_amount(financials.expenses, currency),
        format_amount(financials.surplus, currency),
        financials.savings_rate,
        format_amount(financials.total_allocated_to_goals, currency),
    );

    if !month.active_goals.is_empty() {
        let width: usize = GOAL_COLUMNS.iter().map(|col| col.width + 1).sum();
        if !style.plain_mode {
            let _ = writeln!(out, "{}", style.horizontal_line(width));
        }
        let header: String = GOAL_COLUMNS
            .iter()
            .map(|col| format!("{:width$} ", col.header, width = col.width))
            .collect();
        let _ = writeln!(out, "{}", style.emphasis(header.trim_end()));
        for goal in &month.active_goals {
            let mut status = goal.status.label().to_string();
            if goal.is_starting_this_month {
                status.push_str(" (new)");
            }
            if goal.is_completed_this_month {
                status.push_str(" (done)");
            }
            let status = format!("{:width$}", status, width = GOAL_COLUMNS[4].width);
            let _ = writeln!(
                out,
                "{:w0$} {:>w1$} {:>w2$} {:>w3$} {}",
                truncate(&goal.title, GOAL_COLUMNS[0].width),
                format_amount(goal.projected_balance, currency),
                format_amount(goal.monthly_allocation, currency),
                format!("{:.1}%", goal.progress_percent),
                style.status(goal.status, status.trim_end()),
                w0 = GOAL_COLUMNS[0].width,
                w1 = GOAL_COLUMNS[1].width,
                w2 = GOAL_COLUMNS[2].width,
                w3 = GOAL_COLUMNS[3].width,
            );
        }
    }

    for goal in &month.upcoming_goals {
        let _ = writeln!(out, "  upcoming: {} ({})", goal.title, goal.starts_in);
    }
    for goal in &month.completed_goals {
        let _ = writeln!(
            out,
            "  completed: {} in {} at {}",
            goal.title,
            goal.completed_label,
            format_amount(goal.final_balance, currency)
        );
    }

    let summary = &month.summary;
    let _ = writeln!(
        out,
        "Active {} | Completed {} | Upcoming {} | Avg progress {:.1}%",
        summary.active_count, summary.completed_count, summary.upcoming_count, summary.average_progress
    );
}

pub fn render_summary(summary: &IncomeSummary, currency: &str, style: &UiStyle) -> String {
    let financials = summary.financials_for(0);
    let rows = [
        ("Base income", summary.base_monthly_income),
        ("Side income", summary.side_project_income),
        ("One-time net", summary.one_time_net),
        ("Expenses", summary.monthly_expenses),
        ("Surplus", financials.surplus),
    ];
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.header("Monthly cash flow"));
    for (label, amount) in rows {
        let _ = writeln!(out, "{:<14}{:>16}", label, format_amount(amount, currency));
    }
    let _ = writeln!(out, "{:<14}{:>15.1}%", "Savings rate", financials.savings_rate());
    out
}

/// Two decimals with thousands grouping, e.g. `-1,234.50 USD`.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let raw = format!("{:.2}", amount.abs());
    let (whole, cents) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let mut grouped = String::new();
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && raw != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents} {currency}")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
