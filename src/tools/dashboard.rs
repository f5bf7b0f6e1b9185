//! Dashboard Tools
//!
//! Day grouping, the two optional reports, and the assembled dashboard page.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{DashboardStats, DayBucket, DayKey, LogEntry, Macros, ReportKind, ReportView};
use crate::nutrition::{
    distribute_macros, group_by_day, summarize_weekly, DayCalendar, MacroDistribution,
    WeeklySummary,
};

/// Response for group_logs
#[derive(Debug, Serialize)]
pub struct GroupLogsResponse {
    pub days: Vec<DayBucket>,
    pub total_entries: usize,
}

/// One meal line in a day's table
#[derive(Debug, Serialize)]
pub struct MealRow {
    pub id: String,
    pub time: String,
    pub food_name: String,
    pub calories: u64,
    pub macros: Macros,
}

/// Day summary for the dashboard list
#[derive(Debug, Serialize)]
pub struct DayRow {
    pub day_key: DayKey,
    pub label: String,
    pub total_calories: u64,
    pub total_macros: Macros,
    pub meal_count: usize,
    pub meals: Vec<MealRow>,
}

/// The report shown above the day list
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActiveReport {
    Weekly(WeeklySummary),
    Macros(MacroDistribution),
}

/// Response for get_dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub active_report: ReportView,
    pub report: Option<ActiveReport>,
    /// Set when the selected report cannot be computed for this data
    pub report_error: Option<String>,
    pub days: Vec<DayRow>,
}

/// Response for toggle_report
#[derive(Debug, Serialize)]
pub struct ToggleReportResponse {
    pub previous: ReportView,
    pub active_report: ReportView,
}

/// Response for export_dashboard_markdown
#[derive(Debug, Serialize)]
pub struct ExportDashboardResponse {
    pub markdown: String,
    pub days: usize,
    pub generated_at: String,
}

// ============================================================================
// Aggregation Tools
// ============================================================================

pub fn group_logs(calendar: &DayCalendar, logs: &[LogEntry]) -> GroupLogsResponse {
    GroupLogsResponse {
        days: group_by_day(logs, calendar),
        total_entries: logs.len(),
    }
}

pub fn weekly_summary(calendar: &DayCalendar, logs: &[LogEntry]) -> Result<WeeklySummary, String> {
    let buckets = group_by_day(logs, calendar);
    summarize_weekly(&buckets).map_err(|e| format!("Weekly trends unavailable: {}", e))
}

pub fn macro_distribution(
    calendar: &DayCalendar,
    logs: &[LogEntry],
) -> Result<MacroDistribution, String> {
    let buckets = group_by_day(logs, calendar);
    distribute_macros(&buckets).map_err(|e| format!("Macro distribution unavailable: {}", e))
}

// ============================================================================
// Report Selection
// ============================================================================

/// Toggle a report on `view`; picking the active report again hides it
pub fn toggle_report(view: &mut ReportView, report: &str) -> Result<ToggleReportResponse, String> {
    let kind = ReportKind::from_str(report)
        .ok_or_else(|| format!("Unknown report '{}'. Use 'weekly' or 'macros'.", report))?;

    let previous = *view;
    *view = previous.toggle(kind);

    Ok(ToggleReportResponse {
        previous,
        active_report: *view,
    })
}

// ============================================================================
// Dashboard Page
// ============================================================================

pub fn get_dashboard(
    calendar: &DayCalendar,
    stats: &DashboardStats,
    logs: &[LogEntry],
    view: ReportView,
) -> DashboardResponse {
    let buckets = group_by_day(logs, calendar);

    let computed = match view.kind() {
        None => None,
        Some(ReportKind::Weekly) => Some(summarize_weekly(&buckets).map(ActiveReport::Weekly)),
        Some(ReportKind::Macros) => Some(distribute_macros(&buckets).map(ActiveReport::Macros)),
    };
    let (report, report_error) = match computed {
        None => (None, None),
        Some(Ok(report)) => (Some(report), None),
        Some(Err(e)) => (None, Some(e.to_string())),
    };

    let days = buckets
        .into_iter()
        .map(|bucket| day_row(calendar, bucket))
        .collect();

    DashboardResponse {
        stats: stats.clone(),
        active_report: view,
        report,
        report_error,
        days,
    }
}

fn day_row(calendar: &DayCalendar, bucket: DayBucket) -> DayRow {
    let meals = bucket
        .entries
        .iter()
        .map(|entry| MealRow {
            id: entry.id.clone(),
            time: calendar.time_label(&entry.timestamp),
            food_name: entry.food_name.clone(),
            calories: entry.calories,
            macros: entry.macros,
        })
        .collect();

    DayRow {
        day_key: bucket.day_key,
        label: bucket.label,
        total_calories: bucket.total_calories,
        total_macros: bucket.total_macros,
        meal_count: bucket.entries.len(),
        meals,
    }
}

/// Render the dashboard page as a markdown document
pub fn export_dashboard_markdown(
    calendar: &DayCalendar,
    stats: &DashboardStats,
    logs: &[LogEntry],
    view: ReportView,
    now: DateTime<Utc>,
) -> ExportDashboardResponse {
    let dashboard = get_dashboard(calendar, stats, logs, view);
    let generated_at = calendar.timestamp_label(&now);
    let timezone = calendar.settings().timezone;

    let mut markdown = String::new();

    // Header
    markdown.push_str("# NutriTrack Dashboard\n\n");
    markdown.push_str(&format!("**Generated:** {} ({})\n\n", generated_at, timezone));
    markdown.push_str("| Total Users | Daily Analyses | Pro Subscriptions |\n");
    markdown.push_str("|---|---|---|\n");
    markdown.push_str(&format!(
        "| {} | {} | {} |\n\n",
        dashboard.stats.total_users, dashboard.stats.daily_analyses, dashboard.stats.active_subscriptions
    ));

    match (&dashboard.report, &dashboard.report_error) {
        (Some(ActiveReport::Weekly(weekly)), _) => {
            markdown.push_str("## Weekly Trends\n\n");
            markdown.push_str(&format!("- **Average Daily Calories:** {} kcal\n", weekly.average_calories));
            markdown.push_str(&format!(
                "- **Highest Calorie Day:** {} ({})\n",
                weekly.peak_weekday, weekly.peak_day
            ));
            markdown.push_str(&format!("- **Total Meals:** {}\n\n", weekly.total_entries));
        }
        (Some(ActiveReport::Macros(dist)), _) => {
            markdown.push_str("## Macro Distribution\n\n");
            markdown.push_str(&format!("- **Carbs:** {}% ({}g)\n", dist.carbs_pct, dist.totals.carbs));
            markdown.push_str(&format!("- **Protein:** {}% ({}g)\n", dist.protein_pct, dist.totals.protein));
            markdown.push_str(&format!("- **Fats:** {}% ({}g)\n\n", dist.fats_pct, dist.totals.fats));
        }
        (None, Some(error)) => {
            markdown.push_str(&format!("> Report unavailable: {}\n\n", error));
        }
        (None, None) => {}
    }

    markdown.push_str("## Nutrition Summary\n\n");
    if dashboard.days.is_empty() {
        markdown.push_str("No meals logged.\n");
    }

    for day in &dashboard.days {
        markdown.push_str(&format!("### {}\n\n", day.label));
        markdown.push_str(&format!("Total: {} kcal | {}\n\n", day.total_calories, day.total_macros));
        markdown.push_str("| Time | Meal | Calories | Macros |\n");
        markdown.push_str("|---|---|---|---|\n");
        for meal in &day.meals {
            markdown.push_str(&format!(
                "| {} | {} | {} kcal | {}g C / {}g P / {}g F |\n",
                meal.time,
                meal.food_name.replace('|', "\\|"),
                meal.calories,
                meal.macros.carbs,
                meal.macros.protein,
                meal.macros.fats,
            ));
        }
        markdown.push('\n');
    }

    ExportDashboardResponse {
        markdown,
        days: dashboard.days.len(),
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_group_logs_counts_entries() {
        let dataset = Dataset::demo(now());
        let response = group_logs(&DayCalendar::utc(), &dataset.logs);
        assert_eq!(response.total_entries, 5);
        assert_eq!(response.days.len(), 2);
    }

    #[test]
    fn test_report_errors_become_messages() {
        let err = weekly_summary(&DayCalendar::utc(), &[]).unwrap_err();
        assert!(err.contains("No day buckets"));
        let err = macro_distribution(&DayCalendar::utc(), &[]).unwrap_err();
        assert!(err.contains("zero"));
    }

    #[test]
    fn test_toggle_report() {
        let mut view = ReportView::None;
        let response = toggle_report(&mut view, "weekly").unwrap();
        assert_eq!(response.previous, ReportView::None);
        assert_eq!(view, ReportView::Weekly);

        toggle_report(&mut view, "macros").unwrap();
        assert_eq!(view, ReportView::Macros);

        toggle_report(&mut view, "macros").unwrap();
        assert_eq!(view, ReportView::None);

        assert!(toggle_report(&mut view, "monthly").is_err());
        assert_eq!(view, ReportView::None);
    }

    #[test]
    fn test_dashboard_without_report() {
        let dataset = Dataset::demo(now());
        let page = get_dashboard(&DayCalendar::utc(), &dataset.stats, &dataset.logs, ReportView::None);
        assert!(page.report.is_none());
        assert!(page.report_error.is_none());
        assert_eq!(page.days.len(), 2);
        assert_eq!(page.days[0].meal_count, 2);
        assert_eq!(page.days[0].meals[0].time, "15:00");
        assert_eq!(page.days[1].total_calories, 940);
    }

    #[test]
    fn test_dashboard_with_weekly_report() {
        let dataset = Dataset::demo(now());
        let page = get_dashboard(&DayCalendar::utc(), &dataset.stats, &dataset.logs, ReportView::Weekly);
        match page.report {
            Some(ActiveReport::Weekly(weekly)) => {
                assert_eq!(weekly.average_calories, 820);
                assert_eq!(weekly.peak_weekday, "Sunday");
            }
            other => panic!("expected weekly report, got {:?}", other),
        }
    }

    #[test]
    fn test_dashboard_report_error_on_empty_logs() {
        let page = get_dashboard(
            &DayCalendar::utc(),
            &DashboardStats::demo(),
            &[],
            ReportView::Macros,
        );
        assert!(page.report.is_none());
        assert!(page.report_error.is_some());
        assert!(page.days.is_empty());
    }

    #[test]
    fn test_report_serializes_with_kind_tag() {
        let dataset = Dataset::demo(now());
        let page = get_dashboard(&DayCalendar::utc(), &dataset.stats, &dataset.logs, ReportView::Macros);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["active_report"], "macros");
        assert_eq!(value["report"]["kind"], "macros");
        assert_eq!(value["report"]["carbs_pct"], 42);
        assert_eq!(value["days"][0]["day_key"], "2024-01-01");
    }

    #[test]
    fn test_export_markdown() {
        let dataset = Dataset::demo(now());
        let export = export_dashboard_markdown(
            &DayCalendar::utc(),
            &dataset.stats,
            &dataset.logs,
            ReportView::Weekly,
            now(),
        );
        assert_eq!(export.days, 2);
        assert_eq!(export.generated_at, "2024-01-01 15:00");
        let md = &export.markdown;
        assert!(md.starts_with("# NutriTrack Dashboard"));
        assert!(md.contains("| 156 | 423 | 45 |"));
        assert!(md.contains("## Weekly Trends"));
        assert!(md.contains("- **Average Daily Calories:** 820 kcal"));
        assert!(md.contains("### Monday, January 1"));
        assert!(md.contains("Total: 700 kcal | 43g C | 60g P | 30g F"));
        assert!(md.contains("| 15:00 | Almoço: Frango grelhado com salada | 420 kcal | 15g C / 45g P / 18g F |"));
    }

    #[test]
    fn test_export_markdown_macros_view() {
        let dataset = Dataset::demo(now());
        let export = export_dashboard_markdown(
            &DayCalendar::utc(),
            &dataset.stats,
            &dataset.logs,
            ReportView::Macros,
            now(),
        );
        let md = &export.markdown;
        assert!(md.contains("## Macro Distribution"));
        assert!(md.contains("- **Carbs:** 42% (133g)"));
        assert!(md.contains("- **Protein:** 37% (118g)"));
        assert!(md.contains("- **Fats:** 21% (65g)"));
        assert!(!md.contains("## Weekly Trends"));
    }

    #[test]
    fn test_export_markdown_escapes_pipes() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        let logs = vec![LogEntry::new("1", "u", ts, "Rice | beans", 500, Macros::new(80, 20, 10))];
        let export = export_dashboard_markdown(
            &DayCalendar::utc(),
            &DashboardStats::default(),
            &logs,
            ReportView::None,
            now(),
        );
        assert_eq!(export.days, 1);
        assert!(export
            .markdown
            .contains("| 09:30 | Rice \\| beans | 500 kcal | 80g C / 20g P / 10g F |"));
        assert!(!export.markdown.contains("Report unavailable"));
    }

    #[test]
    fn test_export_markdown_empty() {
        let export = export_dashboard_markdown(
            &DayCalendar::utc(),
            &DashboardStats::default(),
            &[],
            ReportView::Weekly,
            now(),
        );
        assert_eq!(export.days, 0);
        assert!(export.markdown.contains("> Report unavailable: No day buckets to summarize"));
        assert!(export.markdown.contains("No meals logged."));
    }
}
