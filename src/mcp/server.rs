//! NutriTrack MCP Server Implementation
//!
//! Implements the MCP server with all dashboard tools.

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::dataset::{Dataset, DatasetSource};
use crate::models::{LogEntry, Macros, ReportView};
use crate::nutrition::DayCalendar;
use crate::tools::dashboard;
use crate::tools::status::StatusTracker;

/// NutriTrack MCP Service
#[derive(Clone)]
pub struct NutriTrackService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    calendar: Arc<DayCalendar>,
    dataset: Arc<Dataset>,
    /// Report currently selected on the dashboard
    report_view: Arc<std::sync::Mutex<ReportView>>,
    tool_router: ToolRouter<NutriTrackService>,
}

impl NutriTrackService {
    pub fn new(calendar: DayCalendar, dataset: Dataset, source: DatasetSource) -> Self {
        let tracker = StatusTracker::new(source, dataset.logs.len(), calendar.settings());
        Self {
            status_tracker: Arc::new(Mutex::new(tracker)),
            calendar: Arc::new(calendar),
            dataset: Arc::new(dataset),
            report_view: Arc::new(std::sync::Mutex::new(ReportView::None)),
            tool_router: Self::tool_router(),
        }
    }

    /// Logs passed with the call, or the startup dataset
    fn resolve_logs(&self, logs: Option<Vec<LogEntryParams>>) -> Result<Cow<'_, [LogEntry]>, McpError> {
        match logs {
            None => Ok(Cow::Borrowed(self.dataset.logs.as_slice())),
            Some(params) => {
                let entries = params
                    .into_iter()
                    .map(LogEntryParams::into_entry)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| McpError::invalid_params(e, None))?;
                Ok(Cow::Owned(entries))
            }
        }
    }

    fn current_view(&self) -> Result<ReportView, McpError> {
        self.report_view
            .lock()
            .map(|view| *view)
            .map_err(|_| McpError::internal_error("Report view lock poisoned", None))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Log Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MacrosParams {
    /// Carbohydrates in grams
    pub carbs: u64,
    /// Protein in grams
    pub protein: u64,
    /// Fats in grams
    pub fats: u64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogEntryParams {
    pub id: String,
    #[serde(alias = "userId")]
    pub user_id: String,
    /// RFC 3339 timestamp, e.g. "2024-01-01T12:30:00Z"
    pub timestamp: String,
    #[serde(alias = "foodName")]
    pub food_name: String,
    pub calories: u64,
    pub macros: MacrosParams,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default, alias = "audioUrl")]
    pub audio_url: Option<String>,
    #[serde(default, alias = "textContent")]
    pub text_content: Option<String>,
}

impl LogEntryParams {
    fn into_entry(self) -> Result<LogEntry, String> {
        let timestamp = DateTime::parse_from_rfc3339(self.timestamp.trim())
            .map_err(|e| format!("Invalid timestamp '{}' for entry {}: {}", self.timestamp, self.id, e))?
            .with_timezone(&Utc);

        Ok(LogEntry {
            id: self.id,
            user_id: self.user_id,
            timestamp,
            food_name: self.food_name,
            calories: self.calories,
            macros: Macros::new(self.macros.carbs, self.macros.protein, self.macros.fats),
            image_url: self.image_url,
            audio_url: self.audio_url,
            text_content: self.text_content,
        })
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogsParams {
    /// Log entries to aggregate (defaults to the loaded dataset)
    pub logs: Option<Vec<LogEntryParams>>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleReportParams {
    /// Report to toggle: weekly or macros
    pub report: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriTrackService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriTrack service including build info, calendar settings, dataset, and process information")]
    async fn nutritrack_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for reading the nutrition dashboard: how days are grouped, what each report means, and how rounding works.")]
    fn dashboard_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::DASHBOARD_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(DASHBOARD_INSTRUCTIONS)]))
    }

    #[tool(description = "Get platform statistics: total users, daily analyses, and active pro subscriptions")]
    fn get_dashboard_stats(&self) -> Result<CallToolResult, McpError> {
        to_json(&self.dataset.stats)
    }

    // --- Aggregation ---

    #[tool(description = "Group log entries by calendar day. Days are newest first with calorie and macro totals; meals keep their logged order.")]
    fn group_logs(&self, Parameters(p): Parameters<LogsParams>) -> Result<CallToolResult, McpError> {
        let logs = self.resolve_logs(p.logs)?;
        to_json(&dashboard::group_logs(&self.calendar, &logs))
    }

    #[tool(description = "Weekly trends: average daily calories, highest calorie day, and total meals. Fails when there are no log entries.")]
    fn weekly_summary(&self, Parameters(p): Parameters<LogsParams>) -> Result<CallToolResult, McpError> {
        let logs = self.resolve_logs(p.logs)?;
        let result = dashboard::weekly_summary(&self.calendar, &logs)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Macro distribution: carbs, protein, and fats percentages of total macro grams, plus gram totals. Percentages are rounded independently and may sum to 99 or 101.")]
    fn macro_distribution(&self, Parameters(p): Parameters<LogsParams>) -> Result<CallToolResult, McpError> {
        let logs = self.resolve_logs(p.logs)?;
        let result = dashboard::macro_distribution(&self.calendar, &logs)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Dashboard ---

    #[tool(description = "Toggle a dashboard report (weekly or macros). Selecting the active report hides it; selecting the other one switches to it.")]
    fn toggle_report(&self, Parameters(p): Parameters<ToggleReportParams>) -> Result<CallToolResult, McpError> {
        let mut view = self
            .report_view
            .lock()
            .map_err(|_| McpError::internal_error("Report view lock poisoned", None))?;
        let result = dashboard::toggle_report(&mut view, &p.report)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get which dashboard report is currently selected (none, weekly, or macros)")]
    fn get_report_view(&self) -> Result<CallToolResult, McpError> {
        let view = self.current_view()?;
        to_json(&serde_json::json!({ "active_report": view }))
    }

    #[tool(description = "Get the full dashboard: stats, the selected report, and every day with its meals")]
    fn get_dashboard(&self, Parameters(p): Parameters<LogsParams>) -> Result<CallToolResult, McpError> {
        let view = self.current_view()?;
        let logs = self.resolve_logs(p.logs)?;
        to_json(&dashboard::get_dashboard(&self.calendar, &self.dataset.stats, &logs, view))
    }

    #[tool(description = "Export the dashboard (stats, selected report, daily meal tables) as a markdown document")]
    fn export_dashboard_markdown(&self, Parameters(p): Parameters<LogsParams>) -> Result<CallToolResult, McpError> {
        let view = self.current_view()?;
        let logs = self.resolve_logs(p.logs)?;
        let result = dashboard::export_dashboard_markdown(
            &self.calendar,
            &self.dataset.stats,
            &logs,
            view,
            Utc::now(),
        );
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriTrackService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutritrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriTrack Dashboard".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriTrack - nutrition log dashboard. \
                 Call dashboard_instructions first. \
                 Dashboard: get_dashboard, export_dashboard_markdown, get_dashboard_stats. \
                 Reports: weekly_summary, macro_distribution, toggle_report, get_report_view. \
                 Days: group_logs. \
                 Log tools take an optional logs array; without it the loaded dataset is used."
                    .into(),
            ),
        }
    }
}
