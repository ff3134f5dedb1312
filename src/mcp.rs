use crate::api::InsiderClient;
use crate::compliance::ComplianceChecker;
use crate::config::Config;
use crate::error::TimesheetError;
use crate::report;
use crate::sources::submit_all;
use crate::validate::validate_log_request;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, schemars, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Timesheet MCP server
#[derive(Clone)]
pub struct TimesheetMcp {
    client: Arc<InsiderClient>,
    tool_router: ToolRouter<Self>,
}

// Input types for tools
#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ListInvalidDaysInput {
    /// Year to check (e.g. 2025)
    pub year: i32,
    /// Month to check (1-12)
    pub month: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct LogTimeInput {
    /// Project ID from list_projects
    pub project_id: i64,
    /// Number of hours to log per date (0.5 - 8.0)
    pub hours: f64,
    /// Dates to log time for, each in YYYY-MM-DD format
    pub log_dates: Vec<String>,
    /// Hour rate: 1 normal, 2 OT weekday, 3 OT weekend, 4 OT holiday
    #[serde(default = "default_hour_rate")]
    pub hour_rate: u8,
    /// Activity type: 1 Code, 2 Test
    #[serde(default = "default_activity")]
    pub activity: u8,
    /// Optional comment for the time entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn default_hour_rate() -> u8 {
    1
}

fn default_activity() -> u8 {
    1
}

// Response type
#[derive(Debug, Serialize)]
pub struct McpResponse<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> McpResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "ok",
            data: Some(data),
            error_code: None,
            message: None,
        }
    }

    pub fn error(error_code: &str, message: &str) -> Self {
        Self {
            status: "error",
            data: None,
            error_code: Some(error_code.to_string()),
            message: Some(message.to_string()),
        }
    }
}

fn to_json<T: Serialize>(response: McpResponse<T>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(&response)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn error_to_response(e: TimesheetError) -> McpResponse<serde_json::Value> {
    McpResponse::error(e.class().as_str(), &e.to_string())
}

#[tool_router]
impl TimesheetMcp {
    pub fn new(config: Config) -> Result<Self, TimesheetError> {
        let client = InsiderClient::new(config)?;
        Ok(Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        })
    }

    #[tool(
        description = "Get a list of all available projects for the user, in markdown format."
    )]
    async fn list_projects(&self) -> Result<CallToolResult, McpError> {
        match self.client.list_projects().await {
            Ok(projects) => {
                let markdown = report::render_projects(&projects);
                to_json(McpResponse::success(serde_json::json!({
                    "projects": projects,
                    "markdown": markdown,
                })))
            }
            Err(e) => to_json(error_to_response(e)),
        }
    }

    #[tool(
        description = "Log time to a specific project for one or more dates. The whole request is validated upfront; nothing is submitted unless every field and every date passes."
    )]
    async fn log_time_project(
        &self,
        params: Parameters<LogTimeInput>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;

        let request = match validate_log_request(
            p.project_id,
            p.hours,
            &p.log_dates,
            p.hour_rate,
            p.activity,
            p.comment.as_deref(),
        ) {
            Ok(request) => request,
            Err(e) => return to_json(error_to_response(e)),
        };

        match submit_all(self.client.as_ref(), &request).await {
            Ok(outcomes) => to_json(McpResponse::success(serde_json::json!({
                "message": "Time logged successfully",
                "logged": outcomes,
            }))),
            Err(e) => to_json(error_to_response(e)),
        }
    }

    #[tool(
        description = "List all invalid log days (logged hours differing from the expected 8h working-day norm) for a specific month, with a markdown report."
    )]
    async fn list_invalid_days(
        &self,
        params: Parameters<ListInvalidDaysInput>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;

        let checker = ComplianceChecker::new(self.client.as_ref(), self.client.as_ref());
        match checker.check_month(p.year, p.month).await {
            Ok(result) => {
                let text = report::render_month_report(&result);
                to_json(McpResponse::success(serde_json::json!({
                    "month": result.month_label(),
                    "totalInvalidDays": result.invalid_days.len(),
                    "invalidDays": result.invalid_days,
                    "report": text,
                })))
            }
            Err(e) => to_json(error_to_response(e)),
        }
    }
}

#[tool_handler]
impl ServerHandler for TimesheetMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Timesheet tools for the company time-tracking API. \
                 Use list_projects to find project IDs, log_time_project to submit hours \
                 (0.5-8.0h per date), and list_invalid_days to find days in a month whose \
                 logged hours do not match the expected 8h working-day norm."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_mcp_server(config: Config) -> anyhow::Result<()> {
    let mcp = TimesheetMcp::new(config).map_err(|e| {
        eprintln!("Failed to initialize MCP server: {e}");
        e
    })?;

    let service = mcp.serve(stdio()).await.inspect_err(|e| {
        eprintln!("Error starting MCP server: {e}");
    })?;

    service.waiting().await?;
    Ok(())
}
