use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "timesheet-mcp")]
#[command(about = "Timesheet compliance checker and MCP server")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available projects
    Projects,

    /// List invalid log days for a month
    Check {
        /// Year to check (e.g. 2025)
        year: i32,
        /// Month to check (1-12)
        month: u32,
        /// Do not flag time logged on non-working days
        #[arg(long)]
        ignore_excess: bool,
    },

    /// Log time to a project for one or more dates
    Log {
        /// Project ID from `projects`
        project_id: i64,
        /// Hours to log per date (0.5 - 8.0)
        hours: f64,
        /// Dates to log, each YYYY-MM-DD
        #[arg(required = true)]
        dates: Vec<String>,
        /// Hour rate: 1 normal, 2 OT weekday, 3 OT weekend, 4 OT holiday
        #[arg(long, default_value_t = 1)]
        rate: u8,
        /// Activity: 1 Code, 2 Test
        #[arg(long, default_value_t = 1)]
        activity: u8,
        /// Optional comment
        #[arg(long)]
        comment: Option<String>,
    },

    /// Run as an MCP server over stdio
    Mcp,
}
