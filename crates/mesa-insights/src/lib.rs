//! # mesa-insights: Dashboard Reports and AI Insight Prompts
//!
//! Level-1 crate sitting directly on [`mesa_core`]. Two jobs:
//!
//! 1. **Reports**: assemble the engine's outputs into the value objects the
//!    dashboard screens render ([`report::DashboardReport`]).
//! 2. **Prompts**: render aggregates into the chat messages handed to the
//!    external AI chat-completion client ([`prompt`]).
//!
//! Both are pure composition: the data layer fetches, the AI client calls
//! out, and this crate only transforms. That keeps it as testable as the
//! core while giving the orchestration a single seam to instrument: report
//! assembly logs through `tracing`.
//!
//! ## Example
//! ```rust
//! use mesa_insights::prompt::movement_insight_prompt;
//! use mesa_core::movement::MenuItemMovement;
//!
//! let movements = vec![MenuItemMovement {
//!     menu_item_id: "sisig".into(),
//!     name: "Sisig".into(),
//!     unit_sold: 12,
//!     total_sales_centavos: 150_000,
//!     percentage_of_sales: 100.0,
//! }];
//!
//! let prompt = movement_insight_prompt(&movements).unwrap();
//! assert!(prompt.user.contains("Sisig"));
//! ```

pub mod error;
pub mod format;
pub mod prompt;
pub mod report;

pub use error::{InsightError, InsightResult};
pub use prompt::InsightPrompt;
pub use report::{build_dashboard_report, DashboardReport};
