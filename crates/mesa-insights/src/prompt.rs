//! # Insight Prompt Rendering
//!
//! Pure construction of the chat messages handed to the external AI
//! client. Each builder mirrors one dashboard insight card:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  aggregates (mesa-core) ──► prompt builder ──► InsightPrompt            │
//! │                                                     │                   │
//! │                                 external AI client ─┘ (out of scope)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Builders refuse empty inputs with [`InsightError::NoData`]; the
//! dashboard never spends an API call summarizing nothing.

use std::collections::{BTreeMap, BTreeSet};

use mesa_core::metrics::{ChannelMix, HourlyActivity, TransactionSummary};
use mesa_core::movement::MenuItemMovement;

use crate::error::{InsightError, InsightResult};
use crate::format::peso;

// =============================================================================
// Prompt Shape
// =============================================================================

/// The two chat messages a completed prompt consists of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightPrompt {
    /// System message establishing the analyst persona.
    pub system: String,
    /// User message carrying the rendered data.
    pub user: String,
}

/// Persona for data-shaped insights (movement, guests, channels).
const ANALYST_SYSTEM: &str = "You are a data analyst expert at creating clear, insightful \
     summaries of database query results. Always provide factual, accurate information based \
     on the data provided.";

/// Persona for the conversational sales comparison.
const SALES_SYSTEM: &str = "You are a helpful sales analyst.";

/// Response-format and currency guidelines shared by the data-shaped
/// prompts.
const GUIDELINES: &str = "\
Please create a comprehensive summary of these query results. Focus on the key findings, patterns, and notable information.

Please provide your response in the following format:

Summary

[Your plain-text summary]

Analytical Insights

[Provide 2-3 analytical insights or recommendations based on the data in summary]

Guidelines:
- Be specific with numbers and dates when available
- Highlight the most important findings first
- Use clear, non-technical language
- If data shows trends, mention them clearly
- Keep the summary concise but informative
- IMPORTANT: All monetary values should be formatted in Philippine Peso (PHP). Use ₱ symbol or 'PHP' prefix (e.g., ₱1,234.56 or PHP 1,234.56)
- Format large numbers with commas for readability (e.g., ₱1,234,567.89)
- Always include currency symbol/prefix when mentioning monetary amounts, revenue, sales, or financial figures";

fn data_prompt(data: &str) -> String {
    format!(
        "As business owner, I want you to generate a summary and insights about the question and the json result:\n\n\
         Here's the data:\n{data}\n\n{GUIDELINES}"
    )
}

/// Phrase anchoring the sales comparison to the time of day.
fn time_of_day_context(hour: u32) -> &'static str {
    if hour < 11 {
        "It is currently the morning."
    } else if hour < 15 {
        "It is currently the early afternoon."
    } else if hour < 18 {
        "It is currently the late afternoon."
    } else {
        "It is currently the evening."
    }
}

fn twelve_hour_label(hour: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    format!("{hour12} {period}")
}

// =============================================================================
// Prompt Builders
// =============================================================================

/// Renders the sales comparison prompt: today vs. the same day last week,
/// up to the current point in service.
pub fn sales_insight_prompt(
    current_hour: u32,
    today: &TransactionSummary,
    last_week: &TransactionSummary,
) -> InsightResult<InsightPrompt> {
    if today.total_orders == 0 && last_week.total_orders == 0 {
        return Err(InsightError::NoData);
    }

    let user = format!(
        "{context}\n\
         Compare today's and last week's sales performance up to this time of day.\n\n\
         Today's Summary:\n\
         - Total Revenue: {today_revenue}\n\
         - Total Orders: {today_orders}\n\
         - Average Order Value: {today_avg}\n\n\
         Same Day Last Week:\n\
         - Total Revenue: {last_week_revenue}\n\
         - Total Orders: {last_week_orders}\n\
         - Average Order Value: {last_week_avg}\n\n\
         Provide a short, insightful analysis. Highlight any significant differences or trends.",
        context = time_of_day_context(current_hour),
        today_revenue = peso(today.total_revenue_centavos),
        today_orders = today.total_orders,
        today_avg = peso(today.avg_order_value_centavos),
        last_week_revenue = peso(last_week.total_revenue_centavos),
        last_week_orders = last_week.total_orders,
        last_week_avg = peso(last_week.avg_order_value_centavos),
    );

    Ok(InsightPrompt {
        system: SALES_SYSTEM.to_string(),
        user,
    })
}

/// Renders the hour-by-hour guest comparison prompt from two hourly
/// summaries (today and the same day last week).
pub fn guest_insight_prompt(
    today: &BTreeMap<u32, HourlyActivity>,
    last_week: &BTreeMap<u32, HourlyActivity>,
) -> InsightResult<InsightPrompt> {
    if today.is_empty() && last_week.is_empty() {
        return Err(InsightError::NoData);
    }

    let hours: BTreeSet<u32> = today.keys().chain(last_week.keys()).copied().collect();

    let comparison = hours
        .into_iter()
        .map(|hour| {
            let today_slot = today.get(&hour).copied().unwrap_or_default();
            let last_week_slot = last_week.get(&hour).copied().unwrap_or_default();

            format!(
                "🕒 {label}\n\
                 {today_line}\n\
                 {last_week_line}",
                label = twelve_hour_label(hour),
                today_line = hourly_line("Today", &today_slot),
                last_week_line = hourly_line("Last Week", &last_week_slot),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(InsightPrompt {
        system: ANALYST_SYSTEM.to_string(),
        user: data_prompt(&comparison),
    })
}

fn hourly_line(period: &str, slot: &HourlyActivity) -> String {
    let avg_centavos = if slot.orders > 0 {
        slot.revenue_centavos / slot.orders as i64
    } else {
        0
    };
    format!(
        "  - {period}: {revenue} from {orders} orders with an average order value of {avg} and {guests} customers",
        revenue = peso(slot.revenue_centavos),
        orders = slot.orders,
        avg = peso(avg_centavos),
        guests = slot.guests,
    )
}

/// Renders the product-movement prompt from computed movement records.
pub fn movement_insight_prompt(movements: &[MenuItemMovement]) -> InsightResult<InsightPrompt> {
    if movements.is_empty() {
        return Err(InsightError::NoData);
    }

    let data = movements
        .iter()
        .map(|m| {
            format!(
                "- Menu Item: {name}\n\
                 - Units Sold: {units}\n\
                 - Total Sales: {sales}\n\
                 - Percentage of Sales: {share:.2}%",
                name = m.name,
                units = m.unit_sold,
                sales = peso(m.total_sales_centavos),
                share = m.percentage_of_sales,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(InsightPrompt {
        system: ANALYST_SYSTEM.to_string(),
        user: data_prompt(&data),
    })
}

/// Renders the ordering-channel mix prompt.
pub fn channel_insight_prompt(mix: &ChannelMix) -> InsightResult<InsightPrompt> {
    if mix.transaction_count == 0 {
        return Err(InsightError::NoData);
    }

    let data = format!(
        "\n- Self-ordering: {kiosk_count} transactions ({kiosk_share:.2}%) with a total of {kiosk_total}\n\
         - Counter: {counter_count} transactions ({counter_share:.2}%) with a total of {counter_total}\n\
         - Table QR: {diner_count} transactions ({diner_share:.2}%) with a total of {diner_total}",
        kiosk_count = mix.kiosk.count,
        kiosk_share = mix.kiosk.share_of_revenue,
        kiosk_total = peso(mix.kiosk.revenue_centavos),
        counter_count = mix.counter.count,
        counter_share = mix.counter.share_of_revenue,
        counter_total = peso(mix.counter.revenue_centavos),
        diner_count = mix.diner.count,
        diner_share = mix.diner.share_of_revenue,
        diner_total = peso(mix.diner.revenue_centavos),
    );

    Ok(InsightPrompt {
        system: ANALYST_SYSTEM.to_string(),
        user: data_prompt(&data),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
