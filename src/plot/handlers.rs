//! The route handler for the plot page.

use axum::extract::State;
use charming::Chart;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{
    AppState, Error,
    currency::format_currency,
    extractors::AppQuery,
    plot::charts::income_expense_chart,
    summary::{Summary, summarize},
    transaction::{DateRangeParams, Transaction},
};

/// The HTML element ID of the chart container.
const CHART_CONTAINER_ID: &str = "income-expense-chart";

const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// A route handler for the page charting income and expenses over time.
///
/// The parameters work the same as for the transaction listing: both
/// `start_date` and `end_date` are required, the range is inclusive at both
/// ends, and a start date after the end date plots an empty chart.
pub async fn get_plot_page(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DateRangeParams>,
) -> Result<Markup, Error> {
    let query = params.into_query()?;
    let transactions = state.lock_store()?.query(query)?;

    Ok(plot_page(&transactions))
}

fn plot_page(transactions: &[Transaction]) -> Markup {
    let chart = income_expense_chart(transactions);
    let summary = summarize(transactions);

    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Income and Expenses - Centsible" }

                script src=(ECHARTS_SCRIPT_URL) {}
                script { (PreEscaped(chart_script(&chart))) }

                style
                {
                    r#"
                    body {
                        font-family: sans-serif;
                        max-width: 960px;
                        margin: 0 auto;
                        padding: 1rem;
                    }

                    table {
                        border-collapse: collapse;
                        margin-top: 1rem;
                    }

                    th, td {
                        border: 1px solid #ccc;
                        padding: 0.4rem 0.8rem;
                        text-align: left;
                    }
                    "#
                }
            }

            body
            {
                h1 { "Income and Expenses Over Time" }

                div id=(CHART_CONTAINER_ID) style="width: 100%; min-height: 480px;" {}

                (totals_table(summary))
            }
        }
    }
}

/// Generates the JavaScript that initializes the ECharts instance.
fn chart_script(chart: &Chart) -> String {
    format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
    const chartDom = document.getElementById("{}");
    const chart = echarts.init(chartDom);
    const option = {};
    chart.setOption(option);

    window.addEventListener('resize', chart.resize);
}});"#,
        CHART_CONTAINER_ID, chart
    )
}

fn totals_table(summary: Summary) -> Markup {
    html! {
        table
        {
            caption { "Totals for the plotted period" }
            tbody
            {
                tr { th { "Total Income" } td { (format_currency(summary.total_income)) } }
                tr { th { "Total Expense" } td { (format_currency(summary.total_expense)) } }
                tr { th { "Net Balance" } td { (format_currency(summary.net_balance)) } }
            }
        }
    }
}
