//! Chart generation for the plot page.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! rendered into an HTML container by a small piece of JavaScript.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::Line,
};

use crate::{plot::aggregation::aggregate_by_day, transaction::Transaction};

/// Builds a line chart of daily income and expense totals over `transactions`.
pub(super) fn income_expense_chart(transactions: &[Transaction]) -> Chart {
    let totals = aggregate_by_day(transactions);

    Chart::new()
        .title(Title::new().text("Income and Expenses Over Time"))
        .tooltip(currency_tooltip())
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(totals.labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Income").data(totals.income))
        .series(Line::new().name("Expense").data(totals.expense))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
