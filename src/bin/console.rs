use std::{
    io::{self, Write},
    process::exit,
};

use clap::Parser;

use centsible::{
    Error,
    currency::format_currency,
    date::{format_date, parse_date},
    stores::{CsvTransactionStore, MemoryTransactionStore, TransactionQuery, TransactionStore},
    summary::summarize,
    transaction::{Category, Transaction},
};

/// An interactive menu for managing transactions from the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the CSV file that transactions are stored in.
    ///
    /// The file is created with a header row if it does not exist. When this
    /// option is omitted, transactions are kept in memory and lost on exit.
    #[arg(long)]
    csv_path: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut store: Box<dyn TransactionStore> = match &args.csv_path {
        Some(path) => match CsvTransactionStore::open(path) {
            Ok(store) => Box::new(store),
            Err(error) => {
                print_error(format!("Could not open {path}: {error}"));
                exit(1);
            }
        },
        None => Box::new(MemoryTransactionStore::new()),
    };

    loop {
        println!();
        println!("1. Add Transaction");
        println!("2. View Transactions");
        println!("3. Exit");
        println!();

        let Some(choice) = prompt("Enter your choice (1-3): ") else {
            break;
        };

        match choice.as_str() {
            "1" => add_transaction(store.as_mut()),
            "2" => view_transactions(store.as_ref()),
            "3" => {
                println!("Thank you for using Finance Manager!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn add_transaction(store: &mut dyn TransactionStore) {
    let Some(date_text) = prompt("Enter date (DD-MM-YYYY): ") else {
        return;
    };
    let date = match parse_date("date", &date_text) {
        Ok(date) => date,
        Err(error) => {
            print_error(error);
            return;
        }
    };

    let Some(amount_text) = prompt("Enter amount: ") else {
        return;
    };
    let amount = match amount_text.parse::<f64>() {
        Ok(amount) => amount,
        Err(_) => {
            print_error(Error::InvalidAmount(amount_text));
            return;
        }
    };

    let Some(category_text) = prompt("Enter category (Income/Expense): ") else {
        return;
    };
    let category = Category::from(category_text.as_str());
    if !category.is_recognised() {
        println!("Note: the category '{category}' will be left out of totals.");
    }

    let Some(description) = prompt("Enter description: ") else {
        return;
    };

    let transaction = Transaction::new(date, amount, category).description(&description);

    match store.append(transaction) {
        Ok(_) => println!("Transaction added successfully!"),
        Err(error) => print_error(error),
    }
}

fn view_transactions(store: &dyn TransactionStore) {
    let transactions = match store.query(TransactionQuery::default()) {
        Ok(transactions) => transactions,
        Err(error) => {
            print_error(error);
            return;
        }
    };

    if transactions.is_empty() {
        println!("No transactions found.");
        return;
    }

    println!("All Transactions:");
    print!("{}", render_table(&transactions));

    let summary = summarize(&transactions);
    println!();
    println!("Total Income: {}", format_currency(summary.total_income));
    println!("Total Expense: {}", format_currency(summary.total_expense));
    println!("Net Balance: {}", format_currency(summary.net_balance));
}

/// Displays `message` and reads a line from standard input.
///
/// Returns `None` once standard input reaches end of file.
fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().expect("Could not flush stdout.");

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_owned()),
        Err(error) => {
            print_error(format!("Could not read from stdin: {error}"));
            None
        }
    }
}

const TABLE_HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Renders transactions as a text table with a header row, each column padded
/// to the width of its longest cell.
fn render_table(transactions: &[Transaction]) -> String {
    let rows: Vec<[String; 4]> = transactions
        .iter()
        .map(|transaction| {
            [
                format_date(transaction.date),
                format!("{:.2}", transaction.amount),
                transaction.category.to_string(),
                transaction.description.clone(),
            ]
        })
        .collect();

    let mut widths = TABLE_HEADER.map(column_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(column_width(cell));
        }
    }

    let mut lines = vec![render_row(&TABLE_HEADER.map(String::from), &widths)];
    lines.extend(rows.iter().map(|row| render_row(row, &widths)));

    lines.join("\n") + "\n"
}

fn render_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();

    padded.join("  ").trim_end().to_owned()
}

/// The width of a cell in characters. `str::len` is a byte count, which
/// over-counts any multi-byte character and misaligns the padding.
fn column_width(text: &str) -> usize {
    text.chars().count()
}

fn print_error(error: impl ToString) {
    eprintln!(
        "\x1b[31;1m{}\x1b[0m",
        capitalise_first_char(&error.to_string())
    )
}

/// From https://crates.io/crates/capitalize
fn capitalise_first_char(string: &str) -> String {
    let mut chars = string.chars();
    let Some(first) = chars.next() else {
        return String::with_capacity(0);
    };
    first.to_uppercase().chain(chars).collect()
}
