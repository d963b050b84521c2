//! A transaction store backed by a CSV file on disk.

use std::{
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::PathBuf,
};

use csv::{Reader, StringRecord, Writer};
use time::Date;

use crate::{
    Error,
    date::{DATE_FORMAT, format_date},
    stores::{TransactionQuery, TransactionStore},
    transaction::{Category, Transaction},
};

/// The header row every transaction file starts with.
pub const CSV_HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

const DATE_COLUMN: usize = 0;
const AMOUNT_COLUMN: usize = 1;
const CATEGORY_COLUMN: usize = 2;
const DESCRIPTION_COLUMN: usize = 3;

/// A [TransactionStore] that keeps transactions in a CSV file on disk.
///
/// The file holds a single header row followed by one row per transaction in
/// the order they were appended. Each operation opens the file afresh and
/// re-checks the header, so a file swapped out or edited by another tool is
/// noticed rather than silently misread.
#[derive(Debug, Clone)]
pub struct CsvTransactionStore {
    path: PathBuf,
}

impl CsvTransactionStore {
    /// Open the transaction file at `path`, creating it with a header row if
    /// it does not exist. An existing but empty file also gets the header.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::SchemaMismatch] if the file exists but starts with a
    ///   different header,
    /// - or [Error::Io] if the file cannot be read or created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let store = Self { path: path.into() };

        match std::fs::metadata(&store.path) {
            Ok(metadata) if metadata.len() > 0 => store.check_schema()?,
            _ => store.write_header()?,
        }

        Ok(store)
    }

    fn write_header(&self) -> Result<(), Error> {
        let file = File::create(&self.path)?;
        let mut writer = Writer::from_writer(file);
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;

        Ok(())
    }

    fn check_schema(&self) -> Result<(), Error> {
        let mut reader = Reader::from_path(&self.path)?;
        let headers = reader.headers()?;

        if headers.iter().ne(CSV_HEADER) {
            let found = headers.iter().collect::<Vec<_>>().join(",");
            return Err(Error::SchemaMismatch(found));
        }

        Ok(())
    }
}

impl TransactionStore for CsvTransactionStore {
    fn append(&mut self, transaction: Transaction) -> Result<Transaction, Error> {
        self.check_schema()?;

        let mut file = OpenOptions::new().read(true).append(true).open(&self.path)?;
        ensure_trailing_newline(&mut file)?;

        let mut writer = Writer::from_writer(file);
        writer.write_record([
            format_date(transaction.date),
            transaction.amount.to_string(),
            transaction.category.to_string(),
            transaction.description.clone(),
        ])?;
        writer.flush()?;

        Ok(transaction)
    }

    fn query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        self.check_schema()?;

        let mut reader = Reader::from_path(&self.path)?;
        let mut transactions = Vec::new();

        for result in reader.records() {
            let record = result?;
            let transaction = parse_record(&record)?;

            let in_range = match &query.date_range {
                Some(date_range) => date_range.contains(&transaction.date),
                None => true,
            };

            if in_range {
                transactions.push(transaction);
            }
        }

        Ok(transactions)
    }
}

/// Write a newline if the file does not already end with one. A record
/// appended to an unterminated line would corrupt both that line and the
/// record.
fn ensure_trailing_newline(file: &mut File) -> Result<(), Error> {
    if file.metadata()?.len() == 0 {
        return Ok(());
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last_byte = [0; 1];
    file.read_exact(&mut last_byte)?;

    if last_byte != [b'\n'] {
        file.write_all(b"\n")?;
    }

    Ok(())
}

/// Map a CSV record to a [Transaction].
fn parse_record(record: &StringRecord) -> Result<Transaction, Error> {
    let line_number = record.position().map_or(0, |position| position.line());

    let date_text = get_column(record, DATE_COLUMN, line_number)?;
    let date = Date::parse(date_text, &DATE_FORMAT).map_err(|error| {
        Error::InvalidRow(format!(
            "Could not parse '{date_text}' as date on line {line_number}: {error}"
        ))
    })?;

    let amount_text = get_column(record, AMOUNT_COLUMN, line_number)?;
    let amount: f64 = amount_text.parse().map_err(|error| {
        Error::InvalidRow(format!(
            "Could not parse '{amount_text}' as amount on line {line_number}: {error}"
        ))
    })?;

    let category = Category::from(get_column(record, CATEGORY_COLUMN, line_number)?);
    let description = record.get(DESCRIPTION_COLUMN).unwrap_or_default();

    Ok(Transaction::new(date, amount, category).description(description))
}

fn get_column(record: &StringRecord, column: usize, line_number: u64) -> Result<&str, Error> {
    record.get(column).ok_or_else(|| {
        Error::InvalidRow(format!(
            "Missing column {column} on line {line_number}"
        ))
    })
}

#[cfg(test)]
mod csv_transaction_store_tests {
    use std::{fs::OpenOptions, io::Write};

    use tempfile::TempDir;
    use time::macros::date;

    use crate::{
        Error,
        stores::{CsvTransactionStore, TransactionQuery, TransactionStore},
        transaction::{Category, Transaction},
    };

    const FILE_NAME: &str = "transactions.csv";

    fn get_test_store() -> (CsvTransactionStore, TempDir) {
        let temp_dir = TempDir::new().expect("Could not create temp directory.");
        let store = CsvTransactionStore::open(temp_dir.path().join(FILE_NAME))
            .expect("Could not open transaction store.");

        (store, temp_dir)
    }

    #[test]
    fn open_creates_file_with_header() {
        let (_store, temp_dir) = get_test_store();

        let contents = std::fs::read_to_string(temp_dir.path().join(FILE_NAME))
            .expect("Could not read transaction file.");

        assert_eq!(contents, "Date,Amount,Category,Description\n");
    }

    #[test]
    fn open_writes_header_into_empty_file() {
        let temp_dir = TempDir::new().expect("Could not create temp directory.");
        let path = temp_dir.path().join(FILE_NAME);
        std::fs::write(&path, "").expect("Could not create empty file.");

        CsvTransactionStore::open(&path).expect("Could not open transaction store.");

        let contents = std::fs::read_to_string(&path).expect("Could not read transaction file.");
        assert_eq!(contents, "Date,Amount,Category,Description\n");
    }

    #[test]
    fn open_rejects_foreign_header() {
        let temp_dir = TempDir::new().expect("Could not create temp directory.");
        let path = temp_dir.path().join(FILE_NAME);
        std::fs::write(&path, "Datum,Betrag,Kategorie,Beschreibung\n")
            .expect("Could not write file.");

        let result = CsvTransactionStore::open(&path);

        assert_eq!(
            result.err(),
            Some(Error::SchemaMismatch(
                "Datum,Betrag,Kategorie,Beschreibung".to_owned()
            ))
        );
    }

    #[test]
    fn append_then_query_round_trips() {
        let (mut store, _temp_dir) = get_test_store();
        let transaction = Transaction::new(date!(2024 - 01 - 05), 1000.0, Category::Income)
            .description("Salary, January \"net\"");

        store
            .append(transaction.clone())
            .expect("Could not append transaction.");
        let transactions = store
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");

        assert_eq!(transactions, vec![transaction]);
    }

    #[test]
    fn append_survives_reopening() {
        let temp_dir = TempDir::new().expect("Could not create temp directory.");
        let path = temp_dir.path().join(FILE_NAME);
        let transaction = Transaction::new(date!(2024 - 01 - 05), 1000.0, Category::Income)
            .description("Salary");

        let mut store = CsvTransactionStore::open(&path).expect("Could not open store.");
        store
            .append(transaction.clone())
            .expect("Could not append transaction.");
        drop(store);

        let store = CsvTransactionStore::open(&path).expect("Could not reopen store.");
        let transactions = store
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");

        assert_eq!(transactions, vec![transaction]);

        let contents = std::fs::read_to_string(&path).expect("Could not read transaction file.");
        assert_eq!(
            contents.matches("Date,Amount,Category,Description").count(),
            1,
            "reopening must not write a second header"
        );
    }

    #[test]
    fn append_starts_a_new_line_when_the_final_newline_is_missing() {
        let temp_dir = TempDir::new().expect("Could not create temp directory.");
        let path = temp_dir.path().join(FILE_NAME);
        std::fs::write(&path, "Date,Amount,Category,Description").expect("Could not write file.");

        let mut store = CsvTransactionStore::open(&path).expect("Could not open store.");
        let transaction =
            Transaction::new(date!(2024 - 01 - 05), 1000.0, Category::Income).description("Salary");
        store
            .append(transaction.clone())
            .expect("Could not append transaction.");

        let contents = std::fs::read_to_string(&path).expect("Could not read transaction file.");
        assert_eq!(
            contents,
            "Date,Amount,Category,Description\n05-01-2024,1000,Income,Salary\n"
        );

        let transactions = store
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");
        assert_eq!(transactions, vec![transaction]);
    }

    #[test]
    fn query_includes_both_endpoints_of_date_range() {
        let (mut store, _temp_dir) = get_test_store();
        populate_january(&mut store);

        let transactions = store
            .query(TransactionQuery {
                date_range: Some(date!(2024 - 01 - 05)..=date!(2024 - 01 - 15)),
            })
            .expect("Could not query transactions.");

        let dates: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.date)
            .collect();
        assert_eq!(dates, vec![date!(2024 - 01 - 05), date!(2024 - 01 - 15)]);
    }

    #[test]
    fn query_excludes_dates_outside_range() {
        let (mut store, _temp_dir) = get_test_store();
        populate_january(&mut store);

        let transactions = store
            .query(TransactionQuery {
                date_range: Some(date!(2024 - 01 - 06)..=date!(2024 - 01 - 14)),
            })
            .expect("Could not query transactions.");

        assert!(
            transactions.is_empty(),
            "expected no transactions, got {transactions:?}"
        );
    }

    #[test]
    fn query_with_inverted_range_matches_nothing() {
        let (mut store, _temp_dir) = get_test_store();
        populate_january(&mut store);

        let transactions = store
            .query(TransactionQuery {
                date_range: Some(date!(2024 - 01 - 20)..=date!(2024 - 01 - 05)),
            })
            .expect("Could not query transactions.");

        assert!(
            transactions.is_empty(),
            "expected no transactions, got {transactions:?}"
        );
    }

    #[test]
    fn query_preserves_append_order() {
        let (mut store, _temp_dir) = get_test_store();
        let dates = [
            date!(2024 - 01 - 15),
            date!(2024 - 01 - 05),
            date!(2024 - 01 - 20),
        ];
        for date in dates {
            store
                .append(Transaction::new(date, 1.0, Category::Expense))
                .expect("Could not append transaction.");
        }

        let transactions = store
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");

        let got_dates: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.date)
            .collect();
        assert_eq!(got_dates, dates.to_vec());
    }

    #[test]
    fn query_on_new_store_returns_nothing() {
        let (store, _temp_dir) = get_test_store();

        let transactions = store
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");

        assert!(transactions.is_empty());
    }

    #[test]
    fn unknown_categories_round_trip_verbatim() {
        let (mut store, _temp_dir) = get_test_store();
        let transaction = Transaction::new(
            date!(2024 - 02 - 01),
            42.0,
            Category::Other("Groceries".to_owned()),
        );

        store
            .append(transaction.clone())
            .expect("Could not append transaction.");
        let transactions = store
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");

        assert_eq!(transactions, vec![transaction]);
    }

    #[test]
    fn query_reports_malformed_date_with_line_number() {
        let (mut store, temp_dir) = get_test_store();
        store
            .append(Transaction::new(date!(2024 - 01 - 05), 1000.0, Category::Income))
            .expect("Could not append transaction.");

        let mut file = OpenOptions::new()
            .append(true)
            .open(temp_dir.path().join(FILE_NAME))
            .expect("Could not open transaction file.");
        writeln!(file, "2024-01-05,12.0,Income,sneaky ISO date").expect("Could not write row.");

        let error = store
            .query(TransactionQuery::default())
            .expect_err("expected a malformed row error");

        match error {
            Error::InvalidRow(message) => {
                assert!(
                    message.contains("2024-01-05") && message.contains("line 3"),
                    "message should echo the bad value and the line, got: {message}"
                );
            }
            other => panic!("want Error::InvalidRow, got {other:?}"),
        }
    }

    #[test]
    fn query_reports_malformed_amount() {
        let (store, temp_dir) = get_test_store();

        let mut file = OpenOptions::new()
            .append(true)
            .open(temp_dir.path().join(FILE_NAME))
            .expect("Could not open transaction file.");
        writeln!(file, "05-01-2024,lots,Income,payday").expect("Could not write row.");

        let error = store
            .query(TransactionQuery::default())
            .expect_err("expected a malformed row error");

        match error {
            Error::InvalidRow(message) => {
                assert!(
                    message.contains("lots"),
                    "message should echo the bad value, got: {message}"
                );
            }
            other => panic!("want Error::InvalidRow, got {other:?}"),
        }
    }

    #[test]
    fn operations_notice_header_tampered_after_open() {
        let (mut store, temp_dir) = get_test_store();
        std::fs::write(temp_dir.path().join(FILE_NAME), "Date,Amount\n")
            .expect("Could not overwrite transaction file.");

        let query_result = store.query(TransactionQuery::default());
        let append_result =
            store.append(Transaction::new(date!(2024 - 01 - 05), 1.0, Category::Income));

        assert!(matches!(query_result, Err(Error::SchemaMismatch(_))));
        assert!(matches!(append_result, Err(Error::SchemaMismatch(_))));
    }

    fn populate_january(store: &mut CsvTransactionStore) {
        let transactions = [
            Transaction::new(date!(2024 - 01 - 05), 1000.0, Category::Income).description("Salary"),
            Transaction::new(date!(2024 - 01 - 15), 250.0, Category::Expense).description("Rent"),
            Transaction::new(date!(2024 - 01 - 20), 50.0, Category::Expense)
                .description("Groceries"),
        ];

        for transaction in transactions {
            store
                .append(transaction)
                .expect("Could not append transaction.");
        }
    }
}
