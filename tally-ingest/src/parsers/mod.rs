pub mod statement_csv;
