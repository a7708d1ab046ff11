pub mod reader;
pub mod writer;

pub use reader::{read_matches, read_table, read_table_from_reader, read_table_from_str, LoadOptions};
pub use writer::{write_club_summary_csv, write_table_csv, write_table_to_writer};
