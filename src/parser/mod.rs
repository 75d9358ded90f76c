pub mod parser;


pub use parser::{calc_total, parse_line, CartParser, ContentSource, FsSource};
