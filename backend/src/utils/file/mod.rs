mod config_reader;

pub use self::config_reader::*;
