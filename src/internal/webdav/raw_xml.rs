pub mod raw_file;
