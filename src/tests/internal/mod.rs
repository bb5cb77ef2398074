pub mod classify_responses;
pub mod read_folder_operation;
pub mod strip_base_prefix;
