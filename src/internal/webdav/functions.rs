pub mod classify_responses;
pub mod get_folder_raw_data;
