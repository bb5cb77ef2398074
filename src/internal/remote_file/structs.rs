pub mod remote_file_data;
