mod log_keys;
mod output_files;
