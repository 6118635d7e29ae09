pub mod config;
pub mod files;
pub mod plan_file;

pub use config::{load_config, save_config, AppConfig};
pub use files::{
    atomic_write, config_file, ensure_data_dir, get_data_dir, init_dir_in, input_file, log_file,
    plan_file, report_file,
};
pub use plan_file::{load_input, load_plan, save_input, save_plan};
