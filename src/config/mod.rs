pub mod options;

pub use options::{
    default_config_path, load_options, options_from_toml_str, read_options, TrackerOptions,
    CONFIG_PATH_ENV,
};
