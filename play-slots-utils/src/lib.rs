pub mod fs_toml_util;
pub mod macros;
