use std::path::PathBuf;

use directories::ProjectDirs;

/// Overrides the data directory (log file lands there).
pub const ENV_DATA: &str = "ESTUDA_DATA";
/// Overrides the config directory.
pub const ENV_CONFIG: &str = "ESTUDA_CONFIG";
/// Log filter when RUST_LOG is unset.
pub const ENV_LOG_LEVEL: &str = "ESTUDA_LOG_LEVEL";

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "estuda", "estuda")
}

pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA) {
        PathBuf::from(dir)
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_CONFIG) {
        PathBuf::from(dir)
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nomes_das_variaveis() {
        assert_eq!(ENV_DATA, "ESTUDA_DATA");
        assert_eq!(ENV_CONFIG, "ESTUDA_CONFIG");
        assert_eq!(ENV_LOG_LEVEL, "ESTUDA_LOG_LEVEL");
    }

    #[test]
    fn test_env_sobrepoe_diretorio_de_dados() {
        std::env::set_var(ENV_DATA, "/tmp/estuda-teste-dados");
        assert_eq!(get_data_dir(), PathBuf::from("/tmp/estuda-teste-dados"));
        std::env::remove_var(ENV_DATA);
    }
}
