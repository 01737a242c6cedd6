mod loader;
mod model;

pub use loader::{LOCAL_CONFIG_NAME, REPO_ROOT_ENV, default_config_toml, load, load_from_path};
pub use model::{
    Config, RepositoryConfig, SearchConfig, SemanticConfig, ServerConfig, TodoConfig,
};
