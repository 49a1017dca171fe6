mod config;
pub use config::{Config, GlobalConfig};

mod machine;
pub use machine::{MachineSpec, PortForward};

mod machines;
pub use machines::MachineCollection;

mod project;
pub use project::{home_dir, Project, DEFAULT_SSH_PUB_KEY_PATH};

pub mod experimental;
pub use experimental::{enabled_features, is_disks_enabled};

pub mod gitconfig;
pub use gitconfig::propagate_gitconfig;

pub mod ssh;
pub use ssh::{render_ssh_config, resolve_pub_key, write_ssh_config, PubKey};

mod error;
pub use error::Error;

mod result;
pub use result::Result;
