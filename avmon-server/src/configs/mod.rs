mod settings;

pub use settings::{Logger, Server, Settings, Upstream};
