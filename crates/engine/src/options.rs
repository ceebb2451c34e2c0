use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Bare total on stdout
    #[default]
    Plain,
    Json,
    Yaml,
}
