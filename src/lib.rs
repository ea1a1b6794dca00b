pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod sonarqube_client;

pub use config::SonarConfig;
pub use error::{ConfigError, SessionError, SonarQubeError};
pub use models::{IssueRecord, MetricsAggregate};
pub use session::{HttpResponse, HttpSession, ReqwestSession};
pub use sonarqube_client::SonarQubeClient;
