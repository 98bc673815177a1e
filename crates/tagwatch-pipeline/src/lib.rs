//! One compliance run: load config, fetch the catalog, evaluate tags,
//! notify, and summarise.

pub mod error;
pub mod response;
pub mod run;
pub mod state;

pub use error::RunError;
pub use response::{CheckFailure, CheckResponse};
pub use run::{process_env, run_compliance_check, EnvLookup, RunReport};
pub use state::RunState;
