//! tf2rke state extraction
//!
//! Reads a Terraform state document, flattens the outputs of every module into a
//! single table, and selects the node address lists published for each RKE role.

pub mod errors;
pub mod extract;
pub mod output_table;
pub mod types;

pub use errors::StateError;
pub use extract::{
    extract, extract_from_path, parse_state_str, read_state, RoleLists, CONTROL_PLANE_OUTPUT,
    ETCD_OUTPUT, RECOGNIZED_OUTPUTS, WORKER_OUTPUT,
};
pub use output_table::OutputTable;
pub use types::{ModuleState, OutputRecord, OutputValue, StateDocument};
