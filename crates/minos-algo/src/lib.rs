//! # minos-algo
//!
//! Algorithm layer of the Minos analytics engine.
//!
//! Runs over the immutable dense snapshot built by `minos-graph`:
//! - **Shortest paths** — single-source label-setting relaxation over a
//!   min-priority frontier ([`shortest_paths::shortest_paths`])
//! - **Strongly connected components** — multi-step trim + forward/backward
//!   partition with parallel region recursion ([`scc::multistep_scc`])
//! - **Timed results** — staged builders freezing load/compute/write
//!   timings with the algorithm payload ([`results`])
//! - **Engine entry points** — full load→compute→write flows with an
//!   injected write-back sink ([`engine`])

pub mod engine;
pub mod results;
pub mod scc;
pub mod shortest_paths;
pub mod sink;

pub use engine::{run_scc, run_shortest_paths};
pub use results::{SccResult, SccResultBuilder, ShortestPathsResult, ShortestPathsResultBuilder};
pub use scc::{multistep_scc, SccPartition};
pub use shortest_paths::{shortest_paths, ShortestPaths};
pub use sink::{DiscardSink, ResultSink};
