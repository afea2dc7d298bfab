//! Converts Euclidean-2D TSP instance files into self-contained JSON graph
//! documents.
//!
//! Consumers typically want to:
//! - parse the `NODE_COORD_SECTION` of a EUC_2D instance into nodes,
//! - materialize the complete directed edge set with Euclidean weights,
//! - serialize the result as a single-key JSON document,
//! - run the above over many files at once via the batch layer.
//!
//! Parsing and graph building are pure; file reading, document writing, and
//! directory scanning live in the batch layer around them.
//!
//! # Quickstart
//!
//! ```
//! use tsp_graph_core::convert_instance_text;
//!
//! fn main() -> tsp_graph_core::Result<()> {
//!     let graph = convert_instance_text(
//!         "NODE_COORD_SECTION\n1 0.0 0.0\n2 3.0 0.0\n3 0.0 4.0\nEOF\n",
//!     )?;
//!
//!     assert_eq!(graph.node_count(), 3);
//!     assert_eq!(graph.edge_count(), 6);
//!     assert_eq!(graph.edges[0].weight, 3.0);
//!     Ok(())
//! }
//! ```

mod convert;
mod document;
mod error;
mod graph;
mod instance;
pub mod logging;
mod node;
mod options;

pub use convert::{BatchSummary, convert_batch, convert_instance_file, convert_instance_text};
pub use document::GraphDocument;
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use instance::parse_node_coords;
pub use node::Node;
pub use options::{ConverterOptions, LogFormat, LogLevel};
