mod results;
mod template;
pub mod vocab;

pub use results::{parse_ask, parse_select, QueryBinding};
pub use template::{PreparedQuery, QueryTemplate};
