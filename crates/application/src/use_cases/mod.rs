mod forward_query;

pub use forward_query::ForwardQuery;
