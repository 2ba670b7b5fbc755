//! Conversion of rendered markup into nodes of a host document.
//!
//! The crate does not parse HTML itself; a [`DomHost`] supplies the parsing.

/// A document environment that can turn markup into live nodes.
pub trait DomHost {
    /// The node type of the host document.
    type Node;

    /// Parse `markup` as a fragment and return its top-level nodes in order.
    fn parse_fragment(&self, markup: &str) -> Vec<Self::Node>;
}

/// Parse `markup` with `host` and return the first top-level node, if any.
pub fn to_dom_node<H: DomHost>(host: &H, markup: &str) -> Option<H::Node> {
    host.parse_fragment(markup).into_iter().next()
}
