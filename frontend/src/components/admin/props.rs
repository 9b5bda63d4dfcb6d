use yew::prelude::*;

/// Properties for an [`AdminPanel`](super::AdminPanel).
#[derive(Properties, PartialEq, Clone)]
pub struct AdminProps {
    /// Base URL prepended to every request path. Defaults to empty, which
    /// targets the origin the console was served from.
    #[prop_or_default]
    pub base: AttrValue,
}
