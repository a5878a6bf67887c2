//! Route-chain title resolution.
//!
//! A navigation delivers the matched route chain ordered root → leaf. The
//! deepest route declaring a title wins; a chain carrying an inherit marker
//! anywhere leaves the currently displayed title alone (used by layout
//! routes whose children manage the title themselves).

/// One matched record in a route chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteEntry {
    /// Title declared on this route, if any.
    pub title: Option<String>,
    /// Marker: navigating into this route must not change the displayed
    /// title.
    pub inherit_title: bool,
}

impl RouteEntry {
    /// A route declaring `title`.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            inherit_title: false,
        }
    }

    /// A route declaring no title of its own.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// A route that inherits whatever title is currently displayed.
    pub fn inherit() -> Self {
        Self {
            title: None,
            inherit_title: true,
        }
    }
}

/// Outcome of resolving a matched route chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTitle {
    /// Keep the currently displayed title; the navigation is a no-op.
    Inherit,
    /// Apply this value. `None` means no route in the chain declared a
    /// title and the fallback will be shown.
    Declared(Option<String>),
}

/// Resolve the title for a matched route chain (root → leaf order).
///
/// Any inherit marker in the chain wins over every declared title; otherwise
/// the most specific (deepest) declaration is used.
pub fn resolve_route_title(chain: &[RouteEntry]) -> RouteTitle {
    if chain.iter().any(|route| route.inherit_title) {
        return RouteTitle::Inherit;
    }

    let title = chain.iter().rev().find_map(|route| route.title.clone());
    RouteTitle::Declared(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deepest_declared_title_wins() {
        let chain = vec![RouteEntry::titled("Parent"), RouteEntry::titled("Child")];
        assert_eq!(
            resolve_route_title(&chain),
            RouteTitle::Declared(Some("Child".to_string()))
        );
    }

    #[test]
    fn test_parent_title_applies_when_leaf_is_untitled() {
        let chain = vec![RouteEntry::titled("Parent"), RouteEntry::untitled()];
        assert_eq!(
            resolve_route_title(&chain),
            RouteTitle::Declared(Some("Parent".to_string()))
        );
    }

    #[test]
    fn test_chain_without_titles_resolves_to_none() {
        let chain = vec![RouteEntry::untitled(), RouteEntry::untitled()];
        assert_eq!(resolve_route_title(&chain), RouteTitle::Declared(None));
    }

    #[test]
    fn test_empty_chain_resolves_to_none() {
        assert_eq!(resolve_route_title(&[]), RouteTitle::Declared(None));
    }

    #[test]
    fn test_inherit_marker_suppresses_the_navigation() {
        let chain = vec![RouteEntry::inherit(), RouteEntry::titled("Child")];
        assert_eq!(resolve_route_title(&chain), RouteTitle::Inherit);
    }

    #[test]
    fn test_inherit_marker_anywhere_in_the_chain_counts() {
        let chain = vec![RouteEntry::titled("Parent"), RouteEntry::inherit()];
        assert_eq!(resolve_route_title(&chain), RouteTitle::Inherit);
    }
}
