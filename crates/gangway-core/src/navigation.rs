//! Path navigation: resolve against the route table, follow redirects, and
//! evaluate guards ancestor-first with short-circuit on the first denial.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::guard::{CapabilityRef, Decision, PermissionEvaluator};
use crate::routing::{PageId, Resolution, RouteTable};

/// Redirect hops followed before a path is treated as a miss.
const MAX_REDIRECT_HOPS: usize = 8;

/// Terminal outcome of a navigation. Misses and denials are contained
/// views; they never propagate as errors to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Page {
        page_id: PageId,
        params: BTreeMap<String, String>,
    },
    NotFound,
    AccessDenied {
        capability: CapabilityRef,
    },
}

/// Drives route resolution and guard evaluation against the immutable
/// route table.
pub struct Navigator {
    table: Arc<RouteTable>,
    permissions: Arc<dyn PermissionEvaluator>,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, permissions: Arc<dyn PermissionEvaluator>) -> Self {
        Self { table, permissions }
    }

    /// Resolve a request path to its terminal view. A denied ancestor guard
    /// means descendant guards are never evaluated.
    pub async fn navigate(&self, path: &str) -> NavigationOutcome {
        let mut current = path.to_string();
        for _ in 0..=MAX_REDIRECT_HOPS {
            match self.table.resolve(&current) {
                Resolution::Redirect(to) => {
                    debug!(from = %current, to = %to, "following redirect");
                    current = to;
                }
                Resolution::NotFound => return NavigationOutcome::NotFound,
                Resolution::Match(matched) => {
                    for capability in &matched.guards {
                        if self.permissions.evaluate(capability).await == Decision::Deny {
                            debug!(%capability, path, "guard denied navigation");
                            return NavigationOutcome::AccessDenied {
                                capability: capability.clone(),
                            };
                        }
                    }
                    return NavigationOutcome::Page {
                        page_id: matched.page_id,
                        params: matched.params,
                    };
                }
            }
        }
        debug!(path, "redirect hop limit exceeded");
        NavigationOutcome::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::AllowAll;
    use crate::routing::{RouteEntry, RouteTableBuilder};
    use async_trait::async_trait;
    use std::collections::BTreeMap as Map;
    use std::sync::Mutex;

    /// Denies a fixed set of capabilities and counts every evaluation.
    struct CountingEvaluator {
        denied: Vec<CapabilityRef>,
        calls: Mutex<Map<String, usize>>,
    }

    impl CountingEvaluator {
        fn denying(denied: &[&str]) -> Self {
            Self {
                denied: denied.iter().map(|c| CapabilityRef::new(*c)).collect(),
                calls: Mutex::new(Map::new()),
            }
        }

        fn calls_for(&self, capability: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .get(capability)
                .copied()
                .unwrap_or(0)
        }
    }

    #[async_trait]
    impl PermissionEvaluator for CountingEvaluator {
        async fn evaluate(&self, capability: &CapabilityRef) -> Decision {
            *self
                .calls
                .lock()
                .unwrap()
                .entry(capability.as_str().to_string())
                .or_insert(0) += 1;
            if self.denied.contains(capability) {
                Decision::Deny
            } else {
                Decision::Allow
            }
        }
    }

    fn guarded_table() -> Arc<RouteTable> {
        Arc::new(
            RouteTableBuilder::new()
                .redirect("/", "/catalog")
                .route(RouteEntry::new("/catalog", "catalog-index"))
                .route(
                    RouteEntry::new("/admin", "admin-home")
                        .guarded("admin.access")
                        .child(RouteEntry::new("/audit", "admin-audit").guarded("admin.audit")),
                )
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn denied_parent_short_circuits_child_guard() {
        let evaluator = Arc::new(CountingEvaluator::denying(&["admin.access"]));
        let navigator = Navigator::new(guarded_table(), evaluator.clone());

        let outcome = navigator.navigate("/admin/audit").await;
        assert_eq!(
            outcome,
            NavigationOutcome::AccessDenied {
                capability: CapabilityRef::new("admin.access"),
            }
        );
        assert_eq!(evaluator.calls_for("admin.access"), 1);
        assert_eq!(evaluator.calls_for("admin.audit"), 0);
    }

    #[tokio::test]
    async fn allowed_guards_evaluate_ancestor_first() {
        let evaluator = Arc::new(CountingEvaluator::denying(&[]));
        let navigator = Navigator::new(guarded_table(), evaluator.clone());

        let outcome = navigator.navigate("/admin/audit").await;
        assert!(matches!(
            outcome,
            NavigationOutcome::Page { ref page_id, .. } if page_id.as_str() == "admin-audit"
        ));
        assert_eq!(evaluator.calls_for("admin.access"), 1);
        assert_eq!(evaluator.calls_for("admin.audit"), 1);
    }

    #[tokio::test]
    async fn root_redirect_lands_on_catalog() {
        let navigator = Navigator::new(guarded_table(), Arc::new(AllowAll));
        let via_redirect = navigator.navigate("/").await;
        let direct = navigator.navigate("/catalog").await;
        assert_eq!(via_redirect, direct);
        assert!(matches!(
            via_redirect,
            NavigationOutcome::Page { ref page_id, .. } if page_id.as_str() == "catalog-index"
        ));
    }

    #[tokio::test]
    async fn miss_is_a_contained_terminal_view() {
        let navigator = Navigator::new(guarded_table(), Arc::new(AllowAll));
        assert_eq!(
            navigator.navigate("/no/such/page").await,
            NavigationOutcome::NotFound
        );
    }
}
