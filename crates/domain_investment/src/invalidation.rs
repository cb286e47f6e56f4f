//! Cache invalidation after an accepted submission

use serde::{Deserialize, Serialize};

/// Client-side cached views derived from server state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachedView {
    /// The wallet balance view
    WalletBalance,
    /// The investor's portfolio summary
    Portfolio,
    /// The investment list
    InvestmentList,
}

impl CachedView {
    /// The views a successful submission invalidates
    ///
    /// This is the only cross-cutting side effect the submission flow
    /// performs; everything else is a pure state change.
    pub fn invalidated_on_success() -> Vec<CachedView> {
        vec![
            CachedView::WalletBalance,
            CachedView::Portfolio,
            CachedView::InvestmentList,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_invalidates_all_three_views() {
        let views = CachedView::invalidated_on_success();
        assert!(views.contains(&CachedView::WalletBalance));
        assert!(views.contains(&CachedView::Portfolio));
        assert!(views.contains(&CachedView::InvestmentList));
        assert_eq!(views.len(), 3);
    }
}
