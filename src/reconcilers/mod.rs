//! Reconciliation of Kubernetes secrets through kubectl

pub mod secret;
