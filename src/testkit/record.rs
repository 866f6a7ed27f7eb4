//! Builders for history records.
//!
//! Labels are fixed per partition kind; tests distinguish records by
//! amount.

use crate::domain::{Conversion, NewRecord, PartitionKey};

/// A conversion of `amount` in partition `key`.
pub fn conversion(key: PartitionKey, amount: &str) -> Conversion {
    let (from_label, to_label) = match key {
        PartitionKey::Currency => ("USD", "EUR"),
        PartitionKey::Unit(category) => {
            let (from, to) = category.default_pair();
            (from.name, to.name)
        }
    };
    Conversion {
        partition: key,
        from_amount: amount.to_string(),
        from_label: from_label.to_string(),
        to_amount: amount.to_string(),
        to_label: to_label.to_string(),
    }
}

/// A [`NewRecord`] of `amount` created at `created_at_ms`.
pub fn new_record(key: PartitionKey, amount: &str, created_at_ms: i64) -> NewRecord {
    NewRecord {
        conversion: conversion(key, amount),
        created_at_ms,
    }
}
