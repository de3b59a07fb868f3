// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Change tracking for message values at the application boundary.
//!
//! Messages themselves are plain data structs. UI and data-binding layers
//! that need mutation notifications wrap a message in [`Tracked`], which
//! fires an owned callback after every update, or diff two snapshots with
//! [`changed_fields`].

use crate::messages::Message;

/// Wraps a message and invokes a callback after each mutation.
///
/// The callback sees the message state after the change was applied. Reads
/// go through [`Tracked::get`] and never fire the callback.
pub struct Tracked<M: Message> {
    inner: M,
    hook: Option<Box<dyn FnMut(&M) + Send>>,
}

impl<M: Message> Tracked<M> {
    /// Wrap a message with no callback attached.
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner, hook: None }
    }

    /// Wrap a message and attach a mutation callback.
    #[must_use]
    pub fn with_hook(inner: M, hook: impl FnMut(&M) + Send + 'static) -> Self {
        Self {
            inner,
            hook: Some(Box::new(hook)),
        }
    }

    /// Attach or replace the mutation callback.
    pub fn set_hook(&mut self, hook: impl FnMut(&M) + Send + 'static) {
        self.hook = Some(Box::new(hook));
    }

    /// Detach the mutation callback.
    pub fn clear_hook(&mut self) {
        self.hook = None;
    }

    /// Read access to the wrapped message.
    #[must_use]
    pub fn get(&self) -> &M {
        &self.inner
    }

    /// Apply a mutation and fire the callback afterwards.
    pub fn update(&mut self, mutate: impl FnOnce(&mut M)) {
        mutate(&mut self.inner);
        if let Some(hook) = self.hook.as_mut() {
            hook(&self.inner);
        }
    }

    /// Replace the whole message and fire the callback.
    pub fn replace(&mut self, inner: M) {
        self.inner = inner;
        if let Some(hook) = self.hook.as_mut() {
            hook(&self.inner);
        }
    }

    /// Unwrap the message, dropping any attached callback.
    #[must_use]
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Message> std::fmt::Debug for Tracked<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracked")
            .field("inner", &self.inner)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

/// Names of the fields whose encoded value differs between two snapshots
/// of the same message type.
///
/// Both snapshots are encoded and compared span by span using the field
/// layout from the message schema, so enum fields and arrays compare by
/// wire representation.
#[must_use]
pub fn changed_fields<M: Message>(before: &M, after: &M) -> Vec<&'static str> {
    let old = before.to_payload();
    let new = after.to_payload();
    let mut changed = Vec::new();
    let mut offset = 0;
    for field in before.spec().fields {
        let span = field.wire_size();
        if old[offset..offset + span] != new[offset..offset + span] {
            changed.push(field.name);
        }
        offset += span;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{Attitude, Heartbeat};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_hook_fires_after_update() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let mut tracked = Tracked::with_hook(Heartbeat::default(), move |hb: &Heartbeat| {
            counter.fetch_add(1, Ordering::SeqCst);
            assert_eq!(hb.custom_mode, 7);
        });
        tracked.update(|hb| hb.custom_mode = 7);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(tracked.get().custom_mode, 7);
    }

    #[test]
    fn test_cleared_hook_is_silent() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let mut tracked = Tracked::with_hook(Heartbeat::default(), move |_: &Heartbeat| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tracked.clear_hook();
        tracked.update(|hb| hb.base_mode = crate::enums::MavModeFlag::new(81));
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_replace_fires_hook() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let mut tracked = Tracked::with_hook(Heartbeat::default(), move |_: &Heartbeat| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut replacement = Heartbeat::default();
        replacement.system_status = crate::enums::MavState::new(4);
        tracked.replace(replacement);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(tracked.into_inner().system_status.raw(), 4);
    }

    #[test]
    fn test_changed_fields_diff() {
        let before = Attitude::default();
        let mut after = before.clone();
        after.roll = 0.5;
        after.yawspeed = -0.25;
        assert_eq!(changed_fields(&before, &after), ["roll", "yawspeed"]);
        assert!(changed_fields(&before, &before).is_empty());
    }
}
