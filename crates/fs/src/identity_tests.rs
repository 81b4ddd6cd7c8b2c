use super::*;
use std::cell::Cell;

/// Counts how often the wrapped table is consulted.
struct CountingIdentity {
    table: StaticIdentity,
    calls: Cell<usize>,
}

impl IdentityResolver for CountingIdentity {
    fn user_name(&self, uid: u32) -> String {
        self.calls.set(self.calls.get() + 1);
        self.table.user_name(uid)
    }

    fn group_name(&self, gid: u32) -> String {
        self.calls.set(self.calls.get() + 1);
        self.table.group_name(gid)
    }
}

#[test]
fn system_identity_resolves_root() {
    // uid/gid 0 exist on every unix host, but the group may be called
    // "root" or "wheel".
    let sys = SystemIdentity;
    assert_eq!(sys.user_name(0), "root");
    assert!(!sys.group_name(0).is_empty());
}

#[test]
fn system_identity_returns_empty_for_unknown_ids() {
    let sys = SystemIdentity;
    let unlikely = u32::MAX - 7;
    assert_eq!(sys.user_name(unlikely), "");
    assert_eq!(sys.group_name(unlikely), "");
}

#[test]
fn static_identity_lookups() {
    let ids = StaticIdentity::new()
        .with_user(1000, "alice")
        .with_group(100, "users");

    assert_eq!(ids.user_name(1000), "alice");
    assert_eq!(ids.group_name(100), "users");
    assert_eq!(ids.user_name(1), "");
    assert_eq!(ids.group_name(1000), "");
}

#[test]
fn cached_identity_consults_inner_once_per_id() {
    let inner = CountingIdentity {
        table: StaticIdentity::new().with_user(1, "daemon").with_group(2, "bin"),
        calls: Cell::new(0),
    };
    let cached = CachedIdentity::new(&inner);

    for _ in 0..5 {
        assert_eq!(cached.user_name(1), "daemon");
        assert_eq!(cached.group_name(2), "bin");
        assert_eq!(cached.user_name(42), "");
    }

    assert_eq!(inner.calls.get(), 3);
}
